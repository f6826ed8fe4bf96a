//! imedict-core: turns word info JSON into MS-IME and Mozc user dictionaries.
//!
//! `loader` validates a source into a `WordRecord`, `dict` encodes it for an
//! engine and `batch` strings many sources into one output stream.
pub mod batch;
pub mod dict;
pub mod error;
pub mod loader;
pub mod model;
pub mod sources;

pub use batch::{BatchConfig, BatchReport, run_batch};
pub use dict::{Engine, dict_lines};
pub use error::{DictError, Result};
pub use loader::{load_file, load_value};
pub use model::{ReadingScope, WordRecord};
