use std::io::Write;
use std::path::PathBuf;

use crate::dict::Engine;
use crate::error::Result;
use crate::loader::load_file;
use crate::model::ReadingScope;
use crate::sources::collect_sources;

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub engine: Engine,
    pub sources: Vec<PathBuf>,
    pub readings: ReadingScope,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub written: usize,
    pub lines: usize,
    // missing a required key
    pub skipped: Vec<PathBuf>,
}

/// Convert every source in `cfg` and write the dictionary to `out`.
///
/// A source missing a required key is logged and skipped. Any other error
/// stops the run; lines already written for earlier sources stay written.
pub fn run_batch<W: Write>(cfg: &BatchConfig, out: &mut W) -> Result<BatchReport> {
    let sources = collect_sources(&cfg.sources)?;
    let mut report = BatchReport::default();

    out.write_all(cfg.engine.byte_order_mark())?;
    for path in &sources {
        tracing::debug!(path = %path.display(), engine = cfg.engine.name(), "loading");
        let record = match load_file(path) {
            Ok(r) => r,
            Err(e) if e.is_recoverable() => {
                tracing::warn!("{e}, skipping");
                report.skipped.push(path.clone());
                continue;
            }
            Err(e) => return Err(e),
        };
        cfg.engine.print_dict(out, &record, cfg.readings)?;
        report.written += 1;
        report.lines += record.line_count(cfg.readings);
    }
    out.flush()?;
    Ok(report)
}
