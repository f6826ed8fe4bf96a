use clap::{ArgGroup, Parser};
use imedict_core::{BatchConfig, BatchReport, Engine, ReadingScope};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const FORMAT_HELP: &str = "\
Generates IME dictionary files from word info JSON. Redirect stdout to a file.
Accepted JSON format:
----------------------------------------------------------------
{
    \"word\": [\"word1\", \"word2\", ...],
    \"reading\": [\"reading1\", \"reading2\", ...],
    \"japanese_reading\": [\"reading1\", \"reading2\", ...],
    \"class\": \"word class\",
    \"explanation\": \"explanation\"
}
----------------------------------------------------------------
word, reading and japanese_reading also accept a single string.
explanation is optional.";

#[derive(Parser, Debug)]
#[command(
    name = "imedict",
    about = "Generate MS-IME or Mozc user dictionaries from word info JSON",
    after_help = FORMAT_HELP,
    version
)]
#[command(group(ArgGroup::new("engine").required(true).args(["mozc", "ms"])))]
struct Cli {
    /// Input JSON files, or directories holding them
    #[arg(value_name = "SOURCE_JSON", required = true)]
    sources: Vec<PathBuf>,
    /// Output a dictionary for Mozc / Google Japanese Input
    #[arg(long, short = 'g')]
    mozc: bool,
    /// Output a dictionary for Microsoft IME
    #[arg(long, short = 'm')]
    ms: bool,
    /// Leave japanese_reading out of the dictionary
    #[arg(long, short = 's')]
    without_japanese: bool,
    /// Log each source to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> BatchConfig {
        BatchConfig {
            engine: if self.ms { Engine::Ms } else { Engine::Mozc },
            sources: self.sources,
            readings: if self.without_japanese {
                ReadingScope::ReadingsOnly
            } else {
                ReadingScope::All
            },
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn exit_code(res: &imedict_core::Result<BatchReport>) -> i32 {
    match res {
        Ok(report) if report.skipped.is_empty() => 0,
        Ok(_) => 1,
        Err(_) => 2,
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let cfg = cli.into_config();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let res = imedict_core::run_batch(&cfg, &mut out);
    drop(out);
    match &res {
        Ok(report) => tracing::debug!(
            written = report.written,
            lines = report.lines,
            skipped = report.skipped.len(),
            "done"
        ),
        Err(e) => tracing::error!("{e}"),
    }
    std::process::exit(exit_code(&res));
}
