use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Mirror the files attached to your Canvas courses into a local directory.
///
/// Authenticates with your browser's session cookies, read from Chrome's
/// cookie store unless `session.browser`, `session.cookie` or
/// `session.cookie_file` say otherwise. Files that already exist locally are
/// skipped.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Config file (TOML, YAML or JSON)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Directory to download courses into [default: ./courses]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
    /// Only crawl this course, by id or link; may be repeated
    #[arg(long = "course", value_name = "ID_OR_HREF")]
    pub courses: Vec<String>,
    /// More logging (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level used when `RUST_LOG` isn't set.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
