use crate::domain::constants::{DEFAULT_SITE_ROOT, DEFAULT_VERSION};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sitekeep", version, about = "Static-site frontend maintenance CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = LogLevel::Warn,
        help = "Diagnostic log level on stderr (RUST_LOG overrides)"
    )]
    pub log_level: LogLevel,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report admin/shop index pages still on the legacy stylesheet (read-only)
    Audit {
        #[arg(long, default_value = DEFAULT_SITE_ROOT, help = "Site root containing admin/ and shop/")]
        root: PathBuf,
    },
    /// Rewrite every `?v=N` query parameter in .html files to a new version
    Bump {
        #[arg(default_value = DEFAULT_VERSION, help = "New version token, inserted literally")]
        version: String,
        #[arg(long, help = "Directory to scan [default: directory of the sitekeep executable]")]
        root: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
