//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::filter::LevelFilter;

/// Log level options for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::OFF,
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "frosted-glass")]
#[command(about = "Generate the Frosted Glass dashboard theme from two seed colors")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute (defaults to `generate`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file path
    #[arg(short = 'C', long, global = true, default_value = "frosted-glass.toml")]
    pub config: PathBuf,

    /// Themes directory (overrides the config file)
    #[arg(long, global = true)]
    pub themes_dir: Option<PathBuf>,

    /// Log level; `RUST_LOG` takes precedence when set
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Shortcut for `--log-level=debug`
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Effective default log level.
    #[must_use]
    pub fn level(&self) -> LevelFilter {
        match (self.log_level, self.verbose) {
            (Some(level), _) => level.into(),
            (None, true) => LevelFilter::DEBUG,
            (None, false) => LevelFilter::INFO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Subcommand)]
pub enum Command {
    /// Generate every theme variant from the stored options
    #[default]
    Generate,

    /// Restore default colors and backgrounds, then generate
    Reset,

    /// Print the tonal palette for a seed color
    Palette {
        /// Seed as "R, G, B" or "#RRGGBB"
        color: String,
    },

    /// List template variants and their output files
    Variants,
}
