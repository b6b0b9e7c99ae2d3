use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{ColorChoice, LogLevel};

/// Simulates an in-memory directory tree. Reads CREATE, LIST, DELETE and MOVE
/// commands from stdin, one per line.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Cli {
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// Port of the HTTP health check endpoint [default: 3000]
    #[clap(long, short, env = "PORT")]
    pub port: Option<u16>,

    /// Do not start the HTTP health check endpoint
    #[clap(long)]
    pub no_health_check: bool,

    /// When to color output [default: auto]
    #[clap(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// YAML config file [default: ./dirsim.yaml when present]
    #[clap(long, short)]
    pub config: Option<PathBuf>,
}
