use std::path::PathBuf;

use crate::application::data::ColorChoice;
use crate::cli::Cli;
use crate::config::FileConfig;

const DEFAULT_PORT: u16 = 3000;

/// Options taken from the command line and environment, before the config
/// file is consulted.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub port: Option<u16>,
    pub disable_health_check: bool,
    pub color: Option<ColorChoice>,
    pub config_path: Option<PathBuf>,
}

/// The effective settings the application runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub port: u16,
    pub health_check: bool,
    pub color: ColorChoice,
}

impl RuntimeConfig {
    /// Layers these options over the config file, falling back to defaults.
    pub fn merge(self, file: FileConfig) -> Settings {
        Settings {
            port: self.port.or(file.port).unwrap_or(DEFAULT_PORT),
            health_check: !self.disable_health_check && file.health_check.unwrap_or(true),
            color: self.color.or(file.color).unwrap_or_default(),
        }
    }
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            port: cli.port,
            disable_health_check: cli.no_health_check,
            color: cli.color,
            config_path: cli.config,
        }
    }
}
