use compio::runtime::spawn;
use futures::StreamExt;
use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;
use tracing::error;
use tracing::info;

use crate::application::RuntimeConfig;
use crate::application::input::stdin_lines;
use crate::commands::CommandDispatcher;
use crate::config::{ConfigError, FileConfig};
use crate::filesystem::DirectoryTree;
use crate::health::HealthServer;
use crate::output::{Console, Message};

const BANNER: &str = "File System Simulator";
const USAGE: &str = "Enter commands (CREATE, LIST, DELETE, MOVE). One command at a time.";

pub struct Application;

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let file_config = FileConfig::read(app_config.config_path.as_deref())
            .await
            .context(ConfigSnafu)?;
        debug!("Loaded config: {:?}", file_config);

        let settings = app_config.merge(file_config);
        debug!("Effective settings: {:?}", settings);

        if settings.health_check {
            match HealthServer::bind(settings.port).await {
                Ok(server) => {
                    info!("Health check listening on port {}", settings.port);
                    spawn(server.serve()).detach();
                }
                Err(e) => error!("ERR: Server error: {}", e),
            }
        }

        let console = Console::new(settings.color);
        console.print(&Message::Info(BANNER.to_string()));
        console.print(&Message::Info(USAGE.to_string()));

        let mut dispatcher = CommandDispatcher::new(DirectoryTree::new());
        let mut lines = stdin_lines();
        while let Some(line) = lines.next().await {
            let line = line.context(InputSnafu)?;
            if let Some(message) = process_line(&mut dispatcher, &line) {
                console.print(&message);
            }
        }

        info!("Input closed, shutting down");
        Ok(())
    }
}

/// Runs one input line against the tree. Blank lines are skipped.
pub fn process_line(dispatcher: &mut CommandDispatcher, line: &str) -> Option<Message> {
    if line.trim().is_empty() {
        return None;
    }
    Message::from_outcome(dispatcher.dispatch(line))
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered during configuration stage"))]
    ConfigError { source: ConfigError },
    #[snafu(display("Critical failure encountered while reading commands"))]
    InputError { source: std::io::Error },
}
