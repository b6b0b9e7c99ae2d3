use snafu::Snafu;
use tracing::debug;

use crate::commands::{Command, CommandError};
use crate::filesystem::{DirectoryTree, TreeError};

const ROOT_PATH: &str = "/";

/// Owns the tree and applies one command line at a time to it.
#[derive(Debug, Default)]
pub struct CommandDispatcher {
    tree: DirectoryTree,
}

impl CommandDispatcher {
    pub fn new(tree: DirectoryTree) -> Self {
        Self { tree }
    }

    pub fn tree(&self) -> &DirectoryTree {
        &self.tree
    }

    /// Parses and runs `line`. Returns the text to show the user, if the
    /// command produces any.
    pub fn dispatch(&mut self, line: &str) -> Result<Option<String>, DispatchError> {
        let command = Command::try_from(line)?;
        self.execute(command)
    }

    pub fn execute(&mut self, command: Command) -> Result<Option<String>, DispatchError> {
        debug!("Executing {} command: {:?}", command.operation(), command);

        match command {
            Command::Create { path } => self.tree.create(&path)?,
            Command::List { path } => {
                let listing = self.tree.list(path.as_deref().unwrap_or(ROOT_PATH))?;
                return Ok(Some(listing));
            }
            Command::Delete { path } => self.tree.delete(&path)?,
            Command::Move {
                source,
                destination,
            } => self.tree.move_directory(&source, &destination)?,
        }

        Ok(None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum DispatchError {
    #[snafu(transparent)]
    Command { source: CommandError },
    #[snafu(transparent)]
    Tree { source: TreeError },
}
