//! Line-oriented command handling: parsing, argument validation and dispatch
//! onto a [`DirectoryTree`](crate::filesystem::DirectoryTree).

mod command;
mod dispatcher;
mod validation;

pub use command::{Command, CommandError};
pub use dispatcher::{CommandDispatcher, DispatchError};
pub use validation::validate_path;
