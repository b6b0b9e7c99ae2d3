use crate::commands::CommandError;
use crate::commands::command::InvalidPathSnafu;
use crate::filesystem::Operation;
use crate::filesystem::path::{is_valid_directory_name, split_path};

/// Checks every segment of `path` against the directory naming rules. The
/// failure is reported against `operation`.
pub fn validate_path(operation: Operation, path: &str) -> Result<(), CommandError> {
    match split_path(path)
        .into_iter()
        .find(|segment| !is_valid_directory_name(segment))
    {
        Some(segment) => InvalidPathSnafu {
            operation,
            path,
            segment,
        }
        .fail(),
        None => Ok(()),
    }
}
