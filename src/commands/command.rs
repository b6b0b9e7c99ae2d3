use snafu::{OptionExt, Snafu};

use crate::commands::validate_path;
use crate::filesystem::Operation;

const VALID_COMMANDS: &str = "CREATE, LIST, DELETE, MOVE";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create { path: String },
    /// Lists the root when no path is given.
    List { path: Option<String> },
    Delete { path: String },
    Move { source: String, destination: String },
}

impl Command {
    pub fn operation(&self) -> Operation {
        match self {
            Command::Create { .. } => Operation::Create,
            Command::List { .. } => Operation::List,
            Command::Delete { .. } => Operation::Delete,
            Command::Move { .. } => Operation::Move,
        }
    }
}

fn parse_operation(verb: &str) -> Option<Operation> {
    [
        Operation::Create,
        Operation::List,
        Operation::Delete,
        Operation::Move,
    ]
    .into_iter()
    .find(|operation| operation.to_string().eq_ignore_ascii_case(verb))
}

fn required<'a>(
    arguments: &mut impl Iterator<Item = &'a str>,
    operation: Operation,
    argument: &'static str,
) -> Result<String, CommandError> {
    arguments
        .next()
        .map(str::to_owned)
        .context(MissingPathSnafu {
            operation,
            argument,
        })
}

impl TryFrom<&str> for Command {
    type Error = CommandError;

    /// Parses `VERB arg1 [arg2]`. The verb is case-insensitive and arguments
    /// are separated by whitespace. Every argument is validated as a path
    /// before the command is built; extra arguments are validated and then
    /// ignored.
    fn try_from(line: &str) -> Result<Self, Self::Error> {
        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default();
        let operation = parse_operation(verb).context(InvalidCommandSnafu { verb })?;

        let arguments: Vec<&str> = words.collect();
        for argument in &arguments {
            validate_path(operation, argument)?;
        }

        let mut arguments = arguments.into_iter();
        let command = match operation {
            Operation::Create => Command::Create {
                path: required(&mut arguments, operation, "path")?,
            },
            Operation::List => Command::List {
                path: arguments.next().map(str::to_owned),
            },
            Operation::Delete => Command::Delete {
                path: required(&mut arguments, operation, "path")?,
            },
            Operation::Move => Command::Move {
                source: required(&mut arguments, operation, "source path")?,
                destination: required(&mut arguments, operation, "destination path")?,
            },
        };

        Ok(command)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CommandError {
    #[snafu(display("{}_ERROR, {}, Invalid directory name: {}", operation, path, segment))]
    InvalidPath {
        operation: Operation,
        path: String,
        segment: String,
    },
    #[snafu(display("{}_ERROR, Invalid path: {} must be given", operation, argument))]
    MissingPath {
        operation: Operation,
        argument: &'static str,
    },
    #[snafu(display("ERR, {}, Invalid command: Enter commands ({})", verb, VALID_COMMANDS))]
    InvalidCommand { verb: String },
}
