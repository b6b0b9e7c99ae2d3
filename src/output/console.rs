use colored::Colorize;

use crate::application::data::ColorChoice;
use crate::commands::DispatchError;

/// A line of user-facing output, tagged by severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Info(String),
    Error(String),
}

impl Message {
    /// Turns the outcome of a dispatched command into something to print.
    /// Commands that succeed silently produce nothing.
    pub fn from_outcome(outcome: Result<Option<String>, DispatchError>) -> Option<Self> {
        match outcome {
            Ok(output) => output.map(Message::Info),
            Err(error) => Some(Message::Error(error.to_string())),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Message::Info(text) | Message::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Message::Error(_))
    }
}

/// Prints messages to stdout, green for information and red for errors.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    colored: bool,
}

impl Console {
    pub fn new(choice: ColorChoice) -> Self {
        let enabled = choice.enabled();
        if enabled {
            colored::control::set_override(true);
        }
        Self { colored: enabled }
    }

    pub fn render(&self, message: &Message) -> String {
        if !self.colored {
            return message.text().to_string();
        }
        match message {
            Message::Info(text) => text.green().to_string(),
            Message::Error(text) => text.red().to_string(),
        }
    }

    pub fn print(&self, message: &Message) {
        println!("{}", self.render(message));
    }
}
