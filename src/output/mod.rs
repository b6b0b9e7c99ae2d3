//! Console presentation of command results.

mod console;

pub use console::{Console, Message};
