#[allow(clippy::module_inception)]
mod application;
pub mod data;
mod input;
mod runtime_config;

pub use application::{Application, ApplicationError, process_line};
pub use runtime_config::{RuntimeConfig, Settings};
