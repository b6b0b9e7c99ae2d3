//! HTTP liveness endpoint, unrelated to the directory tree.

mod server;

pub use server::{HealthServer, HealthServerError, STATUS_MESSAGE};
