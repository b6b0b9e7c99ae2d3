//! A directory-only file system kept in memory and driven by text commands.
//!
//! [`commands::CommandDispatcher`] is the entry point: feed it lines such as
//! `CREATE fruits/apples` or `MOVE fruits vegetables` and it applies them to
//! its [`filesystem::DirectoryTree`].

#![allow(clippy::enum_variant_names)]

pub mod application;
pub mod cli;
pub mod commands;
pub mod config;
mod ext;
pub mod filesystem;
pub mod health;
pub mod output;
