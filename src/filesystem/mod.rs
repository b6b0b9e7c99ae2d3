//! In-memory directory hierarchy.
//!
//! The tree holds directories only. Every node owns its children and keeps
//! them in insertion order; parents are never referenced from below, they are
//! found again by walking from the root.

mod node;
pub mod path;
mod tree;

pub use node::DirectoryNode;
pub use tree::{DirectoryTree, Operation, TreeError};
