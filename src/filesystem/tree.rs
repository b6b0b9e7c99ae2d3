use derive_more::Display;
use snafu::{OptionExt, Snafu, ensure};
use tracing::debug;

use crate::filesystem::DirectoryNode;
use crate::filesystem::path::{
    child_exists, last_part_of_path, parent_directory, parent_directory_mut, render_tree,
    split_path, traverse_path, traverse_segments, traverse_segments_mut,
};

/// The tree operation an error is reported against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Operation {
    #[display("CREATE")]
    Create,
    #[display("LIST")]
    List,
    #[display("DELETE")]
    Delete,
    #[display("MOVE")]
    Move,
}

/// In-memory directory hierarchy. The root always exists and can be neither
/// deleted nor moved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectoryTree {
    root: DirectoryNode,
}

impl DirectoryTree {
    pub fn new() -> Self {
        Self {
            root: DirectoryNode::root(),
        }
    }

    pub fn root(&self) -> &DirectoryNode {
        &self.root
    }

    pub fn exists(&self, path: &str) -> bool {
        traverse_path(&self.root, path).is_some()
    }

    /// Creates the last segment of `path`. Every ancestor must already exist.
    pub fn create(&mut self, path: &str) -> Result<(), TreeError> {
        let segments = split_path(path);
        let Some((name, ancestors)) = segments.split_last() else {
            // The root always exists.
            return DirectoryAlreadyExistsSnafu {
                operation: Operation::Create,
                path,
            }
            .fail();
        };

        let parent = traverse_segments_mut(&mut self.root, ancestors).context(
            NoSuchDirectorySnafu {
                operation: Operation::Create,
                path,
            },
        )?;
        ensure!(
            !child_exists(parent, name),
            DirectoryAlreadyExistsSnafu {
                operation: Operation::Create,
                path,
            }
        );

        parent.insert_child(DirectoryNode::new(*name));
        debug!("Created directory '{}'", path);
        Ok(())
    }

    /// Renders the subtree at `path`, one line per directory.
    pub fn list(&self, path: &str) -> Result<String, TreeError> {
        let node = traverse_path(&self.root, path).context(NoSuchDirectorySnafu {
            operation: Operation::List,
            path,
        })?;

        Ok(render_tree(node, 0).join("\n"))
    }

    /// Removes the directory at `path` along with everything below it.
    pub fn delete(&mut self, path: &str) -> Result<(), TreeError> {
        let name = last_part_of_path(path);
        let removed = parent_directory_mut(&mut self.root, path)
            .zip(name)
            .and_then(|(parent, name)| parent.remove_child(name));

        match removed {
            Some(_) => {
                debug!("Deleted directory '{}'", path);
                Ok(())
            }
            None => NoSuchDirectorySnafu {
                operation: Operation::Delete,
                path,
            }
            .fail(),
        }
    }

    /// Relocates the directory at `source`.
    ///
    /// When `destination` names an existing directory the source becomes its
    /// child under the same name. Otherwise the parent of `destination` must
    /// exist, and the source is attached there under the last segment of
    /// `destination`, which renames it. No change is made unless every check
    /// passes.
    pub fn move_directory(&mut self, source: &str, destination: &str) -> Result<(), TreeError> {
        let both = format!("{source} {destination}");
        let source_segments = split_path(source);
        let destination_segments = split_path(destination);

        let source_name = last_part_of_path(source)
            .filter(|name| {
                parent_directory(&self.root, source)
                    .is_some_and(|parent| child_exists(parent, name))
            })
            .context(NoSuchDirectorySnafu {
                operation: Operation::Move,
                path: &both,
            })?;
        ensure!(
            !destination_segments.starts_with(&source_segments),
            MoveIntoOwnSubtreeSnafu { path: both }
        );

        let (target_parent, target_name) =
            match traverse_segments(&self.root, &destination_segments) {
                Some(existing) => {
                    ensure!(
                        !child_exists(existing, source_name),
                        DirectoryAlreadyExistsSnafu {
                            operation: Operation::Move,
                            path: both,
                        }
                    );
                    (destination_segments.as_slice(), source_name)
                }
                None => {
                    let (name, ancestors) = destination_segments
                        .split_last()
                        .filter(|(_, ancestors)| {
                            traverse_segments(&self.root, ancestors).is_some()
                        })
                        .context(NoSuchDirectorySnafu {
                            operation: Operation::Move,
                            path: destination,
                        })?;
                    (ancestors, *name)
                }
            };

        // Both lookups below were checked above, and the target parent lies
        // outside the detached subtree, so neither can miss.
        let mut node = parent_directory_mut(&mut self.root, source)
            .and_then(|parent| parent.remove_child(source_name))
            .context(NoSuchDirectorySnafu {
                operation: Operation::Move,
                path: &both,
            })?;
        node.rename(target_name);
        traverse_segments_mut(&mut self.root, target_parent)
            .context(NoSuchDirectorySnafu {
                operation: Operation::Move,
                path: destination,
            })?
            .insert_child(node);

        debug!("Moved directory '{}' to '{}'", source, destination);
        Ok(())
    }
}

/// Expected failures of tree operations. The display form is the line shown
/// to the user.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum TreeError {
    #[snafu(display("{}_ERROR, {}, No such directory", operation, path))]
    NoSuchDirectory { operation: Operation, path: String },
    #[snafu(display("{}_ERROR, {}, Directory already exists", operation, path))]
    DirectoryAlreadyExists { operation: Operation, path: String },
    #[snafu(display("MOVE_ERROR, {}, Cannot move a directory into itself", path))]
    MoveIntoOwnSubtree { path: String },
}
