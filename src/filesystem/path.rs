//! Stateless helpers for slash-delimited paths.
//!
//! Leading, trailing and repeated slashes carry no meaning: `"/a//b/"` and
//! `"a/b"` address the same directory, and both `""` and `"/"` address the root.

use crate::filesystem::DirectoryNode;

const SEPARATOR: char = '/';
const INDENT: &str = "    ";
const MAX_NAME_LENGTH: usize = 255;

pub fn split_path(path: &str) -> Vec<&str> {
    path.split(SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .collect()
}

pub fn traverse_segments<'a>(
    root: &'a DirectoryNode,
    segments: &[&str],
) -> Option<&'a DirectoryNode> {
    segments
        .iter()
        .try_fold(root, |current, segment| current.child(segment))
}

pub fn traverse_segments_mut<'a>(
    root: &'a mut DirectoryNode,
    segments: &[&str],
) -> Option<&'a mut DirectoryNode> {
    segments
        .iter()
        .try_fold(root, |current, segment| current.child_mut(segment))
}

/// Resolves `path` starting at `root`, giving up at the first missing segment.
pub fn traverse_path<'a>(root: &'a DirectoryNode, path: &str) -> Option<&'a DirectoryNode> {
    traverse_segments(root, &split_path(path))
}

/// Resolves everything but the last segment of `path`.
///
/// The root path has no parent, so this returns `None` for it.
pub fn parent_directory<'a>(root: &'a DirectoryNode, path: &str) -> Option<&'a DirectoryNode> {
    let segments = split_path(path);
    let (_, ancestors) = segments.split_last()?;
    traverse_segments(root, ancestors)
}

pub fn parent_directory_mut<'a>(
    root: &'a mut DirectoryNode,
    path: &str,
) -> Option<&'a mut DirectoryNode> {
    let segments = split_path(path);
    let (_, ancestors) = segments.split_last()?;
    traverse_segments_mut(root, ancestors)
}

pub fn last_part_of_path(path: &str) -> Option<&str> {
    split_path(path).last().copied()
}

pub fn child_exists(node: &DirectoryNode, name: &str) -> bool {
    node.has_child(name)
}

/// Only three rules apply: not empty, at most 255 characters, no separator.
pub fn is_valid_directory_name(name: &str) -> bool {
    !name.is_empty() && name.chars().count() <= MAX_NAME_LENGTH && !name.contains(SEPARATOR)
}

/// Renders `node` and its descendants in pre-order, one `name/` line per
/// directory indented by four spaces per level. Nameless nodes (the root)
/// produce no line of their own.
pub fn render_tree(node: &DirectoryNode, depth: usize) -> Vec<String> {
    let mut lines = Vec::new();
    render_into(node, depth, &mut lines);
    lines
}

fn render_into(node: &DirectoryNode, depth: usize, lines: &mut Vec<String>) {
    if !node.name().is_empty() {
        lines.push(format!("{}{}/", INDENT.repeat(depth), node.name()));
    }
    for child in node.children() {
        render_into(child, depth + 1, lines);
    }
}
