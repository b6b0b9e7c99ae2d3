use hashlink::LinkedHashMap;

/// A single directory in the simulated tree.
///
/// Children are kept in insertion order, which is also the order used when
/// the tree is listed. A node owns its subtree; there is no link back to the
/// parent, parents are found by resolving the path again from the root.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectoryNode {
    name: String,
    children: LinkedHashMap<String, DirectoryNode>,
}

impl DirectoryNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: LinkedHashMap::new(),
        }
    }

    /// The synthetic root. Its name is empty so it never shows up in listings.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> impl Iterator<Item = &DirectoryNode> {
        self.children.values()
    }

    pub fn child(&self, name: &str) -> Option<&DirectoryNode> {
        self.children.get(name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut DirectoryNode> {
        self.children.get_mut(name)
    }

    pub fn has_child(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    /// Appends `child` at the end of the ordering. Callers check for a name
    /// clash first; an existing entry with the same name would be replaced.
    pub fn insert_child(&mut self, child: DirectoryNode) {
        self.children.insert(child.name.clone(), child);
    }

    /// Detaches the named child together with its whole subtree.
    pub fn remove_child(&mut self, name: &str) -> Option<DirectoryNode> {
        self.children.remove(name)
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
