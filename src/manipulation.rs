use std::fmt::Display;

use crate::error::Error;
use crate::node::{Content, Node};

/// Manipulation of the tree structure.
///
/// A node holds either a value or children. Adding a child to a node with a
/// value fails with [`Error::NodeHasValue`]; the node is left unchanged.
/// Removing the last child turns the node back into an empty node.
impl Node {
    /// Append a child without a name and return it.
    ///
    /// The parser uses this to create a child before its tag has been read.
    pub fn add_element(&mut self) -> Result<&mut Node, Error> {
        self.push_child(Node::default())
    }

    /// Append an empty child called `name` and return it.
    pub fn add_named_element(&mut self, name: impl Into<String>) -> Result<&mut Node, Error> {
        self.push_child(Node::new(name))
    }

    /// Append a leaf child called `name` holding `value` as text.
    ///
    /// A value that formats to an empty string gives an empty child.
    ///
    /// ```rust
    /// use smallxml::Node;
    ///
    /// let mut root = Node::new("config");
    /// root.add_leaf("port", 8080)?;
    /// root.add_leaf("ratio", 0.5)?;
    /// assert_eq!(root.find_element("port").unwrap().value_as_int()?, 8080);
    /// # Ok::<(), smallxml::Error>(())
    /// ```
    pub fn add_leaf(
        &mut self,
        name: impl Into<String>,
        value: impl Display,
    ) -> Result<&mut Node, Error> {
        let mut child = Node::new(name);
        child.content = Content::text(value.to_string());
        self.push_child(child)
    }

    /// Append an existing node as the last child, taking ownership of it.
    pub fn append(&mut self, child: Node) -> Result<&mut Node, Error> {
        self.push_child(child)
    }

    fn push_child(&mut self, child: Node) -> Result<&mut Node, Error> {
        if let Content::Empty = self.content {
            self.content = Content::Children(Vec::new());
        }
        let Content::Children(children) = &mut self.content else {
            return Err(Error::NodeHasValue);
        };
        let index = children.len();
        children.push(child);
        Ok(&mut children[index])
    }

    /// The index of `target` among the direct children.
    ///
    /// Nodes are compared by identity, not by equality: only a reference to
    /// one of this node's own children is found.
    pub fn position(&self, target: &Node) -> Option<usize> {
        self.child_slice()
            .iter()
            .position(|child| std::ptr::eq(child, target))
    }

    /// Is `target` one of the direct children of this node?
    ///
    /// Compares by identity like [`Node::position`]. Fails with
    /// [`Error::NoChildren`] if this node has no children.
    pub fn contains(&self, target: &Node) -> Result<bool, Error> {
        if !matches!(self.content, Content::Children(_)) {
            return Err(Error::NoChildren);
        }
        Ok(self.position(target).is_some())
    }

    /// Remove the child at `index`, returning it.
    ///
    /// Returns `Ok(None)` if there is no such child. Fails with
    /// [`Error::NoChildren`] if this node has no children.
    ///
    /// ```rust
    /// let mut root = smallxml::parse("<r><a/><b/></r>")?;
    /// let b = root.find_element("b").unwrap();
    /// let index = root.position(b).unwrap();
    /// let removed = root.remove_element(index)?.unwrap();
    /// assert_eq!(removed.name(), Some("b"));
    /// assert_eq!(root.size(), 1);
    /// # Ok::<(), smallxml::Error>(())
    /// ```
    pub fn remove_element(&mut self, index: usize) -> Result<Option<Node>, Error> {
        let children = match &mut self.content {
            Content::Children(children) => children,
            _ => return Err(Error::NoChildren),
        };
        if index >= children.len() {
            return Ok(None);
        }
        let removed = children.remove(index);
        if children.is_empty() {
            self.content = Content::Empty;
        }
        Ok(Some(removed))
    }

    /// Remove all children.
    ///
    /// Returns `false` if there were no children to remove.
    pub fn remove_all_elements(&mut self) -> bool {
        if let Content::Children(_) = self.content {
            self.content = Content::Empty;
            true
        } else {
            false
        }
    }
}
