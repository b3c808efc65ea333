use std::fmt;

use crate::attribute::Attributes;
use crate::error::Error;

/// What a node holds besides its name and attributes.
///
/// A node holds either nothing, a single text value, or a list of child
/// nodes, never both a value and children.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Content {
    /// No value and no children: `<a/>`.
    #[default]
    Empty,
    /// A leaf with a text value: `<a>text</a>`.
    Value(String),
    /// A branch with child elements: `<a><b/></a>`.
    Children(Vec<Node>),
}

impl Content {
    // Empty text is no value at all: `<a></a>` reads back as `<a/>`.
    pub(crate) fn text(value: String) -> Content {
        if value.is_empty() {
            Content::Empty
        } else {
            Content::Value(value)
        }
    }
}

/// An element in an XML tree.
///
/// A node owns its children and its attributes; dropping the root drops the
/// whole tree.
///
/// ```rust
/// use smallxml::Node;
///
/// let mut root = Node::new("root");
/// root.add_leaf("a", 1)?;
/// root.add_named_element("b")?;
/// assert_eq!(root.size(), 2);
/// assert_eq!(root.element(0).unwrap().value(), Some("1"));
/// assert!(root.value().is_none());
/// # Ok::<(), smallxml::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub(crate) name: Option<String>,
    pub(crate) content: Content,
    pub(crate) attributes: Attributes,
}

impl Node {
    /// Create an empty node with a name.
    pub fn new(name: impl Into<String>) -> Self {
        Node {
            name: Some(name.into()),
            content: Content::Empty,
            attributes: Attributes::new(),
        }
    }

    /// The name of the node. Only nodes created with [`Node::default`] or
    /// [`Node::add_element`] can be without one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Rename the node.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// The value or children of the node.
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// The attributes of the node, in document order.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Mutable access to the attributes, to add new ones.
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// The value of the first attribute called `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.find(name)
    }

    /// The text value of a leaf node.
    ///
    /// `None` if the node has children or no content at all.
    pub fn value(&self) -> Option<&str> {
        match &self.content {
            Content::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Set the text value of the node, replacing any previous value.
    ///
    /// Setting an empty string leaves the node empty, since an empty value
    /// cannot be told apart from no value once serialized.
    ///
    /// Fails with [`Error::NodeHasChildren`] if the node has children.
    pub fn set_value(&mut self, value: impl Into<String>) -> Result<(), Error> {
        if let Content::Children(_) = self.content {
            return Err(Error::NodeHasChildren);
        }
        self.content = Content::text(value.into());
        Ok(())
    }

    // Text interrupted by a comment or CDATA section continues the value.
    pub(crate) fn append_value(&mut self, text: &str) -> Result<(), Error> {
        match &mut self.content {
            Content::Value(value) => {
                value.push_str(text);
                Ok(())
            }
            _ => self.set_value(text),
        }
    }

    /// The value parsed as an integer.
    ///
    /// ```rust
    /// let root = smallxml::parse("<n> 42</n>")?;
    /// assert_eq!(root.value_as_int()?, 42);
    /// # Ok::<(), smallxml::Error>(())
    /// ```
    pub fn value_as_int(&self) -> Result<i64, Error> {
        let value = self.value().ok_or(Error::MissingValue)?;
        Ok(value.trim().parse()?)
    }

    /// The value parsed as a floating point number.
    pub fn value_as_double(&self) -> Result<f64, Error> {
        let value = self.value().ok_or(Error::MissingValue)?;
        Ok(value.trim().parse()?)
    }

    /// The number of children. Leaves and empty nodes have 0.
    pub fn size(&self) -> usize {
        match &self.content {
            Content::Children(children) => children.len(),
            _ => 0,
        }
    }

    /// True if the node holds neither a value nor children.
    pub fn is_empty(&self) -> bool {
        matches!(self.content, Content::Empty)
    }

    /// The child at `index`, or `None` if out of range.
    pub fn element(&self, index: usize) -> Option<&Node> {
        match &self.content {
            Content::Children(children) => children.get(index),
            _ => None,
        }
    }

    /// Mutable access to the child at `index`.
    pub fn element_mut(&mut self, index: usize) -> Option<&mut Node> {
        match &mut self.content {
            Content::Children(children) => children.get_mut(index),
            _ => None,
        }
    }

    /// Iterate over the children in order. Empty for leaves.
    pub fn children(&self) -> std::slice::Iter<'_, Node> {
        self.child_slice().iter()
    }

    pub(crate) fn child_slice(&self) -> &[Node] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}

impl fmt::Display for Node {
    /// The serialized element, without the document preamble.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::new();
        crate::serialize::serialize_node(self, &mut buf, 0).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let node = Node::new("a");
        assert_eq!(node.name(), Some("a"));
        assert!(node.is_empty());
        assert_eq!(node.size(), 0);
        assert!(node.value().is_none());
    }

    #[test]
    fn test_default_has_no_name() {
        let node = Node::default();
        assert!(node.name().is_none());
        assert!(node.is_empty());
    }

    #[test]
    fn test_set_value_replaces() {
        let mut node = Node::new("a");
        node.set_value("one").unwrap();
        node.set_value("two").unwrap();
        assert_eq!(node.value(), Some("two"));
        assert!(!node.is_empty());
    }

    #[test]
    fn test_set_value_on_branch_fails() {
        let mut node = Node::new("a");
        node.add_named_element("b").unwrap();
        assert!(matches!(node.set_value("x"), Err(Error::NodeHasChildren)));
        assert!(node.value().is_none());
        assert_eq!(node.size(), 1);
    }

    #[test]
    fn test_set_empty_value_is_empty() {
        let mut node = Node::new("a");
        node.set_value("x").unwrap();
        node.set_value("").unwrap();
        assert!(node.is_empty());
        assert!(node.value().is_none());
    }

    #[test]
    fn test_append_value() {
        let mut node = Node::new("a");
        node.append_value("x").unwrap();
        node.append_value("y").unwrap();
        assert_eq!(node.value(), Some("xy"));
        node.append_value("").unwrap();
        assert_eq!(node.value(), Some("xy"));
    }

    #[test]
    fn test_value_as_numbers() {
        let mut node = Node::new("n");
        node.set_value("12").unwrap();
        assert_eq!(node.value_as_int().unwrap(), 12);
        assert_eq!(node.value_as_double().unwrap(), 12.0);
        node.set_value("1.5").unwrap();
        assert!(matches!(node.value_as_int(), Err(Error::InvalidInt(_))));
        assert_eq!(node.value_as_double().unwrap(), 1.5);
        node.set_value("abc").unwrap();
        assert!(matches!(node.value_as_double(), Err(Error::InvalidFloat(_))));
    }

    #[test]
    fn test_value_as_int_missing() {
        let node = Node::new("n");
        assert!(matches!(node.value_as_int(), Err(Error::MissingValue)));
        assert!(matches!(node.value_as_double(), Err(Error::MissingValue)));
    }

    #[test]
    fn test_element_out_of_range() {
        let mut node = Node::new("a");
        assert!(node.element(0).is_none());
        node.add_named_element("b").unwrap();
        assert_eq!(node.element(0).and_then(|n| n.name()), Some("b"));
        assert!(node.element(1).is_none());
        assert!(node.element(usize::MAX).is_none());
    }

    #[test]
    fn test_children_of_leaf_is_empty() {
        let mut node = Node::new("a");
        node.set_value("v").unwrap();
        assert_eq!(node.children().count(), 0);
    }
}
