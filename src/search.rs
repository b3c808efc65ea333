use crate::node::Node;

/// Searching the tree.
///
/// All searches walk the descendants of a node depth-first in document
/// order and return the first match. The node the search starts from is
/// never a candidate itself. Names are compared exactly.
impl Node {
    /// The first descendant element called `tag`.
    ///
    /// ```rust
    /// let root = smallxml::parse("<r><b><a/></b><c/></r>")?;
    /// let a = root.find_element("a").unwrap();
    /// assert_eq!(a.name(), Some("a"));
    /// assert!(root.find_element("r").is_none());
    /// # Ok::<(), smallxml::Error>(())
    /// ```
    pub fn find_element(&self, tag: &str) -> Option<&Node> {
        self.find_descendant(&|node| node.name() == Some(tag))
    }

    /// The first descendant that has an attribute called `name`.
    pub fn find_attribute(&self, name: &str) -> Option<&Node> {
        self.find_descendant(&|node| node.attributes.contains(name))
    }

    /// The first descendant called `tag` that has an attribute called
    /// `attribute`.
    pub fn find_element_with_attribute(&self, tag: &str, attribute: &str) -> Option<&Node> {
        self.find_descendant(&|node| {
            node.name() == Some(tag) && node.attributes.contains(attribute)
        })
    }

    fn find_descendant(&self, matches: &dyn Fn(&Node) -> bool) -> Option<&Node> {
        for child in self.children() {
            if matches(child) {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(matches) {
                return Some(found);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Node {
        // <r><b><a x="1"/></b><a y="2"/><c x="3"/></r>
        let mut root = Node::new("r");
        let b = root.add_named_element("b").unwrap();
        b.add_named_element("a")
            .unwrap()
            .attributes_mut()
            .add("x", "1");
        root.add_named_element("a")
            .unwrap()
            .attributes_mut()
            .add("y", "2");
        root.add_named_element("c")
            .unwrap()
            .attributes_mut()
            .add("x", "3");
        root
    }

    #[test]
    fn test_find_element_depth_first() {
        let root = tree();
        let a = root.find_element("a").unwrap();
        assert_eq!(a.attribute("x"), Some("1"));
    }

    #[test]
    fn test_find_element_does_not_match_self() {
        let root = tree();
        assert!(root.find_element("r").is_none());
    }

    #[test]
    fn test_find_element_case_sensitive() {
        let root = tree();
        assert!(root.find_element("A").is_none());
    }

    #[test]
    fn test_find_attribute() {
        let root = tree();
        assert_eq!(root.find_attribute("y").unwrap().name(), Some("a"));
        assert_eq!(root.find_attribute("x").unwrap().attribute("x"), Some("1"));
        assert!(root.find_attribute("z").is_none());
    }

    #[test]
    fn test_find_element_with_attribute() {
        let root = tree();
        let a = root.find_element_with_attribute("a", "y").unwrap();
        assert_eq!(a.attribute("y"), Some("2"));
        let c = root.find_element_with_attribute("c", "x").unwrap();
        assert_eq!(c.attribute("x"), Some("3"));
        assert!(root.find_element_with_attribute("b", "x").is_none());
    }

    #[test]
    fn test_find_in_leaf() {
        let mut node = Node::new("a");
        node.set_value("v").unwrap();
        assert!(node.find_element("a").is_none());
    }
}
