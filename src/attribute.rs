use std::io::Write;

use crate::entity::serialize_entities;
use crate::error::Error;

/// The attributes of a [`Node`](crate::Node).
///
/// Attributes are kept in insertion order. Duplicate names are allowed;
/// lookup returns the first match.
///
/// ```rust
/// use smallxml::Attributes;
///
/// let mut attributes = Attributes::new();
/// attributes.add("a", "1");
/// attributes.add("a", "2");
/// assert_eq!(attributes.find("a"), Some("1"));
/// assert_eq!(attributes.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    /// Create an empty attribute store.
    pub fn new() -> Self {
        Attributes(Vec::new())
    }

    /// Append an attribute. Existing attributes with the same name are kept.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// The value of the first attribute called `name`.
    pub fn find(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    /// Is there an attribute called `name`?
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// The number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Write ` name="value"` for every attribute, values escaped.
    pub(crate) fn serialize(&self, w: &mut impl Write) -> Result<(), Error> {
        for (name, value) in &self.0 {
            write!(w, " {}=\"{}\"", name, serialize_entities(value.into()))?;
        }
        Ok(())
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Attributes(
            iter.into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_first_match() {
        let attributes: Attributes = [("x", "1"), ("y", "2"), ("x", "3")].into_iter().collect();
        assert_eq!(attributes.find("x"), Some("1"));
        assert_eq!(attributes.find("y"), Some("2"));
        assert_eq!(attributes.find("z"), None);
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let mut attributes = Attributes::new();
        attributes.add("Name", "a");
        assert!(attributes.find("name").is_none());
        assert!(attributes.contains("Name"));
    }

    #[test]
    fn test_serialize_in_insertion_order() {
        let mut attributes = Attributes::new();
        attributes.add("b", "1");
        attributes.add("a", "x<y");
        let mut buf = Vec::new();
        attributes.serialize(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), r#" b="1" a="x&lt;y""#);
    }

    #[test]
    fn test_serialize_empty() {
        let mut buf = Vec::new();
        Attributes::new().serialize(&mut buf).unwrap();
        assert!(buf.is_empty());
    }
}
