//! Proptest support for smallxml
//!
//! Generate arbitrary trees built through the node API, for property tests
//! of your own code that handles [`Node`] trees.
//!
//! This can be enabled by adding the `proptest` feature to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! smallxml = { version = "0.1", features = ["proptest"] }
//! ```
//!
//! See the [`proptest`](https://docs.rs/proptest/latest/proptest/)
//! documentation for more information.

use ahash::HashSet;
use proptest::prelude::*;

use crate::attribute::Attributes;
use crate::node::{Content, Node};

const ELEMENT_NAMES: &[&str] = &["a", "b", "c", "d", "e"];
const ATTRIBUTE_NAMES: &[&str] = &["q", "r", "s"];
const VALUE: &str = "[a-z0-9&<>\"'/! \t\n]{0,12}";
const ATTRIBUTE_VALUE: &str = "[a-z0-9&<>\"'/! ]{0,12}";

fn arb_attributes() -> impl Strategy<Value = Attributes> {
    prop::collection::vec(
        (prop::sample::select(ATTRIBUTE_NAMES), ATTRIBUTE_VALUE),
        0..3,
    )
    .prop_map(|attributes| unduplicate_attributes(&attributes))
}

fn unduplicate_attributes(attributes: &[(&str, String)]) -> Attributes {
    let mut seen = HashSet::default();
    attributes
        .iter()
        .filter(|(name, _)| seen.insert(*name))
        .map(|(name, value)| (*name, value.clone()))
        .collect()
}

fn arb_leaf() -> impl Strategy<Value = Node> {
    (
        prop::sample::select(ELEMENT_NAMES),
        prop::option::of(VALUE),
        arb_attributes(),
    )
        .prop_map(|(name, value, attributes)| Node {
            name: Some(name.to_string()),
            content: value.map(Content::text).unwrap_or_default(),
            attributes,
        })
}

/// Generate a random tree.
///
/// Leaves hold short text values using the characters that need escaping
/// and whitespace; branches hold between one and four children.
///
/// ```notrust
/// use smallxml::proptest::arb_node;
///
/// proptest! {
///   #[test]
///   fn test_serialize_parse(node in arb_node()) {
///     let serialized = node.to_xml_string().unwrap();
///     let parsed = smallxml::parse(&serialized).unwrap();
///     prop_assert_eq!(parsed, node);
///   }
/// }
/// ```
pub fn arb_node() -> impl Strategy<Value = Node> {
    arb_leaf().prop_recursive(
        4,  // levels deep
        64, // maximum size of 64 nodes
        4,  // up to 4 items per collection
        |inner| {
            (
                prop::sample::select(ELEMENT_NAMES),
                prop::collection::vec(inner, 1..5),
                arb_attributes(),
            )
                .prop_map(|(name, children, attributes)| Node {
                    name: Some(name.to_string()),
                    content: Content::Children(children),
                    attributes,
                })
        },
    )
}
