use std::io::Write;

use log::debug;

use crate::entity::serialize_text;
use crate::error::Error;
use crate::node::{Content, Node};

const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const GENERATOR_COMMENT: &str = "<!-- generated by smallxml -->";

/// Serialize a tree as an XML document.
///
/// The output starts with an XML declaration and a generator comment, then
/// the elements one per line, each level indented by two spaces. A leaf
/// element is written on a single line.
///
/// ```rust
/// use smallxml::Node;
///
/// let mut root = Node::new("root");
/// root.add_leaf("a", "x & y")?;
/// root.add_named_element("b")?;
///
/// let mut buf = Vec::new();
/// smallxml::serialize(&root, &mut buf)?;
/// assert_eq!(
///     String::from_utf8(buf).unwrap(),
///     concat!(
///         "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
///         "<!-- generated by smallxml -->\n",
///         "<root>\n",
///         "  <a>x &amp; y</a>\n",
///         "  <b/>\n",
///         "</root>\n",
///     )
/// );
/// # Ok::<(), smallxml::Error>(())
/// ```
pub fn serialize(node: &Node, w: &mut impl Write) -> Result<(), Error> {
    writeln!(w, "{}", DECLARATION)?;
    writeln!(w, "{}", GENERATOR_COMMENT)?;
    serialize_node(node, w, 0)?;
    debug!("serialized document <{}>", node.name().unwrap_or_default());
    Ok(())
}

pub(crate) fn serialize_node(node: &Node, w: &mut impl Write, indent: usize) -> Result<(), Error> {
    let name = node.name().ok_or(Error::UnnamedNode)?;
    write!(w, "{:indent$}<{}", "", name, indent = indent)?;
    node.attributes().serialize(w)?;
    match node.content() {
        Content::Empty => writeln!(w, "/>")?,
        Content::Value(value) => {
            writeln!(w, ">{}</{}>", serialize_text(value), name)?;
        }
        Content::Children(children) => {
            writeln!(w, ">")?;
            for child in children {
                serialize_node(child, w, indent + 2)?;
            }
            writeln!(w, "{:indent$}</{}>", "", name, indent = indent)?;
        }
    }
    Ok(())
}

impl Node {
    /// Serialize this node as an XML document into a string.
    pub fn to_xml_string(&self) -> Result<String, Error> {
        let mut buf = Vec::new();
        serialize(self, &mut buf)?;
        // we only ever write UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
