//! A minimal DOM-style XML library.
//!
//! smallxml reads XML text into a tree of owned [`Node`] values, lets you
//! query and change that tree, and writes it back out as indented XML.
//!
//! ```rust
//! let mut root = smallxml::parse(r#"<root><a x="1">hi</a></root>"#)?;
//! assert_eq!(root.find_element("a").unwrap().value(), Some("hi"));
//!
//! root.add_leaf("b", 2)?;
//! let xml = root.to_xml_string()?;
//! assert!(xml.ends_with("<root>\n  <a x=\"1\">hi</a>\n  <b>2</b>\n</root>\n"));
//! # Ok::<(), smallxml::Error>(())
//! ```
//!
//! Only a subset of XML is supported: elements, attributes in single or
//! double quotes, comments, CDATA sections and the predefined entities plus
//! decimal character references. Declarations and doctypes are skipped.
//! There is no namespace support. An element holds either text or child
//! elements, not both.
#![forbid(unsafe_code)]

mod attribute;
mod entity;
mod error;
mod manipulation;
mod node;
mod parse;
#[cfg(any(test, feature = "proptest"))]
pub mod proptest;
mod reader;
mod search;
mod serialize;

pub use attribute::Attributes;
pub use error::{Error, Position};
pub use node::{Content, Node};
pub use parse::{parse, parse_reader, ParseOptions, Parser};
pub use reader::PushbackReader;
pub use serialize::serialize;
