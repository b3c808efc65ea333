use std::io::Read;
use std::mem::take;

use log::{debug, trace};

use crate::entity::decode_entity;
use crate::error::Error;
use crate::node::Node;
use crate::reader::PushbackReader;

/// Options for [`Parser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// How deep elements may be nested. Each nested element is parsed by a
    /// recursive call, so this bounds stack use.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions { max_depth: 1024 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outside any element, looking for `<`.
    Pre,
    /// Collecting element text.
    Text,
    /// Collecting an entity name after `&`.
    Entity,
    /// Collecting a tag name after `<`.
    OpenTag,
    /// Collecting a tag name after `</`.
    CloseTag,
    /// Just seen `<`.
    StartTag,
    AttributeLvalue,
    AttributeEqual,
    AttributeRvalue,
    /// Inside a quoted attribute value.
    Quote,
    /// Inside a start tag, between attributes.
    InTag,
    /// Seen `/` in a start tag, expecting `>`.
    SingleTag,
    Comment,
    /// The element is closed; ends this invocation.
    Done,
    /// Skipping `<!DOCTYPE ...>` or `<?...?>`.
    Doctype,
    Cdata,
}

/// Parses XML text into a [`Node`] tree.
///
/// ```rust
/// use smallxml::Parser;
///
/// let xml = r#"<root><a x="1">hi</a></root>"#;
/// let root = Parser::new(xml.as_bytes()).parse()?;
/// assert_eq!(root.name(), Some("root"));
/// let a = root.element(0).unwrap();
/// assert_eq!(a.attribute("x"), Some("1"));
/// assert_eq!(a.value(), Some("hi"));
/// # Ok::<(), smallxml::Error>(())
/// ```
pub struct Parser<R: Read> {
    reader: PushbackReader<R>,
    history: Vec<State>,
    options: ParseOptions,
}

impl<R: Read> Parser<R> {
    /// Create a parser reading from `inner` with default options.
    pub fn new(inner: R) -> Self {
        Self::with_options(inner, ParseOptions::default())
    }

    /// Create a parser reading from `inner` with the given options.
    pub fn with_options(inner: R, options: ParseOptions) -> Self {
        Parser {
            reader: PushbackReader::new(inner),
            history: Vec::new(),
            options,
        }
    }

    /// Parse the document element and everything in it.
    ///
    /// Input after the close of the document element is not read.
    pub fn parse(mut self) -> Result<Node, Error> {
        let mut root = Node::default();
        self.parse_element(&mut root, 1)?;
        debug!(
            "parsed document <{}> ending at {}",
            root.name().unwrap_or_default(),
            self.reader.position()
        );
        Ok(root)
    }

    // The state to resume after `<`, `>`, or an entity. Never pops entries
    // that belong to an enclosing element.
    fn pop_state(&mut self, floor: usize) -> State {
        if self.history.len() > floor {
            if let Some(state) = self.history.pop() {
                return state;
            }
        }
        State::Pre
    }

    // Resume after a comment, CDATA section or doctype. Text before the
    // first tag is skipped.
    fn resume(&mut self, floor: usize, node: &Node) -> State {
        match self.pop_state(floor) {
            State::Text if node.name.is_none() => State::Pre,
            state => state,
        }
    }

    /// Parse one element into `node`: its start tag, its content and its end
    /// tag. Nested elements are parsed by recursing into a new child.
    fn parse_element(&mut self, node: &mut Node, depth: usize) -> Result<(), Error> {
        if depth > self.options.max_depth {
            return Err(Error::DepthLimitExceeded {
                depth: self.options.max_depth,
                position: self.reader.position(),
            });
        }
        let floor = self.history.len();
        let mut state = State::Pre;
        let mut text = String::new();
        let mut entity = String::new();
        let mut attribute_name = String::new();
        let mut quote = '"';

        while state != State::Done {
            let Some(c) = self.reader.read()? else {
                return Err(Error::UnclosedElement {
                    position: self.reader.position(),
                });
            };
            match state {
                State::Pre => {
                    if c == '<' {
                        self.history.push(State::Text);
                        state = State::StartTag;
                    }
                }
                State::Text => match c {
                    '<' => {
                        if !text.is_empty() {
                            node.append_value(&take(&mut text))?;
                        }
                        self.history.push(State::Text);
                        state = State::StartTag;
                    }
                    '&' => {
                        self.history.push(State::Text);
                        entity.clear();
                        state = State::Entity;
                    }
                    c if c.is_whitespace() && text.is_empty() => {}
                    c => text.push(c),
                },
                State::StartTag => {
                    let resumed = self.pop_state(floor);
                    match c {
                        '/' => {
                            self.history.push(resumed);
                            state = State::CloseTag;
                        }
                        '?' => {
                            self.history.push(resumed);
                            state = State::Doctype;
                        }
                        '!' => {
                            self.history.push(resumed);
                            text.push(c);
                            state = State::OpenTag;
                        }
                        c if node.name.is_some() => {
                            // a nested element: hand `<` and its first
                            // character to the child's invocation
                            self.reader.unread(c);
                            self.reader.unread('<');
                            state = resumed;
                            let child = node.add_element()?;
                            self.parse_element(child, depth + 1)?;
                        }
                        c => {
                            self.history.push(resumed);
                            text.push(c);
                            state = State::OpenTag;
                        }
                    }
                }
                State::OpenTag => match c {
                    '-' if text == "!-" => {
                        text.clear();
                        state = State::Comment;
                    }
                    '[' if text == "![CDATA" => {
                        text.clear();
                        state = State::Cdata;
                    }
                    'E' if text == "!DOCTYP" => {
                        text.clear();
                        state = State::Doctype;
                    }
                    c if (c == '>' || c == '/' || c.is_whitespace()) && text.starts_with('!') => {
                        return Err(Error::UnsupportedMarkup {
                            markup: text,
                            position: self.reader.position(),
                        });
                    }
                    '>' => {
                        node.name = Some(take(&mut text));
                        state = self.pop_state(floor);
                    }
                    '/' => {
                        state = State::SingleTag;
                    }
                    c if c.is_whitespace() => {
                        node.name = Some(take(&mut text));
                        state = State::InTag;
                    }
                    c => text.push(c),
                },
                State::CloseTag => {
                    if c == '>' {
                        let found = take(&mut text);
                        if node.name.as_deref() != Some(found.as_str()) {
                            return Err(Error::MismatchedCloseTag {
                                expected: node.name.clone().unwrap_or_default(),
                                found,
                                position: self.reader.position(),
                            });
                        }
                        self.pop_state(floor);
                        state = State::Done;
                    } else {
                        text.push(c);
                    }
                }
                State::SingleTag => {
                    if node.name.is_none() {
                        node.name = Some(take(&mut text));
                    }
                    if c != '>' {
                        return Err(Error::ExpectedTagEnd {
                            name: node.name.clone().unwrap_or_default(),
                            position: self.reader.position(),
                        });
                    }
                    self.pop_state(floor);
                    state = State::Done;
                }
                State::InTag => match c {
                    '>' => state = self.pop_state(floor),
                    '/' => state = State::SingleTag,
                    c if c.is_whitespace() => {}
                    c => {
                        text.push(c);
                        state = State::AttributeLvalue;
                    }
                },
                State::AttributeLvalue => match c {
                    '=' => {
                        attribute_name = take(&mut text);
                        state = State::AttributeRvalue;
                    }
                    '>' | '/' => {
                        return Err(Error::InvalidAttribute {
                            position: self.reader.position(),
                        });
                    }
                    c if c.is_whitespace() => {
                        attribute_name = take(&mut text);
                        state = State::AttributeEqual;
                    }
                    c => text.push(c),
                },
                State::AttributeEqual => match c {
                    '=' => state = State::AttributeRvalue,
                    c if c.is_whitespace() => {}
                    _ => {
                        return Err(Error::InvalidAttribute {
                            position: self.reader.position(),
                        });
                    }
                },
                State::AttributeRvalue => match c {
                    '"' | '\'' => {
                        quote = c;
                        state = State::Quote;
                    }
                    c if c.is_whitespace() => {}
                    _ => {
                        return Err(Error::InvalidAttribute {
                            position: self.reader.position(),
                        });
                    }
                },
                State::Quote => match c {
                    c if c == quote => {
                        node.attributes
                            .add(take(&mut attribute_name), take(&mut text));
                        state = State::InTag;
                    }
                    ' ' | '\n' | '\t' | '\r' => text.push(' '),
                    '&' => {
                        self.history.push(State::Quote);
                        entity.clear();
                        state = State::Entity;
                    }
                    c => text.push(c),
                },
                State::Entity => {
                    if c != ';' {
                        entity.push(c);
                        continue;
                    }
                    state = self.pop_state(floor);
                    match decode_entity(&entity) {
                        Some(Some(decoded)) => text.push(decoded),
                        Some(None) => {
                            return Err(Error::InvalidCharacterReference {
                                reference: entity,
                                position: self.reader.position(),
                            });
                        }
                        None => {
                            return Err(Error::UnknownEntity {
                                entity,
                                position: self.reader.position(),
                            });
                        }
                    }
                    entity.clear();
                }
                State::Comment => {
                    if c == '>' && text.ends_with("--") {
                        text.clear();
                        state = self.resume(floor, node);
                    } else {
                        text.push(c);
                    }
                }
                State::Cdata => {
                    if c == '>' && text.ends_with("]]") {
                        text.truncate(text.len() - 2);
                        if node.name.is_some() {
                            node.append_value(&text)?;
                        }
                        text.clear();
                        state = self.resume(floor, node);
                    } else {
                        text.push(c);
                    }
                }
                State::Doctype => {
                    if c == '>' {
                        state = self.resume(floor, node);
                    }
                }
                State::Done => unreachable!(),
            }
        }

        self.history.truncate(floor);
        trace!(
            "parsed <{}> at depth {}",
            node.name().unwrap_or_default(),
            depth
        );
        Ok(())
    }
}

/// Parse a string into a [`Node`] tree with default options.
///
/// ```rust
/// let root = smallxml::parse("<r><!-- c --><b/></r>")?;
/// assert_eq!(root.size(), 1);
/// assert!(root.element(0).unwrap().is_empty());
/// # Ok::<(), smallxml::Error>(())
/// ```
pub fn parse(xml: &str) -> Result<Node, Error> {
    Parser::new(xml.as_bytes()).parse()
}

/// Parse XML from a reader into a [`Node`] tree with default options.
pub fn parse_reader<R: Read>(reader: R) -> Result<Node, Error> {
    Parser::new(reader).parse()
}
