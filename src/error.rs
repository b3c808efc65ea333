use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

/// A location in the parsed text.
///
/// Lines start at 1. The column is the number of characters read on the
/// current line, so it points at the character that was read last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: usize,
    /// Column of the last character read on this line.
    pub column: usize,
}

impl Position {
    pub(crate) fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Errors produced by smallxml.
///
/// There are four kinds of error:
///
/// - encoding errors: the input text is not well-formed. These always carry
///   the [`Position`] at which the problem was detected.
/// - tree usage errors: a [`Node`](crate::Node) was used against its
///   value/children rules.
/// - numeric conversion errors: a value could not be read as a number.
/// - I/O errors from the underlying reader or writer, passed through as-is.
#[derive(Debug)]
pub enum Error {
    /// The input ended before the document element was closed.
    UnclosedElement { position: Position },
    /// A close tag does not match the element that is open.
    MismatchedCloseTag {
        expected: String,
        found: String,
        position: Position,
    },
    /// An entity reference `&name;` that is not one of the predefined
    /// entities.
    UnknownEntity { entity: String, position: Position },
    /// A `&#...;` reference that is not a valid decimal character code.
    InvalidCharacterReference {
        reference: String,
        position: Position,
    },
    /// Attribute syntax is broken: missing `=`, missing quotes.
    InvalidAttribute { position: Position },
    /// A `/` in a tag was not directly followed by `>`.
    ExpectedTagEnd { name: String, position: Position },
    /// A `<!` construct that is not a comment, CDATA section or doctype.
    UnsupportedMarkup { markup: String, position: Position },
    /// The input bytes cannot be decoded.
    MalformedInput { position: Position },
    /// Elements are nested deeper than [`ParseOptions::max_depth`](crate::ParseOptions).
    DepthLimitExceeded { depth: usize, position: Position },

    /// A child cannot be added to a node that holds a value.
    NodeHasValue,
    /// A value cannot be set on a node that holds children.
    NodeHasChildren,
    /// The node has no children to search or remove from.
    NoChildren,
    /// A node without a name cannot be serialized.
    UnnamedNode,

    /// The node has no value to convert.
    MissingValue,
    /// The value is not an integer.
    InvalidInt(ParseIntError),
    /// The value is not a floating point number.
    InvalidFloat(ParseFloatError),

    /// I/O error from the underlying reader or writer.
    Io(std::io::Error),
}

impl Error {
    /// The position in the input where an encoding error was detected.
    ///
    /// Returns `None` for errors that are not about the input text.
    pub fn position(&self) -> Option<Position> {
        use Error::*;
        match self {
            UnclosedElement { position }
            | MismatchedCloseTag { position, .. }
            | UnknownEntity { position, .. }
            | InvalidCharacterReference { position, .. }
            | InvalidAttribute { position }
            | ExpectedTagEnd { position, .. }
            | UnsupportedMarkup { position, .. }
            | MalformedInput { position }
            | DepthLimitExceeded { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Is this an error in the input text?
    pub fn is_encoding(&self) -> bool {
        self.position().is_some()
    }

    /// Is this a misuse of the node API?
    pub fn is_tree_usage(&self) -> bool {
        matches!(
            self,
            Error::NodeHasValue | Error::NodeHasChildren | Error::NoChildren | Error::UnnamedNode
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;
        match self {
            UnclosedElement { position } => write!(f, "missing end tag at {}", position),
            MismatchedCloseTag {
                expected,
                found,
                position,
            } => write!(
                f,
                "close tag </{}> does not match <{}> at {}",
                found, expected, position
            ),
            UnknownEntity { entity, position } => {
                write!(f, "unknown entity &{}; at {}", entity, position)
            }
            InvalidCharacterReference {
                reference,
                position,
            } => write!(f, "invalid character reference &{}; at {}", reference, position),
            InvalidAttribute { position } => write!(f, "error in attribute at {}", position),
            ExpectedTagEnd { name, position } => {
                write!(f, "expected > for tag <{}/> at {}", name, position)
            }
            UnsupportedMarkup { markup, position } => {
                write!(f, "unsupported markup <{}> at {}", markup, position)
            }
            MalformedInput { position } => write!(f, "malformed input after {}", position),
            DepthLimitExceeded { depth, position } => {
                write!(f, "elements nested deeper than {} at {}", depth, position)
            }
            NodeHasValue => write!(f, "cannot add a child to a node with a value"),
            NodeHasChildren => write!(f, "cannot set the value of a node with children"),
            NoChildren => write!(f, "node has no children"),
            UnnamedNode => write!(f, "cannot serialize a node without a name"),
            MissingValue => write!(f, "node has no value"),
            InvalidInt(e) => write!(f, "value is not an integer: {}", e),
            InvalidFloat(e) => write!(f, "value is not a number: {}", e),
            Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidInt(e) => Some(e),
            Error::InvalidFloat(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<ParseIntError> for Error {
    #[inline]
    fn from(e: ParseIntError) -> Self {
        Error::InvalidInt(e)
    }
}

impl From<ParseFloatError> for Error {
    #[inline]
    fn from(e: ParseFloatError) -> Self {
        Error::InvalidFloat(e)
    }
}
