//! Error codes, source locations, and the diagnostic value.
//!
//! The lexer reports failures as a [`Diagnostic`]: a code from the closed
//! [`ErrorCode`] taxonomy, the cursor location at the moment of detection,
//! and an optional static context phrase. There is no diagnostic stack; the
//! first error a call encounters is terminal for that call.

use std::fmt;

use thiserror::Error;

/// A position in the source buffer.
///
/// `line` and `column` are 1-based display coordinates; `offset` is the
/// 0-based byte offset of the next unread byte at the time the location was
/// taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Location {
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
    /// Byte offset (0-based).
    pub offset: usize,
}

impl Location {
    /// Creates a new location.
    #[inline]
    pub const fn new(line: u32, column: u32, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The closed set of error codes the AJIS tooling can report.
///
/// The lexer emits the first eight; the rest are reserved for a downstream
/// parser so that every consumer shares one taxonomy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ErrorCode {
    /// End of input inside a string, block comment, or binary literal.
    #[error("unexpected end of file")]
    UnexpectedEof,
    /// A byte with no valid continuation, or an unknown identifier.
    #[error("invalid token")]
    InvalidToken,
    /// Newline in a single-line string, invalid byte in a binary literal,
    /// or an odd hex digit count.
    #[error("invalid string")]
    InvalidString,
    /// Backslash at end of input.
    #[error("invalid escape sequence")]
    InvalidEscape,
    /// Generic numeric violation: sign, leading zero, grouping, mixed
    /// separators, fraction/exponent misuse.
    #[error("invalid number")]
    InvalidNumber,
    /// Hex-literal-specific grouping or prefix-digit violation.
    #[error("invalid hexadecimal literal")]
    InvalidHex,
    /// Binary-literal-specific grouping or prefix-digit violation.
    #[error("invalid binary literal")]
    InvalidBinary,
    /// End of input inside a block comment.
    #[error("unterminated comment")]
    UnterminatedComment,

    // Reserved for the parser.
    /// Duplicate object key.
    #[error("duplicate key")]
    DuplicateKey,
    /// Missing `:` between key and value.
    #[error("missing colon")]
    MissingColon,
    /// Missing `,` between members.
    #[error("missing comma")]
    MissingComma,
    /// Trailing `,` before a closing bracket.
    #[error("trailing comma")]
    TrailingComma,
    /// Structure that fits no production.
    #[error("invalid syntax")]
    InvalidSyntax,
    /// Character invalid in its position.
    #[error("invalid character")]
    InvalidChar,
    /// Nesting depth limit exceeded.
    #[error("nesting depth limit exceeded")]
    DepthLimit,
    /// Input size limit exceeded.
    #[error("size limit exceeded")]
    SizeLimit,
}

/// A lexing failure: what went wrong, and where.
///
/// `context` points at a static phrase describing the failure site (for
/// example "unterminated block comment"); it never owns memory. The location
/// records the cursor state at detection, which may sit one past the
/// offending construct or at end of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{code} at {location}")]
pub struct Diagnostic {
    /// Categorical error kind.
    pub code: ErrorCode,
    /// Cursor state at the moment of detection.
    pub location: Location,
    /// Short static phrase describing the failure site.
    pub context: Option<&'static str>,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[inline]
    pub const fn new(code: ErrorCode, location: Location, context: Option<&'static str>) -> Self {
        Self {
            code,
            location,
            context,
        }
    }
}
