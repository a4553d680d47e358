//! ajis-lex - Lexical analyzer for AJIS documents.
//!
//! AJIS is a JSON superset: it adds comments, optional thousands separators
//! in numeric literals, base-prefixed integers (`0x`/`0b`/`0o`), and two
//! tagged binary-literal forms (`hex"…"` and `b64"…"`). The lexer turns a
//! UTF-8 byte buffer into a lazy sequence of span-carrying tokens and
//! reports precise diagnostics on failure.
//!
//! The lexer is single-threaded and synchronous; a `Lexer` value is stateful
//! and not meant for concurrent use, but independent lexers over independent
//! buffers are fully independent. It performs no I/O, owns no bytes, and
//! allocates nothing per token.
//!
//! # Example
//!
//! ```
//! use ajis_lex::{Cursor, Lexer, LexerOptions, TokenKind};
//!
//! let source = b"{ \"n\": 1 } // trailing comment";
//! let mut lexer = Lexer::new(Cursor::new(source), LexerOptions::default());
//!
//! let mut kinds = Vec::new();
//! loop {
//!     let token = lexer.next_token().expect("valid input");
//!     if token.is_eof() {
//!         break;
//!     }
//!     kinds.push(token.kind);
//! }
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::LBrace,
//!         TokenKind::String,
//!         TokenKind::Colon,
//!         TokenKind::Number,
//!         TokenKind::RBrace,
//!     ]
//! );
//! ```

pub mod cursor;
mod lexer;
pub mod options;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use cursor::{Cursor, CursorSnapshot};
pub use lexer::Lexer;
pub use options::LexerOptions;
pub use token::{Token, TokenKind};

// Shared with downstream consumers; re-exported so the lexer API is usable
// from this crate alone.
pub use ajis_util::{Diagnostic, ErrorCode, Location, Span};
