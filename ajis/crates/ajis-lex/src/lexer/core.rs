//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the per-call dispatch, and
//! the shared error helper the recognizers report through.

use ajis_util::{Diagnostic, ErrorCode, Span};

use crate::cursor::Cursor;
use crate::options::LexerOptions;
use crate::token::{Token, TokenKind};

/// Streaming tokenizer for AJIS input.
///
/// Each call to [`next_token`](Lexer::next_token) skips ignorable input,
/// classifies the next byte, and hands off to a recognizer. On success the
/// token carries a span into the input buffer; on failure the call returns
/// the diagnostic and leaves the cursor at the offset where the error was
/// detected. Failures are terminal for the call: no recovery is attempted
/// and no substitute token is synthesized.
///
/// # Example
///
/// ```
/// use ajis_lex::{Cursor, Lexer, LexerOptions, TokenKind};
///
/// let mut lexer = Lexer::new(Cursor::new(b"{}"), LexerOptions::default());
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::LBrace);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::RBrace);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'a> {
    /// Byte cursor over the input.
    pub(crate) cursor: Cursor<'a>,

    /// Superset feature toggles.
    pub(crate) options: LexerOptions,

    /// Set once the iterator has yielded `Eof` or an error.
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over `cursor` with the given options.
    pub fn new(cursor: Cursor<'a>, options: LexerOptions) -> Self {
        Self {
            cursor,
            options,
            done: false,
        }
    }

    /// Convenience constructor over a raw byte buffer.
    pub fn from_bytes(source: &'a [u8], options: LexerOptions) -> Self {
        Self::new(Cursor::new(source), options)
    }

    /// Returns the next token from the input.
    ///
    /// `Eof` is a normal, repeatable terminal token: once the input is
    /// exhausted every further call returns `Eof` with an empty span at the
    /// buffer length. After an error the cursor stays at the failure point;
    /// callers should surface the diagnostic and stop.
    pub fn next_token(&mut self) -> Result<Token, Diagnostic> {
        self.skip_ignored()?;

        let offset = self.cursor.offset();
        let b = match self.cursor.peek() {
            Some(b) => b,
            None => return Ok(Token::new(TokenKind::Eof, Span::empty(offset))),
        };

        match b {
            b'{' => Ok(self.structural(TokenKind::LBrace)),
            b'}' => Ok(self.structural(TokenKind::RBrace)),
            b'[' => Ok(self.structural(TokenKind::LBracket)),
            b']' => Ok(self.structural(TokenKind::RBracket)),
            b':' => Ok(self.structural(TokenKind::Colon)),
            b',' => Ok(self.structural(TokenKind::Comma)),
            b'"' => self.lex_string(),
            b if b.is_ascii_alphabetic() => {
                // Binary-literal prefixes take priority over keywords, so
                // that `hex"…"` never half-matches an identifier.
                if b == b'h' && self.cursor.remaining().starts_with(b"hex\"") {
                    self.lex_hex_binary()
                } else if b == b'b' && self.cursor.remaining().starts_with(b"b64\"") {
                    self.lex_b64_binary()
                } else {
                    self.lex_keyword()
                }
            }
            b if b.is_ascii_digit() || b == b'-' => self.lex_number(),
            _ => Err(self.error(ErrorCode::InvalidToken, "unexpected byte")),
        }
    }

    /// Returns a reference to the underlying cursor.
    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    /// Returns the options the lexer was built with.
    pub fn options(&self) -> LexerOptions {
        self.options
    }

    /// Emits a single-byte structural token at the current offset.
    fn structural(&mut self, kind: TokenKind) -> Token {
        let offset = self.cursor.offset();
        self.cursor.advance();
        Token::new(kind, Span::new(offset, 1))
    }

    /// Builds a diagnostic at the current cursor position.
    pub(crate) fn error(&self, code: ErrorCode, context: &'static str) -> Diagnostic {
        Diagnostic::new(code, self.cursor.location(), Some(context))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, Diagnostic>;

    /// Yields tokens until `Eof`, which is not yielded itself.
    ///
    /// Errors are terminal: the iterator fuses after the first `Err`, since
    /// the cursor does not advance past the failure point.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(diag) => {
                self.done = true;
                Some(Err(diag))
            }
        }
    }
}
