//! String literal recognition.
//!
//! The emitted span covers the content only: it begins after the opening
//! quote and ends before the closing quote. The recognizer is byte-oriented;
//! bytes at or above 0x80 pass through untouched, and escape sequences are
//! framed but not decoded (semantic decoding belongs to the parser).

use ajis_util::{Diagnostic, ErrorCode, Span};

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

impl Lexer<'_> {
    /// Lexes a string literal. The cursor must sit on the opening quote.
    pub(crate) fn lex_string(&mut self) -> Result<Token, Diagnostic> {
        self.cursor.advance(); // opening quote
        let content_start = self.cursor.offset();

        loop {
            match self.cursor.peek() {
                None => {
                    return Err(self.error(ErrorCode::UnexpectedEof, "unterminated string"));
                }
                Some(b'"') => {
                    let content_end = self.cursor.offset();
                    self.cursor.advance(); // closing quote
                    return Ok(Token::new(
                        TokenKind::String,
                        Span::new(content_start, content_end - content_start),
                    ));
                }
                Some(b'\\') => {
                    // Consume the backslash plus exactly one payload byte.
                    self.cursor.advance();
                    if self.cursor.advance().is_none() {
                        return Err(self.error(ErrorCode::InvalidEscape, "escape at end of input"));
                    }
                }
                Some(b'\n') if !self.options.allow_multiline_strings => {
                    return Err(self.error(ErrorCode::InvalidString, "newline in string"));
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
    }
}
