//! Binary literal recognition: `hex"…"` and `b64"…"`.
//!
//! Unlike plain strings, the emitted spans cover the entire literal: the tag
//! prefix, the opening quote, the payload, and the closing quote. The
//! payload is framed, not decoded; only the alphabet is checked here (plus
//! the even-digit rule for hex). Base64 padding placement is left to the
//! decoder.

use ajis_util::{Diagnostic, ErrorCode, Span};

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

impl Lexer<'_> {
    /// Lexes a `hex"…"` literal. The cursor must sit on the `h` of a
    /// confirmed `hex"` prefix.
    pub(crate) fn lex_hex_binary(&mut self) -> Result<Token, Diagnostic> {
        let start = self.cursor.offset();
        self.cursor.advance_n(4); // h e x "

        let mut digits = 0usize;
        loop {
            match self.cursor.peek() {
                None => {
                    return Err(
                        self.error(ErrorCode::UnexpectedEof, "unterminated binary literal")
                    );
                }
                Some(b'"') => {
                    if digits % 2 != 0 {
                        return Err(self.error(
                            ErrorCode::InvalidString,
                            "hex binary must have even number of digits",
                        ));
                    }
                    self.cursor.advance();
                    return Ok(Token::new(
                        TokenKind::HexBinary,
                        Span::new(start, self.cursor.offset() - start),
                    ));
                }
                Some(b) if b.is_ascii_hexdigit() => {
                    self.cursor.advance();
                    digits += 1;
                }
                Some(_) => {
                    return Err(self.error(ErrorCode::InvalidString, "invalid character"));
                }
            }
        }
    }

    /// Lexes a `b64"…"` literal. The cursor must sit on the `b` of a
    /// confirmed `b64"` prefix.
    pub(crate) fn lex_b64_binary(&mut self) -> Result<Token, Diagnostic> {
        let start = self.cursor.offset();
        self.cursor.advance_n(4); // b 6 4 "

        loop {
            match self.cursor.peek() {
                None => {
                    return Err(
                        self.error(ErrorCode::UnexpectedEof, "unterminated binary literal")
                    );
                }
                Some(b'"') => {
                    self.cursor.advance();
                    return Ok(Token::new(
                        TokenKind::B64Binary,
                        Span::new(start, self.cursor.offset() - start),
                    ));
                }
                Some(b) if is_base64_byte(b) => {
                    self.cursor.advance();
                }
                Some(_) => {
                    return Err(self.error(ErrorCode::InvalidString, "invalid character"));
                }
            }
        }
    }
}

fn is_base64_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'+' || b == b'/' || b == b'='
}
