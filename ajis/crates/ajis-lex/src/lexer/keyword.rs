//! Keyword matching for `true`, `false`, and `null`.
//!
//! Matching is speculative: the cursor is checkpointed, the candidate bytes
//! are compared verbatim, and on a mismatch (or a follow byte that would
//! extend an identifier) the cursor is rolled back atomically so that
//! location reporting stays in sync.

use ajis_util::{Diagnostic, ErrorCode, Span};

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

const KEYWORDS: [(TokenKind, &[u8]); 3] = [
    (TokenKind::True, b"true"),
    (TokenKind::False, b"false"),
    (TokenKind::Null, b"null"),
];

impl Lexer<'_> {
    /// Lexes a keyword. The cursor must sit on an ASCII letter that did not
    /// open a binary literal.
    pub(crate) fn lex_keyword(&mut self) -> Result<Token, Diagnostic> {
        let start = self.cursor.offset();
        for (kind, text) in KEYWORDS {
            if self.match_keyword(text) {
                return Ok(Token::new(kind, Span::new(start, text.len())));
            }
        }
        Err(self.error(ErrorCode::InvalidToken, "unknown identifier"))
    }

    /// Consumes `keyword` if it matches at the cursor and ends at an
    /// identifier boundary; otherwise restores the cursor and reports false.
    fn match_keyword(&mut self, keyword: &[u8]) -> bool {
        let snapshot = self.cursor.snapshot();

        for &expected in keyword {
            if self.cursor.peek() != Some(expected) {
                self.cursor.restore(snapshot);
                return false;
            }
            self.cursor.advance();
        }

        // Boundary check: a letter, digit, or '_' would extend the word.
        if let Some(next) = self.cursor.peek() {
            if next.is_ascii_alphanumeric() || next == b'_' {
                self.cursor.restore(snapshot);
                return false;
            }
        }

        true
    }
}
