//! Whitespace and comment skipping.
//!
//! Comments do not nest: a block comment ends at the first `*/`.

use ajis_util::{Diagnostic, ErrorCode};

use crate::lexer::Lexer;

impl Lexer<'_> {
    /// Skips whitespace and comments.
    ///
    /// Whitespace bytes are space, tab, `\r`, and `\n`. Line comments run
    /// through the next `\n` inclusive (or end of input); block comments run
    /// through the first `*/`. A lone `/` that opens neither comment form is
    /// rolled back and left for the dispatch to reject.
    pub(crate) fn skip_ignored(&mut self) -> Result<(), Diagnostic> {
        loop {
            match self.cursor.peek() {
                Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n') => {
                    self.cursor.advance();
                }
                Some(b'/') => {
                    let snapshot = self.cursor.snapshot();
                    self.cursor.advance();
                    match self.cursor.peek() {
                        Some(b'/') => {
                            self.cursor.advance();
                            self.skip_line_comment();
                        }
                        Some(b'*') => {
                            self.cursor.advance();
                            self.skip_block_comment()?;
                        }
                        _ => {
                            // Not a comment; restore so the '/' reaches the
                            // dispatch switch.
                            self.cursor.restore(snapshot);
                            return Ok(());
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Discards through the next `\n` inclusive, or to end of input.
    fn skip_line_comment(&mut self) {
        while let Some(b) = self.cursor.advance() {
            if b == b'\n' {
                break;
            }
        }
    }

    /// Discards through the first `*/`; the opening `/*` is already
    /// consumed.
    fn skip_block_comment(&mut self) -> Result<(), Diagnostic> {
        let mut prev = 0u8;
        loop {
            match self.cursor.advance() {
                None => {
                    return Err(
                        self.error(ErrorCode::UnterminatedComment, "unterminated block comment")
                    );
                }
                Some(b) => {
                    if prev == b'*' && b == b'/' {
                        return Ok(());
                    }
                    prev = b;
                }
            }
        }
    }
}
