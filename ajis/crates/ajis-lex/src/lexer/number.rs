//! Numeric literal recognition.
//!
//! Two disjoint shapes are accepted, both with an optional leading `-`:
//! base-prefixed integers (`0x`/`0b`/`0o`) and decimal numbers with optional
//! fraction and exponent. When separators are enabled, `_`, space, and `,`
//! may group digits; the first separator fixes the character for the rest of
//! the literal, and group sizes must stay consistent per base.
//!
//! `,` and space are ambiguous: they also terminate a number (structural
//! comma, whitespace). They count as a group separator only when the digit
//! run that follows has exactly the base's group width; otherwise the
//! literal ends before them and the byte is left for the next dispatch.
//! `_` can mean nothing else, so it always separates.
//!
//! The recognizer emits a span over the raw literal. It never computes a
//! value and never strips separators.

use ajis_util::{Diagnostic, ErrorCode, Span};

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Radix of a base-prefixed integer literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Base {
    Hex,
    Binary,
    Octal,
}

impl Base {
    fn is_digit(self, b: u8) -> bool {
        match self {
            Base::Hex => b.is_ascii_hexdigit(),
            Base::Binary => b == b'0' || b == b'1',
            Base::Octal => (b'0'..=b'7').contains(&b),
        }
    }

    /// The code for base-specific violations (`INVALID_NUMBER` doubles as
    /// the octal code).
    fn code(self) -> ErrorCode {
        match self {
            Base::Hex => ErrorCode::InvalidHex,
            Base::Binary => ErrorCode::InvalidBinary,
            Base::Octal => ErrorCode::InvalidNumber,
        }
    }

    /// Expected group size established by a first group of `len` digits, or
    /// `None` if no grouping width admits that first group.
    fn group_size_for_first(self, len: usize) -> Option<usize> {
        match self {
            Base::Hex => match len {
                1 | 2 => Some(2),
                3 | 4 => Some(4),
                _ => None,
            },
            Base::Binary => (1..=4).contains(&len).then_some(4),
            Base::Octal => (1..=3).contains(&len).then_some(3),
        }
    }

    fn first_group_error(self) -> &'static str {
        match self {
            Base::Hex => "hex grouping must be by 2 or 4 digits",
            Base::Binary => "binary grouping must be by 4 digits",
            Base::Octal => "octal grouping must be by 3 digits",
        }
    }

    /// Whether a digit run of `run` bytes after an ambiguous `,`/space keeps
    /// the literal going. Before any group is established, hex admits both
    /// of its widths.
    fn run_width_ok(self, run: usize, established: Option<usize>) -> bool {
        match established {
            Some(size) => run == size,
            None => match self {
                Base::Hex => run == 2 || run == 4,
                Base::Binary => run == 4,
                Base::Octal => run == 3,
            },
        }
    }
}

fn is_separator(b: u8) -> bool {
    b == b'_' || b == b' ' || b == b','
}

impl Lexer<'_> {
    /// Lexes a numeric literal. The cursor must sit on an ASCII digit or
    /// `-`.
    pub(crate) fn lex_number(&mut self) -> Result<Token, Diagnostic> {
        let start = self.cursor.offset();

        if self.cursor.peek() == Some(b'-') {
            self.cursor.advance();
            if !matches!(self.cursor.peek(), Some(b) if b.is_ascii_digit()) {
                return Err(self.error(ErrorCode::InvalidNumber, "expected digit after '-'"));
            }
        }

        if self.cursor.peek() == Some(b'0') {
            match self.cursor.peek_ahead(1) {
                Some(b'x') | Some(b'X') => {
                    self.cursor.advance_n(2);
                    return self.lex_base_integer(Base::Hex, start);
                }
                Some(b'b') | Some(b'B') => {
                    self.cursor.advance_n(2);
                    return self.lex_base_integer(Base::Binary, start);
                }
                Some(b'o') | Some(b'O') => {
                    self.cursor.advance_n(2);
                    return self.lex_base_integer(Base::Octal, start);
                }
                _ => {}
            }
        }

        self.lex_decimal(start)
    }

    /// Lexes the digits of a base-prefixed integer; the prefix is already
    /// consumed and `start` points at the first byte of the literal.
    fn lex_base_integer(&mut self, base: Base, start: usize) -> Result<Token, Diagnostic> {
        let mut saw_digit = false;
        let mut saw_sep = false;
        let mut sep_char: Option<u8> = None;
        let mut group_len = 0usize;
        let mut group_size: Option<usize> = None;

        loop {
            match self.cursor.peek() {
                Some(b) if base.is_digit(b) => {
                    self.cursor.advance();
                    saw_digit = true;
                    group_len += 1;
                }
                Some(b) if self.options.allow_number_separators && is_separator(b) && saw_digit => {
                    if b == b'_' {
                        match self.cursor.peek_ahead(1) {
                            Some(n) if base.is_digit(n) => {}
                            Some(n) if is_separator(n) => {
                                return Err(self.error(base.code(), "two separators in a row"));
                            }
                            _ => break,
                        }
                    } else {
                        let run = self.base_digit_run(1, base);
                        if !base.run_width_ok(run, group_size) {
                            break;
                        }
                    }

                    match sep_char {
                        Some(prev) if prev != b => {
                            return Err(
                                self.error(ErrorCode::InvalidNumber, "mixed number separators")
                            );
                        }
                        Some(_) => {}
                        None => sep_char = Some(b),
                    }

                    match group_size {
                        None => match base.group_size_for_first(group_len) {
                            Some(size) => group_size = Some(size),
                            None => return Err(self.error(base.code(), base.first_group_error())),
                        },
                        Some(size) => {
                            if group_len != size {
                                return Err(self.error(base.code(), "inconsistent digit grouping"));
                            }
                        }
                    }

                    self.cursor.advance();
                    saw_sep = true;
                    group_len = 0;
                }
                _ => break,
            }
        }

        if !saw_digit {
            return Err(self.error(base.code(), "expected digits after base prefix"));
        }
        if saw_sep {
            if let Some(size) = group_size {
                if group_len != size {
                    return Err(self.error(base.code(), "inconsistent digit grouping"));
                }
            }
        }
        if matches!(self.cursor.peek(), Some(b'.') | Some(b'e') | Some(b'E')) {
            return Err(self.error(
                ErrorCode::InvalidNumber,
                "base literal cannot have fraction or exponent",
            ));
        }

        Ok(Token::new(
            TokenKind::Number,
            Span::new(start, self.cursor.offset() - start),
        ))
    }

    /// Lexes a decimal number; `start` points at the first byte of the
    /// literal (a `-` may already be consumed).
    fn lex_decimal(&mut self, start: usize) -> Result<Token, Diagnostic> {
        if self.cursor.peek() == Some(b'0') {
            self.cursor.advance();
            match self.cursor.peek() {
                Some(b) if b.is_ascii_digit() => {
                    return Err(self.error(ErrorCode::InvalidNumber, "leading zero not allowed"));
                }
                Some(b)
                    if self.options.allow_number_separators
                        && is_separator(b)
                        && self.decimal_separator_continues(b) =>
                {
                    return Err(self.error(
                        ErrorCode::InvalidNumber,
                        "leading zero with separator not allowed",
                    ));
                }
                _ => {}
            }
            // A lone zero integer part; anything further is fraction or
            // exponent.
            return self.lex_decimal_tail(start);
        }

        let mut saw_sep = false;
        let mut sep_char: Option<u8> = None;
        let mut group_len = 0usize;
        let mut first_group = true;

        loop {
            match self.cursor.peek() {
                Some(b) if b.is_ascii_digit() => {
                    self.cursor.advance();
                    group_len += 1;
                }
                Some(b) if self.options.allow_number_separators && is_separator(b) => {
                    if !self.decimal_separator_continues(b) {
                        break;
                    }

                    match sep_char {
                        Some(prev) if prev != b => {
                            return Err(
                                self.error(ErrorCode::InvalidNumber, "mixed number separators")
                            );
                        }
                        Some(_) => {}
                        None => sep_char = Some(b),
                    }

                    if first_group {
                        if !(1..=3).contains(&group_len) {
                            return Err(self.error(
                                ErrorCode::InvalidNumber,
                                "invalid first/last digit group size",
                            ));
                        }
                        first_group = false;
                    } else if group_len != 3 {
                        return Err(self.error(
                            ErrorCode::InvalidNumber,
                            "invalid digit group size (must be 3)",
                        ));
                    }

                    self.cursor.advance();
                    saw_sep = true;
                    group_len = 0;
                }
                _ => break,
            }
        }

        if saw_sep && group_len != 3 {
            return Err(self.error(
                ErrorCode::InvalidNumber,
                "invalid first/last digit group size",
            ));
        }

        self.lex_decimal_tail(start)
    }

    /// Optional fraction and exponent, then the token. No separators are
    /// permitted in either part.
    fn lex_decimal_tail(&mut self, start: usize) -> Result<Token, Diagnostic> {
        if self.cursor.peek() == Some(b'.') {
            self.cursor.advance();
            if !matches!(self.cursor.peek(), Some(b) if b.is_ascii_digit()) {
                return Err(self.error(ErrorCode::InvalidNumber, "expected digit after '.'"));
            }
            while matches!(self.cursor.peek(), Some(b) if b.is_ascii_digit()) {
                self.cursor.advance();
            }
        }

        if matches!(self.cursor.peek(), Some(b'e') | Some(b'E')) {
            self.cursor.advance();
            if matches!(self.cursor.peek(), Some(b'+') | Some(b'-')) {
                self.cursor.advance();
            }
            if !matches!(self.cursor.peek(), Some(b) if b.is_ascii_digit()) {
                return Err(self.error(ErrorCode::InvalidNumber, "expected digit in exponent"));
            }
            while matches!(self.cursor.peek(), Some(b) if b.is_ascii_digit()) {
                self.cursor.advance();
            }
        }

        Ok(Token::new(
            TokenKind::Number,
            Span::new(start, self.cursor.offset() - start),
        ))
    }

    /// Whether the separator byte `b` at the cursor keeps a decimal literal
    /// going: `_` needs a digit right after it, `,`/space need a run of
    /// exactly three digits.
    fn decimal_separator_continues(&self, b: u8) -> bool {
        if b == b'_' {
            matches!(self.cursor.peek_ahead(1), Some(n) if n.is_ascii_digit())
        } else {
            self.decimal_run_of_three(1)
        }
    }

    /// True if exactly three decimal digits follow at `peek_ahead(k)` (the
    /// fourth byte, if any, is not a digit).
    fn decimal_run_of_three(&self, k: usize) -> bool {
        let run = (k..)
            .take_while(|&i| matches!(self.cursor.peek_ahead(i), Some(b) if b.is_ascii_digit()))
            .count();
        run == 3
    }

    /// Length of the run of base digits starting at `peek_ahead(k)`.
    fn base_digit_run(&self, k: usize, base: Base) -> usize {
        (k..)
            .take_while(|&i| matches!(self.cursor.peek_ahead(i), Some(b) if base.is_digit(b)))
            .count()
    }
}
