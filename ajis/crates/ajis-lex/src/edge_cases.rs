//! Edge case and whole-document tests for ajis-lex.

use crate::{Lexer, LexerOptions, Token, TokenKind};
use ajis_util::{Diagnostic, ErrorCode, Span};

fn with_seps() -> LexerOptions {
    LexerOptions {
        allow_number_separators: true,
        ..LexerOptions::default()
    }
}

/// Lexes to EOF, panicking on any diagnostic. The EOF token is included.
fn lex_all(source: &[u8], options: LexerOptions) -> Vec<Token> {
    let mut lexer = Lexer::from_bytes(source, options);
    let mut tokens = Vec::new();
    loop {
        let token = lexer
            .next_token()
            .unwrap_or_else(|d| panic!("diagnostic on {:?}: {} ({:?})", source, d, d.context));
        let eof = token.is_eof();
        tokens.push(token);
        if eof {
            break;
        }
    }
    tokens
}

/// Lexes until the first diagnostic, returning the tokens before it.
fn lex_until_err(source: &[u8], options: LexerOptions) -> (Vec<Token>, Diagnostic) {
    let mut lexer = Lexer::from_bytes(source, options);
    let mut tokens = Vec::new();
    loop {
        match lexer.next_token() {
            Ok(token) => {
                assert!(!token.is_eof(), "no diagnostic in {:?}", source);
                tokens.push(token);
            }
            Err(diag) => return (tokens, diag),
        }
    }
}

/// Checks the universal span invariants: in-bounds, monotonic,
/// non-overlapping, EOF at the buffer length.
fn assert_span_invariants(source: &[u8], options: LexerOptions) {
    let tokens = lex_all(source, options);
    let mut previous_end = 0usize;
    for token in &tokens {
        assert!(token.span.end() <= source.len());
        assert!(token.span.offset >= previous_end);
        previous_end = token.span.end();
    }
    let eof = tokens.last().expect("eof token");
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.span, Span::empty(source.len()));
}

// ==================== SCENARIOS ====================

#[test]
fn test_scenario_braces() {
    let tokens = lex_all(b"{}", LexerOptions::default());
    assert_eq!(tokens[0], Token::new(TokenKind::LBrace, Span::new(0, 1)));
    assert_eq!(tokens[1], Token::new(TokenKind::RBrace, Span::new(1, 1)));
    assert_eq!(tokens[2], Token::new(TokenKind::Eof, Span::empty(2)));
}

#[test]
fn test_scenario_string_with_escaped_quote() {
    let source = b"\"a\\\"b\"";
    let tokens = lex_all(source, LexerOptions::default());
    assert_eq!(tokens[0], Token::new(TokenKind::String, Span::new(1, 4)));
    assert_eq!(tokens[0].text(source), b"a\\\"b");
}

#[test]
fn test_scenario_million_with_separators() {
    let tokens = lex_all(b"1,000,000", with_seps());
    assert_eq!(tokens[0], Token::new(TokenKind::Number, Span::new(0, 9)));
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[test]
fn test_scenario_million_without_separators() {
    // The commas are structural, and the `000` fragment then trips the
    // leading-zero rule.
    let (tokens, diag) = lex_until_err(b"1,000,000", LexerOptions::default());
    assert_eq!(tokens[0], Token::new(TokenKind::Number, Span::new(0, 1)));
    assert_eq!(tokens[1].kind, TokenKind::Comma);
    assert_eq!(diag.code, ErrorCode::InvalidNumber);
    assert_eq!(diag.context, Some("leading zero not allowed"));
}

#[test]
fn test_scenario_fraction_then_comma() {
    // `0.000,001`: no separators inside fractions, so the literal ends after
    // the fraction; the fragment after the structural comma has a leading
    // zero.
    let (tokens, diag) = lex_until_err(b"0.000,001", with_seps());
    assert_eq!(tokens[0], Token::new(TokenKind::Number, Span::new(0, 5)));
    assert_eq!(tokens[1].kind, TokenKind::Comma);
    assert_eq!(diag.code, ErrorCode::InvalidNumber);
    assert_eq!(diag.location.offset, 7);
}

#[test]
fn test_scenario_hex_grouping() {
    let tokens = lex_all(b"0xDEAD_BEEF", with_seps());
    assert_eq!(tokens[0], Token::new(TokenKind::Number, Span::new(0, 11)));

    let (_, diag) = lex_until_err(b"0xDE_AD_BEEF", with_seps());
    assert_eq!(diag.code, ErrorCode::InvalidHex);
    assert_eq!(diag.context, Some("inconsistent digit grouping"));
}

#[test]
fn test_scenario_unterminated_comment() {
    let source = b"/* unterminated";
    let (tokens, diag) = lex_until_err(source, LexerOptions::default());
    assert!(tokens.is_empty());
    assert_eq!(diag.code, ErrorCode::UnterminatedComment);
    assert_eq!(diag.location.offset, source.len());
}

#[test]
fn test_scenario_leading_zero() {
    let (_, diag) = lex_until_err(b"01", LexerOptions::default());
    assert_eq!(diag.code, ErrorCode::InvalidNumber);
    assert_eq!(diag.location.offset, 1);
}

#[test]
fn test_scenario_odd_hex_binary() {
    let source = b"hex\"DEADBEE\"";
    let (_, diag) = lex_until_err(source, LexerOptions::default());
    assert_eq!(diag.code, ErrorCode::InvalidString);
    assert_eq!(diag.context, Some("hex binary must have even number of digits"));
    assert_eq!(diag.location.offset, source.len() - 1);
}

#[test]
fn test_scenario_newline_in_string() {
    let (_, diag) = lex_until_err(b"\"line1\nline2\"", LexerOptions::default());
    assert_eq!(diag.code, ErrorCode::InvalidString);
    assert_eq!(diag.context, Some("newline in string"));
    assert_eq!(diag.location.offset, 6);
}

// ==================== WHOLE DOCUMENTS ====================

#[test]
fn test_document_with_comments_and_separators() {
    let source = br#"{
  /* comment */
  "a" /*key*/ : /*value*/ "Nazd\"arek",
  // next line
  "b": "Line1\nLine2",
  "c": true,
  "d": false,
  "e": null,
  "n1": 1000,
  "n2": -12.34,
  "n3": 1e9,
  "n4": 1_000,
  "n5": 12 345.67e-10
}
"#;

    use TokenKind::*;
    let kinds: Vec<TokenKind> = lex_all(source, with_seps())
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            LBrace, String, Colon, String, Comma, String, Colon, String, Comma, String, Colon,
            True, Comma, String, Colon, False, Comma, String, Colon, Null, Comma, String, Colon,
            Number, Comma, String, Colon, Number, Comma, String, Colon, Number, Comma, String,
            Colon, Number, Comma, String, Colon, Number, RBrace, Eof,
        ]
    );
}

#[test]
fn test_document_with_binary_literals() {
    let source = b"{\"raw\": hex\"00FF\", \"enc\": b64\"SGVsbG8=\"}";
    let tokens = lex_all(source, LexerOptions::default());
    let hex = tokens.iter().find(|t| t.kind == TokenKind::HexBinary).unwrap();
    assert_eq!(hex.text(source), b"hex\"00FF\"");
    let b64 = tokens.iter().find(|t| t.kind == TokenKind::B64Binary).unwrap();
    assert_eq!(b64.text(source), b"b64\"SGVsbG8=\"");
}

#[test]
fn test_empty_input() {
    let tokens = lex_all(b"", LexerOptions::default());
    assert_eq!(tokens, vec![Token::new(TokenKind::Eof, Span::empty(0))]);
}

#[test]
fn test_whitespace_only_input() {
    let tokens = lex_all(b" \t\r\n ", LexerOptions::default());
    assert_eq!(tokens, vec![Token::new(TokenKind::Eof, Span::empty(5))]);
}

// ==================== UNIVERSAL INVARIANTS ====================

#[test]
fn test_span_invariants_over_sample_inputs() {
    let samples: [&[u8]; 6] = [
        b"{}",
        b"[1, 2.5, -3e7, \"s\", true, false, null]",
        b"{\"k\": hex\"AB\"} // tail",
        b"/* c */ [[[]]]",
        b"\"\"",
        b"{\"deep\": {\"er\": [0, 0.1, b64\"QQ==\"]}}",
    ];
    for source in samples {
        assert_span_invariants(source, LexerOptions::default());
    }
    assert_span_invariants(b"[1,000,000, 0xAB_CD, 0b1010 1010]", with_seps());
}

#[test]
fn test_string_spans_sit_between_quotes() {
    let source = b"[\"a\", \"bc\", \"\"]";
    for token in lex_all(source, LexerOptions::default()) {
        if token.kind == TokenKind::String {
            assert_eq!(source[token.span.offset - 1], b'"');
            assert_eq!(source[token.span.end()], b'"');
        }
    }
}

#[test]
fn test_number_spans_match_grammar_after_stripping() {
    let source = b"[1,000,000, 0xAB_CD, 0b1010 1010, 0o7_123, 12 345.67e-10, -42, 0.5]";
    for token in lex_all(source, with_seps()) {
        if token.kind == TokenKind::Number {
            let raw: Vec<u8> = token
                .text(source)
                .iter()
                .copied()
                .filter(|&b| b != b'_' && b != b',' && b != b' ')
                .collect();
            let text = std::str::from_utf8(&raw).unwrap();
            assert!(
                matches_number_grammar(text),
                "{:?} fails the number grammar",
                text
            );
        }
    }
}

/// Checks the separator-stripped literal against the four accepted shapes.
fn matches_number_grammar(text: &str) -> bool {
    let t = text.strip_prefix('-').unwrap_or(text);

    let prefixed: [(&str, fn(char) -> bool); 6] = [
        ("0x", |c| c.is_ascii_hexdigit()),
        ("0X", |c| c.is_ascii_hexdigit()),
        ("0b", |c| c == '0' || c == '1'),
        ("0B", |c| c == '0' || c == '1'),
        ("0o", |c| ('0'..='7').contains(&c)),
        ("0O", |c| ('0'..='7').contains(&c)),
    ];
    for (prefix, is_digit) in prefixed {
        if let Some(digits) = t.strip_prefix(prefix) {
            return !digits.is_empty() && digits.chars().all(is_digit);
        }
    }

    // -? (0|[1-9][0-9]*) (\.[0-9]+)? ([eE][+-]?[0-9]+)?
    let mut chars = t.chars().peekable();
    match chars.next() {
        Some('0') => {}
        Some(c) if c.is_ascii_digit() => {
            while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
                chars.next();
            }
        }
        _ => return false,
    }
    if chars.peek() == Some(&'.') {
        chars.next();
        if !matches!(chars.next(), Some(c) if c.is_ascii_digit()) {
            return false;
        }
        while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
            chars.next();
        }
    }
    if matches!(chars.peek(), Some('e') | Some('E')) {
        chars.next();
        if matches!(chars.peek(), Some('+') | Some('-')) {
            chars.next();
        }
        if !matches!(chars.next(), Some(c) if c.is_ascii_digit()) {
            return false;
        }
        while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
            chars.next();
        }
    }
    chars.next().is_none()
}

#[test]
fn test_relexing_is_idempotent() {
    let source = b"{\"a\": [1,000, 0xAB_CD], \"b\": hex\"00\"}";
    let first = lex_all(source, with_seps());
    let second = lex_all(source, with_seps());
    assert_eq!(first, second);
}

#[test]
fn test_options_widen_without_sep_candidates() {
    // With no separator byte adjacent to digits, enabling separators must
    // not change the token stream.
    let source = b"{\"a\": [1, 2.5e3, true], \"b\": \"x\"}";
    let strict = lex_all(source, LexerOptions::default());
    let relaxed = lex_all(source, with_seps());
    assert_eq!(strict, relaxed);
}

// ==================== PROPERTY TESTS ====================

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn decimal_literals_lex_as_one_number(
            input in "-?(0|[1-9][0-9]{0,12})(\\.[0-9]{1,6})?([eE][+-]?[0-9]{1,3})?"
        ) {
            for options in [LexerOptions::default(), with_seps()] {
                let tokens = lex_all(input.as_bytes(), options);
                prop_assert_eq!(tokens.len(), 2);
                prop_assert_eq!(tokens[0].kind, TokenKind::Number);
                prop_assert_eq!(tokens[0].span, Span::new(0, input.len()));
            }
        }

        #[test]
        fn base_literals_lex_as_one_number(
            input in "-?(0x[0-9a-fA-F]{1,8}|0b[01]{1,8}|0o[0-7]{1,8})"
        ) {
            let tokens = lex_all(input.as_bytes(), LexerOptions::default());
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind, TokenKind::Number);
            prop_assert_eq!(tokens[0].span, Span::new(0, input.len()));
        }

        #[test]
        fn lexing_is_deterministic(input in "\\PC{0,40}") {
            let run = || -> Vec<Result<Token, Diagnostic>> {
                let mut lexer = Lexer::from_bytes(input.as_bytes(), with_seps());
                let mut out = Vec::new();
                loop {
                    match lexer.next_token() {
                        Ok(t) if t.is_eof() => break,
                        other => {
                            let stop = other.is_err();
                            out.push(other);
                            if stop {
                                break;
                            }
                        }
                    }
                }
                out
            };
            prop_assert_eq!(run(), run());
        }

        #[test]
        fn spans_stay_in_bounds(input in "\\PC{0,40}") {
            let mut lexer = Lexer::from_bytes(input.as_bytes(), with_seps());
            loop {
                match lexer.next_token() {
                    Ok(t) => {
                        prop_assert!(t.span.end() <= input.len());
                        if t.is_eof() {
                            prop_assert_eq!(t.span.offset, input.len());
                            break;
                        }
                    }
                    Err(d) => {
                        prop_assert!(d.location.offset <= input.len());
                        break;
                    }
                }
            }
        }
    }
}
