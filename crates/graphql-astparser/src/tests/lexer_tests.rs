//! Tests for the byte-oriented [`Lexer`](crate::Lexer).

use crate::tests::utils::lex_err;
use crate::tests::utils::lex_keywords;
use crate::token::Keyword;
use crate::Input;
use crate::LexErrorKind;
use crate::Lexer;
use crate::ParseErrorKind;
use crate::Position;

// =============================================================================
// Punctuators, names and ignored tokens
// =============================================================================

/// Verifies every punctuator, including `...`, is recognized.
///
/// Per GraphQL spec:
/// <https://spec.graphql.org/September2025/#Punctuator>
#[test]
fn lexes_punctuators() {
    assert_eq!(
        lex_keywords("! $ & ( ) ... : = @ [ ] { | }"),
        vec![
            Keyword::Bang,
            Keyword::Dollar,
            Keyword::Ampersand,
            Keyword::ParenOpen,
            Keyword::ParenClose,
            Keyword::Ellipsis,
            Keyword::Colon,
            Keyword::Equals,
            Keyword::At,
            Keyword::SquareBracketOpen,
            Keyword::SquareBracketClose,
            Keyword::CurlyBraceOpen,
            Keyword::Pipe,
            Keyword::CurlyBraceClose,
        ],
    );
}

/// Verifies that reserved words are classified by exact match and that any
/// other name is an identifier.
#[test]
fn lexes_reserved_words_and_identifiers() {
    assert_eq!(
        lex_keywords("type query on true false null repeatable Type _bar onion"),
        vec![
            Keyword::Type,
            Keyword::Query,
            Keyword::On,
            Keyword::True,
            Keyword::False,
            Keyword::Null,
            Keyword::Repeatable,
            Keyword::Ident,
            Keyword::Ident,
            Keyword::Ident,
        ],
    );
}

/// Verifies that whitespace, commas, comments and a byte order mark never
/// produce tokens.
///
/// Per GraphQL spec:
/// <https://spec.graphql.org/September2025/#sec-Language.Source-Text.Ignored-Tokens>
#[test]
fn skips_ignored_tokens() {
    assert_eq!(
        lex_keywords("\u{FEFF},,a,\tb # trailing comment\n# full line\r\n,c,,"),
        vec![Keyword::Ident, Keyword::Ident, Keyword::Ident],
    );
    assert_eq!(lex_keywords(""), vec![]);
    assert_eq!(lex_keywords("   # only a comment"), vec![]);
}

/// Verifies that `peek` does not consume and `read` returns the peeked
/// token.
#[test]
fn peek_then_read() {
    let input = Input::from("foo bar");
    let mut lexer = Lexer::new(&input);

    let peeked = lexer.peek().unwrap();
    assert_eq!(lexer.peek().unwrap(), peeked);
    assert_eq!(lexer.read().unwrap(), peeked);
    assert_eq!(input.byte_slice(peeked.literal), b"foo");

    let bar = lexer.read().unwrap();
    assert_eq!(input.byte_slice(bar.literal), b"bar");
    assert_eq!(lexer.read().unwrap().keyword, Keyword::Eof);
    assert_eq!(lexer.read().unwrap().keyword, Keyword::Eof);
}

// =============================================================================
// Positions
// =============================================================================

/// Verifies 1-based line/column tracking where `\n`, `\r\n` and `\r` each
/// end one line.
#[test]
fn tracks_line_and_column() {
    let input = Input::from("{\n  name\r\n  age }\rlast");
    let tokens = Lexer::new(&input).tokens().unwrap();
    let positions: Vec<Position> = tokens.iter().map(|token| token.position).collect();
    assert_eq!(
        positions,
        vec![
            Position::new(1, 1, 0),
            Position::new(2, 3, 4),
            Position::new(3, 3, 12),
            Position::new(3, 7, 16),
            Position::new(4, 1, 18),
            Position::new(4, 5, 22),
        ],
    );
}

/// Verifies that columns count characters, not bytes.
#[test]
fn columns_count_characters() {
    let input = Input::from("\"ééé\" x");
    let tokens = Lexer::new(&input).tokens().unwrap();
    assert_eq!(tokens[1].position, Position::new(1, 7, 9));
}

// =============================================================================
// Numbers
// =============================================================================

/// Verifies that a fraction or exponent promotes an integer to a float and
/// that the literal keeps its sign.
///
/// Per GraphQL spec:
/// <https://spec.graphql.org/September2025/#sec-Float-Value>
#[test]
fn lexes_numbers() {
    let input = Input::from("0 -0 123 -123 13.37 -13.37 1e10 1.5E-3 2e+2");
    let tokens = Lexer::new(&input).tokens().unwrap();
    let lexed: Vec<(Keyword, &[u8])> = tokens
        .iter()
        .take_while(|token| token.keyword != Keyword::Eof)
        .map(|token| (token.keyword, input.byte_slice(token.literal)))
        .collect();
    assert_eq!(
        lexed,
        vec![
            (Keyword::Integer, b"0".as_slice()),
            (Keyword::Integer, b"-0".as_slice()),
            (Keyword::Integer, b"123".as_slice()),
            (Keyword::Integer, b"-123".as_slice()),
            (Keyword::Float, b"13.37".as_slice()),
            (Keyword::Float, b"-13.37".as_slice()),
            (Keyword::Float, b"1e10".as_slice()),
            (Keyword::Float, b"1.5E-3".as_slice()),
            (Keyword::Float, b"2e+2".as_slice()),
        ],
    );
}

/// Verifies that a `-` separated from its digits is a malformed number.
#[test]
fn minus_must_touch_digits() {
    let error = lex_err("- 123");
    assert_eq!(
        error.kind(),
        &ParseErrorKind::Lex(LexErrorKind::MalformedNumber("-".to_string())),
    );
    assert_eq!(error.position(), Position::new(1, 1, 0));
    assert!(error.is_lex_error());
}

/// Verifies each malformed number shape is rejected.
///
/// Per GraphQL spec:
/// <https://spec.graphql.org/September2025/#sec-Int-Value>
#[test]
fn rejects_malformed_numbers() {
    for (source, text) in [
        ("007", "007"),
        ("1.", "1."),
        ("1.e5", "1.e5"),
        ("1e", "1e"),
        ("1e+", "1e+"),
        ("123abc", "123abc"),
        ("1.2.3", "1.2.3"),
        ("0x1F", "0x1F"),
    ] {
        let error = lex_err(source);
        if let ParseErrorKind::Lex(LexErrorKind::MalformedNumber(found)) = error.kind() {
            assert_eq!(found, text, "for {source:?}");
        } else {
            panic!("Expected MalformedNumber for {source:?}, got: {:?}", error.kind());
        }
    }
}

// =============================================================================
// Strings
// =============================================================================

/// Verifies that a single-line string's literal is the raw body between the
/// quotes, escapes included.
#[test]
fn string_literal_is_raw_body() {
    let input = Input::from(r#""a \"quoted\" é \u{1F600} 😀 word""#);
    let tokens = Lexer::new(&input).tokens().unwrap();
    assert_eq!(tokens[0].keyword, Keyword::String);
    assert_eq!(
        input.byte_slice(tokens[0].literal),
        r#"a \"quoted\" é \u{1F600} 😀 word"#.as_bytes(),
    );
    assert_eq!(tokens[1].keyword, Keyword::Eof);
}

/// Verifies that strings cannot span lines or run to the end of input.
#[test]
fn rejects_unterminated_strings() {
    for source in ["\"abc", "\"abc\ndef\"", "\"abc\r\"", "\"abc\\"] {
        let error = lex_err(source);
        assert_eq!(
            error.kind(),
            &ParseErrorKind::Lex(LexErrorKind::UnterminatedString),
            "for {source:?}",
        );
        assert_eq!(error.position(), Position::new(1, 1, 0));
    }
}

/// Verifies invalid escapes are reported at the backslash.
///
/// Per GraphQL spec:
/// <https://spec.graphql.org/September2025/#EscapedCharacter>
#[test]
fn rejects_invalid_escapes() {
    let error = lex_err(r#"  "ok \q""#);
    assert_eq!(
        error.kind(),
        &ParseErrorKind::Lex(LexErrorKind::InvalidEscapeSequence("\\q".to_string())),
    );
    assert_eq!(error.position(), Position::new(1, 7, 6));

    for source in [
        r#""\u12""#,
        r#""\uZZZZ""#,
        r#""\uDE00""#,
        r#""\uD83D""#,
        r#""\uD83DA""#,
        r#""\u{}""#,
        r#""\u{110000}""#,
        r#""\u{D800}""#,
        r#""\u{41""#,
    ] {
        let error = lex_err(source);
        if !matches!(
            error.kind(),
            ParseErrorKind::Lex(LexErrorKind::InvalidUnicodeEscape(_))
        ) {
            panic!("Expected InvalidUnicodeEscape for {source:?}, got: {:?}", error.kind());
        }
    }
}

/// Verifies that a block string's literal excludes the surrounding blank
/// lines and the common indentation of its first content line, and that
/// `block_indent` records that indentation.
///
/// Per GraphQL spec:
/// <https://spec.graphql.org/September2025/#BlockStringValue()>
#[test]
fn block_string_literal_is_trimmed() {
    let source = "\"\"\"\n    Hello,\n      World!\n\n    Yours,\n      GraphQL.\n  \"\"\"";
    let input = Input::from(source);
    let tokens = Lexer::new(&input).tokens().unwrap();
    assert_eq!(tokens[0].keyword, Keyword::BlockString);
    assert_eq!(tokens[0].block_indent, 4);
    assert_eq!(
        input.byte_slice(tokens[0].literal),
        b"Hello,\n      World!\n\n    Yours,\n      GraphQL.".as_slice(),
    );
    assert_eq!(tokens[1].keyword, Keyword::Eof);
    assert_eq!(tokens[1].position.line(), 7);
}

/// Verifies that text on the opening line is kept as-is and does not count
/// towards the common indentation.
#[test]
fn block_string_first_line_is_not_dedented() {
    let input = Input::from("\"\"\"  first\n    second\n      third\"\"\"");
    let tokens = Lexer::new(&input).tokens().unwrap();
    assert_eq!(tokens[0].block_indent, 4);
    assert_eq!(
        input.byte_slice(tokens[0].literal),
        b"  first\n    second\n      third".as_slice(),
    );
}

/// Verifies blank-only block strings are empty.
#[test]
fn blank_block_string_is_empty() {
    let input = Input::from("\"\"\"\n   \n\t\n\"\"\" after");
    let tokens = Lexer::new(&input).tokens().unwrap();
    assert_eq!(tokens[0].keyword, Keyword::BlockString);
    assert!(tokens[0].literal.is_empty());
    assert_eq!(tokens[1].keyword, Keyword::Ident);
    assert_eq!(tokens[1].position, Position::new(4, 5, 14));
}

/// Verifies that `\"""` does not close a block string.
#[test]
fn block_string_escaped_triple_quote() {
    let input = Input::from(r#""""a \""" b""""#);
    let tokens = Lexer::new(&input).tokens().unwrap();
    assert_eq!(tokens[0].keyword, Keyword::BlockString);
    assert_eq!(input.byte_slice(tokens[0].literal), br#"a \""" b"#.as_slice());
    assert_eq!(tokens[1].keyword, Keyword::Eof);
}

#[test]
fn rejects_unterminated_block_string() {
    let error = lex_err("type \"\"\"never closed\" \"");
    assert_eq!(
        error.kind(),
        &ParseErrorKind::Lex(LexErrorKind::UnterminatedBlockString),
    );
    assert_eq!(error.position(), Position::new(1, 6, 5));
}

// =============================================================================
// Invalid characters
// =============================================================================

/// Verifies `.` and `..` are rejected with a hint about `...`.
#[test]
fn rejects_partial_ellipsis() {
    let error = lex_err("{ ..foo }");
    assert_eq!(
        error.kind(),
        &ParseErrorKind::Lex(LexErrorKind::UnexpectedCharacter('.')),
    );
    assert!(error.message().contains("`..`"));
    assert!(error.notes().iter().any(|note| note.message.contains("`...`")));

    let error = lex_err(".5");
    assert_eq!(error.message(), "unexpected `.`");
}

/// Verifies that characters outside the GraphQL grammar are named in the
/// error, with code points for invisible characters.
#[test]
fn rejects_unexpected_characters() {
    let error = lex_err("query ?");
    assert_eq!(
        error.kind(),
        &ParseErrorKind::Lex(LexErrorKind::UnexpectedCharacter('?')),
    );
    assert_eq!(error.position(), Position::new(1, 7, 6));

    let error = lex_err("a\u{200B}b");
    assert!(
        error.message().contains("U+200B: ZERO WIDTH SPACE"),
        "got: {}",
        error.message(),
    );

    let error = lex_err("name: 'single'");
    assert!(error.notes().iter().any(|note| note.message.contains("double quotes")));
}

/// Verifies invalid UTF-8 outside strings is an error rather than a panic.
#[test]
fn rejects_invalid_utf8() {
    let mut lexer = Lexer::from_bytes(b"a \xFF");
    assert_eq!(lexer.read().unwrap().keyword, Keyword::Ident);
    let error = lexer.read().unwrap_err();
    assert_eq!(error.message(), "invalid UTF-8 byte 0xFF");
    assert_eq!(error.position(), Position::new(1, 3, 2));
}
