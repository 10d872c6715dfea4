//! Various test utils.

use crate::ast::Ref;
use crate::ast::Type;
use crate::ast::TypeKind;
use crate::token::Keyword;
use crate::ByteSliceRef;
use crate::Document;
use crate::Input;
use crate::Lexer;
use crate::ParseError;
use crate::Parser;

/// Parses `source` as a whole document, panicking on error.
pub(super) fn parse_ok(source: &str) -> (Input, Document) {
    let input = Input::from(source);
    let mut document = Document::new();
    if let Err(error) = crate::parse(&input, &mut document) {
        panic!("Expected successful parse, got: {}", error.format_detailed(Some(source)));
    }
    (input, document)
}

/// Parses `source` as a whole document, expecting an error.
pub(super) fn parse_err(source: &str) -> ParseError {
    let input = Input::from(source);
    let mut document = Document::new();
    match crate::parse(&input, &mut document) {
        Ok(()) => panic!("Expected parse error for {source:?}, got: {:?}", document.root_nodes),
        Err(error) => error,
    }
}

/// Runs a single production against `source` with a fresh parser.
pub(super) fn parse_fragment<T>(
    source: &str,
    production: impl FnOnce(&mut Parser<'_>) -> Result<T, ParseError>,
) -> (Input, Document, Result<T, ParseError>) {
    let input = Input::from(source);
    let mut document = Document::new();
    let result = {
        let mut parser = Parser::new(&input, &mut document);
        production(&mut parser)
    };
    (input, document, result)
}

/// Lexes `source` into keywords, dropping the trailing `Eof`.
pub(super) fn lex_keywords(source: &str) -> Vec<Keyword> {
    let input = Input::from(source);
    let tokens = match Lexer::new(&input).tokens() {
        Ok(tokens) => tokens,
        Err(error) => panic!("Expected successful lex, got: {error}"),
    };
    let mut keywords: Vec<Keyword> = tokens.into_iter().map(|token| token.keyword).collect();
    assert_eq!(keywords.pop(), Some(Keyword::Eof));
    keywords
}

/// Lexes `source`, expecting an error.
pub(super) fn lex_err(source: &str) -> ParseError {
    let input = Input::from(source);
    match Lexer::new(&input).tokens() {
        Ok(tokens) => panic!("Expected lex error for {source:?}, got: {tokens:?}"),
        Err(error) => error,
    }
}

pub(super) fn text(input: &Input, slice: ByteSliceRef) -> String {
    input.byte_slice_string(slice).into_owned()
}

/// Renders a type reference back to GraphQL syntax.
pub(super) fn type_to_string(input: &Input, document: &Document, type_ref: Ref) -> String {
    let Type { kind, name, of_type, .. } = document.types[type_ref.index()];
    match kind {
        TypeKind::Named => text(input, name),
        TypeKind::List => format!("[{}]", type_to_string(input, document, of_type)),
        TypeKind::NonNull => format!("{}!", type_to_string(input, document, of_type)),
    }
}
