//! Tests for type references (`Named`, `[List]`, `NonNull!`).

use crate::ast::Ref;
use crate::ast::TypeKind;
use crate::tests::utils::parse_fragment;
use crate::tests::utils::text;
use crate::tests::utils::type_to_string;
use crate::ParseErrorKind;
use crate::Parser;

/// Verifies a bare name produces a single `Named` type.
///
/// Per GraphQL spec:
/// <https://spec.graphql.org/September2025/#NamedType>
#[test]
fn named_type() {
    let (input, document, result) = parse_fragment("String", |parser| parser.parse_type());
    let type_ref = result.unwrap();
    let parsed = &document.types[type_ref.index()];
    assert_eq!(parsed.kind, TypeKind::Named);
    assert_eq!(text(&input, parsed.name), "String");
    assert_eq!(parsed.of_type, Ref::NONE);
    assert_eq!(parsed.of_type.get(), None);
    assert_eq!(document.types.len(), 1);
}

/// Verifies `!` wraps the preceding type in `NonNull`.
///
/// Per GraphQL spec:
/// <https://spec.graphql.org/September2025/#NonNullType>
#[test]
fn non_null_type() {
    let (input, document, result) = parse_fragment("String!", |parser| parser.parse_type());
    let type_ref = result.unwrap();
    let non_null = &document.types[type_ref.index()];
    assert_eq!(non_null.kind, TypeKind::NonNull);
    assert_eq!(non_null.of_type.get(), Some(non_null.of_type));
    let named = &document.types[non_null.of_type.index()];
    assert_eq!(named.kind, TypeKind::Named);
    assert_eq!(text(&input, named.name), "String");
}

/// Verifies `[String]!` is a non-null list of nullable strings.
///
/// Per GraphQL spec:
/// <https://spec.graphql.org/September2025/#ListType>
#[test]
fn non_null_list_type() {
    let (input, document, result) = parse_fragment("[String]!", |parser| parser.parse_type());
    let type_ref = result.unwrap();
    let non_null = &document.types[type_ref.index()];
    assert_eq!(non_null.kind, TypeKind::NonNull);
    let list = &document.types[non_null.of_type.index()];
    assert_eq!(list.kind, TypeKind::List);
    let named = &document.types[list.of_type.index()];
    assert_eq!(named.kind, TypeKind::Named);
    assert_eq!(text(&input, named.name), "String");
}

/// Verifies chained wrapping, with children appended before parents.
#[test]
fn nested_wrapped_type() {
    let (input, document, result) = parse_fragment("[[String!]!]!", |parser| parser.parse_type());
    let type_ref = result.unwrap();
    assert_eq!(type_to_string(&input, &document, type_ref), "[[String!]!]!");

    let kinds: Vec<TypeKind> = document.types.iter().map(|parsed| parsed.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TypeKind::Named,
            TypeKind::NonNull,
            TypeKind::List,
            TypeKind::NonNull,
            TypeKind::List,
            TypeKind::NonNull,
        ],
    );
    assert_eq!(type_ref, Ref::new(5));
    assert_eq!(document.named_type(type_ref).kind, TypeKind::Named);
    assert_eq!(text(&input, document.named_type(type_ref).name), "String");
}

/// Verifies that `[[String]!]!` keeps the inner list nullable.
#[test]
fn inner_nullable_list_type() {
    let (input, document, result) = parse_fragment("[[String]!]!", |parser| parser.parse_type());
    assert_eq!(type_to_string(&input, &document, result.unwrap()), "[[String]!]!");
}

/// Verifies malformed type references are syntax errors.
#[test]
fn rejects_malformed_types() {
    for source in ["!", "]String", "String!!", "[String!", "[String", "[", "[]", "\"String\""] {
        let (_, _, result) = parse_fragment(source, |parser| parser.parse_type());
        let error = match result {
            Ok(type_ref) => panic!("Expected error for {source:?}, got: {type_ref:?}"),
            Err(error) => error,
        };
        assert!(error.is_syntax_error(), "for {source:?}: {error}");
    }
}

#[test]
fn empty_list_type_is_empty_construct() {
    let (_, _, result) = parse_fragment("[]", |parser| parser.parse_type());
    let error = result.unwrap_err();
    if let ParseErrorKind::InvalidEmptyConstruct { construct } = error.kind() {
        assert_eq!(construct, "[]");
    } else {
        panic!("Expected InvalidEmptyConstruct, got: {:?}", error.kind());
    }
}

/// Verifies an unterminated list reports the opening bracket.
#[test]
fn unclosed_list_type_notes_opener() {
    let (_, _, result) = parse_fragment("[[String]", |parser| parser.parse_type());
    let error = result.unwrap_err();
    if let ParseErrorKind::UnclosedDelimiter { delimiter } = error.kind() {
        assert_eq!(delimiter, "[");
    } else {
        panic!("Expected UnclosedDelimiter, got: {:?}", error.kind());
    }
    let opener = error.notes()[0].position.unwrap();
    assert_eq!(opener.column(), 1);
}

/// Verifies nesting beyond the recursion limit is an error rather than a
/// stack overflow.
#[test]
fn deeply_nested_list_type() {
    let depth = Parser::MAX_RECURSION_DEPTH - 1;
    let source = format!("{}String{}", "[".repeat(depth), "]".repeat(depth));
    let (_, _, result) = parse_fragment(&source, |parser| parser.parse_type());
    assert!(result.is_ok());

    let source = format!("{}String{}", "[".repeat(depth + 1), "]".repeat(depth + 1));
    let (_, _, result) = parse_fragment(&source, |parser| parser.parse_type());
    assert_eq!(result.unwrap_err().kind(), &ParseErrorKind::NestingTooDeep);
}
