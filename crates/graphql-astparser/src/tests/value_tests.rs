//! Tests for value literals and variables.

use crate::ast::Ref;
use crate::ast::Value;
use crate::ast::ValueKind;
use crate::tests::utils::parse_fragment;
use crate::tests::utils::text;
use crate::Document;
use crate::Input;
use crate::LexErrorKind;
use crate::ParseError;
use crate::ParseErrorKind;
use crate::Position;
use crate::ValueParsingError;

fn parse_value(source: &str) -> (Input, Document, Result<Value, ParseError>) {
    parse_fragment(source, |parser| parser.parse_value())
}

fn parse_value_ok(source: &str) -> (Input, Document, Value) {
    let (input, document, result) = parse_value(source);
    match result {
        Ok(value) => (input, document, value),
        Err(error) => panic!("Expected value for {source:?}, got: {error}"),
    }
}

// =============================================================================
// Variables
// =============================================================================

/// Verifies `$name` produces a Variable value whose name excludes the `$`.
///
/// Per GraphQL spec:
/// <https://spec.graphql.org/September2025/#Variable>
#[test]
fn variable_values() {
    for (source, name) in [("$foo", "foo"), ("$_foo", "_foo"), ("$foo123", "foo123"), ("$on", "on")] {
        let (input, document, value) = parse_value_ok(source);
        assert_eq!(value.kind, ValueKind::Variable);
        let variable = &document.variable_values[value.node.index()];
        assert_eq!(text(&input, variable.name), name);
        assert_eq!(variable.position, Position::new(1, 1, 0));
    }
}

/// Verifies that whitespace after `$` and non-name variables are rejected.
#[test]
fn rejects_malformed_variables() {
    let (_, _, result) = parse_value("$ foo");
    let error = result.unwrap_err();
    if let ParseErrorKind::UnexpectedToken { found, .. } = error.kind() {
        assert_eq!(found, "foo");
    } else {
        panic!("Expected UnexpectedToken, got: {:?}", error.kind());
    }

    let (_, _, result) = parse_value("$123");
    assert!(result.unwrap_err().is_syntax_error());

    let (_, _, result) = parse_value("$");
    assert!(matches!(
        result.unwrap_err().kind(),
        ParseErrorKind::UnexpectedEof { .. }
    ));
}

// =============================================================================
// Scalars
// =============================================================================

/// Verifies integers store their digits and sign separately.
///
/// Per GraphQL spec:
/// <https://spec.graphql.org/September2025/#sec-Int-Value>
#[test]
fn int_values() {
    let (input, document, value) = parse_value_ok("123");
    assert_eq!(value.kind, ValueKind::Integer);
    let int = &document.int_values[value.node.index()];
    assert_eq!(text(&input, int.raw), "123");
    assert!(!int.negative);
    assert_eq!(input.int_value(int), Ok(123));

    let (input, document, value) = parse_value_ok("-123");
    let int = &document.int_values[value.node.index()];
    assert_eq!(text(&input, int.raw), "123");
    assert!(int.negative);
    assert_eq!(input.int_value(int), Ok(-123));
}

/// Verifies floats store their digits and sign separately.
///
/// Per GraphQL spec:
/// <https://spec.graphql.org/September2025/#sec-Float-Value>
#[test]
fn float_values() {
    let (input, document, value) = parse_value_ok("13.37");
    assert_eq!(value.kind, ValueKind::Float);
    let float = &document.float_values[value.node.index()];
    assert_eq!(text(&input, float.raw), "13.37");
    assert!(!float.negative);
    assert_eq!(input.float_value(float), Ok(13.37));

    let (input, document, value) = parse_value_ok("-13.37");
    let float = &document.float_values[value.node.index()];
    assert_eq!(text(&input, float.raw), "13.37");
    assert!(float.negative);
    assert_eq!(input.float_value(float), Ok(-13.37));

    let (input, document, value) = parse_value_ok("1e3");
    assert_eq!(input.float_value(&document.float_values[value.node.index()]), Ok(1000.0));
}

/// Verifies a sign separated from its number is a lex error.
#[test]
fn rejects_detached_minus() {
    for source in ["- 123", "- 13.37"] {
        let (_, _, result) = parse_value(source);
        assert_eq!(
            result.unwrap_err().kind(),
            &ParseErrorKind::Lex(LexErrorKind::MalformedNumber("-".to_string())),
        );
    }
}

/// Verifies 32-bit range checks happen when converting, not when parsing.
#[test]
fn int_value_range() {
    let (input, document, value) = parse_value_ok("-2147483648");
    assert_eq!(input.int_value(&document.int_values[value.node.index()]), Ok(i32::MIN));

    let (input, document, value) = parse_value_ok("2147483648");
    assert!(matches!(
        input.int_value(&document.int_values[value.node.index()]),
        Err(ValueParsingError::Int(_))
    ));

    let (input, document, value) = parse_value_ok("1e999");
    assert!(matches!(
        input.float_value(&document.float_values[value.node.index()]),
        Err(ValueParsingError::Float(_))
    ));
}

#[test]
fn string_values() {
    let (input, document, value) = parse_value_ok(r#""foo \"bar\"""#);
    assert_eq!(value.kind, ValueKind::String);
    let string = &document.string_values[value.node.index()];
    assert!(!string.is_block_string);
    assert_eq!(input.string_value(string), r#"foo "bar""#);

    let (input, document, value) = parse_value_ok("\"\"\"\n  block\n    indented\n\"\"\"");
    let string = &document.string_values[value.node.index()];
    assert!(string.is_block_string);
    assert_eq!(input.string_value(string), "block\n  indented");
}

/// Verifies `true`/`false` are booleans and `null` has no node.
///
/// Per GraphQL spec:
/// <https://spec.graphql.org/September2025/#sec-Boolean-Value>
#[test]
fn boolean_and_null_values() {
    let (_, document, value) = parse_value_ok("true");
    assert_eq!(value.kind, ValueKind::Boolean);
    assert_eq!(document.boolean_value(&value), Some(true));

    let (_, document, value) = parse_value_ok("false");
    assert_eq!(document.boolean_value(&value), Some(false));

    let (_, document, value) = parse_value_ok("null");
    assert_eq!(value.kind, ValueKind::Null);
    assert_eq!(value.node, Ref::NONE);
    assert_eq!(document.boolean_value(&value), None);
}

/// Verifies any other bare name is an enum value, reserved words included.
///
/// Per GraphQL spec:
/// <https://spec.graphql.org/September2025/#sec-Enum-Value>
#[test]
fn enum_values() {
    for name in ["RED", "on", "type", "query"] {
        let (input, document, value) = parse_value_ok(name);
        assert_eq!(value.kind, ValueKind::Enum);
        assert_eq!(text(&input, document.enum_values[value.node.index()].name), name);
    }
}

// =============================================================================
// Lists and objects
// =============================================================================

/// Verifies list items land in `Document::values` in source order, nested
/// lists included.
///
/// Per GraphQL spec:
/// <https://spec.graphql.org/September2025/#sec-List-Value>
#[test]
fn list_values() {
    let (input, document, value) = parse_value_ok(r#"[1,2,"3",[4]]"#);
    assert_eq!(value.kind, ValueKind::List);
    let list = &document.list_values[value.node.index()];
    let items: Vec<Value> = list.values.iter().map(|item| document.values[item.index()]).collect();
    let kinds: Vec<ValueKind> = items.iter().map(|item| item.kind).collect();
    assert_eq!(
        kinds,
        vec![ValueKind::Integer, ValueKind::Integer, ValueKind::String, ValueKind::List],
    );
    assert_eq!(text(&input, document.int_values[items[0].node.index()].raw), "1");
    assert_eq!(text(&input, document.int_values[items[1].node.index()].raw), "2");
    assert_eq!(input.string_value(&document.string_values[items[2].node.index()]), "3");

    let inner = &document.list_values[items[3].node.index()];
    assert_eq!(inner.values.len(), 1);
    let four = document.values[inner.values[0].index()];
    assert_eq!(text(&input, document.int_values[four.node.index()].raw), "4");

    let refs: Vec<Ref> = list.values.iter().collect();
    assert!(refs.windows(2).all(|pair| pair[0] < pair[1]));
}

/// Verifies object fields keep their order and values.
///
/// Per GraphQL spec:
/// <https://spec.graphql.org/September2025/#sec-Input-Object-Values>
#[test]
fn object_values() {
    let (input, document, value) = parse_value_ok("{lon: 12.43, lat: -53.211, list: [1] }");
    assert_eq!(value.kind, ValueKind::Object);
    let object = &document.object_values[value.node.index()];
    let names: Vec<String> = object
        .fields
        .iter()
        .map(|field| text(&input, document.object_fields[field.index()].name))
        .collect();
    assert_eq!(names, vec!["lon", "lat", "list"]);

    let lat = &document.object_fields[object.fields[1].index()];
    assert_eq!(lat.value.kind, ValueKind::Float);
    assert_eq!(input.float_value(&document.float_values[lat.value.node.index()]), Ok(-53.211));

    let list = &document.object_fields[object.fields[2].index()];
    assert_eq!(list.value.kind, ValueKind::List);
}

#[test]
fn empty_list_and_object_values() {
    let (_, document, value) = parse_value_ok("[]");
    assert!(document.list_values[value.node.index()].values.is_empty());

    let (_, document, value) = parse_value_ok("{}");
    assert!(document.object_values[value.node.index()].fields.is_empty());
}

#[test]
fn rejects_malformed_compound_values() {
    let (_, _, result) = parse_value("[1, 2");
    assert!(matches!(
        result.unwrap_err().kind(),
        ParseErrorKind::UnclosedDelimiter { delimiter } if delimiter == "["
    ));

    let (_, _, result) = parse_value("{a 1}");
    let error = result.unwrap_err();
    assert_eq!(error.message(), "expected `:`, found `1`");

    let (_, _, result) = parse_value(")");
    let error = result.unwrap_err();
    if let ParseErrorKind::UnexpectedToken { expected, found } = error.kind() {
        assert_eq!(expected, &vec!["value".to_string()]);
        assert_eq!(found, ")");
    } else {
        panic!("Expected UnexpectedToken, got: {:?}", error.kind());
    }
}
