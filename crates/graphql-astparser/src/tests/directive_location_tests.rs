//! Tests for [`DirectiveLocation`] and [`DirectiveLocations`].

use crate::ast::DirectiveLocation;
use crate::ast::DirectiveLocations;

#[test]
fn names_round_trip() {
    for location in DirectiveLocation::ALL {
        assert_eq!(DirectiveLocation::from_name(location.as_str().as_bytes()), Some(location));
        assert_eq!(location.to_string(), location.as_str());
    }
    assert_eq!(DirectiveLocation::from_name(b"field"), None);
    assert_eq!(DirectiveLocation::from_name(b""), None);
}

#[test]
fn executable_locations() {
    let executable: Vec<&str> = DirectiveLocation::ALL
        .iter()
        .filter(|location| location.is_executable())
        .map(|location| location.as_str())
        .collect();
    assert_eq!(
        executable,
        vec![
            "QUERY",
            "MUTATION",
            "SUBSCRIPTION",
            "FIELD",
            "FRAGMENT_DEFINITION",
            "FRAGMENT_SPREAD",
            "INLINE_FRAGMENT",
            "VARIABLE_DEFINITION",
        ],
    );
}

/// Verifies iteration follows insertion order, not declaration order.
#[test]
fn iterates_in_insertion_order() {
    let mut locations = DirectiveLocations::new();
    assert!(locations.is_empty());
    assert!(locations.insert(DirectiveLocation::InputFieldDefinition));
    assert!(locations.insert(DirectiveLocation::Query));
    assert!(locations.insert(DirectiveLocation::Schema));

    assert_eq!(locations.len(), 3);
    assert_eq!(
        locations.iter().collect::<Vec<_>>(),
        vec![
            DirectiveLocation::InputFieldDefinition,
            DirectiveLocation::Query,
            DirectiveLocation::Schema,
        ],
    );
    // Every call starts over.
    assert_eq!(locations.iter().count(), 3);
    assert_eq!(locations.iter().len(), 3);
}

#[test]
fn duplicates_are_ignored() {
    let mut locations = DirectiveLocations::new();
    assert!(locations.insert(DirectiveLocation::Field));
    assert!(!locations.insert(DirectiveLocation::Field));
    assert_eq!(locations.len(), 1);
    assert!(locations.contains(DirectiveLocation::Field));
    assert!(!locations.contains(DirectiveLocation::Object));
}

#[test]
fn holds_every_location() {
    let locations: DirectiveLocations = DirectiveLocation::ALL.iter().rev().copied().collect();
    assert_eq!(locations.len(), DirectiveLocation::ALL.len());
    let mut expected = DirectiveLocation::ALL.to_vec();
    expected.reverse();
    assert_eq!(locations.into_iter().collect::<Vec<_>>(), expected);
}

#[test]
fn debug_and_serialize_use_insertion_order() {
    let locations: DirectiveLocations =
        [DirectiveLocation::Union, DirectiveLocation::EnumValue].into_iter().collect();
    assert_eq!(format!("{locations:?}"), "{Union, EnumValue}");
    assert_eq!(
        serde_json::to_string(&locations).unwrap(),
        r#"["UNION","ENUM_VALUE"]"#,
    );
}
