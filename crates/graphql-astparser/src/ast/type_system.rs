//! Type system definition and extension nodes.
//!
//! Unless stated otherwise, `directives` index `Document::directives`,
//! `implements_interfaces`/`members`/`named_type` index `Document::types`
//! (always `Named` types), `fields` of object and interface types index
//! `Document::field_definitions`, and argument/input field lists index
//! `Document::input_value_definitions`.

use crate::ast::Description;
use crate::ast::DirectiveLocations;
use crate::ast::OperationType;
use crate::ast::Ref;
use crate::ast::RefList;
use crate::ast::Value;
use crate::ByteSliceRef;
use crate::Position;

/// `schema @directives { query: Query ... }`
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct SchemaDefinition {
    pub description: Description,
    pub directives: RefList,
    /// Into `Document::root_operation_type_definitions`.
    pub root_operation_types: RefList,
    pub position: Position,
}

/// `extend schema @directives { ... }`; the body is optional when
/// directives are present.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct SchemaExtension {
    pub directives: RefList,
    pub root_operation_types: RefList,
    pub position: Position,
}

/// `query: Query` inside a schema definition or extension.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct RootOperationTypeDefinition {
    pub operation_type: OperationType,
    pub named_type: Ref,
    pub position: Position,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct ObjectTypeDefinition {
    pub description: Description,
    pub name: ByteSliceRef,
    pub implements_interfaces: RefList,
    pub directives: RefList,
    pub fields: RefList,
    pub position: Position,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct ObjectTypeExtension {
    pub name: ByteSliceRef,
    pub implements_interfaces: RefList,
    pub directives: RefList,
    pub fields: RefList,
    pub position: Position,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct InterfaceTypeDefinition {
    pub description: Description,
    pub name: ByteSliceRef,
    pub implements_interfaces: RefList,
    pub directives: RefList,
    pub fields: RefList,
    pub position: Position,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct InterfaceTypeExtension {
    pub name: ByteSliceRef,
    pub implements_interfaces: RefList,
    pub directives: RefList,
    pub fields: RefList,
    pub position: Position,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct UnionTypeDefinition {
    pub description: Description,
    pub name: ByteSliceRef,
    pub directives: RefList,
    pub members: RefList,
    pub position: Position,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct UnionTypeExtension {
    pub name: ByteSliceRef,
    pub directives: RefList,
    pub members: RefList,
    pub position: Position,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct EnumTypeDefinition {
    pub description: Description,
    pub name: ByteSliceRef,
    pub directives: RefList,
    /// Into `Document::enum_value_definitions`.
    pub values: RefList,
    pub position: Position,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct EnumTypeExtension {
    pub name: ByteSliceRef,
    pub directives: RefList,
    pub values: RefList,
    pub position: Position,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct EnumValueDefinition {
    pub description: Description,
    pub name: ByteSliceRef,
    pub directives: RefList,
    pub position: Position,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct ScalarTypeDefinition {
    pub description: Description,
    pub name: ByteSliceRef,
    pub directives: RefList,
    pub position: Position,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct ScalarTypeExtension {
    pub name: ByteSliceRef,
    pub directives: RefList,
    pub position: Position,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct InputObjectTypeDefinition {
    pub description: Description,
    pub name: ByteSliceRef,
    pub directives: RefList,
    pub fields: RefList,
    pub position: Position,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct InputObjectTypeExtension {
    pub name: ByteSliceRef,
    pub directives: RefList,
    pub fields: RefList,
    pub position: Position,
}

/// `directive @name(arguments) repeatable on LOCATION | ...`
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct DirectiveDefinition {
    pub description: Description,
    pub name: ByteSliceRef,
    pub arguments: RefList,
    pub repeatable: bool,
    pub locations: DirectiveLocations,
    pub position: Position,
}

/// `name(arguments): Type @directives` inside an object or interface type.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct FieldDefinition {
    pub description: Description,
    pub name: ByteSliceRef,
    pub arguments: RefList,
    /// Into `Document::types`.
    pub type_ref: Ref,
    pub directives: RefList,
    pub position: Position,
}

/// An argument definition or input object field:
/// `name: Type = default @directives`.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct InputValueDefinition {
    pub description: Description,
    pub name: ByteSliceRef,
    pub type_ref: Ref,
    pub default_value: Option<Value>,
    pub directives: RefList,
    pub position: Position,
}
