use crate::ast::Ref;
use crate::ast::RefList;
use crate::ByteSliceRef;
use crate::Position;

/// Discriminant of a [`Value`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum ValueKind {
    Variable,
    Integer,
    Float,
    String,
    Boolean,
    Null,
    Enum,
    List,
    Object,
}

/// A tagged reference to a value literal or variable.
///
/// `node` indexes the arena selected by `kind`:
///
/// | `kind`     | arena                     |
/// |------------|---------------------------|
/// | `Variable` | `Document::variable_values` |
/// | `Integer`  | `Document::int_values`    |
/// | `Float`    | `Document::float_values`  |
/// | `String`   | `Document::string_values` |
/// | `Boolean`  | `Document::boolean_values` |
/// | `Null`     | none ([`Ref::NONE`])      |
/// | `Enum`     | `Document::enum_values`   |
/// | `List`     | `Document::list_values`   |
/// | `Object`   | `Document::object_values` |
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct Value {
    pub kind: ValueKind,
    pub node: Ref,
    pub position: Position,
}

/// `$name`. `name` excludes the `$`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct VariableValue {
    pub name: ByteSliceRef,
    pub position: Position,
}

/// An Int literal. `raw` excludes a leading `-`, which is recorded in
/// `negative` instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct IntValue {
    pub raw: ByteSliceRef,
    pub negative: bool,
    pub position: Position,
}

/// A Float literal. `raw` excludes a leading `-`, which is recorded in
/// `negative` instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct FloatValue {
    pub raw: ByteSliceRef,
    pub negative: bool,
    pub position: Position,
}

/// A `"..."` or `"""..."""` string literal.
///
/// See [`Description`](super::Description) for how `content` and
/// `block_indent` relate to the source text; decode with
/// [`Input::string_value`](crate::Input::string_value).
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct StringValue {
    pub content: ByteSliceRef,
    pub is_block_string: bool,
    pub block_indent: u32,
    pub position: Position,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct BooleanValue {
    pub value: bool,
    pub position: Position,
}

/// A bare name in value position (any name other than `true`, `false` and
/// `null`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct EnumValue {
    pub name: ByteSliceRef,
    pub position: Position,
}

/// `[ ... ]`. `values` indexes `Document::values`.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct ListValue {
    pub values: RefList,
    pub position: Position,
}

/// `{ ... }`. `fields` indexes `Document::object_fields`.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct ObjectValue {
    pub fields: RefList,
    pub position: Position,
}

/// `name: value` inside an object literal.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct ObjectField {
    pub name: ByteSliceRef,
    pub value: Value,
    pub position: Position,
}
