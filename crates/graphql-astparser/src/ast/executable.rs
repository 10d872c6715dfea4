use crate::ast::Ref;
use crate::ast::RefList;
use crate::ast::TypeCondition;
use crate::ast::Value;
use crate::ByteSliceRef;
use crate::Position;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `query Name($var: Type) @directives { ... }`, or the `{ ... }` shorthand
/// (an anonymous query with no variables or directives).
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct OperationDefinition {
    pub operation_type: OperationType,
    pub name: Option<ByteSliceRef>,
    pub variable_definitions: RefList,
    pub directives: RefList,
    pub selection_set: Ref,
    pub position: Position,
}

/// `$name: Type = default @directives`
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct VariableDefinition {
    /// Into `Document::variable_values`.
    pub variable: Ref,
    /// Into `Document::types`.
    pub type_ref: Ref,
    pub default_value: Option<Value>,
    pub directives: RefList,
    pub position: Position,
}

/// `fragment Name on Type @directives { ... }`
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct FragmentDefinition {
    pub name: ByteSliceRef,
    pub type_condition: TypeCondition,
    pub directives: RefList,
    pub selection_set: Ref,
    pub position: Position,
}

/// `name: value` inside a field's or directive's argument list.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct Argument {
    pub name: ByteSliceRef,
    pub value: Value,
    pub position: Position,
}

/// `@name(arguments)`. `arguments` indexes `Document::arguments`.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct Directive {
    pub name: ByteSliceRef,
    pub arguments: RefList,
    pub position: Position,
}
