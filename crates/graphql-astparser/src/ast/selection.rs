use crate::ast::Ref;
use crate::ast::RefList;
use crate::ByteSliceRef;
use crate::Position;

/// Discriminant of a [`Selection`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum SelectionKind {
    Field,
    InlineFragment,
    FragmentSpread,
}

impl SelectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Field => "Field",
            Self::InlineFragment => "InlineFragment",
            Self::FragmentSpread => "FragmentSpread",
        }
    }
}

impl std::fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tagged reference into `Document::fields`, `Document::inline_fragments`
/// or `Document::fragment_spreads`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct Selection {
    pub kind: SelectionKind,
    pub node: Ref,
}

/// `{ ... }`. `selections` indexes `Document::selections`.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct SelectionSet {
    pub selections: RefList,
    pub position: Position,
}

/// `alias: name(arguments) @directives { selection_set }`
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct Field {
    pub alias: Option<ByteSliceRef>,
    pub name: ByteSliceRef,
    pub arguments: RefList,
    pub directives: RefList,
    /// Into `Document::selection_sets`; [`Ref::NONE`] for leaf fields.
    pub selection_set: Ref,
    pub position: Position,
}

/// `...name @directives`
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct FragmentSpread {
    pub fragment_name: ByteSliceRef,
    pub directives: RefList,
    pub position: Position,
}

/// `... on Type @directives { selection_set }`; the type condition is
/// optional.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct InlineFragment {
    pub type_condition: Option<TypeCondition>,
    pub directives: RefList,
    pub selection_set: Ref,
    pub position: Position,
}

/// `on NamedType`. `named_type` indexes `Document::types` and is always a
/// `Named` type.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct TypeCondition {
    pub named_type: Ref,
    pub position: Position,
}
