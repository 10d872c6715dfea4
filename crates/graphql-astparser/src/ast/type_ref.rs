use crate::ast::Ref;
use crate::ByteSliceRef;
use crate::Position;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum TypeKind {
    Named,
    List,
    NonNull,
}

/// One link of a type reference chain, stored in `Document::types`.
///
/// Wrapping is expressed through `of_type` rather than nesting, so
/// `[[String!]!]!` is stored as
/// `NonNull -> List -> NonNull -> List -> NonNull -> Named("String")`.
///
/// - `Named`: `name` is set, `of_type` is [`Ref::NONE`].
/// - `List` / `NonNull`: `of_type` points at the wrapped type, `name` is
///   empty.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct Type {
    pub kind: TypeKind,
    pub name: ByteSliceRef,
    pub of_type: Ref,
    pub position: Position,
}
