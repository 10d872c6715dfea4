use crate::ast::Ref;

/// The kind of a top-level definition recorded in `Document::root_nodes`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum NodeKind {
    SchemaDefinition,
    SchemaExtension,
    ObjectTypeDefinition,
    ObjectTypeExtension,
    InterfaceTypeDefinition,
    InterfaceTypeExtension,
    UnionTypeDefinition,
    UnionTypeExtension,
    EnumTypeDefinition,
    EnumTypeExtension,
    ScalarTypeDefinition,
    ScalarTypeExtension,
    InputObjectTypeDefinition,
    InputObjectTypeExtension,
    DirectiveDefinition,
    OperationDefinition,
    FragmentDefinition,
}

impl NodeKind {
    /// Returns `true` for operations and fragments.
    pub fn is_executable(&self) -> bool {
        matches!(self, Self::OperationDefinition | Self::FragmentDefinition)
    }

    /// Returns `true` for `extend ...` definitions.
    pub fn is_extension(&self) -> bool {
        matches!(
            self,
            Self::SchemaExtension
                | Self::ObjectTypeExtension
                | Self::InterfaceTypeExtension
                | Self::UnionTypeExtension
                | Self::EnumTypeExtension
                | Self::ScalarTypeExtension
                | Self::InputObjectTypeExtension
        )
    }
}

/// A top-level definition: `node` indexes the arena named by `kind`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct RootNode {
    pub kind: NodeKind,
    pub node: Ref,
}
