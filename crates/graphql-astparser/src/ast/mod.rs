//! Arena-based AST types.
//!
//! All nodes live in per-kind arenas owned by [`Document`] and reference each
//! other via [`Ref`] indices. Tagged unions ([`Value`], [`Selection`],
//! [`RootNode`]) pair a `kind` discriminant with a `Ref` into the arena for
//! that kind.

mod description;
mod directive_location;
mod document;
mod executable;
mod node_kind;
mod refs;
mod selection;
mod type_ref;
mod type_system;
mod value;

pub use description::Description;
pub use directive_location::DirectiveLocation;
pub use directive_location::DirectiveLocations;
pub use directive_location::DirectiveLocationsIter;
pub use document::Document;
pub(crate) use document::append;
pub use executable::Argument;
pub use executable::Directive;
pub use executable::FragmentDefinition;
pub use executable::OperationDefinition;
pub use executable::OperationType;
pub use executable::VariableDefinition;
pub use node_kind::NodeKind;
pub use node_kind::RootNode;
pub use refs::Ref;
pub use refs::RefList;
pub use selection::Field;
pub use selection::FragmentSpread;
pub use selection::InlineFragment;
pub use selection::Selection;
pub use selection::SelectionKind;
pub use selection::SelectionSet;
pub use selection::TypeCondition;
pub use type_ref::Type;
pub use type_ref::TypeKind;
pub use type_system::DirectiveDefinition;
pub use type_system::EnumTypeDefinition;
pub use type_system::EnumTypeExtension;
pub use type_system::EnumValueDefinition;
pub use type_system::FieldDefinition;
pub use type_system::InputObjectTypeDefinition;
pub use type_system::InputObjectTypeExtension;
pub use type_system::InputValueDefinition;
pub use type_system::InterfaceTypeDefinition;
pub use type_system::InterfaceTypeExtension;
pub use type_system::ObjectTypeDefinition;
pub use type_system::ObjectTypeExtension;
pub use type_system::RootOperationTypeDefinition;
pub use type_system::ScalarTypeDefinition;
pub use type_system::ScalarTypeExtension;
pub use type_system::SchemaDefinition;
pub use type_system::SchemaExtension;
pub use type_system::UnionTypeDefinition;
pub use type_system::UnionTypeExtension;
pub use value::BooleanValue;
pub use value::EnumValue;
pub use value::FloatValue;
pub use value::IntValue;
pub use value::ListValue;
pub use value::ObjectField;
pub use value::ObjectValue;
pub use value::StringValue;
pub use value::Value;
pub use value::ValueKind;
pub use value::VariableValue;
