use crate::ast::*;
use crate::pool::Reset;

/// Arena-backed AST for one GraphQL document.
///
/// Every node kind has its own append-only `Vec`; nodes refer to each other
/// through [`Ref`]s and [`RefList`]s. Children are appended before their
/// parents and siblings left to right, so every `RefList` is in source
/// order.
///
/// A `Document` is only meaningful together with the
/// [`Input`](crate::Input) it was parsed from: names and literals are
/// [`ByteSliceRef`](crate::ByteSliceRef)s into that input.
///
/// After a failed parse the document is partially populated and must be
/// [`reset`](Document::reset) (or dropped) before reuse.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct Document {
    /// Top-level definitions, in source order.
    pub root_nodes: Vec<RootNode>,

    pub schema_definitions: Vec<SchemaDefinition>,
    pub schema_extensions: Vec<SchemaExtension>,
    pub root_operation_type_definitions: Vec<RootOperationTypeDefinition>,
    pub object_type_definitions: Vec<ObjectTypeDefinition>,
    pub object_type_extensions: Vec<ObjectTypeExtension>,
    pub interface_type_definitions: Vec<InterfaceTypeDefinition>,
    pub interface_type_extensions: Vec<InterfaceTypeExtension>,
    pub union_type_definitions: Vec<UnionTypeDefinition>,
    pub union_type_extensions: Vec<UnionTypeExtension>,
    pub enum_type_definitions: Vec<EnumTypeDefinition>,
    pub enum_type_extensions: Vec<EnumTypeExtension>,
    pub enum_value_definitions: Vec<EnumValueDefinition>,
    pub scalar_type_definitions: Vec<ScalarTypeDefinition>,
    pub scalar_type_extensions: Vec<ScalarTypeExtension>,
    pub input_object_type_definitions: Vec<InputObjectTypeDefinition>,
    pub input_object_type_extensions: Vec<InputObjectTypeExtension>,
    pub directive_definitions: Vec<DirectiveDefinition>,
    pub field_definitions: Vec<FieldDefinition>,
    pub input_value_definitions: Vec<InputValueDefinition>,

    pub operation_definitions: Vec<OperationDefinition>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub fragment_definitions: Vec<FragmentDefinition>,
    pub selection_sets: Vec<SelectionSet>,
    pub selections: Vec<Selection>,
    pub fields: Vec<Field>,
    pub inline_fragments: Vec<InlineFragment>,
    pub fragment_spreads: Vec<FragmentSpread>,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,

    pub types: Vec<Type>,

    /// Items of list literals (see [`ListValue`]).
    pub values: Vec<Value>,
    pub variable_values: Vec<VariableValue>,
    pub int_values: Vec<IntValue>,
    pub float_values: Vec<FloatValue>,
    pub string_values: Vec<StringValue>,
    pub boolean_values: Vec<BooleanValue>,
    pub enum_values: Vec<EnumValue>,
    pub list_values: Vec<ListValue>,
    pub object_values: Vec<ObjectValue>,
    pub object_fields: Vec<ObjectField>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logically empties every arena while keeping allocated capacity, so a
    /// pooled document can be reused without reallocating.
    pub fn reset(&mut self) {
        self.root_nodes.clear();
        self.schema_definitions.clear();
        self.schema_extensions.clear();
        self.root_operation_type_definitions.clear();
        self.object_type_definitions.clear();
        self.object_type_extensions.clear();
        self.interface_type_definitions.clear();
        self.interface_type_extensions.clear();
        self.union_type_definitions.clear();
        self.union_type_extensions.clear();
        self.enum_type_definitions.clear();
        self.enum_type_extensions.clear();
        self.enum_value_definitions.clear();
        self.scalar_type_definitions.clear();
        self.scalar_type_extensions.clear();
        self.input_object_type_definitions.clear();
        self.input_object_type_extensions.clear();
        self.directive_definitions.clear();
        self.field_definitions.clear();
        self.input_value_definitions.clear();
        self.operation_definitions.clear();
        self.variable_definitions.clear();
        self.fragment_definitions.clear();
        self.selection_sets.clear();
        self.selections.clear();
        self.fields.clear();
        self.inline_fragments.clear();
        self.fragment_spreads.clear();
        self.arguments.clear();
        self.directives.clear();
        self.types.clear();
        self.values.clear();
        self.variable_values.clear();
        self.int_values.clear();
        self.float_values.clear();
        self.string_values.clear();
        self.boolean_values.clear();
        self.enum_values.clear();
        self.list_values.clear();
        self.object_values.clear();
        self.object_fields.clear();
    }

    /// Returns `true` if no node of any kind has been appended.
    pub fn is_empty(&self) -> bool {
        self.root_nodes.is_empty() && self.node_count() == 0
    }

    /// Total number of nodes across all arenas (excluding `root_nodes`).
    pub fn node_count(&self) -> usize {
        self.schema_definitions.len()
            + self.schema_extensions.len()
            + self.root_operation_type_definitions.len()
            + self.object_type_definitions.len()
            + self.object_type_extensions.len()
            + self.interface_type_definitions.len()
            + self.interface_type_extensions.len()
            + self.union_type_definitions.len()
            + self.union_type_extensions.len()
            + self.enum_type_definitions.len()
            + self.enum_type_extensions.len()
            + self.enum_value_definitions.len()
            + self.scalar_type_definitions.len()
            + self.scalar_type_extensions.len()
            + self.input_object_type_definitions.len()
            + self.input_object_type_extensions.len()
            + self.directive_definitions.len()
            + self.field_definitions.len()
            + self.input_value_definitions.len()
            + self.operation_definitions.len()
            + self.variable_definitions.len()
            + self.fragment_definitions.len()
            + self.selection_sets.len()
            + self.selections.len()
            + self.fields.len()
            + self.inline_fragments.len()
            + self.fragment_spreads.len()
            + self.arguments.len()
            + self.directives.len()
            + self.types.len()
            + self.values.len()
            + self.variable_values.len()
            + self.int_values.len()
            + self.float_values.len()
            + self.string_values.len()
            + self.boolean_values.len()
            + self.enum_values.len()
            + self.list_values.len()
            + self.object_values.len()
            + self.object_fields.len()
    }

    /// Records a top-level definition.
    pub fn add_root_node(&mut self, kind: NodeKind, node: Ref) {
        self.root_nodes.push(RootNode { kind, node });
    }

    /// Iterates the operation definitions in source order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> + '_ {
        self.root_nodes
            .iter()
            .filter(|root| root.kind == NodeKind::OperationDefinition)
            .map(|root| &self.operation_definitions[root.node.index()])
    }

    /// Follows `of_type` links from `type_ref` down to the innermost `Named`
    /// type.
    pub fn named_type(&self, type_ref: Ref) -> &Type {
        let mut current = &self.types[type_ref.index()];
        while let Some(inner) = current.of_type.get() {
            current = &self.types[inner.index()];
        }
        current
    }

    /// Returns the boolean for a `Boolean` value, `None` for other kinds.
    pub fn boolean_value(&self, value: &Value) -> Option<bool> {
        (value.kind == ValueKind::Boolean)
            .then(|| self.boolean_values[value.node.index()].value)
    }
}

impl Reset for Document {
    fn reset(&mut self) {
        Document::reset(self);
    }
}

/// Appends `node` to `arena` and returns its [`Ref`].
pub(crate) fn append<T>(arena: &mut Vec<T>, node: T) -> Ref {
    let node_ref = Ref::new(arena.len());
    arena.push(node);
    node_ref
}
