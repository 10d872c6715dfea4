//! Recursive descent parser from a [`Lexer`]'s token stream into a
//! [`Document`].
//!
//! # Architecture
//!
//! Each grammar production has a `parse_*` method that peeks at the next
//! token to pick an alternative, consumes the tokens it owns, appends its
//! nodes to the document's arenas and returns their [`Ref`]s. Children are
//! appended before their parents, so the refs stored in every [`RefList`]
//! appear in source order.
//!
//! # Errors
//!
//! Parsing is fail-fast: the first lexical or syntax error is returned
//! through `?` from every enclosing production. The document is left
//! partially populated and must be reset before reuse.

use crate::ast::append;
use crate::ast::Argument;
use crate::ast::BooleanValue;
use crate::ast::Description;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::DirectiveLocation;
use crate::ast::DirectiveLocations;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumTypeExtension;
use crate::ast::EnumValue;
use crate::ast::EnumValueDefinition;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FloatValue;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputObjectTypeExtension;
use crate::ast::InputValueDefinition;
use crate::ast::IntValue;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::InterfaceTypeExtension;
use crate::ast::ListValue;
use crate::ast::NodeKind;
use crate::ast::ObjectField;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ObjectTypeExtension;
use crate::ast::ObjectValue;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::Ref;
use crate::ast::RefList;
use crate::ast::RootOperationTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::ScalarTypeExtension;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::Selection;
use crate::ast::SelectionKind;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::ast::Type;
use crate::ast::TypeCondition;
use crate::ast::TypeKind;
use crate::ast::UnionTypeDefinition;
use crate::ast::UnionTypeExtension;
use crate::ast::Value;
use crate::ast::ValueKind;
use crate::ast::VariableDefinition;
use crate::ast::VariableValue;
use crate::token::Keyword;
use crate::token::Token;
use crate::ByteSliceRef;
use crate::Document;
use crate::Input;
use crate::Lexer;
use crate::ParseError;
use crate::ParseErrorKind;
use crate::ReservedNameContext;

/// Parses `input` into `document`, which should be empty or freshly reset.
///
/// The input may hold executable definitions, type system definitions, or
/// a mix of both.
pub fn parse(input: &Input, document: &mut Document) -> Result<(), ParseError> {
    Parser::new(input, document).parse()
}

/// Recursive descent GraphQL parser writing into a borrowed [`Document`].
///
/// See module documentation for details.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    input: &'a Input,
    document: &'a mut Document,

    /// Current nesting depth of values, types and selection sets.
    recursion_depth: usize,

    /// Set while parsing a default value, where variables are not allowed.
    in_const_value: bool,
}

impl<'a> Parser<'a> {
    /// Values, types and selection sets deeper than this are rejected
    /// instead of risking stack exhaustion.
    pub const MAX_RECURSION_DEPTH: usize = 64;

    pub fn new(input: &'a Input, document: &'a mut Document) -> Self {
        Self {
            lexer: Lexer::new(input),
            input,
            document,
            recursion_depth: 0,
            in_const_value: false,
        }
    }

    /// Parses definitions until the end of the input.
    pub fn parse(&mut self) -> Result<(), ParseError> {
        while self.peek()?.keyword != Keyword::Eof {
            self.parse_definition()?;
        }
        log::trace!(
            "parsed {} bytes into {} root nodes",
            self.input.len(),
            self.document.root_nodes.len(),
        );
        Ok(())
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn peek(&mut self) -> Result<Token, ParseError> {
        self.lexer.peek()
    }

    fn read(&mut self) -> Result<Token, ParseError> {
        self.lexer.read()
    }

    fn peek_is(&mut self, keyword: Keyword) -> Result<bool, ParseError> {
        Ok(self.peek()?.keyword == keyword)
    }

    /// Consumes the next token if it is `keyword`.
    fn skip_if(&mut self, keyword: Keyword) -> Result<Option<Token>, ParseError> {
        if self.peek_is(keyword)? {
            self.read().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Consumes the next token, which must be `keyword`.
    fn expect(&mut self, keyword: Keyword) -> Result<Token, ParseError> {
        let token = self.peek()?;
        if token.keyword == keyword {
            return self.read();
        }
        Err(self.unexpected(token, &[&format!("`{}`", keyword.describe())]))
    }

    /// Consumes a Name token.
    ///
    /// Word keywords (`type`, `query`, `on`, `true`, ...) are Names wherever
    /// the grammar asks for one.
    fn expect_name(&mut self) -> Result<Token, ParseError> {
        let token = self.peek()?;
        if token.keyword.is_name() {
            return self.read();
        }
        Err(self.unexpected(token, &["name"]))
    }

    /// Consumes the `close` token matching `opener`, reporting an unclosed
    /// delimiter if the input ends first.
    fn expect_closing(&mut self, close: Keyword, opener: Token) -> Result<Token, ParseError> {
        let token = self.peek()?;
        if token.keyword == Keyword::Eof {
            return Err(self.unclosed_delimiter(opener, token));
        }
        self.expect(close)
    }

    /// Parses `open item* close`. Unless `allow_empty`, at least one item
    /// is required.
    fn parse_delimited<F>(
        &mut self,
        open: Keyword,
        close: Keyword,
        allow_empty: bool,
        item_description: &str,
        mut parse_item: F,
    ) -> Result<(Token, RefList), ParseError>
    where
        F: FnMut(&mut Self) -> Result<Ref, ParseError>,
    {
        let opener = self.expect(open)?;
        let mut items = RefList::new();
        loop {
            let token = self.peek()?;
            if token.keyword == close {
                if items.is_empty() && !allow_empty {
                    return Err(self.empty_delimited(opener, token, item_description));
                }
                self.read()?;
                return Ok((opener, items));
            }
            if token.keyword == Keyword::Eof {
                return Err(self.unclosed_delimiter(opener, token));
            }
            items.push(parse_item(self)?);
        }
    }

    fn enter_recursion(&mut self) -> Result<(), ParseError> {
        if self.recursion_depth >= Self::MAX_RECURSION_DEPTH {
            let token = self.peek()?;
            let mut error = ParseError::new(
                "maximum nesting depth exceeded",
                token.position,
                token.literal.len(),
                ParseErrorKind::NestingTooDeep,
            );
            error.add_note(format!(
                "values, types and selection sets may nest at most {} levels deep",
                Self::MAX_RECURSION_DEPTH,
            ));
            return Err(error);
        }
        self.recursion_depth += 1;
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Error construction
    // =========================================================================

    /// Text of `token` as shown in "found ..." messages.
    fn token_text(&self, token: Token) -> String {
        match token.keyword {
            Keyword::Eof => "end of input".to_string(),
            Keyword::String | Keyword::BlockString => "string".to_string(),
            _ => self.input.byte_slice_string(token.literal).into_owned(),
        }
    }

    fn unexpected(&self, token: Token, expected: &[&str]) -> ParseError {
        let expected_display = expected.join(" or ");
        let expected: Vec<String> = expected.iter().map(|item| item.to_string()).collect();
        if token.keyword == Keyword::Eof {
            return ParseError::new(
                format!("expected {expected_display}, found end of input"),
                token.position,
                0,
                ParseErrorKind::UnexpectedEof { expected },
            );
        }
        let found = self.token_text(token);
        let message = if token.keyword.is_string() {
            format!("expected {expected_display}, found string")
        } else {
            format!("expected {expected_display}, found `{found}`")
        };
        ParseError::new(
            message,
            token.position,
            token.literal.len(),
            ParseErrorKind::UnexpectedToken { expected, found },
        )
    }

    fn unclosed_delimiter(&self, opener: Token, eof: Token) -> ParseError {
        let delimiter = opener.keyword.describe();
        let mut error = ParseError::new(
            format!("unclosed `{delimiter}`"),
            eof.position,
            0,
            ParseErrorKind::UnclosedDelimiter {
                delimiter: delimiter.to_string(),
            },
        );
        error.add_note_at(format!("`{delimiter}` opened here"), opener.position);
        error
    }

    fn empty_delimited(&self, opener: Token, close: Token, item_description: &str) -> ParseError {
        let construct = format!("{}{}", opener.keyword.describe(), close.keyword.describe());
        let mut error = ParseError::new(
            format!("expected at least one {item_description}, found `{construct}`"),
            opener.position,
            close.literal.end.saturating_sub(opener.literal.start),
            ParseErrorKind::InvalidEmptyConstruct { construct },
        );
        error.add_help(format!("Add a {item_description} or remove the empty delimiters"));
        error
    }

    /// Error for a separator (`|`, `&`, `=`) not followed by a name.
    fn dangling_separator(&self, token: Token, construct: &str, item_description: &str) -> ParseError {
        let found = self.token_text(token);
        let message = match token.keyword {
            Keyword::Eof => format!("expected {item_description} in {construct}, found end of input"),
            _ if token.keyword.is_string() => {
                format!("expected {item_description} in {construct}, found string")
            },
            _ => format!("expected {item_description} in {construct}, found `{found}`"),
        };
        ParseError::new(
            message,
            token.position,
            token.literal.len(),
            ParseErrorKind::InvalidEmptyConstruct {
                construct: construct.to_string(),
            },
        )
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn parse_definition(&mut self) -> Result<(), ParseError> {
        let token = self.peek()?;
        if token.keyword.is_string() {
            let description = self.parse_description()?;
            let next = self.peek()?;
            return match next.keyword {
                // A trailing description with nothing to describe is ignored.
                Keyword::Eof => Ok(()),
                Keyword::Schema
                | Keyword::Scalar
                | Keyword::Type
                | Keyword::Interface
                | Keyword::Union
                | Keyword::Enum
                | Keyword::Input
                | Keyword::Directive => self.parse_type_system_definition(description),
                _ => {
                    let mut error = self.unexpected(next, &["type system definition"]);
                    error.add_note_at("description starts here", description.position);
                    error.add_help(
                        "Descriptions may only precede schema, type and directive definitions",
                    );
                    Err(error)
                },
            };
        }

        match token.keyword {
            Keyword::Schema
            | Keyword::Scalar
            | Keyword::Type
            | Keyword::Interface
            | Keyword::Union
            | Keyword::Enum
            | Keyword::Input
            | Keyword::Directive => self.parse_type_system_definition(Description::default()),
            Keyword::Extend => self.parse_type_system_extension(),
            Keyword::Query
            | Keyword::Mutation
            | Keyword::Subscription
            | Keyword::CurlyBraceOpen => self.parse_operation_definition(),
            Keyword::Fragment => self.parse_fragment_definition(),
            _ => {
                let mut error = self.unexpected(token, &["definition"]);
                error.add_help(
                    "A document consists of operations, fragments and type system definitions",
                );
                Err(error)
            },
        }
    }

    fn parse_type_system_definition(&mut self, description: Description) -> Result<(), ParseError> {
        let (kind, node) = match self.peek()?.keyword {
            Keyword::Schema => (
                NodeKind::SchemaDefinition,
                self.parse_schema_definition(description)?,
            ),
            Keyword::Scalar => (
                NodeKind::ScalarTypeDefinition,
                self.parse_scalar_type_definition(description)?,
            ),
            Keyword::Type => (
                NodeKind::ObjectTypeDefinition,
                self.parse_object_type_definition(description)?,
            ),
            Keyword::Interface => (
                NodeKind::InterfaceTypeDefinition,
                self.parse_interface_type_definition(description)?,
            ),
            Keyword::Union => (
                NodeKind::UnionTypeDefinition,
                self.parse_union_type_definition(description)?,
            ),
            Keyword::Enum => (
                NodeKind::EnumTypeDefinition,
                self.parse_enum_type_definition(description)?,
            ),
            Keyword::Input => (
                NodeKind::InputObjectTypeDefinition,
                self.parse_input_object_type_definition(description)?,
            ),
            _ => (
                NodeKind::DirectiveDefinition,
                self.parse_directive_definition(description)?,
            ),
        };
        self.document.add_root_node(kind, node);
        Ok(())
    }

    /// Parses an optional description string.
    ///
    /// See: <https://spec.graphql.org/September2025/#Description>
    fn parse_description(&mut self) -> Result<Description, ParseError> {
        let token = self.peek()?;
        if !token.keyword.is_string() {
            return Ok(Description::default());
        }
        self.read()?;
        Ok(Description {
            is_defined: true,
            is_block_string: token.keyword == Keyword::BlockString,
            content: token.literal,
            block_indent: token.block_indent,
            position: token.position,
        })
    }

    // =========================================================================
    // Executable definitions
    // =========================================================================

    /// Parses an operation, including the `{ ... }` query shorthand.
    ///
    /// See: <https://spec.graphql.org/September2025/#sec-Language.Operations>
    fn parse_operation_definition(&mut self) -> Result<(), ParseError> {
        let token = self.peek()?;
        let mut operation = OperationDefinition {
            operation_type: OperationType::Query,
            name: None,
            variable_definitions: RefList::new(),
            directives: RefList::new(),
            selection_set: Ref::NONE,
            position: token.position,
        };

        if token.keyword != Keyword::CurlyBraceOpen {
            self.read()?;
            operation.operation_type = match token.keyword {
                Keyword::Mutation => OperationType::Mutation,
                Keyword::Subscription => OperationType::Subscription,
                _ => OperationType::Query,
            };
            if self.peek()?.keyword.is_name() {
                operation.name = Some(self.read()?.literal);
            }
            if self.peek_is(Keyword::ParenOpen)? {
                operation.variable_definitions = self.parse_variable_definitions()?;
            }
            operation.directives = self.parse_directives()?;
        }

        operation.selection_set = self.parse_selection_set()?;
        let node = append(&mut self.document.operation_definitions, operation);
        self.document.add_root_node(NodeKind::OperationDefinition, node);
        Ok(())
    }

    /// Parses `( VariableDefinition+ )`.
    ///
    /// See: <https://spec.graphql.org/September2025/#VariablesDefinition>
    pub fn parse_variable_definitions(&mut self) -> Result<RefList, ParseError> {
        let (_, definitions) = self.parse_delimited(
            Keyword::ParenOpen,
            Keyword::ParenClose,
            false,
            "variable definition",
            Self::parse_variable_definition,
        )?;
        Ok(definitions)
    }

    fn parse_variable_definition(&mut self) -> Result<Ref, ParseError> {
        let position = self.peek()?.position;
        let variable = self.parse_variable()?;
        self.expect(Keyword::Colon)?;
        let type_ref = self.parse_type()?;
        let default_value = self.parse_default_value()?;
        let directives = self.parse_directives()?;
        Ok(append(
            &mut self.document.variable_definitions,
            VariableDefinition {
                variable,
                type_ref,
                default_value,
                directives,
                position,
            },
        ))
    }

    fn parse_default_value(&mut self) -> Result<Option<Value>, ParseError> {
        if self.skip_if(Keyword::Equals)?.is_none() {
            return Ok(None);
        }
        self.in_const_value = true;
        let value = self.parse_value();
        self.in_const_value = false;
        value.map(Some)
    }

    /// Parses `fragment Name on Type Directives? SelectionSet`.
    ///
    /// See: <https://spec.graphql.org/September2025/#FragmentDefinition>
    fn parse_fragment_definition(&mut self) -> Result<(), ParseError> {
        let keyword = self.expect(Keyword::Fragment)?;
        let name = self.expect_name()?;
        if name.keyword == Keyword::On {
            return Err(self.reserved_fragment_name(name));
        }
        let on = self.expect(Keyword::On)?;
        let type_condition = self.parse_type_condition(on)?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        let node = append(
            &mut self.document.fragment_definitions,
            FragmentDefinition {
                name: name.literal,
                type_condition,
                directives,
                selection_set,
                position: keyword.position,
            },
        );
        self.document.add_root_node(NodeKind::FragmentDefinition, node);
        Ok(())
    }

    fn reserved_fragment_name(&self, token: Token) -> ParseError {
        let mut error = ParseError::new(
            "fragment name cannot be `on`",
            token.position,
            token.literal.len(),
            ParseErrorKind::ReservedName {
                name: "on".to_string(),
                context: ReservedNameContext::FragmentName,
            },
        );
        error.add_spec("https://spec.graphql.org/September2025/#FragmentName");
        error
    }

    fn parse_type_condition(&mut self, on: Token) -> Result<TypeCondition, ParseError> {
        let named_type = self.parse_named_type()?;
        Ok(TypeCondition {
            named_type,
            position: on.position,
        })
    }

    // =========================================================================
    // Selection sets
    // =========================================================================

    /// Parses `{ Selection+ }`.
    ///
    /// See: <https://spec.graphql.org/September2025/#SelectionSet>
    pub fn parse_selection_set(&mut self) -> Result<Ref, ParseError> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_impl();
        self.exit_recursion();
        result
    }

    fn parse_selection_set_impl(&mut self) -> Result<Ref, ParseError> {
        let (opener, selections) = self.parse_delimited(
            Keyword::CurlyBraceOpen,
            Keyword::CurlyBraceClose,
            false,
            "selection",
            Self::parse_selection,
        )?;
        Ok(append(
            &mut self.document.selection_sets,
            SelectionSet {
                selections,
                position: opener.position,
            },
        ))
    }

    fn parse_selection(&mut self) -> Result<Ref, ParseError> {
        let token = self.peek()?;
        let (kind, node) = if token.keyword == Keyword::Ellipsis {
            self.parse_fragment_selection()?
        } else if token.keyword.is_name() {
            (SelectionKind::Field, self.parse_field()?)
        } else {
            return Err(self.unexpected(token, &["field", "`...`"]));
        };
        Ok(append(&mut self.document.selections, Selection { kind, node }))
    }

    /// Parses a field: `alias: name(args) @directives { ... }`.
    ///
    /// See: <https://spec.graphql.org/September2025/#Field>
    fn parse_field(&mut self) -> Result<Ref, ParseError> {
        let first = self.expect_name()?;
        let (alias, name) = if self.skip_if(Keyword::Colon)?.is_some() {
            (Some(first.literal), self.expect_name()?.literal)
        } else {
            (None, first.literal)
        };
        let arguments = self.parse_optional_arguments()?;
        let directives = self.parse_directives()?;
        let selection_set = if self.peek_is(Keyword::CurlyBraceOpen)? {
            self.parse_selection_set()?
        } else {
            Ref::NONE
        };
        Ok(append(
            &mut self.document.fields,
            Field {
                alias,
                name,
                arguments,
                directives,
                selection_set,
                position: first.position,
            },
        ))
    }

    /// Parses what follows `...`: a fragment spread, or an inline fragment
    /// with or without a type condition.
    fn parse_fragment_selection(&mut self) -> Result<(SelectionKind, Ref), ParseError> {
        let ellipsis = self.expect(Keyword::Ellipsis)?;
        let token = self.peek()?;
        match token.keyword {
            Keyword::On => {
                let on = self.read()?;
                if !self.peek()?.keyword.is_name() {
                    let mut error = self.reserved_fragment_name(on);
                    error.add_note("`... on` starts an inline fragment and must be followed by a type name");
                    return Err(error);
                }
                let type_condition = self.parse_type_condition(on)?;
                let node = self.parse_inline_fragment(ellipsis, Some(type_condition))?;
                Ok((SelectionKind::InlineFragment, node))
            },
            Keyword::CurlyBraceOpen | Keyword::At => {
                let node = self.parse_inline_fragment(ellipsis, None)?;
                Ok((SelectionKind::InlineFragment, node))
            },
            keyword if keyword.is_name() => {
                self.read()?;
                let directives = self.parse_directives()?;
                let node = append(
                    &mut self.document.fragment_spreads,
                    FragmentSpread {
                        fragment_name: token.literal,
                        directives,
                        position: ellipsis.position,
                    },
                );
                Ok((SelectionKind::FragmentSpread, node))
            },
            _ => Err(self.unexpected(token, &["fragment name", "`on`", "`{`"])),
        }
    }

    /// See: <https://spec.graphql.org/September2025/#InlineFragment>
    fn parse_inline_fragment(
        &mut self,
        ellipsis: Token,
        type_condition: Option<TypeCondition>,
    ) -> Result<Ref, ParseError> {
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(append(
            &mut self.document.inline_fragments,
            InlineFragment {
                type_condition,
                directives,
                selection_set,
                position: ellipsis.position,
            },
        ))
    }

    // =========================================================================
    // Arguments and directives
    // =========================================================================

    fn parse_optional_arguments(&mut self) -> Result<RefList, ParseError> {
        if !self.peek_is(Keyword::ParenOpen)? {
            return Ok(RefList::new());
        }
        let (_, arguments) = self.parse_delimited(
            Keyword::ParenOpen,
            Keyword::ParenClose,
            false,
            "argument",
            Self::parse_argument,
        )?;
        Ok(arguments)
    }

    fn parse_argument(&mut self) -> Result<Ref, ParseError> {
        let name = self.expect_name()?;
        self.expect(Keyword::Colon)?;
        let value = self.parse_value()?;
        Ok(append(
            &mut self.document.arguments,
            Argument {
                name: name.literal,
                value,
                position: name.position,
            },
        ))
    }

    /// Parses zero or more `@name(args)` directives.
    ///
    /// See: <https://spec.graphql.org/September2025/#Directives>
    fn parse_directives(&mut self) -> Result<RefList, ParseError> {
        let mut directives = RefList::new();
        while let Some(at) = self.skip_if(Keyword::At)? {
            let name = self.expect_name()?;
            let arguments = self.parse_optional_arguments()?;
            directives.push(append(
                &mut self.document.directives,
                Directive {
                    name: name.literal,
                    arguments,
                    position: at.position,
                },
            ));
        }
        Ok(directives)
    }

    // =========================================================================
    // Types
    // =========================================================================

    /// Parses a type reference: `Name`, `[Type]`, either optionally
    /// followed by `!`.
    ///
    /// See: <https://spec.graphql.org/September2025/#sec-Type-References>
    pub fn parse_type(&mut self) -> Result<Ref, ParseError> {
        self.enter_recursion()?;
        let result = self.parse_type_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_impl(&mut self) -> Result<Ref, ParseError> {
        let token = self.peek()?;
        let base = match token.keyword {
            Keyword::SquareBracketOpen => {
                let opener = self.read()?;
                let next = self.peek()?;
                if next.keyword == Keyword::SquareBracketClose {
                    let mut error = ParseError::new(
                        "list type must wrap a type, found `[]`",
                        opener.position,
                        2,
                        ParseErrorKind::InvalidEmptyConstruct {
                            construct: "[]".to_string(),
                        },
                    );
                    error.add_help("Write the item type inside the brackets, e.g. `[String]`");
                    return Err(error);
                }
                let of_type = self.parse_type()?;
                self.expect_closing(Keyword::SquareBracketClose, opener)?;
                append(
                    &mut self.document.types,
                    Type {
                        kind: TypeKind::List,
                        name: ByteSliceRef::default(),
                        of_type,
                        position: opener.position,
                    },
                )
            },
            keyword if keyword.is_name() => self.parse_named_type()?,
            _ => return Err(self.unexpected(token, &["type"])),
        };

        if self.skip_if(Keyword::Bang)?.is_none() {
            return Ok(base);
        }
        let next = self.peek()?;
        if next.keyword == Keyword::Bang {
            let mut error = self.unexpected(next, &["end of type"]);
            error.add_note("a type can only be marked non-null once");
            return Err(error);
        }
        Ok(append(
            &mut self.document.types,
            Type {
                kind: TypeKind::NonNull,
                name: ByteSliceRef::default(),
                of_type: base,
                position: token.position,
            },
        ))
    }

    fn parse_named_type(&mut self) -> Result<Ref, ParseError> {
        let name = self.expect_name()?;
        Ok(append(
            &mut self.document.types,
            Type {
                kind: TypeKind::Named,
                name: name.literal,
                of_type: Ref::NONE,
                position: name.position,
            },
        ))
    }

    /// Parses `Name (separator Name)*` with an optional leading separator,
    /// as used by `implements` lists and union members.
    fn parse_named_type_list(
        &mut self,
        separator: Keyword,
        construct: &str,
    ) -> Result<RefList, ParseError> {
        self.skip_if(separator)?;
        let mut types = RefList::new();
        loop {
            let token = self.peek()?;
            if !token.keyword.is_name() {
                return Err(self.dangling_separator(token, construct, "type name"));
            }
            types.push(self.parse_named_type()?);
            if self.skip_if(separator)?.is_none() {
                return Ok(types);
            }
        }
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Parses a value literal or variable reference.
    ///
    /// See: <https://spec.graphql.org/September2025/#sec-Input-Values>
    pub fn parse_value(&mut self) -> Result<Value, ParseError> {
        self.enter_recursion()?;
        let result = self.parse_value_impl();
        self.exit_recursion();
        result
    }

    fn parse_value_impl(&mut self) -> Result<Value, ParseError> {
        let token = self.peek()?;
        let position = token.position;
        let (kind, node) = match token.keyword {
            Keyword::Dollar if self.in_const_value => {
                let mut error = self.unexpected(token, &["constant value"]);
                error.add_note("default values may not reference variables");
                return Err(error);
            },
            Keyword::Dollar => (ValueKind::Variable, self.parse_variable()?),
            Keyword::Integer => {
                self.read()?;
                let (raw, negative) = self.split_sign(token.literal);
                let node = append(
                    &mut self.document.int_values,
                    IntValue { raw, negative, position },
                );
                (ValueKind::Integer, node)
            },
            Keyword::Float => {
                self.read()?;
                let (raw, negative) = self.split_sign(token.literal);
                let node = append(
                    &mut self.document.float_values,
                    FloatValue { raw, negative, position },
                );
                (ValueKind::Float, node)
            },
            Keyword::String | Keyword::BlockString => {
                self.read()?;
                let node = append(
                    &mut self.document.string_values,
                    StringValue {
                        content: token.literal,
                        is_block_string: token.keyword == Keyword::BlockString,
                        block_indent: token.block_indent,
                        position,
                    },
                );
                (ValueKind::String, node)
            },
            Keyword::True | Keyword::False => {
                self.read()?;
                let node = append(
                    &mut self.document.boolean_values,
                    BooleanValue {
                        value: token.keyword == Keyword::True,
                        position,
                    },
                );
                (ValueKind::Boolean, node)
            },
            Keyword::Null => {
                self.read()?;
                (ValueKind::Null, Ref::NONE)
            },
            Keyword::SquareBracketOpen => (ValueKind::List, self.parse_list_value()?),
            Keyword::CurlyBraceOpen => (ValueKind::Object, self.parse_object_value()?),
            keyword if keyword.is_name() => {
                self.read()?;
                let node = append(
                    &mut self.document.enum_values,
                    EnumValue {
                        name: token.literal,
                        position,
                    },
                );
                (ValueKind::Enum, node)
            },
            _ => return Err(self.unexpected(token, &["value"])),
        };
        Ok(Value { kind, node, position })
    }

    /// Splits a number literal into its digits and sign.
    fn split_sign(&self, literal: ByteSliceRef) -> (ByteSliceRef, bool) {
        if self.input.byte_slice(literal).first() == Some(&b'-') {
            (ByteSliceRef::new(literal.start + 1, literal.end), true)
        } else {
            (literal, false)
        }
    }

    /// Parses `$name`, with no whitespace allowed after `$`.
    ///
    /// See: <https://spec.graphql.org/September2025/#Variable>
    fn parse_variable(&mut self) -> Result<Ref, ParseError> {
        let dollar = self.expect(Keyword::Dollar)?;
        let name = self.peek()?;
        if !name.keyword.is_name() {
            return Err(self.unexpected(name, &["variable name"]));
        }
        if name.literal.start != dollar.literal.end {
            let found = self.token_text(name);
            let mut error = ParseError::new(
                format!("expected variable name immediately after `$`, found whitespace before `{found}`"),
                dollar.position,
                name.literal.end - dollar.literal.start,
                ParseErrorKind::UnexpectedToken {
                    expected: vec!["variable name".to_string()],
                    found,
                },
            );
            error.add_help("Remove the whitespace between `$` and the variable name");
            return Err(error);
        }
        self.read()?;
        Ok(append(
            &mut self.document.variable_values,
            VariableValue {
                name: name.literal,
                position: dollar.position,
            },
        ))
    }

    /// Parses `[ Value* ]`. Items are stored in [`Document::values`].
    fn parse_list_value(&mut self) -> Result<Ref, ParseError> {
        let opener = self.expect(Keyword::SquareBracketOpen)?;
        let mut values = RefList::new();
        loop {
            let token = self.peek()?;
            match token.keyword {
                Keyword::SquareBracketClose => {
                    self.read()?;
                    break;
                },
                Keyword::Eof => return Err(self.unclosed_delimiter(opener, token)),
                _ => {
                    let value = self.parse_value()?;
                    values.push(append(&mut self.document.values, value));
                },
            }
        }
        Ok(append(
            &mut self.document.list_values,
            ListValue {
                values,
                position: opener.position,
            },
        ))
    }

    /// Parses `{ (Name: Value)* }`.
    fn parse_object_value(&mut self) -> Result<Ref, ParseError> {
        let (opener, fields) = self.parse_delimited(
            Keyword::CurlyBraceOpen,
            Keyword::CurlyBraceClose,
            true,
            "object field",
            Self::parse_object_field,
        )?;
        Ok(append(
            &mut self.document.object_values,
            ObjectValue {
                fields,
                position: opener.position,
            },
        ))
    }

    fn parse_object_field(&mut self) -> Result<Ref, ParseError> {
        let name = self.expect_name()?;
        self.expect(Keyword::Colon)?;
        let value = self.parse_value()?;
        Ok(append(
            &mut self.document.object_fields,
            ObjectField {
                name: name.literal,
                value,
                position: name.position,
            },
        ))
    }

    // =========================================================================
    // Type system definitions
    // =========================================================================

    /// See: <https://spec.graphql.org/September2025/#SchemaDefinition>
    fn parse_schema_definition(&mut self, description: Description) -> Result<Ref, ParseError> {
        let keyword = self.expect(Keyword::Schema)?;
        let directives = self.parse_directives()?;
        let root_operation_types = self.parse_root_operation_types()?;
        Ok(append(
            &mut self.document.schema_definitions,
            SchemaDefinition {
                description,
                directives,
                root_operation_types,
                position: keyword.position,
            },
        ))
    }

    fn parse_root_operation_types(&mut self) -> Result<RefList, ParseError> {
        let (_, root_operation_types) = self.parse_delimited(
            Keyword::CurlyBraceOpen,
            Keyword::CurlyBraceClose,
            false,
            "root operation type",
            Self::parse_root_operation_type_definition,
        )?;
        Ok(root_operation_types)
    }

    /// See: <https://spec.graphql.org/September2025/#RootOperationTypeDefinition>
    fn parse_root_operation_type_definition(&mut self) -> Result<Ref, ParseError> {
        let token = self.peek()?;
        let operation_type = match token.keyword {
            Keyword::Query => OperationType::Query,
            Keyword::Mutation => OperationType::Mutation,
            Keyword::Subscription => OperationType::Subscription,
            _ => return Err(self.unexpected(token, &["`query`", "`mutation`", "`subscription`"])),
        };
        self.read()?;
        self.expect(Keyword::Colon)?;
        let named_type = self.parse_named_type()?;
        Ok(append(
            &mut self.document.root_operation_type_definitions,
            RootOperationTypeDefinition {
                operation_type,
                named_type,
                position: token.position,
            },
        ))
    }

    /// See: <https://spec.graphql.org/September2025/#ScalarTypeDefinition>
    fn parse_scalar_type_definition(&mut self, description: Description) -> Result<Ref, ParseError> {
        let keyword = self.expect(Keyword::Scalar)?;
        let name = self.expect_name()?;
        let directives = self.parse_directives()?;
        Ok(append(
            &mut self.document.scalar_type_definitions,
            ScalarTypeDefinition {
                description,
                name: name.literal,
                directives,
                position: keyword.position,
            },
        ))
    }

    /// See: <https://spec.graphql.org/September2025/#ObjectTypeDefinition>
    fn parse_object_type_definition(&mut self, description: Description) -> Result<Ref, ParseError> {
        let keyword = self.expect(Keyword::Type)?;
        let name = self.expect_name()?;
        let implements_interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives()?;
        let fields = self.parse_optional_fields_definition()?;
        Ok(append(
            &mut self.document.object_type_definitions,
            ObjectTypeDefinition {
                description,
                name: name.literal,
                implements_interfaces,
                directives,
                fields,
                position: keyword.position,
            },
        ))
    }

    /// See: <https://spec.graphql.org/September2025/#InterfaceTypeDefinition>
    fn parse_interface_type_definition(
        &mut self,
        description: Description,
    ) -> Result<Ref, ParseError> {
        let keyword = self.expect(Keyword::Interface)?;
        let name = self.expect_name()?;
        let implements_interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives()?;
        let fields = self.parse_optional_fields_definition()?;
        Ok(append(
            &mut self.document.interface_type_definitions,
            InterfaceTypeDefinition {
                description,
                name: name.literal,
                implements_interfaces,
                directives,
                fields,
                position: keyword.position,
            },
        ))
    }

    /// Parses `implements &? Name (& Name)*`, or nothing.
    ///
    /// See: <https://spec.graphql.org/September2025/#ImplementsInterfaces>
    fn parse_implements_interfaces(&mut self) -> Result<RefList, ParseError> {
        if self.skip_if(Keyword::Implements)?.is_none() {
            return Ok(RefList::new());
        }
        self.parse_named_type_list(Keyword::Ampersand, "implements list")
    }

    /// See: <https://spec.graphql.org/September2025/#UnionTypeDefinition>
    fn parse_union_type_definition(&mut self, description: Description) -> Result<Ref, ParseError> {
        let keyword = self.expect(Keyword::Union)?;
        let name = self.expect_name()?;
        let directives = self.parse_directives()?;
        let members = self.parse_optional_union_members()?;
        Ok(append(
            &mut self.document.union_type_definitions,
            UnionTypeDefinition {
                description,
                name: name.literal,
                directives,
                members,
                position: keyword.position,
            },
        ))
    }

    fn parse_optional_union_members(&mut self) -> Result<RefList, ParseError> {
        if self.skip_if(Keyword::Equals)?.is_none() {
            return Ok(RefList::new());
        }
        self.parse_named_type_list(Keyword::Pipe, "union members")
    }

    /// See: <https://spec.graphql.org/September2025/#EnumTypeDefinition>
    fn parse_enum_type_definition(&mut self, description: Description) -> Result<Ref, ParseError> {
        let keyword = self.expect(Keyword::Enum)?;
        let name = self.expect_name()?;
        let directives = self.parse_directives()?;
        let values = self.parse_optional_enum_values_definition()?;
        Ok(append(
            &mut self.document.enum_type_definitions,
            EnumTypeDefinition {
                description,
                name: name.literal,
                directives,
                values,
                position: keyword.position,
            },
        ))
    }

    fn parse_optional_enum_values_definition(&mut self) -> Result<RefList, ParseError> {
        if !self.peek_is(Keyword::CurlyBraceOpen)? {
            return Ok(RefList::new());
        }
        let (_, values) = self.parse_delimited(
            Keyword::CurlyBraceOpen,
            Keyword::CurlyBraceClose,
            true,
            "enum value",
            Self::parse_enum_value_definition,
        )?;
        Ok(values)
    }

    /// See: <https://spec.graphql.org/September2025/#EnumValueDefinition>
    fn parse_enum_value_definition(&mut self) -> Result<Ref, ParseError> {
        let description = self.parse_description()?;
        let name = self.expect_name()?;
        if matches!(name.keyword, Keyword::True | Keyword::False | Keyword::Null) {
            let reserved = name.keyword.describe();
            let mut error = ParseError::new(
                format!("enum value cannot be `{reserved}`"),
                name.position,
                name.literal.len(),
                ParseErrorKind::ReservedName {
                    name: reserved.to_string(),
                    context: ReservedNameContext::EnumValue,
                },
            );
            error.add_spec("https://spec.graphql.org/September2025/#EnumValue");
            return Err(error);
        }
        let directives = self.parse_directives()?;
        Ok(append(
            &mut self.document.enum_value_definitions,
            EnumValueDefinition {
                description,
                name: name.literal,
                directives,
                position: name.position,
            },
        ))
    }

    /// See: <https://spec.graphql.org/September2025/#InputObjectTypeDefinition>
    fn parse_input_object_type_definition(
        &mut self,
        description: Description,
    ) -> Result<Ref, ParseError> {
        let keyword = self.expect(Keyword::Input)?;
        let name = self.expect_name()?;
        let directives = self.parse_directives()?;
        let fields = self.parse_optional_input_fields_definition()?;
        Ok(append(
            &mut self.document.input_object_type_definitions,
            InputObjectTypeDefinition {
                description,
                name: name.literal,
                directives,
                fields,
                position: keyword.position,
            },
        ))
    }

    fn parse_optional_fields_definition(&mut self) -> Result<RefList, ParseError> {
        if !self.peek_is(Keyword::CurlyBraceOpen)? {
            return Ok(RefList::new());
        }
        let (_, fields) = self.parse_delimited(
            Keyword::CurlyBraceOpen,
            Keyword::CurlyBraceClose,
            true,
            "field definition",
            Self::parse_field_definition,
        )?;
        Ok(fields)
    }

    /// See: <https://spec.graphql.org/September2025/#FieldDefinition>
    fn parse_field_definition(&mut self) -> Result<Ref, ParseError> {
        let description = self.parse_description()?;
        let name = self.expect_name()?;
        let arguments = self.parse_optional_arguments_definition()?;
        self.expect(Keyword::Colon)?;
        let type_ref = self.parse_type()?;
        let directives = self.parse_directives()?;
        Ok(append(
            &mut self.document.field_definitions,
            FieldDefinition {
                description,
                name: name.literal,
                arguments,
                type_ref,
                directives,
                position: name.position,
            },
        ))
    }

    fn parse_optional_arguments_definition(&mut self) -> Result<RefList, ParseError> {
        if !self.peek_is(Keyword::ParenOpen)? {
            return Ok(RefList::new());
        }
        let (_, arguments) = self.parse_delimited(
            Keyword::ParenOpen,
            Keyword::ParenClose,
            false,
            "argument definition",
            Self::parse_input_value_definition,
        )?;
        Ok(arguments)
    }

    fn parse_optional_input_fields_definition(&mut self) -> Result<RefList, ParseError> {
        if !self.peek_is(Keyword::CurlyBraceOpen)? {
            return Ok(RefList::new());
        }
        let (_, fields) = self.parse_delimited(
            Keyword::CurlyBraceOpen,
            Keyword::CurlyBraceClose,
            true,
            "input field definition",
            Self::parse_input_value_definition,
        )?;
        Ok(fields)
    }

    /// See: <https://spec.graphql.org/September2025/#InputValueDefinition>
    fn parse_input_value_definition(&mut self) -> Result<Ref, ParseError> {
        let description = self.parse_description()?;
        let name = self.expect_name()?;
        self.expect(Keyword::Colon)?;
        let type_ref = self.parse_type()?;
        let default_value = self.parse_default_value()?;
        let directives = self.parse_directives()?;
        Ok(append(
            &mut self.document.input_value_definitions,
            InputValueDefinition {
                description,
                name: name.literal,
                type_ref,
                default_value,
                directives,
                position: name.position,
            },
        ))
    }

    /// Parses `directive @name(args) repeatable? on Locations`.
    ///
    /// See: <https://spec.graphql.org/September2025/#DirectiveDefinition>
    fn parse_directive_definition(&mut self, description: Description) -> Result<Ref, ParseError> {
        let keyword = self.expect(Keyword::Directive)?;
        self.expect(Keyword::At)?;
        let name = self.expect_name()?;
        let arguments = self.parse_optional_arguments_definition()?;
        let repeatable = self.skip_if(Keyword::Repeatable)?.is_some();
        self.expect(Keyword::On)?;
        let locations = self.parse_directive_locations()?;
        Ok(append(
            &mut self.document.directive_definitions,
            DirectiveDefinition {
                description,
                name: name.literal,
                arguments,
                repeatable,
                locations,
                position: keyword.position,
            },
        ))
    }

    /// Parses `|? Location (| Location)*`.
    ///
    /// See: <https://spec.graphql.org/September2025/#DirectiveLocations>
    fn parse_directive_locations(&mut self) -> Result<DirectiveLocations, ParseError> {
        self.skip_if(Keyword::Pipe)?;
        let mut locations = DirectiveLocations::new();
        loop {
            let token = self.peek()?;
            if !token.keyword.is_name() {
                return Err(self.dangling_separator(token, "directive locations", "directive location"));
            }
            self.read()?;
            locations.insert(self.resolve_directive_location(token)?);
            if self.skip_if(Keyword::Pipe)?.is_none() {
                return Ok(locations);
            }
        }
    }

    fn resolve_directive_location(&self, token: Token) -> Result<DirectiveLocation, ParseError> {
        if let Some(location) = DirectiveLocation::from_name(self.input.byte_slice(token.literal)) {
            return Ok(location);
        }
        let name = self.token_text(token);
        let mut error = ParseError::new(
            format!("unknown directive location `{name}`"),
            token.position,
            token.literal.len(),
            ParseErrorKind::InvalidDirectiveLocation { name: name.clone() },
        );
        if let Some(suggestion) = suggest_directive_location(&name) {
            error.add_help(format!("did you mean `{suggestion}`?"));
        }
        error.add_spec("https://spec.graphql.org/September2025/#DirectiveLocations");
        Err(error)
    }

    // =========================================================================
    // Type system extensions
    // =========================================================================

    fn parse_type_system_extension(&mut self) -> Result<(), ParseError> {
        let extend = self.expect(Keyword::Extend)?;
        let token = self.peek()?;
        let (kind, node) = match token.keyword {
            Keyword::Schema => (NodeKind::SchemaExtension, self.parse_schema_extension(extend)?),
            Keyword::Scalar => (NodeKind::ScalarTypeExtension, self.parse_scalar_type_extension(extend)?),
            Keyword::Type => (NodeKind::ObjectTypeExtension, self.parse_object_type_extension(extend)?),
            Keyword::Interface => (
                NodeKind::InterfaceTypeExtension,
                self.parse_interface_type_extension(extend)?,
            ),
            Keyword::Union => (NodeKind::UnionTypeExtension, self.parse_union_type_extension(extend)?),
            Keyword::Enum => (NodeKind::EnumTypeExtension, self.parse_enum_type_extension(extend)?),
            Keyword::Input => (
                NodeKind::InputObjectTypeExtension,
                self.parse_input_object_type_extension(extend)?,
            ),
            _ => {
                return Err(self.unexpected(
                    token,
                    &["`schema`", "`scalar`", "`type`", "`interface`", "`union`", "`enum`", "`input`"],
                ));
            },
        };
        self.document.add_root_node(kind, node);
        Ok(())
    }

    /// Fails unless an extension added at least one thing.
    fn require_extension_content(&mut self, is_empty: bool, expected: &[&str]) -> Result<(), ParseError> {
        if !is_empty {
            return Ok(());
        }
        let token = self.peek()?;
        let mut error = self.unexpected(token, expected);
        error.add_note("an extension must add at least one directive, field, value or member");
        Err(error)
    }

    /// See: <https://spec.graphql.org/September2025/#SchemaExtension>
    fn parse_schema_extension(&mut self, extend: Token) -> Result<Ref, ParseError> {
        self.expect(Keyword::Schema)?;
        let directives = self.parse_directives()?;
        let root_operation_types = if self.peek_is(Keyword::CurlyBraceOpen)? {
            self.parse_root_operation_types()?
        } else {
            RefList::new()
        };
        self.require_extension_content(
            directives.is_empty() && root_operation_types.is_empty(),
            &["`@`", "`{`"],
        )?;
        Ok(append(
            &mut self.document.schema_extensions,
            SchemaExtension {
                directives,
                root_operation_types,
                position: extend.position,
            },
        ))
    }

    fn parse_scalar_type_extension(&mut self, extend: Token) -> Result<Ref, ParseError> {
        self.expect(Keyword::Scalar)?;
        let name = self.expect_name()?;
        let directives = self.parse_directives()?;
        self.require_extension_content(directives.is_empty(), &["`@`"])?;
        Ok(append(
            &mut self.document.scalar_type_extensions,
            ScalarTypeExtension {
                name: name.literal,
                directives,
                position: extend.position,
            },
        ))
    }

    fn parse_object_type_extension(&mut self, extend: Token) -> Result<Ref, ParseError> {
        self.expect(Keyword::Type)?;
        let name = self.expect_name()?;
        let implements_interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives()?;
        let fields = self.parse_optional_fields_definition()?;
        self.require_extension_content(
            implements_interfaces.is_empty() && directives.is_empty() && fields.is_empty(),
            &["`implements`", "`@`", "`{`"],
        )?;
        Ok(append(
            &mut self.document.object_type_extensions,
            ObjectTypeExtension {
                name: name.literal,
                implements_interfaces,
                directives,
                fields,
                position: extend.position,
            },
        ))
    }

    fn parse_interface_type_extension(&mut self, extend: Token) -> Result<Ref, ParseError> {
        self.expect(Keyword::Interface)?;
        let name = self.expect_name()?;
        let implements_interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives()?;
        let fields = self.parse_optional_fields_definition()?;
        self.require_extension_content(
            implements_interfaces.is_empty() && directives.is_empty() && fields.is_empty(),
            &["`implements`", "`@`", "`{`"],
        )?;
        Ok(append(
            &mut self.document.interface_type_extensions,
            InterfaceTypeExtension {
                name: name.literal,
                implements_interfaces,
                directives,
                fields,
                position: extend.position,
            },
        ))
    }

    fn parse_union_type_extension(&mut self, extend: Token) -> Result<Ref, ParseError> {
        self.expect(Keyword::Union)?;
        let name = self.expect_name()?;
        let directives = self.parse_directives()?;
        let members = self.parse_optional_union_members()?;
        self.require_extension_content(
            directives.is_empty() && members.is_empty(),
            &["`@`", "`=`"],
        )?;
        Ok(append(
            &mut self.document.union_type_extensions,
            UnionTypeExtension {
                name: name.literal,
                directives,
                members,
                position: extend.position,
            },
        ))
    }

    fn parse_enum_type_extension(&mut self, extend: Token) -> Result<Ref, ParseError> {
        self.expect(Keyword::Enum)?;
        let name = self.expect_name()?;
        let directives = self.parse_directives()?;
        let values = self.parse_optional_enum_values_definition()?;
        self.require_extension_content(
            directives.is_empty() && values.is_empty(),
            &["`@`", "`{`"],
        )?;
        Ok(append(
            &mut self.document.enum_type_extensions,
            EnumTypeExtension {
                name: name.literal,
                directives,
                values,
                position: extend.position,
            },
        ))
    }

    fn parse_input_object_type_extension(&mut self, extend: Token) -> Result<Ref, ParseError> {
        self.expect(Keyword::Input)?;
        let name = self.expect_name()?;
        let directives = self.parse_directives()?;
        let fields = self.parse_optional_input_fields_definition()?;
        self.require_extension_content(
            directives.is_empty() && fields.is_empty(),
            &["`@`", "`{`"],
        )?;
        Ok(append(
            &mut self.document.input_object_type_extensions,
            InputObjectTypeExtension {
                name: name.literal,
                directives,
                fields,
                position: extend.position,
            },
        ))
    }
}

/// Suggests the closest directive location for a typo.
fn suggest_directive_location(input: &str) -> Option<&'static str> {
    let input_upper = input.to_uppercase();
    DirectiveLocation::ALL
        .iter()
        .map(|location| (location.as_str(), edit_distance(&input_upper, location.as_str())))
        .filter(|(_, distance)| *distance <= 3)
        .min_by_key(|(_, distance)| *distance)
        .map(|(name, _)| name)
}

/// Levenshtein edit distance.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let n = b_chars.len();
    if a_chars.is_empty() {
        return n;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];
    for (i, a_char) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for j in 1..=n {
            let cost = usize::from(*a_char != b_chars[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

