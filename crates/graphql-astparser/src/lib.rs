//! An arena-based GraphQL parser for executable documents, type system
//! documents, and documents that mix both together.
//!
//! Source bytes live in an [`Input`]; the [`Parser`] pulls tokens from a
//! [`Lexer`] and appends nodes to a [`Document`], whose per-kind arenas link
//! nodes by integer [`Ref`](ast::Ref)s and point back into the input with
//! [`ByteSliceRef`]s. Nothing is copied out of the input while parsing.
//!
//! ```rust
//! use graphql_astparser::ast::OperationType;
//! use graphql_astparser::Document;
//! use graphql_astparser::Input;
//!
//! let input = Input::from("query GetUser { user { name } }");
//! let mut document = Document::new();
//! graphql_astparser::parse(&input, &mut document).unwrap();
//!
//! let operation = &document.operation_definitions[0];
//! assert_eq!(operation.operation_type, OperationType::Query);
//! assert_eq!(input.byte_slice(operation.name.unwrap()), b"GetUser");
//! ```
//!
//! Both [`Input`] and [`Document`] keep their capacity across
//! [`reset`](pool::Reset::reset), and [`pool::Pool`] shares them between
//! threads for high-throughput reuse.

pub mod ast;
mod byte_slice_ref;
mod error_note;
mod error_note_kind;
mod input;
mod lex_error_kind;
mod lexer;
mod parse_context;
mod parse_error;
mod parse_error_kind;
mod parser;
pub mod pool;
mod position;
mod reserved_name_context;
mod string_decoding;
pub mod token;
mod value_parsing_error;

pub use ast::Document;
pub use byte_slice_ref::ByteSliceRef;
pub use error_note::ErrorNote;
pub use error_note::ErrorNotes;
pub use error_note_kind::ErrorNoteKind;
pub use input::Input;
pub use lex_error_kind::LexErrorKind;
pub use lexer::Lexer;
pub use parse_context::ParseContext;
pub use parse_error::ParseError;
pub use parse_error_kind::ParseErrorKind;
pub use parser::parse;
pub use parser::Parser;
pub use position::Position;
pub use reserved_name_context::ReservedNameContext;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use value_parsing_error::ValueParsingError;

#[cfg(test)]
mod tests;
