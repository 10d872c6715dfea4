use crate::token::Keyword;
use crate::ByteSliceRef;
use crate::Position;

/// A classified token produced by the [`Lexer`](crate::Lexer).
///
/// `literal` covers the token's text: the name or number itself, the
/// punctuator, or for strings the content (see
/// [`Description`](crate::ast::Description)). For `Eof` it is an empty range
/// at the end of the input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Token {
    pub keyword: Keyword,
    pub literal: ByteSliceRef,
    pub position: Position,

    /// Common indentation of a block string's lines after the first; 0 for
    /// every other token.
    pub block_indent: u32,
}
