use crate::LexErrorKind;
use crate::ReservedNameContext;

/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// Human-readable context (suggestions, explanations) belongs in the `notes`
/// of [`ParseError`](crate::ParseError).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    /// The lexer could not produce a token.
    ///
    /// # Example
    /// ```text
    /// type User { name: "unterminated string
    ///                   ^ unterminated string
    /// ```
    #[error("lex error: {0}")]
    Lex(LexErrorKind),

    /// Expected specific token(s) but found something else.
    ///
    /// # Example
    /// ```text
    /// type User { name String }
    ///                  ^^^^^^ expected `:`, found `String`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },

    /// The document ended before a complete construct was parsed.
    ///
    /// # Example
    /// ```text
    /// schema
    ///       ^ expected `{`, found end of input
    /// ```
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// A delimiter was opened but the input ended before its closing
    /// counterpart. The opening location is recorded in a note.
    ///
    /// # Example
    /// ```text
    /// schema {
    /// # EOF here, missing `}`
    /// ```
    #[error("unclosed delimiter: `{delimiter}`")]
    UnclosedDelimiter {
        delimiter: String,
    },

    /// A name in a `directive ... on` clause that is not a known directive
    /// location.
    ///
    /// # Example
    /// ```text
    /// directive @example on INVALID
    ///                       ^^^^^^^ unknown directive location
    /// ```
    #[error("invalid directive location: `{name}`")]
    InvalidDirectiveLocation {
        name: String,
    },

    /// A construct that requires content was empty or dangling: `[]` as a
    /// type, `union X =`, a trailing `|` or `&`.
    ///
    /// # Example
    /// ```text
    /// type Person implements Foo & {}
    ///                              ^ expected interface name after `&`
    /// ```
    #[error("invalid empty construct: `{construct}`")]
    InvalidEmptyConstruct {
        construct: String,
    },

    /// Reserved name used in a context where it's not allowed.
    ///
    /// # Example
    /// ```text
    /// fragment on on User { name }
    ///          ^^ fragment name cannot be `on`
    /// ```
    #[error("reserved name: `{name}`")]
    ReservedName {
        name: String,
        context: ReservedNameContext,
    },

    /// Values, types, or selection sets nested beyond the parser's recursion
    /// limit.
    #[error("nesting too deep")]
    NestingTooDeep,
}

impl ParseErrorKind {
    /// Returns `true` for errors raised while tokenizing.
    pub fn is_lex_error(&self) -> bool {
        matches!(self, Self::Lex(_))
    }

    /// Returns `true` for errors raised because the token stream did not
    /// match the grammar.
    pub fn is_syntax_error(&self) -> bool {
        !self.is_lex_error()
    }
}
