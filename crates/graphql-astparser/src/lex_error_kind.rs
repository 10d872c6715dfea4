/// Categorizes lexical errors: the input could not be split into valid
/// tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    /// A `"` string reached a line terminator or the end of input before its
    /// closing quote.
    #[error("unterminated string")]
    UnterminatedString,

    /// A `"""` block string reached the end of input before its closing
    /// `"""`.
    #[error("unterminated block string")]
    UnterminatedBlockString,

    /// An unknown escape sequence (e.g. `\q`) inside a `"` string.
    #[error("invalid escape sequence: `{0}`")]
    InvalidEscapeSequence(String),

    /// A malformed `\uXXXX` or `\u{...}` escape.
    #[error("invalid unicode escape: `{0}`")]
    InvalidUnicodeEscape(String),

    /// A numeric literal that does not follow the Int/Float grammar (`- 1`,
    /// `01`, `1e`, `1.`, `12abc`).
    #[error("malformed number: `{0}`")]
    MalformedNumber(String),

    /// A character that cannot begin any token.
    #[error("unexpected character: {0:?}")]
    UnexpectedCharacter(char),
}
