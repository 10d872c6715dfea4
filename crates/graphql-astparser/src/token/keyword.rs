/// Classification of a [`Token`](super::Token).
///
/// Punctuators and reserved words get their own variants; every other name
/// is [`Keyword::Ident`]. Reserved words are still valid names wherever the
/// grammar expects a name (see [`Keyword::is_name`]); the parser decides
/// from context.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Keyword {
    // Punctuators
    Ampersand,
    At,
    Bang,
    Colon,
    CurlyBraceClose,
    CurlyBraceOpen,
    Dollar,
    Ellipsis,
    Equals,
    ParenClose,
    ParenOpen,
    Pipe,
    SquareBracketClose,
    SquareBracketOpen,

    // Reserved words
    Directive,
    Enum,
    Extend,
    False,
    Fragment,
    Implements,
    Input,
    Interface,
    Mutation,
    Null,
    On,
    Query,
    Repeatable,
    Scalar,
    Schema,
    Subscription,
    True,
    Type,
    Union,

    // Token classes
    Ident,
    Integer,
    Float,
    String,
    BlockString,
    Eof,
}

impl Keyword {
    /// Classifies a lexed name: a reserved word variant if `word` is one,
    /// otherwise [`Keyword::Ident`].
    pub fn from_word(word: &[u8]) -> Keyword {
        match word {
            b"directive" => Keyword::Directive,
            b"enum" => Keyword::Enum,
            b"extend" => Keyword::Extend,
            b"false" => Keyword::False,
            b"fragment" => Keyword::Fragment,
            b"implements" => Keyword::Implements,
            b"input" => Keyword::Input,
            b"interface" => Keyword::Interface,
            b"mutation" => Keyword::Mutation,
            b"null" => Keyword::Null,
            b"on" => Keyword::On,
            b"query" => Keyword::Query,
            b"repeatable" => Keyword::Repeatable,
            b"scalar" => Keyword::Scalar,
            b"schema" => Keyword::Schema,
            b"subscription" => Keyword::Subscription,
            b"true" => Keyword::True,
            b"type" => Keyword::Type,
            b"union" => Keyword::Union,
            _ => Keyword::Ident,
        }
    }

    /// Returns `true` if a token of this kind is lexically a Name
    /// (`[_A-Za-z][_0-9A-Za-z]*`), i.e. an identifier or a reserved word.
    pub fn is_name(&self) -> bool {
        match self {
            Keyword::Ident
            | Keyword::Directive
            | Keyword::Enum
            | Keyword::Extend
            | Keyword::False
            | Keyword::Fragment
            | Keyword::Implements
            | Keyword::Input
            | Keyword::Interface
            | Keyword::Mutation
            | Keyword::Null
            | Keyword::On
            | Keyword::Query
            | Keyword::Repeatable
            | Keyword::Scalar
            | Keyword::Schema
            | Keyword::Subscription
            | Keyword::True
            | Keyword::Type
            | Keyword::Union => true,

            Keyword::Ampersand
            | Keyword::At
            | Keyword::Bang
            | Keyword::Colon
            | Keyword::CurlyBraceClose
            | Keyword::CurlyBraceOpen
            | Keyword::Dollar
            | Keyword::Ellipsis
            | Keyword::Equals
            | Keyword::ParenClose
            | Keyword::ParenOpen
            | Keyword::Pipe
            | Keyword::SquareBracketClose
            | Keyword::SquareBracketOpen
            | Keyword::Integer
            | Keyword::Float
            | Keyword::String
            | Keyword::BlockString
            | Keyword::Eof => false,
        }
    }

    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns the string representation of this token if it is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            Keyword::Ampersand => Some("&"),
            Keyword::At => Some("@"),
            Keyword::Bang => Some("!"),
            Keyword::Colon => Some(":"),
            Keyword::CurlyBraceClose => Some("}"),
            Keyword::CurlyBraceOpen => Some("{"),
            Keyword::Dollar => Some("$"),
            Keyword::Ellipsis => Some("..."),
            Keyword::Equals => Some("="),
            Keyword::ParenClose => Some(")"),
            Keyword::ParenOpen => Some("("),
            Keyword::Pipe => Some("|"),
            Keyword::SquareBracketClose => Some("]"),
            Keyword::SquareBracketOpen => Some("["),
            _ => None,
        }
    }

    /// Returns `true` for tokens that can start a value literal.
    pub fn is_value_start(&self) -> bool {
        matches!(
            self,
            Keyword::Dollar
                | Keyword::Integer
                | Keyword::Float
                | Keyword::String
                | Keyword::BlockString
                | Keyword::SquareBracketOpen
                | Keyword::CurlyBraceOpen
        ) || self.is_name()
    }

    /// Returns `true` for `"..."` and `"""..."""` literals.
    pub fn is_string(&self) -> bool {
        matches!(self, Keyword::String | Keyword::BlockString)
    }

    /// Human-readable name used in error messages.
    pub fn describe(&self) -> &'static str {
        if let Some(punctuator) = self.as_punctuator_str() {
            return punctuator;
        }
        match self {
            Keyword::Directive => "directive",
            Keyword::Enum => "enum",
            Keyword::Extend => "extend",
            Keyword::False => "false",
            Keyword::Fragment => "fragment",
            Keyword::Implements => "implements",
            Keyword::Input => "input",
            Keyword::Interface => "interface",
            Keyword::Mutation => "mutation",
            Keyword::Null => "null",
            Keyword::On => "on",
            Keyword::Query => "query",
            Keyword::Repeatable => "repeatable",
            Keyword::Scalar => "scalar",
            Keyword::Schema => "schema",
            Keyword::Subscription => "subscription",
            Keyword::True => "true",
            Keyword::Type => "type",
            Keyword::Union => "union",
            Keyword::Ident => "name",
            Keyword::Integer => "integer",
            Keyword::Float => "float",
            Keyword::String => "string",
            Keyword::BlockString => "block string",
            Keyword::Eof => "end of input",
            _ => "punctuator",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}
