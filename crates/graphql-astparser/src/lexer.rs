//! A pull-based lexer over an [`Input`]'s bytes.
//!
//! The lexer hands out one token of lookahead via [`Lexer::peek`] and
//! consumes with [`Lexer::read`]. Tokens are `Copy` and hold only byte
//! ranges into the input, so lexing never allocates.
//!
//! # Features
//!
//! - **Insignificant input skipped**: whitespace, line terminators, commas,
//!   a UTF-8 BOM and `#` comments never produce tokens
//! - **Validated literals**: string escapes and number shapes are checked
//!   here, so decoding accepted literals later cannot fail
//! - **Block strings dedented in place**: the token's range already excludes
//!   leading/trailing blank lines and the first line's indentation
//!
//! # Usage
//!
//! ```rust
//! use graphql_astparser::Input;
//! use graphql_astparser::Lexer;
//! use graphql_astparser::token::Keyword;
//!
//! let input = Input::from("{ name }");
//! let keywords: Vec<Keyword> = Lexer::new(&input)
//!     .tokens()
//!     .unwrap()
//!     .into_iter()
//!     .map(|token| token.keyword)
//!     .collect();
//! assert_eq!(
//!     keywords,
//!     vec![Keyword::CurlyBraceOpen, Keyword::Ident, Keyword::CurlyBraceClose, Keyword::Eof],
//! );
//! ```

use crate::token::Keyword;
use crate::token::Token;
use crate::ByteSliceRef;
use crate::Input;
use crate::LexErrorKind;
use crate::ParseError;
use crate::ParseErrorKind;
use crate::Position;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Tokenizer with one token of lookahead.
///
/// See module documentation for details.
pub struct Lexer<'a> {
    bytes: &'a [u8],

    /// Byte offset of the next unread byte.
    offset: usize,

    /// 1-based line of `offset`.
    line: u32,

    /// 1-based column (in characters) of `offset`.
    column: u32,

    lookahead: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a Input) -> Self {
        Self::from_bytes(input.bytes())
    }

    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            offset: 0,
            line: 1,
            column: 1,
            lookahead: None,
        }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Result<Token, ParseError> {
        if let Some(token) = self.lookahead {
            return Ok(token);
        }
        let token = self.next_token()?;
        self.lookahead = Some(token);
        Ok(token)
    }

    /// Consumes and returns the next token.
    pub fn read(&mut self) -> Result<Token, ParseError> {
        match self.lookahead.take() {
            Some(token) => Ok(token),
            None => self.next_token(),
        }
    }

    /// Drains the lexer into a vector ending with the `Eof` token.
    pub fn tokens(mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.read()?;
            tokens.push(token);
            if token.keyword == Keyword::Eof {
                return Ok(tokens);
            }
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn curr_position(&self) -> Position {
        Position::new(self.line, self.column, self.offset as u32)
    }

    /// Position of `target`, which must be on the current line at or after
    /// `offset`.
    fn position_on_line(&self, target: usize) -> Position {
        let columns = count_chars(&self.bytes[self.offset..target]);
        Position::new(self.line, self.column + columns, target as u32)
    }

    fn peek_byte(&self) -> Option<u8> {
        self.bytes.get(self.offset).copied()
    }

    fn peek_byte_nth(&self, n: usize) -> Option<u8> {
        self.bytes.get(self.offset + n).copied()
    }

    /// Advances over `n` ASCII bytes that contain no line terminators.
    fn advance_ascii(&mut self, n: usize) {
        self.offset += n;
        self.column += n as u32;
    }

    /// Advances to `end`, tracking lines and columns over arbitrary bytes.
    ///
    /// `\r\n` counts as a single line terminator: the `\n` of a pair does not
    /// start another line.
    fn advance_to(&mut self, end: usize) {
        for i in self.offset..end {
            match self.bytes[i] {
                b'\r' => {
                    self.line += 1;
                    self.column = 1;
                },
                b'\n' => {
                    if i == 0 || self.bytes[i - 1] != b'\r' {
                        self.line += 1;
                        self.column = 1;
                    }
                },
                byte if is_utf8_continuation(byte) => {},
                _ => self.column += 1,
            }
        }
        self.offset = end;
    }

    fn make_token(&self, keyword: Keyword, start: usize, end: usize, position: Position) -> Token {
        Token {
            keyword,
            literal: ByteSliceRef::new(start as u32, end as u32),
            position,
            block_indent: 0,
        }
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_ignored();

        let start = self.offset;
        let position = self.curr_position();

        let Some(byte) = self.peek_byte() else {
            return Ok(self.make_token(Keyword::Eof, start, start, position));
        };

        let punctuator = match byte {
            b'!' => Some(Keyword::Bang),
            b'$' => Some(Keyword::Dollar),
            b'&' => Some(Keyword::Ampersand),
            b'(' => Some(Keyword::ParenOpen),
            b')' => Some(Keyword::ParenClose),
            b':' => Some(Keyword::Colon),
            b'=' => Some(Keyword::Equals),
            b'@' => Some(Keyword::At),
            b'[' => Some(Keyword::SquareBracketOpen),
            b']' => Some(Keyword::SquareBracketClose),
            b'{' => Some(Keyword::CurlyBraceOpen),
            b'}' => Some(Keyword::CurlyBraceClose),
            b'|' => Some(Keyword::Pipe),
            _ => None,
        };
        if let Some(keyword) = punctuator {
            self.advance_ascii(1);
            return Ok(self.make_token(keyword, start, start + 1, position));
        }

        match byte {
            b'.' => self.lex_dot_or_ellipsis(position),
            b'"' => self.lex_string(position),
            byte if is_name_start(byte) => Ok(self.lex_name(position)),
            b'-' | b'0'..=b'9' => self.lex_number(position),
            _ => Err(self.lex_invalid_character(position)),
        }
    }

    // =========================================================================
    // Ignored tokens
    // =========================================================================

    /// Skips whitespace, line terminators, commas, BOMs and comments.
    ///
    /// See: <https://spec.graphql.org/September2025/#sec-Language.Source-Text.Ignored-Tokens>
    fn skip_ignored(&mut self) {
        while let Some(byte) = self.peek_byte() {
            match byte {
                b' ' | b'\t' | b',' => self.advance_ascii(1),
                b'\n' | b'\r' => self.advance_to(self.offset + 1),
                b'#' => {
                    let rest = &self.bytes[self.offset..];
                    let end = memchr::memchr2(b'\n', b'\r', rest)
                        .map_or(self.bytes.len(), |i| self.offset + i);
                    self.advance_to(end);
                },
                0xEF if self.bytes[self.offset..].starts_with(UTF8_BOM) => {
                    self.offset += UTF8_BOM.len();
                    self.column += 1;
                },
                _ => break,
            }
        }
    }

    // =========================================================================
    // Dot / Ellipsis lexing
    // =========================================================================

    /// Lexes `...`. A lone `.` or `..` is an error.
    fn lex_dot_or_ellipsis(&mut self, position: Position) -> Result<Token, ParseError> {
        let start = self.offset;
        if self.bytes[start..].starts_with(b"...") {
            self.advance_ascii(3);
            return Ok(self.make_token(Keyword::Ellipsis, start, start + 3, position));
        }

        let kind = ParseErrorKind::Lex(LexErrorKind::UnexpectedCharacter('.'));
        if self.peek_byte_nth(1) == Some(b'.') {
            let mut error = ParseError::new(
                "unexpected `..` (use `...` for spread operator)",
                position,
                2,
                kind,
            );
            error.add_help("Add one more `.` to form the spread operator `...`");
            Err(error)
        } else {
            Err(ParseError::new("unexpected `.`", position, 1, kind))
        }
    }

    // =========================================================================
    // Name lexing
    // =========================================================================

    /// Lexes a name or reserved word matching `/[_A-Za-z][_0-9A-Za-z]*/`.
    fn lex_name(&mut self, position: Position) -> Token {
        let start = self.offset;
        let len = self.bytes[start..]
            .iter()
            .take_while(|byte| is_name_continue(**byte))
            .count();
        self.advance_ascii(len);
        let keyword = Keyword::from_word(&self.bytes[start..start + len]);
        self.make_token(keyword, start, start + len, position)
    }

    // =========================================================================
    // Number lexing
    // =========================================================================

    /// Lexes an integer or float literal.
    ///
    /// Handles:
    /// - Optional negative sign `-`, immediately followed by a digit
    /// - Integer part: `0` or `[1-9][0-9]*`
    /// - Optional fraction: `.[0-9]+`
    /// - Optional exponent: `[eE][+-]?[0-9]+`
    ///
    /// A number may not be directly followed by a name character or `.`.
    fn lex_number(&mut self, position: Position) -> Result<Token, ParseError> {
        let start = self.offset;
        let mut end = start;
        let mut is_float = false;

        if self.bytes[end] == b'-' {
            end += 1;
            if !self.bytes.get(end).is_some_and(u8::is_ascii_digit) {
                let mut error = ParseError::new(
                    "invalid number: `-` must be immediately followed by a digit",
                    position,
                    1,
                    ParseErrorKind::Lex(LexErrorKind::MalformedNumber("-".to_string())),
                );
                error.add_spec("https://spec.graphql.org/September2025/#IntValue");
                return Err(error);
            }
        }

        // Integer part
        if self.bytes[end] == b'0' {
            end += 1;
            if self.bytes.get(end).is_some_and(u8::is_ascii_digit) {
                return Err(self.number_error(
                    position,
                    start,
                    "invalid number: leading zeros are not allowed",
                    "https://spec.graphql.org/September2025/#sec-Int-Value",
                ));
            }
        } else {
            end += count_digits(&self.bytes[end..]);
        }

        // Fractional part
        if self.bytes.get(end) == Some(&b'.') {
            let digits = count_digits(&self.bytes[end + 1..]);
            if digits == 0 {
                return Err(self.number_error(
                    position,
                    start,
                    "invalid number: `.` must be followed by at least one digit",
                    "https://spec.graphql.org/September2025/#sec-Float-Value",
                ));
            }
            is_float = true;
            end += 1 + digits;
        }

        // Exponent part
        if matches!(self.bytes.get(end), Some(b'e' | b'E')) {
            let mut exponent_end = end + 1;
            if matches!(self.bytes.get(exponent_end), Some(b'+' | b'-')) {
                exponent_end += 1;
            }
            let digits = count_digits(&self.bytes[exponent_end..]);
            if digits == 0 {
                return Err(self.number_error(
                    position,
                    start,
                    "invalid number: exponent must have at least one digit",
                    "https://spec.graphql.org/September2025/#sec-Float-Value",
                ));
            }
            is_float = true;
            end = exponent_end + digits;
        }

        if let Some(&next) = self.bytes.get(end)
            && (next == b'.' || is_name_start(next))
        {
            return Err(self.number_error(
                position,
                start,
                "invalid number: unexpected character after number",
                "https://spec.graphql.org/September2025/#sec-Int-Value",
            ));
        }

        self.advance_ascii(end - start);
        let keyword = if is_float { Keyword::Float } else { Keyword::Integer };
        Ok(self.make_token(keyword, start, end, position))
    }

    /// Builds an error for a malformed number spanning all number-like
    /// characters from `start`.
    fn number_error(
        &self,
        position: Position,
        start: usize,
        message: &str,
        spec_url: &str,
    ) -> ParseError {
        let len = 1 + self.bytes[start + 1..]
            .iter()
            .take_while(|byte| byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'+' | b'-' | b'_'))
            .count();
        let text = String::from_utf8_lossy(&self.bytes[start..start + len]).into_owned();
        let mut error = ParseError::new(
            format!("{message}: `{text}`"),
            position,
            len as u32,
            ParseErrorKind::Lex(LexErrorKind::MalformedNumber(text)),
        );
        error.add_spec(spec_url);
        error
    }

    // =========================================================================
    // String lexing
    // =========================================================================

    /// Lexes a string literal (single-line or block string).
    fn lex_string(&mut self, position: Position) -> Result<Token, ParseError> {
        if self.bytes[self.offset..].starts_with(b"\"\"\"") {
            return self.lex_block_string(position);
        }

        let quote = self.offset;
        let content_start = quote + 1;
        let mut cursor = content_start;
        loop {
            let rest = &self.bytes[cursor..];
            let found = memchr::memchr3(b'"', b'\\', b'\n', rest).map(|i| cursor + i);
            let scan_end = found.unwrap_or(self.bytes.len());

            if memchr::memchr(b'\r', &self.bytes[cursor..scan_end]).is_some() {
                return Err(self.unterminated_string(position, quote, true));
            }

            match found.map(|i| (i, self.bytes[i])) {
                None => return Err(self.unterminated_string(position, quote, false)),
                Some((_, b'\n')) => return Err(self.unterminated_string(position, quote, true)),
                Some((end, b'"')) => {
                    self.advance_to(end + 1);
                    return Ok(self.make_token(Keyword::String, content_start, end, position));
                },
                Some((escape, _)) => cursor = escape + self.validate_escape(escape, position, quote)?,
            }
        }
    }

    fn unterminated_string(
        &self,
        position: Position,
        quote: usize,
        hit_line_terminator: bool,
    ) -> ParseError {
        let line_len = self.bytes[quote..]
            .iter()
            .take_while(|byte| !matches!(byte, b'\n' | b'\r'))
            .count();
        let mut error = ParseError::lex(LexErrorKind::UnterminatedString, position, line_len as u32);
        if hit_line_terminator {
            error.add_note("single-line strings cannot contain unescaped line terminators");
            error.add_help(
                "Use a block string (triple quotes) for multi-line strings, or escape the \
                 newline with `\\n`",
            );
        } else {
            error.add_help("Add closing `\"`");
        }
        error
    }

    /// Validates the escape sequence starting with the `\` at `escape` and
    /// returns its length in bytes.
    fn validate_escape(
        &self,
        escape: usize,
        string_position: Position,
        quote: usize,
    ) -> Result<usize, ParseError> {
        let escape_position = self.position_on_line(escape);
        match self.bytes.get(escape + 1) {
            None => Err(self.unterminated_string(string_position, quote, false)),
            Some(b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't') => Ok(2),
            Some(b'u') => self.validate_unicode_escape(escape, escape_position),
            Some(_) => {
                let (ch, ch_len) = utf8_char_at(self.bytes, escape + 1)
                    .unwrap_or((char::REPLACEMENT_CHARACTER, 1));
                let mut error = ParseError::lex(
                    LexErrorKind::InvalidEscapeSequence(format!("\\{ch}")),
                    escape_position,
                    1 + ch_len as u32,
                );
                error.add_help(
                    "Valid escapes are `\\\"`, `\\\\`, `\\/`, `\\b`, `\\f`, `\\n`, `\\r`, `\\t` \
                     and `\\uXXXX`",
                );
                Err(error)
            },
        }
    }

    /// Validates `\uXXXX` (with surrogate pairs) or `\u{X...}` at `escape`.
    fn validate_unicode_escape(&self, escape: usize, position: Position) -> Result<usize, ParseError> {
        let invalid = |len: usize| {
            let end = (escape + len).min(self.bytes.len());
            let text = String::from_utf8_lossy(&self.bytes[escape..end]).into_owned();
            ParseError::lex(LexErrorKind::InvalidUnicodeEscape(text), position, (end - escape) as u32)
        };

        if self.bytes.get(escape + 2) == Some(&b'{') {
            let digits_start = escape + 3;
            let digits = self.bytes[digits_start..]
                .iter()
                .take_while(|byte| byte.is_ascii_hexdigit())
                .count();
            let close = digits_start + digits;
            if digits == 0 || self.bytes.get(close) != Some(&b'}') {
                return Err(invalid(close + 1 - escape));
            }
            let len = close + 1 - escape;
            return match parse_hex(&self.bytes[digits_start..close]) {
                Some(code_point) if char::from_u32(code_point).is_some() => Ok(len),
                _ => Err(invalid(len)),
            };
        }

        let Some(high) = self.bytes.get(escape + 2..escape + 6).and_then(parse_hex_exact) else {
            return Err(invalid(6));
        };
        match high {
            0xD800..=0xDBFF => {
                let low = self.bytes.get(escape + 6..escape + 8) == Some(b"\\u".as_slice())
                    && self
                        .bytes
                        .get(escape + 8..escape + 12)
                        .and_then(parse_hex_exact)
                        .is_some_and(|low| (0xDC00..=0xDFFF).contains(&low));
                if low { Ok(12) } else { Err(invalid(6)) }
            },
            0xDC00..=0xDFFF => Err(invalid(6)),
            _ => Ok(6),
        }
    }

    /// Lexes a `"""` block string, computing its dedented content range.
    ///
    /// Only `\"""` is an escape inside block strings.
    fn lex_block_string(&mut self, position: Position) -> Result<Token, ParseError> {
        let raw_start = self.offset + 3;
        let mut search = raw_start;
        let raw_end = loop {
            match memchr::memmem::find(&self.bytes[search..], b"\"\"\"") {
                Some(i) if search + i > raw_start && self.bytes[search + i - 1] == b'\\' => {
                    search += i + 3;
                },
                Some(i) => break search + i,
                None => {
                    let mut error =
                        ParseError::lex(LexErrorKind::UnterminatedBlockString, position, 3);
                    error.add_note_at("block string started here", position);
                    error.add_help("Add closing `\"\"\"`");
                    return Err(error);
                },
            }
        };

        let (content, block_indent) = block_string_content(self.bytes, raw_start, raw_end);
        self.advance_to(raw_end + 3);
        let mut token = self.make_token(
            Keyword::BlockString,
            content.start as usize,
            content.end as usize,
            position,
        );
        token.block_indent = block_indent;
        Ok(token)
    }

    // =========================================================================
    // Invalid character handling
    // =========================================================================

    fn lex_invalid_character(&self, position: Position) -> ParseError {
        match utf8_char_at(self.bytes, self.offset) {
            Some((ch, len)) => {
                let mut error = ParseError::new(
                    format!("unexpected character {}", describe_char(ch)),
                    position,
                    len as u32,
                    ParseErrorKind::Lex(LexErrorKind::UnexpectedCharacter(ch)),
                );
                if ch == '\'' {
                    error.add_help("GraphQL strings use double quotes: `\"...\"`");
                }
                error
            },
            None => ParseError::new(
                format!("invalid UTF-8 byte 0x{:02X}", self.bytes[self.offset]),
                position,
                1,
                ParseErrorKind::Lex(LexErrorKind::UnexpectedCharacter(char::REPLACEMENT_CHARACTER)),
            ),
        }
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Computes the dedented content range of a block string whose raw body is
/// `bytes[raw_start..raw_end]`, plus the common indentation of the lines
/// after the first.
///
/// See: <https://spec.graphql.org/September2025/#BlockStringValue()>
fn block_string_content(bytes: &[u8], raw_start: usize, raw_end: usize) -> (ByteSliceRef, u32) {
    let mut common_indent: Option<usize> = None;
    let mut first_content: Option<(usize, usize, usize)> = None;
    let mut last_content_end = raw_start;

    for (index, (line_start, line_end)) in line_ranges(bytes, raw_start, raw_end).enumerate() {
        let line = &bytes[line_start..line_end];
        let indent = line.iter().take_while(|byte| matches!(byte, b' ' | b'\t')).count();
        if indent == line.len() {
            continue;
        }
        if index > 0 {
            common_indent = Some(common_indent.map_or(indent, |common| common.min(indent)));
        }
        if first_content.is_none() {
            first_content = Some((index, line_start, indent));
        }
        last_content_end = line_end;
    }

    let common_indent = common_indent.unwrap_or(0);
    let Some((first_index, first_start, _)) = first_content else {
        return (ByteSliceRef::new(raw_start as u32, raw_start as u32), 0);
    };
    let start = if first_index == 0 {
        first_start
    } else {
        first_start + common_indent
    };
    (
        ByteSliceRef::new(start as u32, last_content_end as u32),
        common_indent as u32,
    )
}

/// Yields `(start, end)` offsets of each line in `bytes[start..end]`,
/// excluding line terminators.
fn line_ranges(bytes: &[u8], start: usize, end: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
    let mut cursor = Some(start);
    std::iter::from_fn(move || {
        let line_start = cursor?;
        match memchr::memchr2(b'\n', b'\r', &bytes[line_start..end]) {
            Some(i) => {
                let line_end = line_start + i;
                let next = if bytes[line_end] == b'\r' && bytes.get(line_end + 1) == Some(&b'\n') {
                    line_end + 2
                } else {
                    line_end + 1
                };
                cursor = Some(next);
                Some((line_start, line_end))
            },
            None => {
                cursor = None;
                Some((line_start, end))
            },
        }
    })
}

/// Returns `true` if `byte` can start a GraphQL name.
///
/// See: <https://spec.graphql.org/September2025/#NameStart>
fn is_name_start(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphabetic()
}

/// Returns `true` if `byte` can continue a GraphQL name.
///
/// See: <https://spec.graphql.org/September2025/#NameContinue>
fn is_name_continue(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphanumeric()
}

fn is_utf8_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

fn count_chars(bytes: &[u8]) -> u32 {
    bytes.iter().filter(|byte| !is_utf8_continuation(**byte)).count() as u32
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

fn parse_hex(digits: &[u8]) -> Option<u32> {
    digits.iter().try_fold(0u32, |value, byte| {
        let digit = (*byte as char).to_digit(16)?;
        value.checked_mul(16)?.checked_add(digit)
    })
}

fn parse_hex_exact(digits: &[u8]) -> Option<u32> {
    if digits.len() == 4 && digits.iter().all(u8::is_ascii_hexdigit) {
        parse_hex(digits)
    } else {
        None
    }
}

/// Decodes the UTF-8 character starting at `offset`, with its byte length.
fn utf8_char_at(bytes: &[u8], offset: usize) -> Option<(char, usize)> {
    let width = match *bytes.get(offset)? {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => return None,
    };
    let text = std::str::from_utf8(bytes.get(offset..offset + width)?).ok()?;
    text.chars().next().map(|ch| (ch, width))
}

/// Returns a human-readable description of a character for error messages.
///
/// Printable characters are shown in backticks; invisible and control
/// characters also get their code point and, where known, their name.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') || unicode_char_name(ch).is_some() {
        match unicode_char_name(ch) {
            Some(name) => format!("`{}` (U+{:04X}: {})", ch.escape_default(), ch as u32, name),
            None => format!("`{}` (U+{:04X})", ch.escape_default(), ch as u32),
        }
    } else {
        format!("`{ch}`")
    }
}

/// Names of invisible characters commonly pasted into documents by accident.
fn unicode_char_name(ch: char) -> Option<&'static str> {
    match ch {
        '\u{0000}' => Some("NULL"),
        '\u{0008}' => Some("BACKSPACE"),
        '\u{000B}' => Some("VERTICAL TAB"),
        '\u{000C}' => Some("FORM FEED"),
        '\u{001B}' => Some("ESCAPE"),
        '\u{007F}' => Some("DELETE"),
        '\u{00A0}' => Some("NO-BREAK SPACE"),
        '\u{00AD}' => Some("SOFT HYPHEN"),
        '\u{2000}'..='\u{200A}' => Some("TYPOGRAPHIC SPACE"),
        '\u{200B}' => Some("ZERO WIDTH SPACE"),
        '\u{200C}' => Some("ZERO WIDTH NON-JOINER"),
        '\u{200D}' => Some("ZERO WIDTH JOINER"),
        '\u{200E}' => Some("LEFT-TO-RIGHT MARK"),
        '\u{200F}' => Some("RIGHT-TO-LEFT MARK"),
        '\u{2028}' => Some("LINE SEPARATOR"),
        '\u{2029}' => Some("PARAGRAPH SEPARATOR"),
        '\u{202F}' => Some("NARROW NO-BREAK SPACE"),
        '\u{2060}' => Some("WORD JOINER"),
        '\u{3000}' => Some("IDEOGRAPHIC SPACE"),
        '\u{FEFF}' => Some("BYTE ORDER MARK"),
        _ => None,
    }
}
