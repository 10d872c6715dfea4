//! On-demand decoding of string literal contents.
//!
//! The lexer validates escapes and computes block-string indentation, so the
//! functions here are infallible: they only transform text that a successful
//! parse has already accepted.

use std::borrow::Cow;

/// Unescapes the body of a `"..."` string (the bytes between the quotes).
///
/// Returns `Cow::Borrowed` when the body contains no escapes.
pub(crate) fn unescape_single_line(raw: &str) -> Cow<'_, str> {
    if memchr::memchr(b'\\', raw.as_bytes()).is_none() {
        return Cow::Borrowed(raw);
    }

    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('/') => result.push('/'),
            Some('b') => result.push('\u{0008}'),
            Some('f') => result.push('\u{000C}'),
            Some('u') => match decode_unicode_escape(&mut chars) {
                Some(ch) => result.push(ch),
                None => result.push(char::REPLACEMENT_CHARACTER),
            },
            Some(other) => {
                result.push('\\');
                result.push(other);
            },
            None => result.push('\\'),
        }
    }
    Cow::Owned(result)
}

/// Decodes the part of a unicode escape after `\u`: either `{X...}` or
/// `XXXX` (combining a following `\uXXXX` low surrogate when the first is a
/// high surrogate).
fn decode_unicode_escape(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<char> {
    if chars.peek() == Some(&'{') {
        chars.next();
        let mut code_point: u32 = 0;
        for c in chars.by_ref() {
            if c == '}' {
                return char::from_u32(code_point);
            }
            code_point = code_point.checked_mul(16)?.checked_add(c.to_digit(16)?)?;
        }
        return None;
    }

    let high = take_hex4(chars)?;
    if !(0xD800..=0xDBFF).contains(&high) {
        return char::from_u32(high);
    }
    // Surrogate pair, e.g. `\uD83D\uDE00`
    if chars.next() != Some('\\') || chars.next() != Some('u') {
        return None;
    }
    let low = take_hex4(chars)?;
    if !(0xDC00..=0xDFFF).contains(&low) {
        return None;
    }
    char::from_u32(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
}

fn take_hex4(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<u32> {
    let mut value = 0;
    for _ in 0..4 {
        value = value * 16 + chars.next()?.to_digit(16)?;
    }
    Some(value)
}

/// Produces the value of a block string from its dedented content range.
///
/// The first line is kept as-is; every following line loses up to
/// `block_indent` leading spaces/tabs. Line terminators are normalized to
/// `\n` and `\"""` is unescaped to `"""`.
pub(crate) fn dedent_block(content: &str, block_indent: usize) -> Cow<'_, str> {
    let bytes = content.as_bytes();
    let has_line_break = memchr::memchr2(b'\n', b'\r', bytes).is_some();
    let has_escaped_quotes = memchr::memmem::find(bytes, b"\\\"\"\"").is_some();
    if !has_line_break && !has_escaped_quotes {
        return Cow::Borrowed(content);
    }

    let mut result = String::with_capacity(content.len());
    for (i, line) in split_lines(content).enumerate() {
        if i > 0 {
            result.push('\n');
        }
        let line = if i == 0 {
            line
        } else {
            let indent = line
                .bytes()
                .take(block_indent)
                .take_while(|b| *b == b' ' || *b == b'\t')
                .count();
            &line[indent..]
        };
        result.push_str(line);
    }
    if has_escaped_quotes {
        result = result.replace("\\\"\"\"", "\"\"\"");
    }
    Cow::Owned(result)
}

/// Splits on `\r\n`, `\r` and `\n`.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match memchr::memchr2(b'\n', b'\r', current.as_bytes()) {
            Some(i) => {
                let terminator_len = if current.as_bytes()[i] == b'\r'
                    && current.as_bytes().get(i + 1) == Some(&b'\n')
                {
                    2
                } else {
                    1
                };
                rest = Some(&current[i + terminator_len..]);
                Some(&current[..i])
            },
            None => {
                rest = None;
                Some(current)
            },
        }
    })
}
