use crate::ast::Description;
use crate::ast::FloatValue;
use crate::ast::IntValue;
use crate::ast::StringValue;
use crate::pool::Reset;
use crate::string_decoding;
use crate::ByteSliceRef;
use crate::ValueParsingError;
use std::borrow::Cow;

/// Owns the raw source bytes of one document.
///
/// Everything the parser records about names and literals is a
/// [`ByteSliceRef`] into this buffer; text is materialized only when a caller
/// asks for it. Passing a `ByteSliceRef` that did not come from this input
/// (or is out of range) is a contract violation and panics.
#[derive(Clone, Debug, Default)]
pub struct Input {
    raw_bytes: Vec<u8>,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            raw_bytes: bytes.into(),
        }
    }

    /// Replaces the buffer contents, reusing its allocation.
    pub fn reset_input_bytes(&mut self, bytes: &[u8]) {
        self.raw_bytes.clear();
        self.raw_bytes.extend_from_slice(bytes);
    }

    /// Returns the whole buffer.
    pub fn bytes(&self) -> &[u8] {
        &self.raw_bytes
    }

    pub fn len(&self) -> usize {
        self.raw_bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw_bytes.is_empty()
    }

    /// Returns the bytes referenced by `slice` without copying.
    pub fn byte_slice(&self, slice: ByteSliceRef) -> &[u8] {
        &self.raw_bytes[slice.as_range()]
    }

    /// Decodes the bytes referenced by `slice` as UTF-8 (lossily). Borrows
    /// when the bytes are valid UTF-8.
    pub fn byte_slice_string(&self, slice: ByteSliceRef) -> Cow<'_, str> {
        String::from_utf8_lossy(self.byte_slice(slice))
    }

    /// Returns the semantic value of a string literal: escapes resolved for
    /// `"..."` strings, indentation stripped for block strings.
    pub fn string_value(&self, value: &StringValue) -> Cow<'_, str> {
        self.decode_string(value.content, value.is_block_string, value.block_indent)
    }

    /// Returns the semantic value of a description. Empty when the
    /// description is not defined.
    pub fn description(&self, description: &Description) -> Cow<'_, str> {
        if !description.is_defined {
            return Cow::Borrowed("");
        }
        self.decode_string(
            description.content,
            description.is_block_string,
            description.block_indent,
        )
    }

    /// Parses an Int literal, applying its sign.
    ///
    /// GraphQL `Int` is a signed 32-bit integer; larger literals are an
    /// error here even though they parse.
    pub fn int_value(&self, value: &IntValue) -> Result<i32, ValueParsingError> {
        let raw = self.byte_slice_string(value.raw);
        let magnitude: i64 = raw
            .parse()
            .map_err(|_| ValueParsingError::Int(raw.to_string()))?;
        let signed = if value.negative { -magnitude } else { magnitude };
        i32::try_from(signed).map_err(|_| {
            let sign = if value.negative { "-" } else { "" };
            ValueParsingError::Int(format!("{sign}{raw} does not fit in 32 bits"))
        })
    }

    /// Parses a Float literal, applying its sign. Non-finite results are an
    /// error.
    pub fn float_value(&self, value: &FloatValue) -> Result<f64, ValueParsingError> {
        let raw = self.byte_slice_string(value.raw);
        let magnitude: f64 = raw
            .parse()
            .map_err(|_| ValueParsingError::Float(raw.to_string()))?;
        if !magnitude.is_finite() {
            return Err(ValueParsingError::Float(format!("{raw} is not finite")));
        }
        Ok(if value.negative { -magnitude } else { magnitude })
    }

    fn decode_string(
        &self,
        content: ByteSliceRef,
        is_block_string: bool,
        block_indent: u32,
    ) -> Cow<'_, str> {
        match self.byte_slice_string(content) {
            Cow::Borrowed(text) if is_block_string => {
                string_decoding::dedent_block(text, block_indent as usize)
            },
            Cow::Borrowed(text) => string_decoding::unescape_single_line(text),
            Cow::Owned(text) if is_block_string => Cow::Owned(
                string_decoding::dedent_block(&text, block_indent as usize).into_owned(),
            ),
            Cow::Owned(text) => {
                Cow::Owned(string_decoding::unescape_single_line(&text).into_owned())
            },
        }
    }
}

impl From<&str> for Input {
    fn from(source: &str) -> Self {
        Self::from_bytes(source.as_bytes())
    }
}

impl Reset for Input {
    fn reset(&mut self) {
        self.raw_bytes.clear();
    }
}
