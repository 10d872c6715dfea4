use crate::pool::Reset;
use crate::Document;
use crate::Input;
use crate::ParseError;

/// An [`Input`] paired with the [`Document`] parsed from it.
///
/// Node references and byte ranges in `document` are only meaningful
/// together with `input`, so the two are reused as a unit.
#[derive(Clone, Debug, Default)]
pub struct ParseContext {
    pub input: Input,
    pub document: Document,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the input with `bytes` and parses it into a fresh document.
    ///
    /// On error the document holds a partial parse and should not be read.
    pub fn parse(&mut self, bytes: &[u8]) -> Result<(), ParseError> {
        self.input.reset_input_bytes(bytes);
        self.document.reset();
        crate::parse(&self.input, &mut self.document)
    }
}

impl Reset for ParseContext {
    fn reset(&mut self) {
        self.input.reset();
        self.document.reset();
    }
}
