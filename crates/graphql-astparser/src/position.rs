/// A point in the source text, captured at token boundaries.
///
/// # Indexing Convention
///
/// - `line`: 1-based line number (`\n`, `\r`, and `\r\n` each end a line)
/// - `column`: 1-based count of Unicode scalar values from the start of the
///   line
/// - `byte_offset`: 0-based byte offset from the start of the input
///
/// Positions are `Copy` and 12 bytes wide so that every arena node can carry
/// one without affecting layout much.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Serialize)]
pub struct Position {
    line: u32,
    column: u32,
    byte_offset: u32,
}

impl Position {
    /// The position of the first character of any input.
    pub const START: Position = Position {
        line: 1,
        column: 1,
        byte_offset: 0,
    };

    pub fn new(line: u32, column: u32, byte_offset: u32) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// Returns the 1-based line number.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the 1-based column (in characters, not bytes).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the 0-based byte offset from the start of the input.
    pub fn byte_offset(&self) -> u32 {
        self.byte_offset
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
