use crate::ErrorNoteKind;
use crate::Position;
use crate::SmallVec;

/// A note attached to a [`ParseError`](crate::ParseError) providing extra
/// context, a suggested fix, or a specification reference.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorNote {
    pub kind: ErrorNoteKind,
    pub message: String,

    /// Optional related location (e.g. where an unclosed delimiter was
    /// opened).
    pub position: Option<Position>,
}

impl ErrorNote {
    /// Creates a general note without a position.
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorNoteKind::General,
            message: message.into(),
            position: None,
        }
    }

    /// Creates a general note pointing at a related location.
    pub fn general_at(message: impl Into<String>, position: Position) -> Self {
        Self {
            kind: ErrorNoteKind::General,
            message: message.into(),
            position: Some(position),
        }
    }

    /// Creates a help note.
    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorNoteKind::Help,
            message: message.into(),
            position: None,
        }
    }

    /// Creates a spec reference note.
    pub fn spec(url: impl Into<String>) -> Self {
        Self {
            kind: ErrorNoteKind::Spec,
            message: url.into(),
            position: None,
        }
    }
}

/// Most errors carry 0-2 notes, so these live inline.
pub type ErrorNotes = SmallVec<[ErrorNote; 2]>;
