use crate::ByteSliceRef;
use crate::Position;

/// A description string attached to the definition, field, argument, enum
/// value or input value that immediately follows it.
///
/// `content` is the zero-copy body of the string:
/// - for `"..."` strings, the (still escaped) bytes between the quotes;
/// - for `"""..."""` block strings, the dedented range: leading and trailing
///   blank lines are excluded and the first content line starts after the
///   common indentation. Lines after the first still carry `block_indent`
///   leading whitespace bytes, which
///   [`Input::description`](crate::Input::description) strips.
///
/// Nodes without a description hold `Description::default()`
/// (`is_defined == false`).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Serialize)]
pub struct Description {
    pub is_defined: bool,
    pub is_block_string: bool,
    pub content: ByteSliceRef,
    pub block_indent: u32,
    pub position: Position,
}
