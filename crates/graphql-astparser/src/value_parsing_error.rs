/// Errors that occur when converting a literal's raw text to a Rust value.
///
/// Parsing only validates the literal's shape; range checks happen here.
/// For example, `9999999999999999999999` lexes as an Int but overflows `i32`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueParsingError {
    /// GraphQL integers must fit in a signed 32-bit integer.
    #[error("Invalid GraphQL integer: {0}")]
    Int(String),

    /// GraphQL floats must be finite `f64` values.
    #[error("Invalid GraphQL float: {0}")]
    Float(String),
}
