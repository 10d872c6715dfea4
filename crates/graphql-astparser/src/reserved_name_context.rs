/// Contexts where certain names are reserved.
///
/// Used by [`ParseErrorKind::ReservedName`](crate::ParseErrorKind::ReservedName)
/// to indicate which context rejected the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedNameContext {
    /// Fragment names (in definitions and spreads) cannot be `on`.
    ///
    /// Invalid: `fragment on on User { ... }`
    FragmentName,

    /// Enum values cannot be `true`, `false`, or `null`.
    ///
    /// Invalid: `enum Maybe { null some }`
    EnumValue,
}

impl std::fmt::Display for ReservedNameContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FragmentName => write!(f, "fragment name"),
            Self::EnumValue => write!(f, "enum value"),
        }
    }
}
