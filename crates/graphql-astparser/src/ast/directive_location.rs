/// A location where a directive may be applied.
///
/// See
/// [Directive Locations](https://spec.graphql.org/September2025/#DirectiveLocations)
/// in the spec.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum DirectiveLocation {
    // Executable locations
    Query = 0,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,

    // Type system locations
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    /// Every location, in declaration order.
    pub const ALL: [DirectiveLocation; 19] = [
        Self::Query,
        Self::Mutation,
        Self::Subscription,
        Self::Field,
        Self::FragmentDefinition,
        Self::FragmentSpread,
        Self::InlineFragment,
        Self::VariableDefinition,
        Self::Schema,
        Self::Scalar,
        Self::Object,
        Self::FieldDefinition,
        Self::ArgumentDefinition,
        Self::Interface,
        Self::Union,
        Self::Enum,
        Self::EnumValue,
        Self::InputObject,
        Self::InputFieldDefinition,
    ];

    /// Returns the location's name as written in GraphQL source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "QUERY",
            Self::Mutation => "MUTATION",
            Self::Subscription => "SUBSCRIPTION",
            Self::Field => "FIELD",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
            Self::Schema => "SCHEMA",
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::InputObject => "INPUT_OBJECT",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }

    /// Looks up a location by its exact (case-sensitive) source name.
    pub fn from_name(name: &[u8]) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|location| location.as_str().as_bytes() == name)
    }

    /// Returns `true` for locations inside executable documents.
    pub fn is_executable(&self) -> bool {
        (*self as u8) < (Self::Schema as u8)
    }

    fn bit(self) -> u32 {
        1 << (self as u8)
    }
}

impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bits used per location in the packed insertion order.
const ORDER_BITS: u32 = 5;
const ORDER_MASK: u128 = (1 << ORDER_BITS) - 1;

/// A compact set of [`DirectiveLocation`]s that remembers insertion order.
///
/// Membership is a bitset; the insertion order of distinct members is packed
/// into a single `u128` (5 bits per member), so the whole set is `Copy` and
/// never allocates. Inserting a member that is already present is a no-op.
#[derive(Clone, Copy, Default, Eq, PartialEq)]
pub struct DirectiveLocations {
    members: u32,
    order: u128,
    len: u8,
}

impl DirectiveLocations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `location`. Returns `false` if it was already a member.
    pub fn insert(&mut self, location: DirectiveLocation) -> bool {
        if self.contains(location) {
            return false;
        }
        self.members |= location.bit();
        self.order |= (location as u8 as u128) << (self.len as u32 * ORDER_BITS);
        self.len += 1;
        true
    }

    pub fn contains(&self, location: DirectiveLocation) -> bool {
        self.members & location.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates members in insertion order. Each call starts a fresh pass.
    pub fn iter(&self) -> DirectiveLocationsIter {
        DirectiveLocationsIter {
            order: self.order,
            remaining: self.len,
        }
    }
}

impl std::fmt::Debug for DirectiveLocations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl serde::Serialize for DirectiveLocations {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl FromIterator<DirectiveLocation> for DirectiveLocations {
    fn from_iter<I: IntoIterator<Item = DirectiveLocation>>(iter: I) -> Self {
        let mut locations = Self::new();
        for location in iter {
            locations.insert(location);
        }
        locations
    }
}

impl IntoIterator for DirectiveLocations {
    type Item = DirectiveLocation;
    type IntoIter = DirectiveLocationsIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over a [`DirectiveLocations`] set in insertion order.
#[derive(Clone, Debug)]
pub struct DirectiveLocationsIter {
    order: u128,
    remaining: u8,
}

impl Iterator for DirectiveLocationsIter {
    type Item = DirectiveLocation;

    fn next(&mut self) -> Option<DirectiveLocation> {
        if self.remaining == 0 {
            return None;
        }
        let index = (self.order & ORDER_MASK) as usize;
        self.order >>= ORDER_BITS;
        self.remaining -= 1;
        DirectiveLocation::ALL.get(index).copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}

impl ExactSizeIterator for DirectiveLocationsIter {}
