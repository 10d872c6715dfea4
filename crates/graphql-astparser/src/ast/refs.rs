use crate::SmallVec;

/// An index into one of the [`Document`](crate::Document)'s arenas.
///
/// Which arena a `Ref` points into is determined by where it is stored
/// (e.g. `ObjectTypeDefinition::fields` holds refs into
/// `Document::field_definitions`) or by the accompanying `kind` of a tagged
/// union ([`Value`](super::Value), [`Selection`](super::Selection),
/// [`RootNode`](super::RootNode)).
///
/// [`Ref::NONE`] marks an absent optional child.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Serialize)]
#[serde(transparent)]
pub struct Ref(u32);

impl Ref {
    /// Sentinel for "no node".
    pub const NONE: Ref = Ref(u32::MAX);

    pub fn new(index: usize) -> Self {
        debug_assert!(index < u32::MAX as usize, "arena index overflow");
        Self(index as u32)
    }

    /// Returns the arena index. Calling this on [`Ref::NONE`] yields an index
    /// no arena can hold, so indexing with it panics.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_some(self) -> bool {
        self != Self::NONE
    }

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Converts to `Option`, mapping [`Ref::NONE`] to `None`.
    pub fn get(self) -> Option<Ref> {
        self.is_some().then_some(self)
    }
}

impl Default for Ref {
    fn default() -> Self {
        Self::NONE
    }
}

/// Ordered refs into a single arena, in source (left-to-right) order.
///
/// Short lists (the common case for directives, arguments and interface
/// lists) are stored inline.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct RefList {
    pub refs: SmallVec<[Ref; 4]>,
}

impl RefList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Ref) {
        self.refs.push(node);
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Ref> + '_ {
        self.refs.iter().copied()
    }
}

impl std::ops::Index<usize> for RefList {
    type Output = Ref;

    fn index(&self, index: usize) -> &Ref {
        &self.refs[index]
    }
}

impl<'a> IntoIterator for &'a RefList {
    type Item = Ref;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Ref>>;

    fn into_iter(self) -> Self::IntoIter {
        self.refs.iter().copied()
    }
}
