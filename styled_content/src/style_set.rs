// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::btree_set::{self, BTreeSet};
use alloc::sync::Arc;
use core::borrow::Borrow;
use core::fmt;

/// An opaque inline style name, as stored on characters.
///
/// Style names are cheap to clone; many characters usually share the same handful of names.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StyleName(Arc<str>);

impl StyleName {
    /// Creates a style name from a string.
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Borrow the name as `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StyleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StyleName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StyleName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<alloc::string::String> for StyleName {
    fn from(value: alloc::string::String) -> Self {
        Self(Arc::from(value))
    }
}

/// The set of style names carried by one character.
///
/// Iteration order is the lexicographic order of the names and carries no meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StyleSet {
    names: BTreeSet<StyleName>,
}

impl StyleSet {
    /// Creates an empty style set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the set carries no style names.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the number of style names in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if `name` is in the set.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Adds `name`, returning `true` if it was not present.
    #[inline]
    pub fn insert(&mut self, name: StyleName) -> bool {
        self.names.insert(name)
    }

    /// Removes `name`, returning `true` if it was present.
    #[inline]
    pub fn remove(&mut self, name: &str) -> bool {
        self.names.remove(name)
    }

    /// Returns a copy of this set with `name` added.
    #[must_use]
    pub fn with(&self, name: StyleName) -> Self {
        let mut out = self.clone();
        out.insert(name);
        out
    }

    /// Returns a copy of this set with `name` removed.
    #[must_use]
    pub fn without(&self, name: &str) -> Self {
        let mut out = self.clone();
        out.remove(name);
        out
    }

    /// Iterate over the names in the set.
    #[inline]
    pub fn iter(&self) -> btree_set::Iter<'_, StyleName> {
        self.names.iter()
    }
}

impl<'a> IntoIterator for &'a StyleSet {
    type Item = &'a StyleName;
    type IntoIter = btree_set::Iter<'a, StyleName>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<StyleName> for StyleSet {
    fn from_iter<I: IntoIterator<Item = StyleName>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for StyleSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(StyleName::new).collect()
    }
}

impl Extend<StyleName> for StyleSet {
    fn extend<I: IntoIterator<Item = StyleName>>(&mut self, iter: I) {
        self.names.extend(iter);
    }
}
