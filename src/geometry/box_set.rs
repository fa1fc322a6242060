//! A canonical container for disjoint boxes.
//!
//! [`BoxSet`] wraps a `Vec<Hyperbox>` and guarantees the **canonical
//! invariant**: boxes share one dimensionality, are sorted by the
//! [`Hyperbox`] ordering, no two overlap, and no two could be merged into a
//! single box. Sets are produced by [`crate::operations::unify`].
//!
//! Read access is transparent via `Deref<Target = [Hyperbox]>`.

use std::fmt::Display;
use std::ops::Deref;

use super::error::AlgebraError;
use super::hyperbox::Hyperbox;

/// A sorted set of mutually disjoint boxes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BoxSet(Vec<Hyperbox>);

impl BoxSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Wraps a `Vec` that is **already in canonical form**.
    ///
    /// In debug builds this asserts the invariant.
    pub(crate) fn from_canonical_unchecked(vec: Vec<Hyperbox>) -> Self {
        debug_assert!(
            crate::operations::assertions::is_canonical(&vec),
            "BoxSet::from_canonical_unchecked called with non-canonical input"
        );
        Self(vec)
    }

    /// Shared dimensionality of the boxes, `None` for an empty set.
    pub fn dim(&self) -> Option<usize> {
        self.0.first().map(Hyperbox::dim)
    }

    /// Returns true if any box contains `point`.
    pub fn contains_point(&self, point: &[i64]) -> Result<bool, AlgebraError> {
        for b in &self.0 {
            if b.contains_point(point)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Total number of cells covered. Boxes are disjoint, so this is the
    /// volume of the union.
    pub fn volume(&self) -> u128 {
        self.0
            .iter()
            .fold(0u128, |acc, b| acc.saturating_add(b.volume()))
    }

    /// Returns the union of `self` and `other`.
    pub fn union(&self, other: &BoxSet) -> Result<BoxSet, AlgebraError> {
        if self.0.is_empty() {
            return Ok(other.clone());
        }
        if other.0.is_empty() {
            return Ok(self.clone());
        }
        let boxes: Vec<Hyperbox> = self.0.iter().chain(other.0.iter()).cloned().collect();
        crate::operations::unify(&boxes)
    }

    pub fn as_slice(&self) -> &[Hyperbox] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Hyperbox> {
        self.0
    }
}

impl Deref for BoxSet {
    type Target = [Hyperbox];

    fn deref(&self) -> &[Hyperbox] {
        &self.0
    }
}

impl AsRef<[Hyperbox]> for BoxSet {
    fn as_ref(&self) -> &[Hyperbox] {
        &self.0
    }
}

impl From<Hyperbox> for BoxSet {
    /// A single box is always canonical.
    fn from(b: Hyperbox) -> Self {
        Self(vec![b])
    }
}

impl IntoIterator for BoxSet {
    type Item = Hyperbox;
    type IntoIter = std::vec::IntoIter<Hyperbox>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a BoxSet {
    type Item = &'a Hyperbox;
    type IntoIter = std::slice::Iter<'a, Hyperbox>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for BoxSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, b) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", b)?;
        }
        write!(f, "}}")
    }
}

/// Enables `assert_eq!(box_set, vec![...])` in tests.
impl PartialEq<Vec<Hyperbox>> for BoxSet {
    fn eq(&self, other: &Vec<Hyperbox>) -> bool {
        self.0 == *other
    }
}

impl PartialEq<BoxSet> for Vec<Hyperbox> {
    fn eq(&self, other: &BoxSet) -> bool {
        *self == other.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for BoxSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

/// Deserialized boxes are re-unified, so any list of boxes is accepted.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BoxSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vec = <Vec<Hyperbox> as serde::Deserialize>::deserialize(deserializer)?;
        if vec.is_empty() {
            return Ok(Self::new());
        }
        crate::operations::unify(&vec).map_err(serde::de::Error::custom)
    }
}
