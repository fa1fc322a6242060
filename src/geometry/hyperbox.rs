//! Axis-aligned integer hyperrectangles with inclusive bounds.

use std::fmt::Display;

use super::error::AlgebraError;

/// Box `[start, end]` on an integer grid, inclusive on every axis.
///
/// The ordering is lexicographic over `start` (axis 0 most significant), then
/// over `end`. Unions are emitted in this order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hyperbox {
    start: Vec<i64>,
    end: Vec<i64>,
}

impl Hyperbox {
    /// Creates the box `[start, end]`.
    ///
    /// Fails with [`AlgebraError::InvalidArgument`] if the box has no axes,
    /// if `start` and `end` differ in length, or if `start[i] > end[i]` on
    /// any axis.
    pub fn new(start: Vec<i64>, end: Vec<i64>) -> Result<Self, AlgebraError> {
        if start.is_empty() {
            return Err(AlgebraError::InvalidArgument(
                "box must have at least one dimension".to_string(),
            ));
        }
        if start.len() != end.len() {
            return Err(AlgebraError::InvalidArgument(format!(
                "start has {} coordinates but end has {}",
                start.len(),
                end.len()
            )));
        }
        if let Some(axis) = (0..start.len()).find(|&i| start[i] > end[i]) {
            return Err(AlgebraError::InvalidArgument(format!(
                "start {} exceeds end {} on axis {}",
                start[axis], end[axis], axis
            )));
        }
        Ok(Self { start, end })
    }

    /// Creates a single-cell box.
    pub fn point(coords: Vec<i64>) -> Result<Self, AlgebraError> {
        let end = coords.clone();
        Self::new(coords, end)
    }

    /// Creates the box spanning `position ..= position + extent` on each axis.
    ///
    /// An extent of zero selects a single cell on that axis.
    pub fn from_extent(position: &[i64], extent: &[i64]) -> Result<Self, AlgebraError> {
        if position.len() != extent.len() {
            return Err(AlgebraError::InvalidArgument(format!(
                "position has {} coordinates but extent has {}",
                position.len(),
                extent.len()
            )));
        }
        let end = position
            .iter()
            .zip(extent)
            .map(|(&p, &e)| {
                p.checked_add(e).ok_or_else(|| {
                    AlgebraError::InvalidArgument(format!(
                        "position {} plus extent {} overflows",
                        p, e
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(position.to_vec(), end)
    }

    /// Wraps bounds already known to be well-formed.
    pub(crate) fn from_bounds_unchecked(start: Vec<i64>, end: Vec<i64>) -> Self {
        debug_assert!(
            !start.is_empty()
                && start.len() == end.len()
                && start.iter().zip(&end).all(|(s, e)| s <= e),
            "Hyperbox::from_bounds_unchecked called with malformed bounds"
        );
        Self { start, end }
    }

    pub fn dim(&self) -> usize {
        self.start.len()
    }

    pub fn start(&self) -> &[i64] {
        &self.start
    }

    pub fn end(&self) -> &[i64] {
        &self.end
    }

    /// Returns true if the box covers exactly one cell.
    pub fn is_point(&self) -> bool {
        self.start == self.end
    }

    /// Number of cells covered along each axis.
    pub fn lengths(&self) -> Vec<u128> {
        self.start
            .iter()
            .zip(&self.end)
            .map(|(&s, &e)| (e as i128 - s as i128 + 1) as u128)
            .collect()
    }

    /// Number of grid cells covered, saturating at `u128::MAX`.
    pub fn volume(&self) -> u128 {
        self.lengths()
            .into_iter()
            .fold(1u128, |acc, len| acc.saturating_mul(len))
    }

    pub fn into_bounds(self) -> (Vec<i64>, Vec<i64>) {
        (self.start, self.end)
    }
}

impl Display for Hyperbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, (s, e)) in self.start.iter().zip(&self.end).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}..={}", s, e)?;
        }
        write!(f, "]")
    }
}

// =============================================================================
// Hyperbox Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Hyperbox {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Hyperbox", 2)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Hyperbox {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            start: Vec<i64>,
            end: Vec<i64>,
        }

        let raw = <Raw as serde::Deserialize>::deserialize(deserializer)?;
        Self::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}
