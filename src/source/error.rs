use thiserror::Error;

use crate::geometry::AlgebraError;
use crate::Id;

/// Errors raised while turning annotations into boxes and boxes into views.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegionError {
    #[error("Annotation '{annotation}' does not reference array {array}")]
    NotReferenced { annotation: String, array: Id },

    #[error("Reference index {index} out of bounds for {len} references")]
    OutOfBounds { index: usize, len: usize },

    #[error("Region {start}..={end} on axis {axis} exceeds array extent {size}")]
    RegionOutOfBounds {
        axis: usize,
        start: i64,
        end: i64,
        size: usize,
    },

    #[error("'{source_name}' has incompatible dimensions: expected {expected}, found {found}")]
    IncompatibleDimensions {
        source_name: String,
        expected: usize,
        found: usize,
    },

    #[error("Annotation '{annotation}' has {positions} positions but {extents} extents")]
    ExtentCountMismatch {
        annotation: String,
        positions: usize,
        extents: usize,
    },

    #[error("Array data length {found} does not match shape volume {expected}")]
    DataLengthMismatch { expected: usize, found: usize },

    #[error("Collected {count} boxes, exceeding the configured limit of {limit}")]
    TooManyBoxes { count: usize, limit: usize },

    #[error("No array with id {array} was supplied")]
    UnknownArray { array: Id },

    #[error("Cannot select a region: no annotations supplied")]
    NoAnnotations,

    #[error(transparent)]
    Algebra(#[from] AlgebraError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_referenced_display() {
        let e = RegionError::NotReferenced {
            annotation: "t1".to_string(),
            array: "abc".to_string(),
        };
        assert_eq!(e.to_string(), "Annotation 't1' does not reference array abc");
    }

    #[test]
    fn unknown_array_display() {
        let e = RegionError::UnknownArray {
            array: "abc".to_string(),
        };
        assert_eq!(e.to_string(), "No array with id abc was supplied");
    }

    #[test]
    fn out_of_bounds_display() {
        let e = RegionError::OutOfBounds { index: 3, len: 1 };
        assert_eq!(
            e.to_string(),
            "Reference index 3 out of bounds for 1 references"
        );
    }

    #[test]
    fn algebra_error_is_transparent() {
        let inner = AlgebraError::InvalidArgument("bad box".to_string());
        let e = RegionError::from(inner.clone());
        assert_eq!(e.to_string(), inner.to_string());
        assert_eq!(e, RegionError::Algebra(inner));
    }
}
