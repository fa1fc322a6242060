//! The seam between annotations and the box algebra.

use super::error::RegionError;
use crate::geometry::Hyperbox;
use crate::Id;

/// Anything that tags regions of one or more arrays.
///
/// Implementors normalise their own shape (a single position, a batch of
/// positions) into a flat list of boxes, so the algebra only ever sees
/// homogeneous `Hyperbox` lists.
pub trait RegionSource {
    /// Human-readable name used in error messages.
    fn name(&self) -> &str;

    /// Identifiers of the arrays this annotation refers to.
    fn references(&self) -> &[Id];

    /// Returns true if this annotation refers to `array`.
    fn references_array(&self, array: &str) -> bool {
        self.references().iter().any(|r| r == array)
    }

    /// The boxes tagged by this annotation, one per tagged position.
    fn boxes(&self) -> Result<Vec<Hyperbox>, RegionError>;
}

impl<S: RegionSource + ?Sized> RegionSource for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn references(&self) -> &[Id] {
        (**self).references()
    }

    fn boxes(&self) -> Result<Vec<Hyperbox>, RegionError> {
        (**self).boxes()
    }
}
