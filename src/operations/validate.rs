use crate::geometry::{AlgebraError, Hyperbox};

/// Checks that `boxes` is non-empty and homogeneous in dimensionality.
///
/// Returns the shared dimensionality. Runs once per operation, before any
/// algebra, so the pairwise relations can skip their own checks.
pub fn validate_boxes(boxes: &[Hyperbox]) -> Result<usize, AlgebraError> {
    let first = boxes.first().ok_or_else(|| {
        AlgebraError::InvalidArgument("at least one box is required".to_string())
    })?;
    let expected = first.dim();
    if let Some((index, found)) = boxes
        .iter()
        .map(Hyperbox::dim)
        .enumerate()
        .find(|&(_, dim)| dim != expected)
    {
        return Err(AlgebraError::IncompatibleDimensions {
            index,
            expected,
            found,
        });
    }
    Ok(expected)
}
