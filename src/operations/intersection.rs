use tracing::trace;

use super::validate::validate_boxes;
use crate::geometry::{AlgebraError, Hyperbox};

/// Computes the box common to every box in `boxes`.
///
/// # Arguments
///
/// * `boxes` - Non-empty list of boxes sharing one dimensionality
///
/// # Returns
///
/// The overlap box, or `None` when the boxes share no cell. Fails with
/// `InvalidArgument` on an empty list and `IncompatibleDimensions` on mixed
/// dimensionality.
pub fn intersect(boxes: &[Hyperbox]) -> Result<Option<Hyperbox>, AlgebraError> {
    validate_boxes(boxes)?;
    let Some((first, rest)) = boxes.split_first() else {
        return Err(AlgebraError::InvalidArgument(
            "at least one box is required".to_string(),
        ));
    };

    let mut common = first.clone();
    for (offset, b) in rest.iter().enumerate() {
        match common.intersect_bounds_unchecked(b) {
            Some(next) => common = next,
            // An inverted axis stays inverted: no later box can restore it.
            None => {
                trace!(index = offset + 1, "intersection became empty");
                return Ok(None);
            }
        }
    }
    Ok(Some(common))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hb(start: &[i64], end: &[i64]) -> Hyperbox {
        Hyperbox::new(start.to_vec(), end.to_vec()).unwrap()
    }

    #[test]
    fn single_box_is_returned_unchanged() {
        let b = hb(&[1, 2, 3], &[4, 5, 6]);
        assert_eq!(intersect(&[b.clone()]), Ok(Some(b)));
    }

    #[test]
    fn empty_input_is_invalid() {
        assert!(matches!(
            intersect(&[]),
            Err(AlgebraError::InvalidArgument(_))
        ));
    }

    #[test]
    fn mixed_dimensions_fail() {
        let boxes = [hb(&[0], &[5]), hb(&[0, 0], &[5, 5])];
        assert_eq!(
            intersect(&boxes),
            Err(AlgebraError::IncompatibleDimensions {
                index: 1,
                expected: 1,
                found: 2,
            })
        );
    }

    #[test]
    fn short_circuits_on_empty_fold() {
        // The third box would cover everything, but the first two are disjoint.
        let boxes = [hb(&[0], &[5]), hb(&[10], &[15]), hb(&[0], &[20])];
        assert_eq!(intersect(&boxes), Ok(None));
    }

    #[test]
    fn identical_boxes_intersect_to_themselves() {
        let b = hb(&[0, 0], &[3, 3]);
        assert_eq!(intersect(&[b.clone(), b.clone(), b.clone()]), Ok(Some(b)));
    }

    #[test]
    fn point_inside_box() {
        let p = hb(&[3, 3, 3], &[3, 3, 3]);
        let b = hb(&[1, 1, 1], &[4, 4, 4]);
        assert_eq!(intersect(&[b, p.clone()]), Ok(Some(p)));
    }
}
