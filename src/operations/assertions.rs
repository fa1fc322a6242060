//! Canonical-form checks for box lists (debug builds only).

use crate::geometry::Hyperbox;

/// Returns true if all boxes share a dimensionality and no two overlap.
pub fn is_disjoint(boxes: &[Hyperbox]) -> bool {
    let Some(first) = boxes.first() else {
        return true;
    };
    boxes.iter().all(|b| b.dim() == first.dim())
        && boxes.iter().enumerate().all(|(i, a)| {
            boxes
                .iter()
                .skip(i + 1)
                .all(|b| !a.overlaps_unchecked(b))
        })
}

/// Returns true if `boxes` is strictly sorted, disjoint, and has no pair
/// that would merge into a single box.
pub fn is_canonical(boxes: &[Hyperbox]) -> bool {
    boxes.windows(2).all(|w| w[0] < w[1])
        && is_disjoint(boxes)
        && boxes.iter().enumerate().all(|(i, a)| {
            boxes
                .iter()
                .skip(i + 1)
                .all(|b| a.mergeable_unchecked(b).is_none())
        })
}
