//! Union of boxes as a disjoint cover.
//!
//! The union is reduced in passes over an owned worklist that is sorted and
//! deduplicated between passes, so no index is held across a mutation:
//!
//! 1. Merge passes. Each pass walks the pairs in worklist order and merges
//!    every mergeable pair whose boxes no earlier merge of the same pass has
//!    consumed. Passes repeat until one merges nothing.
//! 2. One split pass. Boxes are added in worklist order to a disjoint cover.
//!    A box inside a cover box is dropped; otherwise every cover box it
//!    overlaps is replaced by its difference against it, and the box joins
//!    the cover unchanged.
//! 3. Merge passes again, over the disjoint fragments.
//!
//! Every merge removes a box, so each merge phase runs at most as many
//! passes as it has boxes, and each pass is quadratic in the worklist size.
//! Merging two disjoint boxes keeps the cover disjoint.

use tracing::{debug, trace};

use super::validate::validate_boxes;
use crate::geometry::{AlgebraError, BoxSet, Hyperbox};

/// Computes a disjoint set of boxes covering exactly the cells covered by
/// `boxes`.
///
/// # Arguments
///
/// * `boxes` - Non-empty list of boxes sharing one dimensionality
///
/// # Returns
///
/// A [`BoxSet`] in canonical form: sorted, disjoint, and with no two boxes
/// that could be expressed as one. The result is deterministic for a given
/// input set, and unifying it again returns it unchanged.
pub fn unify(boxes: &[Hyperbox]) -> Result<BoxSet, AlgebraError> {
    validate_boxes(boxes)?;

    let mut merges = 0usize;
    let worklist = merge_passes(canonical_order(boxes.to_vec()), &mut merges);
    let (worklist, splits) = disjoint_cover(worklist);
    let worklist = merge_passes(worklist, &mut merges);

    debug!(
        inputs = boxes.len(),
        outputs = worklist.len(),
        merges,
        splits,
        "unified boxes"
    );
    Ok(BoxSet::from_canonical_unchecked(worklist))
}

/// Sorts ascending by start coordinate and drops duplicates.
fn canonical_order(mut boxes: Vec<Hyperbox>) -> Vec<Hyperbox> {
    boxes.sort();
    boxes.dedup();
    boxes
}

/// Runs merge passes until one merges nothing.
fn merge_passes(mut worklist: Vec<Hyperbox>, merges: &mut usize) -> Vec<Hyperbox> {
    loop {
        let (next, merged) = merge_pass(&worklist);
        if merged == 0 {
            return worklist;
        }
        *merges += merged;
        worklist = canonical_order(next);
    }
}

/// One pass: each box merges with at most one later partner.
fn merge_pass(worklist: &[Hyperbox]) -> (Vec<Hyperbox>, usize) {
    let mut consumed = vec![false; worklist.len()];
    let mut next = Vec::with_capacity(worklist.len());
    let mut merged_count = 0usize;

    for (first, a) in worklist.iter().enumerate() {
        if consumed[first] {
            continue;
        }
        let partner = worklist
            .iter()
            .enumerate()
            .skip(first + 1)
            .filter(|(second, _)| !consumed[*second])
            .find_map(|(second, b)| a.mergeable_unchecked(b).map(|m| (second, b, m)));
        match partner {
            Some((second, b, merged)) => {
                trace!(%a, %b, %merged, "merge");
                consumed[second] = true;
                merged_count += 1;
                next.push(merged);
            }
            None => next.push(a.clone()),
        }
        consumed[first] = true;
    }
    (next, merged_count)
}

/// Cuts the worklist into disjoint boxes covering the same cells.
///
/// Returns the sorted cover and the number of boxes that were split.
fn disjoint_cover(worklist: Vec<Hyperbox>) -> (Vec<Hyperbox>, usize) {
    let mut cover: Vec<Hyperbox> = Vec::with_capacity(worklist.len());
    let mut splits = 0usize;

    for b in worklist {
        // The cover is disjoint, so a covered box lies inside a single member.
        if cover.iter().any(|c| c.contains_unchecked(&b)) {
            trace!(%b, "covered");
            continue;
        }
        let mut next = Vec::with_capacity(cover.len() + 1);
        for c in cover {
            if c.overlaps_unchecked(&b) {
                let fragments = c.difference_unchecked(&b);
                trace!(a = %c, %b, pieces = fragments.len(), "split");
                splits += 1;
                next.extend(fragments);
            } else {
                next.push(c);
            }
        }
        next.push(b);
        cover = next;
    }
    (canonical_order(cover), splits)
}
