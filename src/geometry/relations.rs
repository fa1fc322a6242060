//! Pairwise relations between boxes: containment, overlap, intersection,
//! merging and difference.
//!
//! The public methods check that both operands share a dimensionality and
//! report a mismatch as [`AlgebraError::InvalidArgument`]. The `_unchecked`
//! variants are used by the operations once a whole input list has been
//! validated.

use super::error::AlgebraError;
use super::hyperbox::Hyperbox;

fn ensure_same_dim(left: usize, right: usize) -> Result<(), AlgebraError> {
    if left != right {
        return Err(AlgebraError::InvalidArgument(format!(
            "dimension mismatch: {} vs {}",
            left, right
        )));
    }
    Ok(())
}

impl Hyperbox {
    /// Returns true if `start[i] <= point[i] <= end[i]` on every axis.
    pub fn contains_point(&self, point: &[i64]) -> Result<bool, AlgebraError> {
        ensure_same_dim(self.dim(), point.len())?;
        Ok(self.contains_point_unchecked(point))
    }

    /// Returns true if every cell of `other` lies inside `self`.
    pub fn contains(&self, other: &Hyperbox) -> Result<bool, AlgebraError> {
        ensure_same_dim(self.dim(), other.dim())?;
        Ok(self.contains_unchecked(other))
    }

    /// Returns true if the boxes share at least one cell.
    ///
    /// Bounds are inclusive, so boxes touching on a boundary overlap.
    pub fn overlaps(&self, other: &Hyperbox) -> Result<bool, AlgebraError> {
        ensure_same_dim(self.dim(), other.dim())?;
        Ok(self.overlaps_unchecked(other))
    }

    /// Returns the common box (per-axis max of starts, min of ends), or
    /// `None` when the bounds invert on any axis.
    pub fn intersect_bounds(&self, other: &Hyperbox) -> Result<Option<Hyperbox>, AlgebraError> {
        ensure_same_dim(self.dim(), other.dim())?;
        Ok(self.intersect_bounds_unchecked(other))
    }

    /// Returns the single box covering exactly `self ∪ other`, if one exists.
    ///
    /// That is the case when the boxes agree on every axis but at most one,
    /// and on that axis their spans overlap or abut with no integer gap.
    /// Boxes differing on two or more axes never merge: their hull would
    /// include cells covered by neither.
    pub fn mergeable(&self, other: &Hyperbox) -> Result<Option<Hyperbox>, AlgebraError> {
        ensure_same_dim(self.dim(), other.dim())?;
        Ok(self.mergeable_unchecked(other))
    }

    /// Returns `self` minus the cells covered by `other` as disjoint boxes.
    ///
    /// Slabs are cut axis by axis: on each axis the parts of the remainder
    /// below and above `other` become their own boxes and the remainder
    /// shrinks to `other`'s span. The slabs plus the final remainder (the
    /// overlap) partition `self`.
    pub fn difference(&self, other: &Hyperbox) -> Result<Vec<Hyperbox>, AlgebraError> {
        ensure_same_dim(self.dim(), other.dim())?;
        Ok(self.difference_unchecked(other))
    }

    pub(crate) fn contains_point_unchecked(&self, point: &[i64]) -> bool {
        self.start()
            .iter()
            .zip(self.end())
            .zip(point)
            .all(|((&s, &e), &p)| s <= p && p <= e)
    }

    pub(crate) fn contains_unchecked(&self, other: &Hyperbox) -> bool {
        self.start()
            .iter()
            .zip(self.end())
            .zip(other.start().iter().zip(other.end()))
            .all(|((&s, &e), (&os, &oe))| s <= os && oe <= e)
    }

    pub(crate) fn overlaps_unchecked(&self, other: &Hyperbox) -> bool {
        self.start()
            .iter()
            .zip(self.end())
            .zip(other.start().iter().zip(other.end()))
            .all(|((&s, &e), (&os, &oe))| s <= oe && os <= e)
    }

    pub(crate) fn intersect_bounds_unchecked(&self, other: &Hyperbox) -> Option<Hyperbox> {
        let start: Vec<i64> = self
            .start()
            .iter()
            .zip(other.start())
            .map(|(&a, &b)| a.max(b))
            .collect();
        let end: Vec<i64> = self
            .end()
            .iter()
            .zip(other.end())
            .map(|(&a, &b)| a.min(b))
            .collect();
        if start.iter().zip(&end).all(|(s, e)| s <= e) {
            Some(Hyperbox::from_bounds_unchecked(start, end))
        } else {
            None
        }
    }

    pub(crate) fn mergeable_unchecked(&self, other: &Hyperbox) -> Option<Hyperbox> {
        let mut differing = None;
        for axis in 0..self.dim() {
            if self.start()[axis] != other.start()[axis] || self.end()[axis] != other.end()[axis] {
                if differing.is_some() {
                    return None;
                }
                differing = Some(axis);
            }
        }
        let Some(axis) = differing else {
            return Some(self.clone());
        };

        let (s, e) = (self.start()[axis], self.end()[axis]);
        let (os, oe) = (other.start()[axis], other.end()[axis]);
        let contiguous = e.saturating_add(1) >= os && oe.saturating_add(1) >= s;
        if !contiguous {
            return None;
        }

        let mut start = self.start().to_vec();
        let mut end = self.end().to_vec();
        start[axis] = s.min(os);
        end[axis] = e.max(oe);
        Some(Hyperbox::from_bounds_unchecked(start, end))
    }

    pub(crate) fn difference_unchecked(&self, other: &Hyperbox) -> Vec<Hyperbox> {
        if !self.overlaps_unchecked(other) {
            return vec![self.clone()];
        }

        let mut rest_start = self.start().to_vec();
        let mut rest_end = self.end().to_vec();
        let mut slabs = Vec::new();
        for axis in 0..self.dim() {
            let (lo, hi) = (other.start()[axis], other.end()[axis]);
            if rest_start[axis] < lo {
                let mut slab_end = rest_end.clone();
                slab_end[axis] = lo - 1;
                slabs.push(Hyperbox::from_bounds_unchecked(rest_start.clone(), slab_end));
                rest_start[axis] = lo;
            }
            if rest_end[axis] > hi {
                let mut slab_start = rest_start.clone();
                slab_start[axis] = hi + 1;
                slabs.push(Hyperbox::from_bounds_unchecked(slab_start, rest_end.clone()));
                rest_end[axis] = hi;
            }
        }
        slabs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hb(start: &[i64], end: &[i64]) -> Hyperbox {
        Hyperbox::new(start.to_vec(), end.to_vec()).unwrap()
    }

    fn cells(b: &Hyperbox) -> Vec<Vec<i64>> {
        let mut out = vec![vec![]];
        for axis in 0..b.dim() {
            out = out
                .into_iter()
                .flat_map(|prefix| {
                    (b.start()[axis]..=b.end()[axis]).map(move |c| {
                        let mut next = prefix.clone();
                        next.push(c);
                        next
                    })
                })
                .collect();
        }
        out
    }

    #[test]
    fn contains_point_is_inclusive() {
        let b = hb(&[0, 0], &[4, 4]);
        assert!(b.contains_point(&[0, 0]).unwrap());
        assert!(b.contains_point(&[4, 4]).unwrap());
        assert!(b.contains_point(&[2, 3]).unwrap());
        assert!(!b.contains_point(&[5, 0]).unwrap());
        assert!(!b.contains_point(&[0, -1]).unwrap());
    }

    #[test]
    fn dimension_mismatch_is_invalid_argument() {
        let a = hb(&[0, 0], &[4, 4]);
        let b = hb(&[0], &[4]);
        assert!(matches!(
            a.overlaps(&b),
            Err(AlgebraError::InvalidArgument(_))
        ));
        assert!(a.intersect_bounds(&b).is_err());
        assert!(a.mergeable(&b).is_err());
        assert!(a.difference(&b).is_err());
        assert!(a.contains(&b).is_err());
        assert!(a.contains_point(&[1]).is_err());
    }

    #[test]
    fn touching_boxes_overlap() {
        let a = hb(&[0], &[5]);
        let b = hb(&[5], &[9]);
        let c = hb(&[6], &[9]);
        assert!(a.overlaps(&b).unwrap());
        assert!(b.overlaps(&a).unwrap());
        assert!(!a.overlaps(&c).unwrap());
    }

    #[test]
    fn overlap_needs_every_axis() {
        // Overlapping on axis 0 only.
        let a = hb(&[0, 0], &[5, 5]);
        let b = hb(&[2, 7], &[3, 9]);
        assert!(!a.overlaps(&b).unwrap());
    }

    #[test]
    fn intersect_corner() {
        let a = hb(&[0, 0], &[7, 7]);
        let b = hb(&[5, 5], &[9, 9]);
        assert_eq!(a.intersect_bounds(&b).unwrap(), Some(hb(&[5, 5], &[7, 7])));
    }

    #[test]
    fn intersect_touching_is_single_cell() {
        let a = hb(&[0], &[10]);
        let b = hb(&[10], &[15]);
        assert_eq!(a.intersect_bounds(&b).unwrap(), Some(hb(&[10], &[10])));
    }

    #[test]
    fn intersect_disjoint_is_none() {
        let a = hb(&[0, 0], &[3, 3]);
        let b = hb(&[5, 5], &[8, 8]);
        assert_eq!(a.intersect_bounds(&b).unwrap(), None);
    }

    #[test]
    fn contains_box() {
        let outer = hb(&[0, 0], &[7, 7]);
        let inner = hb(&[2, 2], &[5, 5]);
        assert!(outer.contains(&inner).unwrap());
        assert!(!inner.contains(&outer).unwrap());
        assert!(outer.contains(&outer).unwrap());
    }

    #[test]
    fn merge_abutting_along_one_axis() {
        let a = hb(&[0, 0], &[4, 3]);
        let b = hb(&[5, 0], &[9, 3]);
        assert_eq!(a.mergeable(&b).unwrap(), Some(hb(&[0, 0], &[9, 3])));
        assert_eq!(b.mergeable(&a).unwrap(), Some(hb(&[0, 0], &[9, 3])));
    }

    #[test]
    fn merge_overlapping_along_one_axis() {
        let a = hb(&[0], &[12]);
        let b = hb(&[10], &[15]);
        assert_eq!(a.mergeable(&b).unwrap(), Some(hb(&[0], &[15])));
    }

    #[test]
    fn merge_rejects_gap() {
        let a = hb(&[0, 0], &[4, 3]);
        let b = hb(&[6, 0], &[9, 3]);
        assert_eq!(a.mergeable(&b).unwrap(), None);
    }

    #[test]
    fn merge_rejects_two_differing_axes() {
        let a = hb(&[0, 0], &[4, 4]);
        let b = hb(&[5, 1], &[9, 4]);
        assert_eq!(a.mergeable(&b).unwrap(), None);
    }

    #[test]
    fn merge_identical_boxes() {
        let a = hb(&[1, 1], &[2, 2]);
        assert_eq!(a.mergeable(&a).unwrap(), Some(a.clone()));
    }

    #[test]
    fn merge_at_coordinate_limits_does_not_overflow() {
        let a = hb(&[i64::MAX - 1], &[i64::MAX]);
        let b = hb(&[i64::MIN], &[0]);
        assert_eq!(a.mergeable(&b).unwrap(), None);
    }

    #[test]
    fn difference_of_disjoint_is_self() {
        let a = hb(&[0, 0], &[2, 2]);
        let b = hb(&[5, 5], &[6, 6]);
        assert_eq!(a.difference(&b).unwrap(), vec![a.clone()]);
    }

    #[test]
    fn difference_of_covered_is_empty() {
        let a = hb(&[2, 2], &[3, 3]);
        let b = hb(&[0, 0], &[9, 9]);
        assert!(a.difference(&b).unwrap().is_empty());
    }

    #[test]
    fn difference_slices_axis_by_axis() {
        let a = hb(&[0, 0], &[7, 7]);
        let b = hb(&[5, 5], &[9, 9]);
        assert_eq!(
            a.difference(&b).unwrap(),
            vec![hb(&[0, 0], &[4, 7]), hb(&[5, 0], &[7, 4])]
        );
    }

    #[test]
    fn difference_around_inner_box_reconstructs_outer() {
        let outer = hb(&[0, 0, 0], &[4, 4, 4]);
        let inner = hb(&[1, 2, 1], &[2, 3, 3]);
        let slabs = outer.difference(&inner).unwrap();
        assert_eq!(slabs.len(), 6);

        for (i, a) in slabs.iter().enumerate() {
            assert!(!a.overlaps(&inner).unwrap());
            for b in slabs.iter().skip(i + 1) {
                assert!(!a.overlaps(b).unwrap(), "{} overlaps {}", a, b);
            }
        }
        let covered: u128 = slabs.iter().map(Hyperbox::volume).sum::<u128>() + inner.volume();
        assert_eq!(covered, outer.volume());

        for cell in cells(&outer) {
            let hits = slabs
                .iter()
                .filter(|s| s.contains_point(&cell).unwrap())
                .count()
                + usize::from(inner.contains_point(&cell).unwrap());
            assert_eq!(hits, 1, "cell {:?}", cell);
        }
    }
}
