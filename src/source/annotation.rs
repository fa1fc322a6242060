//! Tag and multi-tag annotations.
//!
//! A [`Tag`] marks one region: a position plus an optional extent. A
//! [`MultiTag`] marks a batch of regions with one position (and optionally
//! one extent) per row. In both, a region spans `position ..= position +
//! extent` on each axis; a missing extent marks a single cell.

use super::error::RegionError;
use super::traits::RegionSource;
use crate::geometry::Hyperbox;
use crate::Id;

/// Builds the box of one position/extent pair.
fn region_box(
    annotation: &str,
    position: &[i64],
    extent: Option<&[i64]>,
) -> Result<Hyperbox, RegionError> {
    match extent {
        Some(extent) => {
            if extent.len() != position.len() {
                return Err(RegionError::IncompatibleDimensions {
                    source_name: annotation.to_string(),
                    expected: position.len(),
                    found: extent.len(),
                });
            }
            Ok(Hyperbox::from_extent(position, extent)?)
        }
        None => Ok(Hyperbox::point(position.to_vec())?),
    }
}

// =============================================================================
// Tag
// =============================================================================

/// A single tagged region.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag {
    name: String,
    position: Vec<i64>,
    extent: Option<Vec<i64>>,
    references: Vec<Id>,
}

impl Tag {
    pub fn new(name: impl Into<String>, position: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            position,
            extent: None,
            references: Vec::new(),
        }
    }

    pub fn with_extent(mut self, extent: Vec<i64>) -> Self {
        self.extent = Some(extent);
        self
    }

    pub fn with_reference(mut self, array: impl Into<Id>) -> Self {
        self.references.push(array.into());
        self
    }

    pub fn set_extent(&mut self, extent: Option<Vec<i64>>) {
        self.extent = extent;
    }

    pub fn add_reference(&mut self, array: impl Into<Id>) {
        self.references.push(array.into());
    }

    pub fn position(&self) -> &[i64] {
        &self.position
    }

    pub fn extent(&self) -> Option<&[i64]> {
        self.extent.as_deref()
    }
}

impl RegionSource for Tag {
    fn name(&self) -> &str {
        &self.name
    }

    fn references(&self) -> &[Id] {
        &self.references
    }

    fn boxes(&self) -> Result<Vec<Hyperbox>, RegionError> {
        Ok(vec![region_box(
            &self.name,
            &self.position,
            self.extent.as_deref(),
        )?])
    }
}

// =============================================================================
// MultiTag
// =============================================================================

/// A batch of tagged regions, one per position row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiTag {
    name: String,
    positions: Vec<Vec<i64>>,
    extents: Option<Vec<Vec<i64>>>,
    references: Vec<Id>,
}

impl MultiTag {
    pub fn new(name: impl Into<String>, positions: Vec<Vec<i64>>) -> Self {
        Self {
            name: name.into(),
            positions,
            extents: None,
            references: Vec::new(),
        }
    }

    pub fn with_extents(mut self, extents: Vec<Vec<i64>>) -> Self {
        self.extents = Some(extents);
        self
    }

    pub fn with_reference(mut self, array: impl Into<Id>) -> Self {
        self.references.push(array.into());
        self
    }

    pub fn set_extents(&mut self, extents: Option<Vec<Vec<i64>>>) {
        self.extents = extents;
    }

    pub fn add_reference(&mut self, array: impl Into<Id>) {
        self.references.push(array.into());
    }

    pub fn positions(&self) -> &[Vec<i64>] {
        &self.positions
    }

    pub fn extents(&self) -> Option<&[Vec<i64>]> {
        self.extents.as_deref()
    }

    /// Number of tagged regions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl RegionSource for MultiTag {
    fn name(&self) -> &str {
        &self.name
    }

    fn references(&self) -> &[Id] {
        &self.references
    }

    /// Rows must all have the same number of coordinates.
    fn boxes(&self) -> Result<Vec<Hyperbox>, RegionError> {
        if let Some(extents) = &self.extents {
            if extents.len() != self.positions.len() {
                return Err(RegionError::ExtentCountMismatch {
                    annotation: self.name.clone(),
                    positions: self.positions.len(),
                    extents: extents.len(),
                });
            }
        }
        if let Some(first) = self.positions.first() {
            if let Some(row) = self.positions.iter().find(|row| row.len() != first.len()) {
                return Err(RegionError::IncompatibleDimensions {
                    source_name: self.name.clone(),
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }

        self.positions
            .iter()
            .enumerate()
            .map(|(row, position)| {
                let extent = self.extents.as_ref().map(|e| e[row].as_slice());
                region_box(&self.name, position, extent)
            })
            .collect()
    }
}

// =============================================================================
// Annotation
// =============================================================================

/// Either annotation shape, for heterogeneous lists.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Annotation {
    Tag(Tag),
    MultiTag(MultiTag),
}

impl From<Tag> for Annotation {
    fn from(tag: Tag) -> Self {
        Annotation::Tag(tag)
    }
}

impl From<MultiTag> for Annotation {
    fn from(tag: MultiTag) -> Self {
        Annotation::MultiTag(tag)
    }
}

impl RegionSource for Annotation {
    fn name(&self) -> &str {
        match self {
            Annotation::Tag(t) => t.name(),
            Annotation::MultiTag(t) => t.name(),
        }
    }

    fn references(&self) -> &[Id] {
        match self {
            Annotation::Tag(t) => t.references(),
            Annotation::MultiTag(t) => t.references(),
        }
    }

    fn boxes(&self) -> Result<Vec<Hyperbox>, RegionError> {
        match self {
            Annotation::Tag(t) => t.boxes(),
            Annotation::MultiTag(t) => t.boxes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::AlgebraError;

    fn hb(start: &[i64], end: &[i64]) -> Hyperbox {
        Hyperbox::new(start.to_vec(), end.to_vec()).unwrap()
    }

    #[test]
    fn tag_with_extent() {
        let t = Tag::new("t1", vec![0]).with_extent(vec![12]);
        assert_eq!(t.boxes().unwrap(), vec![hb(&[0], &[12])]);
    }

    #[test]
    fn tag_without_extent_is_a_point() {
        let t = Tag::new("t1", vec![3, 4]);
        assert_eq!(t.boxes().unwrap(), vec![hb(&[3, 4], &[3, 4])]);
    }

    #[test]
    fn tag_extent_can_be_replaced() {
        let mut t = Tag::new("t1", vec![0]).with_extent(vec![5]);
        t.set_extent(Some(vec![30]));
        assert_eq!(t.boxes().unwrap(), vec![hb(&[0], &[30])]);
        assert_eq!(t.extent(), Some(&[30][..]));
    }

    #[test]
    fn tag_extent_length_mismatch() {
        let t = Tag::new("t1", vec![0, 0]).with_extent(vec![1]);
        assert_eq!(
            t.boxes(),
            Err(RegionError::IncompatibleDimensions {
                source_name: "t1".to_string(),
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn tag_negative_extent_is_invalid() {
        let t = Tag::new("t1", vec![4]).with_extent(vec![-2]);
        assert!(matches!(
            t.boxes(),
            Err(RegionError::Algebra(AlgebraError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn multi_tag_one_box_per_row() {
        let t = MultiTag::new("t1", vec![vec![0, 0, 0], vec![1, 1, 1]])
            .with_extents(vec![vec![3, 3, 3], vec![3, 3, 3]]);
        assert_eq!(t.len(), 2);
        assert_eq!(
            t.boxes().unwrap(),
            vec![hb(&[0, 0, 0], &[3, 3, 3]), hb(&[1, 1, 1], &[4, 4, 4])]
        );
    }

    #[test]
    fn multi_tag_flat_positions_are_1d() {
        let t = MultiTag::new("t3", vec![vec![1], vec![0], vec![0]])
            .with_extents(vec![vec![2], vec![2], vec![2]]);
        assert_eq!(
            t.boxes().unwrap(),
            vec![hb(&[1], &[3]), hb(&[0], &[2]), hb(&[0], &[2])]
        );
    }

    #[test]
    fn multi_tag_without_extents_are_points() {
        let t = MultiTag::new("t1", vec![vec![2, 2], vec![5, 6]]);
        assert_eq!(
            t.boxes().unwrap(),
            vec![hb(&[2, 2], &[2, 2]), hb(&[5, 6], &[5, 6])]
        );
    }

    #[test]
    fn multi_tag_extent_count_mismatch() {
        let t = MultiTag::new("t1", vec![vec![0], vec![1]]).with_extents(vec![vec![1]]);
        assert_eq!(
            t.boxes(),
            Err(RegionError::ExtentCountMismatch {
                annotation: "t1".to_string(),
                positions: 2,
                extents: 1,
            })
        );
    }

    #[test]
    fn multi_tag_ragged_rows() {
        let t = MultiTag::new("t1", vec![vec![0, 0], vec![1]]);
        assert!(matches!(
            t.boxes(),
            Err(RegionError::IncompatibleDimensions { expected: 2, found: 1, .. })
        ));
    }

    #[test]
    fn annotation_dispatches_to_shape() {
        let tag: Annotation = Tag::new("t", vec![0]).with_reference("a").into();
        let multi: Annotation = MultiTag::new("m", vec![vec![1], vec![4]])
            .with_reference("b")
            .into();
        assert_eq!(tag.name(), "t");
        assert!(tag.references_array("a"));
        assert!(!tag.references_array("b"));
        assert_eq!(multi.boxes().unwrap().len(), 2);
        assert_eq!(multi.references(), &["b".to_string()]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn annotation_serde_roundtrip() {
        let a: Annotation = Tag::new("t", vec![0, 1]).with_extent(vec![2, 2]).into();
        let json = serde_json::to_string(&a).unwrap();
        let back: Annotation = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
    }
}
