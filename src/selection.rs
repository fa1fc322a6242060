//! End-to-end region selection: annotations in, array views out.
//!
//! A selection checks that every annotation references the target array,
//! flattens the annotations into boxes, runs the box algebra, and
//! materialises the result as [`DataView`]s over the array.

use tracing::debug;

use crate::config::SelectionConfig;
use crate::geometry::Hyperbox;
use crate::operations::{intersect, unify};
use crate::source::{RegionError, RegionSource};
use crate::view::{DataArray, DataView};
use crate::Id;

/// How a caller names the array a selection targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayRef {
    /// The array's identifier.
    Id(Id),
    /// Position in the first annotation's reference list.
    Index(usize),
}

/// Resolves `reference` to an array id.
///
/// An index is looked up in the references of the first annotation and
/// fails with [`RegionError::OutOfBounds`] if there is no such reference.
pub fn resolve_reference<S: RegionSource>(
    sources: &[S],
    reference: &ArrayRef,
) -> Result<Id, RegionError> {
    match reference {
        ArrayRef::Id(id) => Ok(id.clone()),
        ArrayRef::Index(index) => {
            let first = sources.first().ok_or(RegionError::NoAnnotations)?;
            let references = first.references();
            references
                .get(*index)
                .cloned()
                .ok_or(RegionError::OutOfBounds {
                    index: *index,
                    len: references.len(),
                })
        }
    }
}

/// Finds the array `reference` names among `arrays`.
///
/// Fails with [`RegionError::UnknownArray`] if the resolved id matches none
/// of them.
pub fn resolve_array<'a, T, S: RegionSource>(
    arrays: &'a [DataArray<T>],
    sources: &[S],
    reference: &ArrayRef,
) -> Result<&'a DataArray<T>, RegionError> {
    let id = resolve_reference(sources, reference)?;
    arrays
        .iter()
        .find(|array| array.id() == id)
        .ok_or(RegionError::UnknownArray { array: id })
}

/// Flattens `sources` into boxes after checking they all reference
/// `array_id`.
pub fn collect_boxes<S: RegionSource>(
    array_id: &str,
    sources: &[S],
    config: &SelectionConfig,
) -> Result<Vec<Hyperbox>, RegionError> {
    if sources.is_empty() {
        return Err(RegionError::NoAnnotations);
    }
    if let Some(source) = sources.iter().find(|s| !s.references_array(array_id)) {
        return Err(RegionError::NotReferenced {
            annotation: source.name().to_string(),
            array: array_id.to_string(),
        });
    }

    let mut boxes = Vec::new();
    for source in sources {
        boxes.extend(source.boxes()?);
        config.check_box_count(boxes.len())?;
    }
    Ok(boxes)
}

/// Runs intersections and unions of annotations under a [`SelectionConfig`].
#[derive(Debug, Clone, Default)]
pub struct RegionSelector {
    config: SelectionConfig,
}

impl RegionSelector {
    pub fn new(config: SelectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Returns the view of the region every annotation covers, or `None`
    /// when they share no cell.
    pub fn intersection<'a, T, S: RegionSource>(
        &self,
        array: &'a DataArray<T>,
        sources: &[S],
    ) -> Result<Option<DataView<'a, T>>, RegionError> {
        let boxes = collect_boxes(array.id(), sources, &self.config)?;
        let Some(boxes) = self.clip(array, boxes, true)? else {
            debug!(array = array.id(), "intersection lies outside the array");
            return Ok(None);
        };
        let region = intersect(&boxes)?;
        debug!(
            array = array.id(),
            boxes = boxes.len(),
            found = region.is_some(),
            "intersected annotations"
        );
        region.map(|r| DataView::new(array, &r)).transpose()
    }

    /// Returns one view per box of the disjoint union of the annotations.
    pub fn union<'a, T, S: RegionSource>(
        &self,
        array: &'a DataArray<T>,
        sources: &[S],
    ) -> Result<Vec<DataView<'a, T>>, RegionError> {
        let boxes = collect_boxes(array.id(), sources, &self.config)?;
        let boxes = self.clip(array, boxes, false)?.unwrap_or_default();
        if boxes.is_empty() {
            debug!(array = array.id(), "union lies outside the array");
            return Ok(Vec::new());
        }
        let set = unify(&boxes)?;
        debug!(
            array = array.id(),
            boxes = boxes.len(),
            regions = set.len(),
            "unified annotations"
        );
        set.iter().map(|region| DataView::new(array, region)).collect()
    }

    /// Like [`Self::intersection`], on the array `reference` names.
    pub fn intersection_by_ref<'a, T, S: RegionSource>(
        &self,
        arrays: &'a [DataArray<T>],
        reference: &ArrayRef,
        sources: &[S],
    ) -> Result<Option<DataView<'a, T>>, RegionError> {
        let array = resolve_array(arrays, sources, reference)?;
        self.intersection(array, sources)
    }

    /// Like [`Self::union`], on the array `reference` names.
    pub fn union_by_ref<'a, T, S: RegionSource>(
        &self,
        arrays: &'a [DataArray<T>],
        reference: &ArrayRef,
        sources: &[S],
    ) -> Result<Vec<DataView<'a, T>>, RegionError> {
        let array = resolve_array(arrays, sources, reference)?;
        self.union(array, sources)
    }

    /// Clips boxes to the array extent when configured.
    ///
    /// Boxes entirely outside the array are dropped. With `all_or_nothing`
    /// a single dropped box yields `None`, since the intersection is then
    /// empty inside the array.
    fn clip<T>(
        &self,
        array: &DataArray<T>,
        boxes: Vec<Hyperbox>,
        all_or_nothing: bool,
    ) -> Result<Option<Vec<Hyperbox>>, RegionError> {
        if !self.config.clip_to_array {
            return Ok(Some(boxes));
        }
        if let Some(b) = boxes.iter().find(|b| b.dim() != array.ndim()) {
            return Err(RegionError::IncompatibleDimensions {
                source_name: array.name().to_string(),
                expected: array.ndim(),
                found: b.dim(),
            });
        }
        let Some(extent) = array.extent() else {
            return Ok(None);
        };

        let mut clipped = Vec::with_capacity(boxes.len());
        for b in &boxes {
            match b.intersect_bounds(&extent)? {
                Some(inside) => clipped.push(inside),
                None if all_or_nothing => return Ok(None),
                None => {}
            }
        }
        Ok(Some(clipped))
    }
}

/// Intersects `sources` on `array` with the default configuration.
pub fn intersection<'a, T, S: RegionSource>(
    array: &'a DataArray<T>,
    sources: &[S],
) -> Result<Option<DataView<'a, T>>, RegionError> {
    RegionSelector::default().intersection(array, sources)
}

/// Unifies `sources` on `array` with the default configuration.
pub fn union<'a, T, S: RegionSource>(
    array: &'a DataArray<T>,
    sources: &[S],
) -> Result<Vec<DataView<'a, T>>, RegionError> {
    RegionSelector::default().union(array, sources)
}
