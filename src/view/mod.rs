//! Materialising boxes as read-only views over array samples.

mod array;
mod data_view;

pub use array::DataArray;
pub use data_view::DataView;

use crate::geometry::{BoxSet, Hyperbox};
use crate::source::RegionError;

/// Returns the view of `array` selected by `region`.
pub fn materialize<'a, T>(
    array: &'a DataArray<T>,
    region: &Hyperbox,
) -> Result<DataView<'a, T>, RegionError> {
    DataView::new(array, region)
}

/// Returns one view per box of `set`, in set order.
pub fn materialize_set<'a, T>(
    array: &'a DataArray<T>,
    set: &BoxSet,
) -> Result<Vec<DataView<'a, T>>, RegionError> {
    set.iter().map(|region| DataView::new(array, region)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::unify;

    fn hb(start: &[i64], end: &[i64]) -> Hyperbox {
        Hyperbox::new(start.to_vec(), end.to_vec()).unwrap()
    }

    #[test]
    fn materialize_set_keeps_order() {
        let array = DataArray::new("line", vec![20], (0..20).collect::<Vec<i32>>()).unwrap();
        let set = unify(&[hb(&[10], &[12]), hb(&[0], &[1])]).unwrap();
        let views = materialize_set(&array, &set).unwrap();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].to_vec(), vec![0, 1]);
        assert_eq!(views[1].to_vec(), vec![10, 11, 12]);
    }

    #[test]
    fn materialize_set_fails_atomically() {
        let array = DataArray::new("line", vec![5], vec![0u8; 5]).unwrap();
        let set = unify(&[hb(&[0], &[1]), hb(&[3], &[7])]).unwrap();
        assert!(materialize_set(&array, &set).is_err());
    }

    #[test]
    fn materialize_single_box() {
        let array = DataArray::new("line", vec![5], vec![1, 2, 3, 4, 5]).unwrap();
        let view = materialize(&array, &hb(&[1], &[3])).unwrap();
        assert_eq!(view.array_id(), array.id());
        assert_eq!(view.to_vec(), vec![2, 3, 4]);
    }
}
