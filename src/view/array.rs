//! In-memory N-dimensional sample arrays.

use crate::geometry::Hyperbox;
use crate::source::RegionError;
use crate::Id;

/// Row-major N-dimensional array of samples that annotations refer to.
#[derive(Debug, Clone, PartialEq)]
pub struct DataArray<T> {
    id: Id,
    name: String,
    shape: Vec<usize>,
    data: Vec<T>,
}

impl<T> DataArray<T> {
    /// Creates an array with a freshly generated id.
    pub fn new(name: impl Into<String>, shape: Vec<usize>, data: Vec<T>) -> Result<Self, RegionError> {
        Self::with_id(crate::generate_id(), name, shape, data)
    }

    /// Creates an array with a caller-chosen id.
    ///
    /// Fails with [`RegionError::DataLengthMismatch`] unless `data` holds
    /// exactly one sample per cell of `shape`.
    pub fn with_id(
        id: impl Into<Id>,
        name: impl Into<String>,
        shape: Vec<usize>,
        data: Vec<T>,
    ) -> Result<Self, RegionError> {
        let expected = shape.iter().product::<usize>();
        if expected != data.len() {
            return Err(RegionError::DataLengthMismatch {
                expected,
                found: data.len(),
            });
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            shape,
            data,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Returns the sample at a multi-dimensional index.
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        self.offset(index).and_then(|offset| self.data.get(offset))
    }

    /// The box covering every cell, or `None` for scalar or empty arrays.
    pub fn extent(&self) -> Option<Hyperbox> {
        if self.shape.is_empty() || self.shape.contains(&0) {
            return None;
        }
        let start = vec![0; self.shape.len()];
        let end = self
            .shape
            .iter()
            .map(|&size| i64::try_from(size - 1).unwrap_or(i64::MAX))
            .collect();
        Hyperbox::new(start, end).ok()
    }

    fn offset(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut offset = 0usize;
        for (&i, &size) in index.iter().zip(&self.shape) {
            if i >= size {
                return None;
            }
            offset = offset * size + i;
        }
        Some(offset)
    }
}
