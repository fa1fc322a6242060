//! Read-only windows over a [`DataArray`].

use std::ops::Range;

use super::array::DataArray;
use crate::geometry::Hyperbox;
use crate::source::RegionError;

/// Borrowed window over the samples of an array.
///
/// An inclusive box `[start, end]` maps to the half-open slice
/// `start..end + 1` on each axis.
#[derive(Debug, Clone)]
pub struct DataView<'a, T> {
    array: &'a DataArray<T>,
    ranges: Vec<Range<usize>>,
}

impl<'a, T> DataView<'a, T> {
    /// Creates the window of `array` selected by `region`.
    ///
    /// Fails with [`RegionError::IncompatibleDimensions`] if the box and the
    /// array differ in dimensionality, and with
    /// [`RegionError::RegionOutOfBounds`] if the box reaches outside the array.
    pub fn new(array: &'a DataArray<T>, region: &Hyperbox) -> Result<Self, RegionError> {
        if region.dim() != array.ndim() {
            return Err(RegionError::IncompatibleDimensions {
                source_name: array.name().to_string(),
                expected: array.ndim(),
                found: region.dim(),
            });
        }
        let ranges = region
            .start()
            .iter()
            .zip(region.end())
            .zip(array.shape())
            .enumerate()
            .map(|(axis, ((&start, &end), &size))| {
                let in_bounds = start >= 0 && usize::try_from(end).is_ok_and(|e| e < size);
                if !in_bounds {
                    return Err(RegionError::RegionOutOfBounds {
                        axis,
                        start,
                        end,
                        size,
                    });
                }
                // Both bounds are non-negative and below `size` here.
                Ok(start as usize..end as usize + 1)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { array, ranges })
    }

    pub fn array_id(&self) -> &str {
        self.array.id()
    }

    /// Half-open slice selected on each axis.
    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    pub fn shape(&self) -> Vec<usize> {
        self.ranges.iter().map(|r| r.len()).collect()
    }

    pub fn len(&self) -> usize {
        self.ranges.iter().map(|r| r.len()).product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the sample at an index relative to the window origin.
    pub fn get(&self, index: &[usize]) -> Option<&'a T> {
        if index.len() != self.ranges.len() {
            return None;
        }
        let mut absolute = Vec::with_capacity(index.len());
        for (&i, range) in index.iter().zip(&self.ranges) {
            let position = range.start.checked_add(i)?;
            if position >= range.end {
                return None;
            }
            absolute.push(position);
        }
        self.array.get(&absolute)
    }

    /// Iterates the window's samples in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + 'a {
        let array = self.array;
        RowMajor::new(self.ranges.clone()).filter_map(move |index| array.get(&index))
    }

    /// Copies the window's samples out in row-major order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

/// Multi-indices of a box of ranges, last axis fastest.
struct RowMajor {
    ranges: Vec<Range<usize>>,
    next: Option<Vec<usize>>,
}

impl RowMajor {
    fn new(ranges: Vec<Range<usize>>) -> Self {
        let next = if ranges.is_empty() || ranges.iter().any(|r| r.is_empty()) {
            None
        } else {
            Some(ranges.iter().map(|r| r.start).collect())
        };
        Self { ranges, next }
    }
}

impl Iterator for RowMajor {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;
        let mut following = current.clone();
        for axis in (0..following.len()).rev() {
            following[axis] += 1;
            if following[axis] < self.ranges[axis].end {
                self.next = Some(following);
                break;
            }
            following[axis] = self.ranges[axis].start;
        }
        Some(current)
    }
}
