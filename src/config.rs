//! Configuration for region selection.

use crate::source::RegionError;

/// Controls how annotations are turned into views.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SelectionConfig {
    /// Upper bound on the number of boxes collected from annotations before
    /// the algebra runs. Union cost grows quadratically with this count.
    pub max_boxes: Option<usize>,
    /// Clip boxes to the array extent instead of rejecting coordinates that
    /// fall outside it. Boxes entirely outside the array are dropped.
    pub clip_to_array: bool,
}

impl SelectionConfig {
    pub fn with_max_boxes(mut self, limit: usize) -> Self {
        self.max_boxes = Some(limit);
        self
    }

    pub fn with_clipping(mut self, clip: bool) -> Self {
        self.clip_to_array = clip;
        self
    }

    /// Fails with [`RegionError::TooManyBoxes`] if `count` exceeds the limit.
    pub fn check_box_count(&self, count: usize) -> Result<(), RegionError> {
        match self.max_boxes {
            Some(limit) if count > limit => Err(RegionError::TooManyBoxes { count, limit }),
            _ => Ok(()),
        }
    }
}
