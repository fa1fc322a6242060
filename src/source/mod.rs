//! Region sources: annotations that tag boxes inside arrays.

mod annotation;
mod error;
mod traits;

pub use annotation::{Annotation, MultiTag, Tag};
pub use error::RegionError;
pub use traits::RegionSource;
