//! tagged_regions - set algebra over tagged regions of N-dimensional arrays.
//!
//! Annotations mark axis-aligned boxes inside a data array: a [`source::Tag`]
//! marks one position plus extent, a [`source::MultiTag`] a batch of them.
//! This crate intersects those boxes into a single common box or unifies them
//! into a disjoint cover, and exposes the result as read-only views over the
//! array's samples.
//!
//! The algebra itself lives in [`geometry`] and [`operations`] and works on
//! integer coordinates only; [`selection`] wires it to annotations and views.

pub mod config;
pub mod geometry;
pub mod operations;
pub mod selection;
pub mod source;
pub mod view;

pub use config::SelectionConfig;
pub use geometry::{AlgebraError, BoxSet, Hyperbox};
pub use operations::{intersect, unify, validate_boxes};
pub use selection::{intersection, union, ArrayRef, RegionSelector};
pub use source::{Annotation, MultiTag, RegionError, RegionSource, Tag};
pub use view::{DataArray, DataView};

/// Identifier type used for arrays and annotation references.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
