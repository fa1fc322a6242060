//! Geometric primitives: the [`Hyperbox`], its pairwise relations, and the
//! disjoint [`BoxSet`] produced by unions.

mod box_set;
mod error;
mod hyperbox;
mod relations;

pub use box_set::BoxSet;
pub use error::AlgebraError;
pub use hyperbox::Hyperbox;
