//! Set operations over lists of boxes.

mod intersection;
mod union;
mod validate;


pub use intersection::intersect;
pub use union::unify;
pub use validate::validate_boxes;

#[cfg(debug_assertions)]
pub mod assertions;

#[cfg(not(debug_assertions))]
pub mod assertions {
    use crate::geometry::Hyperbox;

    pub fn is_disjoint(_boxes: &[Hyperbox]) -> bool {
        true
    }

    pub fn is_canonical(_boxes: &[Hyperbox]) -> bool {
        true
    }
}
