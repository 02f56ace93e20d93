mod bounding_box;
mod is_valid;

pub use bounding_box::{Aabb, BoundingBox};
pub use is_valid::{verify_hull, IsValid};
