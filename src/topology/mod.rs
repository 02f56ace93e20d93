pub mod face;
pub mod hull;

pub use face::Face;
pub use hull::Hull;
