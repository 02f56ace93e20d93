mod brute_force;
mod params;

pub use brute_force::{compute_hull, BruteForceHull};
pub use params::HullParams;
