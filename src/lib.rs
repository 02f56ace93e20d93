pub mod error;
pub mod export;
pub mod generators;
pub mod math;
pub mod operations;
pub mod session;
pub mod topology;

pub use error::{HullError, Result};
pub use generators::{Generator, GeneratorParams};
pub use math::{Point3, WINDOW_SIZE};
pub use operations::hull::{compute_hull, BruteForceHull, HullParams};
pub use session::{Command, Flow, Session};
pub use topology::{Face, Hull};
