//! Procedural point-set generators.
//!
//! Each generator is a pure function of [`GeneratorParams`]: the same
//! parameters always produce the same point set. Randomized generators draw
//! from a [`StdRng`] seeded with [`GeneratorParams::seed`]. Floating-point
//! formulas are truncated toward zero to integer coordinates.

mod curves;
mod scatter;
mod solids;

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{GeneratorError, HullError, Result};
use crate::math::{Point3, WINDOW_SIZE};

/// Parameters shared by all generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorParams {
    /// Requested number of points. Some generators emit a fixed shape and
    /// only use this to size their filler. Default: 20
    pub count: usize,

    /// Extent of the coordinate window along each axis. Default: [`WINDOW_SIZE`]
    pub window_size: i32,

    /// Seed for randomized generators. Default: 1
    pub seed: u64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            count: 20,
            window_size: WINDOW_SIZE,
            seed: 1,
        }
    }
}

impl GeneratorParams {
    /// Create params for a given point count.
    #[must_use]
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Set the window size.
    #[must_use]
    pub const fn with_window_size(mut self, window_size: i32) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the random seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(GeneratorError::ZeroCount.into());
        }
        if self.window_size <= 0 {
            return Err(GeneratorError::InvalidWindow(self.window_size).into());
        }
        Ok(())
    }

    fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}

/// A named point-set generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    /// Uniform random points in the central 70% of the window.
    Random,
    /// Two perpendicular random planar slabs.
    Cross,
    /// Square pyramid corners plus random points inside.
    Pyramid,
    /// Octahedron with every extra point at its centre.
    Diamond,
    /// Points on a helix.
    Spring,
    /// Heart curve outline with random depth.
    Heart,
    /// Teardrop outline with random depth.
    Droplet,
    /// Random vertical lines of five points each.
    VerticalLines,
    /// Fixed ten-point house outline.
    House,
    /// Nine sampled spheres around the window centre.
    SphereOfSpheres,
}

impl Generator {
    /// Every generator, in key-binding order.
    pub const ALL: [Generator; 10] = [
        Generator::Random,
        Generator::Pyramid,
        Generator::Cross,
        Generator::Diamond,
        Generator::Spring,
        Generator::SphereOfSpheres,
        Generator::VerticalLines,
        Generator::Heart,
        Generator::Droplet,
        Generator::House,
    ];

    /// Returns the canonical kebab-case name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Generator::Random => "random",
            Generator::Cross => "cross",
            Generator::Pyramid => "pyramid",
            Generator::Diamond => "diamond",
            Generator::Spring => "spring",
            Generator::Heart => "heart",
            Generator::Droplet => "droplet",
            Generator::VerticalLines => "vertical-lines",
            Generator::House => "house",
            Generator::SphereOfSpheres => "sphere-of-spheres",
        }
    }

    /// Looks a generator up by name, accepting `_` in place of `-`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::UnknownGenerator`] if no generator has that name.
    pub fn from_name(name: &str) -> std::result::Result<Self, GeneratorError> {
        let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|g| g.name() == normalized)
            .ok_or_else(|| GeneratorError::UnknownGenerator(name.to_owned()))
    }

    /// Produces a fresh point set.
    ///
    /// # Errors
    ///
    /// Returns an error if `params.count` is zero or `params.window_size` is
    /// not positive.
    pub fn generate(self, params: &GeneratorParams) -> Result<Vec<Point3>> {
        params.validate()?;
        let mut rng = params.rng();
        let w = params.window_size;
        let n = params.count;

        let points = match self {
            Generator::Random => scatter::random(&mut rng, n, w),
            Generator::Cross => scatter::cross(&mut rng, n, w),
            Generator::Pyramid => scatter::pyramid(&mut rng, n, w),
            Generator::VerticalLines => scatter::vertical_lines(&mut rng, n, w),
            Generator::Spring => curves::spring(n, w),
            Generator::Heart => curves::heart(&mut rng, n),
            Generator::Droplet => curves::droplet(&mut rng, n),
            Generator::Diamond => solids::diamond(n),
            Generator::House => solids::house(w),
            Generator::SphereOfSpheres => solids::sphere_of_spheres(w),
        };

        debug!(
            generator = self.name(),
            requested = n,
            produced = points.len(),
            "Generated point set"
        );
        Ok(points)
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Generator {
    type Err = HullError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self::from_name(s)?)
    }
}

/// `w * t / 10` without intermediate overflow.
#[allow(clippy::cast_possible_truncation)]
fn tenths(w: i32, t: i64) -> i32 {
    (i64::from(w) * t / 10) as i32
}

/// Uniform integer in `[base, base + span)`; an empty span yields `base`.
fn jitter(rng: &mut StdRng, base: i32, span: i32) -> i32 {
    if span <= 0 {
        base
    } else {
        base.saturating_add(rng.gen_range(0..span))
    }
}
