//! Explicit command handling around a point set and its hull.
//!
//! A [`Session`] owns the current point set together with the hull computed
//! from it. Every regeneration replaces both at once, so a hull never
//! outlives the points its faces index into.

use tracing::debug;

use crate::error::{CommandError, Result};
use crate::generators::{Generator, GeneratorParams};
use crate::math::Point3;
use crate::operations::hull::{BruteForceHull, HullParams};
use crate::topology::Hull;

/// A user command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Replace the point set with a fresh one from a generator and recompute.
    Regenerate(Generator),
    /// Stop processing commands.
    Quit,
}

impl Command {
    /// Maps a key to its command.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Unbound`] for keys with no command.
    pub fn from_key(key: char) -> std::result::Result<Self, CommandError> {
        let generator = match key {
            'i' => Generator::Random,
            'j' => Generator::Pyramid,
            'k' => Generator::Cross,
            'm' => Generator::Diamond,
            'n' => Generator::Spring,
            'p' => Generator::SphereOfSpheres,
            's' => Generator::VerticalLines,
            't' => Generator::Heart,
            'w' => Generator::Droplet,
            'h' => Generator::House,
            'q' => return Ok(Command::Quit),
            other => return Err(CommandError::Unbound(other)),
        };
        Ok(Command::Regenerate(generator))
    }
}

/// Whether command processing should continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading commands.
    Continue,
    /// Stop.
    Quit,
}

/// A point set, its hull, and the parameters used to produce them.
#[derive(Debug, Clone)]
pub struct Session {
    generator: Generator,
    params: GeneratorParams,
    hull_params: HullParams,
    points: Vec<Point3>,
    hull: Hull,
}

impl Session {
    /// Generates an initial point set and computes its hull.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator rejects `params`.
    pub fn new(
        generator: Generator,
        params: GeneratorParams,
        hull_params: HullParams,
    ) -> Result<Self> {
        let points = generator.generate(&params)?;
        let hull = BruteForceHull::new().with_params(hull_params).execute(&points);
        Ok(Self {
            generator,
            params,
            hull_params,
            points,
            hull,
        })
    }

    /// Applies a command.
    ///
    /// Regeneration advances the seed first, so repeating a command yields a
    /// different random point set. On error the session is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator rejects the session parameters.
    pub fn apply(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Quit => Ok(Flow::Quit),
            Command::Regenerate(generator) => {
                let params = self.params.with_seed(self.params.seed.wrapping_add(1));
                let points = generator.generate(&params)?;
                let hull = BruteForceHull::new()
                    .with_params(self.hull_params)
                    .execute(&points);
                debug!(
                    generator = generator.name(),
                    seed = params.seed,
                    faces = hull.len(),
                    "Regenerated"
                );
                self.generator = generator;
                self.params = params;
                self.points = points;
                self.hull = hull;
                Ok(Flow::Continue)
            }
        }
    }

    /// Returns the generator that produced the current point set.
    #[must_use]
    pub fn generator(&self) -> Generator {
        self.generator
    }

    /// Returns the current generator parameters.
    #[must_use]
    pub fn params(&self) -> &GeneratorParams {
        &self.params
    }

    /// Returns the current point set.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the hull of the current point set.
    #[must_use]
    pub fn hull(&self) -> &Hull {
        &self.hull
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GeneratorError, HullError};
    use crate::operations::query::verify_hull;

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(
            Command::from_key('i').unwrap(),
            Command::Regenerate(Generator::Random)
        );
        assert_eq!(
            Command::from_key('p').unwrap(),
            Command::Regenerate(Generator::SphereOfSpheres)
        );
        assert_eq!(Command::from_key('q').unwrap(), Command::Quit);
    }

    #[test]
    fn every_generator_has_a_key() {
        let bound: Vec<Generator> = "ijkmnpstwh"
            .chars()
            .filter_map(|k| match Command::from_key(k) {
                Ok(Command::Regenerate(g)) => Some(g),
                _ => None,
            })
            .collect();
        for g in Generator::ALL {
            assert!(bound.contains(&g), "{g} has no key");
        }
    }

    #[test]
    fn camera_keys_are_unbound() {
        for key in ['x', 'X', 'b', 'f', 'c'] {
            assert!(matches!(
                Command::from_key(key),
                Err(CommandError::Unbound(k)) if k == key
            ));
        }
    }

    #[test]
    fn new_session_computes_hull() {
        let session = Session::new(
            Generator::Random,
            GeneratorParams::with_count(8),
            HullParams::default(),
        )
        .unwrap();
        assert_eq!(session.points().len(), 8);
        assert!(!session.hull().is_empty());
        assert_eq!(verify_hull(session.points(), session.hull()), Ok(()));
    }

    #[test]
    fn regenerate_replaces_points_and_hull() {
        let mut session = Session::new(
            Generator::Random,
            GeneratorParams::with_count(8),
            HullParams::default(),
        )
        .unwrap();
        let before = session.points().to_vec();

        let flow = session.apply(Command::Regenerate(Generator::Random)).unwrap();
        assert_eq!(flow, Flow::Continue);
        assert_ne!(session.points(), before.as_slice());
        assert_eq!(session.params().seed, 2);
        assert_eq!(verify_hull(session.points(), session.hull()), Ok(()));

        session.apply(Command::Regenerate(Generator::Diamond)).unwrap();
        assert_eq!(session.generator(), Generator::Diamond);
        assert_eq!(session.points().len(), 8);
        // Octahedron: the centre copies are interior.
        assert_eq!(session.hull().index_set().len(), 8);
    }

    #[test]
    fn quit_leaves_state_alone() {
        let mut session = Session::new(
            Generator::House,
            GeneratorParams::with_count(1),
            HullParams::default(),
        )
        .unwrap();
        let hull = session.hull().clone();
        assert_eq!(session.apply(Command::Quit).unwrap(), Flow::Quit);
        assert_eq!(session.hull(), &hull);
    }

    #[test]
    fn zero_count_session_fails() {
        let result = Session::new(
            Generator::Spring,
            GeneratorParams::with_count(0),
            HullParams::default(),
        );
        assert!(matches!(
            result,
            Err(HullError::Generator(GeneratorError::ZeroCount))
        ));
    }
}
