use thiserror::Error;

/// Top-level error type for the hull3d crate.
#[derive(Debug, Error)]
pub enum HullError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors raised while building a point set.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("point count must be positive")]
    ZeroCount,

    #[error("unknown generator: {0}")]
    UnknownGenerator(String),

    #[error("window size {0} must be positive")]
    InvalidWindow(i32),
}

/// Errors raised when translating user input into commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("no command bound to key {0:?}")]
    Unbound(char),
}

/// Violations found when checking a hull against its point set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("face {face} refers to an index outside a point set of length {len}")]
    IndexOutOfBounds { face: usize, len: usize },

    #[error("face {face} repeats a point value")]
    DegenerateFace { face: usize },

    #[error("point {point} lies outward of face {face}")]
    OutwardPoint { face: usize, point: usize },
}

/// Convenience type alias for results using [`HullError`].
pub type Result<T> = std::result::Result<T, HullError>;
