use thiserror::Error;

/// Message carried by [`StubError::Exhausted`]. Consumers match on it verbatim.
pub const EXHAUSTED_MESSAGE: &str = "stub exhausted, call not expected";

/// Failure surfaced by a stub call.
///
/// `Raised` carries the producer's or the configured error unchanged and
/// displays as that error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StubError<E> {
    #[error("stub exhausted, call not expected")]
    Exhausted,
    #[error("{0}")]
    Raised(E),
}

impl<E> StubError<E> {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }

    pub fn raised(&self) -> Option<&E> {
        match self {
            Self::Raised(error) => Some(error),
            Self::Exhausted => None,
        }
    }

    pub fn into_raised(self) -> Option<E> {
        match self {
            Self::Raised(error) => Some(error),
            Self::Exhausted => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum CallstubError {
    #[error("io error: {0}")]
    Io(String),
    #[error("config parse error: {0}")]
    ConfigParse(String),
    #[error("fixture error: {0}")]
    Fixture(String),
}
