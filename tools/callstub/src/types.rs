use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StubKind {
    Producer,
    AsyncProducer,
    Deferred,
}

impl StubKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Producer => "producer",
            Self::AsyncProducer => "async_producer",
            Self::Deferred => "deferred",
        }
    }
}

/// Outcome of advancing a behavior source by one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<R, E> {
    Yielded(R),
    Raised(E),
    Done,
}

impl<R, E> Step<R, E> {
    pub fn from_item(item: Option<Result<R, E>>) -> Self {
        match item {
            Some(Ok(value)) => Self::Yielded(value),
            Some(Err(error)) => Self::Raised(error),
            None => Self::Done,
        }
    }

    /// A raising step ends its sequence just like running out of values.
    pub fn ends_sequence(&self) -> bool {
        !matches!(self, Self::Yielded(_))
    }

    pub fn into_result(self) -> Result<R, crate::errors::StubError<E>> {
        match self {
            Self::Yielded(value) => Ok(value),
            Self::Raised(error) => Err(crate::errors::StubError::Raised(error)),
            Self::Done => Err(crate::errors::StubError::Exhausted),
        }
    }
}
