use futures::future::{self, Ready};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// An already-settled future, resolving to `Ok` or rejecting with `Err`.
///
/// Stubs hand promises back as plain values; nothing is raised until the
/// caller awaits one.
#[derive(Debug)]
#[must_use = "a rejected promise only surfaces its error when awaited"]
pub struct Promise<T, E> {
    settled: Ready<Result<T, E>>,
}

impl<T, E> Promise<T, E> {
    pub fn resolved(value: T) -> Self {
        Self {
            settled: future::ready(Ok(value)),
        }
    }

    pub fn rejected(reason: E) -> Self {
        Self {
            settled: future::ready(Err(reason)),
        }
    }

    /// Unwraps the settled result without polling.
    pub fn into_result(self) -> Result<T, E> {
        self.settled.into_inner()
    }
}

impl<T, E> From<Result<T, E>> for Promise<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Self {
            settled: future::ready(result),
        }
    }
}

impl<T, E> Future for Promise<T, E> {
    type Output = Result<T, E>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.settled).poll(cx)
    }
}
