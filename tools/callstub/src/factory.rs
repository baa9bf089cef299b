//! Construction entry point.
//!
//! [`stub`] picks the stub kind from the type of its source, once, at
//! construction:
//!
//! | source | stub |
//! |---|---|
//! | [`Producer`] of an iterator | [`Stub`] |
//! | [`AsyncProducer`] of a stream | [`AsyncStub`] |
//! | [`Values`] | [`Stub`] over a fixed list |
//! | `()` | [`DeferredStub`] |

use crate::async_stub::AsyncStub;
use crate::deferred::DeferredStub;
use crate::sync_stub::Stub;
use futures::stream::Stream;

pub trait StubSource<A, R, E> {
    type Stub;

    fn into_stub(self) -> Self::Stub;
}

/// Zero-argument closure returning a synchronous sequence of results.
pub struct Producer<F>(pub F);

/// Zero-argument closure returning a stream of results.
pub struct AsyncProducer<F>(pub F);

/// Fixed list replayed in order.
pub struct Values<R>(pub Vec<R>);

impl<A, R, E, F, I> StubSource<A, R, E> for Producer<F>
where
    F: FnOnce() -> I,
    I: IntoIterator<Item = Result<R, E>>,
    I::IntoIter: Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
{
    type Stub = Stub<A, R, E>;

    fn into_stub(self) -> Self::Stub {
        Stub::from_producer(self.0)
    }
}

impl<A, R, E, F, S> StubSource<A, R, E> for AsyncProducer<F>
where
    F: FnOnce() -> S,
    S: Stream<Item = Result<R, E>> + Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
{
    type Stub = AsyncStub<A, R, E>;

    fn into_stub(self) -> Self::Stub {
        AsyncStub::from_producer(self.0)
    }
}

impl<A, R, E> StubSource<A, R, E> for Values<R>
where
    R: Send + 'static,
    E: Send + 'static,
{
    type Stub = Stub<A, R, E>;

    fn into_stub(self) -> Self::Stub {
        Stub::from_values(self.0)
    }
}

impl<A, R, E> StubSource<A, R, E> for () {
    type Stub = DeferredStub<A, R, E>;

    fn into_stub(self) -> Self::Stub {
        DeferredStub::new()
    }
}

pub fn stub<A, R, E, S>(source: S) -> S::Stub
where
    S: StubSource<A, R, E>,
{
    source.into_stub()
}

/// `stub!()` builds a deferred stub; `stub![a, b, c]` a fixed-list stub.
#[macro_export]
macro_rules! stub {
    () => {
        $crate::DeferredStub::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Stub::from_values(::std::vec![$($value),+])
    };
}

#[cfg(test)]
mod tests {
    use super::{stub, AsyncProducer, Producer, Values};
    use crate::async_stub::AsyncStub;
    use crate::calls::CallHistory;
    use crate::deferred::DeferredStub;
    use crate::errors::StubError;
    use crate::sync_stub::Stub;
    use futures::stream;

    #[test]
    fn producer_source_builds_sync_stub() {
        let fixture: Stub<(), char, ()> = stub(Producer(|| vec![Ok('a')]));
        assert_eq!(fixture.call(()), Ok('a'));
    }

    #[tokio::test]
    async fn async_producer_source_builds_async_stub() {
        let fixture: AsyncStub<(), char, ()> =
            stub(AsyncProducer(|| stream::iter(vec![Ok('a')])));
        assert_eq!(fixture.call(()).await, Ok('a'));
    }

    #[test]
    fn empty_values_exhaust_on_first_call() {
        let fixture: Stub<(), char, ()> = stub(Values(Vec::new()));
        assert_eq!(fixture.call(()), Err(StubError::Exhausted));
        assert!(fixture.called());
    }

    #[test]
    fn unit_source_builds_deferred_stub() {
        let fixture: DeferredStub<(), char, ()> = stub(());
        assert_eq!(fixture.pending(), 0);
    }

    #[test]
    fn macro_covers_both_shapes() {
        let values: Stub<(), i32, ()> = crate::stub![1, 2,];
        assert_eq!(values.call(()), Ok(1));
        let deferred: DeferredStub<(), i32, ()> = crate::stub!();
        assert!(!deferred.called());
    }
}
