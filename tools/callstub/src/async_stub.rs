use crate::calls::{CallHistory, CallLog};
use crate::config::StubConfig;
use crate::errors::StubError;
use crate::logging::{call_recorded, structured_label};
use crate::sequence::StreamSequence;
use crate::types::StubKind;
use futures::future::BoxFuture;
use futures::stream::{Stream, StreamExt};
use futures::FutureExt;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type StubFuture<R, E> = BoxFuture<'static, Result<R, StubError<E>>>;

struct AsyncState<A, R, E> {
    calls: CallLog<A>,
    next_ticket: AtomicU64,
    sequence: Arc<Mutex<StreamSequence<R, E>>>,
}

/// Stub backed by an asynchronous producer. Every call returns a future.
///
/// The call is recorded inside [`AsyncStub::call`], before the future exists,
/// and call `n` settles with the producer's `n`-th item no matter which order
/// the returned futures are awaited in.
pub struct AsyncStub<A, R, E> {
    name: Option<Arc<str>>,
    state: Arc<AsyncState<A, R, E>>,
}

impl<A, R, E> AsyncStub<A, R, E>
where
    R: Send + 'static,
    E: Send + 'static,
{
    /// Invokes `producer` once, now, and replays its stream one item per call.
    pub fn from_producer<F, S>(producer: F) -> Self
    where
        F: FnOnce() -> S,
        S: Stream<Item = Result<R, E>> + Send + 'static,
    {
        Self::from_stream(producer())
    }

    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = Result<R, E>> + Send + 'static,
    {
        Self {
            name: None,
            state: Arc::new(AsyncState {
                calls: CallLog::default(),
                next_ticket: AtomicU64::new(0),
                sequence: Arc::new(Mutex::new(StreamSequence::new(stream.boxed()))),
            }),
        }
    }

    pub fn call(&self, args: A) -> StubFuture<R, E> {
        let index = self.state.calls.record(args);
        call_recorded(self.name(), StubKind::AsyncProducer, index);
        let ticket = self.state.next_ticket.fetch_add(1, Ordering::SeqCst);
        let sequence = Arc::clone(&self.state.sequence);
        async move {
            let mut sequence = sequence.lock().await;
            sequence.step_for(ticket).await.into_result()
        }
        .boxed()
    }
}

impl<A, R, E> AsyncStub<A, R, E> {
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(Arc::from(name.into()));
        self
    }

    pub fn with_config(self, config: &StubConfig) -> Self {
        match &config.name {
            Some(name) => self.named(name.as_str()),
            None => self,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl<A, R, E> CallHistory<A> for AsyncStub<A, R, E> {
    fn call_log(&self) -> &CallLog<A> {
        &self.state.calls
    }
}

impl<A, R, E> Clone for AsyncStub<A, R, E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<A, R, E> fmt::Debug for AsyncStub<A, R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncStub")
            .field("label", &structured_label(self.name(), StubKind::AsyncProducer))
            .field("call_count", &self.call_count())
            .finish()
    }
}
