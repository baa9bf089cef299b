use crate::calls::{lock, CallHistory, CallLog};
use crate::config::{Fixture, StubConfig};
use crate::errors::StubError;
use crate::logging::{call_recorded, structured_label};
use crate::sequence::IterSequence;
use crate::types::StubKind;
use std::fmt;
use std::sync::{Arc, Mutex};

struct StubState<A, R, E> {
    calls: CallLog<A>,
    sequence: Mutex<IterSequence<R, E>>,
}

/// Synchronous stub backed by a producer or a fixed list of values.
///
/// Clones are handles onto the same stub: they share the call log and the
/// sequence.
pub struct Stub<A, R, E> {
    name: Option<Arc<str>>,
    state: Arc<StubState<A, R, E>>,
}

impl<A, R, E> Stub<A, R, E>
where
    R: Send + 'static,
    E: Send + 'static,
{
    /// Invokes `producer` once, now, and replays its items one per call.
    pub fn from_producer<F, I>(producer: F) -> Self
    where
        F: FnOnce() -> I,
        I: IntoIterator<Item = Result<R, E>>,
        I::IntoIter: Send + 'static,
    {
        Self::from_sequence(IterSequence::new(Box::new(producer().into_iter())))
    }

    pub fn from_values(values: impl IntoIterator<Item = R>) -> Self {
        let values: Vec<R> = values.into_iter().collect();
        Self::from_sequence(IterSequence::new(Box::new(values.into_iter().map(Ok))))
    }

    pub fn from_fixture(fixture: Fixture<R>) -> Self {
        let Fixture { config, values } = fixture;
        Self::from_values(values).with_config(&config)
    }

    fn from_sequence(sequence: IterSequence<R, E>) -> Self {
        Self {
            name: None,
            state: Arc::new(StubState {
                calls: CallLog::default(),
                sequence: Mutex::new(sequence),
            }),
        }
    }
}

impl<A, R, E> Stub<A, R, E> {
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

    pub fn call(&self, args: A) -> Result<R, StubError<E>> {
        let index = self.state.calls.record(args);
        call_recorded(self.name(), StubKind::Producer, index);
        lock(&self.state.sequence).next_step().into_result()
    }
}

impl<A, R, E> CallHistory<A> for Stub<A, R, E> {
    fn call_log(&self) -> &CallLog<A> {
        &self.state.calls
    }
}

impl<A, R, E> Clone for Stub<A, R, E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<A, R, E> fmt::Debug for Stub<A, R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stub")
            .field("label", &structured_label(self.name(), StubKind::Producer))
            .field("call_count", &self.call_count())
            .finish()
    }
}
