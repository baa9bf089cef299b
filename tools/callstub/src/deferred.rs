use crate::calls::{lock, CallHistory, CallLog};
use crate::config::StubConfig;
use crate::errors::StubError;
use crate::logging::{behavior_queued, call_recorded, structured_label};
use crate::promise::Promise;
use crate::types::StubKind;
use std::collections::VecDeque;
use std::fmt;
use std::future::IntoFuture;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Behavior<R, E> {
    Return(R),
    Resolve(R),
    Reject(E),
    Throw(E),
}

impl<R, E> Behavior<R, E> {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Return(_) => "return",
            Self::Resolve(_) => "resolve",
            Self::Reject(_) => "reject",
            Self::Throw(_) => "throw",
        }
    }

    fn dispatch(self) -> Result<Reply<R, E>, StubError<E>> {
        match self {
            Self::Return(value) => Ok(Reply::Value(value)),
            Self::Resolve(value) => Ok(Reply::Promise(Promise::resolved(value))),
            Self::Reject(reason) => Ok(Reply::Promise(Promise::rejected(reason))),
            Self::Throw(error) => Err(StubError::Raised(error)),
        }
    }
}

/// What a deferred stub hands back from a successful call.
#[derive(Debug)]
pub enum Reply<R, E> {
    Value(R),
    Promise(Promise<R, E>),
}

impl<R, E> Reply<R, E> {
    pub fn is_promise(&self) -> bool {
        matches!(self, Self::Promise(_))
    }

    /// The synchronous value, or `None` when the reply is a promise.
    pub fn into_value(self) -> Option<R> {
        match self {
            Self::Value(value) => Some(value),
            Self::Promise(_) => None,
        }
    }

    pub fn into_promise(self) -> Option<Promise<R, E>> {
        match self {
            Self::Promise(promise) => Some(promise),
            Self::Value(_) => None,
        }
    }
}

/// Awaiting a plain value resolves to it immediately.
impl<R, E> IntoFuture for Reply<R, E> {
    type Output = Result<R, E>;
    type IntoFuture = Promise<R, E>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Self::Value(value) => Promise::resolved(value),
            Self::Promise(promise) => promise,
        }
    }
}

struct DeferredState<A, R, E> {
    calls: CallLog<A>,
    queue: Mutex<VecDeque<Behavior<R, E>>>,
}

/// Stub created without behavior; results are queued after construction.
///
/// Each call consumes the oldest queued behavior. Configuration and calls can
/// interleave freely.
pub struct DeferredStub<A, R, E> {
    name: Option<Arc<str>>,
    state: Arc<DeferredState<A, R, E>>,
}

impl<A, R, E> DeferredStub<A, R, E> {
    pub fn new() -> Self {
        Self {
            name: None,
            state: Arc::new(DeferredState {
                calls: CallLog::default(),
                queue: Mutex::new(VecDeque::new()),
            }),
        }
    }

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

    pub fn returns(&self, value: R) -> &Self {
        self.enqueue(Behavior::Return(value))
    }

    pub fn resolves(&self, value: R) -> &Self {
        self.enqueue(Behavior::Resolve(value))
    }

    pub fn rejects(&self, reason: E) -> &Self {
        self.enqueue(Behavior::Reject(reason))
    }

    pub fn throws(&self, error: E) -> &Self {
        self.enqueue(Behavior::Throw(error))
    }

    pub fn enqueue(&self, behavior: Behavior<R, E>) -> &Self {
        let tag = behavior.as_str();
        let pending = {
            let mut queue = lock(&self.state.queue);
            queue.push_back(behavior);
            queue.len()
        };
        behavior_queued(self.name(), tag, pending);
        self
    }

    /// Number of queued behaviors not yet consumed by a call.
    pub fn pending(&self) -> usize {
        lock(&self.state.queue).len()
    }

    pub fn call(&self, args: A) -> Result<Reply<R, E>, StubError<E>> {
        let index = self.state.calls.record(args);
        call_recorded(self.name(), StubKind::Deferred, index);
        let behavior = lock(&self.state.queue).pop_front();
        match behavior {
            Some(behavior) => behavior.dispatch(),
            None => Err(StubError::Exhausted),
        }
    }
}

impl<A, R, E> Default for DeferredStub<A, R, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, R, E> CallHistory<A> for DeferredStub<A, R, E> {
    fn call_log(&self) -> &CallLog<A> {
        &self.state.calls
    }
}

impl<A, R, E> Clone for DeferredStub<A, R, E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<A, R, E> fmt::Debug for DeferredStub<A, R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredStub")
            .field("label", &structured_label(self.name(), StubKind::Deferred))
            .field("call_count", &self.call_count())
            .field("pending", &self.pending())
            .finish()
    }
}
