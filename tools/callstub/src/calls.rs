use std::sync::{Mutex, MutexGuard, PoisonError};

/// Append-only record of the arguments each call received.
#[derive(Debug)]
pub struct CallLog<A> {
    calls: Mutex<Vec<A>>,
}

impl<A> Default for CallLog<A> {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl<A> CallLog<A> {
    /// Appends `args` and returns the zero-based index of the call.
    pub(crate) fn record(&self, args: A) -> usize {
        let mut calls = lock(&self.calls);
        calls.push(args);
        calls.len() - 1
    }

    pub fn len(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn with<T>(&self, f: impl FnOnce(&[A]) -> T) -> T {
        f(lock(&self.calls).as_slice())
    }
}

impl<A: Clone> CallLog<A> {
    pub fn snapshot(&self) -> Vec<A> {
        lock(&self.calls).clone()
    }

    pub fn nth(&self, index: usize) -> Option<A> {
        lock(&self.calls).get(index).cloned()
    }

    pub fn last(&self) -> Option<A> {
        lock(&self.calls).last().cloned()
    }
}

/// Introspection shared by every stub kind. Reading never mutates the stub.
pub trait CallHistory<A> {
    fn call_log(&self) -> &CallLog<A>;

    fn calls(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.call_log().snapshot()
    }

    fn call_count(&self) -> usize {
        self.call_log().len()
    }

    fn called(&self) -> bool {
        !self.call_log().is_empty()
    }

    fn nth_call(&self, index: usize) -> Option<A>
    where
        A: Clone,
    {
        self.call_log().nth(index)
    }

    fn last_call(&self) -> Option<A>
    where
        A: Clone,
    {
        self.call_log().last()
    }

    /// Borrows the recorded arguments without cloning them.
    fn with_calls<T>(&self, f: impl FnOnce(&[A]) -> T) -> T
    where
        Self: Sized,
    {
        self.call_log().with(f)
    }
}

/// A panic while a stub lock was held must not hide the calls recorded so far.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
