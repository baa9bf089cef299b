//! Lazy behavior sources driven one step per stub call.
//!
//! Both sequences stop for good after their first non-`Yielded` step: a
//! producer that raised is finished, and a finished producer is never polled
//! again.

use crate::types::Step;
use futures::stream::{BoxStream, StreamExt};
use std::collections::HashMap;

pub(crate) type BoxIter<R, E> = Box<dyn Iterator<Item = Result<R, E>> + Send>;

pub(crate) struct IterSequence<R, E> {
    iter: BoxIter<R, E>,
    finished: bool,
}

impl<R, E> IterSequence<R, E> {
    pub(crate) fn new(iter: BoxIter<R, E>) -> Self {
        Self {
            iter,
            finished: false,
        }
    }

    pub(crate) fn next_step(&mut self) -> Step<R, E> {
        if self.finished {
            return Step::Done;
        }
        let step = Step::from_item(self.iter.next());
        self.finished = step.ends_sequence();
        step
    }
}

/// Stream-backed sequence whose steps are claimed by ticket.
///
/// Ticket `n` always receives the `n`-th step, whichever future reaches the
/// stream first. Steps pulled on behalf of other tickets wait in `settled`.
pub(crate) struct StreamSequence<R, E> {
    stream: BoxStream<'static, Result<R, E>>,
    pulled: u64,
    finished: bool,
    settled: HashMap<u64, Step<R, E>>,
}

impl<R, E> StreamSequence<R, E> {
    pub(crate) fn new(stream: BoxStream<'static, Result<R, E>>) -> Self {
        Self {
            stream,
            pulled: 0,
            finished: false,
            settled: HashMap::new(),
        }
    }

    pub(crate) async fn step_for(&mut self, ticket: u64) -> Step<R, E> {
        if let Some(step) = self.settled.remove(&ticket) {
            return step;
        }
        loop {
            let step = if self.finished {
                Step::Done
            } else {
                let step = Step::from_item(self.stream.next().await);
                self.finished = step.ends_sequence();
                step
            };
            let position = self.pulled;
            self.pulled += 1;
            if position == ticket {
                return step;
            }
            self.settled.insert(position, step);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{IterSequence, StreamSequence};
    use crate::types::Step;
    use futures::stream::{self, StreamExt};

    #[test]
    fn iter_sequence_stops_after_raised_step() {
        let items: Vec<Result<i32, &'static str>> = vec![Ok(1), Err("bad"), Ok(3)];
        let mut sequence = IterSequence::new(Box::new(items.into_iter()));
        assert_eq!(sequence.next_step(), Step::Yielded(1));
        assert_eq!(sequence.next_step(), Step::Raised("bad"));
        assert_eq!(sequence.next_step(), Step::Done);
        assert_eq!(sequence.next_step(), Step::Done);
    }

    #[tokio::test]
    async fn stream_sequence_serves_tickets_out_of_order() {
        let items: Vec<Result<&'static str, ()>> = vec![Ok("zero"), Ok("one"), Ok("two")];
        let mut sequence = StreamSequence::new(stream::iter(items).boxed());
        assert_eq!(sequence.step_for(2).await, Step::Yielded("two"));
        assert_eq!(sequence.step_for(0).await, Step::Yielded("zero"));
        assert_eq!(sequence.step_for(3).await, Step::Done);
        assert_eq!(sequence.step_for(1).await, Step::Yielded("one"));
    }
}
