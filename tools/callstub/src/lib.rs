//! Recording stubs for test suites.
//!
//! A stub is a callable test double. It records the arguments of every call,
//! then replays the next configured result: a value, an error, a resolved
//! promise or a rejected one. Once its behaviors run out, a call fails with
//! [`StubError::Exhausted`].
//!
//! ```
//! use callstub::{stub, CallHistory, Producer, StubError};
//!
//! let fetch: callstub::Stub<&str, &str, String> =
//!     stub(Producer(|| vec![Ok("a"), Ok("b")]));
//!
//! assert_eq!(fetch.call("first"), Ok("a"));
//! assert_eq!(fetch.call("second"), Ok("b"));
//! assert_eq!(fetch.call("third"), Err(StubError::Exhausted));
//! assert_eq!(fetch.calls(), vec!["first", "second", "third"]);
//! ```

pub mod async_stub;
pub mod calls;
pub mod config;
pub mod deferred;
pub mod errors;
pub mod factory;
pub mod logging;
pub mod promise;
mod sequence;
pub mod sync_stub;
pub mod types;

pub use async_stub::{AsyncStub, StubFuture};
pub use calls::{CallHistory, CallLog};
pub use config::{load_config, load_fixture, Fixture, StubConfig};
pub use deferred::{Behavior, DeferredStub, Reply};
pub use errors::{CallstubError, StubError, EXHAUSTED_MESSAGE};
pub use factory::{stub, AsyncProducer, Producer, StubSource, Values};
pub use promise::Promise;
pub use sync_stub::Stub;
pub use types::{Step, StubKind};
