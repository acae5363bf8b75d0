//! Splat
//!
//! This crate adapts dynamically-shaped callbacks to the typed consumer
//! contract a reactive stream engine drives: when the stream emits an
//! ordered, fixed-arity tuple, the adapter unpacks the tuple's elements and
//! invokes the callback with them as individual positional arguments.
//!
//! # Key Components
//!
//! - **Value**: dynamic element type carried by emitted tuples
//! - **Tuple**: immutable, ordered, fixed-arity sequence of values
//! - **Callback**: opaque handle to invocable logic with a declared arity
//! - **Consumer**: the accept-one-tuple contract the stream engine drives
//! - **CallbackTupleConsumer**: the adapter tying the above together
//!
//! The adapter adds no algorithm, state machine, or concurrency control of
//! its own. Registration never validates; a signature problem surfaces on
//! the first delivery. Every failure propagates unchanged to the engine,
//! which owns the policy decision.
//!
//! # Example
//!
//! ```
//! use splat::prelude::*;
//!
//! let adapter = CallbackTupleConsumer::new(Callback::of2(|id: i64, name: String| {
//!     println!("user {id} is {name}");
//!     Ok(())
//! }));
//!
//! // The stream engine drives the Consumer contract:
//! adapter.accept(&tuple![42, "amelia"])?;
//!
//! // Mismatched shapes fail before the callback body runs:
//! assert!(adapter.accept(&tuple![42]).is_err());
//! # Ok::<(), SplatError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapter;
pub mod callback;
pub mod consumer;
pub mod error;
pub mod prelude;
pub mod tuple;
pub mod value;

// Re-export key types at crate root for convenience
pub use adapter::CallbackTupleConsumer;
pub use callback::{Arity, Callback};
pub use consumer::Consumer;
pub use error::{Result, ResultExt, SplatError};
pub use tuple::Tuple;
pub use value::{FromValue, Value};
