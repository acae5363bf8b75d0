//! Tuple-to-callback consumer adapter.
//!
//! Invokes a [`Callback`] using the contents of an incoming [`Tuple`] as the
//! arguments: the adapter unpacks the tuple into its ordered elements and
//! forwards them as individual positional arguments. It holds no state
//! besides the callback handle, performs no retry or recovery, and surfaces
//! every failure verbatim to whatever invoked it.

use crate::callback::Callback;
use crate::consumer::Consumer;
use crate::error::Result;
use crate::tuple::Tuple;
use crate::value::Value;

/// Adapts a dynamically invocable callback to the [`Consumer`] contract.
///
/// Created once per registration (for example, when attaching a stream
/// listener) and safe for concurrent invocation provided the wrapped
/// callback is reentrant-safe.
///
/// # Example
///
/// ```
/// use splat::{tuple, Callback, CallbackTupleConsumer, Consumer};
///
/// let adapter = CallbackTupleConsumer::new(Callback::of2(|id: i64, name: String| {
///     println!("user {id} is {name}");
///     Ok(())
/// }));
///
/// adapter.accept(&tuple![42, "amelia"])?;
/// # Ok::<(), splat::SplatError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CallbackTupleConsumer {
    callback: Callback,
}

impl CallbackTupleConsumer {
    /// Store the callback reference.
    ///
    /// No validation happens here; a signature problem surfaces on the
    /// first delivery, not at registration.
    pub fn new(callback: Callback) -> Self {
        Self { callback }
    }

    /// The wrapped callback handle.
    #[must_use]
    pub fn callback(&self) -> &Callback {
        &self.callback
    }

    /// Deliver a dynamic payload value.
    ///
    /// # Errors
    /// A null payload fails with `NullTuple` and a non-sequence payload with
    /// `PayloadShape`, both before any callback invocation.
    pub fn accept_value(&self, payload: &Value) -> Result<()> {
        let tuple = Tuple::from_value(payload)?;
        self.accept(&tuple)
    }

    /// Deliver a JSON-encoded payload.
    ///
    /// # Errors
    /// Undecodable bytes fail with `TupleDecode` before any callback
    /// invocation; decoded payloads follow the [`accept_value`] rules.
    ///
    /// [`accept_value`]: CallbackTupleConsumer::accept_value
    pub fn accept_bytes(&self, bytes: &[u8]) -> Result<()> {
        let tuple = Tuple::from_bytes(bytes)?;
        self.accept(&tuple)
    }
}

impl Consumer for CallbackTupleConsumer {
    fn accept(&self, tuple: &Tuple) -> Result<()> {
        tracing::trace!(
            arity = tuple.arity(),
            callback_arity = %self.callback.arity(),
            "delivering tuple to callback"
        );
        self.callback.call(tuple.elements())
    }
}
