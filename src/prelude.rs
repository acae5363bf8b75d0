//! Prelude for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! # Example
//!
//! ```
//! use splat::prelude::*;
//! ```

// Error handling
pub use crate::error::{Result, ResultExt, SplatError};

// Values and tuples
pub use crate::tuple::Tuple;
pub use crate::value::{FromValue, Value};

// Callbacks and consumers
pub use crate::adapter::CallbackTupleConsumer;
pub use crate::callback::{Arity, Callback};
pub use crate::consumer::Consumer;

// The tuple! construction macro
pub use crate::tuple;
