//! Consumer trait.
//!
//! The seam between this crate and the stream engine that drives it: a
//! consumer accepts one emitted tuple and produces no return value. The
//! engine's dispatch loop, scheduling, and error policy all live on the
//! other side of this trait.

use crate::error::Result;
use crate::tuple::Tuple;

/// Accept one emitted tuple, produce no return value.
///
/// Implementations must be safe to share across the engine's worker threads.
pub trait Consumer: Send + Sync {
    /// Deliver one tuple to this consumer.
    ///
    /// # Errors
    /// Whatever the consumer surfaces propagates unchanged to the engine.
    fn accept(&self, tuple: &Tuple) -> Result<()>;
}

impl<F> Consumer for F
where
    F: Fn(&Tuple) -> Result<()> + Send + Sync,
{
    fn accept(&self, tuple: &Tuple) -> Result<()> {
        self(tuple)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn closures_are_consumers() {
        static DELIVERIES: AtomicUsize = AtomicUsize::new(0);
        let consumer = |tuple: &Tuple| -> Result<()> {
            DELIVERIES.fetch_add(tuple.arity(), Ordering::SeqCst);
            Ok(())
        };

        consumer
            .accept(&Tuple::new(vec![Value::int(1), Value::int(2)]))
            .unwrap();
        assert_eq!(DELIVERIES.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn consumers_box_into_trait_objects() {
        let boxed: Box<dyn Consumer> = Box::new(|_: &Tuple| -> Result<()> { Ok(()) });
        boxed.accept(&Tuple::empty()).unwrap();
    }
}
