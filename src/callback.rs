//! Dynamically invocable callback handles.
//!
//! A [`Callback`] captures a caller-owned closure once at construction and
//! invokes it with a runtime-determined argument list. Construction performs
//! no validation; an arity problem surfaces on first invocation, not at
//! registration.

use crate::error::{Result, SplatError};
use crate::value::{FromValue, Value};
use std::fmt;
use std::sync::Arc;

/// Number of positional arguments a callback accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// Any number of arguments.
    Variadic,
}

impl Arity {
    /// Check whether an argument count satisfies this arity.
    #[must_use]
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Self::Exact(n) => *n == count,
            Self::Variadic => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{}", n),
            Self::Variadic => write!(f, "any"),
        }
    }
}

type CallbackFn = dyn Fn(&[Value]) -> Result<()> + Send + Sync;

/// An opaque, caller-owned handle to invocable logic.
///
/// The handle is cheap to clone; clones share the captured closure. The
/// callback may close over external mutable state, which is the callback
/// author's concern, not this crate's.
#[derive(Clone)]
pub struct Callback {
    arity: Arity,
    f: Arc<CallbackFn>,
}

impl Callback {
    /// Wrap a closure over the raw argument slice with a declared arity.
    ///
    /// The arity is not checked here; it is enforced on each [`call`].
    ///
    /// [`call`]: Callback::call
    pub fn new<F>(arity: Arity, f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            arity,
            f: Arc::new(f),
        }
    }

    /// Wrap a closure that accepts any number of arguments.
    pub fn variadic<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<()> + Send + Sync + 'static,
    {
        Self::new(Arity::Variadic, f)
    }

    /// The declared arity of this callback.
    #[must_use]
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Invoke the callback with `args` as its positional arguments.
    ///
    /// # Errors
    /// Returns `ArityMismatch` without running the callback body when the
    /// declared arity does not accept `args.len()`. Any error the body
    /// returns propagates unchanged.
    pub fn call(&self, args: &[Value]) -> Result<()> {
        if let Arity::Exact(expected) = self.arity {
            if expected != args.len() {
                return Err(SplatError::ArityMismatch {
                    expected,
                    actual: args.len(),
                });
            }
        }
        (self.f)(args)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Convert the element at `index` to the parameter type `T`.
///
/// Callers have already checked the argument count against the declared
/// arity, so the index is in bounds.
fn convert<T: FromValue>(args: &[Value], index: usize) -> Result<T> {
    let value = &args[index];
    T::from_value(value).ok_or_else(|| SplatError::ArgumentType {
        index,
        expected: T::expected(),
        actual: value.type_name(),
    })
}

/// Generates a typed constructor for one fixed arity.
macro_rules! typed_constructor {
    ($(#[$doc:meta])* $name:ident, $count:expr $(, $param:ident : $index:tt)*) => {
        $(#[$doc])*
        ///
        /// The declared arity is checked on each call, and each element is
        /// converted to its parameter type before the body runs. A failed
        /// conversion surfaces as an `ArgumentType` error naming the
        /// offending position.
        pub fn $name<$($param,)* F>(f: F) -> Self
        where
            $($param: FromValue,)*
            F: Fn($($param),*) -> Result<()> + Send + Sync + 'static,
        {
            // _args: unused at arity zero
            Self::new(Arity::Exact($count), move |_args: &[Value]| {
                f($(convert::<$param>(_args, $index)?),*)
            })
        }
    };
}

impl Callback {
    typed_constructor!(
        /// Wrap a zero-parameter closure.
        of0, 0
    );
    typed_constructor!(
        /// Wrap a one-parameter typed closure.
        of1, 1, T0: 0
    );
    typed_constructor!(
        /// Wrap a two-parameter typed closure.
        of2, 2, T0: 0, T1: 1
    );
    typed_constructor!(
        /// Wrap a three-parameter typed closure.
        of3, 3, T0: 0, T1: 1, T2: 2
    );
    typed_constructor!(
        /// Wrap a four-parameter typed closure.
        of4, 4, T0: 0, T1: 1, T2: 2, T3: 3
    );
    typed_constructor!(
        /// Wrap a five-parameter typed closure.
        of5, 5, T0: 0, T1: 1, T2: 2, T3: 3, T4: 4
    );
    typed_constructor!(
        /// Wrap a six-parameter typed closure.
        of6, 6, T0: 0, T1: 1, T2: 2, T3: 3, T4: 4, T5: 5
    );
    typed_constructor!(
        /// Wrap a seven-parameter typed closure.
        of7, 7, T0: 0, T1: 1, T2: 2, T3: 3, T4: 4, T5: 5, T6: 6
    );
    typed_constructor!(
        /// Wrap an eight-parameter typed closure.
        of8, 8, T0: 0, T1: 1, T2: 2, T3: 3, T4: 4, T5: 5, T6: 6, T7: 7
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[test]
    fn arity_accepts() {
        assert!(Arity::Exact(2).accepts(2));
        assert!(!Arity::Exact(2).accepts(3));
        assert!(Arity::Variadic.accepts(0));
        assert!(Arity::Variadic.accepts(7));
    }

    #[test]
    fn construction_never_validates() {
        // A callback that can never be satisfied still constructs fine;
        // the failure is deferred to the first call.
        let cb = Callback::new(Arity::Exact(99), |_| Ok(()));
        assert_eq!(cb.arity(), Arity::Exact(99));

        let err = cb.call(&[]).unwrap_err();
        assert_eq!(
            err,
            SplatError::ArityMismatch {
                expected: 99,
                actual: 0
            }
        );
    }

    #[test]
    fn mismatch_skips_the_body() {
        static RAN: AtomicBool = AtomicBool::new(false);
        let cb = Callback::of2(|_: i64, _: i64| {
            RAN.store(true, Ordering::SeqCst);
            Ok(())
        });

        let err = cb
            .call(&[Value::int(1), Value::int(2), Value::int(3)])
            .unwrap_err();
        assert_eq!(
            err,
            SplatError::ArityMismatch {
                expected: 2,
                actual: 3
            }
        );
        assert!(!RAN.load(Ordering::SeqCst));
    }

    #[test]
    fn variadic_accepts_any_count() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let cb = Callback::variadic(move |args| {
            seen.store(args.len(), Ordering::SeqCst);
            Ok(())
        });

        cb.call(&[]).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 0);

        cb.call(&[Value::int(1), Value::int(2)]).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn typed_arguments_convert_in_order() {
        let seen = Arc::new(parking_lot::Mutex::new(None));
        let out = seen.clone();
        let cb = Callback::of3(move |id: i64, name: String, active: bool| {
            *out.lock() = Some((id, name, active));
            Ok(())
        });

        cb.call(&[Value::int(42), Value::string("amelia"), Value::bool(true)])
            .unwrap();
        assert_eq!(
            seen.lock().take(),
            Some((42, "amelia".to_string(), true))
        );
    }

    #[test]
    fn conversion_failure_names_the_position() {
        let cb = Callback::of2(|_: i64, _: bool| Ok(()));
        let err = cb
            .call(&[Value::int(1), Value::string("not a bool")])
            .unwrap_err();
        assert_eq!(
            err,
            SplatError::ArgumentType {
                index: 1,
                expected: "boolean",
                actual: "string"
            }
        );
    }

    #[test]
    fn zero_parameter_callback() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let cb = Callback::of0(|| {
            CALLS.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        cb.call(&[]).unwrap();
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn body_errors_propagate_unchanged() {
        let cb = Callback::variadic(|_| {
            Err(SplatError::Callback {
                cause: "downstream refused".to_string(),
            })
        });
        let err = cb.call(&[Value::null()]).unwrap_err();
        assert_eq!(err.code(), "E201");
    }

    #[test]
    fn clones_share_the_closure() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let cb = Callback::of0(move || {
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
        let cb2 = cb.clone();

        cb.call(&[]).unwrap();
        cb2.call(&[]).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
