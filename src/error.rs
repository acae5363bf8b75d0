//! Error types for splat.
//!
//! This module provides strongly-typed errors with stable codes. Nothing in
//! this crate retries or recovers locally; every error is surfaced verbatim
//! to the stream engine that invoked the adapter, which owns the policy
//! decision (log, retry, terminate the subscription).

use thiserror::Error;

/// The main error type for splat operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplatError {
    // =========================================================================
    // Payload Errors (E001-E099)
    // =========================================================================
    /// The tuple payload is null; there are no elements to deliver.
    ///
    /// Raised before any callback invocation.
    #[error("E001: tuple payload is null")]
    NullTuple,

    /// The tuple payload bytes could not be decoded.
    #[error("E002: failed to decode tuple payload: {cause}")]
    TupleDecode {
        /// Reason the payload could not be decoded.
        cause: String,
    },

    /// The decoded payload is not a sequence of elements.
    #[error("E003: tuple payload must be a sequence, got {found}")]
    PayloadShape {
        /// The kind of value that arrived instead.
        found: &'static str,
    },

    // =========================================================================
    // Signature Errors (E100-E199)
    // =========================================================================
    /// The callback's declared arity does not match the tuple's arity.
    ///
    /// Raised by the call mechanism before the callback body runs.
    #[error("E101: callback expects {expected} argument(s), tuple has {actual}")]
    ArityMismatch {
        /// Number of arguments the callback declared.
        expected: usize,
        /// Number of elements the tuple carried.
        actual: usize,
    },

    /// A tuple element could not convert to a typed callback parameter.
    #[error("E102: argument {index} expects {expected}, got {actual}")]
    ArgumentType {
        /// Zero-based position of the offending element.
        index: usize,
        /// The parameter type the callback declared.
        expected: &'static str,
        /// The kind of value the tuple carried at that position.
        actual: &'static str,
    },

    // =========================================================================
    // Callback Errors (E200-E299)
    // =========================================================================
    /// An error the callback itself chose to surface.
    ///
    /// The adapter forwards it untouched.
    #[error("E201: callback failed: {cause}")]
    Callback {
        /// The callback's own failure description.
        cause: String,
    },
}

impl SplatError {
    /// Get the error code (e.g., "E001").
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NullTuple => "E001",
            Self::TupleDecode { .. } => "E002",
            Self::PayloadShape { .. } => "E003",
            Self::ArityMismatch { .. } => "E101",
            Self::ArgumentType { .. } => "E102",
            Self::Callback { .. } => "E201",
        }
    }

    /// Check if this error describes a malformed or absent payload.
    #[must_use]
    pub fn is_payload_error(&self) -> bool {
        matches!(
            self,
            Self::NullTuple | Self::TupleDecode { .. } | Self::PayloadShape { .. }
        )
    }

    /// Check if this error describes a tuple/callback signature mismatch.
    #[must_use]
    pub fn is_signature_error(&self) -> bool {
        matches!(self, Self::ArityMismatch { .. } | Self::ArgumentType { .. })
    }
}

/// Result type alias using `SplatError`.
pub type Result<T> = std::result::Result<T, SplatError>;

/// Extension trait for surfacing callback-internal failures.
pub trait ResultExt<T> {
    /// Convert an arbitrary error into a callback failure.
    fn or_callback_err(self) -> Result<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    fn or_callback_err(self) -> Result<T> {
        self.map_err(|e| SplatError::Callback {
            cause: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_correct() {
        assert_eq!(SplatError::NullTuple.code(), "E001");

        let err = SplatError::ArityMismatch {
            expected: 2,
            actual: 3,
        };
        assert_eq!(err.code(), "E101");
    }

    #[test]
    fn error_display() {
        let err = SplatError::ArityMismatch {
            expected: 2,
            actual: 3,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("E101"));
        assert!(msg.contains('2'));
        assert!(msg.contains('3'));
    }

    #[test]
    fn payload_errors() {
        assert!(SplatError::NullTuple.is_payload_error());
        assert!(SplatError::PayloadShape { found: "string" }.is_payload_error());
        assert!(
            !SplatError::ArityMismatch {
                expected: 1,
                actual: 2
            }
            .is_payload_error()
        );
    }

    #[test]
    fn signature_errors() {
        assert!(
            SplatError::ArgumentType {
                index: 0,
                expected: "integer",
                actual: "string"
            }
            .is_signature_error()
        );
        assert!(!SplatError::NullTuple.is_signature_error());
    }

    #[test]
    fn or_callback_err_wraps_cause() {
        let io: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        let err = io.or_callback_err().unwrap_err();
        assert_eq!(err.code(), "E201");
        assert!(format!("{}", err).contains("disk full"));
    }
}
