//! Emitted tuple type.
//!
//! A tuple is the unit a stream delivers to its consumers: an ordered,
//! fixed-arity sequence of heterogeneous values. Arity and element order are
//! fixed at construction; there is no mutating API.

use crate::error::{Result, SplatError};
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// An immutable, ordered, fixed-arity sequence of heterogeneous values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tuple {
    elements: Vec<Value>,
}

impl Tuple {
    /// Create a tuple from its elements, in order.
    pub fn new(elements: Vec<Value>) -> Self {
        Self { elements }
    }

    /// Create the zero-arity tuple.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of elements in the tuple.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.elements.len()
    }

    /// Check if this is the zero-arity tuple.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the element at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    /// The elements in tuple order.
    pub fn elements(&self) -> &[Value] {
        &self.elements
    }

    /// Iterate over the elements in tuple order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    /// Consume the tuple, yielding its elements in order.
    pub fn into_elements(self) -> Vec<Value> {
        self.elements
    }

    /// Decode a tuple from a dynamic payload value.
    ///
    /// # Errors
    /// Returns `NullTuple` for a null payload and `PayloadShape` for any
    /// payload that is not a sequence.
    pub fn from_value(payload: &Value) -> Result<Self> {
        if payload.is_null() {
            return Err(SplatError::NullTuple);
        }
        match payload.as_sequence() {
            Some(items) => Ok(Self::new(items.iter().cloned().map(Value::from).collect())),
            None => Err(SplatError::PayloadShape {
                found: payload.type_name(),
            }),
        }
    }

    /// Decode a tuple from JSON payload bytes.
    ///
    /// Empty input decodes to a null payload and fails like one.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_value(&Value::from_bytes(bytes)?)
    }

    /// Serialize to JSON bytes (a JSON array of the elements).
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| SplatError::TupleDecode {
            cause: e.to_string(),
        })
    }
}

impl std::fmt::Display for Tuple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", elem)?;
        }
        write!(f, ")")
    }
}

impl From<Vec<Value>> for Tuple {
    fn from(elements: Vec<Value>) -> Self {
        Self::new(elements)
    }
}

impl FromIterator<Value> for Tuple {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Tuple {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tuple {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Build a [`Tuple`] from a list of element expressions.
///
/// Each element must convert into a [`Value`].
///
/// # Example
///
/// ```
/// use splat::{tuple, Tuple};
///
/// let t = tuple![42, "amelia", true];
/// assert_eq!(t.arity(), 3);
/// assert_eq!(tuple![], Tuple::empty());
/// ```
#[macro_export]
macro_rules! tuple {
    () => {
        $crate::Tuple::empty()
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::Tuple::new(vec![$($crate::Value::from($elem)),+])
    };
}
