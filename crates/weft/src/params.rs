//! Render-time parameter values.
//!
//! A [`ParameterBag`] is the name-to-scalar map a caller supplies alongside a
//! template when rendering. It is built once per render call, read many
//! times, and never mutated; together with the immutability of
//! [`Template`](crate::Template) this is what makes concurrent renders safe
//! without any locking.
//!
//! Values are restricted to the three scalar kinds the engine understands:
//! string, number (integer or float), and boolean. Richer shapes (null,
//! lists, nested objects) must be rejected or converted by the calling layer
//! before a bag is built; `ParamValue`'s untagged serde representation
//! enforces exactly that when a bag is deserialized from a wire format.
//!
//! # Example
//!
//! ```rust
//! use weft::ParameterBag;
//!
//! let params = ParameterBag::empty()
//!     .with("name", "World")
//!     .with("count", 3)
//!     .with("enabled", true);
//!
//! assert!(params.contains("name"));
//! assert_eq!(params.len(), 3);
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar value supplied for one named parameter.
///
/// Integers and floats are distinct variants so integral counts keep full
/// `i64` precision, but both report [`ValueKind::Number`]: the engine treats
/// "number" as one kind and truncates floats where an integer is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl ParamValue {
    /// The coarse scalar kind of this value, as reported in
    /// [`TypeMismatch`](crate::DomainError::TypeMismatch) diagnostics.
    pub fn kind(&self) -> ValueKind {
        match self {
            ParamValue::String(_) => ValueKind::String,
            ParamValue::Integer(_) | ParamValue::Float(_) => ValueKind::Number,
            ParamValue::Boolean(_) => ValueKind::Boolean,
        }
    }
}

/// Canonical display form: strings pass through verbatim, numbers and
/// booleans use their standard textual form.
impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::String(s) => f.write_str(s),
            ParamValue::Integer(n) => write!(f, "{}", n),
            ParamValue::Float(n) => write!(f, "{}", n),
            ParamValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Integer(value as i64)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Integer(value as i64)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Boolean(value)
    }
}

/// The scalar kinds a [`ParamValue`] can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueKind {
    String,
    Number,
    Boolean,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::String => f.write_str("string"),
            ValueKind::Number => f.write_str("number"),
            ValueKind::Boolean => f.write_str("boolean"),
        }
    }
}

/// An immutable name-to-scalar store consulted while rendering.
///
/// Built once per render call, via [`ParameterBag::empty`] plus
/// [`with`](ParameterBag::with) chaining or from an iterator of pairs. There
/// is no mutation API after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterBag {
    values: HashMap<String, ParamValue>,
}

impl ParameterBag {
    /// A bag with no parameters.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a bag extended with one named value.
    ///
    /// Inserting an existing name replaces its value; the last write wins,
    /// the same way a map literal would behave.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Looks up a value by parameter name.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Whether a parameter with this name exists, regardless of its value.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of parameters in the bag.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the bag holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<N, V> FromIterator<(N, V)> for ParameterBag
where
    N: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, ParamValue>> for ParameterBag {
    fn from(values: HashMap<String, ParamValue>) -> Self {
        Self { values }
    }
}
