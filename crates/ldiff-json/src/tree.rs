//! Generic tree values compared by the structural differ.
//!
//! A [`Tree`] is an object, an array, or a scalar. Object members are kept in
//! a `BTreeMap`, so iteration (and therefore diff output) is in lexicographic
//! key order regardless of the order in the source document.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::{Input, JsonDiffError, JsonResult};

/// A decoded JSON-like value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Tree {
    Object(BTreeMap<String, Tree>),
    Array(Vec<Tree>),
    Scalar(Scalar),
}

/// A leaf value.
///
/// All numbers are held as `f64`, so `1` and `1.0` compare equal. NaN
/// compares equal to NaN so that every value equals itself.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::String(a), Self::String(b)) => a == b,
            _ => false,
        }
    }
}

/// The runtime kind of a [`Tree`], used for type-mismatch records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::Null => "null",
        })
    }
}

impl Tree {
    /// Decode a JSON payload.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice::<Value>(bytes).map(Self::from)
    }

    pub(crate) fn decode(bytes: &[u8], input: Input) -> JsonResult<Self> {
        Self::from_slice(bytes).map_err(|source| JsonDiffError::Decode { input, source })
    }

    pub fn kind(&self) -> Kind {
        match self {
            Self::Object(_) => Kind::Object,
            Self::Array(_) => Kind::Array,
            Self::Scalar(Scalar::Null) => Kind::Null,
            Self::Scalar(Scalar::Bool(_)) => Kind::Bool,
            Self::Scalar(Scalar::Number(_)) => Kind::Number,
            Self::Scalar(Scalar::String(_)) => Kind::String,
        }
    }

    pub fn null() -> Self {
        Self::Scalar(Scalar::Null)
    }

    /// Write compact JSON. Numbers use their shortest form (`1`, not `1.0`).
    fn write_json(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_json_string(f, key)?;
                    f.write_str(":")?;
                    value.write_json(f)?;
                }
                f.write_str("}")
            }
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    item.write_json(f)?;
                }
                f.write_str("]")
            }
            Self::Scalar(Scalar::String(s)) => write_json_string(f, s),
            Self::Scalar(scalar) => write!(f, "{scalar}"),
        }
    }
}

fn write_json_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
    f.write_str(&quoted)
}

/// Renders strings bare and everything else as compact JSON.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => write!(f, "{scalar}"),
            _ => self.write_json(f),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write_number(f, *n),
            Self::String(s) => f.write_str(s),
        }
    }
}

/// Integral values below `1e21` print as plain integers (`1`, not `1.0`).
/// Everything else uses the shortest round-trip form, switching to exponent
/// notation for very large or small magnitudes (`1e21`, `1e-7`).
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.fract() == 0.0 && n.abs() < 1e21 {
        return write!(f, "{n}");
    }
    match serde_json::Number::from_f64(n) {
        Some(number) => write!(f, "{number}"),
        None => write!(f, "{n}"),
    }
}

impl From<Value> for Tree {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Scalar(Scalar::Null),
            Value::Bool(b) => Self::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Self::Scalar(Scalar::Number(n.as_f64().unwrap_or(f64::NAN))),
            Value::String(s) => Self::Scalar(Scalar::String(s)),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<&Value> for Tree {
    fn from(value: &Value) -> Self {
        Self::from(value.clone())
    }
}

impl From<Scalar> for Tree {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<bool> for Tree {
    fn from(b: bool) -> Self {
        Self::Scalar(Scalar::Bool(b))
    }
}

impl From<f64> for Tree {
    fn from(n: f64) -> Self {
        Self::Scalar(Scalar::Number(n))
    }
}

impl From<&str> for Tree {
    fn from(s: &str) -> Self {
        Self::Scalar(Scalar::String(s.to_owned()))
    }
}

impl From<String> for Tree {
    fn from(s: String) -> Self {
        Self::Scalar(Scalar::String(s))
    }
}
