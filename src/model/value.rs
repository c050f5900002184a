//! Native value type — the shape of raw operation properties.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::PropertyMap;

/// A raw property value as received from the external object description.
///
/// Covers the JSON value domain:
/// - Scalars: Null, Bool, Int, Float, String
/// - Containers: List, Map
///
/// `Null` stands for both `null` and an absent value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NativeValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<NativeValue>),
    Map(PropertyMap),
}

// ============================================================================
// Type checking
// ============================================================================

impl NativeValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            NativeValue::Null => "null",
            NativeValue::Bool(_) => "boolean",
            NativeValue::Int(_) | NativeValue::Float(_) => "number",
            NativeValue::String(_) => "string",
            NativeValue::List(_) => "array",
            NativeValue::Map(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool { matches!(self, NativeValue::Null) }

    /// Attempt to extract as &str
    pub fn as_str(&self) -> Option<&str> {
        match self {
            NativeValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempt to borrow as an object
    pub fn as_map(&self) -> Option<&PropertyMap> {
        match self {
            NativeValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<bool> for NativeValue { fn from(v: bool) -> Self { NativeValue::Bool(v) } }
impl From<i32> for NativeValue { fn from(v: i32) -> Self { NativeValue::Int(v as i64) } }
impl From<i64> for NativeValue { fn from(v: i64) -> Self { NativeValue::Int(v) } }
impl From<f64> for NativeValue { fn from(v: f64) -> Self { NativeValue::Float(v) } }
impl From<String> for NativeValue { fn from(v: String) -> Self { NativeValue::String(v) } }
impl From<&str> for NativeValue { fn from(v: &str) -> Self { NativeValue::String(v.to_owned()) } }
impl<T: Into<NativeValue>> From<Vec<T>> for NativeValue {
    fn from(v: Vec<T>) -> Self { NativeValue::List(v.into_iter().map(Into::into).collect()) }
}
impl<T: Into<NativeValue>> From<Option<T>> for NativeValue {
    fn from(v: Option<T>) -> Self { v.map(Into::into).unwrap_or(NativeValue::Null) }
}

/// Bridge from `serde_json::Value`.
///
/// Object key order follows whatever order the `serde_json` map yields.
/// Parse straight into [`NativeValue`] to keep document order.
impl From<serde_json::Value> for NativeValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => NativeValue::Null,
            serde_json::Value::Bool(b) => NativeValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => NativeValue::Int(i),
                // u64 above i64::MAX and all non-integers land here
                None => NativeValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => NativeValue::String(s),
            serde_json::Value::Array(items) => {
                NativeValue::List(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(obj) => {
                NativeValue::Map(obj.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

// ============================================================================
// Display
// ============================================================================

/// Compact literal rendering (`1`, `"a"`, `[1, null]`, `{k: v}`).
///
/// Resolvers use it to print literal operands of an expression.
impl fmt::Display for NativeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeValue::Null => write!(f, "null"),
            NativeValue::Bool(b) => write!(f, "{b}"),
            NativeValue::Int(i) => write!(f, "{i}"),
            NativeValue::Float(v) => write!(f, "{v}"),
            NativeValue::String(s) => write!(f, "\"{}\"", s.replace('"', "\\\"")),
            NativeValue::List(l) => {
                write!(f, "[")?;
                for (i, v) in l.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
            NativeValue::Map(m) => {
                write!(f, "{{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}
