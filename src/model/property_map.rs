//! PropertyMap — the ordered key-value bag of an operation.

use indexmap::IndexMap;
use super::NativeValue;

/// A map of property names to values, in discovery order.
pub type PropertyMap = IndexMap<String, NativeValue>;

/// The raw properties of an operation, before classification.
pub type NativeProperties = PropertyMap;

/// Parse a JSON object into [`NativeProperties`], keeping document key order.
pub fn parse_native_properties(json: &str) -> crate::Result<NativeProperties> {
    Ok(serde_json::from_str(json)?)
}
