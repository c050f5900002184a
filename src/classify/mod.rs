//! # Property Classification
//!
//! Decides which display bucket a raw property value belongs to.
//! Pure functions: no resolver calls, no labels touched.

pub mod label;

pub use label::humanize_label;

use crate::config::ClassifierConfig;
use crate::model::{NativeValue, PrimitiveValue, PropertyMap, StructuredValue};

/// Where a single property goes, with the value that goes there.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification<'a> {
    /// String or number, shown as-is.
    Primitive(PrimitiveValue),
    /// Object tagged with an expression type hint, still to be resolved.
    Expression(&'a PropertyMap),
    /// Array or plain object.
    Structured(StructuredValue),
    /// Not shown at all.
    Skip(SkipReason),
}

/// Why a property was left out of every bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// `null` or absent.
    Null,
    /// A value kind no bucket accepts (booleans).
    Unsupported(&'static str),
}

/// Classify a value against the default type-hint convention.
pub fn classify_value(value: &NativeValue) -> Classification<'_> {
    classify_value_with(value, &ClassifierConfig::default())
}

/// Classify a value using the type-hint key and prefix from `config`.
pub fn classify_value_with<'a>(value: &'a NativeValue, config: &ClassifierConfig) -> Classification<'a> {
    match value {
        NativeValue::Null => Classification::Skip(SkipReason::Null),
        NativeValue::String(s) => Classification::Primitive(PrimitiveValue::String(s.clone())),
        NativeValue::Int(i) => Classification::Primitive(PrimitiveValue::Int(*i)),
        NativeValue::Float(f) => Classification::Primitive(PrimitiveValue::Float(*f)),
        NativeValue::Map(obj) if has_expression_hint(obj, config) => Classification::Expression(obj),
        NativeValue::Map(obj) => Classification::Structured(StructuredValue::Map(obj.clone())),
        NativeValue::List(items) => Classification::Structured(StructuredValue::List(items.clone())),
        NativeValue::Bool(_) => Classification::Skip(SkipReason::Unsupported(value.type_name())),
    }
}

/// Does this object carry an `expr.`-prefixed `_typeHint`?
///
/// A missing hint, or one that is not a string, means "not an expression".
pub fn is_expression_property(obj: &PropertyMap) -> bool {
    has_expression_hint(obj, &ClassifierConfig::default())
}

pub(crate) fn has_expression_hint(obj: &PropertyMap, config: &ClassifierConfig) -> bool {
    obj.get(&config.type_hint_key)
        .and_then(NativeValue::as_str)
        .is_some_and(|hint| hint.starts_with(config.expression_prefix.as_str()))
}
