//! Display-ready property entries and the three-bucket aggregate.

use serde::Serialize;

use super::{NativeValue, PropertyMap};

/// A property ready for rendering: a label and a normalized value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtraPropertyEntry<T> {
    pub label: String,
    pub value: T,
}

impl<T> ExtraPropertyEntry<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self { label: label.into(), value }
    }
}

/// Value of a `primitive` bucket entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PrimitiveValue {
    String(String),
    Int(i64),
    Float(f64),
}

/// Value of an `expression` bucket entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionValue {
    /// Display text produced by the expression resolver.
    pub value: String,
    /// The original expression object, unchanged.
    pub raw_value: PropertyMap,
}

/// Value of a `json` bucket entry: the original array or object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StructuredValue {
    List(Vec<NativeValue>),
    Map(PropertyMap),
}

pub type PrimitiveEntry = ExtraPropertyEntry<PrimitiveValue>;
pub type ExpressionEntry = ExtraPropertyEntry<ExpressionValue>;
pub type JsonEntry = ExtraPropertyEntry<StructuredValue>;

/// The classified properties of one operation.
///
/// Each sequence keeps the order in which its entries were appended.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtraProperties {
    pub primitive: Vec<PrimitiveEntry>,
    pub expression: Vec<ExpressionEntry>,
    pub json: Vec<JsonEntry>,
}

impl ExtraProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of entries across the three buckets.
    pub fn len(&self) -> usize {
        self.primitive.len() + self.expression.len() + self.json.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
