//! # operation-props — Display buckets for native operation properties
//!
//! An execution-plan operation arrives with a loose bag of "native"
//! properties. This crate sorts them into three display-ready buckets:
//!
//! | Bucket | Holds | Label |
//! |--------|-------|-------|
//! | `primitive` | strings and numbers | key as-is |
//! | `expression` | objects with an `expr.*` `_typeHint` | humanized |
//! | `json` | arrays and other objects | humanized |
//!
//! ## Design Principles
//!
//! 1. **Classify first**: `classify_value` is a pure function returning a closed `Classification`
//! 2. **Typed boundary**: raw data enters as `NativeValue`, never as untyped JSON
//! 3. **Per-key isolation**: a resolver error drops one property, never the whole call
//! 4. **Resolver is external**: expression text comes from an `ExpressionResolver`
//!
//! ## Quick Start
//!
//! ```rust
//! use operation_props::{parse_extra_options, parse_native_properties, PropertyMap, Result};
//!
//! # fn example() -> Result<()> {
//! let props = parse_native_properties(r#"{
//!     "name": "filter",
//!     "condition": {"_typeHint": "expr.Literal", "value": true},
//!     "childIds": [1, 2]
//! }"#)?;
//!
//! let attributes: Vec<String> = Vec::new();
//! let render = |raw: &PropertyMap, _: &[String]| -> Result<String> {
//!     Ok(raw["value"].to_string())
//! };
//!
//! let extra = parse_extra_options(&props, &attributes, &render);
//! assert_eq!(extra.primitive[0].label, "name");
//! assert_eq!(extra.expression[0].label, "Condition");
//! assert_eq!(extra.expression[0].value.value, "true");
//! assert_eq!(extra.json[0].label, "Child Ids");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod classify;
pub mod config;
pub mod decorate;
pub mod resolver;
pub mod parse;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    NativeValue, PropertyMap, NativeProperties, parse_native_properties,
    ExtraPropertyEntry, ExtraProperties,
    PrimitiveValue, ExpressionValue, StructuredValue,
    PrimitiveEntry, ExpressionEntry, JsonEntry,
};

// ============================================================================
// Re-exports: Classification and decoration
// ============================================================================

pub use classify::{
    Classification, SkipReason,
    classify_value, classify_value_with, is_expression_property, humanize_label,
};
pub use decorate::{
    LabelStyle,
    decorate_json_property, decorate_json_property_as,
    decorate_expression_property, decorate_expression_property_as,
};
pub use resolver::ExpressionResolver;
pub use config::ClassifierConfig;

// ============================================================================
// Re-exports: Parsing
// ============================================================================

pub use parse::{parse_extra_options, ExtraPropertyParser, ParseReport, FailedProperty};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Expression resolution failed for '{property}': {message}")]
    ResolutionFailure { property: String, message: String },

    #[error("Expression error: {0}")]
    ExpressionError(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
