//! # Property Model
//!
//! The raw values coming in and the display entries going out.
//!
//! Design rule: this module is pure data. No resolver calls, no logging.

pub mod value;
pub mod property_map;
pub mod entry;

pub use value::NativeValue;
pub use property_map::{PropertyMap, NativeProperties, parse_native_properties};
pub use entry::{
    ExtraPropertyEntry, ExtraProperties,
    PrimitiveValue, ExpressionValue, StructuredValue,
    PrimitiveEntry, ExpressionEntry, JsonEntry,
};
