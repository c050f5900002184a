//! # Extra-property parsing
//!
//! Walks the native properties of one operation in order, classifies each
//! value and routes it to its bucket. A property that fails to decorate is
//! reported and dropped; the rest are still processed.

use tracing::{debug, error, trace};

use crate::classify::{self, Classification, SkipReason};
use crate::config::ClassifierConfig;
use crate::decorate::{decorate_expression_property_as, decorate_json_property_as};
use crate::model::*;
use crate::resolver::ExpressionResolver;

/// A property dropped because its expression text could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedProperty {
    pub property: String,
    pub message: String,
}

/// Parse outcome with diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    pub properties: ExtraProperties,
    /// Expression properties excluded after a resolver error.
    pub failures: Vec<FailedProperty>,
    /// Keys left out on purpose: nulls and booleans.
    pub skipped: Vec<String>,
}

/// Classifies native properties into display buckets.
#[derive(Debug, Clone, Default)]
pub struct ExtraPropertyParser {
    config: ClassifierConfig,
}

impl ExtraPropertyParser {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify `properties`, resolving expressions against `attributes`.
    pub fn parse<A, R>(
        &self,
        properties: &NativeProperties,
        attributes: &[A],
        resolver: &R,
    ) -> ExtraProperties
    where
        R: ExpressionResolver<A> + ?Sized,
    {
        self.parse_with_report(properties, attributes, resolver).properties
    }

    /// Like [`parse`](Self::parse), also returning what was left out and why.
    pub fn parse_with_report<A, R>(
        &self,
        properties: &NativeProperties,
        attributes: &[A],
        resolver: &R,
    ) -> ParseReport
    where
        R: ExpressionResolver<A> + ?Sized,
    {
        let mut report = ParseReport::default();
        let style = self.config.label_style();

        for (key, value) in properties {
            let class = classify::classify_value_with(value, &self.config);
            trace!(property = %key, ?class, "classified");

            match class {
                Classification::Primitive(v) => {
                    report.properties.primitive.push(ExtraPropertyEntry::new(key, v));
                }
                Classification::Expression(raw) => {
                    let entry = ExtraPropertyEntry::new(key, raw.clone());
                    match decorate_expression_property_as(entry, attributes, resolver, style) {
                        Ok(decorated) => report.properties.expression.push(decorated),
                        Err(e) => {
                            error!(property = %key, error = %e, "Expression decoration error");
                            report.failures.push(FailedProperty { property: key.clone(), message: e.to_string() });
                        }
                    }
                }
                Classification::Structured(v) => {
                    report.properties.json.push(decorate_json_property_as(ExtraPropertyEntry::new(key, v), style));
                }
                Classification::Skip(reason) => {
                    if let SkipReason::Unsupported(kind) = reason {
                        debug!(property = %key, kind, "skipping property with unsupported value");
                    }
                    report.skipped.push(key.clone());
                }
            }
        }

        debug!(
            primitive = report.properties.primitive.len(),
            expression = report.properties.expression.len(),
            json = report.properties.json.len(),
            failed = report.failures.len(),
            "parsed extra properties"
        );
        report
    }
}

/// Classify native properties with the default `_typeHint`/`expr.` convention.
///
/// Never fails: a property whose expression text cannot be resolved is
/// logged and left out, all others are still classified.
pub fn parse_extra_options<A, R>(
    native_properties: &NativeProperties,
    attributes: &[A],
    resolver: &R,
) -> ExtraProperties
where
    R: ExpressionResolver<A> + ?Sized,
{
    ExtraPropertyParser::default().parse(native_properties, attributes, resolver)
}
