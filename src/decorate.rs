//! Decorators turning classified properties into display entries.

use crate::classify::humanize_label;
use crate::model::{ExpressionEntry, ExpressionValue, ExtraPropertyEntry, PropertyMap};
use crate::resolver::ExpressionResolver;
use crate::{Error, Result};

/// How a property key becomes a display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    /// `"camelCase"` => `"Camel Case"`
    #[default]
    Humanized,
    /// The key, unchanged.
    Verbatim,
}

impl LabelStyle {
    pub fn apply(self, key: &str) -> String {
        match self {
            LabelStyle::Humanized => humanize_label(key),
            LabelStyle::Verbatim => key.to_owned(),
        }
    }
}

/// Humanize the label of a structured (array/object) property.
/// The value is passed through untouched.
pub fn decorate_json_property<T>(entry: ExtraPropertyEntry<T>) -> ExtraPropertyEntry<T> {
    decorate_json_property_as(entry, LabelStyle::Humanized)
}

/// [`decorate_json_property`] with an explicit label style.
pub fn decorate_json_property_as<T>(entry: ExtraPropertyEntry<T>, style: LabelStyle) -> ExtraPropertyEntry<T> {
    ExtraPropertyEntry {
        label: style.apply(&entry.label),
        value: entry.value,
    }
}

/// Build the display entry of an expression property.
///
/// The label is humanized as for json properties. The display text comes
/// from `resolver`; the raw object is kept alongside it unchanged.
///
/// A resolver error is returned as [`Error::ResolutionFailure`] naming the
/// original property key.
pub fn decorate_expression_property<A, R>(
    entry: ExtraPropertyEntry<PropertyMap>,
    attributes: &[A],
    resolver: &R,
) -> Result<ExpressionEntry>
where
    R: ExpressionResolver<A> + ?Sized,
{
    decorate_expression_property_as(entry, attributes, resolver, LabelStyle::Humanized)
}

/// [`decorate_expression_property`] with an explicit label style.
pub fn decorate_expression_property_as<A, R>(
    entry: ExtraPropertyEntry<PropertyMap>,
    attributes: &[A],
    resolver: &R,
    style: LabelStyle,
) -> Result<ExpressionEntry>
where
    R: ExpressionResolver<A> + ?Sized,
{
    let property = entry.label.clone();
    let json_like = decorate_json_property_as(entry, style);
    let text = resolver
        .resolve(&json_like.value, attributes)
        .map_err(|e| Error::ResolutionFailure { property, message: e.to_string() })?;

    Ok(ExtraPropertyEntry {
        label: json_like.label,
        value: ExpressionValue { value: text, raw_value: json_like.value },
    })
}
