//! Classifier configuration.

use serde::{Deserialize, Serialize};

use crate::decorate::LabelStyle;
use crate::Result;

/// Key carrying the type discriminator on expression objects.
pub const DEFAULT_TYPE_HINT_KEY: &str = "_typeHint";

/// Namespace prefix of expression type hints.
pub const DEFAULT_EXPRESSION_PREFIX: &str = "expr.";

/// Settings for [`ExtraPropertyParser`](crate::ExtraPropertyParser).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassifierConfig {
    /// Object key inspected to detect expressions.
    pub type_hint_key: String,
    /// A type hint starting with this prefix marks an expression.
    pub expression_prefix: String,
    /// Humanize labels of expression and json entries.
    pub humanize_labels: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            type_hint_key: DEFAULT_TYPE_HINT_KEY.to_owned(),
            expression_prefix: DEFAULT_EXPRESSION_PREFIX.to_owned(),
            humanize_labels: true,
        }
    }
}

impl ClassifierConfig {
    /// Load from a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Label style the decorators apply to expression and json entries.
    pub fn label_style(&self) -> LabelStyle {
        if self.humanize_labels {
            LabelStyle::Humanized
        } else {
            LabelStyle::Verbatim
        }
    }

    pub fn with_type_hint_key(mut self, key: impl Into<String>) -> Self {
        self.type_hint_key = key.into();
        self
    }

    pub fn with_expression_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.expression_prefix = prefix.into();
        self
    }

    pub fn with_humanize_labels(mut self, enabled: bool) -> Self {
        self.humanize_labels = enabled;
        self
    }
}
