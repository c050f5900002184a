//! Expression text resolution.
//!
//! Turning an expression object into display text needs knowledge of the
//! attributes it references. That renderer lives outside this crate; it is
//! plugged in through [`ExpressionResolver`].

use crate::model::PropertyMap;
use crate::Result;

/// Renders a raw expression object as display text.
///
/// `A` is the caller's attribute type. This crate never looks inside it,
/// it only hands the full list to the resolver.
///
/// Implementations report malformed payloads as errors; the parser
/// drops the offending property and carries on.
pub trait ExpressionResolver<A> {
    fn resolve(&self, raw: &PropertyMap, attributes: &[A]) -> Result<String>;
}

impl<A, F> ExpressionResolver<A> for F
where
    F: Fn(&PropertyMap, &[A]) -> Result<String>,
{
    fn resolve(&self, raw: &PropertyMap, attributes: &[A]) -> Result<String> {
        self(raw, attributes)
    }
}
