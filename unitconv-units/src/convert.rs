//! Named conversions - resolve both unit names and produce a full record

use serde::Serialize;
use crate::{Category, ConversionError, UnitRegistry};

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    /// Input value
    pub value: f64,
    /// Canonical symbol of the source unit
    pub from: &'static str,
    /// Canonical symbol of the target unit
    pub to: &'static str,
    /// Converted value, full precision
    pub result: f64,
    /// Category shared by both units
    pub category: Category,
}

impl UnitRegistry {
    /// Resolve `from_name` and `to_name`, then convert `value`
    ///
    /// Source unit is resolved first, so an unknown source wins over an
    /// unknown target.
    pub fn convert_named(
        &self,
        value: f64,
        from_name: &str,
        to_name: &str,
    ) -> Result<ConversionResult, ConversionError> {
        let from = self.resolve(from_name)?;
        let to = self.resolve(to_name)?;
        let result = self.convert(value, from, to)?;

        Ok(ConversionResult {
            value,
            from: from.symbol,
            to: to.symbol,
            result,
            category: from.category,
        })
    }
}
