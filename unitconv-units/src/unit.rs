//! Unit representation with conversion rules

use std::fmt;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use crate::Category;

/// How a unit maps onto its category's base unit
#[derive(Debug, Clone, Copy)]
pub enum Conversion {
    /// Proportional unit: value_base = value * factor
    Linear { factor: f64 },
    /// Non-proportional unit (temperature): a pair of pure functions
    Affine {
        to_base: fn(f64) -> f64,
        from_base: fn(f64) -> f64,
    },
}

/// A convertible unit from the fixed catalog
#[derive(Debug, Clone, Serialize)]
pub struct Unit {
    /// Canonical symbol (e.g., "km", "C", "kg")
    pub symbol: &'static str,
    /// Long name (e.g., "kilometer")
    pub name: &'static str,
    /// Alternate names, matched case-insensitively
    pub aliases: &'static [&'static str],
    /// Category the unit belongs to
    pub category: Category,
    /// Mapping onto the category base unit
    #[serde(skip)]
    pub conversion: Conversion,
    /// Lowest physically meaningful value, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_zero: Option<f64>,
}

impl Unit {
    /// Create a unit with proportional conversion
    pub fn new(
        symbol: &'static str,
        name: &'static str,
        aliases: &'static [&'static str],
        category: Category,
        factor: f64,
    ) -> Self {
        Unit {
            symbol,
            name,
            aliases,
            category,
            conversion: Conversion::Linear { factor },
            absolute_zero: None,
        }
    }

    /// Create a unit converted through a pair of functions (temperature)
    pub fn affine(
        symbol: &'static str,
        name: &'static str,
        aliases: &'static [&'static str],
        category: Category,
        to_base: fn(f64) -> f64,
        from_base: fn(f64) -> f64,
    ) -> Self {
        Unit {
            symbol,
            name,
            aliases,
            category,
            conversion: Conversion::Affine { to_base, from_base },
            absolute_zero: None,
        }
    }

    /// Builder: set the lowest physically meaningful value
    pub fn with_absolute_zero(mut self, minimum: f64) -> Self {
        self.absolute_zero = Some(minimum);
        self
    }

    /// Check if this is the base unit of its category
    pub fn is_base(&self) -> bool {
        self.symbol == self.category.base_symbol()
    }

    /// Check if two units can be converted into each other
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.category == other.category
    }

    /// Convert a value from this unit to the category base unit
    pub fn to_base(&self, value: f64) -> f64 {
        match self.conversion {
            Conversion::Linear { factor } => value * factor,
            Conversion::Affine { to_base, .. } => to_base(value),
        }
    }

    /// Convert a value from the category base unit to this unit
    pub fn from_base(&self, value: f64) -> f64 {
        match self.conversion {
            Conversion::Linear { factor } => value / factor,
            Conversion::Affine { from_base, .. } => from_base(value),
        }
    }

    /// Convert a value from this unit to another unit
    pub fn convert_to(&self, value: f64, target: &Unit) -> Result<f64, ConversionError> {
        if !value.is_finite() {
            return Err(ConversionError::InvalidValue(value.to_string()));
        }

        if !self.is_compatible(target) {
            return Err(ConversionError::CategoryMismatch {
                from: self.symbol.to_string(),
                to: target.symbol.to_string(),
                from_category: self.category,
                to_category: target.category,
            });
        }

        // Same unit: no arithmetic, no drift
        if self == target {
            return Ok(value);
        }

        let base = self.to_base(value);
        let result = target.from_base(base);
        if !base.is_finite() || !result.is_finite() {
            return Err(ConversionError::OutOfRange {
                value,
                from: self.symbol.to_string(),
                to: target.symbol.to_string(),
            });
        }
        debug!(from = self.symbol, to = target.symbol, value, base, result, "converted");
        Ok(result)
    }

    /// Reject values below this unit's absolute zero
    pub fn check_physical(&self, value: f64) -> Result<(), ConversionError> {
        match self.absolute_zero {
            Some(minimum) if value < minimum => Err(ConversionError::BelowAbsoluteZero {
                value,
                unit: self.symbol.to_string(),
                minimum,
            }),
            _ => Ok(()),
        }
    }
}

// Canonical symbols are unique across the catalog
impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for Unit {}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const CATEGORY_MISMATCH: &str = "CATEGORY_MISMATCH";
    pub const INVALID_VALUE: &str = "INVALID_VALUE";
    pub const BELOW_ABSOLUTE_ZERO: &str = "BELOW_ABSOLUTE_ZERO";
    pub const OUT_OF_RANGE: &str = "OUT_OF_RANGE";
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Name matches no symbol or alias
    #[error("unknown unit '{0}'")]
    UnknownUnit(String),

    /// Units belong to different categories
    #[error("cannot convert {from} ({from_category}) to {to} ({to_category}): different categories")]
    CategoryMismatch {
        from: String,
        to: String,
        from_category: Category,
        to_category: Category,
    },

    /// Input is not a finite real number
    #[error("'{0}' is not a valid number")]
    InvalidValue(String),

    /// Result does not fit in a finite f64
    #[error("{value} {from} is out of range when converted to {to}")]
    OutOfRange {
        value: f64,
        from: String,
        to: String,
    },

    /// Temperature lies below absolute zero
    #[error("{value} {unit} is below absolute zero ({minimum} {unit})")]
    BelowAbsoluteZero {
        value: f64,
        unit: String,
        minimum: f64,
    },
}

impl ConversionError {
    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConversionError::UnknownUnit(_) => codes::UNKNOWN_UNIT,
            ConversionError::CategoryMismatch { .. } => codes::CATEGORY_MISMATCH,
            ConversionError::InvalidValue(_) => codes::INVALID_VALUE,
            ConversionError::OutOfRange { .. } => codes::OUT_OF_RANGE,
            ConversionError::BelowAbsoluteZero { .. } => codes::BELOW_ABSOLUTE_ZERO,
        }
    }
}
