//! Unitconv Units - Unit Registry and Conversion
//!
//! Resolves unit names to a fixed catalog and converts values between
//! units of the same category. The registry is built once and never
//! mutated, so it can be shared freely.
//!
//! Categories:
//! - Length (km, m, cm, mm, mi, yd, ft, in)
//! - Temperature (C, F, K)
//! - Mass (kg, g, mg, lb, oz, ton)

mod category;
mod unit;
mod units;
mod convert;
mod parse;

pub use category::Category;
pub use unit::{codes, Conversion, ConversionError, Unit};
pub use units::{UnitRegistry, UNITS};
pub use convert::ConversionResult;
pub use parse::parse_value;
