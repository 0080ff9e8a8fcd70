//! Output rendering
//!
//! Renders conversion results and the unit catalog as plain text or JSON.

use serde::Serialize;
use unitconv_units::{Category, ConversionResult, Unit, UnitRegistry};

const SCIENTIFIC_BELOW: f64 = 1e-6;
const SCIENTIFIC_FROM: f64 = 1e16;

/// Display format for numbers
#[derive(Debug, Clone, Copy, Default)]
pub enum NumberFormat {
    /// Shortest representation that round-trips, scientific notation
    /// for very large or very small magnitudes (default)
    #[default]
    Full,
    /// Fixed decimal places
    Decimal(usize),
}

impl NumberFormat {
    pub fn from_precision(precision: Option<usize>) -> Self {
        precision.map_or(NumberFormat::Full, NumberFormat::Decimal)
    }

    pub fn format(&self, value: f64) -> String {
        match self {
            NumberFormat::Full => {
                let magnitude = value.abs();
                if magnitude != 0.0 && !(SCIENTIFIC_BELOW..SCIENTIFIC_FROM).contains(&magnitude) {
                    format!("{:e}", value)
                } else {
                    value.to_string()
                }
            }
            NumberFormat::Decimal(places) => format!("{:.*}", places, value),
        }
    }
}

/// One category of the JSON listing
#[derive(Serialize)]
struct CategoryListing<'a> {
    category: Category,
    base: &'static str,
    units: Vec<&'a Unit>,
}

/// Render a conversion as `<value> <from> = <result> <to>`
///
/// The value and unit names are echoed as the user typed them.
pub fn render_conversion(
    record: &ConversionResult,
    value_input: &str,
    from_input: &str,
    to_input: &str,
    format: NumberFormat,
) -> String {
    format!(
        "{} {} = {} {}",
        value_input.trim(),
        from_input,
        format.format(record.result),
        to_input
    )
}

pub fn render_conversion_json(record: &ConversionResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(record)
}

/// Render a unit as `<symbol> (<alias1>, <alias2>, ...)`
pub fn render_unit(unit: &Unit) -> String {
    if unit.aliases.is_empty() {
        unit.symbol.to_string()
    } else {
        format!("{} ({})", unit.symbol, unit.aliases.join(", "))
    }
}

/// Render every category with its units, in display order
pub fn render_listing(registry: &UnitRegistry) -> String {
    let mut output = String::from("Supported units:\n\n");

    for (category, units) in registry.list_categories() {
        output.push_str(&format!("{}:\n", category));
        for unit in units {
            output.push_str(&format!("  {}\n", render_unit(unit)));
        }
        output.push('\n');
    }

    output
}

pub fn render_listing_json(registry: &UnitRegistry) -> serde_json::Result<String> {
    let listing: Vec<CategoryListing> = registry
        .list_categories()
        .into_iter()
        .map(|(category, units)| CategoryListing {
            category,
            base: category.base_symbol(),
            units,
        })
        .collect();
    serde_json::to_string_pretty(&listing)
}
