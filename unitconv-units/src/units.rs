//! Unit definitions - the fixed catalog, grouped by category

use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;
use crate::{Category, ConversionError, Unit};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all known units, immutable once built
pub struct UnitRegistry {
    /// Units in catalog order
    units: Vec<Unit>,
    /// Lowercased symbol or alias -> position in `units`
    index: HashMap<String, usize>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: Vec::new(),
            index: HashMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Get a unit by symbol or alias, ignoring case and surrounding whitespace
    pub fn get(&self, name: &str) -> Option<&Unit> {
        let key = name.trim().to_lowercase();
        self.index.get(&key).map(|&i| &self.units[i])
    }

    /// Resolve a unit name, failing with `UnknownUnit`
    pub fn resolve(&self, name: &str) -> Result<&Unit, ConversionError> {
        let unit = self
            .get(name)
            .ok_or_else(|| ConversionError::UnknownUnit(name.trim().to_string()))?;
        debug!(name, symbol = unit.symbol, "resolved unit");
        Ok(unit)
    }

    /// Convert a value between two units of the same category
    pub fn convert(&self, value: f64, from: &Unit, to: &Unit) -> Result<f64, ConversionError> {
        from.convert_to(value, to)
    }

    /// Reject values that are physically impossible in `unit`
    pub fn check_physical(&self, value: f64, unit: &Unit) -> Result<(), ConversionError> {
        unit.check_physical(value)
    }

    /// Get all units in a category, in catalog order
    pub fn by_category(&self, category: Category) -> Vec<&Unit> {
        self.units.iter()
            .filter(|u| u.category == category)
            .collect()
    }

    /// All units grouped by category, in display order
    pub fn list_categories(&self) -> Vec<(Category, Vec<&Unit>)> {
        Category::ALL
            .iter()
            .map(|&cat| (cat, self.by_category(cat)))
            .collect()
    }

    /// Iterate over all units in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn register(&mut self, unit: Unit) {
        let position = self.units.len();
        for name in std::iter::once(unit.symbol).chain(unit.aliases.iter().copied()) {
            let previous = self.index.insert(name.to_lowercase(), position);
            debug_assert!(previous.is_none(), "duplicate unit name: {}", name);
        }
        self.units.push(unit);
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_temperature_units();
        self.register_mass_units();
    }

    fn register_length_units(&mut self) {
        // SI length units, relative to the metre
        self.register(Unit::new("km", "kilometer",
            &["kilometer", "kilometers", "kilometre", "kilometres"], Category::Length, 1000.0));
        self.register(Unit::new("m", "meter",
            &["meter", "meters", "metre", "metres"], Category::Length, 1.0));
        self.register(Unit::new("cm", "centimeter",
            &["centimeter", "centimeters", "centimetre", "centimetres"], Category::Length, 0.01));
        self.register(Unit::new("mm", "millimeter",
            &["millimeter", "millimeters", "millimetre", "millimetres"], Category::Length, 0.001));

        // Imperial/US length units (international yard and pound agreement)
        self.register(Unit::new("mi", "mile", &["mile", "miles"], Category::Length, 1609.344));
        self.register(Unit::new("yd", "yard", &["yard", "yards"], Category::Length, 0.9144));
        self.register(Unit::new("ft", "foot", &["foot", "feet"], Category::Length, 0.3048));
        self.register(Unit::new("in", "inch", &["inch", "inches"], Category::Length, 0.0254));
    }

    fn register_temperature_units(&mut self) {
        // Celsius is the pivot
        self.register(Unit::affine("C", "celsius", &["celsius", "centigrade"],
            Category::Temperature, |v| v, |v| v)
            .with_absolute_zero(-273.15));

        // F = C * 9/5 + 32
        self.register(Unit::affine("F", "fahrenheit", &["fahrenheit"],
            Category::Temperature, fahrenheit_to_celsius, celsius_to_fahrenheit)
            .with_absolute_zero(-459.67));

        // K = C + 273.15
        self.register(Unit::affine("K", "kelvin", &["kelvin"],
            Category::Temperature, kelvin_to_celsius, celsius_to_kelvin)
            .with_absolute_zero(0.0));
    }

    fn register_mass_units(&mut self) {
        // SI mass units, relative to the kilogram
        self.register(Unit::new("kg", "kilogram", &["kilogram", "kilograms"], Category::Mass, 1.0));
        self.register(Unit::new("g", "gram", &["gram", "grams"], Category::Mass, 0.001));
        self.register(Unit::new("mg", "milligram", &["milligram", "milligrams"], Category::Mass, 0.000001));

        // Avoirdupois
        self.register(Unit::new("lb", "pound", &["pound", "pounds"], Category::Mass, 0.45359237));
        self.register(Unit::new("oz", "ounce", &["ounce", "ounces"], Category::Mass, 0.028349523125));

        // Metric ton
        self.register(Unit::new("ton", "tonne",
            &["tons", "tonne", "tonnes", "metric ton"], Category::Mass, 1000.0));
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

fn kelvin_to_celsius(k: f64) -> f64 {
    k - 273.15
}

fn celsius_to_kelvin(c: f64) -> f64 {
    c + 273.15
}
