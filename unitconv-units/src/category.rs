//! Unit categories
//!
//! Every unit belongs to exactly one category. Units convert only within
//! their own category, through the category's base unit:
//! [length: m, temperature: C, mass: kg]

use std::fmt;
use serde::{Serialize, Deserialize};

/// Closed set of convertible quantity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Length [L], base unit metre
    Length,
    /// Temperature [Θ], pivot unit Celsius
    Temperature,
    /// Mass [M], base unit kilogram
    Mass,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 3] = [Category::Length, Category::Temperature, Category::Mass];

    /// Lowercase machine name
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Temperature => "temperature",
            Category::Mass => "mass",
        }
    }

    /// Heading used in listings
    pub fn title(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Temperature => "Temperature",
            Category::Mass => "Mass",
        }
    }

    /// Symbol of the unit every conversion in this category pivots through
    pub fn base_symbol(&self) -> &'static str {
        match self {
            Category::Length => "m",
            Category::Temperature => "C",
            Category::Mass => "kg",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
