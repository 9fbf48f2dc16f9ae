use serde::{Deserialize, Serialize};

use super::{magnitude_decimals, ConversionRule, UnitSet};
use crate::quantity::Dimension;

/// 질량 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Milligram,
    Gram,
    Kilogram,
    Tonne,
    Ounce,
    Pound,
}

impl MassUnit {
    fn kilograms(self) -> f64 {
        match self {
            MassUnit::Milligram => 0.000_001,
            MassUnit::Gram => 0.001,
            MassUnit::Kilogram => 1.0,
            MassUnit::Tonne => 1000.0,
            MassUnit::Ounce => 0.028_349_5,
            MassUnit::Pound => 0.453_592,
        }
    }
}

impl UnitSet for MassUnit {
    const DIMENSION: Dimension = Dimension::Mass;
    const ALL: &'static [Self] = &[
        MassUnit::Milligram,
        MassUnit::Gram,
        MassUnit::Kilogram,
        MassUnit::Tonne,
        MassUnit::Ounce,
        MassUnit::Pound,
    ];

    fn code(self) -> &'static str {
        match self {
            MassUnit::Milligram => "mg",
            MassUnit::Gram => "g",
            MassUnit::Kilogram => "kg",
            MassUnit::Tonne => "t",
            MassUnit::Ounce => "oz",
            MassUnit::Pound => "lb",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mg" | "milligram" => Some(MassUnit::Milligram),
            "g" | "gram" => Some(MassUnit::Gram),
            "kg" | "kilogram" => Some(MassUnit::Kilogram),
            "t" | "tonne" | "ton" => Some(MassUnit::Tonne),
            "oz" | "ounce" => Some(MassUnit::Ounce),
            "lb" | "lbs" | "pound" => Some(MassUnit::Pound),
            _ => None,
        }
    }

    fn rule(self) -> ConversionRule {
        ConversionRule::Linear(self.kilograms())
    }

    fn decimals(self, value: f64) -> usize {
        match self {
            MassUnit::Milligram | MassUnit::Gram => magnitude_decimals(value, 3, 1),
            _ => magnitude_decimals(value, 3, 2),
        }
    }
}
