use serde::{Deserialize, Serialize};

use super::{ConversionRule, UnitSet};
use crate::quantity::Dimension;

/// 체적 단위. 내부 기준은 리터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Milliliter,
    Liter,
    CubicMeter,
    CubicCentimeter,
    Gallon,
    Pint,
}

fn liters(unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Milliliter => 0.001,
        VolumeUnit::Liter => 1.0,
        VolumeUnit::CubicMeter => 1000.0,
        VolumeUnit::CubicCentimeter => 0.001,
        // US liquid
        VolumeUnit::Gallon => 3.785_41,
        VolumeUnit::Pint => 0.473_176,
    }
}

impl UnitSet for VolumeUnit {
    const DIMENSION: Dimension = Dimension::Volume;
    const ALL: &'static [Self] = &[
        VolumeUnit::Milliliter,
        VolumeUnit::Liter,
        VolumeUnit::CubicMeter,
        VolumeUnit::CubicCentimeter,
        VolumeUnit::Gallon,
        VolumeUnit::Pint,
    ];

    fn code(self) -> &'static str {
        match self {
            VolumeUnit::Milliliter => "ml",
            VolumeUnit::Liter => "l",
            VolumeUnit::CubicMeter => "m3",
            VolumeUnit::CubicCentimeter => "cm3",
            VolumeUnit::Gallon => "gal",
            VolumeUnit::Pint => "pt",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ml" | "milliliter" => Some(VolumeUnit::Milliliter),
            "l" | "liter" | "litre" => Some(VolumeUnit::Liter),
            "m3" | "m^3" | "m³" => Some(VolumeUnit::CubicMeter),
            "cm3" | "cm^3" | "cm³" | "cc" => Some(VolumeUnit::CubicCentimeter),
            "gal" | "gallon" => Some(VolumeUnit::Gallon),
            "pt" | "pint" => Some(VolumeUnit::Pint),
            _ => None,
        }
    }

    fn rule(self) -> ConversionRule {
        ConversionRule::Linear(liters(self))
    }
}
