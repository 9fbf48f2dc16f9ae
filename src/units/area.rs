use serde::{Deserialize, Serialize};

use super::{ConversionRule, UnitSet};
use crate::quantity::Dimension;

/// 면적 단위. 내부 기준은 제곱미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareCentimeter,
    SquareMeter,
    Hectare,
    SquareKilometer,
    SquareFoot,
    Acre,
}

impl UnitSet for AreaUnit {
    const DIMENSION: Dimension = Dimension::Area;
    const ALL: &'static [Self] = &[
        AreaUnit::SquareCentimeter,
        AreaUnit::SquareMeter,
        AreaUnit::Hectare,
        AreaUnit::SquareKilometer,
        AreaUnit::SquareFoot,
        AreaUnit::Acre,
    ];

    fn code(self) -> &'static str {
        match self {
            AreaUnit::SquareCentimeter => "cm2",
            AreaUnit::SquareMeter => "m2",
            AreaUnit::Hectare => "ha",
            AreaUnit::SquareKilometer => "km2",
            AreaUnit::SquareFoot => "ft2",
            AreaUnit::Acre => "ac",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cm2" | "cm^2" | "cm²" => Some(AreaUnit::SquareCentimeter),
            "m2" | "m^2" | "m²" | "sqm" => Some(AreaUnit::SquareMeter),
            "ha" | "hectare" => Some(AreaUnit::Hectare),
            "km2" | "km^2" | "km²" => Some(AreaUnit::SquareKilometer),
            "ft2" | "ft^2" | "ft²" | "sqft" => Some(AreaUnit::SquareFoot),
            "ac" | "acre" => Some(AreaUnit::Acre),
            _ => None,
        }
    }

    fn rule(self) -> ConversionRule {
        let m2 = match self {
            AreaUnit::SquareCentimeter => 0.0001,
            AreaUnit::SquareMeter => 1.0,
            AreaUnit::Hectare => 10_000.0,
            AreaUnit::SquareKilometer => 1_000_000.0,
            AreaUnit::SquareFoot => 0.092_903,
            AreaUnit::Acre => 4_046.86,
        };
        ConversionRule::Linear(m2)
    }
}
