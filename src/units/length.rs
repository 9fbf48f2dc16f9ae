use serde::{Deserialize, Serialize};

use super::{magnitude_decimals, ConversionRule, UnitSet};
use crate::quantity::Dimension;

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
}

impl LengthUnit {
    /// 1 단위 = 몇 m 인지.
    fn meters(self) -> f64 {
        match self {
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Yard => 0.9144,
            LengthUnit::Mile => 1609.34,
        }
    }
}

impl UnitSet for LengthUnit {
    const DIMENSION: Dimension = Dimension::Length;
    const ALL: &'static [Self] = &[
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Yard,
        LengthUnit::Mile,
    ];

    fn code(self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
            LengthUnit::Yard => "yd",
            LengthUnit::Mile => "mi",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mm" | "millimeter" => Some(LengthUnit::Millimeter),
            "cm" | "centimeter" => Some(LengthUnit::Centimeter),
            "m" | "meter" | "metre" => Some(LengthUnit::Meter),
            "km" | "kilometer" => Some(LengthUnit::Kilometer),
            "in" | "inch" | "\"" => Some(LengthUnit::Inch),
            "ft" | "foot" | "feet" => Some(LengthUnit::Foot),
            "yd" | "yard" => Some(LengthUnit::Yard),
            "mi" | "mile" => Some(LengthUnit::Mile),
            _ => None,
        }
    }

    fn rule(self) -> ConversionRule {
        ConversionRule::Linear(self.meters())
    }

    fn decimals(self, value: f64) -> usize {
        match self {
            LengthUnit::Millimeter => magnitude_decimals(value, 3, 1),
            LengthUnit::Centimeter => magnitude_decimals(value, 2, 1),
            LengthUnit::Meter => magnitude_decimals(value, 3, 2),
            LengthUnit::Kilometer | LengthUnit::Mile => magnitude_decimals(value, 4, 2),
            LengthUnit::Inch | LengthUnit::Foot | LengthUnit::Yard => {
                magnitude_decimals(value, 3, 2)
            }
        }
    }
}
