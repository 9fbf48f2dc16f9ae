use serde::{Deserialize, Serialize};

use super::{magnitude_decimals, ConversionRule, UnitSet};
use crate::quantity::Dimension;

/// 속도 단위. 내부 기준은 m/s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedUnit {
    MeterPerSecond,
    KilometerPerHour,
    MilePerHour,
    Knot,
}

impl UnitSet for SpeedUnit {
    const DIMENSION: Dimension = Dimension::Speed;
    const ALL: &'static [Self] = &[
        SpeedUnit::MeterPerSecond,
        SpeedUnit::KilometerPerHour,
        SpeedUnit::MilePerHour,
        SpeedUnit::Knot,
    ];

    fn code(self) -> &'static str {
        match self {
            SpeedUnit::MeterPerSecond => "m/s",
            SpeedUnit::KilometerPerHour => "km/h",
            SpeedUnit::MilePerHour => "mph",
            SpeedUnit::Knot => "kn",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "m/s" | "ms" | "mps" => Some(SpeedUnit::MeterPerSecond),
            "km/h" | "kmh" | "kph" => Some(SpeedUnit::KilometerPerHour),
            "mph" | "mi/h" => Some(SpeedUnit::MilePerHour),
            "kn" | "knot" | "knots" | "kt" => Some(SpeedUnit::Knot),
            _ => None,
        }
    }

    fn rule(self) -> ConversionRule {
        let mps = match self {
            SpeedUnit::MeterPerSecond => 1.0,
            SpeedUnit::KilometerPerHour => 1.0 / 3.6,
            SpeedUnit::MilePerHour => 1609.34 / 3600.0,
            SpeedUnit::Knot => 1852.0 / 3600.0,
        };
        ConversionRule::Linear(mps)
    }

    fn decimals(self, value: f64) -> usize {
        magnitude_decimals(value, 3, 2)
    }
}
