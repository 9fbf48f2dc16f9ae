use serde::{Deserialize, Serialize};

use super::{magnitude_decimals, ConversionRule, UnitSet};
use crate::quantity::Dimension;

/// 에너지 단위. 내부 기준은 줄(J)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    Joule,
    Kilojoule,
    Calorie,
    KiloCalorie,
    WattHour,
    KilowattHour,
    Btu,
}

impl UnitSet for EnergyUnit {
    const DIMENSION: Dimension = Dimension::Energy;
    const ALL: &'static [Self] = &[
        EnergyUnit::Joule,
        EnergyUnit::Kilojoule,
        EnergyUnit::Calorie,
        EnergyUnit::KiloCalorie,
        EnergyUnit::WattHour,
        EnergyUnit::KilowattHour,
        EnergyUnit::Btu,
    ];

    fn code(self) -> &'static str {
        match self {
            EnergyUnit::Joule => "J",
            EnergyUnit::Kilojoule => "kJ",
            EnergyUnit::Calorie => "cal",
            EnergyUnit::KiloCalorie => "kcal",
            EnergyUnit::WattHour => "Wh",
            EnergyUnit::KilowattHour => "kWh",
            EnergyUnit::Btu => "Btu",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "j" | "joule" => Some(EnergyUnit::Joule),
            "kj" | "kilojoule" => Some(EnergyUnit::Kilojoule),
            "cal" | "calorie" => Some(EnergyUnit::Calorie),
            "kcal" | "kilocalorie" => Some(EnergyUnit::KiloCalorie),
            "wh" | "watt-hour" => Some(EnergyUnit::WattHour),
            "kwh" | "kilowatt-hour" => Some(EnergyUnit::KilowattHour),
            "btu" => Some(EnergyUnit::Btu),
            _ => None,
        }
    }

    fn rule(self) -> ConversionRule {
        let joules = match self {
            EnergyUnit::Joule => 1.0,
            EnergyUnit::Kilojoule => 1000.0,
            EnergyUnit::Calorie => 4.184,
            EnergyUnit::KiloCalorie => 4184.0,
            EnergyUnit::WattHour => 3600.0,
            EnergyUnit::KilowattHour => 3_600_000.0,
            EnergyUnit::Btu => 1055.06,
        };
        ConversionRule::Linear(joules)
    }

    fn decimals(self, value: f64) -> usize {
        match self {
            EnergyUnit::Joule => {
                if value.abs() >= 1000.0 {
                    0
                } else {
                    magnitude_decimals(value, 4, 2)
                }
            }
            EnergyUnit::WattHour | EnergyUnit::KilowattHour => magnitude_decimals(value, 6, 3),
            _ => magnitude_decimals(value, 4, 2),
        }
    }
}
