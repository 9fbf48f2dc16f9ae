use serde::{Deserialize, Serialize};

use super::{magnitude_decimals, ConversionRule, UnitSet};
use crate::quantity::Dimension;

/// 압력 단위를 정의한다. 내부 기준은 Pa(절대압)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    Bar,
    Atm,
    MmHg,
    Psi,
}

const PA_PER_ATM: f64 = 101_325.0;
const PA_PER_MMHG: f64 = 133.322;

impl UnitSet for PressureUnit {
    const DIMENSION: Dimension = Dimension::Pressure;
    const ALL: &'static [Self] = &[
        PressureUnit::Pascal,
        PressureUnit::KiloPascal,
        PressureUnit::Bar,
        PressureUnit::Atm,
        PressureUnit::MmHg,
        PressureUnit::Psi,
    ];

    fn code(self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::Bar => "bar",
            PressureUnit::Atm => "atm",
            PressureUnit::MmHg => "mmHg",
            PressureUnit::Psi => "psi",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pa" | "pascal" => Some(PressureUnit::Pascal),
            "kpa" | "kilopascal" => Some(PressureUnit::KiloPascal),
            "bar" => Some(PressureUnit::Bar),
            "atm" => Some(PressureUnit::Atm),
            "mmhg" | "torr" => Some(PressureUnit::MmHg),
            "psi" => Some(PressureUnit::Psi),
            _ => None,
        }
    }

    fn rule(self) -> ConversionRule {
        let pa = match self {
            PressureUnit::Pascal => 1.0,
            PressureUnit::KiloPascal => 1000.0,
            PressureUnit::Bar => 100_000.0,
            PressureUnit::Atm => PA_PER_ATM,
            PressureUnit::MmHg => PA_PER_MMHG,
            PressureUnit::Psi => 6_894.76,
        };
        ConversionRule::Linear(pa)
    }

    fn decimals(self, value: f64) -> usize {
        match self {
            PressureUnit::Pascal => {
                if value.abs() >= 1000.0 {
                    0
                } else {
                    magnitude_decimals(value, 4, 2)
                }
            }
            PressureUnit::Atm | PressureUnit::Bar => magnitude_decimals(value, 6, 4),
            _ => magnitude_decimals(value, 4, 2),
        }
    }
}
