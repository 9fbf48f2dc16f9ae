use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::{ConversionRule, UnitSet};
use crate::quantity::Dimension;

/// 각도 단위. 내부 기준은 라디안이다. 방향 표시를 위해 음수를 허용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleUnit {
    Degree,
    Radian,
    Revolution,
    Gradian,
}

impl UnitSet for AngleUnit {
    const DIMENSION: Dimension = Dimension::Angle;
    const ALL: &'static [Self] = &[
        AngleUnit::Degree,
        AngleUnit::Radian,
        AngleUnit::Revolution,
        AngleUnit::Gradian,
    ];

    fn code(self) -> &'static str {
        match self {
            AngleUnit::Degree => "deg",
            AngleUnit::Radian => "rad",
            AngleUnit::Revolution => "rev",
            AngleUnit::Gradian => "grad",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "deg" | "degree" | "°" => Some(AngleUnit::Degree),
            "rad" | "radian" => Some(AngleUnit::Radian),
            "rev" | "turn" | "revolution" => Some(AngleUnit::Revolution),
            "grad" | "gon" | "gradian" => Some(AngleUnit::Gradian),
            _ => None,
        }
    }

    fn rule(self) -> ConversionRule {
        let radians = match self {
            AngleUnit::Degree => PI / 180.0,
            AngleUnit::Radian => 1.0,
            AngleUnit::Revolution => 2.0 * PI,
            AngleUnit::Gradian => PI / 200.0,
        };
        ConversionRule::Linear(radians)
    }

    fn decimals(self, value: f64) -> usize {
        let v = value.abs();
        match self {
            AngleUnit::Degree | AngleUnit::Gradian => {
                if v < 0.01 {
                    6
                } else if v < 1.0 {
                    4
                } else {
                    2
                }
            }
            AngleUnit::Radian => {
                if v < 0.001 {
                    8
                } else if v < 0.01 {
                    6
                } else {
                    4
                }
            }
            AngleUnit::Revolution => {
                if v < 0.001 {
                    6
                } else if v < 0.01 {
                    5
                } else {
                    3
                }
            }
        }
    }

    fn lower_bound(self) -> Option<f64> {
        None
    }
}
