use serde::{Deserialize, Serialize};

use crate::conversion::{self, ConversionError, ConversionResult};
use crate::units::UnitSet;

/// 다루는 물리량(차원) 종류를 나타낸다. 변환은 같은 차원 안에서만 정의된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Angle,
    Energy,
    Volume,
    Temperature,
    Length,
    Mass,
    Area,
    Pressure,
    Speed,
    Time,
}

impl Dimension {
    /// 메뉴/콤보박스 표시 순서.
    pub const ALL: [Dimension; 10] = [
        Dimension::Angle,
        Dimension::Energy,
        Dimension::Volume,
        Dimension::Temperature,
        Dimension::Length,
        Dimension::Mass,
        Dimension::Area,
        Dimension::Pressure,
        Dimension::Speed,
        Dimension::Time,
    ];

    /// 번역 키와 CLI 인자에 쓰는 소문자 이름.
    pub fn name(self) -> &'static str {
        match self {
            Dimension::Angle => "angle",
            Dimension::Energy => "energy",
            Dimension::Volume => "volume",
            Dimension::Temperature => "temperature",
            Dimension::Length => "length",
            Dimension::Mass => "mass",
            Dimension::Area => "area",
            Dimension::Pressure => "pressure",
            Dimension::Speed => "speed",
            Dimension::Time => "time",
        }
    }

    /// 이름 문자열을 차원으로 해석한다. `temp`, `weight` 같은 별칭도 받는다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "angle" => Some(Dimension::Angle),
            "energy" => Some(Dimension::Energy),
            "volume" => Some(Dimension::Volume),
            "temperature" | "temp" => Some(Dimension::Temperature),
            "length" | "distance" => Some(Dimension::Length),
            "mass" | "weight" => Some(Dimension::Mass),
            "area" => Some(Dimension::Area),
            "pressure" => Some(Dimension::Pressure),
            "speed" | "velocity" => Some(Dimension::Speed),
            "time" => Some(Dimension::Time),
            _ => None,
        }
    }

    /// 차원의 단위 코드를 정규 순서로 돌려준다.
    pub fn unit_codes(self) -> Vec<&'static str> {
        conversion::unit_codes(self)
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 값 + 단위 쌍. 단위 타입이 곧 차원을 고정하므로 다른 차원 간 변환은 컴파일되지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity<U: UnitSet> {
    pub value: f64,
    pub unit: U,
}

impl<U: UnitSet> Quantity<U> {
    pub fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }

    /// 같은 차원의 다른 단위로 환산한다.
    pub fn to(self, target: U) -> Result<ConversionResult<U>, ConversionError> {
        conversion::convert(self.value, self.unit, target)
    }

    /// 기준 단위 값으로 환산한다.
    pub fn base_value(self) -> f64 {
        self.unit.rule().to_base(self.value)
    }
}
