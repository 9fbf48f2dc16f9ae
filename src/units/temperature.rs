use serde::{Deserialize, Serialize};

use super::{magnitude_decimals, ConversionRule, UnitSet};
use crate::quantity::Dimension;

/// 온도 단위를 정의한다. 내부 기준은 섭씨이며 모든 단위가 affine 규칙을 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
}

fn identity(v: f64) -> f64 {
    v
}

fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

fn kelvin_to_celsius(k: f64) -> f64 {
    k - 273.15
}

fn celsius_to_kelvin(c: f64) -> f64 {
    c + 273.15
}

fn rankine_to_celsius(r: f64) -> f64 {
    (r - 491.67) * 5.0 / 9.0
}

fn celsius_to_rankine(c: f64) -> f64 {
    (c + 273.15) * 9.0 / 5.0
}

impl UnitSet for TemperatureUnit {
    const DIMENSION: Dimension = Dimension::Temperature;
    const ALL: &'static [Self] = &[
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
        TemperatureUnit::Rankine,
    ];

    fn code(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Rankine => "R",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "c" | "celsius" | "°c" => Some(TemperatureUnit::Celsius),
            "f" | "fahrenheit" | "°f" => Some(TemperatureUnit::Fahrenheit),
            "k" | "kelvin" => Some(TemperatureUnit::Kelvin),
            "r" | "rankine" | "°r" => Some(TemperatureUnit::Rankine),
            _ => None,
        }
    }

    fn rule(self) -> ConversionRule {
        let (to_base, from_base): (fn(f64) -> f64, fn(f64) -> f64) = match self {
            TemperatureUnit::Celsius => (identity, identity),
            TemperatureUnit::Fahrenheit => (fahrenheit_to_celsius, celsius_to_fahrenheit),
            TemperatureUnit::Kelvin => (kelvin_to_celsius, celsius_to_kelvin),
            TemperatureUnit::Rankine => (rankine_to_celsius, celsius_to_rankine),
        };
        ConversionRule::Affine { to_base, from_base }
    }

    fn decimals(self, value: f64) -> usize {
        magnitude_decimals(value, 2, 1)
    }

    /// 절대영도. 이보다 낮은 입력은 검증 단계에서 거부한다.
    fn lower_bound(self) -> Option<f64> {
        Some(match self {
            TemperatureUnit::Celsius => -273.15,
            TemperatureUnit::Fahrenheit => -459.67,
            TemperatureUnit::Kelvin | TemperatureUnit::Rankine => 0.0,
        })
    }

    fn affine_formula(self, to: Self) -> Option<&'static str> {
        use TemperatureUnit::*;
        Some(match (self, to) {
            (Celsius, Fahrenheit) => "F = C × 9/5 + 32",
            (Fahrenheit, Celsius) => "C = (F − 32) × 5/9",
            (Celsius, Kelvin) => "K = C + 273.15",
            (Kelvin, Celsius) => "C = K − 273.15",
            (Fahrenheit, Kelvin) => "K = (F − 32) × 5/9 + 273.15",
            (Kelvin, Fahrenheit) => "F = (K − 273.15) × 9/5 + 32",
            (Celsius, Rankine) => "R = (C + 273.15) × 9/5",
            (Rankine, Celsius) => "C = (R − 491.67) × 5/9",
            (Fahrenheit, Rankine) => "R = F + 459.67",
            (Rankine, Fahrenheit) => "F = R − 459.67",
            (Kelvin, Rankine) => "R = K × 9/5",
            (Rankine, Kelvin) => "K = R × 5/9",
            _ => return None,
        })
    }
}
