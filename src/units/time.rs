use serde::{Deserialize, Serialize};

use super::{ConversionRule, UnitSet};
use crate::quantity::Dimension;

/// 시간 단위. 내부 기준은 초.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
}

impl UnitSet for TimeUnit {
    const DIMENSION: Dimension = Dimension::Time;
    const ALL: &'static [Self] = &[
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
    ];

    fn code(self) -> &'static str {
        match self {
            TimeUnit::Second => "s",
            TimeUnit::Minute => "min",
            TimeUnit::Hour => "h",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "s" | "sec" | "second" => Some(TimeUnit::Second),
            "min" | "minute" => Some(TimeUnit::Minute),
            "h" | "hr" | "hour" => Some(TimeUnit::Hour),
            "d" | "day" => Some(TimeUnit::Day),
            "wk" | "week" => Some(TimeUnit::Week),
            _ => None,
        }
    }

    fn rule(self) -> ConversionRule {
        let seconds = match self {
            TimeUnit::Second => 1.0,
            TimeUnit::Minute => 60.0,
            TimeUnit::Hour => 3600.0,
            TimeUnit::Day => 86_400.0,
            TimeUnit::Week => 604_800.0,
        };
        ConversionRule::Linear(seconds)
    }
}
