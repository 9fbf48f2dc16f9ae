//! 영유아 성장 백분위 계산기 (WHO 0-5세 기준).
//!
//! 입력 검증 → `assessment::calculate`(태그) → `report::render`(현지화 문자열)
//! 순서로 사용한다.

pub mod assessment;
pub mod percentile;
pub mod report;
pub mod tables;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::i18n::Translator;

pub use assessment::{calculate, Category, GrowthAssessment, Overall, Recommendation};
pub use percentile::PercentileBand;
pub use report::{calculate_baby_growth, BabyGrowthResult};

pub const MIN_AGE_MONTHS: f64 = 0.0;
pub const MAX_AGE_MONTHS: f64 = 60.0;
pub const MIN_HEIGHT_CM: f64 = 30.0;
pub const MAX_HEIGHT_CM: f64 = 150.0;
pub const MIN_WEIGHT_KG: f64 = 1.0;
pub const MAX_WEIGHT_KG: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "boy" => Some(Gender::Male),
            "female" | "f" | "girl" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// 측정 항목
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measurement {
    Height,
    Weight,
}

impl Measurement {
    pub fn key(self) -> &'static str {
        match self {
            Measurement::Height => "height",
            Measurement::Weight => "weight",
        }
    }
}

/// 계산 입력. 신장은 cm, 체중은 kg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BabyGrowthInput {
    pub gender: Gender,
    pub age_months: f64,
    pub height_cm: f64,
    pub weight_kg: f64,
}

/// 입력 범위 검증에서 걸리는 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrowthIssue {
    AgeOutOfRange,
    HeightOutOfRange,
    WeightOutOfRange,
}

impl GrowthIssue {
    pub fn message(self, tr: &Translator) -> String {
        let (key, min, max) = match self {
            GrowthIssue::AgeOutOfRange => ("growth.validation.age", MIN_AGE_MONTHS, MAX_AGE_MONTHS),
            GrowthIssue::HeightOutOfRange => {
                ("growth.validation.height", MIN_HEIGHT_CM, MAX_HEIGHT_CM)
            }
            GrowthIssue::WeightOutOfRange => {
                ("growth.validation.weight", MIN_WEIGHT_KG, MAX_WEIGHT_KG)
            }
        };
        tr.format(key, &[("min", min.to_string()), ("max", max.to_string())])
    }
}

impl std::fmt::Display for GrowthIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrowthIssue::AgeOutOfRange => write!(f, "age must be {MIN_AGE_MONTHS}-{MAX_AGE_MONTHS} months"),
            GrowthIssue::HeightOutOfRange => write!(f, "height must be {MIN_HEIGHT_CM}-{MAX_HEIGHT_CM} cm"),
            GrowthIssue::WeightOutOfRange => write!(f, "weight must be {MIN_WEIGHT_KG}-{MAX_WEIGHT_KG} kg"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GrowthError {
    #[error("invalid growth input: {}", join_issues(.0))]
    Invalid(Vec<GrowthIssue>),
}

fn join_issues(issues: &[GrowthIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// 범위를 벗어난 항목 목록. 비어 있으면 유효하다. NaN은 범위 밖으로 본다.
pub fn validate_baby_growth_input(input: &BabyGrowthInput) -> Vec<GrowthIssue> {
    let mut issues = Vec::new();
    if !(MIN_AGE_MONTHS..=MAX_AGE_MONTHS).contains(&input.age_months) {
        issues.push(GrowthIssue::AgeOutOfRange);
    }
    if !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&input.height_cm) {
        issues.push(GrowthIssue::HeightOutOfRange);
    }
    if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&input.weight_kg) {
        issues.push(GrowthIssue::WeightOutOfRange);
    }
    issues
}

/// 검증 메시지를 번역기 언어로 돌려준다.
pub fn validate_localized(input: &BabyGrowthInput, tr: &Translator) -> Vec<String> {
    validate_baby_growth_input(input)
        .into_iter()
        .map(|i| i.message(tr))
        .collect()
}

/// 검증 후 계산. 잘못된 입력은 계산하지 않고 오류로 돌려준다.
pub fn calculate_checked(input: &BabyGrowthInput) -> Result<GrowthAssessment, GrowthError> {
    let issues = validate_baby_growth_input(input);
    if !issues.is_empty() {
        warn!(?issues, "rejected growth input");
        return Err(GrowthError::Invalid(issues));
    }
    Ok(calculate(input))
}

/// 나이(년) → 개월, 반올림.
pub fn years_to_months(years: f64) -> u32 {
    (years * 12.0).round().max(0.0) as u32
}

/// 개월 → 나이(년), 소수 첫째 자리까지.
pub fn months_to_years(months: f64) -> f64 {
    (months / 12.0 * 10.0).round() / 10.0
}
