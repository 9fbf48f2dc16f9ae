//! 순수 분류 로직. 문자열은 만들지 않고 태그만 돌려준다(표시는 `report`).

use tracing::debug;

use super::percentile::{band_for, reference_at, PercentileBand};
use super::tables::{table_for, PercentileValues};
use super::{BabyGrowthInput, Measurement};

/// 구간 점수에서 정해지는 다섯 단계 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    BelowNormal,
    BelowAverage,
    Normal,
    AboveAverage,
    AboveNormal,
}

impl Category {
    pub fn from_score(score: f64) -> Self {
        if score < 5.0 {
            Category::BelowNormal
        } else if score < 25.0 {
            Category::BelowAverage
        } else if score < 75.0 {
            Category::Normal
        } else if score < 95.0 {
            Category::AboveAverage
        } else {
            Category::AboveNormal
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Category::BelowNormal => "below_normal",
            Category::BelowAverage => "below_average",
            Category::Normal => "normal",
            Category::AboveAverage => "above_average",
            Category::AboveNormal => "above_normal",
        }
    }

    /// 결과 카드 색상
    pub fn color(self) -> &'static str {
        match self {
            Category::BelowNormal => "red",
            Category::BelowAverage => "orange",
            Category::Normal => "green",
            Category::AboveAverage => "yellow",
            Category::AboveNormal => "blue",
        }
    }
}

/// 신장/체중을 함께 본 종합 판정.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overall {
    /// 어느 한쪽이라도 5 백분위 미만
    SpecialistAttention,
    /// 어느 한쪽이라도 95 백분위 초과
    ConsultPediatrician,
    /// 둘 다 25-75 범위
    Normal,
    MinorDeviation,
}

impl Overall {
    pub fn key(self) -> &'static str {
        match self {
            Overall::SpecialistAttention => "specialist_attention",
            Overall::ConsultPediatrician => "consult_pediatrician",
            Overall::Normal => "normal",
            Overall::MinorDeviation => "minor_deviation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    ConsultPediatrician,
    MonitorNutritionAndRoutine,
    ConsultToRuleOutPathology,
    BalancedNutrition,
    ContinueMonitoring,
    HealthyLifestyle,
    MeasureRegularly,
    KeepDiary,
}

impl Recommendation {
    pub fn key(self) -> &'static str {
        match self {
            Recommendation::ConsultPediatrician => "consult_pediatrician",
            Recommendation::MonitorNutritionAndRoutine => "monitor_nutrition_routine",
            Recommendation::ConsultToRuleOutPathology => "consult_rule_out",
            Recommendation::BalancedNutrition => "balanced_nutrition",
            Recommendation::ContinueMonitoring => "continue_monitoring",
            Recommendation::HealthyLifestyle => "healthy_lifestyle",
            Recommendation::MeasureRegularly => "measure_regularly",
            Recommendation::KeepDiary => "keep_diary",
        }
    }
}

/// 측정 항목 하나의 판정 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementAssessment {
    pub measurement: Measurement,
    pub value: f64,
    /// 해당 나이로 보간한 기준값
    pub reference: PercentileValues,
    pub band: PercentileBand,
    pub category: Category,
}

impl MeasurementAssessment {
    pub fn score(&self) -> f64 {
        self.band.score()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrowthAssessment {
    pub input: BabyGrowthInput,
    pub height: MeasurementAssessment,
    pub weight: MeasurementAssessment,
    pub overall: Overall,
    pub recommendations: Vec<Recommendation>,
}

pub fn assess_measurement(input: &BabyGrowthInput, measurement: Measurement) -> MeasurementAssessment {
    let value = match measurement {
        Measurement::Height => input.height_cm,
        Measurement::Weight => input.weight_kg,
    };
    let reference = reference_at(table_for(input.gender, measurement), input.age_months);
    let band = band_for(&reference, value);
    MeasurementAssessment {
        measurement,
        value,
        reference,
        band,
        category: Category::from_score(band.score()),
    }
}

pub fn overall_for(height: PercentileBand, weight: PercentileBand) -> Overall {
    let (h, w) = (height.score(), weight.score());
    if h < 5.0 || w < 5.0 {
        Overall::SpecialistAttention
    } else if h > 95.0 || w > 95.0 {
        Overall::ConsultPediatrician
    } else if (25.0..=75.0).contains(&h) && (25.0..=75.0).contains(&w) {
        Overall::Normal
    } else {
        Overall::MinorDeviation
    }
}

/// 낮음/높음/정상 분기에 따른 두 항목 + 항상 붙는 두 항목.
pub fn recommendations_for(height: PercentileBand, weight: PercentileBand) -> Vec<Recommendation> {
    let (h, w) = (height.score(), weight.score());
    let mut out = if h < 5.0 || w < 5.0 {
        vec![
            Recommendation::ConsultPediatrician,
            Recommendation::MonitorNutritionAndRoutine,
        ]
    } else if h > 95.0 || w > 95.0 {
        vec![
            Recommendation::ConsultToRuleOutPathology,
            Recommendation::BalancedNutrition,
        ]
    } else {
        vec![
            Recommendation::ContinueMonitoring,
            Recommendation::HealthyLifestyle,
        ]
    };
    out.push(Recommendation::MeasureRegularly);
    out.push(Recommendation::KeepDiary);
    out
}

/// 검증을 통과한 입력에 대해 신장/체중 백분위를 분류한다.
pub fn calculate(input: &BabyGrowthInput) -> GrowthAssessment {
    let height = assess_measurement(input, Measurement::Height);
    let weight = assess_measurement(input, Measurement::Weight);
    let overall = overall_for(height.band, weight.band);
    debug!(
        gender = input.gender.code(),
        age_months = input.age_months,
        height_band = height.band.label(),
        weight_band = weight.band.label(),
        ?overall,
        "growth assessed"
    );
    GrowthAssessment {
        input: *input,
        height,
        weight,
        overall,
        recommendations: recommendations_for(height.band, weight.band),
    }
}
