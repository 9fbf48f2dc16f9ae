use serde::Serialize;

use super::assessment::{calculate, GrowthAssessment, MeasurementAssessment};
use super::BabyGrowthInput;
use crate::i18n::Translator;

/// 화면/CLI에 그대로 보여줄 현지화된 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BabyGrowthResult {
    pub height_percentile: u32,
    pub weight_percentile: u32,
    pub height_category: String,
    pub weight_category: String,
    pub height_color: &'static str,
    pub weight_color: &'static str,
    pub height_comment: String,
    pub weight_comment: String,
    pub recommendations: Vec<String>,
    pub overall_assessment: String,
}

/// 계산 후 번역기 언어로 문자열을 채운다.
pub fn calculate_baby_growth(input: &BabyGrowthInput, tr: &Translator) -> BabyGrowthResult {
    render(&calculate(input), tr)
}

pub fn render(a: &GrowthAssessment, tr: &Translator) -> BabyGrowthResult {
    BabyGrowthResult {
        height_percentile: a.height.band.rounded(),
        weight_percentile: a.weight.band.rounded(),
        height_category: category_text(&a.height, tr),
        weight_category: category_text(&a.weight, tr),
        height_color: a.height.category.color(),
        weight_color: a.weight.category.color(),
        height_comment: comment_text(&a.height, tr),
        weight_comment: comment_text(&a.weight, tr),
        recommendations: a
            .recommendations
            .iter()
            .map(|r| tr.t(&format!("growth.recommendation.{}", r.key())))
            .collect(),
        overall_assessment: tr.t(&format!("growth.overall.{}", a.overall.key())),
    }
}

fn category_text(m: &MeasurementAssessment, tr: &Translator) -> String {
    tr.t(&format!("growth.category.{}", m.category.key()))
}

// 신장/체중은 같은 분류라도 문구가 다르다.
fn comment_text(m: &MeasurementAssessment, tr: &Translator) -> String {
    tr.t(&format!(
        "growth.comment.{}.{}",
        m.measurement.key(),
        m.category.key()
    ))
}
