//! WHO 성장 백분위 계산 회귀 테스트.
use calculator_toolbox::growth::{
    self, calculate, calculate_baby_growth, calculate_checked,
    percentile::reference_at,
    tables::{table_for, BOYS_HEIGHT, GIRLS_HEIGHT},
    BabyGrowthInput, Category, Gender, GrowthError, GrowthIssue, Measurement, Overall,
    PercentileBand, Recommendation,
};
use calculator_toolbox::i18n::Translator;

fn assert_close(actual: f64, expected: f64, rel: f64) {
    let tol = rel * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

fn boy(age_months: f64, height_cm: f64, weight_kg: f64) -> BabyGrowthInput {
    BabyGrowthInput {
        gender: Gender::Male,
        age_months,
        height_cm,
        weight_kg,
    }
}

#[test]
fn median_boy_at_one_year() {
    let input = boy(12.0, 75.7, 9.6);
    let ru = calculate_baby_growth(&input, &Translator::new("ru"));
    assert_eq!(ru.height_percentile, 63);
    assert_eq!(ru.weight_percentile, 63);
    assert_eq!(ru.height_category, "В пределах нормы");
    assert_eq!(ru.height_color, "green");
    assert_eq!(ru.overall_assessment, "Развитие соответствует норме");

    let en = calculate_baby_growth(&input, &Translator::new("en"));
    assert_eq!(en.weight_category, "Normal range");
    assert_eq!(en.weight_comment, "Weight is within age norms.");
    assert_eq!(
        en.recommendations,
        vec![
            "Continue monitoring child development",
            "Maintain a healthy lifestyle",
            "Regularly measure height and weight",
            "Keep a development diary",
        ]
    );
}

#[test]
fn checkpoint_ages_use_table_rows_exactly() {
    let refs = reference_at(&BOYS_HEIGHT, 12.0);
    assert_eq!(refs.p50, 75.7);
    assert_eq!(refs, BOYS_HEIGHT[4].values);
}

#[test]
fn between_checkpoints_is_linear() {
    // 여아 신장 중앙값 24개월 85.7, 36개월 93.9 사이 1/4 지점
    let lo = GIRLS_HEIGHT[5].values.p50;
    let hi = GIRLS_HEIGHT[6].values.p50;
    let refs = reference_at(&GIRLS_HEIGHT, 27.0);
    assert_close(refs.p50, lo + 0.25 * (hi - lo), 1e-12);
}

#[test]
fn ages_outside_table_are_clamped() {
    let table = table_for(Gender::Female, Measurement::Weight);
    assert_eq!(reference_at(table, -1.0), table[0].values);
    assert_eq!(reference_at(table, 0.0), table[0].values);
    assert_eq!(reference_at(table, 60.0), table[8].values);
    assert_eq!(reference_at(table, 61.5), table[8].values);
}

#[test]
fn percentile_never_decreases_with_height() {
    let mut last = 0;
    let mut h = 60.0;
    while h <= 120.0 {
        let r = calculate(&boy(30.0, h, 13.0));
        let p = r.height.band.rounded();
        assert!(p >= last, "height {h}: {p} < {last}");
        last = p;
        h += 0.5;
    }
    assert_eq!(last, 97);
}

#[test]
fn very_short_child_needs_specialist() {
    let a = calculate(&boy(12.0, 60.0, 9.6));
    assert_eq!(a.height.band, PercentileBand::Below5);
    assert_eq!(a.height.score(), 3.0);
    assert_eq!(a.height.category, Category::BelowNormal);
    assert_eq!(a.overall, Overall::SpecialistAttention);
    assert_eq!(
        a.recommendations,
        vec![
            Recommendation::ConsultPediatrician,
            Recommendation::MonitorNutritionAndRoutine,
            Recommendation::MeasureRegularly,
            Recommendation::KeepDiary,
        ]
    );
}

#[test]
fn heavy_child_gets_pediatrician_consult() {
    let a = calculate(&boy(12.0, 75.7, 15.0));
    assert_eq!(a.weight.band, PercentileBand::Above95);
    assert_eq!(a.weight.category, Category::AboveNormal);
    assert_eq!(a.overall, Overall::ConsultPediatrician);
    assert_eq!(a.recommendations[0], Recommendation::ConsultToRuleOutPathology);
}

#[test]
fn slight_deviation_is_minor() {
    let a = calculate(&boy(12.0, 72.0, 9.6));
    assert_eq!(a.height.band, PercentileBand::From5To25);
    assert_eq!(a.height.category, Category::BelowAverage);
    assert_eq!(a.overall, Overall::MinorDeviation);
}

#[test]
fn validation_bounds_are_inclusive() {
    assert!(growth::validate_baby_growth_input(&boy(0.0, 30.0, 1.0)).is_empty());
    assert!(growth::validate_baby_growth_input(&boy(60.0, 150.0, 50.0)).is_empty());
    assert_eq!(
        growth::validate_baby_growth_input(&boy(72.0, 29.0, 51.0)),
        vec![
            GrowthIssue::AgeOutOfRange,
            GrowthIssue::HeightOutOfRange,
            GrowthIssue::WeightOutOfRange,
        ]
    );
    assert_eq!(
        growth::validate_baby_growth_input(&boy(f64::NAN, 80.0, 10.0)),
        vec![GrowthIssue::AgeOutOfRange]
    );
}

#[test]
fn validation_messages_are_localized() {
    let msgs = growth::validate_localized(&boy(72.0, 80.0, 10.0), &Translator::new("ru"));
    assert_eq!(msgs, vec!["Возраст должен быть от 0 до 60 месяцев"]);
}

#[test]
fn checked_calculation_rejects_invalid_input() {
    let err = calculate_checked(&boy(72.0, 80.0, 10.0)).unwrap_err();
    assert_eq!(err, GrowthError::Invalid(vec![GrowthIssue::AgeOutOfRange]));
    assert!(calculate_checked(&boy(24.0, 87.1, 12.2)).is_ok());
}

#[test]
fn result_serializes_to_toml() {
    let r = calculate_baby_growth(&boy(12.0, 75.7, 9.6), &Translator::new("en"));
    let text = toml::to_string_pretty(&r).expect("serialize");
    assert!(text.contains("height_percentile = 63"), "{text}");
}

#[test]
fn age_helpers() {
    assert_eq!(growth::years_to_months(1.5), 18);
    assert_eq!(growth::months_to_years(18.0), 1.5);
    assert_eq!(growth::months_to_years(7.0), 0.6);
}
