//! 온도(아핀 변환) 회귀 테스트.
use calculator_toolbox::conversion::{
    conversion_formula, convert, validate_conversion_input, ConversionIssue,
};
use calculator_toolbox::i18n::Translator;
use calculator_toolbox::units::TemperatureUnit::{self, *};

fn assert_close(actual: f64, expected: f64, rel: f64) {
    let tol = rel * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

fn c(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    convert(value, from, to).expect("convert").value
}

#[test]
fn freezing_and_boiling_points() {
    assert_close(c(0.0, Celsius, Fahrenheit), 32.0, 1e-12);
    assert_close(c(100.0, Celsius, Fahrenheit), 212.0, 1e-12);
    assert_close(c(0.0, Celsius, Kelvin), 273.15, 1e-12);
    assert_close(c(0.0, Celsius, Rankine), 491.67, 1e-12);
}

#[test]
fn minus_forty_is_shared() {
    assert_close(c(-40.0, Fahrenheit, Celsius), -40.0, 1e-12);
}

#[test]
fn absolute_zero_agrees_across_scales() {
    assert_close(c(0.0, Kelvin, Celsius), -273.15, 1e-12);
    assert_close(c(0.0, Kelvin, Fahrenheit), -459.67, 1e-12);
    assert_close(c(0.0, Rankine, Kelvin), 0.0, 1e-12);
}

#[test]
fn round_trip_through_every_pair() {
    for from in [Celsius, Fahrenheit, Kelvin, Rankine] {
        for to in [Celsius, Fahrenheit, Kelvin, Rankine] {
            let back = c(c(36.6, from, to), to, from);
            assert_close(back, 36.6, 1e-12);
        }
    }
}

#[test]
fn below_absolute_zero_is_flagged() {
    let issues = validate_conversion_input(-300.0, Celsius);
    assert!(matches!(
        issues.as_slice(),
        [ConversionIssue::BelowMinimum { .. }]
    ));
    assert!(validate_conversion_input(-273.15, Celsius).is_empty());
}

#[test]
fn formula_is_affine_text() {
    assert_eq!(conversion_formula(Celsius, Fahrenheit), "F = C × 9/5 + 32");
}

#[test]
fn localized_display() {
    let r = convert(100.0, Celsius, Fahrenheit).expect("convert");
    assert_eq!(r.formatted, "212");
    assert_eq!(r.display(&Translator::new("en")), "212 °F");
}
