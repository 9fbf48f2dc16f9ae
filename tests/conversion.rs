//! 차원별 단위 변환 회귀 테스트.
use calculator_toolbox::conversion::{
    self, common_conversions, convert, convert_named, validate_conversion_input, ConversionError,
    ConversionIssue,
};
use calculator_toolbox::i18n::{Language, Translator};
use calculator_toolbox::quantity::{Dimension, Quantity};
use calculator_toolbox::units::*;

fn assert_close(actual: f64, expected: f64, rel: f64) {
    let tol = rel * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

#[test]
fn degrees_to_radians() {
    let r = convert(180.0, AngleUnit::Degree, AngleUnit::Radian).expect("convert");
    assert_close(r.value, std::f64::consts::PI, 1e-12);
    assert_eq!(r.formatted, "3.1416");
}

#[test]
fn identity_returns_input_unchanged() {
    let r = convert(42.125, MassUnit::Pound, MassUnit::Pound).expect("convert");
    assert_eq!(r.value, 42.125);
}

#[test]
fn linear_round_trip_is_stable() {
    let there = convert(3.7, VolumeUnit::Gallon, VolumeUnit::Milliliter).expect("convert");
    let back = convert(there.value, VolumeUnit::Milliliter, VolumeUnit::Gallon).expect("convert");
    assert_close(back.value, 3.7, 1e-12);
}

#[test]
fn every_unit_is_its_own_identity() {
    for dimension in Dimension::ALL {
        for code in dimension.unit_codes() {
            for x in [0.0, -17.25, 42.125, 1.0e9] {
                let r = convert_named(dimension, x, code, code).expect("convert");
                assert_eq!(r.value, x, "{} {code}", dimension.name());
            }
        }
    }
}

#[test]
fn every_unit_pair_round_trips() {
    for dimension in Dimension::ALL {
        let codes = dimension.unit_codes();
        for from in &codes {
            for to in &codes {
                for x in [-40.0, 0.5, 123.456, 98_765.4321] {
                    let there = convert_named(dimension, x, from, to).expect("convert");
                    let back = convert_named(dimension, there.value, to, from).expect("convert");
                    let tol = 1e-9 * x.abs().max(1.0);
                    assert!(
                        (back.value - x).abs() <= tol,
                        "{} {from}->{to}->{from}: {x} became {}",
                        dimension.name(),
                        back.value
                    );
                }
            }
        }
    }
}

#[test]
fn energy_kcal_to_kj() {
    let r = convert(1.0, EnergyUnit::KiloCalorie, EnergyUnit::Kilojoule).expect("convert");
    assert_close(r.value, 4.184, 1e-12);
}

#[test]
fn pressure_atm_to_psi() {
    let r = convert(1.0, PressureUnit::Atm, PressureUnit::Psi).expect("convert");
    assert_close(r.value, 14.6959, 1e-4);
}

#[test]
fn speed_knot_to_kmh() {
    let r = convert(10.0, SpeedUnit::Knot, SpeedUnit::KilometerPerHour).expect("convert");
    assert_close(r.value, 18.52, 1e-9);
}

#[test]
fn time_week_to_hours() {
    let r = convert(1.0, TimeUnit::Week, TimeUnit::Hour).expect("convert");
    assert_close(r.value, 168.0, 1e-12);
}

#[test]
fn area_hectare_to_square_meters() {
    let r = convert(2.5, AreaUnit::Hectare, AreaUnit::SquareMeter).expect("convert");
    assert_close(r.value, 25_000.0, 1e-12);
}

#[test]
fn negative_values_are_converted_without_sign_check() {
    let r = convert(-3.0, LengthUnit::Kilometer, LengthUnit::Meter).expect("convert");
    assert_close(r.value, -3000.0, 1e-12);
}

#[test]
fn non_finite_input_is_an_error() {
    let err = convert(f64::NAN, LengthUnit::Meter, LengthUnit::Foot).unwrap_err();
    assert!(matches!(err, ConversionError::NonFinite(_)));
}

#[test]
fn unknown_unit_code_is_unsupported() {
    let err = convert_named(Dimension::Mass, 1.0, "stone", "kg").unwrap_err();
    assert_eq!(
        err,
        ConversionError::UnsupportedUnit {
            dimension: Dimension::Mass,
            unit: "stone".into(),
        }
    );
    // 다른 차원의 단위도 거부한다.
    assert!(convert_named(Dimension::Length, 1.0, "kg", "m").is_err());
}

#[test]
fn named_conversion_accepts_aliases() {
    let r = convert_named(Dimension::Length, 12.0, "inch", "ft").expect("convert");
    assert_eq!(r.from, "in");
    assert_eq!(r.unit, "ft");
    assert_close(r.value, 1.0, 1e-12);
}

#[test]
fn common_conversions_skip_source_and_keep_order() {
    let rows = common_conversions(1.0, EnergyUnit::Kilojoule).expect("common");
    let codes: Vec<&str> = rows.iter().map(|r| r.unit.code()).collect();
    assert_eq!(codes, vec!["J", "cal", "kcal", "Wh", "kWh", "Btu"]);
    assert_close(rows[0].value, 1000.0, 1e-12);
}

#[test]
fn common_conversions_named_matches_typed() {
    let named =
        conversion::common_conversions_named(Dimension::Speed, 36.0, "km/h").expect("common");
    assert_eq!(named.len(), 3);
    assert_eq!(named[0].unit, "m/s");
    assert_close(named[0].value, 10.0, 1e-12);
}

#[test]
fn quantity_wraps_convert() {
    let q = Quantity::new(1.0, LengthUnit::Mile);
    assert_close(q.base_value(), 1609.34, 1e-12);
    let r = q.to(LengthUnit::Kilometer).expect("convert");
    assert_close(r.value, 1.60934, 1e-12);
}

#[test]
fn validation_flags_out_of_range_values() {
    assert!(validate_conversion_input(5.0, VolumeUnit::Liter).is_empty());
    assert_eq!(
        validate_conversion_input(-1.0, VolumeUnit::Liter),
        vec![ConversionIssue::BelowMinimum { min: 0.0 }]
    );
    assert_eq!(
        validate_conversion_input(1e13, TimeUnit::Second),
        vec![ConversionIssue::TooLarge {
            max: conversion::MAX_INPUT_MAGNITUDE
        }]
    );
    // 각도는 음수가 허용된다.
    assert!(validate_conversion_input(-90.0, AngleUnit::Degree).is_empty());
}

#[test]
fn linear_formula_shows_ratio() {
    assert_eq!(
        conversion::conversion_formula(LengthUnit::Foot, LengthUnit::Inch),
        "1 ft = 12 in"
    );
}

#[test]
fn display_uses_locale_separator_and_symbol() {
    let r = convert(1.5, MassUnit::Kilogram, MassUnit::Gram).expect("convert");
    assert_eq!(r.display(&Translator::new("en")), "1500 g");
    let r = convert(0.5, PressureUnit::Bar, PressureUnit::Atm).expect("convert");
    let ru = r.display(&Translator::new("ru"));
    assert!(ru.contains(','), "{ru}");
    assert_eq!(
        conversion::format_number(2.25, 2, Language::Ru),
        "2,25"
    );
}

#[test]
fn every_dimension_lists_units() {
    for d in Dimension::ALL {
        let codes = d.unit_codes();
        assert!(codes.len() >= 4, "{d}: {codes:?}");
        for code in &codes {
            convert_named(d, 1.0, code, codes[0]).expect("listed code converts");
        }
    }
}
