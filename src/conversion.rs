use thiserror::Error;
use tracing::{debug, warn};

use crate::i18n::{Language, Translator};
use crate::quantity::Dimension;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// 해당 차원에 없는 단위 문자열
    #[error("unsupported {dimension} unit: {unit}")]
    UnsupportedUnit { dimension: Dimension, unit: String },
    /// NaN/무한대 입력
    #[error("value must be finite, got {0}")]
    NonFinite(f64),
}

/// 변환 결과. 숫자 값은 반올림하지 않은 원본이고 `formatted`만 반올림된다.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult<U: UnitSet> {
    pub value: f64,
    pub from: U,
    pub unit: U,
    pub formatted: String,
}

impl<U: UnitSet> ConversionResult<U> {
    /// 로케일 소수점과 번역된 단위 기호를 붙인 표시 문자열.
    pub fn display(&self, tr: &Translator) -> String {
        let decimals = self.unit.decimals(self.value);
        format!(
            "{} {}",
            format_number(self.value, decimals, tr.language()),
            tr.unit_symbol(U::DIMENSION, self.unit.code())
        )
    }
}

/// 공통 환산 목록의 한 줄.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonConversion<U: UnitSet> {
    pub unit: U,
    pub value: f64,
    pub formatted: String,
}

/// 단위 코드 문자열로 받은 변환 결과. 타입 정보 없이 CLI/GUI에서 그대로 쓴다.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedConversion {
    pub dimension: Dimension,
    pub value: f64,
    pub from: &'static str,
    pub unit: &'static str,
    pub formatted: String,
}

/// `common_conversions_named`의 한 줄.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedCommonConversion {
    pub unit: &'static str,
    pub value: f64,
    pub formatted: String,
}

/// 변환 전 입력 검증에서 발견되는 문제.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionIssue {
    NonFinite,
    BelowMinimum { min: f64 },
    TooLarge { max: f64 },
}

impl ConversionIssue {
    /// 번역 키
    pub fn message_key(&self) -> &'static str {
        match self {
            ConversionIssue::NonFinite => "conversion.validation.non_finite",
            ConversionIssue::BelowMinimum { .. } => "conversion.validation.below_minimum",
            ConversionIssue::TooLarge { .. } => "conversion.validation.too_large",
        }
    }

    pub fn message(&self, tr: &Translator, unit_code: &str) -> String {
        let lang = tr.language();
        match self {
            ConversionIssue::NonFinite => tr.t(self.message_key()),
            ConversionIssue::BelowMinimum { min } => tr.format(
                self.message_key(),
                &[
                    ("min", format_number(*min, 2, lang)),
                    ("unit", unit_code.to_string()),
                ],
            ),
            ConversionIssue::TooLarge { max } => {
                tr.format(self.message_key(), &[("max", format!("{max:e}"))])
            }
        }
    }
}

/// 입력 크기 상한. 이보다 큰 값은 표시가 무의미하다.
pub const MAX_INPUT_MAGNITUDE: f64 = 1e12;

/// 같은 차원 안에서 값을 변환한다. 기준 단위를 거쳐 왕복한다.
pub fn convert<U: UnitSet>(value: f64, from: U, to: U) -> Result<ConversionResult<U>, ConversionError> {
    if !value.is_finite() {
        warn!(dimension = %U::DIMENSION, value, "non-finite conversion input");
        return Err(ConversionError::NonFinite(value));
    }
    let result = if from == to {
        value
    } else {
        let base = from.rule().to_base(value);
        to.rule().from_base(base)
    };
    debug!(
        dimension = %U::DIMENSION,
        from = from.code(),
        to = to.code(),
        value,
        result,
        "converted"
    );
    Ok(ConversionResult {
        value: result,
        from,
        unit: to,
        formatted: format_number(result, to.decimals(result), Language::En),
    })
}

/// 입력 단위를 제외한 모든 단위로 환산한 목록. 순서는 `U::ALL` 정규 순서를 따른다.
pub fn common_conversions<U: UnitSet>(
    value: f64,
    from: U,
) -> Result<Vec<CommonConversion<U>>, ConversionError> {
    U::ALL
        .iter()
        .copied()
        .filter(|unit| *unit != from)
        .map(|unit| {
            convert(value, from, unit).map(|r| CommonConversion {
                unit,
                value: r.value,
                formatted: r.formatted,
            })
        })
        .collect()
}

/// 변환 전에 호출하는 입력 검증. 빈 목록이면 유효하다.
pub fn validate_conversion_input<U: UnitSet>(value: f64, unit: U) -> Vec<ConversionIssue> {
    let mut issues = Vec::new();
    if !value.is_finite() {
        issues.push(ConversionIssue::NonFinite);
        return issues;
    }
    if let Some(min) = unit.lower_bound() {
        if value < min {
            issues.push(ConversionIssue::BelowMinimum { min });
        }
    }
    if value.abs() > MAX_INPUT_MAGNITUDE {
        issues.push(ConversionIssue::TooLarge {
            max: MAX_INPUT_MAGNITUDE,
        });
    }
    issues
}

/// 변환 공식을 사람이 읽을 수 있는 한 줄로 만든다.
pub fn conversion_formula<U: UnitSet>(from: U, to: U) -> String {
    match (from.rule(), to.rule()) {
        (ConversionRule::Linear(f_from), ConversionRule::Linear(f_to)) => {
            let ratio = f_from / f_to;
            format!(
                "1 {} = {} {}",
                from.code(),
                format_significant(ratio, 6),
                to.code()
            )
        }
        _ => from
            .affine_formula(to)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} = {}", to.code(), from.code())),
    }
}

/// 고정 소수 자릿수로 반올림한 뒤 뒤쪽 0을 제거하고 로케일 소수점을 적용한다.
pub fn format_number(value: f64, decimals: usize, lang: Language) -> String {
    let mut s = format!("{value:.decimals$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    match lang.decimal_separator() {
        '.' => s,
        sep => s.replace('.', &sep.to_string()),
    }
}

/// 유효숫자 기준 표시. 배율처럼 크기 편차가 큰 값에 쓴다.
fn format_significant(value: f64, digits: i32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (digits - 1 - magnitude).clamp(0, 15) as usize;
    format_number(value, decimals, Language::En)
}

fn unsupported(dimension: Dimension, unit: &str) -> ConversionError {
    warn!(%dimension, unit, "unsupported unit");
    ConversionError::UnsupportedUnit {
        dimension,
        unit: unit.to_string(),
    }
}

fn parse_unit<U: UnitSet>(s: &str) -> Result<U, ConversionError> {
    U::parse(s).ok_or_else(|| unsupported(U::DIMENSION, s))
}

fn convert_codes<U: UnitSet>(
    value: f64,
    from: &str,
    to: &str,
) -> Result<NamedConversion, ConversionError> {
    let from = parse_unit::<U>(from)?;
    let to = parse_unit::<U>(to)?;
    let r = convert(value, from, to)?;
    Ok(NamedConversion {
        dimension: U::DIMENSION,
        value: r.value,
        from: from.code(),
        unit: to.code(),
        formatted: r.formatted,
    })
}

fn common_codes<U: UnitSet>(
    value: f64,
    from: &str,
) -> Result<Vec<NamedCommonConversion>, ConversionError> {
    let from = parse_unit::<U>(from)?;
    Ok(common_conversions(value, from)?
        .into_iter()
        .map(|c| NamedCommonConversion {
            unit: c.unit.code(),
            value: c.value,
            formatted: c.formatted,
        })
        .collect())
}

fn validate_code<U: UnitSet>(value: f64, unit: &str) -> Result<Vec<ConversionIssue>, ConversionError> {
    let unit = parse_unit::<U>(unit)?;
    Ok(validate_conversion_input(value, unit))
}

fn formula_codes<U: UnitSet>(from: &str, to: &str) -> Result<String, ConversionError> {
    Ok(conversion_formula(parse_unit::<U>(from)?, parse_unit::<U>(to)?))
}

fn format_code<U: UnitSet>(value: f64, unit: &str, lang: Language) -> Result<String, ConversionError> {
    let unit = parse_unit::<U>(unit)?;
    Ok(format_number(value, unit.decimals(value), lang))
}

fn codes<U: UnitSet>() -> Vec<&'static str> {
    U::ALL.iter().map(|u| u.code()).collect()
}

/// 차원 값에 맞는 단위 타입으로 제네릭 함수를 호출한다.
macro_rules! with_unit_set {
    ($dimension:expr, $func:ident ( $($arg:expr),* )) => {
        match $dimension {
            Dimension::Angle => $func::<AngleUnit>($($arg),*),
            Dimension::Energy => $func::<EnergyUnit>($($arg),*),
            Dimension::Volume => $func::<VolumeUnit>($($arg),*),
            Dimension::Temperature => $func::<TemperatureUnit>($($arg),*),
            Dimension::Length => $func::<LengthUnit>($($arg),*),
            Dimension::Mass => $func::<MassUnit>($($arg),*),
            Dimension::Area => $func::<AreaUnit>($($arg),*),
            Dimension::Pressure => $func::<PressureUnit>($($arg),*),
            Dimension::Speed => $func::<SpeedUnit>($($arg),*),
            Dimension::Time => $func::<TimeUnit>($($arg),*),
        }
    };
}

/// 문자열로 전달된 단위명을 해석한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `C`, `deg`, `kcal`, `l`, `km/h` 등을 사용할 수 있다.
pub fn convert_named(
    dimension: Dimension,
    value: f64,
    from: &str,
    to: &str,
) -> Result<NamedConversion, ConversionError> {
    with_unit_set!(dimension, convert_codes(value, from, to))
}

/// 문자열 단위 코드 기반 공통 환산 목록.
pub fn common_conversions_named(
    dimension: Dimension,
    value: f64,
    from: &str,
) -> Result<Vec<NamedCommonConversion>, ConversionError> {
    with_unit_set!(dimension, common_codes(value, from))
}

/// 문자열 단위 코드 기반 입력 검증.
pub fn validate_named(
    dimension: Dimension,
    value: f64,
    unit: &str,
) -> Result<Vec<ConversionIssue>, ConversionError> {
    with_unit_set!(dimension, validate_code(value, unit))
}

/// 문자열 단위 코드 기반 공식 설명.
pub fn formula_named(dimension: Dimension, from: &str, to: &str) -> Result<String, ConversionError> {
    with_unit_set!(dimension, formula_codes(from, to))
}

/// 단위별 표시 자릿수와 로케일 소수점으로 값을 포맷한다.
pub fn format_named(
    dimension: Dimension,
    value: f64,
    unit: &str,
    lang: Language,
) -> Result<String, ConversionError> {
    with_unit_set!(dimension, format_code(value, unit, lang))
}

/// 차원의 단위 코드를 정규 순서로 나열한다.
pub fn unit_codes(dimension: Dimension) -> Vec<&'static str> {
    with_unit_set!(dimension, codes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_number_strips_trailing_zeros() {
        assert_eq!(format_number(32.0, 1, Language::En), "32");
        assert_eq!(format_number(3.14159, 4, Language::En), "3.1416");
        assert_eq!(format_number(2.50, 2, Language::En), "2.5");
        assert_eq!(format_number(-0.0001, 2, Language::En), "0");
    }

    #[test]
    fn format_number_uses_locale_separator() {
        assert_eq!(format_number(3.14159, 2, Language::Ru), "3,14");
        assert_eq!(format_number(1000.0, 0, Language::Ru), "1000");
    }

    #[test]
    fn significant_digits_for_small_ratio() {
        assert_eq!(format_significant(4.184, 6), "4.184");
        assert_eq!(format_significant(0.0174532925, 6), "0.0174533");
    }
}
