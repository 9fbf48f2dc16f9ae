//! 단위 정의 모음. 차원마다 단위 enum 하나와 `UnitSet` 구현을 둔다.

pub mod angle;
pub mod area;
pub mod energy;
pub mod length;
pub mod mass;
pub mod pressure;
pub mod speed;
pub mod temperature;
pub mod time;
pub mod volume;

pub use angle::AngleUnit;
pub use area::AreaUnit;
pub use energy::EnergyUnit;
pub use length::LengthUnit;
pub use mass::MassUnit;
pub use pressure::PressureUnit;
pub use speed::SpeedUnit;
pub use temperature::TemperatureUnit;
pub use time::TimeUnit;
pub use volume::VolumeUnit;

use crate::quantity::Dimension;

/// 단위 하나가 기준 단위와 어떻게 연결되는지 표현한다.
///
/// 대부분의 차원은 원점을 지나는 배율(`Linear`)이면 충분하지만,
/// 온도처럼 영점이 다른 척도는 `Affine`으로 왕복 함수 쌍을 따로 둔다.
#[derive(Debug, Clone, Copy)]
pub enum ConversionRule {
    /// `base = value * factor`
    Linear(f64),
    /// `base = to_base(value)`, `value = from_base(base)`
    Affine {
        to_base: fn(f64) -> f64,
        from_base: fn(f64) -> f64,
    },
}

impl ConversionRule {
    pub fn to_base(&self, value: f64) -> f64 {
        match self {
            ConversionRule::Linear(factor) => value * factor,
            ConversionRule::Affine { to_base, .. } => to_base(value),
        }
    }

    pub fn from_base(&self, base: f64) -> f64 {
        match self {
            ConversionRule::Linear(factor) => base / factor,
            ConversionRule::Affine { from_base, .. } => from_base(base),
        }
    }
}

/// 한 차원의 단위 집합이 제공해야 하는 정보.
pub trait UnitSet: Copy + Eq + std::fmt::Debug + 'static {
    /// 이 단위들이 속한 차원
    const DIMENSION: Dimension;
    /// 정규 순서. 공통 환산 목록도 이 순서를 따른다.
    const ALL: &'static [Self];

    /// 짧은 단위 코드 (`deg`, `J`, `l` …)
    fn code(self) -> &'static str;

    /// 대소문자를 무시하고 코드/별칭을 해석한다.
    fn parse(s: &str) -> Option<Self>;

    /// 기준 단위 대비 환산 규칙
    fn rule(self) -> ConversionRule;

    /// 표시용 소수 자릿수. 값의 크기에 따라 달라질 수 있다.
    fn decimals(self, value: f64) -> usize {
        magnitude_decimals(value, 4, 2)
    }

    /// 물리적으로 허용되는 최솟값. 입력 검증에서만 사용한다.
    fn lower_bound(self) -> Option<f64> {
        Some(0.0)
    }

    /// affine 단위 쌍의 공식 문자열. 선형 단위는 배율로 자동 생성하므로 None.
    fn affine_formula(self, _to: Self) -> Option<&'static str> {
        None
    }
}

/// |value| < 1 이면 `small`, 아니면 `normal` 자릿수를 쓴다.
pub(crate) fn magnitude_decimals(value: f64, small: usize, normal: usize) -> usize {
    if value.abs() < 1.0 {
        small
    } else {
        normal
    }
}
