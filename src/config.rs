use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::quantity::Dimension;
use crate::units::*;

/// 설정 파일 기본 경로
pub const CONFIG_PATH: &str = "config.toml";

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// SI/미터법. 기본값.
    #[default]
    Metric,
    /// 영국식/야드파운드법
    Imperial,
}

/// 각 차원별 기본 변환 대상 단위를 담는다. 변환 대상을 생략했을 때 쓴다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub angle: AngleUnit,
    pub energy: EnergyUnit,
    pub volume: VolumeUnit,
    pub temperature: TemperatureUnit,
    pub length: LengthUnit,
    pub mass: MassUnit,
    pub area: AreaUnit,
    pub pressure: PressureUnit,
    pub speed: SpeedUnit,
    pub time: TimeUnit,
}

impl DefaultUnits {
    /// 프리셋에 맞는 기본 단위 세트.
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Metric => Self {
                angle: AngleUnit::Degree,
                energy: EnergyUnit::Kilojoule,
                volume: VolumeUnit::Liter,
                temperature: TemperatureUnit::Celsius,
                length: LengthUnit::Meter,
                mass: MassUnit::Kilogram,
                area: AreaUnit::SquareMeter,
                pressure: PressureUnit::KiloPascal,
                speed: SpeedUnit::KilometerPerHour,
                time: TimeUnit::Hour,
            },
            UnitSystem::Imperial => Self {
                angle: AngleUnit::Degree,
                energy: EnergyUnit::Btu,
                volume: VolumeUnit::Gallon,
                temperature: TemperatureUnit::Fahrenheit,
                length: LengthUnit::Foot,
                mass: MassUnit::Pound,
                area: AreaUnit::SquareFoot,
                pressure: PressureUnit::Psi,
                speed: SpeedUnit::MilePerHour,
                time: TimeUnit::Hour,
            },
        }
    }

    /// 차원별 기본 단위 코드
    pub fn code_for(&self, dimension: Dimension) -> &'static str {
        match dimension {
            Dimension::Angle => self.angle.code(),
            Dimension::Energy => self.energy.code(),
            Dimension::Volume => self.volume.code(),
            Dimension::Temperature => self.temperature.code(),
            Dimension::Length => self.length.code(),
            Dimension::Mass => self.mass.code(),
            Dimension::Area => self.area.code(),
            Dimension::Pressure => self.pressure.code(),
            Dimension::Speed => self.speed.code(),
            Dimension::Time => self.time.code(),
        }
    }
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self::for_system(UnitSystem::Metric)
    }
}

fn default_language() -> String {
    "auto".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ConfigFile")]
pub struct Config {
    pub unit_system: UnitSystem,
    /// `auto`, `ru`, `en`
    pub language: String,
    /// 사용자 언어팩 디렉터리 (`<dir>/<lang>.toml`)
    pub language_pack_dir: Option<String>,
    /// tracing 필터 지시어. `RUST_LOG`가 있으면 그쪽이 우선한다.
    pub log_filter: String,
    pub default_units: DefaultUnits,
}

/// 손으로 고친 파일을 위한 역직렬화 형태. 빠진 항목은 기본값으로 채운다.
#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    unit_system: UnitSystem,
    #[serde(default = "default_language")]
    language: String,
    #[serde(default)]
    language_pack_dir: Option<String>,
    #[serde(default = "default_log_filter")]
    log_filter: String,
    #[serde(default)]
    default_units: Option<DefaultUnits>,
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        // [default_units] 가 없으면 단위 시스템 프리셋에서 다시 만든다.
        let default_units = file
            .default_units
            .unwrap_or_else(|| DefaultUnits::for_system(file.unit_system));
        Self {
            unit_system: file.unit_system,
            language: file.language,
            language_pack_dir: file.language_pack_dir,
            log_filter: file.log_filter,
            default_units,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Metric,
            default_units: DefaultUnits::default(),
            language: default_language(),
            language_pack_dir: None,
            log_filter: default_log_filter(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_create(Path::new(CONFIG_PATH))
}

/// 지정 경로에서 설정을 읽는다. 파일이 없으면 기본값을 저장한 뒤 돌려준다.
///
/// 파일이 있는데 읽거나 해석할 수 없으면 오류를 돌려주고 파일은 건드리지 않는다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        info!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_to(&cfg, path)?;
        Ok(cfg)
    }
}

fn save_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    info!(path = %path.display(), "config saved");
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_to(self, Path::new(CONFIG_PATH))
    }

    /// 단위 시스템을 바꾸고 기본 단위 세트를 그에 맞게 다시 채운다.
    pub fn apply_unit_system(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.default_units = DefaultUnits::for_system(system);
    }

    /// 변환 대상을 생략했을 때 쓸 단위 코드.
    pub fn default_target(&self, dimension: Dimension) -> &'static str {
        self.default_units.code_for(dimension)
    }
}
