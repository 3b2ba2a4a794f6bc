use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::category::Category;
use crate::conversion::{self, ConversionError};
use crate::units::*;

/// 분류별 기본 변환 대상 단위 설정을 담는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub length: LengthUnit,
    pub weight: WeightUnit,
    pub temperature: TemperatureUnit,
    pub area: AreaUnit,
    pub volume: VolumeUnit,
    pub speed: SpeedUnit,
    pub time: TimeUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            length: LengthUnit::Kilometer,
            weight: WeightUnit::Kilogram,
            temperature: TemperatureUnit::Fahrenheit,
            area: AreaUnit::SquareKilometer,
            volume: VolumeUnit::Milliliter,
            speed: SpeedUnit::KilometerPerHour,
            time: TimeUnit::Minute,
        }
    }
}

impl DefaultUnits {
    /// 해당 분류의 기본 대상 단위 이름.
    pub fn label_for(&self, category: Category) -> &'static str {
        match category {
            Category::Length => self.length.label(),
            Category::Weight => self.weight.label(),
            Category::Temperature => self.temperature.label(),
            Category::Area => self.area.label(),
            Category::Volume => self.volume.label(),
            Category::Speed => self.speed.label(),
            Category::Time => self.time.label(),
        }
    }

    /// 해당 분류의 기본 대상 단위를 이름으로 설정한다.
    pub fn set_for(&mut self, category: Category, unit_name: &str) -> Result<(), ConversionError> {
        match category {
            Category::Length => self.length = conversion::parse_length_unit(unit_name)?,
            Category::Weight => self.weight = conversion::parse_weight_unit(unit_name)?,
            Category::Temperature => {
                self.temperature = conversion::parse_temperature_unit(unit_name)?
            }
            Category::Area => self.area = conversion::parse_area_unit(unit_name)?,
            Category::Volume => self.volume = conversion::parse_volume_unit(unit_name)?,
            Category::Speed => self.speed = conversion::parse_speed_unit(unit_name)?,
            Category::Time => self.time = conversion::parse_time_unit(unit_name)?,
        }
        Ok(())
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 변환 메뉴 진입 시 기본 선택되는 분류.
    pub default_category: Category,
    /// 분류별 기본 대상 단위.
    pub default_units: DefaultUnits,
    /// 기록 내보내기 기본 경로.
    pub history_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_category: Category::Length,
            default_units: DefaultUnits::default(),
            history_file: "history.txt".to_string(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
