use crate::category::Category;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 유한한 실수로 해석할 수 없는 입력값
    InvalidValue(String),
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 알 수 없는 분류 문자열
    UnknownCategory(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::InvalidValue(v) => write!(f, "유효하지 않은 숫자 값: {v}"),
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConversionError::UnknownCategory(c) => write!(f, "알 수 없는 분류: {c}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 사용자 입력 문자열을 유한한 f64로 해석한다.
///
/// NaN/무한대는 변환 대상이 아니므로 파싱 성공 여부와 별개로 거부한다.
pub fn parse_value(s: &str) -> Result<f64, ConversionError> {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ConversionError::InvalidValue(s.trim().to_string())),
    }
}

/// 분류별 단위 이름을 선언 순서대로 돌려준다.
///
/// 순서는 고정이며 앞의 두 항목이 기본 from/to 단위로 쓰인다.
pub fn list_units(category: Category) -> Vec<&'static str> {
    match category {
        Category::Length => LengthUnit::ALL.iter().map(|u| u.label()).collect(),
        Category::Weight => WeightUnit::ALL.iter().map(|u| u.label()).collect(),
        Category::Temperature => TemperatureUnit::ALL.iter().map(|u| u.label()).collect(),
        Category::Area => AreaUnit::ALL.iter().map(|u| u.label()).collect(),
        Category::Volume => VolumeUnit::ALL.iter().map(|u| u.label()).collect(),
        Category::Speed => SpeedUnit::ALL.iter().map(|u| u.label()).collect(),
        Category::Time => TimeUnit::ALL.iter().map(|u| u.label()).collect(),
    }
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 값 검증이 단위 해석보다 먼저이므로 잘못된 값과 잘못된 단위가 함께
/// 들어오면 `InvalidValue`가 우선한다. 단위 문자열은 `Meter` 같은 정식
/// 이름 외에 `m`, `km/h` 같은 약어도 허용한다.
pub fn convert(
    category: Category,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::InvalidValue(value.to_string()));
    }
    match category {
        Category::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        Category::Weight => {
            let from = parse_weight_unit(from_unit_str)?;
            let to = parse_weight_unit(to_unit_str)?;
            Ok(convert_weight(value, from, to))
        }
        Category::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        Category::Area => {
            let from = parse_area_unit(from_unit_str)?;
            let to = parse_area_unit(to_unit_str)?;
            Ok(convert_area(value, from, to))
        }
        Category::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_volume(value, from, to))
        }
        Category::Speed => {
            let from = parse_speed_unit(from_unit_str)?;
            let to = parse_speed_unit(to_unit_str)?;
            Ok(convert_speed(value, from, to))
        }
        Category::Time => {
            let from = parse_time_unit(from_unit_str)?;
            let to = parse_time_unit(to_unit_str)?;
            Ok(convert_time(value, from, to))
        }
    }
}

/// 단위 문자열을 해당 분류의 정식 표시 이름으로 정규화한다.
///
/// 약어로 들어온 입력도 기록에는 `Meter` 같은 정식 이름으로 남긴다.
pub fn canonical_unit_label(
    category: Category,
    s: &str,
) -> Result<&'static str, ConversionError> {
    match category {
        Category::Length => Ok(parse_length_unit(s)?.label()),
        Category::Weight => Ok(parse_weight_unit(s)?.label()),
        Category::Temperature => Ok(parse_temperature_unit(s)?.label()),
        Category::Area => Ok(parse_area_unit(s)?.label()),
        Category::Volume => Ok(parse_volume_unit(s)?.label()),
        Category::Speed => Ok(parse_speed_unit(s)?.label()),
        Category::Time => Ok(parse_time_unit(s)?.label()),
    }
}

/// 분류 이름 문자열을 enum으로 변환한다.
pub fn parse_category(s: &str) -> Result<Category, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "length" => Ok(Category::Length),
        "weight" => Ok(Category::Weight),
        "temperature" | "temp" => Ok(Category::Temperature),
        "area" => Ok(Category::Area),
        "volume" => Ok(Category::Volume),
        "speed" => Ok(Category::Speed),
        "time" => Ok(Category::Time),
        _ => Err(ConversionError::UnknownCategory(s.trim().to_string())),
    }
}

pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "meter" | "metre" | "m" => Ok(LengthUnit::Meter),
        "kilometer" | "km" => Ok(LengthUnit::Kilometer),
        "centimeter" | "cm" => Ok(LengthUnit::Centimeter),
        "millimeter" | "mm" => Ok(LengthUnit::Millimeter),
        "mile" | "mi" => Ok(LengthUnit::Mile),
        "yard" | "yd" => Ok(LengthUnit::Yard),
        "foot" | "ft" => Ok(LengthUnit::Foot),
        "inch" | "in" => Ok(LengthUnit::Inch),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}

pub fn parse_weight_unit(s: &str) -> Result<WeightUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "gram" | "g" => Ok(WeightUnit::Gram),
        "kilogram" | "kg" => Ok(WeightUnit::Kilogram),
        "milligram" | "mg" => Ok(WeightUnit::Milligram),
        "pound" | "lb" | "lbs" => Ok(WeightUnit::Pound),
        "ounce" | "oz" => Ok(WeightUnit::Ounce),
        "tonne" | "ton" | "t" => Ok(WeightUnit::Tonne),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}

pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "celsius" | "c" | "°c" => Ok(TemperatureUnit::Celsius),
        "fahrenheit" | "f" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "kelvin" | "k" => Ok(TemperatureUnit::Kelvin),
        "rankine" | "r" => Ok(TemperatureUnit::Rankine),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}

pub fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "squaremeter" | "m2" | "m^2" | "sqm" => Ok(AreaUnit::SquareMeter),
        "squarekilometer" | "km2" | "km^2" => Ok(AreaUnit::SquareKilometer),
        "squarefoot" | "ft2" | "ft^2" | "sqft" => Ok(AreaUnit::SquareFoot),
        "squareyard" | "yd2" | "yd^2" => Ok(AreaUnit::SquareYard),
        "acre" | "ac" => Ok(AreaUnit::Acre),
        "hectare" | "ha" => Ok(AreaUnit::Hectare),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}

pub fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "liter" | "litre" | "l" => Ok(VolumeUnit::Liter),
        "milliliter" | "ml" => Ok(VolumeUnit::Milliliter),
        "cubicmeter" | "m3" | "m^3" => Ok(VolumeUnit::CubicMeter),
        "gallon" | "gal" => Ok(VolumeUnit::Gallon),
        "pint" | "pt" => Ok(VolumeUnit::Pint),
        "cubicfoot" | "ft3" | "ft^3" | "cuft" => Ok(VolumeUnit::CubicFoot),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}

pub fn parse_speed_unit(s: &str) -> Result<SpeedUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "meterpersecond" | "m/s" | "mps" => Ok(SpeedUnit::MeterPerSecond),
        "kilometerperhour" | "km/h" | "kph" => Ok(SpeedUnit::KilometerPerHour),
        "mileperhour" | "mi/h" | "mph" => Ok(SpeedUnit::MilePerHour),
        "footpersecond" | "ft/s" | "fps" => Ok(SpeedUnit::FootPerSecond),
        "knot" | "kn" | "kt" => Ok(SpeedUnit::Knot),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}

pub fn parse_time_unit(s: &str) -> Result<TimeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "second" | "sec" | "s" => Ok(TimeUnit::Second),
        "minute" | "min" => Ok(TimeUnit::Minute),
        "hour" | "hr" | "h" => Ok(TimeUnit::Hour),
        "millisecond" | "ms" => Ok(TimeUnit::Millisecond),
        "day" | "d" => Ok(TimeUnit::Day),
        "week" | "wk" => Ok(TimeUnit::Week),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}
