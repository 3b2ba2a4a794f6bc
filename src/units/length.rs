use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Mile,
    Yard,
    Foot,
    Inch,
}

impl LengthUnit {
    /// 선언 순서대로의 전체 단위. 첫 항목이 기준 단위이다.
    pub const ALL: [LengthUnit; 8] = [
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Centimeter,
        LengthUnit::Millimeter,
        LengthUnit::Mile,
        LengthUnit::Yard,
        LengthUnit::Foot,
        LengthUnit::Inch,
    ];

    /// 화면 표시용 단위 이름.
    pub fn label(self) -> &'static str {
        match self {
            LengthUnit::Meter => "Meter",
            LengthUnit::Kilometer => "Kilometer",
            LengthUnit::Centimeter => "Centimeter",
            LengthUnit::Millimeter => "Millimeter",
            LengthUnit::Mile => "Mile",
            LengthUnit::Yard => "Yard",
            LengthUnit::Foot => "Foot",
            LengthUnit::Inch => "Inch",
        }
    }
}

fn to_meter(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value,
        LengthUnit::Kilometer => value * 1000.0,
        LengthUnit::Centimeter => value / 100.0,
        LengthUnit::Millimeter => value / 1000.0,
        LengthUnit::Mile => value * 1609.34,
        LengthUnit::Yard => value * 0.9144,
        LengthUnit::Foot => value * 0.3048,
        LengthUnit::Inch => value * 0.0254,
    }
}

fn from_meter(value_m: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value_m,
        LengthUnit::Kilometer => value_m / 1000.0,
        LengthUnit::Centimeter => value_m * 100.0,
        LengthUnit::Millimeter => value_m * 1000.0,
        LengthUnit::Mile => value_m / 1609.34,
        LengthUnit::Yard => value_m / 0.9144,
        LengthUnit::Foot => value_m / 0.3048,
        LengthUnit::Inch => value_m / 0.0254,
    }
}

/// 길이를 다른 단위로 변환한다. 동일 단위는 값을 그대로 돌려준다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    let m = to_meter(value, from);
    from_meter(m, to)
}
