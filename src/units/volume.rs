use serde::{Deserialize, Serialize};

/// 부피 단위. 내부 기준은 리터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Liter,
    Milliliter,
    CubicMeter,
    Gallon,
    Pint,
    CubicFoot,
}

impl VolumeUnit {
    /// 선언 순서대로의 전체 단위. 첫 항목이 기준 단위이다.
    pub const ALL: [VolumeUnit; 6] = [
        VolumeUnit::Liter,
        VolumeUnit::Milliliter,
        VolumeUnit::CubicMeter,
        VolumeUnit::Gallon,
        VolumeUnit::Pint,
        VolumeUnit::CubicFoot,
    ];

    /// 화면 표시용 단위 이름.
    pub fn label(self) -> &'static str {
        match self {
            VolumeUnit::Liter => "Liter",
            VolumeUnit::Milliliter => "Milliliter",
            VolumeUnit::CubicMeter => "CubicMeter",
            VolumeUnit::Gallon => "Gallon",
            VolumeUnit::Pint => "Pint",
            VolumeUnit::CubicFoot => "CubicFoot",
        }
    }
}

fn to_liter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value,
        VolumeUnit::Milliliter => value / 1000.0,
        VolumeUnit::CubicMeter => value * 1000.0,
        VolumeUnit::Gallon => value * 3.78541,
        VolumeUnit::Pint => value * 0.473176,
        VolumeUnit::CubicFoot => value * 28.3168,
    }
}

fn from_liter(value_l: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value_l,
        VolumeUnit::Milliliter => value_l * 1000.0,
        VolumeUnit::CubicMeter => value_l / 1000.0,
        VolumeUnit::Gallon => value_l / 3.78541,
        VolumeUnit::Pint => value_l / 0.473176,
        VolumeUnit::CubicFoot => value_l / 28.3168,
    }
}

/// 부피를 다른 단위로 변환한다. 동일 단위는 값을 그대로 돌려준다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    if from == to {
        return value;
    }
    let l = to_liter(value, from);
    from_liter(l, to)
}
