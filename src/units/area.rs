use serde::{Deserialize, Serialize};

/// 면적 단위. 내부 기준은 제곱미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMeter,
    SquareKilometer,
    SquareFoot,
    SquareYard,
    Acre,
    Hectare,
}

impl AreaUnit {
    /// 선언 순서대로의 전체 단위. 첫 항목이 기준 단위이다.
    pub const ALL: [AreaUnit; 6] = [
        AreaUnit::SquareMeter,
        AreaUnit::SquareKilometer,
        AreaUnit::SquareFoot,
        AreaUnit::SquareYard,
        AreaUnit::Acre,
        AreaUnit::Hectare,
    ];

    /// 화면 표시용 단위 이름.
    pub fn label(self) -> &'static str {
        match self {
            AreaUnit::SquareMeter => "SquareMeter",
            AreaUnit::SquareKilometer => "SquareKilometer",
            AreaUnit::SquareFoot => "SquareFoot",
            AreaUnit::SquareYard => "SquareYard",
            AreaUnit::Acre => "Acre",
            AreaUnit::Hectare => "Hectare",
        }
    }
}

fn to_square_meter(value: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareMeter => value,
        AreaUnit::SquareKilometer => value * 1_000_000.0,
        AreaUnit::SquareFoot => value * 0.092903,
        AreaUnit::SquareYard => value * 0.836127,
        AreaUnit::Acre => value * 4046.86,
        AreaUnit::Hectare => value * 10_000.0,
    }
}

fn from_square_meter(value_m2: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareMeter => value_m2,
        AreaUnit::SquareKilometer => value_m2 / 1_000_000.0,
        AreaUnit::SquareFoot => value_m2 / 0.092903,
        AreaUnit::SquareYard => value_m2 / 0.836127,
        AreaUnit::Acre => value_m2 / 4046.86,
        AreaUnit::Hectare => value_m2 / 10_000.0,
    }
}

/// 면적을 다른 단위로 변환한다. 동일 단위는 값을 그대로 돌려준다.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    if from == to {
        return value;
    }
    let m2 = to_square_meter(value, from);
    from_square_meter(m2, to)
}
