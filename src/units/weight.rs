use serde::{Deserialize, Serialize};

/// 무게 단위. 내부 기준은 그램이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    Gram,
    Kilogram,
    Milligram,
    Pound,
    Ounce,
    Tonne,
}

impl WeightUnit {
    /// 선언 순서대로의 전체 단위. 첫 항목이 기준 단위이다.
    pub const ALL: [WeightUnit; 6] = [
        WeightUnit::Gram,
        WeightUnit::Kilogram,
        WeightUnit::Milligram,
        WeightUnit::Pound,
        WeightUnit::Ounce,
        WeightUnit::Tonne,
    ];

    /// 화면 표시용 단위 이름.
    pub fn label(self) -> &'static str {
        match self {
            WeightUnit::Gram => "Gram",
            WeightUnit::Kilogram => "Kilogram",
            WeightUnit::Milligram => "Milligram",
            WeightUnit::Pound => "Pound",
            WeightUnit::Ounce => "Ounce",
            WeightUnit::Tonne => "Tonne",
        }
    }
}

fn to_gram(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Gram => value,
        WeightUnit::Kilogram => value * 1000.0,
        WeightUnit::Milligram => value / 1000.0,
        WeightUnit::Pound => value * 453.592,
        WeightUnit::Ounce => value * 28.3495,
        WeightUnit::Tonne => value * 1_000_000.0,
    }
}

fn from_gram(value_g: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Gram => value_g,
        WeightUnit::Kilogram => value_g / 1000.0,
        WeightUnit::Milligram => value_g * 1000.0,
        WeightUnit::Pound => value_g / 453.592,
        WeightUnit::Ounce => value_g / 28.3495,
        WeightUnit::Tonne => value_g / 1_000_000.0,
    }
}

/// 무게를 다른 단위로 변환한다. 동일 단위는 값을 그대로 돌려준다.
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    if from == to {
        return value;
    }
    let g = to_gram(value, from);
    from_gram(g, to)
}
