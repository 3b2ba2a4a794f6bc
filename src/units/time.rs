use serde::{Deserialize, Serialize};

/// 시간 단위. 내부 기준은 초이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Millisecond,
    Day,
    Week,
}

impl TimeUnit {
    /// 선언 순서대로의 전체 단위. 첫 항목이 기준 단위이다.
    pub const ALL: [TimeUnit; 6] = [
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Millisecond,
        TimeUnit::Day,
        TimeUnit::Week,
    ];

    /// 화면 표시용 단위 이름.
    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Second => "Second",
            TimeUnit::Minute => "Minute",
            TimeUnit::Hour => "Hour",
            TimeUnit::Millisecond => "Millisecond",
            TimeUnit::Day => "Day",
            TimeUnit::Week => "Week",
        }
    }
}

fn to_second(value: f64, unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Second => value,
        TimeUnit::Minute => value * 60.0,
        TimeUnit::Hour => value * 3600.0,
        TimeUnit::Millisecond => value / 1000.0,
        TimeUnit::Day => value * 86_400.0,
        TimeUnit::Week => value * 604_800.0,
    }
}

fn from_second(value_s: f64, unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Second => value_s,
        TimeUnit::Minute => value_s / 60.0,
        TimeUnit::Hour => value_s / 3600.0,
        TimeUnit::Millisecond => value_s * 1000.0,
        TimeUnit::Day => value_s / 86_400.0,
        TimeUnit::Week => value_s / 604_800.0,
    }
}

/// 시간을 다른 단위로 변환한다. 동일 단위는 값을 그대로 돌려준다.
pub fn convert_time(value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
    if from == to {
        return value;
    }
    let s = to_second(value, from);
    from_second(s, to)
}
