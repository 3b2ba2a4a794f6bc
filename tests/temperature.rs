//! 온도 고정점 회귀 테스트. 섭씨 중간값 합성이 비대칭 반올림을
//! 일으키지 않는지 기준값으로 고정한다.
use unit_converter::category::Category;
use unit_converter::conversion;

fn convert(value: f64, from: &str, to: &str) -> f64 {
    conversion::convert(Category::Temperature, value, from, to).expect("temperature convert")
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "actual={actual} expected={expected}"
    );
}

#[test]
fn celsius_fahrenheit_fixed_points() {
    assert_close(convert(0.0, "Celsius", "Fahrenheit"), 32.0);
    assert_close(convert(100.0, "Celsius", "Fahrenheit"), 212.0);
    assert_close(convert(32.0, "Fahrenheit", "Celsius"), 0.0);
    assert_close(convert(212.0, "Fahrenheit", "Celsius"), 100.0);
}

#[test]
fn kelvin_fixed_points() {
    assert_close(convert(0.0, "Celsius", "Kelvin"), 273.15);
    assert_close(convert(273.15, "Kelvin", "Celsius"), 0.0);
    // 절대영도
    assert_close(convert(0.0, "Kelvin", "Celsius"), -273.15);
    assert_close(convert(0.0, "Kelvin", "Fahrenheit"), -459.67);
}

#[test]
fn rankine_fixed_points() {
    assert_close(convert(0.0, "Celsius", "Rankine"), 491.67);
    assert_close(convert(491.67, "Rankine", "Celsius"), 0.0);
    assert_close(convert(0.0, "Rankine", "Kelvin"), 0.0);
}

#[test]
fn same_scale_returns_input() {
    assert_eq!(convert(-40.5, "Celsius", "Celsius"), -40.5);
    assert_eq!(convert(300.0, "Kelvin", "Kelvin"), 300.0);
}

#[test]
fn round_trip_through_every_scale() {
    let units = conversion::list_units(Category::Temperature);
    for from in &units {
        for to in &units {
            for value in [-40.0, 0.0, 25.0, 451.0] {
                let back = convert(convert(value, from, to), to, from);
                assert_close(back, value);
            }
        }
    }
}

#[test]
fn fahrenheit_celsius_meet_at_minus_forty() {
    assert_close(convert(-40.0, "Fahrenheit", "Celsius"), -40.0);
}
