//! 선형 분류 변환의 성질과 실패 경로 회귀 테스트.
use unit_converter::category::Category;
use unit_converter::conversion::{self, ConversionError};

const LINEAR: [Category; 6] = [
    Category::Length,
    Category::Weight,
    Category::Area,
    Category::Volume,
    Category::Speed,
    Category::Time,
];

fn assert_close(actual: f64, expected: f64) {
    let tol = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() < tol,
        "actual={actual} expected={expected}"
    );
}

#[test]
fn identity_is_exact_for_every_unit() {
    let value = 12.345;
    for cat in Category::ALL {
        for unit in conversion::list_units(cat) {
            let res = conversion::convert(cat, value, unit, unit).expect("identity convert");
            assert_eq!(res, value, "{} {unit}", cat.label());
        }
    }
}

#[test]
fn round_trip_within_relative_tolerance() {
    for cat in LINEAR {
        let units = conversion::list_units(cat);
        for from in &units {
            for to in &units {
                for value in [0.001, 1.0, 3.75, 1.0e6] {
                    let there = conversion::convert(cat, value, from, to).expect("forward");
                    let back = conversion::convert(cat, there, to, from).expect("backward");
                    assert_close(back, value);
                }
            }
        }
    }
}

#[test]
fn known_values_are_pinned() {
    let cases = [
        (Category::Length, 10.0, "Meter", "Kilometer", 0.01),
        (Category::Length, 1.0, "Mile", "Meter", 1609.34),
        (Category::Weight, 5000.0, "Gram", "Kilogram", 5.0),
        (Category::Weight, 1.0, "Pound", "Gram", 453.592),
        (Category::Area, 1.0, "Hectare", "SquareMeter", 10_000.0),
        (Category::Volume, 2.0, "CubicMeter", "Liter", 2000.0),
        (Category::Speed, 36.0, "KilometerPerHour", "MeterPerSecond", 10.0),
        (Category::Time, 1.0, "Hour", "Second", 3600.0),
        (Category::Time, 2.0, "Week", "Day", 14.0),
    ];
    for (cat, value, from, to, expected) in cases {
        let res = conversion::convert(cat, value, from, to).expect("convert");
        assert_close(res, expected);
    }
}

#[test]
fn length_listing_is_stable_and_starts_with_base() {
    let first = conversion::list_units(Category::Length);
    let second = conversion::list_units(Category::Length);
    assert_eq!(first, second);
    assert_eq!(first[0], "Meter");
    assert_eq!(first[1], "Kilometer");
}

#[test]
fn every_category_lists_at_least_two_units() {
    for cat in Category::ALL {
        assert!(
            conversion::list_units(cat).len() >= 2,
            "{} 분류의 단위가 부족하다",
            cat.label()
        );
    }
}

#[test]
fn unknown_unit_is_rejected() {
    let err = conversion::convert(Category::Length, 5.0, "Meter", "Furlong").unwrap_err();
    assert!(matches!(err, ConversionError::UnknownUnit(u) if u == "Furlong"));
}

#[test]
fn non_finite_value_is_rejected_before_unit_lookup() {
    // 단위까지 틀린 입력이라도 값 오류가 먼저 보고된다
    let err = conversion::convert(Category::Length, f64::NAN, "Meter", "Furlong").unwrap_err();
    assert!(matches!(err, ConversionError::InvalidValue(_)));
    let err = conversion::convert(Category::Length, f64::INFINITY, "Meter", "Kilometer").unwrap_err();
    assert!(matches!(err, ConversionError::InvalidValue(_)));
}

#[test]
fn parse_value_rejects_text_and_non_finite() {
    assert!(matches!(
        conversion::parse_value("abc"),
        Err(ConversionError::InvalidValue(_))
    ));
    assert!(conversion::parse_value("inf").is_err());
    assert!(conversion::parse_value("NaN").is_err());
    assert_eq!(conversion::parse_value(" 3.5 ").expect("parse"), 3.5);
}

#[test]
fn abbreviations_resolve_to_canonical_labels() {
    let cases = [
        (Category::Length, "km", "Kilometer"),
        (Category::Weight, "lb", "Pound"),
        (Category::Temperature, "°c", "Celsius"),
        (Category::Speed, "km/h", "KilometerPerHour"),
        (Category::Volume, "ml", "Milliliter"),
        (Category::Time, "ms", "Millisecond"),
    ];
    for (cat, input, expected) in cases {
        let label = conversion::canonical_unit_label(cat, input).expect("canonical");
        assert_eq!(label, expected);
    }
}

#[test]
fn category_parsing_matches_labels() {
    for cat in Category::ALL {
        assert_eq!(conversion::parse_category(cat.label()).expect("parse"), cat);
    }
    assert!(matches!(
        conversion::parse_category("Pressure"),
        Err(ConversionError::UnknownCategory(_))
    ));
}
