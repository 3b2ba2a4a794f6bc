//! 변환 기록과 내보내기 형식 회귀 테스트.
use unit_converter::category::Category;
use unit_converter::conversion;
use unit_converter::history::{ConversionRecord, HistoryLog};

fn record(category: Category, value: f64, from: &str, to: &str) -> ConversionRecord {
    let result = conversion::convert(category, value, from, to).expect("convert");
    ConversionRecord::new(category, value, from, to, result)
}

#[test]
fn append_preserves_insertion_order() {
    let mut log = HistoryLog::new();
    let r1 = record(Category::Length, 10.0, "Meter", "Kilometer");
    let r2 = record(Category::Weight, 2.0, "Kilogram", "Gram");
    log.append(r1.clone());
    log.append(r2.clone());
    let entries: Vec<_> = log.entries().collect();
    assert_eq!(entries, vec![&r1, &r2]);
}

#[test]
fn entries_is_restartable() {
    let mut log = HistoryLog::new();
    log.append(record(Category::Time, 1.0, "Hour", "Minute"));
    assert_eq!(log.entries().count(), 1);
    assert_eq!(log.entries().count(), 1);
}

#[test]
fn clear_empties_the_log() {
    let mut log = HistoryLog::new();
    log.append(record(Category::Length, 1.0, "Meter", "Centimeter"));
    log.append(record(Category::Length, 2.0, "Meter", "Centimeter"));
    assert_eq!(log.len(), 2);
    log.clear();
    assert!(log.is_empty());
    assert_eq!(log.entries().count(), 0);
    assert_eq!(log.export_text(), "");
}

#[test]
fn export_format_matches_display_lines() {
    let mut log = HistoryLog::new();
    log.append(record(Category::Length, 10.0, "Meter", "Kilometer"));
    assert_eq!(log.export_text(), "10 Meter = 0.0100 Kilometer\n");

    log.append(record(Category::Temperature, 0.0, "Celsius", "Fahrenheit"));
    assert_eq!(
        log.export_text(),
        "10 Meter = 0.0100 Kilometer\n0 Celsius = 32.0000 Fahrenheit\n"
    );
}

#[test]
fn empty_log_exports_empty_string() {
    let log = HistoryLog::new();
    assert!(log.is_empty());
    assert_eq!(log.export_text(), "");
}

#[test]
fn display_text_keeps_input_value_verbatim() {
    let r = record(Category::Temperature, 2.5, "Celsius", "Fahrenheit");
    assert_eq!(r.display_text, "2.5 Celsius = 36.5000 Fahrenheit");
    assert_eq!(r.result_value, 36.5);
}

#[test]
fn export_does_not_consume_the_log() {
    let mut log = HistoryLog::new();
    log.append(record(Category::Volume, 1.0, "Liter", "Milliliter"));
    let first = log.export_text();
    let second = log.export_text();
    assert_eq!(first, second);
    assert_eq!(log.len(), 1);
}
