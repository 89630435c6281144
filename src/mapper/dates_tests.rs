use super::*;
use chrono::{Datelike, Timelike};
use serde_json::json;

fn precision_of(input: &str) -> Option<DatePrecision> {
    parse_date_with_precision(input).map(|parsed| parsed.precision)
}

#[test]
fn test_shape_determines_precision() {
    assert_eq!(precision_of("2021"), Some(DatePrecision::Year));
    assert_eq!(precision_of("2021-06"), Some(DatePrecision::Month));
    assert_eq!(precision_of("2021-06-15"), Some(DatePrecision::Day));
    assert_eq!(precision_of("2021-06-15T10:30:00Z"), Some(DatePrecision::Time));
    assert_eq!(precision_of("2021-06-15 10:30"), Some(DatePrecision::Time));
}

#[test]
fn test_other_formats_default_to_day() {
    assert_eq!(precision_of("06/15/2021"), Some(DatePrecision::Day));
    assert_eq!(precision_of("June 15, 2021"), Some(DatePrecision::Day));
    assert_eq!(precision_of("Jun 15, 2021"), Some(DatePrecision::Day));
}

#[test]
fn test_year_precision_starts_at_january_first() {
    let parsed = parse_date_with_precision("2021").unwrap();
    assert_eq!((parsed.date.year(), parsed.date.month(), parsed.date.day()), (2021, 1, 1));
}

#[test]
fn test_time_is_kept() {
    let parsed = parse_date_with_precision("2021-06-15T10:30:00+02:00").unwrap();
    assert_eq!((parsed.date.hour(), parsed.date.minute()), (8, 30));
}

#[test]
fn test_unparseable_strings_yield_none() {
    assert!(parse_date_with_precision("").is_none());
    assert!(parse_date_with_precision("soon").is_none());
    assert!(parse_date_with_precision("2021-13").is_none());
    assert!(parse_date_with_precision("2021-02-30").is_none());
}

#[test]
fn test_format_matches_precision_shape() {
    for input in ["2021", "2021-06", "2021-06-15", "2021-06-15T10:30:00Z"] {
        let parsed = parse_date_with_precision(input).unwrap();
        assert_eq!(format_with_precision(&parsed), input);
    }
}

#[test]
fn test_precision_serializes_lowercase() {
    let value = to_date_with_precision(&json!("2021-06")).unwrap();
    assert_eq!(value["precision"], json!("month"));
    assert_eq!(value["date"], json!("2021-06-01T00:00:00Z"));
}

#[test]
fn test_precision_transforms_invert() {
    let entity_side = to_date_with_precision(&json!("2021-06-15")).unwrap();
    assert_eq!(from_date_with_precision(&entity_side), Some(json!("2021-06-15")));
    assert_eq!(from_date_with_precision(&json!("2021")), Some(json!("2021")));
    assert_eq!(from_date_with_precision(&json!(12)), None);
}

#[test]
fn test_epoch_transforms() {
    assert_eq!(epoch_to_iso(&json!(1_000)), Some(json!("1970-01-01T00:00:01.000Z")));
    assert_eq!(epoch_to_iso(&json!("x")), None);
    assert_eq!(iso_to_epoch(&json!("1970-01-01T00:00:01.000Z")), Some(json!(1_000)));
    assert_eq!(iso_to_epoch(&json!(42)), Some(json!(42)));
    assert_eq!(iso_to_epoch(&json!("1970")), Some(json!(0)));
}

#[test]
fn test_unchanged_dates_write_back_verbatim() {
    for input in [
        "2021-06-15T10:30:00.250Z",
        "2021-06-15 10:30",
        "June 15, 2021",
        "06/15/2021",
    ] {
        let entity_side = to_date_with_precision(&json!(input)).unwrap();
        assert_eq!(from_date_with_precision(&entity_side), Some(json!(input)));
    }
}

#[test]
fn test_changed_dates_are_reformatted() {
    let mut parsed = parse_date_with_precision("June 15, 2021").unwrap();
    parsed.precision = DatePrecision::Month;
    assert_eq!(format_with_precision(&parsed), "2021-06");

    let mut parsed = parse_date_with_precision("2021-06-15T10:30:00Z").unwrap();
    parsed.date += chrono::Duration::milliseconds(250);
    assert_eq!(format_with_precision(&parsed), "2021-06-15T10:30:00.250Z");
}

#[test]
fn test_time_precision_keeps_fractional_seconds() {
    let parsed = parse_date_with_precision("2021-06-15T10:30:00.250Z").unwrap();
    let rebuilt = DateWithPrecision::new(parsed.date, parsed.precision);
    assert_eq!(format_with_precision(&rebuilt), "2021-06-15T10:30:00.250Z");
}
