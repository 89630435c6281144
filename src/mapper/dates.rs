//! Date transforms used by the property maps.
//!
//! The store keeps creation and modification times as epoch milliseconds
//! and free-form published dates as strings whose shape carries their
//! precision (`"2021"`, `"2021-06"`, `"2021-06-15"`, `"2021-06-15T10:30:00Z"`).
//! Entities see RFC 3339 strings and `{ date, precision }` objects.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::LazyLock;

#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<year>\d{4})(?:-(?P<month>\d{2})(?:-(?P<day>\d{2}))?)?$")
        .expect("DATE_SHAPE is a valid regex literal")
});

#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
static TIME_OF_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{1,2}:\d{2}").expect("TIME_OF_DAY is a valid regex literal")
});

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const NAIVE_DATE_FORMATS: [&str; 3] = ["%m/%d/%Y", "%B %d, %Y", "%b %d, %Y"];

/// Granularity a date string was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePrecision {
    Year,
    Month,
    Day,
    Time,
}

/// A parsed date together with the precision it was given in.
///
/// `original` holds the string the date was parsed from. It is written back
/// verbatim as long as `date` and `precision` still describe it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWithPrecision {
    pub date: DateTime<Utc>,
    pub precision: DatePrecision,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
}

impl DateWithPrecision {
    #[must_use]
    pub fn new(date: DateTime<Utc>, precision: DatePrecision) -> Self {
        Self {
            date,
            precision,
            original: None,
        }
    }

    fn with_original(mut self, original: &str) -> Self {
        self.original = Some(original.to_string());
        self
    }

    /// The parsed-from string, if `date` and `precision` were not changed since.
    fn unchanged_original(&self) -> Option<&str> {
        let original = self.original.as_deref()?;
        let reparsed = parse_shape(original)?;
        (reparsed.date == self.date && reparsed.precision == self.precision).then_some(original)
    }
}

/// Parse a date string, inferring its precision from its shape.
///
/// `YYYY` is year precision, `YYYY-MM` month and `YYYY-MM-DD` day. Any
/// other parseable string is day precision unless it carries a time of
/// day. Unparseable strings yield `None`.
#[must_use]
pub fn parse_date_with_precision(input: &str) -> Option<DateWithPrecision> {
    parse_shape(input).map(|parsed| parsed.with_original(input))
}

fn parse_shape(input: &str) -> Option<DateWithPrecision> {
    let input = input.trim();
    if let Some(captures) = DATE_SHAPE.captures(input) {
        let year = captures.name("year")?.as_str().parse().ok()?;
        let month = captures.name("month").map_or(Some(1), |m| m.as_str().parse().ok())?;
        let day = captures.name("day").map_or(Some(1), |d| d.as_str().parse().ok())?;
        let precision = if captures.name("day").is_some() {
            DatePrecision::Day
        } else if captures.name("month").is_some() {
            DatePrecision::Month
        } else {
            DatePrecision::Year
        };
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        return Some(DateWithPrecision::new(
            date.and_hms_opt(0, 0, 0)?.and_utc(),
            precision,
        ));
    }

    let date = parse_loose(input)?;
    let precision = if TIME_OF_DAY.is_match(input) {
        DatePrecision::Time
    } else {
        DatePrecision::Day
    };
    Some(DateWithPrecision::new(date, precision))
}

fn parse_loose(input: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Some(date.with_timezone(&Utc));
    }
    if let Some(naive) = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
    {
        return Some(naive.and_utc());
    }
    NAIVE_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Render a date in the shape its precision implies.
///
/// An unchanged date renders as the string it was parsed from.
#[must_use]
pub fn format_with_precision(value: &DateWithPrecision) -> String {
    if let Some(original) = value.unchanged_original() {
        return original.to_string();
    }
    match value.precision {
        DatePrecision::Year => value.date.format("%Y").to_string(),
        DatePrecision::Month => value.date.format("%Y-%m").to_string(),
        DatePrecision::Day => value.date.format("%Y-%m-%d").to_string(),
        DatePrecision::Time => value.date.to_rfc3339_opts(SecondsFormat::AutoSi, true),
    }
}

/// Epoch milliseconds to an RFC 3339 string.
#[must_use]
pub fn epoch_to_iso(value: &Value) -> Option<Value> {
    let millis = value.as_i64()?;
    let date = DateTime::<Utc>::from_timestamp_millis(millis)?;
    Some(Value::String(date.to_rfc3339_opts(SecondsFormat::Millis, true)))
}

/// An RFC 3339 (or otherwise parseable) date string to epoch milliseconds.
#[must_use]
pub fn iso_to_epoch(value: &Value) -> Option<Value> {
    if value.is_i64() {
        return Some(value.clone());
    }
    let date = parse_loose(value.as_str()?)
        .or_else(|| parse_date_with_precision(value.as_str()?).map(|parsed| parsed.date))?;
    Some(Value::from(date.timestamp_millis()))
}

/// A stored date string to a `{ date, precision }` object.
#[must_use]
pub fn to_date_with_precision(value: &Value) -> Option<Value> {
    let parsed = parse_date_with_precision(value.as_str()?)?;
    serde_json::to_value(parsed).ok()
}

/// A `{ date, precision }` object (or a bare date string) back to the
/// precision-shaped string the store keeps.
#[must_use]
pub fn from_date_with_precision(value: &Value) -> Option<Value> {
    let parsed = match value {
        Value::String(s) => parse_date_with_precision(s)?,
        Value::Object(_) => serde_json::from_value(value.clone()).ok()?,
        _ => return None,
    };
    Some(Value::String(format_with_precision(&parsed)))
}

#[cfg(test)]
#[path = "dates_tests.rs"]
mod dates_tests;
