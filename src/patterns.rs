//! Candidate input-pattern table and UTC parsing.
//!
//! Warehouse exports, API payloads and locale-formatted UI strings encode the
//! same instant in dozens of textual shapes. This module holds the ordered
//! table of every shape the engine recognizes and the scan that interprets a
//! raw value against it. The slice order IS the contract: candidates are
//! tried first to last and the first structurally valid parse wins, so
//! ambiguous strings (year-month-day vs year-day-month, month-first vs
//! day-first) resolve by table position, never by scoring.
//!
//! Every interpretation is anchored to UTC. Values carrying an explicit
//! offset are normalized to the absolute instant; everything else is read as
//! UTC wall time. The ambient process timezone is never consulted, which is
//! what makes output byte-identical across hosts.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::DatetimeParseError;

/// How a candidate pattern interprets the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Calendar date and time of day, read as UTC wall time.
    DateTime(&'static str),
    /// Calendar date only; midnight UTC is assumed.
    Date(&'static str),
    /// Time of day only; anchored to the Unix epoch date so the result is
    /// deterministic (the current date is ambient state).
    Time(&'static str),
    /// Date and time carrying an explicit UTC offset (`Z` accepted).
    Offset(&'static str),
    /// Seconds since the Unix epoch: signed integer text, at most 10 digits.
    EpochSeconds,
    /// Milliseconds since the Unix epoch: integer text of 11 to 14 digits.
    EpochMillis,
}

/// One entry of the candidate table.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub label: &'static str,
    pub kind: PatternKind,
}

const fn entry(label: &'static str, kind: PatternKind) -> Pattern {
    Pattern { label, kind }
}

/// The ordered candidate table.
///
/// Time-only shapes come first, then datetime shapes from most to least
/// structured, then epoch timestamps, then bare day-first dates. The
/// day-first locale entries sit ahead of their month-first twins, so an
/// ambiguous "05/06/2023, 13:30:00" reads day-first; a month field above 12
/// fails range validation and falls through to the month-first twin.
pub static CANDIDATE_PATTERNS: &[Pattern] = &[
    // "13:30:00", "13:30:00.0", "13:30:00.123"
    entry("time-seconds", PatternKind::Time("%H:%M:%S%.f")),
    // "13:30"
    entry("time-minutes", PatternKind::Time("%H:%M")),
    // "1:30 PM"
    entry("time-12h", PatternKind::Time("%I:%M %p")),
    // "2023-07-31 13:30:00", "2023-07-31 13:30:00.0" (warehouse exports)
    entry("ymd-space-seconds", PatternKind::DateTime("%Y-%m-%d %H:%M:%S%.f")),
    // "2023-07-31T13:30:00", "2023-07-31T13:30:00.123"
    entry("iso8601-seconds", PatternKind::DateTime("%Y-%m-%dT%H:%M:%S%.f")),
    // "2023-07-31T13:30"
    entry("iso8601-minutes", PatternKind::DateTime("%Y-%m-%dT%H:%M")),
    // "Mon, 31 Jul 2023 13:30:00 GMT"
    entry("rfc1123-gmt", PatternKind::DateTime("%a, %d %b %Y %H:%M:%S GMT")),
    // "7/31/2023, 1:30:00 PM" (en-US locale string)
    entry("locale-en-us", PatternKind::DateTime("%m/%d/%Y, %I:%M:%S %p")),
    // "07-31-2023T13:30:00"
    entry("mdy-dash-t-seconds", PatternKind::DateTime("%m-%d-%YT%H:%M:%S")),
    // "2023-07-31T13:30:00Z", "2023-07-31T06:30:00-07:00", "...+0930"
    entry("iso8601-offset", PatternKind::Offset("%Y-%m-%dT%H:%M:%S%#z")),
    // "2023-31-07 13:30:00" (year-day-month warehouse export)
    entry("ydm-space-seconds", PatternKind::DateTime("%Y-%d-%m %H:%M:%S")),
    // "31/07/2023, 13:30:00" (fr-FR locale string, day first)
    entry("locale-fr-fr", PatternKind::DateTime("%d/%m/%Y, %H:%M:%S")),
    // "Monday, July 31, 2023 1:30:00 PM"
    entry("weekday-long-12h", PatternKind::DateTime("%A, %B %d, %Y %I:%M:%S %p")),
    // "Monday, July 31, 2023, 1:30:00 PM PDT"
    entry("weekday-long-12h-zone", PatternKind::DateTime("%A, %B %d, %Y, %I:%M:%S %p PDT")),
    // "07/31/2023 1:30:00 PM"
    entry("mdy-12h-seconds", PatternKind::DateTime("%m/%d/%Y %I:%M:%S %p")),
    // "Monday, July 31, 2023, 13:30:00 PDT"
    entry("weekday-long-24h-zone", PatternKind::DateTime("%A, %B %d, %Y, %H:%M:%S PDT")),
    // "07/31/2023, 13:30:00"
    entry("mdy-comma-24h-seconds", PatternKind::DateTime("%m/%d/%Y, %H:%M:%S")),
    // "Monday, July 31, 2023 13:30:00"
    entry("weekday-long-24h", PatternKind::DateTime("%A, %B %d, %Y %H:%M:%S")),
    // "07/31/2023 13:30:00"
    entry("mdy-24h-seconds", PatternKind::DateTime("%m/%d/%Y %H:%M:%S")),
    // "20230731T133000" (basic ISO 8601)
    entry("basic-iso8601", PatternKind::DateTime("%Y%m%dT%H%M%S")),
    // "2023-07-31 13:30"
    entry("ymd-space-minutes", PatternKind::DateTime("%Y-%m-%d %H:%M")),
    // "07-31-2023 1:30 PM"
    entry("mdy-dash-12h", PatternKind::DateTime("%m-%d-%Y %I:%M %p")),
    // "07/31/2023 1:30 PM"
    entry("mdy-slash-12h", PatternKind::DateTime("%m/%d/%Y %I:%M %p")),
    // "07-31-2023 13:30"
    entry("mdy-dash-24h", PatternKind::DateTime("%m-%d-%Y %H:%M")),
    // "07/31/2023 13:30"
    entry("mdy-slash-24h", PatternKind::DateTime("%m/%d/%Y %H:%M")),
    // "July 31, 2023 13:30"
    entry("month-name-24h", PatternKind::DateTime("%B %d, %Y %H:%M")),
    // "07/31/2023, 13:30"
    entry("mdy-comma-24h", PatternKind::DateTime("%m/%d/%Y, %H:%M")),
    // "July 31, 2023 at 13:30 PDT"
    entry("month-name-at-24h-zone", PatternKind::DateTime("%B %d, %Y at %H:%M PDT")),
    // "July 31, 2023 1:30 PM"
    entry("month-name-12h", PatternKind::DateTime("%B %d, %Y %I:%M %p")),
    // "7/31/23, 1:30 PM"
    entry("short-mdy-12h", PatternKind::DateTime("%m/%d/%y, %I:%M %p")),
    // "July 31, 2023 at 1:30 PM PDT"
    entry("month-name-at-12h-zone", PatternKind::DateTime("%B %d, %Y at %I:%M %p PDT")),
    // "20230731T1330"
    entry("basic-iso8601-minutes", PatternKind::DateTime("%Y%m%dT%H%M")),
    // "1690810200"
    entry("unix-seconds", PatternKind::EpochSeconds),
    // "1690810200000"
    entry("unix-millis", PatternKind::EpochMillis),
    // "31/07/2023" (fr-FR locale date)
    entry("date-dmy-slash", PatternKind::Date("%d/%m/%Y")),
    // "31-07-2023"
    entry("date-dmy-dash", PatternKind::Date("%d-%m-%Y")),
];

/// The fixed year-month-day shape the narrow date-only parse accepts.
pub const DATE_ONLY_PATTERN: &str = "%Y-%m-%d";

/// Interpret a raw value against the candidate table, returning the instant
/// in UTC.
///
/// Candidates are tried in table order; the first structurally valid parse
/// wins and later candidates are never consulted. Parsing is strict: the
/// whole input must be consumed and all fields must be in range (including
/// weekday-name consistency for the long shapes).
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, DatetimeParseError> {
    for pattern in CANDIDATE_PATTERNS {
        if let Some(instant) = pattern.kind.try_parse(value) {
            return Ok(instant);
        }
    }
    Err(DatetimeParseError::NoPatternMatched {
        value: value.to_string(),
    })
}

/// Parse a value already in the fixed year-month-day shape.
///
/// Date-only display formats use this narrow parse instead of the candidate
/// table; inputs in any other shape are not reinterpreted.
pub fn parse_date_only(value: &str) -> Result<NaiveDate, DatetimeParseError> {
    NaiveDate::parse_from_str(value, DATE_ONLY_PATTERN).map_err(|_| {
        DatetimeParseError::NotYearMonthDay {
            value: value.to_string(),
        }
    })
}

impl PatternKind {
    fn try_parse(&self, value: &str) -> Option<DateTime<Utc>> {
        match self {
            PatternKind::DateTime(fmt) => NaiveDateTime::parse_from_str(value, fmt)
                .ok()
                .map(|dt| dt.and_utc()),
            PatternKind::Date(fmt) => NaiveDate::parse_from_str(value, fmt)
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN).and_utc()),
            PatternKind::Time(fmt) => NaiveTime::parse_from_str(value, fmt)
                .ok()
                .map(|t| DateTime::UNIX_EPOCH.date_naive().and_time(t).and_utc()),
            PatternKind::Offset(fmt) => DateTime::parse_from_str(value, fmt)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            PatternKind::EpochSeconds => {
                epoch_digits(value, 1, 10).and_then(|n| DateTime::from_timestamp(n, 0))
            }
            PatternKind::EpochMillis => {
                epoch_digits(value, 11, 14).and_then(DateTime::from_timestamp_millis)
            }
        }
    }
}

/// Parse integer epoch text whose digit count falls in the given range.
fn epoch_digits(value: &str, min_len: usize, max_len: usize) -> Option<i64> {
    let digits = value.strip_prefix('-').unwrap_or(value);
    if digits.len() < min_len || digits.len() > max_len {
        return None;
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse::<i64>().ok()
}
