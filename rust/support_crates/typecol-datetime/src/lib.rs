//! Date/time helpers shared by the typecol value containers.
//!
//! Date/time payloads are `chrono::DateTime<Utc>`. Two instants are special:
//!
//! - the *zero time* (`0001-01-01T00:00:00Z`), which marks a null date/time payload;
//! - the Unix epoch, which numeric and boolean values are anchored to.
//!
//! Numeric conversions interpret integers as nanoseconds since the Unix epoch.

pub mod datetime_parser;

use chrono::{DateTime, TimeZone, Utc};
use std::sync::OnceLock;

pub use datetime_parser::DateTimeParser;

pub const NANOSECONDS_PER_SECOND: i64 = 1_000_000_000;

/// Seconds between the zero time (`0001-01-01T00:00:00Z`) and the Unix epoch.
pub const ZERO_TIME_UNIX_SECONDS: i64 = -62_135_596_800;

static ZERO_TIME: OnceLock<DateTime<Utc>> = OnceLock::new();

/// Returns the zero-time sentinel, `0001-01-01T00:00:00Z`.
pub fn zero_time() -> DateTime<Utc> {
    *ZERO_TIME.get_or_init(|| {
        DateTime::<Utc>::from_timestamp(ZERO_TIME_UNIX_SECONDS, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
    })
}

#[inline]
pub fn is_zero_time(t: &DateTime<Utc>) -> bool {
    *t == zero_time()
}

/// Returns the Unix epoch, `1970-01-01T00:00:00Z`.
#[inline]
pub fn unix_epoch() -> DateTime<Utc> {
    Utc.timestamp_nanos(0)
}

/// Interprets `nanoseconds` as an offset from the Unix epoch.
///
/// Every `i64` value maps to an instant between the years 1677 and 2262.
#[inline]
pub fn from_unix_nanoseconds(nanoseconds: i64) -> DateTime<Utc> {
    Utc.timestamp_nanos(nanoseconds)
}

/// Interprets a floating point `nanoseconds` value as an offset from the Unix epoch.
///
/// The fractional part is truncated. Returns `None` for NaN, infinities and
/// values outside the `i64` nanosecond range.
pub fn from_unix_nanoseconds_f64(nanoseconds: f64) -> Option<DateTime<Utc>> {
    // 2^63, the first value past `i64::MAX`.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if !(-LIMIT..LIMIT).contains(&nanoseconds) {
        return None;
    }
    Some(from_unix_nanoseconds(nanoseconds as i64))
}

/// Returns the number of nanoseconds since the Unix epoch, or `None` when the
/// instant is outside the range representable by an `i64`.
#[inline]
pub fn to_unix_nanoseconds(t: &DateTime<Utc>) -> Option<i64> {
    t.timestamp_nanos_opt()
}

/// Default textual rendering of a date/time payload, e.g. `2019-05-01 00:00:00 UTC`.
pub fn format_datetime(t: &DateTime<Utc>) -> String {
    t.to_string()
}

/// Parses `s` with the permissive parser, see [`DateTimeParser::try_parse`].
pub fn parse_any(s: &str) -> Option<DateTime<Utc>> {
    DateTimeParser::try_parse(s)
}
