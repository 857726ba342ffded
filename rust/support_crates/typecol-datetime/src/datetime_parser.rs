use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::NANOSECONDS_PER_SECOND;

pub struct DateTimeParser;

impl DateTimeParser {
    /// Formats carrying an explicit UTC offset.
    const OFFSET_FORMATS: &'static [&'static str] = &[
        "%Y-%m-%d %H:%M:%S%.f %z",
        "%Y-%m-%d %H:%M:%S%.f%:z",
        "%Y-%m-%d %H:%M:%S%.f %:z",
        "%Y-%m-%dT%H:%M:%S%.f%z",
        "%a %b %d %H:%M:%S %z %Y",
    ];

    /// US style date and time with a two-digit year. `%Y` would also accept
    /// two digits and yield a first-century year, so these go first.
    const SHORT_YEAR_DATETIME_FORMATS: &'static [&'static str] = &[
        "%m/%d/%y %H:%M:%S%.f",
        "%m/%d/%y %H:%M",
        "%m/%d/%y %I:%M:%S %p",
        "%m/%d/%y %I:%M %p",
    ];

    /// Date and time formats without an offset; these are read as UTC.
    const NAIVE_DATETIME_FORMATS: &'static [&'static str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S,%3f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%d %I:%M:%S %p",
        "%Y/%m/%d %H:%M:%S%.f",
        "%Y/%m/%d %H:%M",
        "%m/%d/%Y %H:%M:%S%.f",
        "%m/%d/%Y %H:%M",
        "%m/%d/%Y %I:%M:%S %p",
        "%m/%d/%Y %I:%M %p",
        "%B %d, %Y %I:%M:%S %p",
        "%B %d, %Y %H:%M:%S",
        "%B %d, %Y, %H:%M:%S",
        "%a %b %e %H:%M:%S %Y",
        "%d %b %Y %H:%M",
        "%d %b %Y, %H:%M",
    ];

    const NAIVE_DATE_FORMATS: &'static [&'static str] = &[
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%Y.%m.%d",
        "%m/%d/%Y",
        "%m.%d.%Y",
        "%B %d, %Y",
        "%B %d %Y",
        "%b. %d, %Y",
        "%d %B %Y",
        "%Y-%b-%d",
        "%Y年%m月%d日",
    ];

    /// Date formats with a two-digit year, tried before the four-digit ones
    /// when the input ends in exactly two digits.
    const SHORT_YEAR_DATE_FORMATS: &'static [&'static str] = &[
        "%m/%d/%y",
        "%m.%d.%y",
        "%B %d, %y",
        "%b. %d, %y",
        "%d %B %y",
    ];

    /// Attempts to parse a date/time string in any of the common human or machine formats.
    ///
    /// Recognized inputs include:
    /// - RFC 3339 / ISO 8601: `2009-08-12T22:15:09Z`, `2009-08-12T22:15:09-07:00`
    /// - RFC 2822: `Mon, 02 Jan 2006 15:04:05 -0700`
    /// - ISO-like dates and times: `2014-04-26`, `2014-04-26 17:24:37.3186369`,
    ///   `2014-12-16 06:20:00 UTC`, `2017-07-19 03:21:51+00:00`
    /// - US style: `3/31/2014`, `08/21/71`, `4/8/2014 22:05`, `8/8/1965 01:00:01 PM`
    /// - Written out: `May 1, 2019`, `October 7th, 1970`, `oct. 7, 1970`, `7 oct 1970`
    /// - Partial: `2014-04`, `2014.03`, `2014`
    /// - Digits only: `20140601`, `20140722105203`, and Unix timestamps in
    ///   seconds (10 digits), milliseconds (13), microseconds (16) or nanoseconds (19).
    ///
    /// Inputs without an explicit offset are interpreted as UTC.
    ///
    /// # Returns
    ///
    /// * `Some(DateTime<Utc>)` - The parsed instant
    /// * `None` - If the string is not recognized as a date/time
    pub fn try_parse(s: &str) -> Option<DateTime<Utc>> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if s.bytes().all(|b| b.is_ascii_digit()) {
            return Self::parse_digits(s);
        }

        if let Ok(t) = DateTime::parse_from_rfc3339(s) {
            return Some(t.with_timezone(&Utc));
        }
        if let Ok(t) = DateTime::parse_from_rfc2822(s) {
            return Some(t.with_timezone(&Utc));
        }
        for format in Self::OFFSET_FORMATS {
            if let Ok(t) = DateTime::parse_from_str(s, format) {
                return Some(t.with_timezone(&Utc));
            }
        }

        let s = Self::trim_utc_timezones(s);
        let s = Self::strip_ordinal_suffixes(s);
        let s = s.as_str();

        let datetime_formats = Self::SHORT_YEAR_DATETIME_FORMATS
            .iter()
            .chain(Self::NAIVE_DATETIME_FORMATS);
        for format in datetime_formats {
            if let Ok(t) = NaiveDateTime::parse_from_str(s, format) {
                return Some(Utc.from_utc_datetime(&t));
            }
        }

        let short_year: &[&str] = if Self::ends_with_short_year(s) {
            Self::SHORT_YEAR_DATE_FORMATS
        } else {
            &[]
        };
        for format in short_year.iter().chain(Self::NAIVE_DATE_FORMATS) {
            if let Ok(d) = NaiveDate::parse_from_str(s, format) {
                return Self::start_of_day(d);
            }
        }

        Self::parse_year_month(s)
    }

    /// Parses an all-digit string, choosing the interpretation by its length.
    fn parse_digits(s: &str) -> Option<DateTime<Utc>> {
        match s.len() {
            4 => {
                let year = s.parse::<i32>().ok()?;
                Self::start_of_day(NaiveDate::from_ymd_opt(year, 1, 1)?)
            }
            8 => Self::start_of_day(Self::compact_date(s)?),
            14 => {
                let (date, time) = s.split_at(8);
                let field = |i: usize| time[i..i + 2].parse::<u32>().ok();
                let t = Self::compact_date(date)?.and_hms_opt(field(0)?, field(2)?, field(4)?)?;
                Some(Utc.from_utc_datetime(&t))
            }
            10 => {
                let seconds = s.parse::<i64>().ok()?;
                DateTime::<Utc>::from_timestamp(seconds, 0)
            }
            13 => {
                let millis = s.parse::<i64>().ok()?;
                DateTime::<Utc>::from_timestamp_millis(millis)
            }
            16 => {
                let micros = s.parse::<i64>().ok()?;
                DateTime::<Utc>::from_timestamp_micros(micros)
            }
            19 => {
                let nanos = s.parse::<i64>().ok()?;
                let seconds = nanos.div_euclid(NANOSECONDS_PER_SECOND);
                let subsec = nanos.rem_euclid(NANOSECONDS_PER_SECOND) as u32;
                DateTime::<Utc>::from_timestamp(seconds, subsec)
            }
            _ => None,
        }
    }

    /// `yyyymmdd`
    fn compact_date(s: &str) -> Option<NaiveDate> {
        let (year, rest) = s.split_at(4);
        let (month, day) = rest.split_at(2);
        NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
    }

    /// Parses `yyyy-mm` and `yyyy.mm` as the first day of the month.
    fn parse_year_month(s: &str) -> Option<DateTime<Utc>> {
        let (year, month) = s.split_once(['-', '.'])?;
        if year.len() != 4 || month.len() != 2 {
            return None;
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }
        let date = NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)?;
        Self::start_of_day(date)
    }

    fn start_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
        date.and_hms_opt(0, 0, 0)
            .map(|t| Utc.from_utc_datetime(&t))
    }

    fn trim_utc_timezones(mut s: &str) -> &str {
        if s.ends_with('Z') {
            s = &s[..s.len() - 1];
        } else if s.ends_with("GMT") || s.ends_with("UTC") {
            s = &s[..s.len() - 3];
        }
        s.trim()
    }

    /// Removes English ordinal suffixes that follow a number: `7th` becomes `7`.
    fn strip_ordinal_suffixes(s: &str) -> String {
        const SUFFIXES: [&str; 4] = ["st", "nd", "rd", "th"];

        let mut out = String::with_capacity(s.len());
        let mut rest = s;
        let mut prev_digit = false;
        while let Some(c) = rest.chars().next() {
            if prev_digit {
                let suffix = SUFFIXES.iter().find(|suffix| {
                    rest.len() >= 2
                        && rest.is_char_boundary(2)
                        && rest[..2].eq_ignore_ascii_case(suffix)
                        && !rest[2..].starts_with(|c: char| c.is_alphabetic())
                });
                if suffix.is_some() {
                    rest = &rest[2..];
                    prev_digit = false;
                    continue;
                }
            }
            out.push(c);
            prev_digit = c.is_ascii_digit();
            rest = &rest[c.len_utf8()..];
        }
        out
    }

    /// Returns `true` if the trailing run of digits is exactly two long and is
    /// preceded by a separator (`/`, `.`, `,` or a space).
    fn ends_with_short_year(s: &str) -> bool {
        let digits = s.bytes().rev().take_while(|b| b.is_ascii_digit()).count();
        if digits != 2 || s.len() == digits {
            return false;
        }
        matches!(s.as_bytes()[s.len() - digits - 1], b'/' | b'.' | b',' | b' ')
    }
}
