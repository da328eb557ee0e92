//! Permissive timestamp parsing for `eventDate` style columns.
//!
//! Inputs are tried against a fixed list of layouts (ISO-8601 first, then
//! month-first and day-first numeric dates, then spelled-out month names).
//! Zone-aware inputs are converted to UTC. Anything that does not parse, or
//! parses to a year outside 1677..=2262, is treated as missing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const MIN_YEAR: i32 = 1677;
const MAX_YEAR: i32 = 2262;

const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d.%m.%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m/%d/%y",
    "%d/%m/%y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%Y%m%d",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d-%b-%Y",
    "%d-%B-%Y",
];

fn in_bounds(value: NaiveDateTime) -> Option<NaiveDateTime> {
    use chrono::Datelike;
    (MIN_YEAR..=MAX_YEAR)
        .contains(&value.year())
        .then_some(value)
}

/// Parses a timestamp cell; `None` when no supported layout matches.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value)
        && let Some(valid) = in_bounds(parsed.naive_utc())
    {
        return Some(valid);
    }
    for format in ZONED_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(value, format)
            && let Some(valid) = in_bounds(parsed.naive_utc())
        {
            return Some(valid);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format)
            && let Some(valid) = in_bounds(parsed)
        {
            return Some(valid);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format)
            && let Some(valid) = in_bounds(date.and_time(NaiveTime::MIN))
        {
            return Some(valid);
        }
    }
    parse_partial_date(value)
}

/// `YYYY-MM` and `YYYY` resolve to the first day of the period.
fn parse_partial_date(value: &str) -> Option<NaiveDateTime> {
    let bytes = value.as_bytes();
    let all_digits = |part: &[u8]| !part.is_empty() && part.iter().all(u8::is_ascii_digit);
    let (year, month) = match bytes.len() {
        4 if all_digits(bytes) => (value.parse::<i32>().ok()?, 1),
        7 if bytes[4] == b'-' && all_digits(&bytes[..4]) && all_digits(&bytes[5..]) => {
            (value[..4].parse::<i32>().ok()?, value[5..].parse::<u32>().ok()?)
        }
        _ => return None,
    };
    let date = NaiveDate::from_ymd_opt(year, month, 1)?;
    in_bounds(date.and_time(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn parses_iso_dates_and_datetimes() {
        assert_eq!(parse_timestamp("2023-01-15"), Some(ymd_hms(2023, 1, 15, 0, 0, 0)));
        assert_eq!(
            parse_timestamp("2023-01-15T10:30:00"),
            Some(ymd_hms(2023, 1, 15, 10, 30, 0))
        );
        assert_eq!(
            parse_timestamp("2023-01-15 10:30"),
            Some(ymd_hms(2023, 1, 15, 10, 30, 0))
        );
    }

    #[test]
    fn converts_zoned_inputs_to_utc() {
        assert_eq!(
            parse_timestamp("2023-01-15T10:30:00+05:30"),
            Some(ymd_hms(2023, 1, 15, 5, 0, 0))
        );
        assert_eq!(
            parse_timestamp("2023-01-15T10:30:00Z"),
            Some(ymd_hms(2023, 1, 15, 10, 30, 0))
        );
    }

    #[test]
    fn prefers_month_first_then_falls_back_to_day_first() {
        assert_eq!(parse_timestamp("03/04/2023"), Some(ymd_hms(2023, 3, 4, 0, 0, 0)));
        assert_eq!(parse_timestamp("25/04/2023"), Some(ymd_hms(2023, 4, 25, 0, 0, 0)));
    }

    #[test]
    fn parses_spelled_out_months() {
        assert_eq!(parse_timestamp("15 January 2023"), Some(ymd_hms(2023, 1, 15, 0, 0, 0)));
        assert_eq!(parse_timestamp("Jan 15, 2023"), Some(ymd_hms(2023, 1, 15, 0, 0, 0)));
        assert_eq!(parse_timestamp("15-Jan-2023"), Some(ymd_hms(2023, 1, 15, 0, 0, 0)));
    }

    #[test]
    fn parses_partial_dates() {
        assert_eq!(parse_timestamp("2023-06"), Some(ymd_hms(2023, 6, 1, 0, 0, 0)));
        assert_eq!(parse_timestamp("2023"), Some(ymd_hms(2023, 1, 1, 0, 0, 0)));
        assert_eq!(parse_timestamp("20230115"), Some(ymd_hms(2023, 1, 15, 0, 0, 0)));
    }

    #[test]
    fn rejects_garbage_and_out_of_range_years() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2023-13-45"), None);
        assert_eq!(parse_timestamp("1200-01-01"), None);
    }
}
