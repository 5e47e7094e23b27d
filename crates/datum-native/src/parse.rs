//! Date string parsing (`Date.parse`).
//!
//! Order of attempts:
//! 1. the ISO-8601 interchange format (date-only forms are UTC, date-time
//!    forms without an offset are local)
//! 2. RFC 2822, which also covers the `toUTCString` form
//! 3. the `toString` form
//! 4. a few common local layouts, including the `toLocaleString` form
//! 5. free-form text with a month name: `Sat Mar 20 1993`, `March 20, 1993`,
//!    `Fri, 20 Mar 1993 00:00:00:01 GMT`
//!
//! Anything else is the invalid instant (`NaN`).

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::time::{self, days_in_month, make_date, make_day, make_time, time_clip};
use crate::zone::Zone;

const LOCAL_DATE_TIME_FORMATS: [&str; 3] = [
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y, %I:%M:%S %p",
];

const LOCAL_DATE_FORMATS: [&str; 2] = ["%Y/%m/%d", "%m/%d/%Y"];

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

pub(crate) fn parse(input: &str, zone: Zone) -> f64 {
    let s = input.trim();

    if let Some(t) = parse_iso(s, zone) {
        return t;
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return time_clip(dt.timestamp_millis() as f64);
    }

    if let Ok(dt) = DateTime::parse_from_str(s, "%a %b %d %Y %H:%M:%S GMT%z") {
        return time_clip(dt.timestamp_millis() as f64);
    }

    for fmt in LOCAL_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            tracing::debug!("Parsed {:?} as local time with {:?}", s, fmt);
            return local_to_time(naive, zone);
        }
    }
    for fmt in LOCAL_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            tracing::debug!("Parsed {:?} as local date with {:?}", s, fmt);
            return local_to_time(date.and_time(chrono::NaiveTime::MIN), zone);
        }
    }

    if let Some(t) = parse_free_form(s, zone) {
        tracing::debug!("Parsed {:?} as free-form text", s);
        return t;
    }

    tracing::debug!("Unrecognized date string {:?}", s);
    f64::NAN
}

fn local_to_time(naive: NaiveDateTime, zone: Zone) -> f64 {
    time_clip(zone.utc_time(naive.and_utc().timestamp_millis() as f64))
}

/// Byte cursor over the ISO layout.
struct Cursor<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(s: &'a str) -> Self {
        Self {
            text: s,
            bytes: s.as_bytes(),
            pos: 0,
        }
    }

    /// Consumes the longest run of ASCII bytes matching `pred`.
    fn run(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii() && pred(b)) {
            self.pos += 1;
        }
        &self.text[start..self.pos]
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn digits(&mut self, count: usize) -> Option<i64> {
        let end = self.pos.checked_add(count)?;
        let slice = self.bytes.get(self.pos..end)?;
        if !slice.iter().all(u8::is_ascii_digit) {
            return None;
        }
        self.pos = end;
        Some(slice.iter().fold(0, |acc, b| acc * 10 + i64::from(b - b'0')))
    }

    fn done(&self) -> bool {
        self.pos == self.bytes.len()
    }
}

/// `YYYY[-MM[-DD]][THH:mm[:ss[.sss]][Z|±HH:mm]]`, with `±YYYYYY` years.
fn parse_iso(s: &str, zone: Zone) -> Option<f64> {
    let mut cur = Cursor::new(s);

    let year = match cur.peek()? {
        sign @ (b'+' | b'-') => {
            cur.pos += 1;
            let year = cur.digits(6)?;
            // -000000 is not a valid year
            if sign == b'-' && year == 0 {
                return None;
            }
            if sign == b'-' { -year } else { year }
        }
        _ => cur.digits(4)?,
    };

    let mut month = 1;
    let mut day = 1;
    if cur.eat(b'-') {
        month = cur.digits(2)?;
        if cur.eat(b'-') {
            day = cur.digits(2)?;
        }
    }
    if !(1..=12).contains(&month) || day < 1 || day > i64::from(days_in_month(year, month as u32)) {
        return None;
    }

    let (mut hours, mut minutes, mut seconds, mut millis) = (0, 0, 0, 0);
    let mut has_time = false;
    let mut offset_minutes = None;

    if cur.eat(b'T') || cur.eat(b't') || cur.eat(b' ') {
        has_time = true;
        hours = cur.digits(2)?;
        if !cur.eat(b':') {
            return None;
        }
        minutes = cur.digits(2)?;
        if cur.eat(b':') {
            seconds = cur.digits(2)?;
            if cur.eat(b'.') || cur.eat(b',') {
                let start = cur.pos;
                while cur.peek().is_some_and(|b| b.is_ascii_digit()) {
                    cur.pos += 1;
                }
                let fraction = &s[start..cur.pos];
                if fraction.is_empty() {
                    return None;
                }
                // sub-millisecond digits are dropped
                let padded = format!("{fraction:0<3}");
                millis = padded[..3].parse().ok()?;
            }
        }

        if cur.eat(b'Z') || cur.eat(b'z') {
            offset_minutes = Some(0);
        } else if let Some(sign @ (b'+' | b'-')) = cur.peek() {
            cur.pos += 1;
            let oh = cur.digits(2)?;
            cur.eat(b':');
            let om = cur.digits(2)?;
            if oh > 23 || om > 59 {
                return None;
            }
            let total = oh * 60 + om;
            offset_minutes = Some(if sign == b'-' { -total } else { total });
        }
    }

    if !cur.done() {
        return None;
    }
    let end_of_day = hours == 24 && minutes == 0 && seconds == 0 && millis == 0;
    if (hours > 23 && !end_of_day) || minutes > 59 || seconds > 59 {
        return None;
    }

    let t = make_date(
        make_day(year as f64, (month - 1) as f64, day as f64),
        make_time(hours as f64, minutes as f64, seconds as f64, millis as f64),
    );
    let t = match (has_time, offset_minutes) {
        (_, Some(offset)) => t - offset as f64 * time::MS_PER_MINUTE,
        (true, None) => zone.utc_time(t),
        (false, None) => t,
    };
    Some(time_clip(t))
}

/// Month name, day and year in either order, an optional `h:m[:s[:ms]]`
/// clock with AM/PM, and an optional `GMT`/`UTC` marker with a `±hhmm`
/// offset. Weekday names and parenthesized comments are skipped. Without a
/// zone marker the fields are local time.
fn parse_free_form(s: &str, zone: Zone) -> Option<f64> {
    if !s.is_ascii() {
        return None;
    }
    let mut cur = Cursor::new(s);
    let mut month = None;
    let mut numbers: Vec<i64> = Vec::new();
    let mut clock: Option<[i64; 4]> = None;
    let mut pm = None;
    let mut offset = None;

    while let Some(b) = cur.peek() {
        if b.is_ascii_alphabetic() {
            let word = cur.run(|b| b.is_ascii_alphabetic()).to_ascii_lowercase();
            match word.as_str() {
                "am" | "pm" => pm = Some(word == "pm"),
                "gmt" | "utc" | "ut" | "z" => offset = offset.or(Some(0)),
                _ if word.len() >= 3 => {
                    let prefix = word.as_str();
                    let named_month = MONTH_NAMES
                        .iter()
                        .position(|name| name.starts_with(prefix));
                    if let Some(idx) = named_month {
                        if month.replace(idx as i64).is_some() {
                            return None;
                        }
                    } else if !WEEKDAY_NAMES.iter().any(|name| name.starts_with(prefix)) {
                        return None;
                    }
                }
                _ => return None,
            }
        } else if b.is_ascii_digit() {
            let value: i64 = cur.run(|b| b.is_ascii_digit()).parse().ok()?;
            if cur.peek() == Some(b':') {
                if clock.is_some() {
                    return None;
                }
                clock = Some(read_clock(&mut cur, value)?);
            } else {
                numbers.push(value);
            }
        } else if matches!(b, b'+' | b'-') && clock.is_some() {
            cur.pos += 1;
            let minutes = read_offset(&mut cur)?;
            offset = Some(if b == b'-' { -minutes } else { minutes });
        } else if b == b'(' {
            cur.run(|b| b != b')');
            if !cur.eat(b')') {
                return None;
            }
        } else if matches!(b, b' ' | b',' | b'-' | b'/' | b'.') {
            cur.pos += 1;
        } else {
            return None;
        }
    }

    let month = month?;
    let (day, year) = match numbers.as_slice() {
        [day, year] if *day <= 31 => (*day, *year),
        [year, day] => (*day, *year),
        _ => return None,
    };
    let year = match year {
        0..=49 => 2000 + year,
        50..=99 => 1900 + year,
        _ => year,
    };
    if day < 1 || day > i64::from(days_in_month(year, month as u32 + 1)) {
        return None;
    }

    let [mut hours, minutes, seconds, millis] = clock.unwrap_or_default();
    if let Some(pm) = pm {
        if !(1..=12).contains(&hours) {
            return None;
        }
        hours = hours % 12 + if pm { 12 } else { 0 };
    }
    if hours > 23 || minutes > 59 || seconds > 59 || millis > 999 {
        return None;
    }

    let t = make_date(
        make_day(year as f64, month as f64, day as f64),
        make_time(hours as f64, minutes as f64, seconds as f64, millis as f64),
    );
    let t = match offset {
        Some(offset) => t - offset as f64 * time::MS_PER_MINUTE,
        None => zone.utc_time(t),
    };
    Some(time_clip(t))
}

/// `h:m[:s[:ms | .fraction]]` after the leading hour has been read.
fn read_clock(cur: &mut Cursor<'_>, hours: i64) -> Option<[i64; 4]> {
    let mut clock = [hours, 0, 0, 0];
    for slot in 1..4 {
        if !cur.eat(b':') {
            break;
        }
        clock[slot] = cur.run(|b| b.is_ascii_digit()).parse().ok()?;
        if slot == 2 && cur.eat(b'.') {
            let fraction = cur.run(|b| b.is_ascii_digit());
            if fraction.is_empty() {
                return None;
            }
            clock[3] = format!("{fraction:0<3}")[..3].parse().ok()?;
            break;
        }
    }
    Some(clock)
}

/// `hh`, `hhmm` or `hh:mm`, in minutes.
fn read_offset(cur: &mut Cursor<'_>) -> Option<i64> {
    let digits = cur.run(|b| b.is_ascii_digit());
    let (hours, minutes): (i64, i64) = if cur.eat(b':') {
        (digits.parse().ok()?, cur.run(|b| b.is_ascii_digit()).parse().ok()?)
    } else {
        match digits.len() {
            1 | 2 => (digits.parse().ok()?, 0),
            4 => (digits[..2].parse().ok()?, digits[2..].parse().ok()?),
            _ => return None,
        }
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plus_one() -> Zone {
        Zone::fixed_minutes(60).unwrap()
    }

    #[test]
    fn test_iso_date_only_is_utc() {
        assert_eq!(parse("1993-03-20", plus_one()), 732_585_600_000.0);
        assert_eq!(parse("1993-03", plus_one()), 730_944_000_000.0);
    }

    #[test]
    fn test_iso_date_time_without_offset_is_local() {
        assert_eq!(parse("1993-03-20T00:00", plus_one()), 732_582_000_000.0);
        assert_eq!(parse("1993-03-20T00:00:00.000Z", plus_one()), 732_585_600_000.0);
        assert_eq!(parse("1993-03-20T01:00:00+01:00", plus_one()), 732_585_600_000.0);
    }

    #[test]
    fn test_iso_rejects_out_of_range_fields() {
        assert!(parse("1993-02-29", plus_one()).is_nan());
        assert!(parse("1993-13-01", plus_one()).is_nan());
        assert!(parse("1993-03-20T25:00", plus_one()).is_nan());
        assert!(parse("-000000-01-01", plus_one()).is_nan());
    }

    #[test]
    fn test_rfc2822_and_to_string_forms() {
        assert_eq!(parse("Fri, 19 Mar 1993 23:00:00 GMT", plus_one()), 732_582_000_000.0);
        assert_eq!(parse("Sat Mar 20 1993 00:00:00 GMT+0100", plus_one()), 732_582_000_000.0);
    }

    #[test]
    fn test_common_local_layouts() {
        assert_eq!(parse("1993/03/20", plus_one()), 732_582_000_000.0);
        assert_eq!(parse("3/20/1993, 12:00:00 AM", plus_one()), 732_582_000_000.0);
    }

    #[test]
    fn test_free_form_text() {
        assert_eq!(parse("Sat Mar 20 1993", plus_one()), 732_582_000_000.0);
        assert_eq!(parse("March 20, 1993", plus_one()), 732_582_000_000.0);
        assert_eq!(parse("20 march 93 1:30 pm", plus_one()), 732_630_600_000.0);
        // the weekday is not checked against the date
        assert_eq!(parse("Fri, 20 Mar 1993 00:00:00 GMT", plus_one()), 732_585_600_000.0);
        let commented = "Sat Mar 20 1993 00:00:00 GMT+0100 (Central European Standard Time)";
        assert_eq!(parse(commented, plus_one()), 732_582_000_000.0);
    }

    #[test]
    fn test_fourth_clock_field_is_milliseconds() {
        assert_eq!(parse("Fri, 20 Mar 1993 00:00:00:01 GMT", plus_one()), 732_585_600_001.0);
        assert_eq!(parse("Fri, 20 Mar 1993 00:00:00.25 GMT", plus_one()), 732_585_600_250.0);
    }

    #[test]
    fn test_free_form_rejects_incomplete_text() {
        assert!(parse("March 1993", plus_one()).is_nan());
        assert!(parse("Feb 30 1993", plus_one()).is_nan());
        assert!(parse("Mar 20 1993 13:00 pm", plus_one()).is_nan());
        assert!(parse("Smarch 20 1993", plus_one()).is_nan());
    }

    #[test]
    fn test_garbage_is_invalid() {
        assert!(parse("not a date", plus_one()).is_nan());
        assert!(parse("", plus_one()).is_nan());
    }
}
