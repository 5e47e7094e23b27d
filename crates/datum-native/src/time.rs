//! Time value arithmetic
//!
//! The abstract operations behind every `NativeDate` constructor, getter and
//! setter: `Day`, `TimeWithinDay`, `MakeTime`, `MakeDay`, `MakeDate` and
//! `TimeClip`. They work on `f64` so `NaN` flows through untouched, which is
//! how an invalid instant stays invalid across a chain of setters.

pub const MS_PER_SECOND: f64 = 1_000.0;
pub const MS_PER_MINUTE: f64 = 60_000.0;
pub const MS_PER_HOUR: f64 = 3_600_000.0;
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Largest magnitude a time value may have (100,000,000 days either side of
/// the epoch).
pub const MAX_TIME: f64 = 8.64e15;

// Years past this can never produce a clippable time value; stopping here
// keeps the civil conversion inside i64.
const MAX_YEAR_SPAN: f64 = 1_000_000.0;

const MS_PER_DAY_I: i64 = 86_400_000;
const DAYS_0000_03_01_TO_EPOCH: i64 = 719_468;

/// Calendar and clock fields of a time value in a single frame (UTC or local).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parts {
    pub year: i64,
    /// 0-based, January is 0
    pub month: u32,
    pub date: u32,
    /// 0 is Sunday
    pub weekday: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub millis: u32,
}

impl Parts {
    pub fn from_time(t: f64) -> Option<Self> {
        if !t.is_finite() {
            return None;
        }
        let t = t as i64;
        let days = t.div_euclid(MS_PER_DAY_I);
        let in_day = t.rem_euclid(MS_PER_DAY_I);
        let (year, month, date) = civil_from_days(days);
        Some(Self {
            year,
            month: month - 1,
            date,
            weekday: (days + 4).rem_euclid(7) as u32,
            hours: (in_day / 3_600_000) as u32,
            minutes: (in_day / 60_000 % 60) as u32,
            seconds: (in_day / 1_000 % 60) as u32,
            millis: (in_day % 1_000) as u32,
        })
    }
}

/// `Day(t)`: days since the epoch.
pub fn day(t: f64) -> f64 {
    (t / MS_PER_DAY).floor()
}

/// `TimeWithinDay(t)`: milliseconds since midnight.
pub fn time_within_day(t: f64) -> f64 {
    t.rem_euclid(MS_PER_DAY)
}

/// `MakeTime(hour, min, sec, ms)`, each field truncated, no range checks.
pub fn make_time(hours: f64, minutes: f64, seconds: f64, millis: f64) -> f64 {
    if !(hours.is_finite() && minutes.is_finite() && seconds.is_finite() && millis.is_finite()) {
        return f64::NAN;
    }
    hours.trunc() * MS_PER_HOUR
        + minutes.trunc() * MS_PER_MINUTE
        + seconds.trunc() * MS_PER_SECOND
        + millis.trunc()
}

/// `MakeDay(year, month, date)`. Months outside 0..12 carry into the year and
/// dates outside the month carry into neighbouring months.
pub fn make_day(year: f64, month: f64, date: f64) -> f64 {
    if !(year.is_finite() && month.is_finite() && date.is_finite()) {
        return f64::NAN;
    }
    let month = month.trunc();
    let year = year.trunc() + (month / 12.0).floor();
    if year.abs() > MAX_YEAR_SPAN {
        return f64::NAN;
    }
    let month = month.rem_euclid(12.0) as u32 + 1;
    days_from_civil(year as i64, month, 1) as f64 + date.trunc() - 1.0
}

/// `MakeDate(day, time)`.
pub fn make_date(day: f64, time: f64) -> f64 {
    let tv = day * MS_PER_DAY + time;
    if tv.is_finite() { tv } else { f64::NAN }
}

/// `TimeClip(time)`: `NaN` outside ±8.64e15, truncated otherwise.
pub fn time_clip(time: f64) -> f64 {
    if !time.is_finite() || time.abs() > MAX_TIME {
        return f64::NAN;
    }
    // `+ 0.0` folds -0 into +0
    time.trunc() + 0.0
}

/// Days since the epoch for a proleptic Gregorian date (month 1..=12).
///
/// Algorithm from Howard Hinnant: http://howardhinnant.github.io/date_algorithms.html
pub fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y.rem_euclid(400); // [0, 399]
    let m = i64::from(month);
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i64::from(day) - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - DAYS_0000_03_01_TO_EPOCH
}

/// Inverse of [`days_from_civil`]: `(year, month 1..=12, day 1..=31)`.
pub fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + DAYS_0000_03_01_TO_EPOCH;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097); // [0, 146096]
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    (yoe + era * 400 + i64::from(month <= 2), month, day)
}

pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in a month (1..=12) of a year.
pub fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
