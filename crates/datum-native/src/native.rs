//! `NativeDate`: the date primitive.
//!
//! A time value plus the [`Zone`] its local fields are read in. Field access
//! goes through `get_*` projections; every setter exists both as a named
//! method with optional trailing fields and behind the positional
//! [`NativeDate::set`] dispatch keyed by [`Setter`], which is what the
//! wrappers call. String forms live in `format`, parsing in `parse`.

use std::cmp::Ordering;
use std::fmt;

use chrono::Utc;

use crate::error::{DateError, DateResult};
use crate::format;
use crate::parse;
use crate::time::{
    MS_PER_MINUTE, Parts, day, make_date, make_day, make_time, time_clip, time_within_day,
};
use crate::zone::Zone;

/// The mutating operations of [`NativeDate`], one per field group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setter {
    Date,
    FullYear,
    Hours,
    Milliseconds,
    Minutes,
    Month,
    Seconds,
    Time,
    UtcDate,
    UtcFullYear,
    UtcHours,
    UtcMilliseconds,
    UtcMinutes,
    UtcMonth,
    UtcSeconds,
}

impl Setter {
    pub const ALL: [Setter; 15] = [
        Setter::Date,
        Setter::FullYear,
        Setter::Hours,
        Setter::Milliseconds,
        Setter::Minutes,
        Setter::Month,
        Setter::Seconds,
        Setter::Time,
        Setter::UtcDate,
        Setter::UtcFullYear,
        Setter::UtcHours,
        Setter::UtcMilliseconds,
        Setter::UtcMinutes,
        Setter::UtcMonth,
        Setter::UtcSeconds,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Setter::Date => "setDate",
            Setter::FullYear => "setFullYear",
            Setter::Hours => "setHours",
            Setter::Milliseconds => "setMilliseconds",
            Setter::Minutes => "setMinutes",
            Setter::Month => "setMonth",
            Setter::Seconds => "setSeconds",
            Setter::Time => "setTime",
            Setter::UtcDate => "setUTCDate",
            Setter::UtcFullYear => "setUTCFullYear",
            Setter::UtcHours => "setUTCHours",
            Setter::UtcMilliseconds => "setUTCMilliseconds",
            Setter::UtcMinutes => "setUTCMinutes",
            Setter::UtcMonth => "setUTCMonth",
            Setter::UtcSeconds => "setUTCSeconds",
        }
    }

    /// Positional fields the setter reads; later values are ignored.
    pub fn arity(self) -> usize {
        match self {
            Setter::Date
            | Setter::Milliseconds
            | Setter::Time
            | Setter::UtcDate
            | Setter::UtcMilliseconds => 1,
            Setter::Month | Setter::Seconds | Setter::UtcMonth | Setter::UtcSeconds => 2,
            Setter::FullYear | Setter::Minutes | Setter::UtcFullYear | Setter::UtcMinutes => 3,
            Setter::Hours | Setter::UtcHours => 4,
        }
    }
}

/// Which projection a getter or setter works in.
#[derive(Clone, Copy)]
enum Frame {
    Local,
    Utc,
}

/// A point in time: epoch milliseconds (`NaN` when invalid) plus the zone
/// local fields are projected through.
#[derive(Debug, Clone, Copy)]
pub struct NativeDate {
    time: f64,
    zone: Zone,
}

// =============================================================================
// Construction
// =============================================================================

impl NativeDate {
    /// Date.now() - current timestamp in milliseconds
    pub fn now_millis() -> f64 {
        Utc::now().timestamp_millis() as f64
    }

    pub fn now(zone: Zone) -> Self {
        Self::from_millis(Self::now_millis(), zone)
    }

    /// `new Date(number)`
    pub fn from_millis(time: f64, zone: Zone) -> Self {
        Self {
            time: time_clip(time),
            zone,
        }
    }

    pub fn invalid(zone: Zone) -> Self {
        Self {
            time: f64::NAN,
            zone,
        }
    }

    /// Date.parse(dateString)
    pub fn parse(text: &str, zone: Zone) -> f64 {
        parse::parse(text, zone)
    }

    /// `new Date(string)`
    pub fn from_text(text: &str, zone: Zone) -> Self {
        Self {
            time: Self::parse(text, zone),
            zone,
        }
    }

    /// `new Date(year, month[, date[, hours[, minutes[, seconds[, ms]]]]])` in
    /// local time. With fewer than two fields this behaves like the
    /// zero-argument (now) and one-argument (epoch milliseconds) forms.
    pub fn from_components(fields: &[f64], zone: Zone) -> Self {
        match fields {
            [] => Self::now(zone),
            [time] => Self::from_millis(*time, zone),
            _ => Self {
                time: time_clip(zone.utc_time(components_to_time(fields))),
                zone,
            },
        }
    }

    /// Date.UTC(year[, month[, ...]]) - components read as UTC
    pub fn utc(fields: &[f64]) -> f64 {
        if fields.is_empty() {
            return f64::NAN;
        }
        time_clip(components_to_time(fields))
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn is_valid(&self) -> bool {
        !self.time.is_nan()
    }
}

/// MakeDate over positional `(year, month, date, hours, minutes, seconds, ms)`
/// with the constructor's defaults; two-digit years land in the 1900s.
fn components_to_time(fields: &[f64]) -> f64 {
    let field = |idx: usize, default: f64| fields.get(idx).copied().unwrap_or(default);
    let mut year = field(0, f64::NAN);
    if year.is_finite() && (0.0..=99.0).contains(&year.trunc()) {
        year = 1900.0 + year.trunc();
    }
    make_date(
        make_day(year, field(1, 0.0), field(2, 1.0)),
        make_time(field(3, 0.0), field(4, 0.0), field(5, 0.0), field(6, 0.0)),
    )
}

// =============================================================================
// Getters
// =============================================================================

impl NativeDate {
    fn frame_time(&self, frame: Frame) -> f64 {
        match frame {
            Frame::Local => self.zone.local_time(self.time),
            Frame::Utc => self.time,
        }
    }

    fn field(&self, frame: Frame, pick: impl FnOnce(&Parts) -> f64) -> f64 {
        match Parts::from_time(self.frame_time(frame)) {
            Some(parts) => pick(&parts),
            None => f64::NAN,
        }
    }

    pub fn get_time(&self) -> f64 {
        self.time
    }

    pub fn value_of(&self) -> f64 {
        self.time
    }

    /// Minutes to add to local time to reach UTC (negative east of UTC).
    pub fn get_timezone_offset(&self) -> f64 {
        if !self.is_valid() {
            return f64::NAN;
        }
        (self.time - self.zone.local_time(self.time)) / MS_PER_MINUTE
    }

    pub fn get_full_year(&self) -> f64 {
        self.field(Frame::Local, |p| p.year as f64)
    }

    pub fn get_month(&self) -> f64 {
        self.field(Frame::Local, |p| f64::from(p.month))
    }

    pub fn get_date(&self) -> f64 {
        self.field(Frame::Local, |p| f64::from(p.date))
    }

    pub fn get_day(&self) -> f64 {
        self.field(Frame::Local, |p| f64::from(p.weekday))
    }

    pub fn get_hours(&self) -> f64 {
        self.field(Frame::Local, |p| f64::from(p.hours))
    }

    pub fn get_minutes(&self) -> f64 {
        self.field(Frame::Local, |p| f64::from(p.minutes))
    }

    pub fn get_seconds(&self) -> f64 {
        self.field(Frame::Local, |p| f64::from(p.seconds))
    }

    pub fn get_milliseconds(&self) -> f64 {
        self.field(Frame::Local, |p| f64::from(p.millis))
    }

    pub fn get_utc_full_year(&self) -> f64 {
        self.field(Frame::Utc, |p| p.year as f64)
    }

    pub fn get_utc_month(&self) -> f64 {
        self.field(Frame::Utc, |p| f64::from(p.month))
    }

    pub fn get_utc_date(&self) -> f64 {
        self.field(Frame::Utc, |p| f64::from(p.date))
    }

    pub fn get_utc_day(&self) -> f64 {
        self.field(Frame::Utc, |p| f64::from(p.weekday))
    }

    pub fn get_utc_hours(&self) -> f64 {
        self.field(Frame::Utc, |p| f64::from(p.hours))
    }

    pub fn get_utc_minutes(&self) -> f64 {
        self.field(Frame::Utc, |p| f64::from(p.minutes))
    }

    pub fn get_utc_seconds(&self) -> f64 {
        self.field(Frame::Utc, |p| f64::from(p.seconds))
    }

    pub fn get_utc_milliseconds(&self) -> f64 {
        self.field(Frame::Utc, |p| f64::from(p.millis))
    }
}

// =============================================================================
// Setters (mutate in place, return the new time value)
// =============================================================================

impl NativeDate {
    /// Positional dispatch: `args[0]` is the setter's first parameter, absent
    /// trailing parameters keep their current value. A missing first
    /// parameter reads as `NaN`, which invalidates the date.
    pub fn set(&mut self, setter: Setter, args: &[f64]) -> f64 {
        let first = args.first().copied().unwrap_or(f64::NAN);
        let opt = |idx: usize| args.get(idx).copied();
        match setter {
            Setter::Date => self.set_date(first),
            Setter::FullYear => self.set_full_year(first, opt(1), opt(2)),
            Setter::Hours => self.set_hours(first, opt(1), opt(2), opt(3)),
            Setter::Milliseconds => self.set_milliseconds(first),
            Setter::Minutes => self.set_minutes(first, opt(1), opt(2)),
            Setter::Month => self.set_month(first, opt(1)),
            Setter::Seconds => self.set_seconds(first, opt(1)),
            Setter::Time => self.set_time(first),
            Setter::UtcDate => self.set_utc_date(first),
            Setter::UtcFullYear => self.set_utc_full_year(first, opt(1), opt(2)),
            Setter::UtcHours => self.set_utc_hours(first, opt(1), opt(2), opt(3)),
            Setter::UtcMilliseconds => self.set_utc_milliseconds(first),
            Setter::UtcMinutes => self.set_utc_minutes(first, opt(1), opt(2)),
            Setter::UtcMonth => self.set_utc_month(first, opt(1)),
            Setter::UtcSeconds => self.set_utc_seconds(first, opt(1)),
        }
    }

    fn commit(&mut self, frame: Frame, t: f64) -> f64 {
        let t = match frame {
            Frame::Local => self.zone.utc_time(t),
            Frame::Utc => t,
        };
        self.time = time_clip(t);
        self.time
    }

    fn frame_fields(&self, frame: Frame) -> Option<Parts> {
        Parts::from_time(self.frame_time(frame))
    }

    fn apply_date(&mut self, frame: Frame, date: f64) -> f64 {
        let t = self.frame_time(frame);
        let new_day = match self.frame_fields(frame) {
            Some(p) => make_day(p.year as f64, f64::from(p.month), date),
            None => f64::NAN,
        };
        self.commit(frame, make_date(new_day, time_within_day(t)))
    }

    fn apply_full_year(
        &mut self,
        frame: Frame,
        year: f64,
        month: Option<f64>,
        date: Option<f64>,
    ) -> f64 {
        // an invalid date starts over from +0
        let t = if self.is_valid() { self.frame_time(frame) } else { 0.0 };
        let Some(p) = Parts::from_time(t) else {
            return self.commit(frame, f64::NAN);
        };
        let month = month.unwrap_or(f64::from(p.month));
        let date = date.unwrap_or(f64::from(p.date));
        self.commit(frame, make_date(make_day(year, month, date), time_within_day(t)))
    }

    fn apply_hours(
        &mut self,
        frame: Frame,
        hours: f64,
        minutes: Option<f64>,
        seconds: Option<f64>,
        millis: Option<f64>,
    ) -> f64 {
        let t = self.frame_time(frame);
        let Some(p) = self.frame_fields(frame) else {
            return self.commit(frame, f64::NAN);
        };
        let time = make_time(
            hours,
            minutes.unwrap_or(f64::from(p.minutes)),
            seconds.unwrap_or(f64::from(p.seconds)),
            millis.unwrap_or(f64::from(p.millis)),
        );
        self.commit(frame, make_date(day(t), time))
    }

    fn apply_minutes(
        &mut self,
        frame: Frame,
        minutes: f64,
        seconds: Option<f64>,
        millis: Option<f64>,
    ) -> f64 {
        let t = self.frame_time(frame);
        let Some(p) = self.frame_fields(frame) else {
            return self.commit(frame, f64::NAN);
        };
        let time = make_time(
            f64::from(p.hours),
            minutes,
            seconds.unwrap_or(f64::from(p.seconds)),
            millis.unwrap_or(f64::from(p.millis)),
        );
        self.commit(frame, make_date(day(t), time))
    }

    fn apply_seconds(&mut self, frame: Frame, seconds: f64, millis: Option<f64>) -> f64 {
        let t = self.frame_time(frame);
        let Some(p) = self.frame_fields(frame) else {
            return self.commit(frame, f64::NAN);
        };
        let time = make_time(
            f64::from(p.hours),
            f64::from(p.minutes),
            seconds,
            millis.unwrap_or(f64::from(p.millis)),
        );
        self.commit(frame, make_date(day(t), time))
    }

    fn apply_milliseconds(&mut self, frame: Frame, millis: f64) -> f64 {
        let t = self.frame_time(frame);
        let Some(p) = self.frame_fields(frame) else {
            return self.commit(frame, f64::NAN);
        };
        let time = make_time(
            f64::from(p.hours),
            f64::from(p.minutes),
            f64::from(p.seconds),
            millis,
        );
        self.commit(frame, make_date(day(t), time))
    }

    fn apply_month(&mut self, frame: Frame, month: f64, date: Option<f64>) -> f64 {
        let t = self.frame_time(frame);
        let Some(p) = self.frame_fields(frame) else {
            return self.commit(frame, f64::NAN);
        };
        let date = date.unwrap_or(f64::from(p.date));
        self.commit(frame, make_date(make_day(p.year as f64, month, date), time_within_day(t)))
    }

    pub fn set_date(&mut self, date: f64) -> f64 {
        self.apply_date(Frame::Local, date)
    }

    pub fn set_full_year(&mut self, year: f64, month: Option<f64>, date: Option<f64>) -> f64 {
        self.apply_full_year(Frame::Local, year, month, date)
    }

    pub fn set_hours(
        &mut self,
        hours: f64,
        minutes: Option<f64>,
        seconds: Option<f64>,
        millis: Option<f64>,
    ) -> f64 {
        self.apply_hours(Frame::Local, hours, minutes, seconds, millis)
    }

    pub fn set_milliseconds(&mut self, millis: f64) -> f64 {
        self.apply_milliseconds(Frame::Local, millis)
    }

    pub fn set_minutes(&mut self, minutes: f64, seconds: Option<f64>, millis: Option<f64>) -> f64 {
        self.apply_minutes(Frame::Local, minutes, seconds, millis)
    }

    pub fn set_month(&mut self, month: f64, date: Option<f64>) -> f64 {
        self.apply_month(Frame::Local, month, date)
    }

    pub fn set_seconds(&mut self, seconds: f64, millis: Option<f64>) -> f64 {
        self.apply_seconds(Frame::Local, seconds, millis)
    }

    pub fn set_time(&mut self, time: f64) -> f64 {
        self.time = time_clip(time);
        self.time
    }

    pub fn set_utc_date(&mut self, date: f64) -> f64 {
        self.apply_date(Frame::Utc, date)
    }

    pub fn set_utc_full_year(&mut self, year: f64, month: Option<f64>, date: Option<f64>) -> f64 {
        self.apply_full_year(Frame::Utc, year, month, date)
    }

    pub fn set_utc_hours(
        &mut self,
        hours: f64,
        minutes: Option<f64>,
        seconds: Option<f64>,
        millis: Option<f64>,
    ) -> f64 {
        self.apply_hours(Frame::Utc, hours, minutes, seconds, millis)
    }

    pub fn set_utc_milliseconds(&mut self, millis: f64) -> f64 {
        self.apply_milliseconds(Frame::Utc, millis)
    }

    pub fn set_utc_minutes(
        &mut self,
        minutes: f64,
        seconds: Option<f64>,
        millis: Option<f64>,
    ) -> f64 {
        self.apply_minutes(Frame::Utc, minutes, seconds, millis)
    }

    pub fn set_utc_month(&mut self, month: f64, date: Option<f64>) -> f64 {
        self.apply_month(Frame::Utc, month, date)
    }

    pub fn set_utc_seconds(&mut self, seconds: f64, millis: Option<f64>) -> f64 {
        self.apply_seconds(Frame::Utc, seconds, millis)
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl NativeDate {
    pub fn to_date_string(&self) -> String {
        format::to_date_string(self.time, self.zone)
    }

    pub fn to_time_string(&self) -> String {
        format::to_time_string(self.time, self.zone)
    }

    /// Fails with [`DateError::InvalidTime`] on the invalid instant.
    pub fn to_iso_string(&self) -> DateResult<String> {
        format::to_iso_string(self.time).ok_or(DateError::InvalidTime)
    }

    /// Same text as `to_iso_string`, `None` (JSON `null`) on the invalid instant.
    pub fn to_json(&self) -> Option<String> {
        format::to_iso_string(self.time)
    }

    pub fn to_utc_string(&self) -> String {
        format::to_utc_string(self.time)
    }

    pub fn to_locale_date_string(&self) -> String {
        format::to_locale_date_string(self.time, self.zone)
    }

    pub fn to_locale_time_string(&self) -> String {
        format::to_locale_time_string(self.time, self.zone)
    }

    pub fn to_locale_string(&self) -> String {
        format::to_locale_string(self.time, self.zone)
    }
}

/// toString - e.g., "Sat Mar 20 1993 00:00:00 GMT+0100"
impl fmt::Display for NativeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::to_string(self.time, self.zone))
    }
}

/// Compares time values only; the invalid instant equals nothing.
impl PartialEq for NativeDate {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time
    }
}

impl PartialOrd for NativeDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.time.partial_cmp(&other.time)
    }
}
