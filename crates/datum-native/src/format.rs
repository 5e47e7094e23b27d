//! String forms of a time value.
//!
//! Layouts follow the `Date.prototype` conversions; the locale variants are
//! fixed to en-US since no locale data is carried.

use crate::time::Parts;
use crate::zone::Zone;

pub(crate) const INVALID_DATE: &str = "Invalid Date";

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A local projection: the fields plus the offset they were computed with.
struct Local {
    parts: Parts,
    offset_minutes: i64,
}

fn local(t: f64, zone: Zone) -> Option<Local> {
    let offset = zone.offset_at(t);
    Some(Local {
        parts: Parts::from_time(t + offset)?,
        offset_minutes: (offset / 60_000.0) as i64,
    })
}

/// `-0001`, `0042`, `1993`, `12345`
fn padded_year(year: i64) -> String {
    if year < 0 {
        format!("-{:04}", -year)
    } else {
        format!("{year:04}")
    }
}

fn date_part(parts: &Parts) -> String {
    format!(
        "{} {} {:02} {}",
        WEEKDAYS[parts.weekday as usize],
        MONTHS[parts.month as usize],
        parts.date,
        padded_year(parts.year)
    )
}

fn time_part(local: &Local) -> String {
    let sign = if local.offset_minutes < 0 { '-' } else { '+' };
    let offset = local.offset_minutes.abs();
    format!(
        "{:02}:{:02}:{:02} GMT{}{:02}{:02}",
        local.parts.hours,
        local.parts.minutes,
        local.parts.seconds,
        sign,
        offset / 60,
        offset % 60
    )
}

/// toString - e.g., "Sat Mar 20 1993 00:00:00 GMT+0100"
pub(crate) fn to_string(t: f64, zone: Zone) -> String {
    match local(t, zone) {
        Some(local) => format!("{} {}", date_part(&local.parts), time_part(&local)),
        None => INVALID_DATE.to_string(),
    }
}

/// toDateString - e.g., "Sat Mar 20 1993"
pub(crate) fn to_date_string(t: f64, zone: Zone) -> String {
    match local(t, zone) {
        Some(local) => date_part(&local.parts),
        None => INVALID_DATE.to_string(),
    }
}

/// toTimeString - e.g., "00:00:00 GMT+0100"
pub(crate) fn to_time_string(t: f64, zone: Zone) -> String {
    match local(t, zone) {
        Some(local) => time_part(&local),
        None => INVALID_DATE.to_string(),
    }
}

/// toISOString - e.g., "1993-03-19T23:00:00.000Z", `None` for the invalid instant
pub(crate) fn to_iso_string(t: f64) -> Option<String> {
    let parts = Parts::from_time(t)?;
    let year = if (0..=9999).contains(&parts.year) {
        format!("{:04}", parts.year)
    } else if parts.year < 0 {
        format!("-{:06}", -parts.year)
    } else {
        format!("+{:06}", parts.year)
    };
    Some(format!(
        "{}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        year,
        parts.month + 1,
        parts.date,
        parts.hours,
        parts.minutes,
        parts.seconds,
        parts.millis
    ))
}

/// toUTCString - e.g., "Fri, 19 Mar 1993 23:00:00 GMT"
pub(crate) fn to_utc_string(t: f64) -> String {
    match Parts::from_time(t) {
        Some(parts) => format!(
            "{}, {:02} {} {} {:02}:{:02}:{:02} GMT",
            WEEKDAYS[parts.weekday as usize],
            parts.date,
            MONTHS[parts.month as usize],
            padded_year(parts.year),
            parts.hours,
            parts.minutes,
            parts.seconds
        ),
        None => INVALID_DATE.to_string(),
    }
}

fn locale_date(parts: &Parts) -> String {
    format!("{}/{}/{}", parts.month + 1, parts.date, parts.year)
}

fn locale_time(parts: &Parts) -> String {
    let meridiem = if parts.hours < 12 { "AM" } else { "PM" };
    let hours = match parts.hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02}:{:02} {}", hours, parts.minutes, parts.seconds, meridiem)
}

/// toLocaleDateString - e.g., "3/20/1993"
pub(crate) fn to_locale_date_string(t: f64, zone: Zone) -> String {
    match local(t, zone) {
        Some(local) => locale_date(&local.parts),
        None => INVALID_DATE.to_string(),
    }
}

/// toLocaleTimeString - e.g., "12:00:00 AM"
pub(crate) fn to_locale_time_string(t: f64, zone: Zone) -> String {
    match local(t, zone) {
        Some(local) => locale_time(&local.parts),
        None => INVALID_DATE.to_string(),
    }
}

/// toLocaleString - e.g., "3/20/1993, 12:00:00 AM"
pub(crate) fn to_locale_string(t: f64, zone: Zone) -> String {
    match local(t, zone) {
        Some(local) => format!("{}, {}", locale_date(&local.parts), locale_time(&local.parts)),
        None => INVALID_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_extended_years() {
        assert_eq!(to_iso_string(0.0).unwrap(), "1970-01-01T00:00:00.000Z");
        assert_eq!(to_iso_string(-8.64e15).unwrap(), "-271821-04-20T00:00:00.000Z");
        assert_eq!(to_iso_string(8.64e15).unwrap(), "+275760-09-13T00:00:00.000Z");
        assert!(to_iso_string(f64::NAN).is_none());
    }

    #[test]
    fn test_negative_offset_time_part() {
        let zone = Zone::fixed_minutes(-330).unwrap();
        assert_eq!(to_time_string(0.0, zone), "18:30:00 GMT-0530");
    }

    #[test]
    fn test_locale_noon_and_midnight() {
        let zone = Zone::utc();
        assert_eq!(to_locale_time_string(0.0, zone), "12:00:00 AM");
        assert_eq!(to_locale_time_string(12.0 * 3_600_000.0, zone), "12:00:00 PM");
    }
}
