//! The default zone across daylight-saving transitions
//!
//! Runs under `TZ=Europe/Amsterdam` (CET/CEST). 2024 transitions: clocks
//! jump 02:00 -> 03:00 on March 31st and fall back 03:00 -> 02:00 on
//! October 27th.

use std::sync::Once;

use datum::prelude::*;
use datum::NativeDate;

static PIN_ZONE: Once = Once::new();

fn amsterdam() {
    PIN_ZONE.call_once(|| {
        // SAFETY: runs once, before any test in this binary reads the
        // environment or the local zone.
        unsafe {
            std::env::set_var("TZ", "Europe/Amsterdam");
            std::env::remove_var("DATUM_TZ");
        }
    });
}

#[test]
fn test_default_zone_is_local() {
    amsterdam();
    assert_eq!(Zone::default(), Zone::Local);
}

#[test]
fn test_offset_follows_season() {
    amsterdam();
    let winter = DateTime::new([2024.0, 0.0, 1.0, 12.0]);
    assert_eq!(winter.timezone_offset(), -60.0);
    assert_eq!(winter.value_of(), 1_704_106_800_000.0);

    let summer = DateTime::new([2024.0, 6.0, 1.0, 12.0]);
    assert_eq!(summer.timezone_offset(), -120.0);
    assert_eq!(summer.value_of(), 1_719_828_000_000.0);
}

#[test]
fn test_repeated_hour_takes_earlier_instant() {
    amsterdam();
    let date = DateTime::new([2024.0, 9.0, 27.0, 2.0, 30.0]);
    assert_eq!(date.value_of(), 1_729_989_000_000.0);
    assert_eq!(date.timezone_offset(), -120.0);
    assert_eq!(date.hours(), 2.0);

    assert_eq!(NativeDate::parse("2024-10-27T02:30:00", Zone::Local), 1_729_989_000_000.0);

    let live = Datum::new([2024.0, 9.0, 27.0]);
    live.set_hours([2.0, 30.0]).unwrap();
    assert_eq!(live.value_of(), 1_729_989_000_000.0);
}

#[test]
fn test_skipped_hour_uses_offset_before_transition() {
    amsterdam();
    let date = DateTime::new([2024.0, 2.0, 31.0, 2.0, 30.0]);
    assert_eq!(date.value_of(), 1_711_848_600_000.0);
    assert_eq!(date.hours(), 3.0);
    assert_eq!(date.minutes(), 30.0);
}

#[test]
fn test_setter_crosses_transition() {
    amsterdam();
    let before = DateTime::new([2024.0, 2.0, 31.0, 1.0]);
    assert_eq!(before.timezone_offset(), -60.0);

    let after = before.set_hours(3.0).unwrap();
    assert_eq!(after.value_of(), 1_711_846_800_000.0);
    assert_eq!(after.timezone_offset(), -120.0);
    // one hour of wall clock was skipped
    assert_eq!(after.value_of() - before.value_of(), 3_600_000.0);
}
