//! NativeDate behaviour tests
//!
//! All local projections run in a pinned +01:00 zone so the literals below
//! do not depend on the machine running the suite.

use datum_native::{DateError, NativeDate, Setter, Zone};

fn zone() -> Zone {
    "+01:00".parse().unwrap()
}

fn march_20_1993() -> NativeDate {
    NativeDate::from_components(&[1993.0, 2.0, 20.0], zone())
}

#[test]
fn test_components_are_local() {
    let date = march_20_1993();
    assert_eq!(date.get_time(), 732_582_000_000.0);
    assert_eq!(date.get_full_year(), 1993.0);
    assert_eq!(date.get_month(), 2.0);
    assert_eq!(date.get_date(), 20.0);
    assert_eq!(date.get_day(), 6.0);
    assert_eq!(date.get_hours(), 0.0);
    assert_eq!(date.get_utc_date(), 19.0);
    assert_eq!(date.get_utc_day(), 5.0);
    assert_eq!(date.get_utc_hours(), 23.0);
    assert_eq!(date.get_timezone_offset(), -60.0);
}

#[test]
fn test_components_roll_over() {
    // month 12 is January of the following year
    let date = NativeDate::from_components(&[1993.0, 12.0, 1.0], zone());
    assert_eq!(date.get_full_year(), 1994.0);
    assert_eq!(date.get_month(), 0.0);

    let date = NativeDate::from_components(&[1993.0, 2.0, 20.0, 25.0, 61.0], zone());
    assert_eq!(date.get_date(), 21.0);
    assert_eq!(date.get_hours(), 2.0);
    assert_eq!(date.get_minutes(), 1.0);
}

#[test]
fn test_from_millis_clips() {
    assert!(!NativeDate::from_millis(8.64e15 + 1.0, zone()).is_valid());
    assert!(!NativeDate::from_millis(f64::NAN, zone()).is_valid());
    assert_eq!(NativeDate::from_millis(1.9, zone()).get_time(), 1.0);
}

#[test]
fn test_date_utc_static() {
    assert_eq!(NativeDate::utc(&[1993.0, 2.0, 20.0]), 732_585_600_000.0);
    assert_eq!(NativeDate::utc(&[1970.0]), 0.0);
    assert!(NativeDate::utc(&[]).is_nan());
}

#[test]
fn test_now_is_recent() {
    // after 2023
    assert!(NativeDate::now_millis() > 1_700_000_000_000.0);
    assert!(NativeDate::now(zone()).is_valid());
}

#[test]
fn test_setters_roll_over() {
    let mut date = march_20_1993();
    date.set_hours(1.0, Some(60.0), None, None);
    assert_eq!(date.get_hours(), 2.0);
    assert_eq!(date.get_minutes(), 0.0);

    let mut date = march_20_1993();
    date.set_month(1.0, Some(31.0));
    assert_eq!(date.get_month(), 2.0);
    assert_eq!(date.get_date(), 3.0);

    let mut date = march_20_1993();
    date.set_seconds(125.0, None);
    assert_eq!(date.get_minutes(), 2.0);
    assert_eq!(date.get_seconds(), 5.0);

    let mut date = march_20_1993();
    date.set_date(0.0);
    assert_eq!(date.get_month(), 1.0);
    assert_eq!(date.get_date(), 28.0);
}

#[test]
fn test_utc_setters_ignore_zone() {
    let mut date = march_20_1993();
    date.set_utc_hours(0.0, None, None, None);
    assert_eq!(date.get_utc_date(), 19.0);
    assert_eq!(date.get_hours(), 1.0);

    let mut date = march_20_1993();
    date.set_utc_month(0.0, Some(32.0));
    assert_eq!(date.get_utc_month(), 1.0);
    assert_eq!(date.get_utc_date(), 1.0);
}

#[test]
fn test_positional_dispatch_ignores_extra_fields() {
    let mut via_dispatch = march_20_1993();
    via_dispatch.set(Setter::Seconds, &[30.0, 500.0, 99.0, 99.0]);

    let mut direct = march_20_1993();
    direct.set_seconds(30.0, Some(500.0));

    assert_eq!(via_dispatch, direct);
}

#[test]
fn test_set_full_year_revives_invalid_date() {
    let mut date = NativeDate::invalid(zone());
    date.set_full_year(2000.0, None, None);
    assert!(date.is_valid());
    assert_eq!(date.get_full_year(), 2000.0);

    // other setters keep it invalid
    let mut date = NativeDate::invalid(zone());
    assert!(date.set_hours(1.0, None, None, None).is_nan());
    assert!(date.set_utc_date(1.0).is_nan());
}

#[test]
fn test_set_time_clips() {
    let mut date = march_20_1993();
    assert_eq!(date.set_time(0.0), 0.0);
    assert!(date.set_time(f64::INFINITY).is_nan());
}

#[test]
fn test_invalid_getters_are_nan() {
    let date = NativeDate::from_text("not a date", zone());
    assert!(date.get_time().is_nan());
    assert!(date.get_full_year().is_nan());
    assert!(date.get_utc_seconds().is_nan());
    assert!(date.get_timezone_offset().is_nan());
}

#[test]
fn test_formatting() {
    let date = march_20_1993();
    assert_eq!(date.to_string(), "Sat Mar 20 1993 00:00:00 GMT+0100");
    assert_eq!(date.to_date_string(), "Sat Mar 20 1993");
    assert_eq!(date.to_time_string(), "00:00:00 GMT+0100");
    assert_eq!(date.to_iso_string().unwrap(), "1993-03-19T23:00:00.000Z");
    assert_eq!(date.to_json().as_deref(), Some("1993-03-19T23:00:00.000Z"));
    assert_eq!(date.to_utc_string(), "Fri, 19 Mar 1993 23:00:00 GMT");
    assert_eq!(date.to_locale_date_string(), "3/20/1993");
    assert_eq!(date.to_locale_time_string(), "12:00:00 AM");
    assert_eq!(date.to_locale_string(), "3/20/1993, 12:00:00 AM");
    assert_eq!(date.value_of(), 732_582_000_000.0);
}

#[test]
fn test_invalid_formatting() {
    let date = NativeDate::invalid(zone());
    assert_eq!(date.to_string(), "Invalid Date");
    assert_eq!(date.to_utc_string(), "Invalid Date");
    assert_eq!(date.to_iso_string(), Err(DateError::InvalidTime));
    assert_eq!(date.to_json(), None);
}

#[test]
fn test_own_string_forms_parse_back() {
    let date = march_20_1993();
    for text in [
        date.to_string(),
        date.to_utc_string(),
        date.to_iso_string().unwrap(),
        date.to_locale_string(),
        date.to_date_string(),
        date.to_locale_date_string(),
    ] {
        assert_eq!(NativeDate::from_text(&text, zone()), date, "{text}");
    }
}

#[test]
fn test_rfc_like_text_with_milliseconds_field() {
    let mut date = NativeDate::from_text("Fri, 20 Mar 1993 00:00:00:01 GMT", zone());
    assert_eq!(date.get_time(), 732_585_600_001.0);
    assert_eq!(date.get_utc_milliseconds(), 1.0);

    let millis = date.get_utc_milliseconds() + 1.0;
    date.set_utc_milliseconds(millis);
    assert_eq!(date.get_utc_milliseconds(), 2.0);
}

#[test]
fn test_month_name_text() {
    assert_eq!(NativeDate::parse("March 20, 1993", zone()), 732_582_000_000.0);
    assert_eq!(NativeDate::parse("Sat Mar 20 1993", zone()), 732_582_000_000.0);
}

#[test]
fn test_comparison_by_time_value() {
    let earlier = march_20_1993();
    let later = NativeDate::from_millis(earlier.get_time() + 1.0, zone());
    assert!(earlier < later);
    assert_ne!(NativeDate::invalid(zone()), NativeDate::invalid(zone()));
}

#[test]
fn test_local_zone_round_trips_components() {
    // whatever the machine's zone, local components survive a round trip
    let date = NativeDate::from_components(&[2001.0, 6.0, 15.0, 12.0, 30.0], Zone::Local);
    assert_eq!(date.get_full_year(), 2001.0);
    assert_eq!(date.get_month(), 6.0);
    assert_eq!(date.get_date(), 15.0);
    assert_eq!(date.get_hours(), 12.0);
    assert_eq!(date.get_minutes(), 30.0);
}
