//! `DATUM_TZ` handling
//!
//! A single test: it rewrites the process environment and must observe the
//! first `Zone::configured()` call.

use datum_native::{NativeDate, ZONE_ENV_VAR, Zone};

fn set_zone_var(value: Option<&str>) {
    // SAFETY: the only test in this binary, so nothing reads the environment
    // concurrently.
    unsafe {
        match value {
            Some(value) => std::env::set_var(ZONE_ENV_VAR, value),
            None => std::env::remove_var(ZONE_ENV_VAR),
        }
    }
}

#[test]
fn test_zone_from_environment() {
    set_zone_var(None);
    assert_eq!(Zone::from_env(), Zone::Local);

    // unparseable values are logged and ignored
    set_zone_var(Some("Mars/Olympus_Mons"));
    assert_eq!(Zone::from_env(), Zone::Local);

    set_zone_var(Some("utc"));
    assert_eq!(Zone::from_env(), Zone::utc());

    set_zone_var(Some("-05:30"));
    let expected = Zone::fixed_minutes(-330).unwrap();
    assert_eq!(Zone::from_env(), expected);

    // read once; later changes do not move the process-wide zone
    assert_eq!(Zone::configured(), expected);
    assert_eq!(Zone::default(), expected);
    set_zone_var(Some("+09:00"));
    assert_eq!(Zone::default(), expected);

    let date = NativeDate::from_components(&[1993.0, 2.0, 20.0], Zone::default());
    assert_eq!(date.get_timezone_offset(), 330.0);
    assert_eq!(date.get_utc_hours(), 5.0);
    assert_eq!(date.get_utc_minutes(), 30.0);
}
