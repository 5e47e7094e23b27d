//! Read surface shared by every wrapper: renamed field accessors and the
//! string conversions. Each call projects the current [`NativeDate`]; nothing
//! is cached.

use datum_native::NativeDate;

use crate::error::Result;

/// Field accessors. Numeric fields are `NaN` on the invalid instant.
pub trait DateFields {
    /// The native value as of this call.
    fn native_value(&self) -> NativeDate;

    fn is_valid(&self) -> bool {
        self.native_value().is_valid()
    }

    /// Day of the month, 1-based
    fn date(&self) -> f64 {
        self.native_value().get_date()
    }

    /// Day of the week, 0 is Sunday
    fn day(&self) -> f64 {
        self.native_value().get_day()
    }

    fn full_year(&self) -> f64 {
        self.native_value().get_full_year()
    }

    fn hours(&self) -> f64 {
        self.native_value().get_hours()
    }

    fn milliseconds(&self) -> f64 {
        self.native_value().get_milliseconds()
    }

    fn minutes(&self) -> f64 {
        self.native_value().get_minutes()
    }

    /// Month, 0-based
    fn month(&self) -> f64 {
        self.native_value().get_month()
    }

    fn seconds(&self) -> f64 {
        self.native_value().get_seconds()
    }

    /// Epoch milliseconds
    fn time(&self) -> f64 {
        self.native_value().get_time()
    }

    /// Minutes from local time to UTC
    fn timezone_offset(&self) -> f64 {
        self.native_value().get_timezone_offset()
    }

    fn utc_date(&self) -> f64 {
        self.native_value().get_utc_date()
    }

    fn utc_day(&self) -> f64 {
        self.native_value().get_utc_day()
    }

    fn utc_full_year(&self) -> f64 {
        self.native_value().get_utc_full_year()
    }

    fn utc_hours(&self) -> f64 {
        self.native_value().get_utc_hours()
    }

    fn utc_milliseconds(&self) -> f64 {
        self.native_value().get_utc_milliseconds()
    }

    fn utc_minutes(&self) -> f64 {
        self.native_value().get_utc_minutes()
    }

    fn utc_month(&self) -> f64 {
        self.native_value().get_utc_month()
    }

    fn utc_seconds(&self) -> f64 {
        self.native_value().get_utc_seconds()
    }
}

/// String and numeric conversions, passed through to the primitive.
///
/// The one deviation is [`to_display_string`](DateFormat::to_display_string),
/// which is always the ISO-8601 UTC form rather than the primitive's local
/// `toString` text.
pub trait DateFormat: DateFields {
    fn to_date_string(&self) -> String {
        self.native_value().to_date_string()
    }

    fn to_time_string(&self) -> String {
        self.native_value().to_time_string()
    }

    fn to_iso_string(&self) -> Result<String> {
        Ok(self.native_value().to_iso_string()?)
    }

    fn to_json(&self) -> Option<String> {
        self.native_value().to_json()
    }

    fn to_locale_date_string(&self) -> String {
        self.native_value().to_locale_date_string()
    }

    fn to_locale_string(&self) -> String {
        self.native_value().to_locale_string()
    }

    fn to_locale_time_string(&self) -> String {
        self.native_value().to_locale_time_string()
    }

    fn to_utc_string(&self) -> String {
        self.native_value().to_utc_string()
    }

    /// ISO-8601 in UTC with milliseconds, e.g. `1993-03-19T23:00:00.000Z`;
    /// `Invalid Date` for the invalid instant.
    fn to_display_string(&self) -> String {
        let native = self.native_value();
        native.to_json().unwrap_or_else(|| native.to_string())
    }

    /// Numeric coercion: epoch milliseconds
    fn value_of(&self) -> f64 {
        self.native_value().value_of()
    }
}

impl<T: DateFields + ?Sized> DateFormat for T {}
