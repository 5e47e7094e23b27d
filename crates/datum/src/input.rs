//! Construction inputs
//!
//! The five shapes a wrapper can be built from. Coercion is entirely the
//! primitive's: strings are parsed, numbers are clipped, components roll
//! over, and anything it rejects becomes the invalid instant.

use datum_native::{NativeDate, Zone};

use crate::fields::DateFields;
use crate::live::Datum;
use crate::value::DateTime;

#[derive(Debug, Clone, Default)]
pub enum DateInput {
    /// The current instant
    #[default]
    Now,
    /// A string for the primitive's parser
    Text(String),
    /// Epoch milliseconds
    Millis(f64),
    /// An existing primitive value, also used to copy another wrapper
    Native(NativeDate),
    /// `(year, month[, date[, hours[, minutes[, seconds[, ms]]]]])` in local time
    Components(Vec<f64>),
}

impl DateInput {
    /// `zone` applies to every shape except [`DateInput::Native`], which keeps
    /// the zone it carries.
    pub(crate) fn into_native(self, zone: Zone) -> NativeDate {
        match self {
            DateInput::Now => NativeDate::now(zone),
            DateInput::Text(text) => NativeDate::from_text(&text, zone),
            DateInput::Millis(time) => NativeDate::from_millis(time, zone),
            DateInput::Native(native) => native,
            DateInput::Components(fields) => NativeDate::from_components(&fields, zone),
        }
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

impl From<f64> for DateInput {
    fn from(time: f64) -> Self {
        DateInput::Millis(time)
    }
}

impl From<i64> for DateInput {
    fn from(time: i64) -> Self {
        DateInput::Millis(time as f64)
    }
}

impl From<NativeDate> for DateInput {
    fn from(native: NativeDate) -> Self {
        DateInput::Native(native)
    }
}

impl From<&DateTime> for DateInput {
    fn from(date: &DateTime) -> Self {
        DateInput::Native(date.native())
    }
}

impl From<DateTime> for DateInput {
    fn from(date: DateTime) -> Self {
        DateInput::Native(date.native())
    }
}

impl From<&Datum> for DateInput {
    fn from(date: &Datum) -> Self {
        DateInput::Native(date.native_value())
    }
}

impl From<Vec<f64>> for DateInput {
    fn from(fields: Vec<f64>) -> Self {
        DateInput::Components(fields)
    }
}

impl From<&[f64]> for DateInput {
    fn from(fields: &[f64]) -> Self {
        DateInput::Components(fields.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for DateInput {
    fn from(fields: [f64; N]) -> Self {
        DateInput::Components(fields.to_vec())
    }
}
