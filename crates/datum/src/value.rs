//! `DateTime`: the copy-on-write wrapper.

use std::cmp::Ordering;
use std::fmt;

use datum_native::{NativeDate, Setter, Zone};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::engine::Strategy;
use crate::fields::{DateFields, DateFormat};
use crate::input::DateInput;

/// An immutable point in time. Setters return a new `DateTime` and leave the
/// receiver as it was.
#[derive(Debug, Clone, Copy)]
pub struct DateTime {
    native: NativeDate,
}

impl DateTime {
    /// Builds a value in [`Zone::configured`]. See [`DateInput`] for the
    /// accepted shapes.
    pub fn new(input: impl Into<DateInput>) -> Self {
        Self::new_in(Zone::default(), input)
    }

    /// Builds a value whose local fields project through `zone`.
    pub fn new_in(zone: Zone, input: impl Into<DateInput>) -> Self {
        Self::from_native(input.into().into_native(zone))
    }

    pub fn now() -> Self {
        Self::new(DateInput::Now)
    }

    pub(crate) fn from_native(native: NativeDate) -> Self {
        Self { native }
    }

    /// A copy of the wrapped primitive; changing it never affects `self`.
    pub fn native(&self) -> NativeDate {
        self.native
    }
}

impl Default for DateTime {
    fn default() -> Self {
        Self::now()
    }
}

impl DateFields for DateTime {
    fn native_value(&self) -> NativeDate {
        self.native
    }
}

impl Strategy for DateTime {
    type Output<'a> = DateTime;

    fn snapshot(&self) -> DateTime {
        *self
    }

    /// Copies the receiver through the copy constructor, then updates the copy.
    fn commit(&self, setter: Setter, fields: &[f64]) -> DateTime {
        let mut next = DateTime::new(self);
        next.native.set(setter, fields);
        next
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl PartialEq for DateTime {
    fn eq(&self, other: &Self) -> bool {
        self.native == other.native
    }
}

impl PartialOrd for DateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.native.partial_cmp(&other.native)
    }
}

impl From<DateTime> for f64 {
    fn from(date: DateTime) -> Self {
        date.value_of()
    }
}

impl From<&DateTime> for f64 {
    fn from(date: &DateTime) -> Self {
        date.value_of()
    }
}

/// Serialized as its JSON form: the ISO string, or `null` when invalid.
impl Serialize for DateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.to_json() {
            Some(text) => serializer.serialize_str(&text),
            None => serializer.serialize_none(),
        }
    }
}

/// Accepts any string the primitive parses (in the configured zone) or `null`.
impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = Option::<String>::deserialize(deserializer)?;
        Ok(match text {
            Some(text) => DateTime::new(text),
            None => DateTime::new(f64::NAN),
        })
    }
}
