//! Setter dispatch
//!
//! One engine drives every setter of every wrapper:
//!
//! 1. resolve the [`SetArgs`] against a snapshot of the current value
//! 2. hand the positional fields to the matching [`NativeDate`] setter
//! 3. let the wrapper's [`Strategy`] decide what the caller gets back
//!
//! [`NativeDate`]: datum_native::NativeDate

use datum_native::Setter;

use crate::args::SetArgs;
use crate::error::{DatumError, Result};
use crate::fields::DateFields;
use crate::value::DateTime;

/// How a wrapper turns a resolved setter call into a result.
pub trait Strategy: DateFields {
    /// What a setter returns: a new value (copy-on-write) or the receiver
    /// itself (live handle).
    type Output<'a>
    where
        Self: 'a;

    /// Immutable view handed to derivations, taken before the update.
    fn snapshot(&self) -> DateTime {
        DateTime::from_native(self.native_value())
    }

    /// Applies `setter` with already resolved `fields`.
    fn commit(&self, setter: Setter, fields: &[f64]) -> Self::Output<'_>;
}

/// The setter surface, available on every [`Strategy`].
///
/// Each setter takes literal fields (`1.0`, `[1.0, 60.0]`) or a derivation
/// (`SetArgs::derive(|d| d.hours() + 1.0)`), with the positional meaning of
/// the matching `Date.prototype` setter.
pub trait Setters: Strategy {
    fn apply<'a>(&self, setter: Setter, args: impl Into<SetArgs<'a>>) -> Result<Self::Output<'_>> {
        let fields = args.into().resolve(|| self.snapshot());
        if fields.is_empty() {
            return Err(DatumError::EmptyArguments {
                setter: setter.name(),
            });
        }
        tracing::trace!(setter = setter.name(), ?fields, "applying setter");
        Ok(self.commit(setter, &fields))
    }

    /// `(date)`
    fn set_date<'a>(&self, args: impl Into<SetArgs<'a>>) -> Result<Self::Output<'_>> {
        self.apply(Setter::Date, args)
    }

    /// `(year, month?, date?)`
    fn set_full_year<'a>(&self, args: impl Into<SetArgs<'a>>) -> Result<Self::Output<'_>> {
        self.apply(Setter::FullYear, args)
    }

    /// `(hours, minutes?, seconds?, ms?)`
    fn set_hours<'a>(&self, args: impl Into<SetArgs<'a>>) -> Result<Self::Output<'_>> {
        self.apply(Setter::Hours, args)
    }

    /// `(ms)`
    fn set_milliseconds<'a>(&self, args: impl Into<SetArgs<'a>>) -> Result<Self::Output<'_>> {
        self.apply(Setter::Milliseconds, args)
    }

    /// `(minutes, seconds?, ms?)`
    fn set_minutes<'a>(&self, args: impl Into<SetArgs<'a>>) -> Result<Self::Output<'_>> {
        self.apply(Setter::Minutes, args)
    }

    /// `(month, date?)`
    fn set_month<'a>(&self, args: impl Into<SetArgs<'a>>) -> Result<Self::Output<'_>> {
        self.apply(Setter::Month, args)
    }

    /// `(seconds, ms?)`
    fn set_seconds<'a>(&self, args: impl Into<SetArgs<'a>>) -> Result<Self::Output<'_>> {
        self.apply(Setter::Seconds, args)
    }

    /// `(epoch ms)`
    fn set_time<'a>(&self, args: impl Into<SetArgs<'a>>) -> Result<Self::Output<'_>> {
        self.apply(Setter::Time, args)
    }

    fn set_utc_date<'a>(&self, args: impl Into<SetArgs<'a>>) -> Result<Self::Output<'_>> {
        self.apply(Setter::UtcDate, args)
    }

    fn set_utc_full_year<'a>(&self, args: impl Into<SetArgs<'a>>) -> Result<Self::Output<'_>> {
        self.apply(Setter::UtcFullYear, args)
    }

    fn set_utc_hours<'a>(&self, args: impl Into<SetArgs<'a>>) -> Result<Self::Output<'_>> {
        self.apply(Setter::UtcHours, args)
    }

    fn set_utc_milliseconds<'a>(&self, args: impl Into<SetArgs<'a>>) -> Result<Self::Output<'_>> {
        self.apply(Setter::UtcMilliseconds, args)
    }

    fn set_utc_minutes<'a>(&self, args: impl Into<SetArgs<'a>>) -> Result<Self::Output<'_>> {
        self.apply(Setter::UtcMinutes, args)
    }

    fn set_utc_month<'a>(&self, args: impl Into<SetArgs<'a>>) -> Result<Self::Output<'_>> {
        self.apply(Setter::UtcMonth, args)
    }

    fn set_utc_seconds<'a>(&self, args: impl Into<SetArgs<'a>>) -> Result<Self::Output<'_>> {
        self.apply(Setter::UtcSeconds, args)
    }
}

impl<T: Strategy + ?Sized> Setters for T {}
