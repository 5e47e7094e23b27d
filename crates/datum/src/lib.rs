//! # Datum
//!
//! Two wrappers around [`NativeDate`] sharing one accessor, setter and
//! formatting surface:
//!
//! - [`DateTime`]: copy-on-write. Setters return a new value and never touch
//!   the receiver.
//! - [`Datum`]: live handle. Setters mutate in place and re-arm the exposed
//!   [`NativeHandle`], as does any mutation made directly through a handle.
//!
//! Every setter takes either literal fields or a derivation over the current
//! value:
//!
//! ```ignore
//! use datum::prelude::*;
//!
//! let zone: Zone = "+01:00".parse()?;
//! let date = DateTime::new_in(zone, [1993.0, 2.0, 20.0]);
//! let later = date.set_hours([1.0, 60.0])?;
//! assert_eq!(later.hours(), 2.0);
//!
//! let next_month = date.set_month(SetArgs::derive(|d| d.month() + 1.0))?;
//! assert_eq!(next_month.to_string(), "1993-04-19T23:00:00.000Z");
//! ```

#![warn(clippy::all)]

mod args;
mod engine;
mod error;
mod fields;
mod input;
mod live;
mod value;

pub use args::{Fields, Head, SetArgs};
pub use datum_native::{DateError, NativeDate, Setter, Zone};
pub use engine::{Setters, Strategy};
pub use error::{DatumError, Result};
pub use fields::{DateFields, DateFormat};
pub use input::DateInput;
pub use live::{Datum, NativeHandle};
pub use value::DateTime;

/// The types and traits needed to construct, read and update dates.
pub mod prelude {
    pub use crate::{
        DateFields, DateFormat, DateInput, DateTime, Datum, Fields, NativeHandle, SetArgs,
        Setters, Zone,
    };
}
