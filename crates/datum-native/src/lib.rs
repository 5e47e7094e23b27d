//! # Datum Native
//!
//! The date primitive the datum wrappers delegate to. `NativeDate` follows the
//! ECMAScript `Date` contract:
//!
//! - time value in epoch milliseconds (`f64`), `NaN` for the invalid instant
//! - month fields are 0-based, weekday 0 is Sunday
//! - setters roll fields over (`setHours(1, 60)` lands on 02:00) and never fail
//! - local projections go through a [`Zone`], either the system zone or a
//!   fixed offset
//!
//! ```ignore
//! use datum_native::{NativeDate, Zone};
//!
//! let zone: Zone = "+01:00".parse()?;
//! let mut date = NativeDate::from_components(&[1993.0, 2.0, 20.0], zone);
//! date.set_hours(1.0, Some(60.0), None, None);
//! assert_eq!(date.get_hours(), 2.0);
//! ```

#![warn(clippy::all)]

mod error;
mod format;
mod native;
mod parse;
pub mod time;
mod zone;

pub use error::{DateError, DateResult};
pub use native::{NativeDate, Setter};
pub use zone::{ZONE_ENV_VAR, Zone};
