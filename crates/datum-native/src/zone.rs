//! Time zone used for local-time projections.
//!
//! `Zone::Local` asks the operating system (through `chrono::Local`) for the
//! offset in effect at each instant; `Zone::Fixed` pins one offset, which is
//! what tests and reproducible tooling use.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{DateTime, FixedOffset, Local, LocalResult, Offset, TimeZone, Utc};

use crate::error::DateError;
use crate::time::MS_PER_DAY;

/// Environment variable read by [`Zone::from_env`].
pub const ZONE_ENV_VAR: &str = "DATUM_TZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// The system time zone
    Local,
    /// A constant offset from UTC
    Fixed(FixedOffset),
}

impl Zone {
    pub fn utc() -> Self {
        Zone::Fixed(Utc.fix())
    }

    /// Fixed zone `minutes` east of UTC.
    pub fn fixed_minutes(minutes: i32) -> Option<Self> {
        FixedOffset::east_opt(minutes.checked_mul(60)?).map(Zone::Fixed)
    }

    /// Zone named by `DATUM_TZ`, falling back to the system zone when the
    /// variable is unset or unparseable.
    pub fn from_env() -> Self {
        match std::env::var(ZONE_ENV_VAR) {
            Ok(value) => value.parse().unwrap_or_else(|err| {
                tracing::warn!("Ignoring {}={:?}: {}", ZONE_ENV_VAR, value, err);
                Zone::Local
            }),
            Err(_) => Zone::Local,
        }
    }

    /// The process-wide zone: `DATUM_TZ` as read on first use, else `Local`.
    pub fn configured() -> Self {
        static CONFIGURED: OnceLock<Zone> = OnceLock::new();
        *CONFIGURED.get_or_init(Zone::from_env)
    }

    /// Offset from UTC in milliseconds at UTC time value `t`.
    pub fn offset_at(&self, t: f64) -> f64 {
        let seconds = match self {
            Zone::Fixed(offset) => offset.local_minus_utc(),
            Zone::Local => {
                if !t.is_finite() {
                    return 0.0;
                }
                // a UTC instant never maps ambiguously; `None` is outside chrono's range
                match Local.timestamp_millis_opt(t as i64) {
                    LocalResult::Single(dt) => dt.offset().local_minus_utc(),
                    LocalResult::Ambiguous(dt, _) => dt.offset().local_minus_utc(),
                    LocalResult::None => 0,
                }
            }
        };
        f64::from(seconds) * 1_000.0
    }

    /// `LocalTime(t)`
    pub fn local_time(&self, t: f64) -> f64 {
        t + self.offset_at(t)
    }

    /// `UTC(t)`: interprets `t` as a local time value. Ambiguous local times
    /// resolve to the earlier instant; times skipped by a transition use the
    /// offset in effect before it.
    pub fn utc_time(&self, t: f64) -> f64 {
        if !t.is_finite() {
            return f64::NAN;
        }
        match self {
            Zone::Fixed(offset) => t - f64::from(offset.local_minus_utc()) * 1_000.0,
            Zone::Local => {
                let Some(naive) = DateTime::from_timestamp_millis(t as i64).map(|dt| dt.naive_utc())
                else {
                    return t;
                };
                let resolved = match Local.from_local_datetime(&naive) {
                    LocalResult::Single(dt) => dt,
                    // chrono does not promise which candidate comes first
                    LocalResult::Ambiguous(a, b) => a.min(b),
                    LocalResult::None => return t - self.offset_at(t - MS_PER_DAY),
                };
                t - f64::from(resolved.offset().local_minus_utc()) * 1_000.0
            }
        }
    }
}

/// [`Zone::configured`]
impl Default for Zone {
    fn default() -> Self {
        Zone::configured()
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => f.write_str("local"),
            Zone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

impl FromStr for Zone {
    type Err = DateError;

    /// Accepts `local`, `UTC`, `Z`, `+HH`, `+HH:MM` and `+HHMM` (either sign).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DateError::InvalidZone(s.to_string());
        let trimmed = s.trim();

        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Zone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Zone::utc());
        }

        let (sign, rest) = match trimmed.as_bytes().first() {
            Some(b'+') => (1, &trimmed[1..]),
            Some(b'-') => (-1, &trimmed[1..]),
            _ => return Err(invalid()),
        };
        let digits: String = rest.chars().filter(|c| *c != ':').collect();
        if !digits.bytes().all(|b| b.is_ascii_digit()) || rest.matches(':').count() > 1 {
            return Err(invalid());
        }
        let (hours, minutes) = match digits.len() {
            2 => (&digits[..2], "0"),
            4 => (&digits[..2], &digits[2..]),
            _ => return Err(invalid()),
        };
        let hours: i32 = hours.parse().map_err(|_| invalid())?;
        let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
        if hours > 23 || minutes > 59 {
            return Err(invalid());
        }
        Zone::fixed_minutes(sign * (hours * 60 + minutes)).ok_or_else(invalid)
    }
}
