//! Setter arguments
//!
//! A setter receives its fields either literally or from a derivation over
//! the value being updated. Both shapes end up as [`Fields`] and go through
//! the same resolution, so `set_hours([1.0, 60.0])` and
//! `set_hours(SetArgs::derive(|_| [1.0, 60.0]))` cannot drift apart.

use std::fmt;

use crate::value::DateTime;

/// What a derivation returns: a single leading field or a full positional list.
#[derive(Debug, Clone, PartialEq)]
pub enum Fields {
    One(f64),
    Many(Vec<f64>),
}

impl From<f64> for Fields {
    fn from(value: f64) -> Self {
        Fields::One(value)
    }
}

impl From<Vec<f64>> for Fields {
    fn from(values: Vec<f64>) -> Self {
        Fields::Many(values)
    }
}

impl From<&[f64]> for Fields {
    fn from(values: &[f64]) -> Self {
        Fields::Many(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Fields {
    fn from(values: [f64; N]) -> Self {
        Fields::Many(values.to_vec())
    }
}

type Derive<'a> = Box<dyn FnOnce(&DateTime) -> Fields + 'a>;

/// Leading part of a setter argument.
pub enum Head<'a> {
    /// Literal first field
    Value(f64),
    /// Literal positional fields
    Values(Vec<f64>),
    /// Computed from a snapshot of the value before the update
    Derive(Derive<'a>),
}

impl fmt::Debug for Head<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Head::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Head::Values(values) => f.debug_tuple("Values").field(values).finish(),
            Head::Derive(_) => f.write_str("Derive(..)"),
        }
    }
}

/// Argument of every setter: a [`Head`] plus trailing literal fields.
///
/// Trailing fields only follow a scalar head. When the head yields a
/// sequence, that sequence is the whole argument list.
#[derive(Debug)]
pub struct SetArgs<'a> {
    head: Head<'a>,
    rest: Vec<f64>,
}

impl<'a> SetArgs<'a> {
    pub fn value(value: f64) -> Self {
        Self {
            head: Head::Value(value),
            rest: Vec::new(),
        }
    }

    pub fn values(values: impl Into<Vec<f64>>) -> Self {
        Self {
            head: Head::Values(values.into()),
            rest: Vec::new(),
        }
    }

    /// Fields computed from the current value, e.g.
    /// `SetArgs::derive(|d| d.date() + 7.0)`.
    pub fn derive<F, R>(derive: F) -> Self
    where
        F: FnOnce(&DateTime) -> R + 'a,
        R: Into<Fields>,
    {
        Self {
            head: Head::Derive(Box::new(move |snapshot: &DateTime| -> Fields {
                derive(snapshot).into()
            })),
            rest: Vec::new(),
        }
    }

    /// Trailing literal fields (minutes, seconds, ...) appended after a
    /// scalar head.
    pub fn with_rest(mut self, rest: impl IntoIterator<Item = f64>) -> Self {
        self.rest.extend(rest);
        self
    }

    pub fn head(&self) -> &Head<'a> {
        &self.head
    }

    /// Flattens into the positional list handed to the primitive setter.
    /// `snapshot` is only consulted for a derived head.
    pub(crate) fn resolve(self, snapshot: impl FnOnce() -> DateTime) -> Vec<f64> {
        let fields = match self.head {
            Head::Value(value) => Fields::One(value),
            Head::Values(values) => Fields::Many(values),
            Head::Derive(derive) => derive(&snapshot()),
        };
        match fields {
            Fields::One(first) => std::iter::once(first).chain(self.rest).collect(),
            Fields::Many(values) => values,
        }
    }
}

impl From<f64> for SetArgs<'_> {
    fn from(value: f64) -> Self {
        SetArgs::value(value)
    }
}

impl From<Vec<f64>> for SetArgs<'_> {
    fn from(values: Vec<f64>) -> Self {
        SetArgs::values(values)
    }
}

impl From<&[f64]> for SetArgs<'_> {
    fn from(values: &[f64]) -> Self {
        SetArgs::values(values)
    }
}

impl<const N: usize> From<[f64; N]> for SetArgs<'_> {
    fn from(values: [f64; N]) -> Self {
        SetArgs::values(values)
    }
}

impl From<Fields> for SetArgs<'_> {
    fn from(fields: Fields) -> Self {
        match fields {
            Fields::One(value) => SetArgs::value(value),
            Fields::Many(values) => SetArgs::values(values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datum_native::Zone;

    fn snapshot() -> DateTime {
        DateTime::new_in(Zone::utc(), 0.0)
    }

    #[test]
    fn test_scalar_head_takes_rest() {
        let args = SetArgs::value(1.0).with_rest([2.0, 3.0]);
        assert_eq!(args.resolve(snapshot), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_sequence_head_drops_rest() {
        let args = SetArgs::derive(|_| [4.0, 5.0]).with_rest([9.0]);
        assert_eq!(args.resolve(snapshot), vec![4.0, 5.0]);
    }

    #[test]
    fn test_literal_head_never_builds_snapshot() {
        let args = SetArgs::from([1.0, 2.0]);
        let values = args.resolve(|| unreachable!("snapshot taken for a literal head"));
        assert_eq!(values, vec![1.0, 2.0]);
    }
}
