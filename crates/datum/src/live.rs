//! `Datum`: the live-handle wrapper.
//!
//! A `Datum` owns a slot holding the current native target. [`Datum::native`]
//! hands out a [`NativeHandle`] over that target. Every mutation, whether it
//! comes from a `Datum` setter or straight from a handle, is applied to the
//! datum's current value and then the slot re-arms: a fresh target with the
//! mutated value replaces the old one, so the next `native()` read is a
//! different handle.
//!
//! Handles taken before a mutation are stale: reads see the value as of
//! their last write. Writing through a stale handle still goes to the
//! `Datum`, applied on top of its current value, and refreshes that handle.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::{Rc, Weak};

use datum_native::{NativeDate, Setter, Zone};

use crate::engine::Strategy;
use crate::fields::{DateFields, DateFormat};
use crate::input::DateInput;

type Target = Rc<RefCell<NativeDate>>;

struct Slot {
    current: RefCell<Target>,
}

impl Slot {
    fn new(native: NativeDate) -> Rc<Self> {
        Rc::new(Self {
            current: RefCell::new(Rc::new(RefCell::new(native))),
        })
    }

    fn value(&self) -> NativeDate {
        *self.current.borrow().borrow()
    }

    fn is_current(&self, target: &Target) -> bool {
        Rc::ptr_eq(&*self.current.borrow(), target)
    }

    fn rearm(&self, native: NativeDate) {
        *self.current.borrow_mut() = Rc::new(RefCell::new(native));
        tracing::trace!("re-armed native handle");
    }
}

/// A date whose identity is stable while its value follows mutations made
/// through its setters or its native handle.
///
/// Not thread-safe; share it behind your own synchronization.
pub struct Datum {
    slot: Rc<Slot>,
}

impl Datum {
    pub fn new(input: impl Into<DateInput>) -> Self {
        Self::new_in(Zone::default(), input)
    }

    pub fn new_in(zone: Zone, input: impl Into<DateInput>) -> Self {
        Self {
            slot: Slot::new(input.into().into_native(zone)),
        }
    }

    pub fn now() -> Self {
        Self::new(DateInput::Now)
    }

    /// The exposed native handle. Two reads with no mutation in between share
    /// a target; a read after any mutation never does.
    pub fn native(&self) -> NativeHandle {
        NativeHandle {
            target: Rc::clone(&self.slot.current.borrow()),
            owner: Rc::downgrade(&self.slot),
        }
    }
}

impl DateFields for Datum {
    fn native_value(&self) -> NativeDate {
        self.slot.value()
    }
}

impl Strategy for Datum {
    type Output<'a> = &'a Datum;

    /// Goes through the exposed handle so setter-driven and handle-driven
    /// mutations re-arm the same way.
    fn commit(&self, setter: Setter, fields: &[f64]) -> &Datum {
        self.native().set(setter, fields);
        self
    }
}

/// Copies the value into an independent `Datum`.
impl Clone for Datum {
    fn clone(&self) -> Self {
        Datum::new(self)
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Debug for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Datum")
            .field("native", &self.native_value())
            .finish()
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl PartialEq for Datum {
    fn eq(&self, other: &Self) -> bool {
        self.native_value() == other.native_value()
    }
}

impl PartialOrd for Datum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.native_value().partial_cmp(&other.native_value())
    }
}

impl From<&Datum> for f64 {
    fn from(date: &Datum) -> Self {
        date.value_of()
    }
}

/// Intercepting view over a [`Datum`]'s native value.
///
/// Reads pass straight through. [`NativeHandle::set`] applies the mutation to
/// the datum's real value and re-arms the datum, whether or not this handle
/// is still the current one.
#[derive(Clone)]
pub struct NativeHandle {
    target: Target,
    owner: Weak<Slot>,
}

impl NativeHandle {
    /// The primitive value behind this handle.
    pub fn get(&self) -> NativeDate {
        *self.target.borrow()
    }

    /// Runs a primitive setter through the handle and returns the new time
    /// value.
    ///
    /// Once the owning datum is gone only this handle's copy changes.
    pub fn set(&self, setter: Setter, fields: &[f64]) -> f64 {
        let Some(slot) = self.owner.upgrade() else {
            return self.target.borrow_mut().set(setter, fields);
        };
        let mut next = slot.value();
        let time = next.set(setter, fields);
        *self.target.borrow_mut() = next;
        slot.rearm(next);
        time
    }

    /// Whether the owning datum would still return this handle's target.
    pub fn is_current(&self) -> bool {
        self.owner
            .upgrade()
            .is_some_and(|slot| slot.is_current(&self.target))
    }

    /// Reference identity, as opposed to `==` which compares values.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.target, &other.target)
    }
}

impl DateFields for NativeHandle {
    fn native_value(&self) -> NativeDate {
        self.get()
    }
}

impl fmt::Debug for NativeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeHandle")
            .field("native", &self.get())
            .field("current", &self.is_current())
            .finish()
    }
}

/// The primitive's own `toString` text.
impl fmt::Display for NativeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl PartialEq for NativeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}
