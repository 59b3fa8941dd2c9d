//! Incremental builder with typed field accumulation.
//!
//! A [`Builder<T>`] owns exactly one in-progress composite value. Fields are
//! addressed through typed descriptors: [`Slot`] for single-valued fields
//! (last write wins) and [`ListSlot`] for ordered collections (append, in call
//! order). [`Builder::finalize`] moves the accumulated value out and leaves a
//! fresh `T::default()` behind, so successive results never share storage.
//!
//! ```
//! use pattern_demos::builder::{Builder, Slot, ListSlot};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Order { label: Option<u8>, lines: Vec<u8> }
//!
//! const LABEL: Slot<Order, u8> = Slot::new("label", |o| &mut o.label);
//! const LINES: ListSlot<Order, u8> = ListSlot::new("lines", |o| &mut o.lines);
//!
//! let mut builder = Builder::<Order>::new();
//! let order = builder.set(LABEL, 7).add(LINES, vec![1, 2]).add(LINES, [3]).finalize();
//! assert_eq!(order, Order { label: Some(7), lines: vec![1, 2, 3] });
//! assert_eq!(builder.finalize(), Order::default());
//! ```
use std::fmt::Debug;

use tracing::{debug, trace};

// ————————————————————————————————————————————————————————————————————————————
// FIELD DESCRIPTORS
// ————————————————————————————————————————————————————————————————————————————

/// A single-valued field of `T` holding an optional `V`.
pub struct Slot<T, V> {
    name: &'static str,
    access: fn(&mut T) -> &mut Option<V>,
}

/// An ordered collection field of `T` holding `V`s.
pub struct ListSlot<T, V> {
    name: &'static str,
    access: fn(&mut T) -> &mut Vec<V>,
}

impl<T, V> Slot<T, V> {
    pub const fn new(name: &'static str, access: fn(&mut T) -> &mut Option<V>) -> Self {
        Self { name, access }
    }
    pub fn name(&self) -> &'static str { self.name }
}

impl<T, V> ListSlot<T, V> {
    pub const fn new(name: &'static str, access: fn(&mut T) -> &mut Vec<V>) -> Self {
        Self { name, access }
    }
    pub fn name(&self) -> &'static str { self.name }
}

// derive would demand `T: Clone, V: Clone`
impl<T, V> Clone for Slot<T, V> {
    fn clone(&self) -> Self { *self }
}
impl<T, V> Copy for Slot<T, V> {}
impl<T, V> Clone for ListSlot<T, V> {
    fn clone(&self) -> Self { *self }
}
impl<T, V> Copy for ListSlot<T, V> {}

// ————————————————————————————————————————————————————————————————————————————
// ITEMS (one or many)
// ————————————————————————————————————————————————————————————————————————————

/// Argument of [`Builder::add`]: either a single value or a sequence.
///
/// Single choices convert through the `From` impl generated by `choice!`;
/// sequences come from a `Vec`, an array or a slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Items<V>(Vec<V>);

impl<V> Items<V> {
    pub fn one(value: V) -> Self { Self(vec![value]) }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl<V> From<Vec<V>> for Items<V> {
    fn from(values: Vec<V>) -> Self { Self(values) }
}

impl<V, const N: usize> From<[V; N]> for Items<V> {
    fn from(values: [V; N]) -> Self { Self(Vec::from(values)) }
}

impl<V: Clone> From<&[V]> for Items<V> {
    fn from(values: &[V]) -> Self { Self(values.to_vec()) }
}

impl<V> IntoIterator for Items<V> {
    type Item = V;
    type IntoIter = std::vec::IntoIter<V>;
    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

// ————————————————————————————————————————————————————————————————————————————
// BUILDER
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug)]
pub struct Builder<T> {
    current: T,
    emitted: usize,
}

impl<T: Default> Default for Builder<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Default> Builder<T> {
    pub fn new() -> Self {
        Self { current: T::default(), emitted: 0 }
    }

    /// Overwrite a single-valued field. Last write wins.
    pub fn set<V: Debug>(&mut self, slot: Slot<T, V>, value: V) -> &mut Self {
        trace!(field = slot.name, value = ?value, "set");
        *(slot.access)(&mut self.current) = Some(value);
        self
    }

    /// Append one value or a sequence onto a collection field, keeping call order.
    pub fn add<V: Debug>(&mut self, slot: ListSlot<T, V>, items: impl Into<Items<V>>) -> &mut Self {
        let items = items.into();
        if items.is_empty() {
            trace!(field = slot.name, "add: nothing to append");
            return self;
        }
        trace!(field = slot.name, count = items.len(), items = ?items.0, "add");
        (slot.access)(&mut self.current).extend(items);
        self
    }

    /// The value accumulated so far.
    pub fn peek(&self) -> &T { &self.current }

    /// Number of values handed out by [`Builder::finalize`].
    pub fn emitted(&self) -> usize { self.emitted }

    /// Hand out the accumulated value and start over from `T::default()`.
    pub fn finalize(&mut self) -> T {
        self.emitted += 1;
        debug!(emitted = self.emitted, "finalize");
        std::mem::take(&mut self.current)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
