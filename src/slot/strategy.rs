//! Proptest strategies for building `MaybeSlot` values.
//!
//! Enabled by the `proptest` cargo feature. Useful when a slot appears as a
//! field of a larger type under property test.

use core::fmt;

use proptest::prelude::*;

use super::MaybeSlot;

/// Strategy producing a mix of empty and engaged slots.
///
/// Engaged slots draw their value from `inner`; roughly half the generated
/// slots are empty so both states get shrink coverage.
pub fn maybe_slot<T, S>(inner: S) -> impl Strategy<Value = MaybeSlot<T>>
where
    T: fmt::Debug,
    S: Strategy<Value = T>,
{
    proptest::option::of(inner).prop_map(|value| match value {
        Some(value) => MaybeSlot::of(value),
        None => MaybeSlot::empty(),
    })
}
