//! Audited engage/disengage primitives for `MaybeSlot`.
//!
//! Every mutating operation on a slot funnels through this pair; no other
//! code flips the `engaged` flag or constructs/destroys the stored value.

use super::access;
use super::MaybeSlot;

/// Constructs a value in place and marks the slot engaged.
///
/// The slot must currently be empty. The flag is set only after `build`
/// returns, so a panicking constructor leaves the slot empty.
#[inline]
pub(super) fn engage_with<T, F>(slot: &mut MaybeSlot<T>, build: F) -> &mut T
where
    F: FnOnce() -> T,
{
    debug_assert!(!slot.engaged, "engage of an already-engaged MaybeSlot");
    let value = slot.value.write(build());
    slot.engaged = true;
    value
}

/// Drops the stored value in place, if any, and marks the slot empty.
///
/// Idempotent. The flag is cleared before the drop runs, so an unwinding
/// destructor observes an empty slot. Debug builds poison the freed
/// storage bytes afterwards.
#[inline]
pub(super) fn disengage<T>(slot: &mut MaybeSlot<T>) {
    if !slot.engaged {
        return;
    }
    slot.engaged = false;
    // SAFETY: the flag said engaged, so the storage holds exactly one
    // initialized value, dropped here exactly once.
    unsafe { access::drop_in_place_ptr(&mut slot.value) };
    #[cfg(debug_assertions)]
    access::poison(&mut slot.value);
}
