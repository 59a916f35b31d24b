//! # `maybeslot` - Inline Optional-Value Slot
//!
//! A generic optional-value container that stores its inner value inline,
//! never on a separately allocated heap block, with explicit control over
//! when the inner value is constructed, copied, reset, and dropped.
//!
//! ## Safety Guarantees
//!
//! ### Memory Safety
//! - **No unsafe code in public APIs**: every safety-critical operation is a
//!   safe wrapper over a small, centrally audited unsafe foundation
//!   (`slot::access` and `slot::ops`).
//! - **Single-occupancy storage**: at most one inner value ever lives in a
//!   slot's storage at a time; the liveness flag and the storage bytes are
//!   mutated only through the engage/disengage primitives.
//! - **Panic safety**: an engaging operation sets the liveness flag only
//!   after the value is fully constructed, so a panicking constructor,
//!   `Clone`, or `Default` leaves the slot observably empty. No value is
//!   leaked or dropped twice.
//!
//! ### Diagnostics
//! - **Debug poisoning**: in debug builds, storage bytes are overwritten
//!   with a fixed poison pattern after the inner value is dropped, so
//!   use-after-reset bugs surface as recognizable garbage.
//! - **Debug assertions**: the `unsafe` unchecked accessors verify the
//!   liveness contract in debug builds and compile to a raw access in
//!   release builds.
//!
//! ## Architecture
//!
//! The module tree is intentionally stratified:
//! - `slot::access` holds the only functions that touch `MaybeUninit`
//!   storage through raw pointers.
//! - `slot::ops` is the audited construct-in-place / destroy-in-place pair
//!   every mutating operation funnels through.
//! - `slot` is the public `MaybeSlot<T>` value type built on top.
//!
//! ## Example
//!
//! ```rust
//! use maybeslot::{slot_of, MaybeSlot};
//!
//! let mut slot = MaybeSlot::<i32>::new();
//! assert!(slot.is_empty());
//!
//! slot.emplace_with(|| 7);
//! assert_eq!(slot.get(), Some(&7));
//!
//! slot.reset();
//! assert!(slot.get().is_none());
//!
//! let point = slot_of((1.0_f32, 2.0_f32));
//! assert!(point.is_engaged());
//! assert_eq!(point.0, 1.0);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod slot;

pub use slot::{slot_of, MaybeSlot};

// Compile-time layout assertions
const _: () = {
    use core::mem::{align_of, size_of};

    // The slot inherits its payload's alignment; the flag never raises it.
    assert!(align_of::<MaybeSlot<u64>>() == align_of::<u64>());
    assert!(align_of::<MaybeSlot<u8>>() == align_of::<u8>());

    // Payload plus flag plus alignment padding, nothing more.
    assert!(size_of::<MaybeSlot<u64>>() <= size_of::<u64>() * 2);

    // The flag rides in what would otherwise be padding for unaligned payloads.
    assert!(size_of::<MaybeSlot<[u8; 3]>>() == 4);

    // Zero-sized payloads cost exactly the flag byte.
    assert!(size_of::<MaybeSlot<()>>() == 1);
};
