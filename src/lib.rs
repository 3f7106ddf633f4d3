//! # `keel` - Atomic Pointer Primitives
//!
//! The foundation layer for lock-free data structures: atomic cells that
//! hold a raw address (plain, mutable, optional, opaque) or an address
//! paired with a generation tag, with load/store/swap/compare-and-swap
//! under explicit memory orderings.
//!
//! ## Division of Labor
//!
//! These cells coordinate exactly one thing: which address is current, with
//! the ordering guarantees the caller asked for. They own nothing the
//! address points at. Freeing a referent while another thread may still
//! dereference it is the caller's problem to prevent, with whatever
//! reclamation protocol (hazard pointers, epochs) the caller layers on top.
//!
//! ## Orderings
//!
//! Operations take constrained ordering enums rather than the full
//! [`core::sync::atomic::Ordering`]: a pure load cannot release and a pure
//! store cannot acquire, so [`LoadMemoryOrder`] and [`StoreMemoryOrder`]
//! make those combinations unrepresentable. The default strength
//! everywhere is sequential consistency; weaker orderings and weak CAS are
//! explicit opt-ins for callers who accept the relaxed guarantees.
//!
//! ## Tagged Pointers & ABA
//!
//! The tagged flavors pack `(address, tag)` into one double-word atomic
//! unit. CAS compares both fields, so a slot that went A → B → A with a
//! tag bump per step no longer matches a stale expectation — the classic
//! ABA defense. The tag is a full machine word and is never truncated.
//!
//! Double-word atomics come from `portable-atomic` with emulation disabled:
//! a target without a native double-word CAS is a build error, unless the
//! `fallback` cargo feature explicitly opts into its sequence-lock
//! emulation (atomic, but not lock-free).
//!
//! ## Example
//!
//! ```rust
//! use core::ptr::NonNull;
//! use keel::{AtomicTaggedPtr, CasKind, LoadMemoryOrder, MemoryOrder, TaggedPtr};
//!
//! let node = Box::into_raw(Box::new(7_u32));
//! let head = AtomicTaggedPtr::new(TaggedPtr::new(NonNull::new(node).unwrap(), 0));
//!
//! // Claim the slot by bumping the generation.
//! let seen = head.load(LoadMemoryOrder::SeqCst);
//! assert!(head.compare_and_swap(seen, seen.bump(), CasKind::Strong, MemoryOrder::SeqCst));
//!
//! // A second claim against the stale generation fails.
//! assert!(!head.compare_and_swap(seen, seen.bump(), CasKind::Strong, MemoryOrder::SeqCst));
//! assert_eq!(head.load(LoadMemoryOrder::SeqCst).tag(), 1);
//!
//! unsafe { drop(Box::from_raw(node)) };
//! ```

#![no_std]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::inline_always)]

pub mod order;
pub mod ptr;
pub mod raw;
pub mod tagged;

pub use order::{CasKind, LoadMemoryOrder, MemoryOrder, StoreMemoryOrder};
pub use ptr::{
    AtomicMutPtr, AtomicOpaquePtr, AtomicOptionMutPtr, AtomicOptionOpaquePtr, AtomicOptionPtr,
    AtomicPtr,
};
pub use tagged::{
    AtomicTaggedMutPtr, AtomicTaggedOptionMutPtr, AtomicTaggedOptionPtr, AtomicTaggedPtr,
    TaggedOptionPtr, TaggedPtr,
};

// Compile-time assertions for the zero-overhead layout claims.
const _: () = {
    use core::mem;

    // Single-word cells are exactly one word; the nullable flavors encode
    // `None` as the null address rather than carrying a discriminant.
    assert!(mem::size_of::<AtomicPtr<u64>>() == mem::size_of::<usize>());
    assert!(mem::size_of::<AtomicMutPtr<u64>>() == mem::size_of::<usize>());
    assert!(mem::size_of::<AtomicOptionPtr<u64>>() == mem::size_of::<usize>());
    assert!(mem::size_of::<AtomicOptionMutPtr<u64>>() == mem::size_of::<usize>());
    assert!(mem::size_of::<AtomicOpaquePtr>() == mem::size_of::<usize>());

    // Tagged values and cells are exactly two words.
    assert!(mem::size_of::<TaggedPtr<u64>>() == 2 * mem::size_of::<usize>());
    assert!(mem::size_of::<TaggedOptionPtr<u64>>() == 2 * mem::size_of::<usize>());
    assert!(mem::size_of::<AtomicTaggedPtr<u64>>() == 2 * mem::size_of::<usize>());
    assert!(mem::size_of::<AtomicTaggedOptionPtr<u64>>() == 2 * mem::size_of::<usize>());

    // The double-word unit really is double-word aligned, as the native
    // CAS instructions require.
    assert!(mem::align_of::<AtomicTaggedPtr<u64>>() == 2 * mem::size_of::<usize>());
};
