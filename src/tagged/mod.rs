//! Tagged pointers: an address and a generation tag manipulated as one
//! atomic unit, the standard defense against the ABA problem.
//!
//! A lock-free algorithm that bumps the tag on every mutation turns "the
//! same address came back" into a visible difference: a CAS carrying the
//! old tag fails even though the address matches.

/// Atomic cells over tagged values.
pub mod atomic;
/// Tagged value types and packing.
pub mod value;

pub use atomic::{
    AtomicTaggedMutPtr, AtomicTaggedOptionMutPtr, AtomicTaggedOptionPtr, AtomicTaggedPtr,
};
pub use value::{TaggedOptionPtr, TaggedPtr};
