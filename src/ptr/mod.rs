//! Typed single-word pointer flavors.
//!
//! Four nullability/mutability policies over one shared core
//! ([`crate::raw::AtomicWord`]), plus type-erased aliases:
//!
//! | type | null | pointee |
//! |---|---|---|
//! | [`AtomicPtr`] | never | read-only |
//! | [`AtomicMutPtr`] | never | mutable |
//! | [`AtomicOptionPtr`] | allowed | read-only |
//! | [`AtomicOptionMutPtr`] | allowed | mutable |
//! | [`AtomicOpaquePtr`] | never | erased |
//! | [`AtomicOptionOpaquePtr`] | allowed | erased |

/// Nullable flavors.
pub mod option;
/// Non-null, read-only-pointee flavor.
pub mod shared;
/// Non-null, mutable-pointee flavor.
pub mod unique;

pub use option::{AtomicOptionMutPtr, AtomicOptionPtr};
pub use shared::AtomicPtr;
pub use unique::AtomicMutPtr;

/// An atomic, never-null pointer with the pointee type erased.
pub type AtomicOpaquePtr = AtomicMutPtr<core::ffi::c_void>;

/// An atomic, possibly-null pointer with the pointee type erased.
pub type AtomicOptionOpaquePtr = AtomicOptionMutPtr<core::ffi::c_void>;
