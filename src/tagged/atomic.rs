//! Atomic cells over tagged pointer values.
//!
//! Each flavor is a thin facade over [`AtomicPair`]; the `(address, tag)`
//! pair is read and written as one indivisible double-word unit, and CAS
//! compares the whole pair.

use crate::order::{CasKind, LoadMemoryOrder, MemoryOrder, StoreMemoryOrder};
use crate::raw::AtomicPair;
use crate::tagged::{TaggedOptionPtr, TaggedPtr};

/// An atomic, never-null tagged pointer; pointee treated as read-only.
#[repr(transparent)]
pub struct AtomicTaggedPtr<T> {
    inner: AtomicPair<TaggedPtr<T>>,
}

/// An atomic, never-null tagged pointer to a mutable pointee.
#[repr(transparent)]
pub struct AtomicTaggedMutPtr<T> {
    inner: AtomicPair<TaggedPtr<T>>,
}

/// An atomic, possibly-null tagged pointer; pointee treated as read-only.
#[repr(transparent)]
pub struct AtomicTaggedOptionPtr<T> {
    inner: AtomicPair<TaggedOptionPtr<T>>,
}

/// An atomic, possibly-null tagged pointer to a mutable pointee.
#[repr(transparent)]
pub struct AtomicTaggedOptionMutPtr<T> {
    inner: AtomicPair<TaggedOptionPtr<T>>,
}

macro_rules! tagged_atomic_ops {
    ($value:ident) => {
        /// Creates a cell holding `value`.
        #[inline(always)]
        pub fn new(value: $value<T>) -> Self {
            Self {
                inner: AtomicPair::new(value),
            }
        }

        /// Whether double-word operations are lock-free on this machine
        /// (as opposed to the opt-in `fallback` emulation).
        #[inline]
        #[must_use]
        pub fn is_lock_free() -> bool {
            AtomicPair::<$value<T>>::is_lock_free()
        }

        /// Resets the cell under an exclusive borrow, before any sharing.
        #[inline(always)]
        pub fn init(&mut self, value: $value<T>) {
            self.inner.init(value);
        }

        /// Consumes the cell, returning the held value.
        #[inline(always)]
        pub fn into_inner(self) -> $value<T> {
            self.inner.into_inner()
        }

        /// Atomically reads the current `(address, tag)` pair.
        #[inline(always)]
        pub fn load(&self, order: LoadMemoryOrder) -> $value<T> {
            self.inner.load(order)
        }

        /// Atomically writes `value`.
        #[inline(always)]
        pub fn store(&self, value: $value<T>, order: StoreMemoryOrder) {
            self.inner.store(value, order);
        }

        /// Atomically replaces the pair, returning the one it replaced.
        #[inline(always)]
        pub fn swap(&self, value: $value<T>, order: MemoryOrder) -> $value<T> {
            self.inner.swap(value, order)
        }

        /// Atomically replaces `current` with `future` if the cell still
        /// holds `current`.
        ///
        /// Both fields must match: a stale tag fails the CAS even when the
        /// address is unchanged, which is what lets "bump the tag on every
        /// mutation" defeat ABA.
        #[inline(always)]
        pub fn compare_and_swap(
            &self,
            current: $value<T>,
            future: $value<T>,
            kind: CasKind,
            order: MemoryOrder,
        ) -> bool {
            self.inner.compare_and_swap(current, future, kind, order)
        }

        /// CAS that writes the observed pair back into `current` on
        /// failure, from one indivisible double-word read.
        #[inline(always)]
        pub fn load_cas(
            &self,
            current: &mut $value<T>,
            future: $value<T>,
            kind: CasKind,
            success: MemoryOrder,
            failure: LoadMemoryOrder,
        ) -> bool {
            self.inner.load_cas(current, future, kind, success, failure)
        }
    };
}

impl<T> AtomicTaggedPtr<T> {
    tagged_atomic_ops!(TaggedPtr);
}

impl<T> AtomicTaggedMutPtr<T> {
    tagged_atomic_ops!(TaggedPtr);
}

impl<T> AtomicTaggedOptionPtr<T> {
    tagged_atomic_ops!(TaggedOptionPtr);
}

impl<T> AtomicTaggedOptionMutPtr<T> {
    tagged_atomic_ops!(TaggedOptionPtr);
}

impl<T> AtomicTaggedOptionPtr<T> {
    /// Creates an empty (null) cell with tag zero.
    #[inline(always)]
    pub fn new_null() -> Self {
        Self::new(TaggedOptionPtr::null(0))
    }
}

impl<T> AtomicTaggedOptionMutPtr<T> {
    /// Creates an empty (null) cell with tag zero.
    #[inline(always)]
    pub fn new_null() -> Self {
        Self::new(TaggedOptionPtr::null(0))
    }
}

impl<T> Default for AtomicTaggedOptionPtr<T> {
    /// An empty (null) cell with tag zero.
    fn default() -> Self {
        Self::new_null()
    }
}

impl<T> Default for AtomicTaggedOptionMutPtr<T> {
    /// An empty (null) cell with tag zero.
    fn default() -> Self {
        Self::new_null()
    }
}

unsafe impl<T: Sync> Send for AtomicTaggedPtr<T> {}
unsafe impl<T: Sync> Sync for AtomicTaggedPtr<T> {}
unsafe impl<T: Send + Sync> Send for AtomicTaggedMutPtr<T> {}
unsafe impl<T: Send + Sync> Sync for AtomicTaggedMutPtr<T> {}
unsafe impl<T: Sync> Send for AtomicTaggedOptionPtr<T> {}
unsafe impl<T: Sync> Sync for AtomicTaggedOptionPtr<T> {}
unsafe impl<T: Send + Sync> Send for AtomicTaggedOptionMutPtr<T> {}
unsafe impl<T: Send + Sync> Sync for AtomicTaggedOptionMutPtr<T> {}
