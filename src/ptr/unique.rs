//! Non-null atomic pointer to a mutable pointee.

use core::ptr::NonNull;

use crate::order::{CasKind, LoadMemoryOrder, MemoryOrder, StoreMemoryOrder};
use crate::raw::AtomicWord;

/// An atomic, never-null pointer whose pointee may be mutated.
///
/// Identical to [`AtomicPtr`](crate::AtomicPtr) except that the raw view is
/// `*mut T` and the Send/Sync bounds account for handing out mutable access
/// to the referent. Exclusive access to the pointee itself must still be
/// arranged by the caller's algorithm; the cell only publishes the address.
#[repr(transparent)]
pub struct AtomicMutPtr<T> {
    inner: AtomicWord<NonNull<T>>,
}

impl<T> AtomicMutPtr<T> {
    /// Creates a cell holding `ptr`.
    #[inline(always)]
    pub fn new(ptr: NonNull<T>) -> Self {
        Self {
            inner: AtomicWord::new(ptr),
        }
    }

    /// Resets the cell under an exclusive borrow, before any sharing.
    #[inline(always)]
    pub fn init(&mut self, ptr: NonNull<T>) {
        self.inner.init(ptr);
    }

    /// Consumes the cell, returning the held pointer.
    #[inline(always)]
    pub fn into_inner(self) -> NonNull<T> {
        self.inner.into_inner()
    }

    /// Atomically reads the current pointer.
    #[inline(always)]
    pub fn load(&self, order: LoadMemoryOrder) -> NonNull<T> {
        self.inner.load(order)
    }

    /// [`load`](Self::load), as a mutable raw pointer.
    #[inline(always)]
    pub fn load_raw(&self, order: LoadMemoryOrder) -> *mut T {
        self.inner.load(order).as_ptr()
    }

    /// Atomically writes `ptr`.
    #[inline(always)]
    pub fn store(&self, ptr: NonNull<T>, order: StoreMemoryOrder) {
        self.inner.store(ptr, order);
    }

    /// Atomically replaces the pointer, returning the one it replaced.
    #[inline(always)]
    pub fn swap(&self, ptr: NonNull<T>, order: MemoryOrder) -> NonNull<T> {
        self.inner.swap(ptr, order)
    }

    /// Atomically replaces `current` with `future` if the cell still holds
    /// `current`. Comparison is by address, never by pointee contents.
    #[inline(always)]
    pub fn compare_and_swap(
        &self,
        current: NonNull<T>,
        future: NonNull<T>,
        kind: CasKind,
        order: MemoryOrder,
    ) -> bool {
        self.inner.compare_and_swap(current, future, kind, order)
    }

    /// CAS that writes the observed pointer back into `current` on failure.
    #[inline(always)]
    pub fn load_cas(
        &self,
        current: &mut NonNull<T>,
        future: NonNull<T>,
        kind: CasKind,
        success: MemoryOrder,
        failure: LoadMemoryOrder,
    ) -> bool {
        self.inner.load_cas(current, future, kind, success, failure)
    }
}

// Mutable access to the pointee can move between threads through the cell.
unsafe impl<T: Send + Sync> Send for AtomicMutPtr<T> {}
unsafe impl<T: Send + Sync> Sync for AtomicMutPtr<T> {}
