//! Non-null atomic pointer to a read-only pointee.

use core::ptr::NonNull;

use crate::order::{CasKind, LoadMemoryOrder, MemoryOrder, StoreMemoryOrder};
use crate::raw::AtomicWord;

/// An atomic, never-null pointer whose pointee is treated as read-only.
///
/// The null case is unrepresentable: construction and every store take a
/// [`NonNull<T>`]. The cell publishes *which address is current*; freeing
/// the referent is the caller's concern, coordinated by whatever
/// reclamation protocol (hazard pointers, epochs) sits above this crate.
#[repr(transparent)]
pub struct AtomicPtr<T> {
    inner: AtomicWord<NonNull<T>>,
}

impl<T> AtomicPtr<T> {
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

    /// [`load`](Self::load), as a const raw pointer.
    #[inline(always)]
    pub fn load_raw(&self, order: LoadMemoryOrder) -> *const T {
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

// The cell hands out shared views of the pointee across threads.
unsafe impl<T: Sync> Send for AtomicPtr<T> {}
unsafe impl<T: Sync> Sync for AtomicPtr<T> {}
