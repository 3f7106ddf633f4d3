//! Nullable atomic pointers.
//!
//! The empty state is `None`; its bit pattern is the null address, so the
//! whole `Option<NonNull<T>>` still fits one machine word.

use core::ptr::NonNull;

use crate::order::{CasKind, LoadMemoryOrder, MemoryOrder, StoreMemoryOrder};
use crate::raw::AtomicWord;

/// An atomic, possibly-null pointer whose pointee is treated as read-only.
#[repr(transparent)]
pub struct AtomicOptionPtr<T> {
    inner: AtomicWord<Option<NonNull<T>>>,
}

/// An atomic, possibly-null pointer whose pointee may be mutated.
#[repr(transparent)]
pub struct AtomicOptionMutPtr<T> {
    inner: AtomicWord<Option<NonNull<T>>>,
}

impl<T> AtomicOptionPtr<T> {
    /// Creates an empty (null) cell.
    #[inline(always)]
    pub fn new_null() -> Self {
        Self::new(None)
    }

    /// Creates a cell holding `ptr`.
    #[inline(always)]
    pub fn new(ptr: Option<NonNull<T>>) -> Self {
        Self {
            inner: AtomicWord::new(ptr),
        }
    }

    /// Resets the cell under an exclusive borrow, before any sharing.
    #[inline(always)]
    pub fn init(&mut self, ptr: Option<NonNull<T>>) {
        self.inner.init(ptr);
    }

    /// Consumes the cell, returning the held pointer.
    #[inline(always)]
    pub fn into_inner(self) -> Option<NonNull<T>> {
        self.inner.into_inner()
    }

    /// Atomically reads the current pointer.
    #[inline(always)]
    pub fn load(&self, order: LoadMemoryOrder) -> Option<NonNull<T>> {
        self.inner.load(order)
    }

    /// [`load`](Self::load), as a const raw pointer (null when empty).
    #[inline(always)]
    pub fn load_raw(&self, order: LoadMemoryOrder) -> *const T {
        self.inner
            .load(order)
            .map_or(core::ptr::null(), |p| p.as_ptr() as *const T)
    }

    /// Atomically writes `ptr`.
    #[inline(always)]
    pub fn store(&self, ptr: Option<NonNull<T>>, order: StoreMemoryOrder) {
        self.inner.store(ptr, order);
    }

    /// Atomically replaces the pointer, returning the one it replaced.
    #[inline(always)]
    pub fn swap(&self, ptr: Option<NonNull<T>>, order: MemoryOrder) -> Option<NonNull<T>> {
        self.inner.swap(ptr, order)
    }

    /// Atomically replaces `current` with `future` if the cell still holds
    /// `current`. `None` participates like any other value.
    #[inline(always)]
    pub fn compare_and_swap(
        &self,
        current: Option<NonNull<T>>,
        future: Option<NonNull<T>>,
        kind: CasKind,
        order: MemoryOrder,
    ) -> bool {
        self.inner.compare_and_swap(current, future, kind, order)
    }

    /// CAS that writes the observed pointer back into `current` on failure.
    #[inline(always)]
    pub fn load_cas(
        &self,
        current: &mut Option<NonNull<T>>,
        future: Option<NonNull<T>>,
        kind: CasKind,
        success: MemoryOrder,
        failure: LoadMemoryOrder,
    ) -> bool {
        self.inner.load_cas(current, future, kind, success, failure)
    }
}

impl<T> AtomicOptionMutPtr<T> {
    /// Creates an empty (null) cell.
    #[inline(always)]
    pub fn new_null() -> Self {
        Self::new(None)
    }

    /// Creates a cell holding `ptr`.
    #[inline(always)]
    pub fn new(ptr: Option<NonNull<T>>) -> Self {
        Self {
            inner: AtomicWord::new(ptr),
        }
    }

    /// Resets the cell under an exclusive borrow, before any sharing.
    #[inline(always)]
    pub fn init(&mut self, ptr: Option<NonNull<T>>) {
        self.inner.init(ptr);
    }

    /// Consumes the cell, returning the held pointer.
    #[inline(always)]
    pub fn into_inner(self) -> Option<NonNull<T>> {
        self.inner.into_inner()
    }

    /// Atomically reads the current pointer.
    #[inline(always)]
    pub fn load(&self, order: LoadMemoryOrder) -> Option<NonNull<T>> {
        self.inner.load(order)
    }

    /// [`load`](Self::load), as a mutable raw pointer (null when empty).
    #[inline(always)]
    pub fn load_raw(&self, order: LoadMemoryOrder) -> *mut T {
        self.inner
            .load(order)
            .map_or(core::ptr::null_mut(), NonNull::as_ptr)
    }

    /// Atomically writes `ptr`.
    #[inline(always)]
    pub fn store(&self, ptr: Option<NonNull<T>>, order: StoreMemoryOrder) {
        self.inner.store(ptr, order);
    }

    /// Atomically replaces the pointer, returning the one it replaced.
    #[inline(always)]
    pub fn swap(&self, ptr: Option<NonNull<T>>, order: MemoryOrder) -> Option<NonNull<T>> {
        self.inner.swap(ptr, order)
    }

    /// Atomically replaces `current` with `future` if the cell still holds
    /// `current`. `None` participates like any other value.
    #[inline(always)]
    pub fn compare_and_swap(
        &self,
        current: Option<NonNull<T>>,
        future: Option<NonNull<T>>,
        kind: CasKind,
        order: MemoryOrder,
    ) -> bool {
        self.inner.compare_and_swap(current, future, kind, order)
    }

    /// CAS that writes the observed pointer back into `current` on failure.
    #[inline(always)]
    pub fn load_cas(
        &self,
        current: &mut Option<NonNull<T>>,
        future: Option<NonNull<T>>,
        kind: CasKind,
        success: MemoryOrder,
        failure: LoadMemoryOrder,
    ) -> bool {
        self.inner.load_cas(current, future, kind, success, failure)
    }
}

impl<T> Default for AtomicOptionPtr<T> {
    /// An empty (null) cell.
    fn default() -> Self {
        Self::new_null()
    }
}

impl<T> Default for AtomicOptionMutPtr<T> {
    /// An empty (null) cell.
    fn default() -> Self {
        Self::new_null()
    }
}

unsafe impl<T: Sync> Send for AtomicOptionPtr<T> {}
unsafe impl<T: Sync> Sync for AtomicOptionPtr<T> {}
unsafe impl<T: Send + Sync> Send for AtomicOptionMutPtr<T> {}
unsafe impl<T: Send + Sync> Sync for AtomicOptionMutPtr<T> {}
