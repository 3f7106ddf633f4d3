//! The single-word atomic cell all typed pointer flavors delegate to.

use core::marker::PhantomData;
use core::sync::atomic::AtomicUsize;

use crate::order::{CasKind, LoadMemoryOrder, MemoryOrder, StoreMemoryOrder};
use crate::raw::Handle;

/// One atomically-updated machine word holding a [`Handle`].
///
/// The cell coordinates visibility and ordering of *which address is
/// current*; the referent's lifetime remains entirely the caller's concern.
/// Every value observed by a load was previously written whole by a store,
/// swap, or successful CAS — never a torn bit pattern.
#[repr(transparent)]
pub struct AtomicWord<H: Handle> {
    bits: AtomicUsize,
    _handle: PhantomData<H>,
}

impl<H: Handle> AtomicWord<H> {
    /// Creates a cell holding `value`.
    #[inline(always)]
    pub fn new(value: H) -> Self {
        Self {
            bits: AtomicUsize::new(value.into_bits()),
            _handle: PhantomData,
        }
    }

    /// Resets the cell to `value` without synchronization.
    ///
    /// The exclusive borrow is what makes this sound: no other thread can
    /// hold a reference to the cell while it is being reinitialized.
    #[inline(always)]
    pub fn init(&mut self, value: H) {
        *self.bits.get_mut() = value.into_bits();
    }

    /// Consumes the cell, returning the held value.
    #[inline(always)]
    pub fn into_inner(self) -> H {
        unsafe { H::from_bits(self.bits.into_inner()) }
    }

    /// Atomically reads the current value.
    #[inline(always)]
    pub fn load(&self, order: LoadMemoryOrder) -> H {
        unsafe { H::from_bits(self.bits.load(order.to_ordering())) }
    }

    /// Atomically writes `value`.
    #[inline(always)]
    pub fn store(&self, value: H, order: StoreMemoryOrder) {
        self.bits.store(value.into_bits(), order.to_ordering());
    }

    /// Atomically replaces the value, returning the one it replaced.
    #[inline(always)]
    pub fn swap(&self, value: H, order: MemoryOrder) -> H {
        unsafe { H::from_bits(self.bits.swap(value.into_bits(), order.to_ordering())) }
    }

    /// Atomically replaces `current` with `future` if the cell still holds
    /// `current`, returning whether the replacement happened.
    ///
    /// Comparison is by address bit pattern, never by pointee contents.
    /// With [`CasKind::Weak`] the operation may fail spuriously even on a
    /// match; with [`CasKind::Strong`] a mismatch is the only failure.
    #[inline(always)]
    pub fn compare_and_swap(
        &self,
        current: H,
        future: H,
        kind: CasKind,
        order: MemoryOrder,
    ) -> bool {
        let (success, failure) = (order.to_ordering(), order.to_failure_ordering());
        let (cur, fut) = (current.into_bits(), future.into_bits());
        match kind {
            CasKind::Strong => self.bits.compare_exchange(cur, fut, success, failure).is_ok(),
            CasKind::Weak => self
                .bits
                .compare_exchange_weak(cur, fut, success, failure)
                .is_ok(),
        }
    }

    /// [`compare_and_swap`](Self::compare_and_swap) that, on failure, writes
    /// the actually-observed value back into `current`.
    ///
    /// The written-back value is a single consistent atomic read performed
    /// with `failure` ordering, ready for the caller's next retry. On
    /// success `current` is untouched (it already equals what was observed).
    /// Callers in a retry loop usually pass [`CasKind::Weak`]; the plain
    /// [`compare_and_swap`](Self::compare_and_swap) is usually `Strong`.
    #[inline(always)]
    pub fn load_cas(
        &self,
        current: &mut H,
        future: H,
        kind: CasKind,
        success: MemoryOrder,
        failure: LoadMemoryOrder,
    ) -> bool {
        let (cur, fut) = (current.into_bits(), future.into_bits());
        let result = match kind {
            CasKind::Strong => {
                self.bits
                    .compare_exchange(cur, fut, success.to_ordering(), failure.to_ordering())
            }
            CasKind::Weak => self.bits.compare_exchange_weak(
                cur,
                fut,
                success.to_ordering(),
                failure.to_ordering(),
            ),
        };
        match result {
            Ok(_) => true,
            Err(observed) => {
                *current = unsafe { H::from_bits(observed) };
                false
            }
        }
    }
}
