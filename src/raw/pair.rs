//! The double-word atomic cell backing the tagged pointer flavors.
//!
//! The unit is two machine words: address in the low word, tag in the high
//! word. `portable-atomic` supplies the atomic with its emulation features
//! disabled, so a target with no native double-word CAS fails to build
//! instead of silently degrading; the `fallback` cargo feature opts into
//! portable-atomic's sequence-lock emulation (which still never tears, but
//! is not lock-free).

use core::marker::PhantomData;

#[cfg(target_pointer_width = "32")]
use portable_atomic::AtomicU64 as AtomicDoubleWord;
#[cfg(target_pointer_width = "64")]
use portable_atomic::AtomicU128 as AtomicDoubleWord;

use crate::order::{CasKind, LoadMemoryOrder, MemoryOrder, StoreMemoryOrder};
use crate::raw::PairHandle;

/// Twice the width of a machine word.
#[cfg(target_pointer_width = "64")]
pub type DoubleWord = u128;
/// Twice the width of a machine word.
#[cfg(target_pointer_width = "32")]
pub type DoubleWord = u64;

/// One atomically-updated double word holding a [`PairHandle`].
///
/// Address and tag travel as one indivisible unit: no observer ever sees an
/// address from one update paired with a tag from another.
#[repr(transparent)]
pub struct AtomicPair<H: PairHandle> {
    bits: AtomicDoubleWord,
    _handle: PhantomData<H>,
}

impl<H: PairHandle> AtomicPair<H> {
    /// Creates a cell holding `value`.
    #[inline(always)]
    pub fn new(value: H) -> Self {
        Self {
            bits: AtomicDoubleWord::new(value.into_bits()),
            _handle: PhantomData,
        }
    }

    /// Whether double-word operations compile to lock-free instructions on
    /// the running machine (as opposed to the opt-in `fallback` emulation).
    #[inline]
    #[must_use]
    pub fn is_lock_free() -> bool {
        AtomicDoubleWord::is_lock_free()
    }

    /// Resets the cell to `value` without synchronization, under an
    /// exclusive borrow.
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
    /// The comparison key is the whole packed pair, so two values with the
    /// same address but different tags never match.
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
    /// The written-back pair comes from one indivisible double-word read.
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
