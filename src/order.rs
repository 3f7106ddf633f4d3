//! Memory-ordering and compare-and-swap parameter types.
//!
//! These enums restrict [`core::sync::atomic::Ordering`] to the subsets that
//! are meaningful per operation: a pure load cannot release, a pure store
//! cannot acquire. Passing an invalid ordering is therefore unrepresentable
//! rather than a runtime error.

use core::sync::atomic::Ordering;

/// Ordering for read-modify-write operations (swap, compare-and-swap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryOrder {
    /// No cross-thread ordering beyond atomicity of the operation itself.
    Relaxed,
    /// The load half synchronizes-with a matching release store.
    Acquire,
    /// The store half synchronizes-with a matching acquire load.
    Release,
    /// Both acquire and release semantics.
    AcqRel,
    /// One global total order across all sequentially consistent operations.
    SeqCst,
}

/// Ordering for pure loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadMemoryOrder {
    /// No cross-thread ordering beyond atomicity.
    Relaxed,
    /// Synchronizes-with a matching release store of the observed value.
    Acquire,
    /// Sequentially consistent.
    SeqCst,
}

/// Ordering for pure stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreMemoryOrder {
    /// No cross-thread ordering beyond atomicity.
    Relaxed,
    /// Synchronizes-with a matching acquire load.
    Release,
    /// Sequentially consistent.
    SeqCst,
}

/// Retry semantics of a compare-and-swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CasKind {
    /// May fail spuriously even when the observed value matches. Cheaper on
    /// LL/SC architectures; intended for callers already in a retry loop.
    Weak,
    /// Fails only on an actual value mismatch.
    Strong,
}

impl MemoryOrder {
    /// The equivalent `core` ordering for the success path.
    #[inline(always)]
    #[must_use]
    pub const fn to_ordering(self) -> Ordering {
        match self {
            Self::Relaxed => Ordering::Relaxed,
            Self::Acquire => Ordering::Acquire,
            Self::Release => Ordering::Release,
            Self::AcqRel => Ordering::AcqRel,
            Self::SeqCst => Ordering::SeqCst,
        }
    }

    /// The failure-path ordering derived from a success ordering, per the
    /// C++ rule: a failed CAS performs no store, so the release component
    /// is dropped.
    #[inline(always)]
    #[must_use]
    pub const fn to_failure_ordering(self) -> Ordering {
        match self {
            Self::Relaxed | Self::Release => Ordering::Relaxed,
            Self::Acquire | Self::AcqRel => Ordering::Acquire,
            Self::SeqCst => Ordering::SeqCst,
        }
    }
}

impl LoadMemoryOrder {
    /// The equivalent `core` ordering.
    #[inline(always)]
    #[must_use]
    pub const fn to_ordering(self) -> Ordering {
        match self {
            Self::Relaxed => Ordering::Relaxed,
            Self::Acquire => Ordering::Acquire,
            Self::SeqCst => Ordering::SeqCst,
        }
    }
}

impl StoreMemoryOrder {
    /// The equivalent `core` ordering.
    #[inline(always)]
    #[must_use]
    pub const fn to_ordering(self) -> Ordering {
        match self {
            Self::Relaxed => Ordering::Relaxed,
            Self::Release => Ordering::Release,
            Self::SeqCst => Ordering::SeqCst,
        }
    }
}

impl Default for MemoryOrder {
    /// Sequentially consistent; weaker orderings are an explicit opt-in.
    fn default() -> Self {
        Self::SeqCst
    }
}

impl Default for LoadMemoryOrder {
    /// Sequentially consistent; weaker orderings are an explicit opt-in.
    fn default() -> Self {
        Self::SeqCst
    }
}

impl Default for StoreMemoryOrder {
    /// Sequentially consistent; weaker orderings are an explicit opt-in.
    fn default() -> Self {
        Self::SeqCst
    }
}

impl From<LoadMemoryOrder> for MemoryOrder {
    #[inline(always)]
    fn from(order: LoadMemoryOrder) -> Self {
        match order {
            LoadMemoryOrder::Relaxed => Self::Relaxed,
            LoadMemoryOrder::Acquire => Self::Acquire,
            LoadMemoryOrder::SeqCst => Self::SeqCst,
        }
    }
}

impl From<StoreMemoryOrder> for MemoryOrder {
    #[inline(always)]
    fn from(order: StoreMemoryOrder) -> Self {
        match order {
            StoreMemoryOrder::Relaxed => Self::Relaxed,
            StoreMemoryOrder::Release => Self::Release,
            StoreMemoryOrder::SeqCst => Self::SeqCst,
        }
    }
}
