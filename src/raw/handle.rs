//! Address representations storable in an atomic cell.
//!
//! Nullability is a property of the handle type, not a runtime check: a
//! non-null cell stores [`NonNull<T>`] and a nullable cell stores
//! `Option<NonNull<T>>`, so "null into a non-null slot" does not typecheck.

use core::ptr::NonNull;

use super::pair::DoubleWord;

/// An address-shaped value representable in exactly one machine word.
///
/// # Safety
///
/// `from_bits(into_bits(h))` must reproduce `h` exactly for every value of
/// the implementing type, and two handles are equal if and only if their bit
/// patterns are equal. The atomic cells compare and store raw bit patterns;
/// a lossy or ambiguous encoding would corrupt CAS semantics.
pub unsafe trait Handle: Copy + Eq {
    /// The word encoding of this handle.
    fn into_bits(self) -> usize;

    /// Rebuilds a handle from its word encoding.
    ///
    /// # Safety
    ///
    /// `bits` must have been produced by `into_bits` on the same type.
    unsafe fn from_bits(bits: usize) -> Self;

    /// Whether this handle is the null/empty value of its type.
    fn is_null(self) -> bool;
}

/// A value representable in exactly one double word, for cells that pack an
/// address together with auxiliary data (a tag).
///
/// # Safety
///
/// Same contract as [`Handle`], over [`DoubleWord`]: the encoding must be
/// exact and injective, since double-word CAS compares whole bit patterns.
pub unsafe trait PairHandle: Copy + Eq {
    /// The double-word encoding of this handle.
    fn into_bits(self) -> DoubleWord;

    /// Rebuilds a handle from its double-word encoding.
    ///
    /// # Safety
    ///
    /// `bits` must have been produced by `into_bits` on the same type.
    unsafe fn from_bits(bits: DoubleWord) -> Self;
}

unsafe impl<T> Handle for NonNull<T> {
    #[inline(always)]
    fn into_bits(self) -> usize {
        self.as_ptr() as usize
    }

    #[inline(always)]
    unsafe fn from_bits(bits: usize) -> Self {
        // Only ever fed bits produced by `into_bits`, which are non-zero.
        NonNull::new_unchecked(bits as *mut T)
    }

    #[inline(always)]
    fn is_null(self) -> bool {
        false
    }
}

unsafe impl<T> Handle for Option<NonNull<T>> {
    #[inline(always)]
    fn into_bits(self) -> usize {
        match self {
            Some(ptr) => ptr.as_ptr() as usize,
            None => 0,
        }
    }

    #[inline(always)]
    unsafe fn from_bits(bits: usize) -> Self {
        NonNull::new(bits as *mut T)
    }

    #[inline(always)]
    fn is_null(self) -> bool {
        self.is_none()
    }
}
