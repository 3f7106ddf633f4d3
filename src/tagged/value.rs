//! Tagged pointer value types and their double-word packing.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ptr::NonNull;

use crate::raw::{DoubleWord, PairHandle};

/// A non-null address paired with a generation tag.
///
/// The tag is a full machine word: wide enough to count into the billions
/// without wraparound, and never truncated by packing. Equality covers both
/// fields, so a CAS expecting `(addr, 0)` fails against `(addr, 1)` — the
/// property that defeats ABA reuse of a recycled address.
pub struct TaggedPtr<T> {
    ptr: NonNull<T>,
    tag: usize,
}

/// A possibly-null address paired with a generation tag.
///
/// The null address participates like any other: `(null, 3)` and
/// `(null, 4)` are distinct CAS keys.
pub struct TaggedOptionPtr<T> {
    ptr: Option<NonNull<T>>,
    tag: usize,
}

impl<T> TaggedPtr<T> {
    /// Pairs `ptr` with `tag`.
    #[inline(always)]
    pub const fn new(ptr: NonNull<T>, tag: usize) -> Self {
        Self { ptr, tag }
    }

    /// The address component.
    #[inline(always)]
    pub const fn ptr(self) -> NonNull<T> {
        self.ptr
    }

    /// The tag component.
    #[inline(always)]
    pub const fn tag(self) -> usize {
        self.tag
    }

    /// The address component as a raw pointer.
    #[inline(always)]
    pub const fn as_ptr(self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// The same tag over a different address.
    #[inline(always)]
    pub const fn with_ptr(self, ptr: NonNull<T>) -> Self {
        Self { ptr, tag: self.tag }
    }

    /// The same address under a different tag.
    #[inline(always)]
    pub const fn with_tag(self, tag: usize) -> Self {
        Self { ptr: self.ptr, tag }
    }

    /// The next generation of this value: same address, tag incremented
    /// with wraparound at the word boundary.
    #[inline(always)]
    pub const fn bump(self) -> Self {
        Self {
            ptr: self.ptr,
            tag: self.tag.wrapping_add(1),
        }
    }
}

impl<T> TaggedOptionPtr<T> {
    /// Pairs `ptr` with `tag`.
    #[inline(always)]
    pub const fn new(ptr: Option<NonNull<T>>, tag: usize) -> Self {
        Self { ptr, tag }
    }

    /// The null address under `tag`.
    #[inline(always)]
    pub const fn null(tag: usize) -> Self {
        Self { ptr: None, tag }
    }

    /// The address component.
    #[inline(always)]
    pub const fn ptr(self) -> Option<NonNull<T>> {
        self.ptr
    }

    /// The tag component.
    #[inline(always)]
    pub const fn tag(self) -> usize {
        self.tag
    }

    /// Whether the address component is null.
    #[inline(always)]
    pub const fn is_null(self) -> bool {
        self.ptr.is_none()
    }

    /// The same tag over a different address.
    #[inline(always)]
    pub const fn with_ptr(self, ptr: Option<NonNull<T>>) -> Self {
        Self { ptr, tag: self.tag }
    }

    /// The same address under a different tag.
    #[inline(always)]
    pub const fn with_tag(self, tag: usize) -> Self {
        Self { ptr: self.ptr, tag }
    }

    /// The next generation of this value: same address, tag incremented
    /// with wraparound at the word boundary.
    #[inline(always)]
    pub const fn bump(self) -> Self {
        Self {
            ptr: self.ptr,
            tag: self.tag.wrapping_add(1),
        }
    }
}

// Address in the low word, tag in the high word. Lossless for every
// representable (address, tag) pair on both 32- and 64-bit targets.
#[inline(always)]
fn pack(addr: usize, tag: usize) -> DoubleWord {
    (addr as DoubleWord) | ((tag as DoubleWord) << usize::BITS)
}

#[inline(always)]
#[allow(clippy::cast_possible_truncation)] // each half is extracted whole
fn unpack(bits: DoubleWord) -> (usize, usize) {
    (bits as usize, (bits >> usize::BITS) as usize)
}

unsafe impl<T> PairHandle for TaggedPtr<T> {
    #[inline(always)]
    fn into_bits(self) -> DoubleWord {
        pack(self.ptr.as_ptr() as usize, self.tag)
    }

    #[inline(always)]
    unsafe fn from_bits(bits: DoubleWord) -> Self {
        let (addr, tag) = unpack(bits);
        Self {
            ptr: NonNull::new_unchecked(addr as *mut T),
            tag,
        }
    }
}

unsafe impl<T> PairHandle for TaggedOptionPtr<T> {
    #[inline(always)]
    fn into_bits(self) -> DoubleWord {
        let addr = self.ptr.map_or(0, |p| p.as_ptr() as usize);
        pack(addr, self.tag)
    }

    #[inline(always)]
    unsafe fn from_bits(bits: DoubleWord) -> Self {
        let (addr, tag) = unpack(bits);
        Self {
            ptr: NonNull::new(addr as *mut T),
            tag,
        }
    }
}

// Manual impls: the derives would demand bounds on `T`, and these values
// are address-plus-tag regardless of the pointee.

impl<T> Clone for TaggedPtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for TaggedPtr<T> {}

impl<T> PartialEq for TaggedPtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr && self.tag == other.tag
    }
}
impl<T> Eq for TaggedPtr<T> {}

impl<T> Hash for TaggedPtr<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ptr.hash(state);
        self.tag.hash(state);
    }
}

impl<T> fmt::Debug for TaggedPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedPtr")
            .field("ptr", &self.ptr)
            .field("tag", &self.tag)
            .finish()
    }
}

impl<T> Clone for TaggedOptionPtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for TaggedOptionPtr<T> {}

impl<T> PartialEq for TaggedOptionPtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr && self.tag == other.tag
    }
}
impl<T> Eq for TaggedOptionPtr<T> {}

impl<T> Hash for TaggedOptionPtr<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ptr.hash(state);
        self.tag.hash(state);
    }
}

impl<T> fmt::Debug for TaggedOptionPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedOptionPtr")
            .field("ptr", &self.ptr)
            .field("tag", &self.tag)
            .finish()
    }
}
