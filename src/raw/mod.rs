//! Generic atomic cores.
//!
//! The ordering and CAS logic of this crate lives in exactly two places:
//! [`AtomicWord`] (one machine word) and [`AtomicPair`] (two machine
//! words). Every typed pointer flavor in [`crate::ptr`] and
//! [`crate::tagged`] is a zero-cost facade over one of these, with the
//! stored representation described by a [`Handle`] or [`PairHandle`].

/// Representation traits for storable address values.
pub mod handle;
/// Double-word atomic cell.
pub mod pair;
/// Single-word atomic cell.
pub mod word;

pub use handle::{Handle, PairHandle};
pub use pair::{AtomicPair, DoubleWord};
pub use word::AtomicWord;
