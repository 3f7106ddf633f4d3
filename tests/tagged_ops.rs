use core::ptr::NonNull;

use keel::{
    AtomicTaggedMutPtr, AtomicTaggedOptionMutPtr, AtomicTaggedOptionPtr, AtomicTaggedPtr, CasKind,
    LoadMemoryOrder, MemoryOrder, StoreMemoryOrder, TaggedOptionPtr, TaggedPtr,
};

fn assert_send_sync<T: Send + Sync>() {}

fn leak<T>(value: T) -> NonNull<T> {
    NonNull::from(Box::leak(Box::new(value)))
}

#[test]
fn tagged_cells_are_send_sync() {
    assert_send_sync::<AtomicTaggedPtr<u64>>();
    assert_send_sync::<AtomicTaggedMutPtr<u64>>();
    assert_send_sync::<AtomicTaggedOptionPtr<u64>>();
    assert_send_sync::<AtomicTaggedOptionMutPtr<u64>>();
}

#[test]
fn new_then_load_returns_the_pair() {
    let x = leak(1_u64);
    let cell = AtomicTaggedPtr::new(TaggedPtr::new(x, 42));
    let seen = cell.load(LoadMemoryOrder::SeqCst);
    assert_eq!(seen.ptr(), x);
    assert_eq!(seen.tag(), 42);
}

#[test]
fn store_and_swap_move_whole_pairs() {
    let (x, y) = (leak(1_u64), leak(2_u64));
    let cell = AtomicTaggedMutPtr::new(TaggedPtr::new(x, 0));

    cell.store(TaggedPtr::new(y, 7), StoreMemoryOrder::Release);
    assert_eq!(cell.load(LoadMemoryOrder::Acquire), TaggedPtr::new(y, 7));

    let prev = cell.swap(TaggedPtr::new(x, 8), MemoryOrder::AcqRel);
    assert_eq!(prev, TaggedPtr::new(y, 7));
    assert_eq!(cell.load(LoadMemoryOrder::SeqCst), TaggedPtr::new(x, 8));
}

// The scenario from the ABA playbook: A claims (X,0) -> (X,1); B's attempt
// with the stale tag must fail even though the address still matches.
#[test]
fn stale_tag_fails_cas_despite_matching_address() {
    let x = leak(1_u64);
    let cell = AtomicTaggedPtr::new(TaggedPtr::new(x, 0));

    let initial = cell.load(LoadMemoryOrder::SeqCst);
    assert!(cell.compare_and_swap(
        initial,
        initial.bump(),
        CasKind::Strong,
        MemoryOrder::SeqCst,
    ));
    assert_eq!(cell.load(LoadMemoryOrder::SeqCst), TaggedPtr::new(x, 1));

    // Thread B's view is stale: same address, tag 0.
    assert!(!cell.compare_and_swap(
        TaggedPtr::new(x, 0),
        TaggedPtr::new(x, 2),
        CasKind::Strong,
        MemoryOrder::SeqCst,
    ));
    assert_eq!(cell.load(LoadMemoryOrder::SeqCst), TaggedPtr::new(x, 1));
}

#[test]
fn load_cas_returns_the_observed_pair_on_failure() {
    let (x, y) = (leak(1_u64), leak(2_u64));
    let cell = AtomicTaggedMutPtr::new(TaggedPtr::new(x, 5));

    let mut current = TaggedPtr::new(x, 0);
    assert!(!cell.load_cas(
        &mut current,
        TaggedPtr::new(y, 6),
        CasKind::Strong,
        MemoryOrder::AcqRel,
        LoadMemoryOrder::Acquire,
    ));
    // One indivisible read: both fields come from the same update.
    assert_eq!(current, TaggedPtr::new(x, 5));

    assert!(cell.load_cas(
        &mut current,
        TaggedPtr::new(y, 6),
        CasKind::Strong,
        MemoryOrder::AcqRel,
        LoadMemoryOrder::Acquire,
    ));
    assert_eq!(cell.load(LoadMemoryOrder::SeqCst), TaggedPtr::new(y, 6));
}

// Documented boundary policy: the tag is a full machine word, nothing is
// truncated or rejected, and wraparound happens only through the caller's
// own wrapping arithmetic.
#[test]
fn max_tag_round_trips_and_bump_wraps() {
    let x = leak(1_u64);
    let cell = AtomicTaggedPtr::new(TaggedPtr::new(x, usize::MAX));
    let seen = cell.load(LoadMemoryOrder::SeqCst);
    assert_eq!(seen.tag(), usize::MAX);
    assert_eq!(seen.ptr(), x);

    assert!(cell.compare_and_swap(seen, seen.bump(), CasKind::Strong, MemoryOrder::SeqCst));
    let wrapped = cell.load(LoadMemoryOrder::SeqCst);
    assert_eq!(wrapped.tag(), 0);
    assert_eq!(wrapped.ptr(), x);
}

#[test]
fn optional_tagged_null_generations_are_distinct() {
    let x = leak(1_u64);
    let cell = AtomicTaggedOptionPtr::<u64>::new_null();
    assert!(cell.load(LoadMemoryOrder::SeqCst).is_null());
    assert_eq!(cell.load(LoadMemoryOrder::SeqCst).tag(), 0);

    // (null, 0) -> (x, 1): emptying and filling are tagged transitions.
    assert!(cell.compare_and_swap(
        TaggedOptionPtr::null(0),
        TaggedOptionPtr::new(Some(x), 1),
        CasKind::Strong,
        MemoryOrder::SeqCst,
    ));

    // (null, 0) is stale now; so is (x, 0).
    assert!(!cell.compare_and_swap(
        TaggedOptionPtr::null(0),
        TaggedOptionPtr::null(9),
        CasKind::Strong,
        MemoryOrder::SeqCst,
    ));
    assert!(!cell.compare_and_swap(
        TaggedOptionPtr::new(Some(x), 0),
        TaggedOptionPtr::null(9),
        CasKind::Strong,
        MemoryOrder::SeqCst,
    ));

    let prev = cell.swap(TaggedOptionPtr::null(2), MemoryOrder::SeqCst);
    assert_eq!(prev, TaggedOptionPtr::new(Some(x), 1));
    assert!(cell.load(LoadMemoryOrder::SeqCst).is_null());
    assert_eq!(cell.load(LoadMemoryOrder::SeqCst).tag(), 2);
}

#[test]
fn into_inner_and_init_round_trip() {
    let (x, y) = (leak(1_u64), leak(2_u64));
    let mut cell = AtomicTaggedOptionMutPtr::new(TaggedOptionPtr::new(Some(x), 1));
    cell.init(TaggedOptionPtr::new(Some(y), 2));
    assert_eq!(cell.into_inner(), TaggedOptionPtr::new(Some(y), 2));
}

#[test]
fn lock_free_introspection_is_consistent() {
    // Whatever the answer on this target, asking twice agrees; with the
    // default build (no `fallback` feature) the compile itself guarantees
    // a native double-word CAS exists.
    assert_eq!(
        AtomicTaggedPtr::<u64>::is_lock_free(),
        AtomicTaggedOptionPtr::<u64>::is_lock_free()
    );
}
