use core::ptr::NonNull;

use keel::{
    AtomicMutPtr, AtomicOpaquePtr, AtomicOptionMutPtr, AtomicOptionOpaquePtr, AtomicOptionPtr,
    AtomicPtr, CasKind, LoadMemoryOrder, MemoryOrder, StoreMemoryOrder,
};

fn assert_send_sync<T: Send + Sync>() {}

fn leak<T>(value: T) -> NonNull<T> {
    NonNull::from(Box::leak(Box::new(value)))
}

#[test]
fn pointer_cells_are_send_sync() {
    assert_send_sync::<AtomicPtr<u64>>();
    assert_send_sync::<AtomicMutPtr<u64>>();
    assert_send_sync::<AtomicOptionPtr<u64>>();
    assert_send_sync::<AtomicOptionMutPtr<u64>>();
    assert_send_sync::<AtomicOpaquePtr>();
    assert_send_sync::<AtomicOptionOpaquePtr>();
}

#[test]
fn new_then_load_returns_initial_value() {
    let a = leak(1_u64);
    let cell = AtomicPtr::new(a);
    assert_eq!(cell.load(LoadMemoryOrder::Relaxed), a);
    assert_eq!(cell.load(LoadMemoryOrder::Acquire), a);
    assert_eq!(cell.load(LoadMemoryOrder::SeqCst), a);
    assert_eq!(cell.load_raw(LoadMemoryOrder::SeqCst), a.as_ptr() as *const u64);
}

#[test]
fn init_resets_under_exclusive_borrow() {
    let (a, b) = (leak(1_u64), leak(2_u64));
    let mut cell = AtomicMutPtr::new(a);
    cell.init(b);
    assert_eq!(cell.load(LoadMemoryOrder::SeqCst), b);
    assert_eq!(cell.into_inner(), b);
}

#[test]
fn store_is_observed_by_every_following_load() {
    let (a, b) = (leak(1_u64), leak(2_u64));
    let cell = AtomicPtr::new(a);
    for order in [
        StoreMemoryOrder::Relaxed,
        StoreMemoryOrder::Release,
        StoreMemoryOrder::SeqCst,
    ] {
        cell.store(b, order);
        assert_eq!(cell.load(LoadMemoryOrder::SeqCst), b);
        cell.store(a, order);
        assert_eq!(cell.load(LoadMemoryOrder::SeqCst), a);
    }
}

#[test]
fn swap_returns_the_previous_value() {
    let (a, b) = (leak(1_u64), leak(2_u64));
    let cell = AtomicMutPtr::new(a);
    assert_eq!(cell.swap(b, MemoryOrder::AcqRel), a);
    assert_eq!(cell.swap(a, MemoryOrder::SeqCst), b);
    assert_eq!(cell.load(LoadMemoryOrder::SeqCst), a);
}

#[test]
fn strong_cas_succeeds_exactly_on_match() {
    let (a, b, c) = (leak(1_u64), leak(2_u64), leak(3_u64));
    let cell = AtomicPtr::new(a);

    // Matching expectation: must succeed, never spuriously fail.
    assert!(cell.compare_and_swap(a, b, CasKind::Strong, MemoryOrder::SeqCst));
    assert_eq!(cell.load(LoadMemoryOrder::SeqCst), b);

    // Stale expectation: must fail and leave the cell unchanged.
    assert!(!cell.compare_and_swap(a, c, CasKind::Strong, MemoryOrder::SeqCst));
    assert_eq!(cell.load(LoadMemoryOrder::SeqCst), b);
}

#[test]
fn weak_cas_retry_loop_terminates_uncontended() {
    let (a, b) = (leak(1_u64), leak(2_u64));
    let cell = AtomicPtr::new(a);
    let mut current = cell.load(LoadMemoryOrder::Relaxed);
    while !cell.load_cas(
        &mut current,
        b,
        CasKind::Weak,
        MemoryOrder::AcqRel,
        LoadMemoryOrder::Acquire,
    ) {}
    assert_eq!(cell.load(LoadMemoryOrder::SeqCst), b);
}

#[test]
fn load_cas_writes_back_the_observed_value_on_failure() {
    let (a, b, c) = (leak(1_u64), leak(2_u64), leak(3_u64));
    let cell = AtomicMutPtr::new(a);

    let mut current = b;
    assert!(!cell.load_cas(
        &mut current,
        c,
        CasKind::Strong,
        MemoryOrder::SeqCst,
        LoadMemoryOrder::SeqCst,
    ));
    assert_eq!(current, a);

    // Armed with the observed value, the retry succeeds.
    assert!(cell.load_cas(
        &mut current,
        c,
        CasKind::Strong,
        MemoryOrder::SeqCst,
        LoadMemoryOrder::SeqCst,
    ));
    assert_eq!(current, a);
    assert_eq!(cell.load(LoadMemoryOrder::SeqCst), c);
}

#[test]
fn optional_cells_treat_null_as_a_first_class_value() {
    let a = leak(1_u64);
    let cell = AtomicOptionPtr::<u64>::new_null();
    assert_eq!(cell.load(LoadMemoryOrder::SeqCst), None);
    assert!(cell.load_raw(LoadMemoryOrder::SeqCst).is_null());

    // null -> a via CAS keyed on None.
    assert!(cell.compare_and_swap(None, Some(a), CasKind::Strong, MemoryOrder::SeqCst));
    assert_eq!(cell.load(LoadMemoryOrder::SeqCst), Some(a));

    // A stale None expectation now fails.
    assert!(!cell.compare_and_swap(None, None, CasKind::Strong, MemoryOrder::SeqCst));

    assert_eq!(cell.swap(None, MemoryOrder::SeqCst), Some(a));
    assert_eq!(cell.load(LoadMemoryOrder::SeqCst), None);
}

#[test]
fn optional_mut_default_is_null() {
    let cell = AtomicOptionMutPtr::<u64>::default();
    assert!(cell.load_raw(LoadMemoryOrder::SeqCst).is_null());
    assert_eq!(cell.into_inner(), None);
}

#[test]
fn opaque_cells_erase_the_pointee_type() {
    let a = leak(1_u64);
    let erased = a.cast::<core::ffi::c_void>();
    let cell = AtomicOpaquePtr::new(erased);
    assert_eq!(cell.load(LoadMemoryOrder::SeqCst), erased);
    assert_eq!(cell.load(LoadMemoryOrder::SeqCst).cast::<u64>(), a);

    let opt = AtomicOptionOpaquePtr::new_null();
    assert!(opt.compare_and_swap(None, Some(erased), CasKind::Strong, MemoryOrder::SeqCst));
    assert_eq!(opt.load(LoadMemoryOrder::SeqCst), Some(erased));
}
