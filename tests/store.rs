use bucketsum::BucketSums;

#[test]
fn starts_with_one_zeroed_slot() {
    let sums = BucketSums::new();
    assert_eq!(sums.capacity(), 1);
    assert_eq!(sums.get(0), 0);
}

#[test]
fn unrequested_ordinals_read_as_zero() {
    let sums = BucketSums::new();
    assert_eq!(sums.get(7), 0);
    assert_eq!(sums.get(1_000_000), 0);
}

#[test]
fn growth_preserves_written_slots() {
    let mut sums = BucketSums::new();
    for ord in 0..8u64 {
        sums.ensure_capacity(ord);
        sums.set(ord, (ord as i64) * 11);
    }

    // Jump far past the current capacity.
    sums.ensure_capacity(4096);
    sums.set(4096, -1);

    for ord in 0..8u64 {
        assert_eq!(sums.get(ord), (ord as i64) * 11);
    }
    assert_eq!(sums.get(4096), -1);
    // Slots created by growth are zero until written.
    assert_eq!(sums.get(100), 0);
}

#[test]
fn capacity_is_monotonic_and_ensure_is_idempotent() {
    let mut sums = BucketSums::new();
    sums.ensure_capacity(10);
    let cap = sums.capacity();
    assert!(cap >= 11);

    sums.ensure_capacity(10);
    sums.ensure_capacity(3);
    sums.ensure_capacity(0);
    assert_eq!(sums.capacity(), cap);
}

#[test]
fn growth_is_amortized_doubling() {
    let mut sums = BucketSums::new();
    let mut reallocations = 0;
    let mut cap = sums.capacity();
    for ord in 0..10_000u64 {
        sums.ensure_capacity(ord);
        if sums.capacity() != cap {
            reallocations += 1;
            cap = sums.capacity();
        }
    }
    // Doubling growth means O(log n) reallocations, not one per ordinal.
    assert!(reallocations <= 14, "{reallocations} reallocations");
}

#[test]
#[should_panic(expected = "without ensure_capacity")]
fn set_beyond_capacity_is_a_caller_bug() {
    let mut sums = BucketSums::new();
    sums.set(5, 1);
}

#[test]
fn release_is_idempotent_and_reads_zero_after() {
    let mut sums = BucketSums::new();
    sums.ensure_capacity(3);
    sums.set(3, 99);

    sums.release();
    sums.release();
    assert_eq!(sums.get(3), 0);
    assert_eq!(sums.capacity(), 0);
}
