//! Growable, zero-initialized per-bucket accumulator storage.
//!
//! [`BucketSums`] is a dense array mapping a non-negative bucket ordinal to a
//! running `i64` sum. It grows on demand as new (possibly sparse) bucket
//! ordinals appear during a collection pass and never shrinks until released.
//!
//! Growth is amortized: [`BucketSums::ensure_capacity`] is cheap to call on
//! every collection event because reallocation doubles the slot count rather
//! than resizing to the exact ordinal each time.

/// Dense array of running sums, one `i64` slot per bucket ordinal.
///
/// - Slot `i` holds the exact running sum collected so far for bucket `i`.
/// - Ordinals beyond the current capacity read as `0` ("never collected").
/// - Capacity only grows; growth preserves every previously written slot and
///   zero-fills the new ones.
///
/// The store is exclusively owned by one aggregator instance. Storage is
/// reclaimed by [`BucketSums::release`] (idempotent) or, failing that, by
/// `Drop`.
#[derive(Debug)]
pub struct BucketSums {
    slots: Vec<i64>,
    released: bool,
}

impl BucketSums {
    /// Create a store with a single zeroed slot for bucket 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![0],
            released: false,
        }
    }

    fn idx(ord: u64) -> usize {
        usize::try_from(ord).expect("bucket ordinal exceeds address space")
    }

    /// Guarantee a writable slot at `ord`, doubling the backing storage as
    /// needed. Idempotent; a no-op when the slot already exists.
    pub fn ensure_capacity(&mut self, ord: u64) {
        assert!(!self.released, "BucketSums used after release");
        let needed = Self::idx(ord)
            .checked_add(1)
            .expect("bucket ordinal exceeds address space");
        if needed > self.slots.len() {
            let grown = needed.max(self.slots.len().saturating_mul(2));
            self.slots.resize(grown, 0);
        }
    }

    /// Read the slot at `ord`, or `0` if the ordinal is beyond the current
    /// capacity (a valid state meaning the bucket was never collected).
    #[must_use]
    pub fn get(&self, ord: u64) -> i64 {
        self.slots.get(Self::idx(ord)).copied().unwrap_or(0)
    }

    /// Write the slot at `ord`.
    ///
    /// # Panics
    ///
    /// Panics if `ord` was never prepared with [`BucketSums::ensure_capacity`].
    /// That is a caller bug, not a recoverable runtime condition.
    pub fn set(&mut self, ord: u64, value: i64) {
        let i = Self::idx(ord);
        assert!(
            i < self.slots.len(),
            "bucket {ord} written without ensure_capacity"
        );
        self.slots[i] = value;
    }

    /// Current slot count. Monotonically non-decreasing until release.
    #[must_use]
    pub fn capacity(&self) -> u64 {
        self.slots.len() as u64
    }

    /// Drop the backing storage. Safe to call more than once; reads after
    /// release return `0`, writes panic.
    pub fn release(&mut self) {
        self.slots = Vec::new();
        self.released = true;
    }
}

impl Default for BucketSums {
    fn default() -> Self {
        Self::new()
    }
}
