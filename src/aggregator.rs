//! The precise reduction engine: per-bucket integer sums that never lose
//! precision in intermediate arithmetic.
//!
//! [`SumAggregator`] folds every value of every collected document into the
//! running sum of the document's bucket. The fold widens the running sum and
//! each document value into a [`BigInt`], adds at full precision, and narrows
//! back to the `i64` slot only once per collection event. The only lossy step
//! is that final narrowing: when the true total exceeds the `i64` range the
//! slot holds the low 64 bits of the two's-complement total, exactly as
//! fixed-width `i64` overflow would. Intermediate additions never wrap.
//!
//! One engine instance serves one partition (segment) of the data,
//! single-threaded. Run one instance per partition for parallelism and merge
//! the finalized values downstream; a finalized sum can be fed back through
//! the same fold, so the merge is just another round of collection.

use crate::result::SumResult;
use crate::source::{DocId, ValueSource};
use crate::store::BucketSums;
use anyhow::Result;
use num_bigint::{BigInt, Sign};

/// Sums the integral values of one field into per-bucket totals.
///
/// Driven by the upstream grouping stage, which calls
/// [`collect`](SumAggregator::collect) once per `(document, bucket)` pair.
/// The engine owns its [`BucketSums`] exclusively; call
/// [`release`](SumAggregator::release) when the pass ends (early termination
/// included). `Drop` releases as a backstop, so storage cannot leak on any
/// exit path.
pub struct SumAggregator<S> {
    name: String,
    source: S,
    sums: BucketSums,
    released: bool,
}

impl<S> SumAggregator<S> {
    /// Create an open engine named `name`, reading document values from
    /// `source`. Starts with capacity for bucket 0.
    pub fn new(name: impl Into<String>, source: S) -> Self {
        Self {
            name: name.into(),
            source,
            sums: BucketSums::new(),
            released: false,
        }
    }

    /// The configured aggregation name, stamped into every result.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stored sum for `bucket` as a number, for ranking and sorting of
    /// buckets. `0.0` for an ordinal never collected.
    #[must_use]
    pub fn metric(&self, bucket: u64) -> f64 {
        if bucket >= self.sums.capacity() {
            return 0.0;
        }
        self.sums.get(bucket) as f64
    }

    /// Finalize `bucket` into a [`SumResult`] carrying the exact stored sum,
    /// or the zero sentinel if the bucket was never collected.
    #[must_use]
    pub fn build_result(&self, bucket: u64) -> SumResult {
        SumResult {
            name: self.name.clone(),
            bucket,
            sum: self.sums.get(bucket),
        }
    }

    /// The canonical zero-valued result, for callers that need a result when
    /// no documents matched anywhere.
    #[must_use]
    pub fn build_empty_result(&self) -> SumResult {
        SumResult {
            name: self.name.clone(),
            bucket: 0,
            sum: 0,
        }
    }

    /// Close the engine and drop the accumulator storage. Idempotent; also
    /// invoked by `Drop`. Further `collect` calls are a programming error.
    pub fn release(&mut self) {
        if !self.released {
            self.sums.release();
            self.released = true;
        }
    }
}

impl<S: ValueSource> SumAggregator<S> {
    /// Fold all values of `doc` into the running sum of `bucket`.
    ///
    /// A document with no value for the field leaves the slot untouched. A
    /// source error propagates and also leaves the slot untouched, because
    /// the slot is only written after every value has been added.
    ///
    /// # Panics
    ///
    /// Panics if called after [`release`](SumAggregator::release).
    pub fn collect(&mut self, doc: DocId, bucket: u64) -> Result<()> {
        assert!(!self.released, "collect on a released SumAggregator");
        self.sums.ensure_capacity(bucket);

        if !self.source.has_value(doc)? {
            return Ok(());
        }

        // Pull the document's values once, completely, before touching the
        // slot: the slot must never observe a partial fold.
        let values = self.source.values(doc)?;
        let mut total = BigInt::from(self.sums.get(bucket));
        for v in values {
            total += BigInt::from(v);
        }
        self.sums.set(bucket, narrow_to_i64(&total));
        Ok(())
    }
}

impl<S> Drop for SumAggregator<S> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Low 64 bits of the two's-complement representation of `v`.
///
/// This is the defined wraparound rule for totals outside the `i64` range; it
/// matches what repeated wrapping `i64` addition would have produced.
fn narrow_to_i64(v: &BigInt) -> i64 {
    let low = v.iter_u64_digits().next().unwrap_or(0) as i64;
    if v.sign() == Sign::Minus {
        low.wrapping_neg()
    } else {
        low
    }
}
