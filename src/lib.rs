//! # Bucketsum
//!
//! A **precise per-bucket integer summation engine** for search-style
//! aggregation pipelines. An upstream grouping stage (terms, histogram, date
//! interval, ...) routes documents into buckets; Bucketsum folds each
//! document's integral field values into the running sum of its bucket and
//! finalizes one exact sum per bucket.
//!
//! ## Key Features
//!
//! - **Overflow-safe folding** - intermediate arithmetic runs at arbitrary
//!   precision (`num-bigint`); only the final narrowing back to `i64` can
//!   wrap, and it wraps with defined two's-complement semantics
//! - **Growable bucket storage** - a dense, zero-initialized accumulator
//!   array with amortized doubling growth, safe for sparse ordinals
//! - **Deterministic release** - explicit `release()` plus a `Drop` backstop,
//!   so accumulator storage is reclaimed on every exit path
//! - **Narrow seams** - documents arrive through a [`ValueSource`] trait;
//!   finalized sums leave as serializable [`SumResult`] values
//!
//! ## Quick Start
//!
//! ```
//! use bucketsum::SumAggregator;
//! use bucketsum::testing::MemoryValueSource;
//!
//! # fn main() -> anyhow::Result<()> {
//! // Three documents; doc 1 has no value for the field.
//! let source = MemoryValueSource::new()
//!     .doc(0, vec![5])
//!     .doc(2, vec![10, -3]);
//!
//! let mut agg = SumAggregator::new("bytes_total", source);
//!
//! // The grouping stage drives collection: (document, bucket) pairs.
//! agg.collect(0, 0)?;
//! agg.collect(1, 0)?;
//! agg.collect(2, 0)?;
//!
//! assert_eq!(agg.build_result(0).sum, 12);
//! assert_eq!(agg.metric(1), 0.0); // never collected
//! agg.release();
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### One engine per partition
//!
//! A [`SumAggregator`] is single-threaded and serves one partition (segment)
//! of the data. Parallelism lives above the engine: run one instance per
//! partition, each with its own private [`BucketSums`], and merge the
//! finalized per-bucket values downstream. Finalized sums can be fed back
//! through the same fold, so the merge is just another collection round.
//!
//! ### Precision model
//!
//! Running sums are widened to `BigInt` before any document value is added
//! and narrowed back to the `i64` slot once, after the whole document has
//! been folded. A true total outside the `i64` range therefore wraps exactly
//! once, at the end, with the low 64 bits of the two's-complement total --
//! the same value repeated wrapping `i64` addition would produce. This is a
//! documented boundary condition of the fixed-width output, not an error.
//!
//! ### Lifecycle
//!
//! The engine is `Open` from construction until [`SumAggregator::release`],
//! after which it is `Closed`: further `collect` calls panic (a caller bug),
//! finalization reads return zeros, and release is idempotent.

pub mod aggregator;
pub mod result;
pub mod source;
pub mod store;
pub mod testing;

pub use aggregator::SumAggregator;
pub use result::SumResult;
pub use source::{DocId, ValueSource};
pub use store::BucketSums;
