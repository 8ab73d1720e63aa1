//! Finalized per-bucket results handed off to formatting or merging layers.

use serde::{Deserialize, Serialize};

/// The finalized sum for one bucket.
///
/// Produced by the aggregator at finalization time; rendering and any
/// cross-partition merge happen downstream. Serializable because this is the
/// hand-off format at the engine boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumResult {
    /// The configured name of the aggregation that produced this result.
    pub name: String,
    /// Bucket ordinal the sum belongs to.
    pub bucket: u64,
    /// Exact stored sum (`0` for a bucket that was never collected).
    pub sum: i64,
}
