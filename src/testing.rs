//! Testing utilities for aggregation passes.
//!
//! Real value sources sit on top of columnar index readers; the types here
//! stand in for them so engine behavior can be tested in memory:
//!
//! - [`MemoryValueSource`]: per-document value lists built fluently.
//! - [`FailingValueSource`]: errors on read, for propagation tests.
//! - [`RecordingValueSource`]: wraps another source and records every call,
//!   for verifying the read protocol (each document's values pulled exactly
//!   once, completely, per collection event).
//!
//! # Example
//!
//! ```
//! use bucketsum::SumAggregator;
//! use bucketsum::testing::MemoryValueSource;
//!
//! # fn main() -> anyhow::Result<()> {
//! let source = MemoryValueSource::new().doc(0, vec![5]).doc(2, vec![10, -3]);
//! let mut agg = SumAggregator::new("total", source);
//! agg.collect(0, 0)?;
//! agg.collect(1, 0)?; // no values: no-op
//! agg.collect(2, 0)?;
//! assert_eq!(agg.build_result(0).sum, 12);
//! agg.release();
//! # Ok(())
//! # }
//! ```

use crate::source::{DocId, ValueSource};
use anyhow::{Result, bail};
use std::collections::HashMap;

/// In-memory [`ValueSource`] over fixed per-document value lists.
///
/// Documents not added (or added with an empty list) have no value for the
/// field.
#[derive(Clone, Debug, Default)]
pub struct MemoryValueSource {
    docs: HashMap<DocId, Vec<i64>>,
}

impl MemoryValueSource {
    /// Create an empty source (every document has no value).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the value list for one document (builder style).
    #[must_use]
    pub fn doc(mut self, id: DocId, values: Vec<i64>) -> Self {
        self.docs.insert(id, values);
        self
    }
}

impl ValueSource for MemoryValueSource {
    fn has_value(&mut self, doc: DocId) -> Result<bool> {
        Ok(self.docs.get(&doc).is_some_and(|v| !v.is_empty()))
    }

    fn values(&mut self, doc: DocId) -> Result<Vec<i64>> {
        Ok(self.docs.get(&doc).cloned().unwrap_or_default())
    }
}

/// A source whose reads always fail, simulating an I/O error from the
/// underlying doc-value reader.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingValueSource;

impl ValueSource for FailingValueSource {
    fn has_value(&mut self, _doc: DocId) -> Result<bool> {
        Ok(true)
    }

    fn values(&mut self, doc: DocId) -> Result<Vec<i64>> {
        bail!("doc-value read failed for document {doc}")
    }
}

/// Wraps a [`ValueSource`] and records which documents each method was called
/// for, in order.
#[derive(Debug, Default)]
pub struct RecordingValueSource<S> {
    inner: S,
    /// Documents passed to `has_value`, in call order.
    pub has_value_calls: Vec<DocId>,
    /// Documents passed to `values`, in call order.
    pub values_calls: Vec<DocId>,
}

impl<S> RecordingValueSource<S> {
    /// Wrap `inner`, starting with empty call logs.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            has_value_calls: Vec::new(),
            values_calls: Vec::new(),
        }
    }
}

impl<S: ValueSource> ValueSource for RecordingValueSource<S> {
    fn has_value(&mut self, doc: DocId) -> Result<bool> {
        self.has_value_calls.push(doc);
        self.inner.has_value(doc)
    }

    fn values(&mut self, doc: DocId) -> Result<Vec<i64>> {
        self.values_calls.push(doc);
        self.inner.values(doc)
    }
}
