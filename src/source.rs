//! The per-document value source contract.

use anyhow::Result;

/// Identifier of a document within one partition (segment). Opaque to the
/// engine; it is only forwarded to the [`ValueSource`].
pub type DocId = u32;

/// Supplies the integral values of the aggregated field, per document.
///
/// Implementations typically sit on top of columnar doc-value readers, so
/// both methods are fallible. Within a single collection pass the source must
/// be consistent: asking about the same document twice yields the same
/// answer, and [`ValueSource::values`] always returns the complete, ordered
/// value list for that document (a partial or stale read corrupts the sum).
pub trait ValueSource {
    /// Whether `doc` has at least one value for the aggregated field.
    fn has_value(&mut self, doc: DocId) -> Result<bool>;

    /// All values of the aggregated field for `doc`, in source order.
    /// Empty when the document has no value.
    fn values(&mut self, doc: DocId) -> Result<Vec<i64>>;
}

impl<S: ValueSource + ?Sized> ValueSource for &mut S {
    fn has_value(&mut self, doc: DocId) -> Result<bool> {
        (**self).has_value(doc)
    }

    fn values(&mut self, doc: DocId) -> Result<Vec<i64>> {
        (**self).values(doc)
    }
}
