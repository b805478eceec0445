//! Sorted row sequences.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;

use tabula_core::record::{Record, RecordSource};
use tabula_core::schema::TableSchema;
use tabula_core::sort::SortSpec;
use tabula_core::types::Scalar;

/// Source positions in row order for `sort`.
///
/// An empty sort keeps source order. Otherwise rows are stably sorted by the
/// key tuple built from each sort column's accessor, so rows still tied after
/// the last key keep their source order. `sort` must already be checked
/// against `schema`.
pub(crate) fn sort_order<S>(schema: &TableSchema, source: &S, sort: &SortSpec) -> Vec<usize>
where
    S: RecordSource + ?Sized,
{
    let num_rows = source.len();
    if sort.is_empty() {
        return (0..num_rows).collect();
    }

    let keys: Vec<_> = sort
        .keys()
        .filter_map(|k| schema.column(k.column).map(|col| (col, k.is_descending())))
        .collect();

    // Build (sort_key_tuple, source_index) once per row, then sort the tuples.
    let mut keyed: Vec<(Vec<Scalar>, usize)> = (0..num_rows)
        .filter_map(|idx| {
            let record = source.record(idx)?;
            let tuple = keys.iter().map(|(col, _)| col.value(record)).collect();
            Some((tuple, idx))
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        for ((x, y), (_, descending)) in a.iter().zip(b.iter()).zip(keys.iter()) {
            let ord = x.total_cmp(y);
            let ord = if *descending { ord.reverse() } else { ord };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });

    tracing::trace!(rows = num_rows, sort = %sort, "materialized row order");
    keyed.into_iter().map(|(_, idx)| idx).collect()
}

/// One record seen through a schema.
pub struct Row<'a, R> {
    schema: &'a TableSchema,
    record: &'a R,
    position: usize,
    source_index: usize,
}

impl<'a, R: Record> Row<'a, R> {
    /// Value of column `name`, hidden columns included. `None` if the schema
    /// has no such column.
    pub fn get(&self, name: &str) -> Option<Scalar> {
        self.schema.column(name).map(|col| col.value(self.record))
    }

    /// `(name, value)` for every visible column, in schema order.
    pub fn values(&self) -> Vec<(&'a str, Scalar)> {
        self.schema
            .visible_columns()
            .iter()
            .map(|col| (col.name(), col.value(self.record)))
            .collect()
    }

    /// Position in the sequence this row was read from.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn source_index(&self) -> usize {
        self.source_index
    }
}

impl<R: Record> fmt::Debug for Row<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("position", &self.position)
            .field("source_index", &self.source_index)
            .field("values", &self.values())
            .finish()
    }
}

/// Indexable view of rows in sorted order.
///
/// Borrowing the order out of the owning table means indexing, slicing, and
/// iterating never sort again.
pub struct RowSequence<'a, S: RecordSource + ?Sized> {
    schema: &'a TableSchema,
    source: &'a S,
    order: &'a [usize],
    offset: usize,
}

impl<'a, S: RecordSource + ?Sized> Clone for RowSequence<'a, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S: RecordSource + ?Sized> Copy for RowSequence<'a, S> {}

impl<'a, S: RecordSource + ?Sized> RowSequence<'a, S> {
    pub(crate) fn new(schema: &'a TableSchema, source: &'a S, order: &'a [usize]) -> Self {
        Self {
            schema,
            source,
            order,
            offset: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Row<'a, S::Record>> {
        let source_index = *self.order.get(index)?;
        let record = self.source.record(source_index)?;
        Some(Row {
            schema: self.schema,
            record,
            position: self.offset + index,
            source_index,
        })
    }

    pub fn first(&self) -> Option<Row<'a, S::Record>> {
        self.get(0)
    }

    /// Sub-range of this sequence. Out-of-range bounds are clamped.
    pub fn slice(&self, range: Range<usize>) -> RowSequence<'a, S> {
        let end = range.end.min(self.order.len());
        let start = range.start.min(end);
        RowSequence {
            schema: self.schema,
            source: self.source,
            order: &self.order[start..end],
            offset: self.offset + start,
        }
    }

    pub fn iter(&self) -> Rows<'a, S> {
        Rows {
            seq: *self,
            next: 0,
        }
    }
}

impl<'a, S: RecordSource + ?Sized> IntoIterator for RowSequence<'a, S> {
    type Item = Row<'a, S::Record>;
    type IntoIter = Rows<'a, S>;

    fn into_iter(self) -> Rows<'a, S> {
        self.iter()
    }
}

pub struct Rows<'a, S: RecordSource + ?Sized> {
    seq: RowSequence<'a, S>,
    next: usize,
}

impl<'a, S: RecordSource + ?Sized> Iterator for Rows<'a, S> {
    type Item = Row<'a, S::Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.seq.get(self.next)?;
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.seq.len().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl<S: RecordSource + ?Sized> ExactSizeIterator for Rows<'_, S> {}
