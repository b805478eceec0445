//! Table instances.

use std::sync::Arc;

use once_cell::unsync::OnceCell;

use tabula_core::record::RecordSource;
use tabula_core::registry::TableType;
use tabula_core::schema::{TableSchema, VisibleColumns};
use tabula_core::sort::SortSpec;

use crate::error::TableError;
use crate::paging::Pagination;
use crate::rows::{sort_order, RowSequence};

/// One schema bound to one record source and one sort spec.
///
/// Until a sort is set explicitly, the schema's default sort applies. Any
/// explicit value, the empty spec included, replaces the default for good.
pub struct TableInstance<S: RecordSource + ?Sized> {
    schema: Arc<TableSchema>,
    source: Arc<S>,
    sort: Option<SortSpec>,
    order: OnceCell<Vec<usize>>,
    pub(crate) pagination: Option<Pagination>,
}

impl<S: RecordSource + ?Sized> TableInstance<S> {
    /// Instance that follows the schema's default sort.
    pub fn new(schema: Arc<TableSchema>, source: Arc<S>) -> Self {
        Self {
            schema,
            source,
            sort: None,
            order: OnceCell::new(),
            pagination: None,
        }
    }

    /// Instance with an explicit sort. An empty spec means unsorted.
    pub fn with_sort(
        schema: Arc<TableSchema>,
        source: Arc<S>,
        sort: impl Into<SortSpec>,
    ) -> Result<Self, TableError> {
        let mut table = Self::new(schema, source);
        table.set_sort(sort)?;
        Ok(table)
    }

    /// Instance of a registered table type.
    pub fn for_type<T: TableType>(source: Arc<S>) -> Result<Self, TableError> {
        Ok(Self::new(T::schema()?, source))
    }

    pub fn schema(&self) -> &Arc<TableSchema> {
        &self.schema
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// Visible columns, in schema order.
    pub fn columns(&self) -> VisibleColumns<'_> {
        self.schema.visible_columns()
    }

    /// The sort in effect.
    pub fn sort(&self) -> &SortSpec {
        self.sort
            .as_ref()
            .unwrap_or_else(|| self.schema.default_sort())
    }

    /// Whether a sort was ever set on this instance.
    pub fn has_explicit_sort(&self) -> bool {
        self.sort.is_some()
    }

    /// Normalize, check, and assign a sort spec.
    ///
    /// An invalid spec is rejected here and leaves the instance unchanged.
    /// Cached rows and any recorded page are dropped when the effective sort
    /// changes.
    pub fn set_sort(&mut self, sort: impl Into<SortSpec>) -> Result<(), TableError> {
        let sort = SortSpec::normalize(sort);
        self.schema.check_sort(&sort)?;
        self.assign_sort(sort);
        Ok(())
    }

    /// Explicitly unsorted: source order, schema default ignored.
    pub fn clear_sort(&mut self) {
        self.assign_sort(SortSpec::empty());
    }

    /// Store an already checked sort, dropping derived state if it changed.
    fn assign_sort(&mut self, sort: SortSpec) {
        let changed = *self.sort() != sort;
        self.sort = Some(sort);
        if changed {
            self.order = OnceCell::new();
            self.pagination = None;
            tracing::trace!(table = self.schema.name(), sort = %self.sort(), "sort changed");
        }
    }

    /// Rows in the current sort order, sorted on first access.
    pub fn rows(&self) -> RowSequence<'_, S> {
        let order = self
            .order
            .get_or_init(|| sort_order(&self.schema, &*self.source, self.sort()));
        RowSequence::new(&self.schema, &*self.source, order)
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Whether the row order has been computed since the last sort change.
    pub fn is_materialized(&self) -> bool {
        self.order.get().is_some()
    }
}
