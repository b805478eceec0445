//! Table schemas and their composition from ancestor schemas.
//!
//! A table type is described once by a [`SchemaBuilder`]: its own columns in
//! declaration order plus the already-built schemas of its ancestors, most
//! specific first. [`compose`] merges them:
//!
//! 1. Ancestor columns are taken in ancestor order, each ancestor in its own
//!    display order. A name already taken is skipped, so the closest ancestor
//!    wins a conflict between ancestors.
//! 2. Own columns are overlaid in declaration order. A redeclared name replaces
//!    the inherited spec in place; a new name is appended.
//!
//! Membership of the result never depends on ancestor order, only positions do.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use crate::column::ColumnSpec;
use crate::error::{CoreError, Result};
use crate::hash::{hash_serde, Hash256};
use crate::sort::SortSpec;

/// Immutable, ordered, name-unique set of columns for one table type.
#[derive(Debug, Clone, Serialize)]
pub struct TableSchema {
    name: String,
    columns: Vec<ColumnSpec>,
    default_sort: SortSpec,
}

impl TableSchema {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All columns in display order, hidden ones included.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }

    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.index_of(name).map(|i| &self.columns[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|c| c.name())
    }

    pub fn default_sort(&self) -> &SortSpec {
        &self.default_sort
    }

    pub fn visible_columns(&self) -> VisibleColumns<'_> {
        VisibleColumns { schema: self }
    }

    /// Every key must name a sortable column of this schema.
    pub fn check_sort(&self, sort: &SortSpec) -> Result<()> {
        for key in sort.keys() {
            match self.column(key.column) {
                None => {
                    return Err(CoreError::UnknownSortColumn {
                        table: self.name.clone(),
                        key: key.column.to_string(),
                    })
                }
                Some(col) if !col.is_sortable() => {
                    return Err(CoreError::UnsortableColumn {
                        table: self.name.clone(),
                        column: key.column.to_string(),
                    })
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Content hash over names, column metadata, and default sort.
    ///
    /// Custom accessors are opaque and only contribute their presence.
    pub fn fingerprint(&self) -> Result<Hash256> {
        hash_serde(self)
    }
}

/// Visible columns of a schema, in schema order.
#[derive(Debug, Clone, Copy)]
pub struct VisibleColumns<'a> {
    schema: &'a TableSchema,
}

impl<'a> VisibleColumns<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a ColumnSpec> + 'a {
        self.schema.columns.iter().filter(|c| c.is_visible())
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hidden columns are not found here even though the schema has them.
    pub fn get(&self, name: &str) -> Option<&'a ColumnSpec> {
        self.schema.column(name).filter(|c| c.is_visible())
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.iter().map(|c| c.name()).collect()
    }
}

impl<'a> IntoIterator for VisibleColumns<'a> {
    type Item = &'a ColumnSpec;
    type IntoIter = Box<dyn Iterator<Item = &'a ColumnSpec> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.schema.columns.iter().filter(|c| c.is_visible()))
    }
}

/// Merge ancestor columns and own columns into one ordered, name-unique list.
pub fn compose(own: &[ColumnSpec], ancestors: &[&TableSchema]) -> Vec<ColumnSpec> {
    let mut merged: Vec<ColumnSpec> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for ancestor in ancestors {
        for col in &ancestor.columns {
            if seen.insert(col.name()) {
                merged.push(col.clone());
            }
        }
    }

    for col in own {
        match merged.iter().position(|c| c.name() == col.name()) {
            Some(pos) => merged[pos] = col.clone(),
            None => merged.push(col.clone()),
        }
    }

    merged
}

/// One-time registration step for a table type.
pub struct SchemaBuilder {
    name: String,
    own: Vec<ColumnSpec>,
    ancestors: Vec<Arc<TableSchema>>,
    default_sort: Option<SortSpec>,
}

impl SchemaBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            own: Vec::new(),
            ancestors: Vec::new(),
            default_sort: None,
        }
    }

    /// Declare an own column. Declaration order is display order for new names.
    pub fn column(mut self, col: ColumnSpec) -> Self {
        let index = self.own.len();
        self.own.push(col.with_declaration_index(index));
        self
    }

    pub fn columns(self, cols: impl IntoIterator<Item = ColumnSpec>) -> Self {
        cols.into_iter().fold(self, SchemaBuilder::column)
    }

    /// Add an ancestor. Call in resolution order, most specific ancestor first.
    pub fn extends(mut self, ancestor: Arc<TableSchema>) -> Self {
        self.ancestors.push(ancestor);
        self
    }

    /// Default sort for instances that never receive an explicit one.
    ///
    /// Without this, the first ancestor with a non-empty default lends its own.
    pub fn default_sort(mut self, sort: impl Into<SortSpec>) -> Self {
        self.default_sort = Some(sort.into());
        self
    }

    pub fn build(self) -> Result<TableSchema> {
        if let Some(bad) = self.own.iter().find(|c| !c.has_valid_name()) {
            return Err(CoreError::InvalidColumnName(bad.name().to_string()));
        }

        let ancestors: Vec<&TableSchema> = self.ancestors.iter().map(Arc::as_ref).collect();
        let columns = compose(&self.own, &ancestors);

        let default_sort = match self.default_sort {
            Some(sort) => sort,
            None => ancestors
                .iter()
                .map(|a| a.default_sort())
                .find(|s| !s.is_empty())
                .cloned()
                .unwrap_or_default(),
        };

        let schema = TableSchema {
            name: self.name,
            columns,
            default_sort,
        };
        schema.check_sort(&schema.default_sort)?;

        tracing::debug!(
            table = %schema.name,
            ancestors = ancestors.len(),
            own = self.own.len(),
            columns = schema.columns.len(),
            default_sort = %schema.default_sort,
            "built table schema"
        );
        Ok(schema)
    }
}
