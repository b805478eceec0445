//! Column descriptors.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::record::Record;
use crate::types::Scalar;

/// Reads one value out of a record.
pub type Accessor = Arc<dyn Fn(&dyn Record) -> Option<Scalar> + Send + Sync>;

/// Descriptor of one named field of a table.
///
/// Built with the chained setters below, then handed to a
/// [`SchemaBuilder`](crate::schema::SchemaBuilder). Once it is part of a
/// schema it is only ever read.
#[derive(Clone, Serialize)]
pub struct ColumnSpec {
    name: String,
    verbose_name: Option<String>,
    field: Option<String>,
    default: Scalar,
    visible: bool,
    sortable: bool,
    declaration_index: usize,
    #[serde(rename = "custom_accessor", serialize_with = "serialize_accessor")]
    accessor: Option<Accessor>,
}

fn serialize_accessor<S: serde::Serializer>(
    accessor: &Option<Accessor>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_bool(accessor.is_some())
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            verbose_name: None,
            field: None,
            default: Scalar::Null,
            visible: true,
            sortable: true,
            declaration_index: 0,
            accessor: None,
        }
    }

    /// Display label. Defaults to the name with underscores turned into spaces.
    pub fn verbose_name(mut self, label: impl Into<String>) -> Self {
        self.verbose_name = Some(label.into());
        self
    }

    /// Record key read by the default accessor, when it differs from the column name.
    pub fn field(mut self, key: impl Into<String>) -> Self {
        self.field = Some(key.into());
        self
    }

    /// Value used when a record has no value for this column.
    pub fn default(mut self, value: impl Into<Scalar>) -> Self {
        self.default = value.into();
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn hidden(self) -> Self {
        self.visible(false)
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Replace the field lookup with a custom accessor.
    pub fn accessor<F>(mut self, f: F) -> Self
    where
        F: Fn(&dyn Record) -> Option<Scalar> + Send + Sync + 'static,
    {
        self.accessor = Some(Arc::new(f));
        self
    }

    pub(crate) fn with_declaration_index(mut self, index: usize) -> Self {
        self.declaration_index = index;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> String {
        self.verbose_name
            .clone()
            .unwrap_or_else(|| self.name.replace('_', " "))
    }

    /// The record key read when no custom accessor is set.
    pub fn field_key(&self) -> &str {
        self.field.as_deref().unwrap_or(&self.name)
    }

    pub fn default_value(&self) -> &Scalar {
        &self.default
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn declaration_index(&self) -> usize {
        self.declaration_index
    }

    /// Apply the accessor to `record`, falling back to the column default.
    pub fn value(&self, record: &dyn Record) -> Scalar {
        let found = match &self.accessor {
            Some(f) => f(record),
            None => record.field(self.field_key()),
        };
        found.unwrap_or_else(|| self.default.clone())
    }

    /// Column names are used as sort keys, where a leading `-` means descending.
    pub(crate) fn has_valid_name(&self) -> bool {
        !self.name.is_empty() && !self.name.starts_with('-')
    }
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("name", &self.name)
            .field("verbose_name", &self.verbose_name)
            .field("field", &self.field)
            .field("default", &self.default)
            .field("visible", &self.visible)
            .field("sortable", &self.sortable)
            .field("declaration_index", &self.declaration_index)
            .field("custom_accessor", &self.accessor.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn record(pairs: &[(&str, Scalar)]) -> HashMap<String, Scalar> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn value_reads_field_then_default() {
        let rec = record(&[("title", Scalar::from("Dune"))]);
        let col = ColumnSpec::new("name").field("title");
        assert_eq!(col.value(&rec), Scalar::from("Dune"));

        let col = ColumnSpec::new("rating").default(0);
        assert_eq!(col.value(&rec), Scalar::I32(0));
    }

    #[test]
    fn custom_accessor_wins_over_field() {
        let rec = record(&[("first", Scalar::from("Ada")), ("last", Scalar::from("Lovelace"))]);
        let col = ColumnSpec::new("full_name").accessor(|r| {
            let first = r.field("first")?;
            let last = r.field("last")?;
            Some(Scalar::Str(format!("{first} {last}")))
        });
        assert_eq!(col.value(&rec), Scalar::from("Ada Lovelace"));
    }

    #[test]
    fn label_defaults_to_spaced_name() {
        assert_eq!(ColumnSpec::new("first_name").label(), "first name");
        assert_eq!(ColumnSpec::new("x").verbose_name("Ex").label(), "Ex");
    }

    #[test]
    fn dash_prefixed_names_are_invalid() {
        assert!(!ColumnSpec::new("-n").has_valid_name());
        assert!(!ColumnSpec::new("").has_valid_name());
        assert!(ColumnSpec::new("n").has_valid_name());
    }
}
