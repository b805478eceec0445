//! Process-wide schema cache.
//!
//! Each table type builds its schema once, on first use, and every later
//! lookup returns the same `Arc`. Entries are never replaced or removed.
//! Builds run outside the lock; when two threads race on a first build, the
//! first stored schema wins and the other result is dropped.
//!
//! Hosts that assemble tables at runtime (no Rust type per table) can use
//! [`register`] / [`lookup`], keyed by schema name instead of type identity.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::error::{CoreError, Result};
use crate::schema::{SchemaBuilder, TableSchema};

#[derive(Default)]
struct Registry {
    by_type: HashMap<TypeId, Arc<TableSchema>>,
    by_name: HashMap<String, Arc<TableSchema>>,
}

// Stored schemas are immutable, so a panic while holding the lock cannot leave
// an entry half-written; poisoned guards are recovered.
static REGISTRY: Lazy<RwLock<Registry>> = Lazy::new(|| RwLock::new(Registry::default()));

/// A table type: a Rust type standing for one declared table shape.
///
/// ```
/// use std::sync::Arc;
/// use tabula_core::{ColumnSpec, Result, SchemaBuilder, TableSchema, TableType};
///
/// struct GeoAreaTable;
/// impl TableType for GeoAreaTable {
///     fn declare(b: SchemaBuilder) -> Result<SchemaBuilder> {
///         Ok(b.column(ColumnSpec::new("name")).column(ColumnSpec::new("population")))
///     }
/// }
///
/// struct CountryTable;
/// impl TableType for CountryTable {
///     fn declare(b: SchemaBuilder) -> Result<SchemaBuilder> {
///         Ok(b.extends(GeoAreaTable::schema()?).column(ColumnSpec::new("capital")))
///     }
/// }
///
/// let schema: Arc<TableSchema> = CountryTable::schema().unwrap();
/// assert_eq!(schema.len(), 3);
/// ```
pub trait TableType: 'static {
    /// Name recorded on the schema; shows up in errors and logs.
    fn table_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Declare ancestors (most specific first), own columns, and options.
    fn declare(builder: SchemaBuilder) -> Result<SchemaBuilder>;

    fn schema() -> Result<Arc<TableSchema>>
    where
        Self: Sized,
    {
        schema_for::<Self>()
    }
}

/// Cached schema of `T`, building it on first use.
pub fn schema_for<T: TableType>() -> Result<Arc<TableSchema>> {
    let key = TypeId::of::<T>();
    {
        let reg = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(schema) = reg.by_type.get(&key) {
            tracing::trace!(table = T::table_name(), "schema cache hit");
            return Ok(Arc::clone(schema));
        }
    }

    // Ancestors resolve their own schemas here, so no lock may be held.
    let built = Arc::new(T::declare(SchemaBuilder::new(T::table_name()))?.build()?);

    let mut reg = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    let stored = reg.by_type.entry(key).or_insert(built);
    tracing::trace!(table = T::table_name(), columns = stored.len(), "schema cached");
    Ok(Arc::clone(stored))
}

/// Register a schema under its own name.
///
/// Registering identical content again returns the existing entry; different
/// content under a taken name is a [`CoreError::RegistryConflict`].
pub fn register(schema: TableSchema) -> Result<Arc<TableSchema>> {
    let fingerprint = schema.fingerprint()?;
    let mut reg = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    if let Some(existing) = reg.by_name.get(schema.name()) {
        if existing.fingerprint()? == fingerprint {
            return Ok(Arc::clone(existing));
        }
        tracing::warn!(table = schema.name(), "conflicting schema registration");
        return Err(CoreError::RegistryConflict(schema.name().to_string()));
    }
    let schema = Arc::new(schema);
    reg.by_name
        .insert(schema.name().to_string(), Arc::clone(&schema));
    Ok(schema)
}

pub fn lookup(name: &str) -> Option<Arc<TableSchema>> {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .by_name
        .get(name)
        .cloned()
}
