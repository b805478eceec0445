//! Table declaration tests (own columns, single and multiple ancestors, diamonds)


use std::collections::BTreeSet;
use std::sync::Arc;

use tabula::prelude::*;
use test_data_gen::init_tracing;

struct TestTable;
impl TableType for TestTable {
    fn declare(b: SchemaBuilder) -> Result<SchemaBuilder> {
        Ok(b)
    }
}

struct GeoAreaTable;
impl TableType for GeoAreaTable {
    fn declare(b: SchemaBuilder) -> Result<SchemaBuilder> {
        Ok(b.extends(TestTable::schema()?)
            .column(ColumnSpec::new("name"))
            .column(ColumnSpec::new("population")))
    }
}

struct CountryTable;
impl TableType for CountryTable {
    fn declare(b: SchemaBuilder) -> Result<SchemaBuilder> {
        Ok(b.extends(GeoAreaTable::schema()?)
            .column(ColumnSpec::new("capital")))
    }
}

struct AddedMixin;
impl TableType for AddedMixin {
    fn declare(b: SchemaBuilder) -> Result<SchemaBuilder> {
        Ok(b.extends(TestTable::schema()?)
            .column(ColumnSpec::new("added")))
    }
}

struct CityTable;
impl TableType for CityTable {
    fn declare(b: SchemaBuilder) -> Result<SchemaBuilder> {
        Ok(b.extends(GeoAreaTable::schema()?)
            .extends(AddedMixin::schema()?)
            .column(ColumnSpec::new("mayer")))
    }
}

struct ModelTable;
impl TableType for ModelTable {
    fn declare(b: SchemaBuilder) -> Result<SchemaBuilder> {
        Ok(b.extends(TestTable::schema()?))
    }
}

struct StateTable1;
impl TableType for StateTable1 {
    fn declare(b: SchemaBuilder) -> Result<SchemaBuilder> {
        Ok(b.extends(ModelTable::schema()?)
            .extends(GeoAreaTable::schema()?)
            .column(ColumnSpec::new("motto")))
    }
}

struct StateTable2;
impl TableType for StateTable2 {
    fn declare(b: SchemaBuilder) -> Result<SchemaBuilder> {
        Ok(b.extends(GeoAreaTable::schema()?)
            .extends(ModelTable::schema()?)
            .column(ColumnSpec::new("motto")))
    }
}

fn name_set(schema: &TableSchema) -> BTreeSet<String> {
    schema.names().map(str::to_string).collect()
}

fn plain(name: &str, cols: &[&str], ancestors: &[Arc<TableSchema>]) -> Arc<TableSchema> {
    let builder = ancestors
        .iter()
        .cloned()
        .fold(SchemaBuilder::new(name), SchemaBuilder::extends);
    Arc::new(
        builder
            .columns(cols.iter().map(|c| ColumnSpec::new(*c)))
            .build()
            .expect("valid schema"),
    )
}

#[test]
fn test_own_columns() {
    init_tracing();
    let schema = GeoAreaTable::schema().unwrap();
    assert_eq!(schema.len(), 2);
    assert!(schema.contains("name"));
    assert!(schema.contains("population"));
}

#[test]
fn test_single_parent_extension() {
    let schema = CountryTable::schema().unwrap();
    assert_eq!(schema.len(), 3);
    assert!(schema.contains("capital"));
    assert_eq!(
        schema.names().collect::<Vec<_>>(),
        ["name", "population", "capital"]
    );
}

#[test]
fn test_multiple_ancestors() {
    let schema = CityTable::schema().unwrap();
    assert_eq!(schema.len(), 4);
    assert!(schema.contains("added"));
    assert_eq!(
        schema.names().collect::<Vec<_>>(),
        ["name", "population", "added", "mayer"]
    );
}

#[test]
fn test_ancestor_order_does_not_change_membership() {
    let one = StateTable1::schema().unwrap();
    let two = StateTable2::schema().unwrap();
    assert_eq!(one.len(), 3);
    assert_eq!(two.len(), 3);
    assert!(one.contains("motto"));
    assert!(two.contains("motto"));
    assert_eq!(name_set(&one), name_set(&two));
}

#[test]
fn test_diamond_composition() {
    let base = plain("Base", &["id"], &[]);
    let left = plain("Left", &["left"], &[base.clone()]);
    let right = plain("Right", &["right"], &[base]);

    let lr = plain("LeafLR", &["leaf"], &[left.clone(), right.clone()]);
    let rl = plain("LeafRL", &["leaf"], &[right, left]);

    assert_eq!(lr.len(), 4);
    assert_eq!(rl.len(), 4);
    assert_eq!(name_set(&lr), name_set(&rl));
    assert_eq!(lr.names().collect::<Vec<_>>(), ["id", "left", "right", "leaf"]);
    assert_eq!(rl.names().collect::<Vec<_>>(), ["id", "right", "left", "leaf"]);
}

#[test]
fn test_diamond_shared_name_closest_branch_wins() {
    let left = Arc::new(
        SchemaBuilder::new("Left")
            .column(ColumnSpec::new("label").verbose_name("from left"))
            .build()
            .unwrap(),
    );
    let right = Arc::new(
        SchemaBuilder::new("Right")
            .column(ColumnSpec::new("label").verbose_name("from right"))
            .build()
            .unwrap(),
    );
    let leaf = SchemaBuilder::new("Leaf")
        .extends(right)
        .extends(left)
        .build()
        .unwrap();
    assert_eq!(leaf.len(), 1);
    assert_eq!(leaf.column("label").unwrap().label(), "from right");
}

#[test]
fn test_reserved_names_are_rejected() {
    for bad in ["", "-name"] {
        let err = SchemaBuilder::new("Bad")
            .column(ColumnSpec::new(bad))
            .build()
            .unwrap_err();
        assert_eq!(err, CoreError::InvalidColumnName(bad.to_string()));
    }
}

#[test]
fn test_visible_column_count() {
    let schema = Arc::new(
        SchemaBuilder::new("MyTable")
            .column(ColumnSpec::new("visible").visible(true))
            .column(ColumnSpec::new("hidden").visible(false))
            .build()
            .unwrap(),
    );
    let table = TableInstance::new(schema, Arc::new(Vec::<serde_json::Value>::new()));
    assert_eq!(table.columns().len(), 1);
    assert_eq!(table.columns().names(), ["visible"]);
    assert_eq!(table.schema().len(), 2);
}
