//! Pagination tests (external paginator and integrated page adapter)


use serde_json::Value;
use tabula::prelude::*;
use test_data_gen::{book_records, init_tracing};

struct BookTable;
impl TableType for BookTable {
    fn declare(b: SchemaBuilder) -> Result<SchemaBuilder> {
        Ok(b.column(ColumnSpec::new("name")).column(ColumnSpec::new("n").hidden()))
    }
}

fn books(count: usize) -> TableInstance<Vec<Value>> {
    TableInstance::for_type::<BookTable>(book_records(count)).unwrap()
}

#[test]
fn test_external_paginator_over_rows() {
    init_tracing();
    let table = books(100);
    let rows = table.rows();

    let paginator = Paginator::new(rows.len(), 10).unwrap();
    assert_eq!(paginator.num_pages(), 10);
    let bounds = paginator.page(&PageArg::from(1)).unwrap();
    let page_rows = rows.slice(bounds.start..bounds.end);
    assert_eq!(page_rows.len(), 10);
    assert!(!bounds.has_previous());
    assert!(bounds.has_next());
}

#[test]
fn test_integrated_paginator() {
    let mut table = books(100);
    table.paginate(&Paginator::factory(), 10, 1).unwrap();

    assert_eq!(table.page_rows().unwrap().len(), 10);
    assert_eq!(table.rows().len(), 100);

    assert_eq!(table.paginator().unwrap().num_pages, 10);
    let page = table.page().unwrap();
    assert!(!page.has_previous());
    assert!(page.has_next());
    assert_eq!(page.total_pages(), 10);
}

#[test]
fn test_invalid_pages_are_not_found() {
    let mut table = books(100);
    for page in [PageArg::from(9999), PageArg::from("abc")] {
        let err = table
            .paginate(&Paginator::factory(), 10, page.clone())
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, TableError::PageNotFound { page: ref p, .. } if *p == page.to_string()));
    }

    // still usable after failed requests
    let (_, page) = table.paginate(&Paginator::factory(), 10, "2").unwrap();
    assert_eq!(page.number(), 2);
    assert_eq!(page.previous_page_number(), Some(1));
    let first = table.page_rows().unwrap().first().unwrap();
    assert_eq!(first.get("name"), Some(Scalar::from("Book Nr. 11")));
}

#[test]
fn test_page_rows_follow_sort() {
    let mut table = books(25);
    table.set_sort("-n").unwrap();
    table.paginate(&Paginator::factory(), 10, 3).unwrap();
    let names: Vec<String> = table
        .page_rows()
        .unwrap()
        .iter()
        .map(|row| row.get("name").map(|v| v.to_string()).unwrap_or_default())
        .collect();
    assert_eq!(
        names,
        ["Book Nr. 5", "Book Nr. 4", "Book Nr. 3", "Book Nr. 2", "Book Nr. 1"]
    );
}

#[test]
fn test_empty_table_has_one_empty_page() {
    let mut table = books(0);
    let (paginator, page) = table.paginate(&Paginator::factory(), 10, 1).unwrap();
    assert_eq!(paginator.num_pages(), 1);
    assert!(page.is_empty());
    assert!(!page.has_next());
    assert!(table.page_rows().unwrap().is_empty());
}

#[test]
fn test_config_page_size() {
    let mut table = books(60);
    let cfg = TableConfig {
        per_page: 25,
        ..TableConfig::default()
    };
    let page = table.paginate_with_config(&cfg, 3).unwrap();
    assert_eq!(page.len(), 10);
    assert_eq!((page.start_index(), page.end_index()), (51, 60));
}
