//! The record access capability and in-memory record sources.
//!
//! The core only ever reads a record through [`Record::field`]. Concrete data
//! (maps, JSON objects, user structs) is adapted by implementing that one method.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::types::Scalar;

/// Lookup of a named field on one record.
///
/// Returning `None` means the record has no such field; column accessors turn
/// that into the column's default value.
pub trait Record {
    fn field(&self, name: &str) -> Option<Scalar>;
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Option<Scalar> {
        (**self).field(name)
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn field(&self, name: &str) -> Option<Scalar> {
        (**self).field(name)
    }
}

impl<R: Record + ?Sized> Record for Arc<R> {
    fn field(&self, name: &str) -> Option<Scalar> {
        (**self).field(name)
    }
}

impl Record for HashMap<String, Scalar> {
    fn field(&self, name: &str) -> Option<Scalar> {
        self.get(name).cloned()
    }
}

impl Record for BTreeMap<String, Scalar> {
    fn field(&self, name: &str) -> Option<Scalar> {
        self.get(name).cloned()
    }
}

impl Record for serde_json::Map<String, serde_json::Value> {
    fn field(&self, name: &str) -> Option<Scalar> {
        self.get(name).map(Scalar::from_json)
    }
}

/// Only JSON objects carry fields; any other value has none.
impl Record for serde_json::Value {
    fn field(&self, name: &str) -> Option<Scalar> {
        self.as_object().and_then(|obj| obj.field(name))
    }
}

/// Ordered, finite, in-memory collection of records. Never mutated by tabula.
pub trait RecordSource {
    type Record: Record;

    fn len(&self) -> usize;

    fn record(&self, index: usize) -> Option<&Self::Record>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R: Record> RecordSource for [R] {
    type Record = R;

    fn len(&self) -> usize {
        <[R]>::len(self)
    }

    fn record(&self, index: usize) -> Option<&R> {
        self.get(index)
    }
}

impl<R: Record> RecordSource for Vec<R> {
    type Record = R;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn record(&self, index: usize) -> Option<&R> {
        self.get(index)
    }
}
