//! Data file types: the document is a JSON array of collections.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One stored item. Keys keep file order; `id` is always an integer once validated.
pub type Record = Map<String, Value>;

/// Read the integer `id` of a record, if it has one.
pub fn record_id(record: &Record) -> Option<i64> {
    record.get("id").and_then(Value::as_i64)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub route: String,
    /// Field names that must be present in a create body.
    #[serde(default)]
    pub properties: Vec<String>,
    #[serde(default)]
    pub data: Vec<Record>,
    /// Anything else on the collection object, written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Collection {
    pub fn find(&self, id: i64) -> Option<&Record> {
        self.data.iter().find(|r| record_id(r) == Some(id))
    }

    /// Next id: one past the current maximum, 1 when empty. `None` once the maximum is `i64::MAX`.
    pub fn next_id(&self) -> Option<i64> {
        match self.data.iter().filter_map(record_id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub collections: Vec<Collection>,
}

impl Document {
    pub fn collection(&self, route: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.route == route)
    }

    pub fn collection_mut(&mut self, route: &str) -> Option<&mut Collection> {
        self.collections.iter_mut().find(|c| c.route == route)
    }
}
