//! Relation embedding: inline related records by following an id-list field.

use crate::config::{record_id, Document, Record};
use serde_json::Value;
use std::collections::HashMap;

/// How one `_embed` value maps onto the document.
#[derive(Clone, Copy, Debug)]
pub struct EmbedSpec {
    /// Accepted `_embed` query value.
    pub name: &'static str,
    /// Field on the source record holding the related ids.
    pub ids_field: &'static str,
    /// Collection the ids point into.
    pub target_route: &'static str,
    /// Field written onto the response record.
    pub output_field: &'static str,
}

pub const PET: EmbedSpec = EmbedSpec {
    name: "pet",
    ids_field: "petIds",
    target_route: "pet",
    output_field: "pets",
};

/// Look up the embedding for an `_embed` value. Unknown values yield `None` and are ignored.
pub fn resolve(value: Option<&str>) -> Option<EmbedSpec> {
    match value {
        Some(v) if v == PET.name => Some(PET),
        _ => None,
    }
}

impl EmbedSpec {
    /// Decorate every record, indexing the target collection once.
    pub fn decorate_all<'a, I>(&self, records: I, document: &Document) -> Vec<Record>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let index = self.index(document);
        records.into_iter().map(|r| self.decorate_with(r, &index)).collect()
    }

    pub fn decorate(&self, record: &Record, document: &Document) -> Record {
        self.decorate_with(record, &self.index(document))
    }

    fn index<'d>(&self, document: &'d Document) -> HashMap<i64, &'d Record> {
        document
            .collection(self.target_route)
            .map(|c| {
                c.data
                    .iter()
                    .filter_map(|r| record_id(r).map(|id| (id, r)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Missing targets become `null` in their slot; a record without the id field gets `[]`.
    fn decorate_with(&self, record: &Record, index: &HashMap<i64, &Record>) -> Record {
        let related: Vec<Value> = match record.get(self.ids_field) {
            Some(Value::Array(ids)) => ids
                .iter()
                .map(|id| {
                    id.as_i64()
                        .and_then(|id| index.get(&id))
                        .map_or(Value::Null, |r| Value::Object((*r).clone()))
                })
                .collect(),
            _ => Vec::new(),
        };
        let mut out = record.clone();
        out.insert(self.output_field.to_string(), Value::Array(related));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document() -> Document {
        serde_json::from_value(json!([
            {"route": "person", "properties": [], "data": [
                {"id": 1, "name": "Ann", "petIds": [2, 1]},
                {"id": 2, "name": "Bo", "petIds": [9]},
                {"id": 3, "name": "Cy"}
            ]},
            {"route": "pet", "properties": [], "data": [
                {"id": 1, "name": "Rex"},
                {"id": 2, "name": "Tom"}
            ]}
        ]))
        .unwrap()
    }

    #[test]
    fn only_pet_is_recognized() {
        assert!(resolve(Some("pet")).is_some());
        assert!(resolve(Some("pets")).is_none());
        assert!(resolve(Some("owner")).is_none());
        assert!(resolve(None).is_none());
    }

    #[test]
    fn pets_follow_pet_ids_order() {
        let doc = document();
        let ann = doc.collection("person").unwrap().find(1).unwrap();
        let out = PET.decorate(ann, &doc);
        assert_eq!(out["pets"], json!([{"id": 2, "name": "Tom"}, {"id": 1, "name": "Rex"}]));
        assert_eq!(out["petIds"], json!([2, 1]));
    }

    #[test]
    fn dangling_id_becomes_null_and_missing_field_empty() {
        let doc = document();
        let people = &doc.collection("person").unwrap().data;
        let out = PET.decorate_all(people, &doc);
        assert_eq!(out[1]["pets"], json!([null]));
        assert_eq!(out[2]["pets"], json!([]));
    }
}
