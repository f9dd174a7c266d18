//! Document validation: unique routes and integer, unique ids per collection.

use crate::config::{record_id, Document};
use crate::error::ConfigError;
use std::collections::HashSet;

pub fn validate(document: &Document) -> Result<(), ConfigError> {
    let mut routes = HashSet::new();
    for collection in &document.collections {
        if !routes.insert(collection.route.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate route '{}'",
                collection.route
            )));
        }

        let mut ids = HashSet::new();
        for (index, record) in collection.data.iter().enumerate() {
            let id = record_id(record).ok_or_else(|| {
                ConfigError::Validation(format!(
                    "record {} in '{}' has no integer id",
                    index, collection.route
                ))
            })?;
            if !ids.insert(id) {
                return Err(ConfigError::Validation(format!(
                    "duplicate id {} in '{}'",
                    id, collection.route
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Document {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn accepts_well_formed_document() {
        let doc = parse(
            r#"[{"route":"pet","properties":[],"data":[{"id":1},{"id":2}]},
                {"route":"person","properties":["name"],"data":[]}]"#,
        );
        assert!(validate(&doc).is_ok());
    }

    #[test]
    fn rejects_duplicate_route() {
        let doc = parse(r#"[{"route":"pet","data":[]},{"route":"pet","data":[]}]"#);
        assert!(matches!(validate(&doc), Err(ConfigError::Validation(m)) if m.contains("duplicate route")));
    }

    #[test]
    fn rejects_missing_or_non_integer_id() {
        let doc = parse(r#"[{"route":"pet","data":[{"name":"Rex"}]}]"#);
        assert!(validate(&doc).is_err());
        let doc = parse(r#"[{"route":"pet","data":[{"id":"1"}]}]"#);
        assert!(validate(&doc).is_err());
    }

    #[test]
    fn rejects_duplicate_id() {
        let doc = parse(r#"[{"route":"pet","data":[{"id":3},{"id":3}]}]"#);
        assert!(matches!(validate(&doc), Err(ConfigError::Validation(m)) if m.contains("duplicate id 3")));
    }
}
