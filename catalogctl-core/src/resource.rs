//! Resource records and their mapping to frontmatter documents
//!
//! A record is any serde type with an `id` field and a `markdown` field.
//! Everything except `markdown` becomes the frontmatter mapping; `markdown`
//! becomes the document body.

use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use serde_yaml::{Mapping, Value};

use crate::error::{CatalogError, Result};
use crate::kind::ResourceKind;

/// Frontmatter key holding the resource id
pub const ID_FIELD: &str = "id";

/// Record field stored as the document body
pub const BODY_FIELD: &str = "markdown";

/// A record that can be stored as a catalog document
pub trait Resource: Serialize + DeserializeOwned {
    fn id(&self) -> &str;
}

/// A record type with a fixed home in the catalog
pub trait CatalogResource: Resource {
    fn kind() -> ResourceKind;
}

/// Check that `id` can be used as a file name inside a kind directory
pub fn validate_id(id: &str) -> Result<()> {
    let reason = if id.is_empty() {
        "id must not be empty"
    } else if id.starts_with('.') {
        "id must not start with '.'"
    } else if id.contains(|c: char| matches!(c, '/' | '\\' | '\0')) {
        "id must not contain path separators or NUL"
    } else {
        return Ok(());
    };

    Err(CatalogError::invalid_id(id, reason))
}

/// Split a record into (frontmatter, body)
pub(crate) fn into_document<T: Resource>(resource: &T) -> Result<(Mapping, String)> {
    let id = resource.id();
    let value = serde_yaml::to_value(resource).map_err(|e| CatalogError::encode(id, e.to_string()))?;
    let Value::Mapping(mapping) = value else {
        return Err(CatalogError::encode(id, "record does not serialize to a mapping"));
    };

    let mut metadata = Mapping::new();
    let mut body = None;
    for (key, value) in mapping {
        if key.as_str() == Some(BODY_FIELD) {
            body = Some(value);
        } else {
            metadata.insert(key, value);
        }
    }

    match metadata.get(ID_FIELD) {
        Some(Value::String(stored)) if stored == id => {}
        _ => return Err(CatalogError::encode(id, "serialized `id` does not match the record id")),
    }

    let body = match body {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(_) => return Err(CatalogError::encode(id, "`markdown` must be a string")),
    };

    Ok((metadata, body))
}

/// Rebuild a record from a parsed document stored under `expected_id`.
///
/// The body always fills `markdown`; a frontmatter `markdown` key is rejected
/// as malformed rather than silently shadowed.
pub(crate) fn from_document<T: Resource>(
    path: &Path,
    expected_id: &str,
    mut metadata: Mapping,
    body: String,
) -> Result<T> {
    match metadata.get(ID_FIELD) {
        Some(Value::String(id)) if id == expected_id => {}
        Some(Value::String(id)) => {
            return Err(CatalogError::malformed(
                path,
                format!("frontmatter id '{id}' does not match file name '{expected_id}'"),
            ))
        }
        _ => return Err(CatalogError::malformed(path, "frontmatter has no string `id`")),
    }

    if metadata.contains_key(BODY_FIELD) {
        return Err(CatalogError::malformed(
            path,
            format!("frontmatter must not contain `{BODY_FIELD}`; it is the document body"),
        ));
    }

    metadata.insert(Value::from(BODY_FIELD), Value::String(body));
    serde_yaml::from_value(Value::Mapping(metadata))
        .map_err(|e| CatalogError::malformed(path, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: String,
        title: String,
        markdown: String,
    }

    impl Resource for Note {
        fn id(&self) -> &str {
            &self.id
        }
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id("eventcatalog-core-user").is_ok());
        assert!(validate_id("user_1.v2").is_ok());

        for bad in ["", ".", "..", ".hidden", "a/b", "a\\b", "nul\0"] {
            let err = validate_id(bad).unwrap_err();
            assert!(matches!(err, CatalogError::InvalidId { .. }), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_into_document_moves_markdown_to_body() {
        let note = Note {
            id: "n1".to_string(),
            title: "First".to_string(),
            markdown: "body text".to_string(),
        };

        let (metadata, body) = into_document(&note).unwrap();
        assert_eq!(body, "body text");
        assert!(metadata.get(BODY_FIELD).is_none());
        assert_eq!(metadata.get("title").and_then(Value::as_str), Some("First"));
    }

    #[test]
    fn test_from_document_round_trip() {
        let note = Note {
            id: "n1".to_string(),
            title: "First".to_string(),
            markdown: "body text".to_string(),
        };

        let (metadata, body) = into_document(&note).unwrap();
        let back: Note = from_document(Path::new("n1.md"), "n1", metadata, body).unwrap();
        assert_eq!(back, note);
    }

    #[test]
    fn test_from_document_id_mismatch() {
        let mut metadata = Mapping::new();
        metadata.insert(Value::from("id"), Value::from("other"));
        metadata.insert(Value::from("title"), Value::from("x"));

        let result: Result<Note> = from_document(Path::new("n1.md"), "n1", metadata, String::new());
        let err = result.unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { .. }));
        assert!(err.to_string().contains("does not match file name"));
    }

    #[test]
    fn test_from_document_rejects_markdown_key() {
        let mut metadata = Mapping::new();
        metadata.insert(Value::from("id"), Value::from("n1"));
        metadata.insert(Value::from("title"), Value::from("x"));
        metadata.insert(Value::from("markdown"), Value::from("shadowed"));

        let result: Result<Note> =
            from_document(Path::new("n1.md"), "n1", metadata, "body".to_string());
        let err = result.unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { .. }));
        assert!(err.to_string().contains("markdown"));
    }

    #[test]
    fn test_from_document_missing_field() {
        let mut metadata = Mapping::new();
        metadata.insert(Value::from("id"), Value::from("n1"));

        let result: Result<Note> = from_document(Path::new("n1.md"), "n1", metadata, String::new());
        assert!(matches!(result, Err(CatalogError::Malformed { .. })));
    }
}
