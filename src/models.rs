// src/models.rs
// =============================================================================
// Data types shared by the checker and the validation pipeline.
//
// Entries coming out of the model have no fixed schema. The only field we
// rely on is "link"; everything else (name, data_type, ...) is carried
// through untouched, in the order the model wrote it.
// =============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One candidate source produced by the model.
///
/// Wraps the raw JSON value so it is written back out exactly as read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceEntry(pub Value);

/// What an entry holds under its "link" key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinkField<'a> {
    /// Absent, or a blank value (null, false, 0, "", [], {})
    Missing,
    Url(&'a str),
    /// Present and not blank, but not a string either
    NotAString(&'a Value),
}

impl SourceEntry {
    pub fn link_field(&self) -> LinkField<'_> {
        match self.0.get("link") {
            None => LinkField::Missing,
            Some(value) if is_blank(value) => LinkField::Missing,
            Some(Value::String(link)) => LinkField::Url(link),
            Some(value) => LinkField::NotAString(value),
        }
    }

    /// The entry's URL, if it has a non-empty string "link" field.
    pub fn link(&self) -> Option<&str> {
        match self.link_field() {
            LinkField::Url(link) => Some(link),
            _ => None,
        }
    }
}

/// null, false, 0, "", [] and {} all count as blank.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Whether a notes value carries anything.
pub fn notes_are_empty(notes: &Value) -> bool {
    is_blank(notes)
}

/// What the File Processor found in one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub valid: Vec<SourceEntry>,
    pub invalid: Vec<SourceEntry>,
    pub notes: Value,
    /// Number of entries in the file's data_sources
    pub total: usize,
    /// 1-based indices of valid entries dropped because their link was seen before
    pub redundant: Vec<usize>,
    /// 1-based indices of entries without a usable link
    pub missing_link: Vec<usize>,
}

impl FileReport {
    /// Report for a file that contributed nothing (no block, bad JSON).
    pub fn empty() -> Self {
        Self {
            valid: Vec::new(),
            invalid: Vec::new(),
            notes: Value::Object(serde_json::Map::new()),
            total: 0,
            redundant: Vec::new(),
            missing_link: Vec::new(),
        }
    }
}

/// Merged results of a whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub valid: Vec<SourceEntry>,
    pub invalid: Vec<SourceEntry>,
    pub notes: Value,
    /// Entries seen across all files, including dropped ones
    pub total: usize,
}

/// Shape of `{country}_links.json`
#[derive(Debug, Serialize)]
pub struct ValidLinksDocument<'a> {
    pub data_sources: &'a [SourceEntry],
    pub notes: &'a Value,
}

/// Shape of `{country}_invalid_links.json`
#[derive(Debug, Serialize)]
pub struct InvalidLinksDocument<'a> {
    pub data_sources: &'a [SourceEntry],
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_link_field() {
        let entry = SourceEntry(json!({"name": "INE", "link": "https://ine.es"}));
        assert_eq!(entry.link(), Some("https://ine.es"));
    }

    #[test]
    fn test_missing_or_unusable_link() {
        assert_eq!(SourceEntry(json!({"name": "foo"})).link(), None);
        assert_eq!(SourceEntry(json!({"link": ""})).link(), None);
        assert_eq!(SourceEntry(json!({"link": null})).link_field(), LinkField::Missing);
        assert_eq!(SourceEntry(json!({"link": false})).link_field(), LinkField::Missing);
        assert_eq!(SourceEntry(json!("https://not-an-object")).link(), None);
    }

    #[test]
    fn test_non_string_link_is_not_missing() {
        let number = SourceEntry(json!({"name": "n", "link": 42}));
        assert_eq!(number.link(), None);
        assert_eq!(number.link_field(), LinkField::NotAString(&json!(42)));

        let list = SourceEntry(json!({"name": "m", "link": ["http://a"]}));
        assert!(matches!(list.link_field(), LinkField::NotAString(Value::Array(_))));
    }

    #[test]
    fn test_entry_field_order_is_preserved() {
        let raw = r#"{"name":"b","link":"http://x","data_type":"a"}"#;
        let entry: SourceEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(serde_json::to_string(&entry).unwrap(), raw);
    }

    #[test]
    fn test_notes_are_empty() {
        assert!(notes_are_empty(&json!({})));
        assert!(notes_are_empty(&json!(null)));
        assert!(notes_are_empty(&json!([])));
        assert!(notes_are_empty(&json!("")));
        assert!(notes_are_empty(&json!(0)));
        assert!(!notes_are_empty(&json!({"x": 1})));
        assert!(!notes_are_empty(&json!("see appendix")));
    }
}
