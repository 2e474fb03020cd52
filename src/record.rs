// src/record.rs
//! Flat field-to-value records and the tolerant-read policy
//!
//! A `Record` is the persisted shape of one configuration section: a flat
//! map from field name to either text or an opaque byte blob. Reads are
//! tolerant — a missing field yields its declared default instead of an
//! error, and legacy surrounding quotes on text values are stripped.

use std::collections::BTreeMap;

/// One stored field value. Key material stays binary end to end; it is
/// never converted to text. `Null` marks a declared field with no value,
/// stored as a NULL row so the record itself still exists on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Bytes(Vec<u8>),
    Null,
}

/// The single record of one collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_text(&mut self, field: &str, value: &str) {
        self.fields
            .insert(field.to_owned(), Value::Text(value.to_owned()));
    }

    /// Absent blobs are stored as a NULL row; `bytes` reads them back as
    /// `None`. A section made only of absent blobs must still produce a
    /// record, or the replace path would find nothing to replace.
    pub fn insert_bytes(&mut self, field: &str, value: Option<&[u8]>) {
        let value = match value {
            Some(bytes) => Value::Bytes(bytes.to_vec()),
            None => Value::Null,
        };
        self.fields.insert(field.to_owned(), value);
    }

    /// Tolerant text read: missing field or a blob under a text field both
    /// decode to the empty string.
    pub fn text(&self, field: &str) -> String {
        self.text_or(field, "")
    }

    /// Tolerant text read with an explicit default for the missing case.
    pub fn text_or(&self, field: &str, default: &str) -> String {
        match self.fields.get(field) {
            Some(Value::Text(value)) => unquote(value),
            Some(Value::Bytes(_) | Value::Null) | None => default.to_owned(),
        }
    }

    /// Tolerant blob read: missing or NULL field decodes to `None`.
    pub fn bytes(&self, field: &str) -> Option<Vec<u8>> {
        match self.fields.get(field) {
            Some(Value::Bytes(bytes)) => Some(bytes.clone()),
            Some(Value::Text(_) | Value::Null) | None => None,
        }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Older containers stored text values with their BSON quoting intact.
fn unquote(value: &str) -> String {
    value.trim_matches('"').to_owned()
}

/// Conversion between a typed configuration section and its `Record` form.
///
/// `from_record` must apply the tolerant-read policy for every field, and
/// `to_record` must emit every declared field, so that decoding an encoded
/// section reproduces it exactly.
pub trait ConfigSection: Sized {
    /// Fixed collection name this section persists under.
    const COLLECTION: &'static str;

    fn to_record(&self) -> Record;
    fn from_record(record: &Record) -> Self;
}
