//! Outward serialization of stored documents.
//!
//! Stored representations must never leak internal BSON types to callers:
//! identifiers become their canonical hex strings, timestamps become ISO-8601
//! strings, and the document's own `_id` field is renamed to `id`.

use mongodb::bson::{Bson, Document};
use serde_json::{Map, Value};

/// Convert a stored document into its public JSON form.
///
/// Applied to every document before it crosses the HTTP boundary. The
/// top-level `_id` is renamed to `id`; nested documents keep their field
/// names but still have identifier and timestamp values converted.
pub fn to_api_json(document: &Document) -> Value {
    let mut out = Map::with_capacity(document.len());
    for (key, value) in document {
        let key = if key == "_id" { "id" } else { key.as_str() };
        out.insert(key.to_string(), bson_to_json(value));
    }
    Value::Object(out)
}

fn document_to_json(document: &Document) -> Value {
    let mut out = Map::with_capacity(document.len());
    for (key, value) in document {
        out.insert(key.clone(), bson_to_json(value));
    }
    Value::Object(out)
}

fn bson_to_json(value: &Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => Value::String(dt.to_chrono().to_rfc3339()),
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.iter().map(bson_to_json).collect()),
        other => other.clone().into_relaxed_extjson(),
    }
}
