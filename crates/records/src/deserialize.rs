//! Reading metadata documents into typed bundles.
//!
//! Both entry points take a `&serde_json::Value`, require an
//! `elementInstance` object, and treat every other record as optional:
//! a missing key and an explicit `null` both mean "absent". Unknown
//! top-level keys are skipped for forward compatibility.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::RecordError;
use crate::types::*;

/// Read a metadata sources document.
///
/// ```json
/// {
///   "elementInstance": { ... },
///   "job": { ... },
///   "calledProcessInstance": { ... },
///   "decisionInstance": { ... },
///   "userTask": { ... }
/// }
/// ```
pub fn from_sources_json(doc: &Value) -> Result<MetadataSources, RecordError> {
    let obj = as_document(doc)?;
    let element_instance = required_record(obj, "elementInstance", "element instance")?;

    Ok(MetadataSources {
        element_instance,
        job: optional_record(obj, "job", "job")?,
        called_process_instance: optional_record(obj, "calledProcessInstance", "process instance")?,
        decision_instance: optional_record(obj, "decisionInstance", "decision instance")?,
        user_task: optional_record(obj, "userTask", "user task")?,
    })
}

/// Read a linked pages document.
///
/// ```json
/// {
///   "elementInstance": { ... },
///   "jobs": { "items": [ ... ], "page": { "totalItems": 1 } },
///   "processInstances": { ... },
///   "decisionInstances": { ... },
///   "userTasks": { ... }
/// }
/// ```
pub fn from_pages_json(doc: &Value) -> Result<LinkedPages, RecordError> {
    let obj = as_document(doc)?;
    let element_instance = required_record(obj, "elementInstance", "element instance")?;

    Ok(LinkedPages {
        element_instance,
        jobs: optional_page(obj, "jobs", "job")?,
        process_instances: optional_page(obj, "processInstances", "process instance")?,
        decision_instances: optional_page(obj, "decisionInstances", "decision instance")?,
        user_tasks: optional_page(obj, "userTasks", "user task")?,
    })
}

// ── Helpers ─────────────────────────────────────────────────────────

fn as_document(doc: &Value) -> Result<&Map<String, Value>, RecordError> {
    doc.as_object().ok_or_else(|| {
        RecordError::InvalidDocument(format!("expected a JSON object, got {}", kind_of(doc)))
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn parse_record<T: DeserializeOwned>(value: &Value, record: &str) -> Result<T, RecordError> {
    serde_json::from_value(value.clone()).map_err(|e| RecordError::InvalidRecord {
        record: record.to_string(),
        message: e.to_string(),
    })
}

fn required_record<T: DeserializeOwned>(
    obj: &Map<String, Value>,
    field: &str,
    record: &str,
) -> Result<T, RecordError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(RecordError::MissingField {
            field: field.to_string(),
        }),
        Some(value) => parse_record(value, record),
    }
}

fn optional_record<T: DeserializeOwned>(
    obj: &Map<String, Value>,
    field: &str,
    record: &str,
) -> Result<Option<T>, RecordError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => parse_record(value, record).map(Some),
    }
}

fn optional_page<T: DeserializeOwned>(
    obj: &Map<String, Value>,
    field: &str,
    record: &str,
) -> Result<SearchPage<T>, RecordError> {
    Ok(optional_record(obj, field, record)?.unwrap_or_default())
}
