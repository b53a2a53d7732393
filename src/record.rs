//! Opaque records as fetched from a record source.
//!
//! A record is an ordered map of field name to JSON value. The pager never looks at
//! the schema; it only asks for sort keys and display text through [`FieldAccess`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::pager::SortKey;

/// Field name used for 1-based serial numbers assigned at load time.
pub const SERIAL_FIELD: &str = "SNo";

/// Full, unpaginated result of one fetch.
pub type RecordSet = Vec<Record>;

/// Field access needed to sort and render rows.
pub trait FieldAccess {
    /// Sort key for `field`. Missing fields map to [`SortKey::Empty`].
    fn sort_key(&self, field: &str) -> SortKey;

    /// Display text for `field`. Missing fields render as an empty string.
    fn display(&self, field: &str) -> String;
}

/// A single record: field name to value, in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style field setter.
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: &str, value: impl Into<Value>) {
        self.0.insert(field.to_string(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Field names in source order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns true if any scalar field contains `needle` (case-insensitive).
    ///
    /// `needle` must already be lowercase.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.0.values().any(|value| match value {
            Value::String(s) => s.to_lowercase().contains(needle),
            Value::Number(n) => n.to_string().contains(needle),
            _ => false,
        })
    }

    /// Returns true if `field` renders exactly as `value`.
    pub fn field_equals(&self, field: &str, value: &str) -> bool {
        self.get(field).is_some_and(|v| display_value(v) == value)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FieldAccess for Record {
    fn sort_key(&self, field: &str) -> SortKey {
        match self.get(field) {
            None | Some(Value::Null) => SortKey::Empty,
            Some(Value::String(s)) if s.is_empty() => SortKey::Empty,
            Some(Value::String(s)) => SortKey::Text(s.clone()),
            Some(Value::Bool(b)) => SortKey::Bool(*b),
            Some(Value::Number(n)) => n.as_f64().map_or(SortKey::Empty, SortKey::Number),
            Some(other) => SortKey::Text(other.to_string()),
        }
    }

    fn display(&self, field: &str) -> String {
        self.get(field).map(display_value).unwrap_or_default()
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Assigns 1-based serial numbers in current order, overwriting `field`.
pub fn number_records(records: &mut [Record], field: &str) {
    for (index, record) in records.iter_mut().enumerate() {
        record.insert(field, index + 1);
    }
}
