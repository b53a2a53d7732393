//! Record source backed by a JSON file holding an array of objects.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use super::{RecordSource, SourceError};
use crate::record::{Record, RecordSet};

/// Reads the whole file on every fetch, so edits show up on refresh.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn fetch_all(&self) -> Result<RecordSet, SourceError> {
        let text = fs::read_to_string(&self.path)
            .map_err(|e| SourceError::Io(format!("{}: {}", self.path.display(), e)))?;
        let records = parse_records(&text)?;
        debug!(
            path = %self.path.display(),
            count = records.len(),
            "read records"
        );
        Ok(records)
    }
}

/// Parses a JSON array of objects into records.
pub(crate) fn parse_records(text: &str) -> Result<RecordSet, SourceError> {
    let value: Value = serde_json::from_str(text).map_err(|e| SourceError::Parse(e.to_string()))?;
    let Value::Array(items) = value else {
        return Err(SourceError::Shape("expected a JSON array of records".to_string()));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(Record::from(map)),
            other => Err(SourceError::Shape(format!(
                "element {} is not an object: {}",
                index, other
            ))),
        })
        .collect()
}
