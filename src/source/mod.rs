//! Record source abstraction.
//!
//! A `RecordSource` is the fetch collaborator behind every host view: a remote
//! backend, a file on disk or an in-memory fixture. Views only see complete
//! record sets or a [`SourceError`].

mod json;
mod memory;

pub use json::JsonFileSource;
pub use memory::MemorySource;

use crate::record::{Record, RecordSet};

/// Errors a record source can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// I/O error while reading the backing store.
    Io(String),
    /// Payload could not be parsed.
    Parse(String),
    /// Payload parsed but is not a list of records.
    Shape(String),
    /// The backend rejected or failed the request.
    Backend(String),
    /// The requested capability is not available.
    Unsupported(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Io(msg) => write!(f, "I/O error: {}", msg),
            SourceError::Parse(msg) => write!(f, "Parse error: {}", msg),
            SourceError::Shape(msg) => write!(f, "Unexpected payload: {}", msg),
            SourceError::Backend(msg) => write!(f, "Backend error: {}", msg),
            SourceError::Unsupported(msg) => write!(f, "Unsupported: {}", msg),
        }
    }
}

impl std::error::Error for SourceError {}

/// Restricts a search to records whose `field` equals `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    pub field: String,
    pub value: String,
}

/// A keyword search, optionally scoped to one parent record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub keyword: String,
    pub scope: Option<Scope>,
}

impl Query {
    pub fn keyword(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            scope: None,
        }
    }

    pub fn scoped(keyword: &str, field: &str, value: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            scope: Some(Scope {
                field: field.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// Returns true if `record` satisfies the scope and contains the keyword.
    ///
    /// An empty keyword matches every record in scope.
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(scope) = &self.scope
            && !record.field_equals(&scope.field, &scope.value)
        {
            return false;
        }
        let needle = self.keyword.trim().to_lowercase();
        needle.is_empty() || record.contains_text(&needle)
    }
}

/// Fetch collaborator for host views.
pub trait RecordSource {
    /// Fetches the full record set.
    fn fetch_all(&self) -> Result<RecordSet, SourceError>;

    /// Runs a search. The default filters `fetch_all()` client-side.
    fn search(&self, query: &Query) -> Result<RecordSet, SourceError> {
        Ok(self
            .fetch_all()?
            .into_iter()
            .filter(|record| query.matches(record))
            .collect())
    }
}
