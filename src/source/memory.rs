//! In-memory record source for fixtures and tests.

use std::cell::Cell;

use super::{RecordSource, SourceError};
use crate::record::{Record, RecordSet};

/// Serves a fixed record set, or a fixed error.
#[derive(Debug, Default)]
pub struct MemorySource {
    records: RecordSet,
    failure: Option<SourceError>,
    calls: Cell<usize>,
}

impl MemorySource {
    pub fn new(records: RecordSet) -> Self {
        Self {
            records,
            failure: None,
            calls: Cell::new(0),
        }
    }

    /// A source whose every request fails with `error`.
    pub fn failing(error: SourceError) -> Self {
        Self {
            records: Vec::new(),
            failure: Some(error),
            calls: Cell::new(0),
        }
    }

    /// Replaces the served records.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.failure = None;
    }

    /// Number of fetches served so far, including failed ones.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl RecordSource for MemorySource {
    fn fetch_all(&self) -> Result<RecordSet, SourceError> {
        self.calls.set(self.calls.get() + 1);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(self.records.clone()),
        }
    }
}
