//! Prompt-driven lookup scoped to a parent record, with optional voice input.
//!
//! Speech recognition is an opaque capability behind [`Transcriber`]; the view only
//! consumes the final transcript.

use tracing::{debug, error, warn};

use super::HostView;
use crate::pager::{PageView, TablePager};
use crate::record::Record;
use crate::source::{Query, RecordSource, SourceError};

/// Speech-to-text capability.
pub trait Transcriber {
    /// Listens for one utterance and returns its transcript.
    fn transcribe(&mut self) -> Result<String, SourceError>;
}

/// Searches child records of one parent (e.g. contacts of an account).
pub struct LookupView<S> {
    title: String,
    source: S,
    scope_field: String,
    parent_id: Option<String>,
    prompt: String,
    transcriber: Option<Box<dyn Transcriber>>,
    pager: TablePager,
    is_loading: bool,
    last_error: Option<String>,
}

impl<S: RecordSource> LookupView<S> {
    /// `scope_field` is the child field holding the parent id.
    pub fn new(title: &str, source: S, scope_field: &str) -> Self {
        Self {
            title: title.to_string(),
            source,
            scope_field: scope_field.to_string(),
            parent_id: None,
            prompt: String::new(),
            transcriber: None,
            pager: TablePager::new(),
            is_loading: false,
            last_error: None,
        }
    }

    pub fn with_parent(mut self, parent_id: &str) -> Self {
        self.parent_id = Some(parent_id.to_string());
        self
    }

    /// Sets the initial prompt without searching.
    pub fn with_prompt(mut self, prompt: &str) -> Self {
        self.prompt = prompt.to_string();
        self
    }

    pub fn with_transcriber(mut self, transcriber: Box<dyn Transcriber>) -> Self {
        self.transcriber = Some(transcriber);
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.pager.set_page_size(page_size);
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Updates the prompt without searching.
    pub fn set_prompt(&mut self, prompt: &str) {
        self.prompt = prompt.to_string();
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Uses `transcript` as the prompt and searches.
    pub fn submit_transcript(&mut self, transcript: &str) -> PageView<'_, Record> {
        self.set_prompt(transcript);
        self.search()
    }

    /// Runs the scoped search for the current prompt.
    ///
    /// Without a parent id the search is skipped and the current rows stay.
    pub fn search(&mut self) -> PageView<'_, Record> {
        let Some(parent_id) = self.parent_id.as_deref() else {
            warn!(view = %self.title, "no parent record id set; lookup skipped");
            return self.pager.view();
        };

        self.is_loading = true;
        let query = Query::scoped(&self.prompt, &self.scope_field, parent_id);
        let records = match self.source.search(&query) {
            Ok(records) => {
                debug!(prompt = %self.prompt, count = records.len(), "lookup finished");
                self.last_error = None;
                records
            }
            Err(e) => {
                error!(prompt = %self.prompt, error = %e, "lookup failed");
                self.last_error = Some(e.to_string());
                Vec::new()
            }
        };
        self.is_loading = false;
        self.pager.load(records)
    }

    /// Captures one transcript from the speech capability and searches with it.
    pub fn listen_and_search(&mut self) -> Result<PageView<'_, Record>, SourceError> {
        let Some(transcriber) = self.transcriber.as_mut() else {
            return Err(SourceError::Unsupported(
                "speech recognition is not available".to_string(),
            ));
        };

        match transcriber.transcribe() {
            Ok(transcript) => Ok(self.submit_transcript(&transcript)),
            Err(e) => {
                warn!(error = %e, "speech recognition failed");
                Err(e)
            }
        }
    }

    /// True when a non-empty prompt produced no matches.
    pub fn no_results(&self) -> bool {
        !self.is_loading && !self.prompt.is_empty() && self.pager.is_empty()
    }
}

impl<S: RecordSource> HostView for LookupView<S> {
    fn title(&self) -> &str {
        &self.title
    }

    fn pager(&self) -> &TablePager {
        &self.pager
    }

    fn pager_mut(&mut self) -> &mut TablePager {
        &mut self.pager
    }

    fn reload(&mut self) {
        self.search();
    }

    fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn status(&self) -> Option<String> {
        if let Some(err) = &self.last_error {
            return Some(err.clone());
        }
        if self.parent_id.is_none() {
            return Some(format!("No parent record set for {}", self.scope_field));
        }
        self.no_results()
            .then(|| format!("No matches for '{}'", self.prompt))
    }

    fn listen(&mut self) -> Result<(), SourceError> {
        self.listen_and_search().map(|_| ())
    }
}
