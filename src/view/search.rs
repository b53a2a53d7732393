//! Keyword search view.

use tracing::{debug, error};

use super::HostView;
use crate::pager::{PageView, TablePager};
use crate::record::Record;
use crate::source::{Query, RecordSource};

/// Re-runs a keyword search on every keyword change.
pub struct SearchView<S> {
    title: String,
    source: S,
    keyword: String,
    pager: TablePager,
    is_loading: bool,
    last_error: Option<String>,
}

impl<S: RecordSource> SearchView<S> {
    pub fn new(title: &str, source: S) -> Self {
        Self {
            title: title.to_string(),
            source,
            keyword: String::new(),
            pager: TablePager::new(),
            is_loading: false,
            last_error: None,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.pager.set_page_size(page_size);
        self
    }

    /// Sets the initial keyword without searching.
    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = keyword.to_string();
        self
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Sets the keyword and searches immediately.
    pub fn set_keyword(&mut self, keyword: &str) -> PageView<'_, Record> {
        self.keyword = keyword.to_string();
        self.search()
    }

    /// Runs the search for the current keyword. Failures load an empty result.
    pub fn search(&mut self) -> PageView<'_, Record> {
        self.is_loading = true;
        let records = match self.source.search(&Query::keyword(&self.keyword)) {
            Ok(records) => {
                debug!(keyword = %self.keyword, count = records.len(), "search finished");
                self.last_error = None;
                records
            }
            Err(e) => {
                error!(keyword = %self.keyword, error = %e, "search failed");
                self.last_error = Some(e.to_string());
                Vec::new()
            }
        };
        self.is_loading = false;
        self.pager.load(records)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// True when a non-empty keyword produced no matches.
    pub fn has_no_results(&self) -> bool {
        !self.is_loading && !self.keyword.is_empty() && self.pager.is_empty()
    }
}

impl<S: RecordSource> HostView for SearchView<S> {
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
        self.has_no_results()
            .then(|| format!("No matches for '{}'", self.keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FieldAccess;
    use crate::source::{MemorySource, SourceError};

    fn accounts() -> MemorySource {
        MemorySource::new(vec![
            Record::new().with("Name", "Edge Communications").with("Industry", "Electronics"),
            Record::new().with("Name", "Burlington Textiles").with("Industry", "Apparel"),
            Record::new().with("Name", "Edge Outfitters").with("Industry", "Apparel"),
        ])
    }

    #[test]
    fn test_set_keyword_searches() {
        let mut view = SearchView::new("Accounts", accounts());
        let page = view.set_keyword("edge");
        let names: Vec<String> = page.records.iter().map(|r| r.display("Name")).collect();
        assert_eq!(names, vec!["Edge Communications", "Edge Outfitters"]);
        assert!(!view.has_no_results());
        assert_eq!(view.keyword(), "edge");
    }

    #[test]
    fn test_no_results() {
        let mut view = SearchView::new("Accounts", accounts());
        view.set_keyword("zzz");
        assert!(view.has_no_results());
        assert_eq!(view.status().as_deref(), Some("No matches for 'zzz'"));
    }

    #[test]
    fn test_empty_keyword_is_not_a_miss() {
        let mut view = SearchView::new("Accounts", MemorySource::new(Vec::new()));
        view.reload();
        assert!(!view.has_no_results());
        assert_eq!(view.status(), None);
    }

    #[test]
    fn test_search_failure_clears_rows() {
        let mut view = SearchView::new(
            "Accounts",
            MemorySource::failing(SourceError::Backend("query timeout".to_string())),
        );
        let page = view.set_keyword("edge");
        assert!(page.is_empty());
        assert_eq!(view.status().as_deref(), Some("Backend error: query timeout"));
        assert!(!view.is_loading());
    }

    #[test]
    fn test_new_search_resets_page() {
        let records = (0..30)
            .map(|i| Record::new().with("Name", format!("Edge {}", i)))
            .collect();
        let mut view = SearchView::new("Accounts", MemorySource::new(records)).with_page_size(5);
        view.set_keyword("edge");
        view.pager_mut().go_to(4);

        let page = view.set_keyword("edge 1");
        assert_eq!(page.page, 1);
        assert_eq!(page.total_records, 11);
    }
}
