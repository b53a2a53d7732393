//! Full-list view: fetch everything, page through it.

use tracing::{debug, error};

use super::HostView;
use crate::pager::{PageView, TablePager};
use crate::record::{Record, number_records};
use crate::source::RecordSource;

/// Lists every record a source returns.
pub struct ListView<S> {
    title: String,
    source: S,
    pager: TablePager,
    serial_field: Option<String>,
    is_loading: bool,
    last_error: Option<String>,
}

impl<S: RecordSource> ListView<S> {
    /// Creates the view. Nothing is fetched until [`ListView::refresh`].
    pub fn new(title: &str, source: S) -> Self {
        Self {
            title: title.to_string(),
            source,
            pager: TablePager::new(),
            serial_field: None,
            is_loading: true,
            last_error: None,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.pager.set_page_size(page_size);
        self
    }

    /// Numbers records 1..N in fetch order under `field` on every refresh.
    pub fn with_serial_numbers(mut self, field: &str) -> Self {
        self.serial_field = Some(field.to_string());
        self
    }

    /// Fetches the full record set and loads it.
    ///
    /// A failed fetch is logged and leaves the view with an empty record set.
    pub fn refresh(&mut self) -> PageView<'_, Record> {
        self.is_loading = true;
        let records = match self.source.fetch_all() {
            Ok(mut records) => {
                if let Some(field) = &self.serial_field {
                    number_records(&mut records, field);
                }
                debug!(view = %self.title, count = records.len(), "loaded records");
                self.last_error = None;
                records
            }
            Err(e) => {
                error!(view = %self.title, error = %e, "failed to fetch records");
                self.last_error = Some(e.to_string());
                Vec::new()
            }
        };
        self.is_loading = false;
        self.pager.load(records)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// True once a fetch finished and produced nothing.
    pub fn has_no_data(&self) -> bool {
        !self.is_loading && self.pager.is_empty()
    }
}

impl<S: RecordSource> HostView for ListView<S> {
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
        self.refresh();
    }

    fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn status(&self) -> Option<String> {
        if let Some(err) = &self.last_error {
            return Some(err.clone());
        }
        self.has_no_data().then(|| "No records found".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pager::SortDirection;
    use crate::record::{FieldAccess, SERIAL_FIELD};
    use crate::source::{MemorySource, SourceError};

    fn invoices(count: usize) -> Vec<Record> {
        (0..count)
            .map(|i| Record::new().with("Name", format!("INV-{:03}", i)))
            .collect()
    }

    #[test]
    fn test_refresh_loads_first_page() {
        let mut view = ListView::new("Invoices", MemorySource::new(invoices(25)));
        assert!(view.is_loading());
        assert!(!view.has_no_data());

        let page = view.refresh();
        assert_eq!(page.records.len(), 10);
        assert_eq!(page.total_pages, 3);
        assert!(!view.is_loading());
        assert_eq!(view.status(), None);
    }

    #[test]
    fn test_refresh_failure_loads_empty() {
        let mut view = ListView::new(
            "Invoice Lines",
            MemorySource::failing(SourceError::Backend("insufficient access".to_string())),
        );
        let page = view.refresh();
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(
            view.last_error(),
            Some("Backend error: insufficient access")
        );
        assert_eq!(
            view.status().as_deref(),
            Some("Backend error: insufficient access")
        );
    }

    #[test]
    fn test_refresh_resets_page_and_sort() {
        let mut view = ListView::new("Invoices", MemorySource::new(invoices(25)));
        view.refresh();
        view.pager_mut().sort_by("Name", SortDirection::Descending);
        view.pager_mut().last();

        view.source_mut().set_records(invoices(12));
        let page = view.refresh();
        assert_eq!(page.page, 1);
        assert!(page.sort.is_none());
        assert_eq!(page.total_records, 12);
        assert_eq!(view.source().calls(), 2);
    }

    #[test]
    fn test_serial_numbers_follow_fetch_order() {
        let mut view = ListView::new("Invoices", MemorySource::new(invoices(3)))
            .with_serial_numbers(SERIAL_FIELD)
            .with_page_size(2);
        view.refresh();

        let page = view.pager_mut().sort_by("Name", SortDirection::Descending);
        let serials: Vec<String> = page.records.iter().map(|r| r.display(SERIAL_FIELD)).collect();
        assert_eq!(serials, vec!["3", "2"]);
    }

    #[test]
    fn test_empty_result_status() {
        let mut view = ListView::new("Accounts", MemorySource::new(Vec::new()));
        view.reload();
        assert!(view.has_no_data());
        assert_eq!(view.status().as_deref(), Some("No records found"));
    }
}
