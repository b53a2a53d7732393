//! Master/detail drill-down: a parent table plus the child rows of one parent.
//!
//! Each side has its own pager. Opening a parent replaces the detail rows; going
//! back shows the parent table on the page and sort it was left at.

use tracing::{debug, error, warn};

use super::HostView;
use crate::pager::{PageView, TablePager};
use crate::record::{FieldAccess, Record, number_records};
use crate::source::{Query, RecordSource};

/// Parent field holding the id children link to, unless configured otherwise.
pub const DEFAULT_KEY_FIELD: &str = "Id";

/// Parent field shown in the detail title when present.
const LABEL_FIELD: &str = "Name";

/// Parent list (e.g. invoices) with a drill-down into one parent's children
/// (e.g. its line items).
pub struct MasterDetailView<M, D> {
    title: String,
    master_source: M,
    detail_source: D,
    link_field: String,
    key_field: String,
    serial_field: Option<String>,
    master: TablePager,
    detail: TablePager,
    selected: Option<Record>,
    detail_title: String,
    is_loading: bool,
    master_error: Option<String>,
    detail_error: Option<String>,
}

impl<M: RecordSource, D: RecordSource> MasterDetailView<M, D> {
    /// `link_field` is the child field holding the parent's id.
    pub fn new(title: &str, master_source: M, detail_source: D, link_field: &str) -> Self {
        Self {
            title: title.to_string(),
            master_source,
            detail_source,
            link_field: link_field.to_string(),
            key_field: DEFAULT_KEY_FIELD.to_string(),
            serial_field: None,
            master: TablePager::new(),
            detail: TablePager::new(),
            selected: None,
            detail_title: String::new(),
            is_loading: true,
            master_error: None,
            detail_error: None,
        }
    }

    /// Parent field whose value the children's link field refers to.
    pub fn with_key_field(mut self, field: &str) -> Self {
        self.key_field = field.to_string();
        self
    }

    /// Sets the page size of both tables.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.master.set_page_size(page_size);
        self.detail.set_page_size(page_size);
        self
    }

    /// Numbers parents and children 1..N in fetch order under `field`.
    pub fn with_serial_numbers(mut self, field: &str) -> Self {
        self.serial_field = Some(field.to_string());
        self
    }

    /// Fetches every parent and loads the master table. Closes an open detail.
    pub fn refresh(&mut self) -> PageView<'_, Record> {
        self.selected = None;
        self.detail_error = None;
        self.is_loading = true;
        let records = match self.master_source.fetch_all() {
            Ok(mut records) => {
                if let Some(field) = &self.serial_field {
                    number_records(&mut records, field);
                }
                debug!(view = %self.title, count = records.len(), "loaded parent records");
                self.master_error = None;
                records
            }
            Err(e) => {
                error!(view = %self.title, error = %e, "failed to fetch parent records");
                self.master_error = Some(e.to_string());
                Vec::new()
            }
        };
        self.is_loading = false;
        self.master.load(records)
    }

    /// Opens the parent at `index` of the visible master page and loads its children.
    ///
    /// Returns `None` when no row is at `index` or the row has no id.
    pub fn open(&mut self, index: usize) -> Option<PageView<'_, Record>> {
        let parent = self.master.visible_page().get(index)?.clone();
        let id = parent.display(&self.key_field);
        if id.is_empty() {
            warn!(field = %self.key_field, "selected row has no id; not opened");
            return None;
        }

        let label = match parent.display(LABEL_FIELD) {
            name if name.is_empty() => id,
            name => name,
        };
        self.detail_title = format!("{} › {}", self.title, label);
        self.selected = Some(parent);
        Some(self.load_detail())
    }

    /// Re-runs the children fetch for the open parent.
    fn load_detail(&mut self) -> PageView<'_, Record> {
        let Some(id) = self.selected.as_ref().map(|r| r.display(&self.key_field)) else {
            return self.detail.view();
        };

        self.is_loading = true;
        let query = Query::scoped("", &self.link_field, &id);
        let records = match self.detail_source.search(&query) {
            Ok(mut records) => {
                if let Some(field) = &self.serial_field {
                    number_records(&mut records, field);
                }
                debug!(parent = %id, count = records.len(), "loaded child records");
                self.detail_error = None;
                records
            }
            Err(e) => {
                error!(parent = %id, error = %e, "failed to fetch child records");
                self.detail_error = Some(e.to_string());
                Vec::new()
            }
        };
        self.is_loading = false;
        self.detail.load(records)
    }

    /// Closes the detail and returns the master table as it was left.
    pub fn back(&mut self) -> PageView<'_, Record> {
        if let Some(parent) = self.selected.take() {
            debug!(parent = %parent.display(&self.key_field), "closed detail");
        }
        self.detail_error = None;
        self.master.view()
    }

    pub fn is_detail_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Parent whose children are shown, if any.
    pub fn selected(&self) -> Option<&Record> {
        self.selected.as_ref()
    }

    pub fn master(&self) -> &TablePager {
        &self.master
    }

    pub fn detail(&self) -> &TablePager {
        &self.detail
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }
}

impl<M: RecordSource, D: RecordSource> HostView for MasterDetailView<M, D> {
    fn title(&self) -> &str {
        if self.is_detail_open() {
            &self.detail_title
        } else {
            &self.title
        }
    }

    fn pager(&self) -> &TablePager {
        if self.is_detail_open() {
            &self.detail
        } else {
            &self.master
        }
    }

    fn pager_mut(&mut self) -> &mut TablePager {
        if self.is_detail_open() {
            &mut self.detail
        } else {
            &mut self.master
        }
    }

    fn reload(&mut self) {
        if self.is_detail_open() {
            self.load_detail();
        } else {
            self.refresh();
        }
    }

    fn last_error(&self) -> Option<&str> {
        if self.is_detail_open() {
            self.detail_error.as_deref()
        } else {
            self.master_error.as_deref()
        }
    }

    fn status(&self) -> Option<String> {
        if let Some(err) = self.last_error() {
            return Some(err.to_string());
        }
        if self.is_loading || !self.pager().is_empty() {
            return None;
        }
        if self.is_detail_open() {
            Some("No related records".to_string())
        } else {
            Some("No records found".to_string())
        }
    }

    fn open(&mut self, index: usize) -> bool {
        !self.is_detail_open() && self.open(index).is_some()
    }

    fn back(&mut self) -> bool {
        let was_open = self.is_detail_open();
        self.back();
        was_open
    }
}
