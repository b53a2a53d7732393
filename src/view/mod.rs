//! Host views and UI-agnostic view models.
//!
//! A host view sequences fetch → [`TablePager::load`] → render. Each view owns one
//! record source and one pager; frontends talk to them through [`HostView`].

pub mod common;
mod detail;
mod list;
mod lookup;
pub mod plain;
mod search;

pub use detail::{DEFAULT_KEY_FIELD, MasterDetailView};
pub use list::ListView;
pub use lookup::{LookupView, Transcriber};
pub use search::SearchView;

use crate::pager::TablePager;
use crate::source::SourceError;

/// Common surface of every record view, used by the TUI.
pub trait HostView {
    /// Title shown above the table.
    fn title(&self) -> &str;

    fn pager(&self) -> &TablePager;

    fn pager_mut(&mut self) -> &mut TablePager;

    /// Re-issues the view's fetch or search and loads the result.
    fn reload(&mut self);

    /// Message of the last failed fetch, cleared by the next successful one.
    fn last_error(&self) -> Option<&str>;

    /// Short status line: last error or an empty-result notice.
    fn status(&self) -> Option<String>;

    /// Drills into the row at `index` of the visible page.
    ///
    /// Returns false when the view has no drill-down or nothing was opened.
    fn open(&mut self, _index: usize) -> bool {
        false
    }

    /// Leaves an open drill-down. Returns false when none was open.
    fn back(&mut self) -> bool {
        false
    }

    /// Captures voice input and searches with it.
    fn listen(&mut self) -> Result<(), SourceError> {
        Err(SourceError::Unsupported(
            "voice input is not available in this view".to_string(),
        ))
    }
}
