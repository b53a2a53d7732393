//! recordgrid - client-side record tables.
//!
//! Fetches record sets from a source and pages/sorts them in memory:
//! - `pager` - windowed, sortable view over one record set
//! - `source` - fetch collaborators (JSON files, in-memory fixtures)
//! - `view` - host views (list, keyword search, scoped lookup) and view models
//! - `tui` - interactive terminal table

pub mod pager;
pub mod record;
pub mod source;
pub mod tui;
pub mod view;
