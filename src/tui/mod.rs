//! Terminal frontend for host views.
//!
//! Renders the current page of a [`crate::view::HostView`] as a table and maps
//! keys to pager operations.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;

pub use app::App;
pub use input::{KeyAction, handle_key};
pub use render::render;
pub use state::GridState;
