//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::GridState;
use crate::pager::SortDirection;
use crate::view::HostView;
use crate::view::common::infer_columns;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Re-run the view's fetch or search.
    Reload,
    /// Capture voice input.
    Listen,
}

/// Handles a key press. Pager navigation and drill-down are applied directly to the view.
pub fn handle_key(view: &mut dyn HostView, state: &mut GridState, key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    state.message = None;
    let pager = view.pager_mut();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return KeyAction::Quit,
        KeyCode::Char('u') | KeyCode::F(5) => return KeyAction::Reload,
        KeyCode::Char('m') => return KeyAction::Listen,
        KeyCode::Up | KeyCode::Char('k') => state.select_up(),
        KeyCode::Down | KeyCode::Char('j') => state.select_down(pager.visible_page().len()),
        KeyCode::Enter => {
            if view.open(state.selected) {
                state.enter_detail(infer_columns(view.pager().records()));
            }
        }
        KeyCode::Backspace => {
            if view.back() {
                state.leave_detail();
            }
        }
        KeyCode::Right | KeyCode::Char('n') | KeyCode::PageDown => {
            pager.next();
        }
        KeyCode::Left | KeyCode::Char('p') | KeyCode::PageUp => {
            pager.previous();
        }
        KeyCode::Home | KeyCode::Char('g') => {
            pager.first();
        }
        KeyCode::End | KeyCode::Char('G') => {
            pager.last();
        }
        KeyCode::Char('+') => {
            let size = pager.page_size();
            pager.set_page_size(size + 1);
        }
        KeyCode::Char('-') => {
            let size = pager.page_size();
            if size > 1 {
                pager.set_page_size(size - 1);
            }
        }
        KeyCode::Char('s') => cycle_sort_column(view, state),
        KeyCode::Char('r') => toggle_sort_direction(view),
        _ => {}
    }
    state.clamp_selection(view.pager().visible_page().len());
    KeyAction::None
}

/// Sorts by the next column, keeping the current direction.
fn cycle_sort_column(view: &mut dyn HostView, state: &GridState) {
    let columns = &state.columns;
    if columns.is_empty() {
        return;
    }
    let pager = view.pager_mut();
    let (next, direction) = match pager.sort() {
        Some(sort) => (
            columns
                .iter()
                .position(|c| c.field == sort.key)
                .map_or(0, |i| (i + 1) % columns.len()),
            sort.direction,
        ),
        None => (0, SortDirection::Ascending),
    };
    pager.sort_by(&columns[next].field, direction);
}

/// Flips the direction of the active sort. No-op when unsorted.
fn toggle_sort_direction(view: &mut dyn HostView) {
    let pager = view.pager_mut();
    let Some((key, direction)) = pager
        .sort()
        .map(|sort| (sort.key.clone(), sort.direction.toggled()))
    else {
        return;
    };
    pager.sort_by(&key, direction);
}
