//! Frontend state that lives outside the host view.

use crate::view::common::Column;

/// Columns to show, row selection and the transient status message.
#[derive(Debug, Default)]
pub struct GridState {
    pub columns: Vec<Column>,
    /// Selected row within the visible page. Clamped on every key and render.
    pub selected: usize,
    /// Message from the last key action (e.g. an unsupported capability).
    pub message: Option<String>,
    /// Master columns and selection while a drill-down is open.
    master: Option<(Vec<Column>, usize)>,
}

impl GridState {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self, row_count: usize) {
        self.selected = self.selected.saturating_add(1);
        self.clamp_selection(row_count);
    }

    pub fn clamp_selection(&mut self, row_count: usize) {
        self.selected = self.selected.min(row_count.saturating_sub(1));
    }

    /// Switches to the drill-down's columns, keeping the master's for [`Self::leave_detail`].
    pub fn enter_detail(&mut self, columns: Vec<Column>) {
        let master = std::mem::replace(&mut self.columns, columns);
        self.master = Some((master, self.selected));
        self.selected = 0;
    }

    /// Restores the master's columns and selection.
    pub fn leave_detail(&mut self) {
        if let Some((columns, selected)) = self.master.take() {
            self.columns = columns;
            self.selected = selected;
        }
    }

    pub fn in_detail(&self) -> bool {
        self.master.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_clamps() {
        let mut state = GridState::default();
        state.select_up();
        assert_eq!(state.selected, 0);

        for _ in 0..5 {
            state.select_down(3);
        }
        assert_eq!(state.selected, 2);

        state.clamp_selection(0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_detail_columns_round_trip() {
        let mut state = GridState::new(vec![Column::new("Name", "Invoice")]);
        state.selected = 4;

        state.enter_detail(vec![Column::new("Product", "Product")]);
        assert!(state.in_detail());
        assert_eq!(state.selected, 0);
        assert_eq!(state.columns[0].field, "Product");

        state.leave_detail();
        assert!(!state.in_detail());
        assert_eq!(state.selected, 4);
        assert_eq!(state.columns, vec![Column::new("Name", "Invoice")]);
    }
}
