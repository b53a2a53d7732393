//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};

use super::state::GridState;
use super::style::Styles;
use crate::view::HostView;
use crate::view::common::{TableViewModel, build_table_view};

const KEY_HINTS: &str =
    "←/→ page  g/G first/last  ↑/↓ select  enter open  bksp back  s sort  r reverse  +/- size  u reload  m voice  q quit";

/// Main render function.
pub fn render(frame: &mut Frame, view: &dyn HostView, state: &GridState) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Min(3),    // Table
        Constraint::Length(1), // Page footer + status
        Constraint::Length(1), // Key hints
    ])
    .split(area);

    let vm = build_table_view(view.title(), &state.columns, view.pager());
    render_table(frame, chunks[0], &vm, state.selected);
    render_footer(frame, chunks[1], &vm, view, state);
    frame.render_widget(Paragraph::new(KEY_HINTS).style(Styles::dim()), chunks[2]);
}

fn render_table(frame: &mut Frame, area: Rect, vm: &TableViewModel, selected: usize) {
    let block = Block::default()
        .title(vm.title.clone())
        .borders(Borders::ALL)
        .style(Styles::default());

    if vm.headers.is_empty() {
        frame.render_widget(Paragraph::new("No columns to display").block(block), area);
        return;
    }

    let position_width = vm.rows.last().map_or(1, |r| r.position.to_string().len());
    let mut widths = vec![Constraint::Length(
        u16::try_from(position_width).unwrap_or(u16::MAX),
    )];
    widths.extend(vm.widths.iter().map(|&w| Constraint::Length(w)));

    let header = Row::new(
        std::iter::once(String::from("#"))
            .chain(vm.headers.iter().cloned())
            .collect::<Vec<_>>(),
    )
    .style(Styles::table_header());

    let rows: Vec<Row> = vm
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![Span::styled(row.position.to_string(), Styles::dim())];
            cells.extend(row.cells.iter().map(|c| Span::raw(c.clone())));
            Row::new(cells)
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(2)
        .row_highlight_style(Styles::selected());

    let selected = (!vm.rows.is_empty()).then(|| selected.min(vm.rows.len() - 1));
    let mut table_state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn render_footer(
    frame: &mut Frame,
    area: Rect,
    vm: &TableViewModel,
    view: &dyn HostView,
    state: &GridState,
) {
    let mut spans = vec![Span::raw(format!(
        "{}  size {}",
        vm.page_label(),
        view.pager().page_size()
    ))];

    if let Some(message) = &state.message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(message.clone(), Styles::error()));
    } else if let Some(status) = view.status() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(status, Styles::status()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
