//! Plain-text rendering of a table view model.

use super::common::TableViewModel;

/// Renders the table as space-aligned text with a title and page footer.
pub fn render_plain(vm: &TableViewModel) -> String {
    let mut out = String::new();
    out.push_str(&vm.title);
    out.push('\n');

    let widths: Vec<usize> = vm.widths.iter().map(|&w| usize::from(w)).collect();
    out.push_str(&format_line(&vm.headers, &widths));
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(&format_line(&rule, &widths));
    out.push('\n');

    if vm.rows.is_empty() {
        out.push_str("(no records)\n");
    }
    for row in &vm.rows {
        out.push_str(&format_line(&row.cells, &widths));
        out.push('\n');
    }

    out.push_str(&vm.page_label());
    out.push('\n');
    out
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| fit(cell, width))
        .collect();
    padded.join("  ").trim_end().to_string()
}

/// Pads or truncates `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        format!("{}{}", text, " ".repeat(width - len))
    } else if width == 0 {
        String::new()
    } else {
        let mut cut: String = text.chars().take(width - 1).collect();
        cut.push('…');
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::common::ViewRow;

    fn sample() -> TableViewModel {
        TableViewModel {
            title: "Accounts (2 records)".to_string(),
            headers: vec!["Name".to_string(), "City".to_string()],
            widths: vec![6, 4],
            rows: vec![
                ViewRow {
                    position: 1,
                    cells: vec!["Acme".to_string(), "Oslo".to_string()],
                },
                ViewRow {
                    position: 2,
                    cells: vec!["Edge Communications".to_string(), String::new()],
                },
            ],
            page: 1,
            total_pages: 1,
            total_records: 2,
            sort_column: None,
            sort_ascending: true,
        }
    }

    #[test]
    fn test_render_plain() {
        let text = render_plain(&sample());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Accounts (2 records)",
                "Name    City",
                "------  ----",
                "Acme    Oslo",
                "Edge …",
                "Page 1/1 · 2 records",
            ]
        );
    }

    #[test]
    fn test_render_plain_empty() {
        let mut vm = sample();
        vm.rows.clear();
        assert!(render_plain(&vm).contains("(no records)\n"));
    }
}
