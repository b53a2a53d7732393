//! UI-agnostic view model types.
//!
//! These types carry presentation data without depending on a rendering framework.
//! The TUI maps them to ratatui widgets; plain mode prints them as text.

use crate::pager::{SortDirection, TablePager};
use crate::record::{FieldAccess, Record};

/// Upper bound for a computed column width.
const MAX_COLUMN_WIDTH: usize = 40;

/// A displayed column: record field plus header label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub field: String,
    pub label: String,
}

impl Column {
    pub fn new(field: &str, label: &str) -> Self {
        Self {
            field: field.to_string(),
            label: label.to_string(),
        }
    }

    /// Parses `field` or `field:Label`.
    pub fn parse(spec: &str) -> Result<Self, String> {
        let (field, label) = match spec.split_once(':') {
            Some((field, label)) => (field.trim(), label.trim()),
            None => (spec.trim(), spec.trim()),
        };
        if field.is_empty() {
            return Err(format!("empty field name in column '{}'", spec));
        }
        let label = if label.is_empty() { field } else { label };
        Ok(Self::new(field, label))
    }
}

/// Parses a comma-separated column list such as `Name,Phone:Phone Number`.
pub fn parse_columns(spec: &str) -> Result<Vec<Column>, String> {
    let columns = spec
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(Column::parse)
        .collect::<Result<Vec<_>, _>>()?;
    if columns.is_empty() {
        return Err("no columns given".to_string());
    }
    Ok(columns)
}

/// Columns for every field seen in `records`, in first-seen order.
pub fn infer_columns(records: &[Record]) -> Vec<Column> {
    let mut columns: Vec<Column> = Vec::new();
    for record in records {
        for field in record.fields() {
            if !columns.iter().any(|c| c.field == field) {
                columns.push(Column::new(field, field));
            }
        }
    }
    columns
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow {
    /// One-based position in the full (sorted) record set.
    pub position: usize,
    pub cells: Vec<String>,
}

/// Complete table ready to be rendered by any frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableViewModel {
    pub title: String,
    pub headers: Vec<String>,
    pub widths: Vec<u16>,
    pub rows: Vec<ViewRow>,
    pub page: usize,
    pub total_pages: usize,
    pub total_records: usize,
    pub sort_column: Option<usize>,
    pub sort_ascending: bool,
}

impl TableViewModel {
    /// Footer text such as `Page 2/3 · 25 records`.
    pub fn page_label(&self) -> String {
        format!(
            "Page {}/{} · {} records",
            self.page, self.total_pages, self.total_records
        )
    }
}

/// Builds the view model for the pager's current page.
pub fn build_table_view<R: FieldAccess>(
    title: &str,
    columns: &[Column],
    pager: &TablePager<R>,
) -> TableViewModel {
    let view = pager.view();
    let sort_column = view
        .sort
        .and_then(|s| columns.iter().position(|c| c.field == s.key));
    let sort_ascending = view
        .sort
        .is_none_or(|s| s.direction == SortDirection::Ascending);

    let headers: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if Some(i) == sort_column {
                let arrow = if sort_ascending { "▲" } else { "▼" };
                format!("{} {}", c.label, arrow)
            } else {
                c.label.clone()
            }
        })
        .collect();

    let rows: Vec<ViewRow> = view
        .records
        .iter()
        .enumerate()
        .map(|(i, record)| ViewRow {
            position: view.offset() + i + 1,
            cells: columns.iter().map(|c| record.display(&c.field)).collect(),
        })
        .collect();

    let widths = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let widest_cell = rows
                .iter()
                .map(|row| row.cells[i].chars().count())
                .max()
                .unwrap_or(0);
            let width = widest_cell.max(header.chars().count()).min(MAX_COLUMN_WIDTH);
            u16::try_from(width).unwrap_or(u16::MAX)
        })
        .collect();

    let title = match view.sort {
        Some(sort) => format!(
            "{} ({} records, sort: {} {})",
            title,
            view.total_records,
            sort.key,
            sort.direction.as_str()
        ),
        None => format!("{} ({} records)", title, view.total_records),
    };

    TableViewModel {
        title,
        headers,
        widths,
        rows,
        page: view.page,
        total_pages: view.total_pages,
        total_records: view.total_records,
        sort_column,
        sort_ascending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accounts() -> Vec<Record> {
        vec![
            Record::new().with("Name", "Edge").with("City", "Austin"),
            Record::new().with("Name", "Acme").with("Industry", "Energy"),
            Record::new().with("Name", "Burlington").with("City", "Burlington"),
        ]
    }

    #[test]
    fn test_parse_column() {
        assert_eq!(Column::parse("Name"), Ok(Column::new("Name", "Name")));
        assert_eq!(
            Column::parse("BillingCity:Billing City"),
            Ok(Column::new("BillingCity", "Billing City"))
        );
        assert_eq!(Column::parse("Phone:"), Ok(Column::new("Phone", "Phone")));
        assert!(Column::parse(":Label").is_err());
    }

    #[test]
    fn test_parse_columns() {
        let columns = parse_columns("Name, Phone:Phone Number,").expect("columns");
        assert_eq!(
            columns,
            vec![
                Column::new("Name", "Name"),
                Column::new("Phone", "Phone Number")
            ]
        );
        assert!(parse_columns(" , ").is_err());
    }

    #[test]
    fn test_infer_columns() {
        let fields: Vec<String> = infer_columns(&accounts())
            .into_iter()
            .map(|c| c.field)
            .collect();
        assert_eq!(fields, vec!["Name", "City", "Industry"]);
    }

    #[test]
    fn test_build_table_view() {
        let mut pager = TablePager::with_page_size(2);
        pager.load(accounts());
        pager.sort_by("Name", SortDirection::Descending);
        pager.next();

        let columns = vec![Column::new("Name", "Account"), Column::new("City", "City")];
        let vm = build_table_view("Accounts", &columns, &pager);

        assert_eq!(vm.title, "Accounts (3 records, sort: Name desc)");
        assert_eq!(vm.headers, vec!["Account ▼", "City"]);
        assert_eq!(vm.sort_column, Some(0));
        assert!(!vm.sort_ascending);
        assert_eq!(vm.page_label(), "Page 2/2 · 3 records");
        assert_eq!(
            vm.rows,
            vec![ViewRow {
                position: 3,
                cells: vec!["Acme".to_string(), String::new()],
            }]
        );
        assert_eq!(vm.widths, vec![9, 4]);
    }

    #[test]
    fn test_build_empty_view() {
        let pager: TablePager = TablePager::new();
        let vm = build_table_view("Contacts", &[Column::new("Name", "Name")], &pager);
        assert_eq!(vm.title, "Contacts (0 records)");
        assert!(vm.rows.is_empty());
        assert_eq!(vm.sort_column, None);
        assert_eq!(vm.widths, vec![4]);
    }
}
