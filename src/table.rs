//! Generic sortable/filterable/paginated table over an in-memory
//! collection. All data is fetched in full and handled client-side, which
//! bounds this to institution-scale lists.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::SortDirection;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Column descriptor: a stable id, a header label, and a renderer from row
/// to displayed string.
pub struct Column<T> {
    id: &'static str,
    header: &'static str,
    render: Box<dyn Fn(&T) -> String + Send + Sync>,
}

impl<T> Column<T> {
    pub fn new(
        id: &'static str,
        header: &'static str,
        render: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            id,
            header,
            render: Box::new(render),
        }
    }
}

pub struct DataTable<T> {
    columns: Vec<Column<T>>,
    rows: Vec<T>,
    sorting: Option<(usize, SortDirection)>,
    filter: String,
    hidden: HashSet<&'static str>,
    page: usize,
    page_size: usize,
}

impl<T> DataTable<T> {
    pub fn new(columns: Vec<Column<T>>, rows: Vec<T>) -> Self {
        Self {
            columns,
            rows,
            sorting: None,
            filter: String::new(),
            hidden: HashSet::new(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Global filter. Empty text restores the full row set. Resets to the
    /// first page since the filtered set may be smaller.
    pub fn set_filter(&mut self, text: &str) {
        self.filter = text.to_string();
        self.page = 0;
    }

    /// Sorts by the given column, toggling ascending/descending when it is
    /// already the sort column. Returns false for an unknown id.
    pub fn toggle_sort(&mut self, column_id: &str) -> bool {
        let Some(index) = self.columns.iter().position(|c| c.id == column_id) else {
            return false;
        };
        self.sorting = match self.sorting {
            Some((current, SortDirection::Asc)) if current == index => {
                Some((index, SortDirection::Desc))
            }
            _ => Some((index, SortDirection::Asc)),
        };
        true
    }

    /// Shows or hides a column. Returns false for an unknown id.
    pub fn toggle_column(&mut self, column_id: &str) -> bool {
        let Some(column) = self.columns.iter().find(|c| c.id == column_id) else {
            return false;
        };
        if !self.hidden.remove(column.id) {
            self.hidden.insert(column.id);
        }
        true
    }

    pub fn next_page(&mut self) {
        if self.page + 1 < self.page_count() {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn column_ids(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.id).collect()
    }

    fn visible_columns(&self) -> Vec<&Column<T>> {
        self.columns
            .iter()
            .filter(|c| !self.hidden.contains(c.id))
            .collect()
    }

    /// Indices of rows surviving the filter, in display order. The match
    /// runs on rendered cell text of visible columns, so search finds what
    /// the user sees, not hidden raw identifiers.
    fn row_order(&self) -> Vec<usize> {
        let visible = self.visible_columns();
        let needle = self.filter.to_lowercase();

        let mut order: Vec<usize> = (0..self.rows.len())
            .filter(|&i| {
                needle.is_empty()
                    || visible.iter().any(|column| {
                        (column.render)(&self.rows[i]).to_lowercase().contains(&needle)
                    })
            })
            .collect();

        if let Some((index, direction)) = self.sorting {
            let render = &self.columns[index].render;
            order.sort_by(|&a, &b| {
                let ordering = compare_cells(&render(&self.rows[a]), &render(&self.rows[b]));
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }
        order
    }

    pub fn page_count(&self) -> usize {
        self.row_order().len().div_ceil(self.page_size).max(1)
    }

    pub fn visible_rows(&self) -> Vec<&T> {
        let order = self.row_order();
        let page = self.page.min(order.len().div_ceil(self.page_size).max(1) - 1);
        order
            .iter()
            .skip(page * self.page_size)
            .take(self.page_size)
            .map(|&i| &self.rows[i])
            .collect()
    }

    pub fn render_text(&self) -> String {
        let visible = self.visible_columns();
        let rows = self.visible_rows();

        if rows.is_empty() {
            return "No results.".to_string();
        }

        let mut cells: Vec<Vec<String>> = vec![
            visible
                .iter()
                .map(|c| c.header.to_string())
                .collect(),
        ];
        for row in &rows {
            cells.push(visible.iter().map(|c| (c.render)(*row)).collect());
        }

        let widths: Vec<usize> = (0..visible.len())
            .map(|col| cells.iter().map(|row| row[col].chars().count()).max().unwrap_or(0))
            .collect();

        let mut out = String::new();
        for (line, row) in cells.iter().enumerate() {
            let rendered: Vec<String> = row
                .iter()
                .zip(widths.iter().copied())
                .map(|(cell, width)| format!("{:<width$}", cell))
                .collect();
            out.push_str(rendered.join("  ").trim_end());
            out.push('\n');
            if line == 0 {
                let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
                out.push_str(&rule.join("  "));
                out.push('\n');
            }
        }

        let total = self.row_order().len();
        let page = self.page.min(self.page_count() - 1);
        out.push_str(&format!(
            "Page {} of {} ({} rows)\n",
            page + 1,
            self.page_count(),
            total
        ));
        out
    }
}

/// Numeric cells sort numerically, everything else case-insensitively.
fn compare_cells(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

/// Object-safe view of a table, letting the shell drive whichever page's
/// table is current without knowing its row type.
pub trait TableView: Send {
    fn set_filter(&mut self, text: &str);
    fn toggle_sort(&mut self, column_id: &str) -> bool;
    fn toggle_column(&mut self, column_id: &str) -> bool;
    fn next_page(&mut self);
    fn prev_page(&mut self);
    fn column_ids(&self) -> Vec<&'static str>;
    fn render_text(&self) -> String;
}

impl<T: Send> TableView for DataTable<T> {
    fn set_filter(&mut self, text: &str) {
        DataTable::set_filter(self, text)
    }

    fn toggle_sort(&mut self, column_id: &str) -> bool {
        DataTable::toggle_sort(self, column_id)
    }

    fn toggle_column(&mut self, column_id: &str) -> bool {
        DataTable::toggle_column(self, column_id)
    }

    fn next_page(&mut self) {
        DataTable::next_page(self)
    }

    fn prev_page(&mut self) {
        DataTable::prev_page(self)
    }

    fn column_ids(&self) -> Vec<&'static str> {
        DataTable::column_ids(self)
    }

    fn render_text(&self) -> String {
        DataTable::render_text(self)
    }
}
