/// Scrollable row-selection table
///
/// The table owns its cursor. Screens hand it the keys they do not
/// recognise and read the selected row index back when they need it.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, StatefulWidget, Table, TableState},
};

/// Rows moved by page up/down before the first render
const DEFAULT_PAGE_SIZE: usize = 10;

/// Column definition: header text and fixed width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub width: u16,
}

impl Column {
    pub const fn new(title: &'static str, width: u16) -> Self {
        Self { title, width }
    }
}

#[derive(Debug, Clone)]
pub struct DataTable {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    state: TableState,
    focused: bool,
    /// Number of visible rows (calculated during render)
    visible_rows: usize,
}

impl DataTable {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            state: TableState::default(),
            focused: false,
            visible_rows: DEFAULT_PAGE_SIZE,
        }
    }

    /// Replace all rows and move the cursor to the first one
    pub fn set_rows(&mut self, rows: Vec<Vec<String>>) {
        self.rows = rows;
        self.state = TableState::default();
        if !self.rows.is_empty() {
            self.state.select(Some(0));
        }
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Index of the row under the cursor
    pub fn selected(&self) -> Option<usize> {
        self.state.selected().filter(|&index| index < self.rows.len())
    }

    /// Handle cursor keys; returns whether the key was consumed
    ///
    /// Only a focused table reacts.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if !self.focused || self.rows.is_empty() {
            return false;
        }
        let current = self.selected().unwrap_or(0);
        let last = self.rows.len() - 1;
        let page = self.visible_rows.max(1);

        let target = match (key.code, key.modifiers) {
            (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => current.saturating_sub(1),
            (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => (current + 1).min(last),
            (KeyCode::Home, _) | (KeyCode::Char('g'), KeyModifiers::NONE) => 0,
            (KeyCode::End, _) | (KeyCode::Char('G'), _) => last,
            (KeyCode::PageUp, _) => current.saturating_sub(page),
            (KeyCode::PageDown, _) => (current + page).min(last),
            _ => return false,
        };
        self.state.select(Some(target));
        true
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        // Header takes one line
        self.visible_rows = area.height.saturating_sub(1) as usize;

        let header = Row::new(self.columns.iter().map(|c| Cell::from(c.title)))
            .style(Style::default().add_modifier(Modifier::BOLD));
        let rows = self
            .rows
            .iter()
            .map(|row| Row::new(row.iter().map(|cell| Cell::from(cell.as_str()))));
        let widths = self.columns.iter().map(|c| Constraint::Length(c.width));

        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .row_highlight_style(highlight);

        StatefulWidget::render(table, area, buf, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{buffer_lines, key};

    fn table_with_rows(count: usize) -> DataTable {
        let mut table = DataTable::new(vec![Column::new("School", 10), Column::new("Mascot", 10)]);
        table.set_rows(
            (0..count)
                .map(|i| vec![format!("School {}", i), format!("Mascot {}", i)])
                .collect(),
        );
        table.focus();
        table
    }

    #[test]
    fn test_set_rows_selects_first() {
        let table = table_with_rows(3);
        assert_eq!(table.selected(), Some(0));
    }

    #[test]
    fn test_empty_table_has_no_selection() {
        let mut table = table_with_rows(0);
        assert_eq!(table.selected(), None);
        assert!(!table.handle_key(&key(KeyCode::Down)));
    }

    #[test]
    fn test_cursor_movement_is_clamped() {
        let mut table = table_with_rows(3);

        assert!(table.handle_key(&key(KeyCode::Up)));
        assert_eq!(table.selected(), Some(0));

        table.handle_key(&key(KeyCode::Down));
        table.handle_key(&key(KeyCode::Char('j')));
        table.handle_key(&key(KeyCode::Down));
        assert_eq!(table.selected(), Some(2));

        table.handle_key(&key(KeyCode::Home));
        assert_eq!(table.selected(), Some(0));
        table.handle_key(&key(KeyCode::End));
        assert_eq!(table.selected(), Some(2));
    }

    #[test]
    fn test_page_keys_use_visible_height() {
        let mut table = table_with_rows(30);
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 6));
        table.render(buf.area, &mut buf);

        table.handle_key(&key(KeyCode::PageDown));
        assert_eq!(table.selected(), Some(5));
        table.handle_key(&key(KeyCode::PageUp));
        assert_eq!(table.selected(), Some(0));
    }

    #[test]
    fn test_unfocused_table_ignores_keys() {
        let mut table = table_with_rows(3);
        table.blur();
        assert!(!table.handle_key(&key(KeyCode::Down)));
        assert_eq!(table.selected(), Some(0));
    }

    #[test]
    fn test_unknown_keys_are_not_consumed() {
        let mut table = table_with_rows(3);
        assert!(!table.handle_key(&key(KeyCode::Enter)));
        assert!(!table.handle_key(&key(KeyCode::Char('x'))));
    }

    #[test]
    fn test_render_header_and_rows() {
        let mut table = table_with_rows(2);
        let mut buf = Buffer::empty(Rect::new(0, 0, 21, 3));
        table.render(buf.area, &mut buf);

        let lines = buffer_lines(&buf);
        assert_eq!(lines[0].trim_end(), "School     Mascot");
        assert_eq!(lines[1].trim_end(), "School 0   Mascot 0");
        assert_eq!(lines[2].trim_end(), "School 1   Mascot 1");
    }
}
