//! Entry list widget: renders title + description rows with a selection bar.
//!
//! Each entry takes three lines (title, description, spacing) so the list
//! reads as a column of small cards.

use crate::styles::{Theme, SELECTION_BAR};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

/// Height of one entry in rows
pub const ENTRY_HEIGHT: u16 = 3;

/// One row of the list
#[derive(Debug, Clone, Copy)]
pub struct EntryRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

/// Renders one page of entries
#[derive(Debug, Clone)]
pub struct EntryList<'a> {
    rows: Vec<EntryRow<'a>>,
    /// Index into `rows` of the selected entry
    selected: Option<usize>,
    theme: &'a Theme,
}

impl<'a> EntryList<'a> {
    /// Create a new list with rows
    pub fn new(rows: Vec<EntryRow<'a>>, theme: &'a Theme) -> Self {
        Self {
            rows,
            selected: None,
            theme,
        }
    }

    /// Set the selected row
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// Number of entries that fit in `height` rows (at least one)
    pub fn capacity(height: u16) -> usize {
        (height / ENTRY_HEIGHT).max(1) as usize
    }
}

impl Widget for EntryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = self.theme;

        for (i, row) in self.rows.iter().enumerate() {
            let y = area.y + (i as u16) * ENTRY_HEIGHT;

            // Stop if we've run out of space
            if y + 2 > area.y + area.height {
                break;
            }

            let is_selected = self.selected == Some(i);
            let (title_style, description_style) = if is_selected {
                (t.selected_title_style(), t.selected_description_style())
            } else {
                (t.text_style(), t.muted_style())
            };

            let gutter = if is_selected {
                Span::styled(format!("{} ", SELECTION_BAR), t.border_focused_style())
            } else {
                Span::raw("  ")
            };

            Line::from(vec![gutter.clone(), Span::styled(row.title, title_style)])
                .render(Rect::new(area.x, y, area.width, 1), buf);
            Line::from(vec![gutter, Span::styled(row.description, description_style)])
                .render(Rect::new(area.x, y + 1, area.width, 1), buf);
        }
    }
}
