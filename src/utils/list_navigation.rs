//! Cursor movement on top of ratatui's `ListState`.
//!
//! Every movement clamps to `[0, total - 1]` and never wraps. An empty list
//! has no selection.

use ratatui::widgets::ListState;

/// Extension trait for `ListState` cursor movement.
pub trait ListStateExt {
    /// Move the cursor `delta` rows (negative is up).
    fn step(&mut self, delta: isize, total_items: usize);

    /// Move the cursor `pages` pages of `page_size` rows. A page is at least one row.
    fn step_pages(&mut self, pages: isize, page_size: usize, total_items: usize);

    /// Put the cursor on the first row, if any.
    fn cursor_first(&mut self, total_items: usize);

    /// Put the cursor on the last row, if any.
    fn cursor_last(&mut self, total_items: usize);

    /// Pull the cursor back inside the list, or clear it for an empty list.
    fn clamp_to(&mut self, total_items: usize);
}

impl ListStateExt for ListState {
    fn step(&mut self, delta: isize, total_items: usize) {
        if total_items == 0 {
            self.select(None);
            return;
        }
        let current = self.selected().unwrap_or(0);
        let target = current
            .saturating_add_signed(delta)
            .min(total_items - 1);
        self.select(Some(target));
    }

    fn step_pages(&mut self, pages: isize, page_size: usize, total_items: usize) {
        let rows = isize::try_from(page_size.max(1)).unwrap_or(isize::MAX);
        self.step(pages.saturating_mul(rows), total_items);
    }

    fn cursor_first(&mut self, total_items: usize) {
        self.select((total_items > 0).then_some(0));
    }

    fn cursor_last(&mut self, total_items: usize) {
        self.select(total_items.checked_sub(1));
    }

    fn clamp_to(&mut self, total_items: usize) {
        match (self.selected(), total_items) {
            (_, 0) => self.select(None),
            (Some(current), _) => self.select(Some(current.min(total_items - 1))),
            (None, _) => self.select(Some(0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(index: usize) -> ListState {
        let mut state = ListState::default();
        state.select(Some(index));
        state
    }

    #[test]
    fn test_step_clamps_without_wrapping() {
        let mut state = at(0);
        state.step(-1, 5);
        assert_eq!(state.selected(), Some(0));

        state.step(3, 5);
        assert_eq!(state.selected(), Some(3));
        state.step(3, 5);
        assert_eq!(state.selected(), Some(4));
    }

    #[test]
    fn test_step_pages() {
        let mut state = at(0);
        state.step_pages(1, 3, 10);
        assert_eq!(state.selected(), Some(3));
        state.step_pages(-2, 3, 10);
        assert_eq!(state.selected(), Some(0));

        // A zero page size still moves one row
        state.step_pages(1, 0, 10);
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_first_and_last() {
        let mut state = at(2);
        state.cursor_last(5);
        assert_eq!(state.selected(), Some(4));
        state.cursor_first(5);
        assert_eq!(state.selected(), Some(0));

        state.cursor_last(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_empty_list_has_no_cursor() {
        let mut state = at(3);
        state.step(1, 0);
        assert_eq!(state.selected(), None);
        state.cursor_first(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_clamp_to() {
        let mut state = at(7);
        state.clamp_to(3);
        assert_eq!(state.selected(), Some(2));

        state.clamp_to(0);
        assert_eq!(state.selected(), None);

        state.clamp_to(4);
        assert_eq!(state.selected(), Some(0));
    }
}
