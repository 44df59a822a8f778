// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Interactive video table state.
//!
//! The table does not own any videos. It only tracks the highlighted row, the
//! rows themselves are the visible list passed in when drawing or handling
//! input.

mod event;
mod render;

use ratatui::widgets::TableState;

#[derive(Default)]
pub(crate) struct VideoTable {
    table_state: TableState,
}

impl VideoTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Moves the highlight back to the first row after the list changes.
    pub(crate) fn reset(&mut self, len: usize) {
        self.table_state.select((len > 0).then_some(0));
    }

    fn goto_next(&mut self, len: usize) {
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self, len: usize) {
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self, len: usize) {
        self.reset(len);
    }

    fn goto_last(&mut self, len: usize) {
        self.table_state.select(len.checked_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_selects_first_row_or_nothing() {
        let mut table = VideoTable::new();
        table.reset(3);
        assert_eq!(table.selected(), Some(0));
        table.reset(0);
        assert_eq!(table.selected(), None);
    }

    #[test]
    fn navigation_wraps_around() {
        let mut table = VideoTable::new();
        table.reset(3);
        table.goto_previous(3);
        assert_eq!(table.selected(), Some(2));
        table.goto_next(3);
        assert_eq!(table.selected(), Some(0));
    }

    #[test]
    fn navigation_on_empty_list_does_nothing() {
        let mut table = VideoTable::new();
        table.goto_next(0);
        table.goto_last(0);
        assert_eq!(table.selected(), None);
    }

    #[test]
    fn goto_last_selects_final_row() {
        let mut table = VideoTable::new();
        table.goto_last(6);
        assert_eq!(table.selected(), Some(5));
        table.goto_first(6);
        assert_eq!(table.selected(), Some(0));
    }
}
