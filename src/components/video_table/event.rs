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

//! Input handling for the video table.
//!
//! This module maps raw terminal keyboard events to table navigation.

use crossterm::event::{Event, KeyCode};

use crate::components::VideoTable;

impl VideoTable {
    /// Handles a navigation key, returning true if the event was consumed.
    ///
    /// `len` is the number of rows currently shown.
    pub(crate) fn process_event(&mut self, event: &Event, len: usize) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(len),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(len),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(len),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(len),
            _ => return false,
        }

        true
    }
}
