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

//! Search input logic and state management.
//!
//! This module implements the search field shown above the video list. It
//! wraps a text input component and sends the full search text to the
//! application on every edit, so the list filters as the user types.

mod render;

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyModifiers};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::events::AppEvent;

pub(crate) struct SearchBar {
    active: bool,
    pub(crate) input: Input,
}

impl SearchBar {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles a terminal event, returning true if the event was consumed.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char('/') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match (key_event.code, key_event.modifiers) {
            // Leave the search field, the filter stays in place
            (KeyCode::Esc, _) | (KeyCode::Enter, _) => {
                self.active = false;
            }

            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                self.input.reset();
                event_tx.send(AppEvent::SearchChanged(String::new()))?;
            }

            _ => {
                if let Some(changed) = self.input.handle_event(event) {
                    if changed.value {
                        event_tx.send(AppEvent::SearchChanged(self.input.value().to_string()))?;
                    }
                }
            }
        }

        Ok(true)
    }
}
