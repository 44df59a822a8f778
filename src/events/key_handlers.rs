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

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::{App, events::AppEvent};

/// Maps keyboard input to application actions.
///
/// Keys are offered to each component in turn, the first one to consume a key
/// stops it from going any further:
///
/// * **Search bar**: While focused, all text input goes to the search field.
/// * **Video table**: Moving the selection up and down the list.
/// * **Global**: Quitting, focusing the search bar and toggling the sort.
///
/// # Errors
///
/// Returns an error if an event cannot be sent to the event loop.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let event = Event::Key(key);

    if app.search_bar.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    if app
        .video_table
        .process_event(&event, app.videos.visible().len())
    {
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,
        KeyCode::Char('s') => app.event_tx.send(AppEvent::ToggleSort)?,
        _ => {}
    }

    Ok(())
}
