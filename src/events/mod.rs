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

//! Application events and the main event loop.
//!
//! Every change to application state happens here, on the main thread, in
//! response to an [`AppEvent`]. Background threads (key input, ticks, the
//! task worker) only ever send events.
//!
//! # Organization
//!
//! * [`handlers`]: One function per event, applying it to the [`App`].
//! * [`key_handlers`]: Translates raw key presses into application events.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, model::VideoRecord, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    VideosLoaded(Vec<VideoRecord>),

    SearchChanged(String),
    ToggleSort,

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        dispatch_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

/// Applies a single event to the application state.
pub(crate) fn dispatch_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::VideosLoaded(videos) => handle_videos_loaded(app, videos),
        AppEvent::SearchChanged(text) => handle_search_changed(app, text),
        AppEvent::ToggleSort => handle_toggle_sort(app),
        AppEvent::Error(message) => handle_error(app, message),
        AppEvent::Tick => handle_tick(app),
        AppEvent::ExitApplication => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::{config::AppConfig, model::catalog::sample_catalog, tasks::AppTask};

    fn test_app() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        (App::new(AppConfig::default(), task_tx), task_rx)
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// Feeds an event through the loop, then drains anything it queued.
    fn feed(app: &mut App, event: AppEvent) {
        dispatch_event(app, event).unwrap();
        while let Ok(next) = app.event_rx.try_recv() {
            if matches!(next, AppEvent::ExitApplication) {
                continue;
            }
            dispatch_event(app, next).unwrap();
        }
    }

    fn visible_ids(app: &App) -> Vec<u32> {
        app.videos.visible().iter().map(|v| v.id).collect()
    }

    #[test]
    fn videos_loaded_completes_load() {
        let (mut app, _task_rx) = test_app();
        assert!(app.videos.is_loading());

        feed(&mut app, AppEvent::VideosLoaded(sample_catalog()));

        assert!(!app.videos.is_loading());
        assert_eq!(app.videos.visible().len(), 6);
        assert_eq!(app.video_table.selected(), Some(0));
    }

    #[test]
    fn typing_in_search_bar_filters_list() {
        let (mut app, _task_rx) = test_app();
        feed(&mut app, AppEvent::VideosLoaded(sample_catalog()));

        feed(&mut app, key(KeyCode::Char('/')));
        for c in "IOS".chars() {
            feed(&mut app, key(KeyCode::Char(c)));
        }

        assert_eq!(app.videos.search_text(), "IOS");
        assert_eq!(visible_ids(&app), vec![6]);
    }

    #[test]
    fn sort_key_toggles_sort() {
        let (mut app, _task_rx) = test_app();
        feed(&mut app, AppEvent::VideosLoaded(sample_catalog()));

        feed(&mut app, key(KeyCode::Char('s')));
        assert!(app.videos.sort_by_views());
        assert_eq!(visible_ids(&app), vec![5, 2, 3, 4, 1, 6]);

        feed(&mut app, key(KeyCode::Char('s')));
        assert_eq!(visible_ids(&app), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn sort_key_is_text_while_searching() {
        let (mut app, _task_rx) = test_app();
        feed(&mut app, AppEvent::VideosLoaded(sample_catalog()));

        feed(&mut app, key(KeyCode::Char('/')));
        feed(&mut app, key(KeyCode::Char('s')));

        assert!(!app.videos.sort_by_views());
        assert_eq!(app.videos.search_text(), "s");
    }

    #[test]
    fn quit_key_requests_exit() {
        let (mut app, _task_rx) = test_app();
        dispatch_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(matches!(
            app.event_rx.try_recv(),
            Ok(AppEvent::ExitApplication)
        ));
    }

    #[test]
    fn error_event_is_kept_for_display() {
        let (mut app, _task_rx) = test_app();
        feed(&mut app, AppEvent::Error("boom".to_string()));
        assert_eq!(app.last_error.as_deref(), Some("boom"));
    }

    #[test]
    fn config_can_start_sorted() {
        let (task_tx, _task_rx) = mpsc::channel();
        let config = AppConfig {
            sort_by_views: true,
            ..AppConfig::default()
        };
        let mut app = App::new(config, task_tx);
        feed(&mut app, AppEvent::VideosLoaded(sample_catalog()));
        assert_eq!(visible_ids(&app), vec![5, 2, 3, 4, 1, 6]);
    }
}
