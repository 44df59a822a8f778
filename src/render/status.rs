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

//! Render the status line.
//!
//! Shows a spinner while the videos are loading, then the number of visible
//! videos, the sort mode, the key hints and the last error if there is one.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, util::format::spinner_frame};

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let videos = &app.videos;

    let summary = if videos.is_loading() {
        format!(" {} Loading videos...", spinner_frame(app.tick))
    } else {
        let sort = if videos.sort_by_views() { "views" } else { "default" };
        let filter = match videos.search_text() {
            "" => String::new(),
            text => format!(" matching \"{text}\""),
        };
        format!(
            " {}/{} videos{} | sort: {} | / search  s sort  q quit",
            videos.visible().len(),
            videos.records().len(),
            filter,
            sort
        )
    };

    let mut spans = vec![Span::styled(summary, Style::default().fg(theme.status_fg))];
    if let Some(error) = &app.last_error {
        spans.push(Span::styled(
            format!(" | {error}"),
            Style::default().fg(theme.error_fg),
        ));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.background_colour)),
        area,
    );
}
