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

//! Render the details of the highlighted video.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::App;

pub(crate) fn draw_details(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let selected = app
        .video_table
        .selected()
        .and_then(|index| app.videos.visible().get(index));

    let lines = match selected {
        Some(video) => vec![
            Line::from(vec![
                Span::styled(video.title.as_str(), Style::default().fg(theme.table_title_fg)),
                Span::raw("  "),
                Span::styled(video.channel.as_str(), Style::default().fg(theme.table_channel_fg)),
                Span::raw("  "),
                Span::styled(
                    format!("{} views", video.views),
                    Style::default().fg(theme.table_views_fg),
                ),
            ]),
            Line::from(Span::styled(
                video.thumbnail.as_str(),
                Style::default().fg(theme.status_fg),
            )),
        ],
        None => vec![],
    };

    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(theme.background_colour))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border_colour)),
            ),
        area,
    );
}
