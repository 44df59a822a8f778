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

//! UI rendering logic for the video table.
//!
//! This module handles the visual representation of the visible videos,
//! including column layout, row highlighting and theme application.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::{components::VideoTable, model::VideoRecord, theme::Theme, util::format::format_views};

impl VideoTable {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, videos: &[VideoRecord], theme: &Theme) {
        let rows = videos.iter().map(|video| {
            Row::new(vec![
                Cell::from(Line::from(video.id.to_string()).style(Style::default().fg(theme.table_id_fg)).alignment(Alignment::Right)),
                Cell::from(Line::from(format_views(video.views)).style(Style::default().fg(theme.table_views_fg)).alignment(Alignment::Right)),
                Cell::from(""),
                Cell::from(Line::from(video.channel.as_str()).style(Style::default().fg(theme.table_channel_fg))),
                Cell::from(Line::from(video.title.as_str()).style(Style::default().fg(theme.table_title_fg))),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Length(6),
                Constraint::Length(1),
                Constraint::Percentage(25),
                Constraint::Percentage(75),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(Line::from("#").alignment(Alignment::Right)),
                Cell::from(Line::from("Views").alignment(Alignment::Right)),
                Cell::from(""),
                Cell::from("Channel"),
                Cell::from("Title"),
            ])
            .style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_colour))
                .title(" Videos "),
        )
        .style(Style::default().bg(theme.background_colour))
        .row_highlight_style(Style::default().bg(theme.highlight_colour));

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
