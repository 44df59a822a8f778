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

use tracing::{debug, info, warn};

use crate::{App, model::VideoRecord};

pub(super) fn handle_videos_loaded(app: &mut App, videos: Vec<VideoRecord>) {
    info!(count = videos.len(), "video list ready");
    app.videos.complete_load(videos);
    app.video_table.reset(app.videos.visible().len());
}

pub(super) fn handle_search_changed(app: &mut App, text: String) {
    debug!(search = %text, "search text changed");
    app.videos.set_search_text(text);
    app.video_table.reset(app.videos.visible().len());
}

pub(super) fn handle_toggle_sort(app: &mut App) {
    app.videos.toggle_sort();
    info!(sort_by_views = app.videos.sort_by_views(), "sort mode changed");
    app.video_table.reset(app.videos.visible().len());
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!("{message}");
    app.last_error = Some(message);
}

pub(super) fn handle_tick(app: &mut App) {
    app.tick = app.tick.wrapping_add(1);
}
