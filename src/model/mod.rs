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

//! Domain models and core data structures.
//!
//! This module defines the video record, the one entity of the application,
//! along with the sample catalog and the video list state derived from it.

pub(crate) mod catalog;
pub(crate) mod videos;

/// A single video as shown in the list.
///
/// Records are never modified after they are loaded, the whole set is
/// replaced instead.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct VideoRecord {
    pub id: u32,
    pub title: String,
    pub channel: String,
    pub views: u64,
    /// Opaque image URL, not fetched by this application.
    pub thumbnail: String,
}

impl VideoRecord {
    pub(crate) fn new(id: u32, title: &str, channel: &str, views: u64, thumbnail: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            channel: channel.to_string(),
            views,
            thumbnail: thumbnail.to_string(),
        }
    }

    /// Returns true if the title or channel name contains `needle`.
    ///
    /// `needle` must already be lowercase; both fields are lowercased before
    /// comparison.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.channel.to_lowercase().contains(needle)
    }
}
