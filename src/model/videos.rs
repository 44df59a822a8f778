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

//! Video list state management.
//!
//! This module provides state for the video list view: the loaded record set,
//! the loading flag, the current search text and the sort mode. The visible
//! list is derived from those inputs and refreshed every time one of them
//! changes, so reads always reflect the latest state.

use crate::model::VideoRecord;

pub(crate) struct VideoList {
    records: Vec<VideoRecord>,
    loading: bool,
    search_text: String,
    sort_by_views: bool,
    visible: Vec<VideoRecord>,
}

impl VideoList {
    pub(crate) fn new() -> Self {
        Self {
            records: vec![],
            loading: true,
            search_text: String::new(),
            sort_by_views: false,
            visible: vec![],
        }
    }

    /// Replaces the whole record set and marks loading as finished.
    pub(crate) fn complete_load(&mut self, records: Vec<VideoRecord>) {
        self.records = records;
        self.loading = false;
        self.refresh();
    }

    pub(crate) fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.refresh();
    }

    pub(crate) fn toggle_sort(&mut self) {
        self.sort_by_views = !self.sort_by_views;
        self.refresh();
    }

    pub(crate) fn records(&self) -> &[VideoRecord] {
        &self.records
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn search_text(&self) -> &str {
        &self.search_text
    }

    pub(crate) fn sort_by_views(&self) -> bool {
        self.sort_by_views
    }

    pub(crate) fn visible(&self) -> &[VideoRecord] {
        &self.visible
    }

    fn refresh(&mut self) {
        self.visible = filter_videos(&self.records, &self.search_text, self.sort_by_views);
    }
}

/// Derives the visible list from a record set.
///
/// Keeps records whose title or channel contains `search`, ignoring case. An
/// empty search keeps everything. When `sort_by_views` is set the result is
/// ordered by view count, highest first; the sort is stable so records with
/// equal counts stay in load order.
///
/// The input slice is never modified, a new list is returned every time.
pub(crate) fn filter_videos(
    records: &[VideoRecord],
    search: &str,
    sort_by_views: bool,
) -> Vec<VideoRecord> {
    let needle = search.to_lowercase();

    let mut filtered: Vec<VideoRecord> = records
        .iter()
        .filter(|video| video.matches(&needle))
        .cloned()
        .collect();

    if sort_by_views {
        filtered.sort_by(|a, b| b.views.cmp(&a.views));
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::sample_catalog;

    fn loaded() -> VideoList {
        let mut videos = VideoList::new();
        videos.complete_load(sample_catalog());
        videos
    }

    fn views(list: &[VideoRecord]) -> Vec<u64> {
        list.iter().map(|v| v.views).collect()
    }

    fn ids(list: &[VideoRecord]) -> Vec<u32> {
        list.iter().map(|v| v.id).collect()
    }

    #[test]
    fn initial_state_is_loading_and_empty() {
        let videos = VideoList::new();
        assert!(videos.is_loading());
        assert!(videos.records().is_empty());
        assert!(videos.visible().is_empty());
        assert_eq!(videos.search_text(), "");
        assert!(!videos.sort_by_views());
    }

    #[test]
    fn complete_load_fills_records_and_clears_loading() {
        let videos = loaded();
        assert!(!videos.is_loading());
        assert_eq!(videos.records().len(), 6);
        assert_eq!(videos.visible(), videos.records());
    }

    #[test]
    fn search_is_literal_substring() {
        let mut videos = loaded();
        videos.set_search_text("GTA");
        assert!(videos.visible().is_empty());
    }

    #[test]
    fn search_ignores_case_on_channel() {
        let mut videos = loaded();
        for text in ["ios", "IOS", "iOs"] {
            videos.set_search_text(text);
            assert_eq!(ids(videos.visible()), vec![6], "search text {text:?}");
        }
    }

    #[test]
    fn search_matches_title() {
        let mut videos = loaded();
        videos.set_search_text("trailer");
        assert_eq!(ids(videos.visible()), vec![4]);
    }

    #[test]
    fn search_matches_non_latin_text() {
        let mut videos = loaded();
        videos.set_search_text("ОБЗОР");
        assert_eq!(ids(videos.visible()), vec![1]);
    }

    #[test]
    fn toggle_sort_orders_by_views_descending() {
        let mut videos = loaded();
        videos.toggle_sort();
        assert!(videos.sort_by_views());
        assert_eq!(
            views(videos.visible()),
            vec![678000, 377000, 250000, 134000, 48000, 20000]
        );
    }

    #[test]
    fn toggle_sort_twice_restores_load_order() {
        let mut videos = loaded();
        videos.toggle_sort();
        videos.toggle_sort();
        assert!(!videos.sort_by_views());
        assert_eq!(ids(videos.visible()), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn sort_applies_to_filtered_records() {
        let mut videos = loaded();
        videos.set_search_text("o");
        videos.toggle_sort();
        let result = views(videos.visible());
        let mut expected = result.clone();
        expected.sort_by(|a, b| b.cmp(a));
        assert_eq!(result, expected);
        assert!(!result.is_empty());
    }

    #[test]
    fn equal_views_keep_load_order() {
        let records = vec![
            VideoRecord::new(1, "a", "x", 10, ""),
            VideoRecord::new(2, "b", "x", 20, ""),
            VideoRecord::new(3, "c", "x", 10, ""),
            VideoRecord::new(4, "d", "x", 20, ""),
        ];
        assert_eq!(ids(&filter_videos(&records, "", true)), vec![2, 4, 1, 3]);
    }

    #[test]
    fn setting_same_search_twice_is_idempotent() {
        let mut videos = loaded();
        videos.set_search_text("a");
        let first = videos.visible().to_vec();
        videos.set_search_text("a");
        assert_eq!(videos.visible(), first.as_slice());
    }

    #[test]
    fn derivation_does_not_touch_records() {
        let mut videos = loaded();
        videos.set_search_text("rock");
        videos.toggle_sort();
        assert_eq!(videos.records(), sample_catalog().as_slice());
    }

    #[test]
    fn search_before_load_applies_after_load() {
        let mut videos = VideoList::new();
        videos.set_search_text("swift");
        assert!(videos.visible().is_empty());
        videos.complete_load(sample_catalog());
        assert_eq!(ids(videos.visible()), vec![6]);
    }

    #[test]
    fn empty_search_matches_everything() {
        assert_eq!(filter_videos(&sample_catalog(), "", false).len(), 6);
    }
}
