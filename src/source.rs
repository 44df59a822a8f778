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

//! Video record sources.
//!
//! A source produces a complete record set in one go. Only the mock source,
//! backed by the sample catalog, is provided.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{VideoRecord, catalog::sample_catalog};

#[derive(Debug, Error, Eq, PartialEq)]
pub(crate) enum SourceError {
    #[error("duplicate video id {0} in record set")]
    DuplicateId(u32),
}

pub(crate) trait VideoSource: Send {
    fn fetch(&self) -> Result<Vec<VideoRecord>, SourceError>;
}

pub(crate) struct MockVideoSource {
    records: Vec<VideoRecord>,
}

impl MockVideoSource {
    pub(crate) fn new() -> Self {
        Self::with_records(sample_catalog())
    }

    pub(crate) fn with_records(records: Vec<VideoRecord>) -> Self {
        Self { records }
    }
}

impl VideoSource for MockVideoSource {
    fn fetch(&self) -> Result<Vec<VideoRecord>, SourceError> {
        check_unique_ids(&self.records)?;
        Ok(self.records.clone())
    }
}

fn check_unique_ids(records: &[VideoRecord]) -> Result<(), SourceError> {
    let mut seen = HashSet::with_capacity(records.len());
    match records.iter().find(|v| !seen.insert(v.id)) {
        Some(duplicate) => Err(SourceError::DuplicateId(duplicate.id)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_source_serves_catalog() {
        let records = MockVideoSource::new().fetch().unwrap();
        assert_eq!(records, sample_catalog());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let source = MockVideoSource::with_records(vec![
            VideoRecord::new(1, "a", "x", 1, ""),
            VideoRecord::new(2, "b", "y", 2, ""),
            VideoRecord::new(1, "c", "z", 3, ""),
        ]);
        assert_eq!(source.fetch(), Err(SourceError::DuplicateId(1)));
    }

    #[test]
    fn empty_source_is_valid() {
        let source = MockVideoSource::with_records(vec![]);
        assert_eq!(source.fetch(), Ok(vec![]));
    }
}
