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

//! Application configuration.
//!
//! This module manages the application configuration file.

use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "vidlist";

const LOG_FILE_NAME: &str = "vidlist.log";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// How long the simulated fetch takes before the video list appears.
    pub load_delay_ms: u64,
    /// Start with the list sorted by view count.
    pub sort_by_views: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            load_delay_ms: 1500,
            sort_by_views: false,
        }
    }
}

impl AppConfig {
    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Location of the log file, kept alongside the configuration file.
pub fn log_file_path() -> Result<PathBuf, confy::ConfyError> {
    let config_path = confy::get_configuration_file_path(CONFIG_NAME, None)?;
    Ok(config_path.with_file_name(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delay_is_one_and_a_half_seconds() {
        let config = AppConfig::default();
        assert_eq!(config.load_delay(), Duration::from_millis(1500));
        assert!(!config.sort_by_views);
    }
}
