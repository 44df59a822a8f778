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

/// Formats a view count into a short human-readable string.
///
/// Counts below a thousand are shown as-is, larger counts use a `K` or `M`
/// suffix. A single decimal place is kept for values under ten units.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_views(950), "950");
/// assert_eq!(format_views(48000), "48K");
/// assert_eq!(format_views(1_250_000), "1.2M");
/// ```
pub(crate) fn format_views(views: u64) -> String {
    match views {
        0..=999 => views.to_string(),
        1_000..=999_999 => with_suffix(views, 1_000, 'K'),
        _ => with_suffix(views, 1_000_000, 'M'),
    }
}

fn with_suffix(views: u64, unit: u64, suffix: char) -> String {
    let whole = views / unit;
    let tenths = (views % unit) * 10 / unit;
    if whole < 10 && tenths > 0 {
        format!("{whole}.{tenths}{suffix}")
    } else {
        format!("{whole}{suffix}")
    }
}

/// Frames of the loading spinner, advanced once per tick.
const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

pub(crate) fn spinner_frame(tick: usize) -> char {
    SPINNER[tick % SPINNER.len()]
}
