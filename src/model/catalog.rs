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

//! The built-in sample catalog.
//!
//! A fixed set of videos served by the mock video source in place of a real
//! remote fetch.

use crate::model::VideoRecord;

/// Returns the sample catalog in load order.
pub(crate) fn sample_catalog() -> Vec<VideoRecord> {
    vec![
        VideoRecord::new(
            1,
            "Ливерпуль VS Манчестер Юнайтед - Обзор",
            "Setanta Sport",
            48000,
            "https://i.ytimg.com/vi/lk6T6ssXanU/hq720.jpg?sqp=-oaymwEcCNAFEJQDSFXyq4qpAw4IARUAAIhCGAFwAcABBg==&rs=AOn4CLA2V11XAbZmHevhRfxC8IMZht1AOg",
        ),
        VideoRecord::new(
            2,
            "GOAT DEBATE FEATURING VOLK",
            "Abu Dhabi Calendar",
            377000,
            "https://i.ytimg.com/vi/yAhT_xCu5hs/hq720.jpg?sqp=-oaymwFBCNAFEJQDSFryq4qpAzMIARUAAIhCGAHYAQHiAQoIGBACGAY4AUAB8AEB-AH-CYAC0AWKAgwIABABGGAgYChgMA8=&rs=AOn4CLBZ-hv2IEmfxUMDljQEK3wpYCiNzw",
        ),
        VideoRecord::new(
            3,
            "iPhone 5s: распаковка",
            "Wylsacom",
            250000,
            "https://i.ytimg.com/vi/GXEpsh-yM-o/hq720.jpg?sqp=-oaymwEcCNAFEJQDSFXyq4qpAw4IARUAAIhCGAFwAcABBg==&rs=AOn4CLCzEGrAVJmTbfDTjSG8pobo8WdpEQ",
        ),
        VideoRecord::new(
            4,
            "Grand Theft Auto VI Trailer 2",
            "Rockstar",
            134000,
            "https://i.ytimg.com/vi/VQRLujxTm3c/hq720.jpg?sqp=-oaymwEcCNAFEJQDSFXyq4qpAw4IARUAAIhCGAFwAcABBg==&rs=AOn4CLDY1yheLYLt4kbo0GQBUaZnSZWrbw",
        ),
        VideoRecord::new(
            5,
            "632 - Fixing A New Compiler Bug I'm Yet To Discover 😅 (TempleOS | Livestream) [2016]",
            "Absolute Terry Davis",
            678000,
            "https://i.ytimg.com/vi/qjwjMA2SIFs/hq720.jpg?sqp=-oaymwEcCNAFEJQDSFXyq4qpAw4IARUAAIhCGAFwAcABBg==&rs=AOn4CLA67hJ0wk8eUyjCcoHfd4kdLBOE9A",
        ),
        VideoRecord::new(
            6,
            "Основные понятие Swift",
            "iOS-Dev",
            20000,
            "https://i.ytimg.com/vi/VZ5X74_Yypk/hq720.jpg?sqp=-oaymwE2CNAFEJQDSFXyq4qpAygIARUAAIhCGAFwAcABBvABAfgB2AiAAtAFigIMCAAQARhlIGUoZTAP&rs=AOn4CLC7ajiAO9-sp43e1MfqR3Y8jk8xug",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_has_six_records() {
        assert_eq!(sample_catalog().len(), 6);
    }

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = sample_catalog();
        let ids: HashSet<u32> = catalog.iter().map(|v| v.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn catalog_is_in_load_order() {
        let views: Vec<u64> = sample_catalog().iter().map(|v| v.views).collect();
        assert_eq!(views, vec![48000, 377000, 250000, 134000, 678000, 20000]);
    }
}
