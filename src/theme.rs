use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Direction;

pub const LEGEND_FONT_SIZE: u32 = 12;

/// Light/dark flag supplied by the host's theme provider. The engine only
/// uses it to pick shade lightness ranges, fallback seed colors, and the
/// series/legend swatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(()),
        }
    }
}

impl Theme {
    /// Seed used when a category's base color is missing or malformed.
    pub fn fallback_seed(&self) -> &'static str {
        match self {
            Self::Light => "#3b82f6",
            Self::Dark => "#ffffff",
        }
    }

    /// Raw lightness percentage range for shade generation. The dark range
    /// intentionally runs past 100 to reproduce the upstream spread; the
    /// generator clamps the final lightness into [0, 100].
    pub fn lightness_range(&self) -> (f64, f64) {
        match self {
            Self::Light => (25.0, 85.0),
            Self::Dark => (35.0, 115.0),
        }
    }

    pub fn legend_font_color(&self) -> &'static str {
        match self {
            Self::Light => "#7f7f7f",
            Self::Dark => "#f3f4f6",
        }
    }

    pub fn series_color(&self, direction: Direction) -> &'static str {
        match (self, direction) {
            (Self::Light, Direction::Income) => "#16a34a",
            (Self::Light, Direction::Spent) => "#dc2626",
            (Self::Dark, Direction::Income) => "#4ade80",
            (Self::Dark, Direction::Spent) => "#f87171",
        }
    }
}
