use std::env;

use crate::date_utils::{DateRange, RangeGranularity};
use crate::models::SeriesMode;
use crate::theme::Theme;

/// CLI configuration, read from `SPENDVIEW_*` environment variables.
/// Unset or unparseable values fall back to defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub granularity: RangeGranularity,
    /// Explicit window; when absent the granularity's default window around
    /// today is used.
    pub window: Option<DateRange>,
    pub mode: SeriesMode,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let theme = get("SPENDVIEW_THEME")
            .and_then(|v| v.parse().ok())
            .unwrap_or(Theme::Light);

        let granularity = get("SPENDVIEW_RANGE")
            .and_then(|v| v.parse().ok())
            .unwrap_or(RangeGranularity::Month);

        let window = match (get("SPENDVIEW_FROM"), get("SPENDVIEW_TO")) {
            (Some(from), Some(to)) => DateRange::from_str_ymd(&from, &to),
            _ => None,
        };

        let mode = get("SPENDVIEW_MODE")
            .and_then(|v| SeriesMode::from_str_opt(&v))
            .unwrap_or(SeriesMode::All);

        Self {
            theme,
            granularity,
            window,
            mode,
        }
    }
}
