use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Time resolution of a trend chart. Each granularity fixes both the bucket
/// layout and the default window the chart covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeGranularity {
    Day,
    Week,
    Month,
    Year,
    All,
}

impl FromStr for RangeGranularity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            "all" => Ok(Self::All),
            _ => Err(()),
        }
    }
}

impl RangeGranularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::All => "all",
        }
    }

    pub fn all() -> &'static [RangeGranularity] {
        &[Self::Day, Self::Week, Self::Month, Self::Year, Self::All]
    }

    /// The default window for this granularity around a reference date:
    /// the day itself, its calendar week, month, or year. `All` falls back
    /// to the widest range; callers narrow it to the data extent.
    pub fn window_containing(&self, date: NaiveDate) -> DateRange {
        match self {
            Self::Day => DateRange::from_dates(date, date),
            Self::Week => {
                let start = week_start(date);
                DateRange::from_dates(start, start + chrono::Duration::days(6))
            }
            Self::Month => DateRange::from_dates(month_start(date), month_end(date)),
            Self::Year => DateRange::from_dates(year_start(date), year_end(date)),
            Self::All => DateRange::from_dates(
                NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2099, 12, 31).unwrap(),
            ),
        }
    }
}

/// The inclusive date window a chart covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn from_dates(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Narrow an `All` window to the actual data extent, when known.
    pub fn resolve_extent(self, extent: Option<(NaiveDate, NaiveDate)>) -> Self {
        match extent {
            Some((min_date, max_date)) => Self {
                from: min_date,
                to: max_date,
            },
            None => self,
        }
    }

    pub fn from_str_ymd(from: &str, to: &str) -> Option<Self> {
        let from_date = NaiveDate::parse_from_str(from, "%Y-%m-%d").ok()?;
        let to_date = NaiveDate::parse_from_str(to, "%Y-%m-%d").ok()?;
        Some(Self::from_dates(from_date, to_date))
    }
}

/// Whole days from `from` to `date`; negative when `date` precedes `from`.
pub fn days_between(from: NaiveDate, date: NaiveDate) -> i64 {
    (date - from).num_days()
}

fn week_start(date: NaiveDate) -> NaiveDate {
    let days_from_monday = date.weekday().num_days_from_monday();
    date - chrono::Duration::days(days_from_monday as i64)
}

fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}

fn month_end(date: NaiveDate) -> NaiveDate {
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    next_month.unwrap() - chrono::Duration::days(1)
}

fn year_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap()
}

fn year_end(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap()
}
