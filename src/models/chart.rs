use serde::{Deserialize, Serialize};

use crate::models::Direction;

/// One labeled time slice accumulating income and spending magnitudes.
/// Buckets are built fresh per aggregation call and discarded once the
/// chart structures are assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub label: String,
    pub income_cents: i64,
    pub spent_cents: i64,
}

impl Bucket {
    pub fn empty(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            income_cents: 0,
            spent_cents: 0,
        }
    }
}

/// Which side(s) of the ledger a trend chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesMode {
    Income,
    Spent,
    All,
}

impl SeriesMode {
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "income" => Some(Self::Income),
            "spent" => Some(Self::Spent),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

/// One line/bar series within a trend chart.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub data: Vec<i64>,
    pub color: String,
}

/// The full trend chart payload handed to the renderer. Field names follow
/// the chart kit's camelCase contract.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Vec<String>>,
}

/// One breakdown (pie) slice. Immutable once constructed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataItem {
    pub name: String,
    pub amount_cents: i64,
    pub color: String,
    pub legend_font_color: String,
    pub legend_font_size: u32,
}

impl Direction {
    /// Fallback category key whose swatch colors the merged "Others" slice.
    pub fn fallback_category(&self) -> &'static str {
        match self {
            Direction::Income => "other_income",
            Direction::Spent => "other",
        }
    }
}
