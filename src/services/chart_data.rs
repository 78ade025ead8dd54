use serde::Serialize;
use tracing::debug;

use crate::date_utils::{DateRange, RangeGranularity};
use crate::locale::Locale;
use crate::models::{
    Bucket, CategoryCatalog, ChartDataItem, ChartSeries, Dataset, Direction, SeriesMode,
    Transaction,
};
use crate::services::aggregate::{aggregate_into_buckets, category_totals};
use crate::services::chart_scale::{nice_max, sparsify_labels};
use crate::services::color::generate_color_shades;
use crate::services::consolidate::consolidate_top_categories;
use crate::theme::{Theme, LEGEND_FONT_SIZE};

/// Assemble the trend-chart payload for one window.
///
/// `Income`/`Spent` modes emit a single dataset; `All` emits both plus a
/// two-entry legend. Labels are thinned only for the `All` granularity,
/// where one bucket per year can make the x-axis arbitrarily dense.
/// Bar-versus-line presentation is the renderer's decision, not ours.
pub fn trend_series(
    transactions: &[Transaction],
    granularity: RangeGranularity,
    window: DateRange,
    mode: SeriesMode,
    theme: Theme,
    locale: &dyn Locale,
) -> ChartSeries {
    let buckets = aggregate_into_buckets(transactions, granularity, window, locale);

    let labels: Vec<String> = buckets.iter().map(|b| b.label.clone()).collect();
    let labels = if granularity == RangeGranularity::All {
        sparsify_labels(labels)
    } else {
        labels
    };

    let dataset = |direction: Direction| Dataset {
        data: buckets
            .iter()
            .map(|b| bucket_field(b, direction))
            .collect(),
        color: theme.series_color(direction).to_string(),
    };

    let (datasets, legend) = match mode {
        SeriesMode::Income => (vec![dataset(Direction::Income)], None),
        SeriesMode::Spent => (vec![dataset(Direction::Spent)], None),
        SeriesMode::All => (
            vec![dataset(Direction::Income), dataset(Direction::Spent)],
            Some(vec![
                locale.series_label(Direction::Income),
                locale.series_label(Direction::Spent),
            ]),
        ),
    };

    ChartSeries {
        labels,
        datasets,
        legend,
    }
}

fn bucket_field(bucket: &Bucket, direction: Direction) -> i64 {
    match direction {
        Direction::Income => bucket.income_cents,
        Direction::Spent => bucket.spent_cents,
    }
}

/// A clean ceiling for the series' value axis, in cents.
pub fn suggested_axis_max(series: &ChartSeries) -> f64 {
    let max = series
        .datasets
        .iter()
        .flat_map(|d| d.data.iter().copied())
        .max()
        .unwrap_or(0);
    nice_max(max as f64)
}

/// Assemble the breakdown (pie) slices for one direction.
///
/// Category totals go through top-N consolidation, then the verbatim slices
/// are painted with shades derived from the leading category's base color.
/// The merged remainder keeps its own catalog swatch so it reads as "the
/// rest" rather than as the palest category.
pub fn breakdown_slices(
    transactions: &[Transaction],
    direction: Direction,
    theme: Theme,
    locale: &dyn Locale,
    catalog: &dyn CategoryCatalog,
) -> Vec<ChartDataItem> {
    let totals = category_totals(transactions);
    let consolidated = consolidate_top_categories(totals.for_direction(direction));
    if consolidated.is_empty() {
        debug!(?direction, "No positive category totals, empty breakdown");
        return Vec::new();
    }

    let seed = catalog
        .base_color(&consolidated.top[0].key)
        .unwrap_or_else(|| theme.fallback_seed());
    let shades = generate_color_shades(seed, consolidated.top.len(), theme);

    let legend_font_color = theme.legend_font_color().to_string();
    let mut items: Vec<ChartDataItem> = consolidated
        .top
        .iter()
        .zip(shades)
        .map(|(share, color)| ChartDataItem {
            name: catalog
                .display_label(&share.key)
                .unwrap_or(&share.key)
                .to_string(),
            amount_cents: share.total_cents,
            color,
            legend_font_color: legend_font_color.clone(),
            legend_font_size: LEGEND_FONT_SIZE,
        })
        .collect();

    if let Some(others_cents) = consolidated.others_cents {
        let fallback_key = direction.fallback_category();
        items.push(ChartDataItem {
            name: locale.others_label(),
            amount_cents: others_cents,
            color: catalog
                .base_color(fallback_key)
                .unwrap_or_else(|| theme.fallback_seed())
                .to_string(),
            legend_font_color,
            legend_font_size: LEGEND_FONT_SIZE,
        });
    }

    items
}

/// Everything one chart view needs, bundled for serialization.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartReport {
    pub trend: ChartSeries,
    pub axis_max: f64,
    pub spending_breakdown: Vec<ChartDataItem>,
    pub income_breakdown: Vec<ChartDataItem>,
}

/// Run the full pipeline over one transaction list: trend series, axis
/// ceiling, and both breakdowns.
pub fn build_report(
    transactions: &[Transaction],
    granularity: RangeGranularity,
    window: DateRange,
    mode: SeriesMode,
    theme: Theme,
    locale: &dyn Locale,
    catalog: &dyn CategoryCatalog,
) -> ChartReport {
    let trend = trend_series(transactions, granularity, window, mode, theme, locale);
    let axis_max = suggested_axis_max(&trend);
    let spending_breakdown =
        breakdown_slices(transactions, Direction::Spent, theme, locale, catalog);
    let income_breakdown =
        breakdown_slices(transactions, Direction::Income, theme, locale, catalog);

    ChartReport {
        trend,
        axis_max,
        spending_breakdown,
        income_breakdown,
    }
}
