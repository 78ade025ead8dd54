use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::date_utils::{days_between, DateRange, RangeGranularity};
use crate::locale::Locale;
use crate::models::Bucket;

/// Fixed labels for the eight 3-hour blocks of a single day.
const DAY_BLOCK_LABELS: [&str; 8] = [
    "12 AM", "3 AM", "6 AM", "9 AM", "12 PM", "3 PM", "6 PM", "9 PM",
];

/// Day-of-month spans for the six month buckets. Unequal on purpose: the
/// first span is shorter so the chart starts on the 1st, the last absorbs
/// 29-31.
const MONTH_SPAN_LABELS: [&str; 6] = ["1-4", "5-9", "10-14", "15-19", "20-24", "25-31"];

/// Build the ordered, empty accumulator buckets for one chart.
///
/// Bucket count is fixed per granularity (8/7/6/12) except for `All`, which
/// gets one bucket per calendar year in the window. An empty or inverted
/// year span still yields a single bucket so downstream indexing never sees
/// a zero-length array.
pub fn build_buckets(
    granularity: RangeGranularity,
    window: DateRange,
    locale: &dyn Locale,
) -> Vec<Bucket> {
    match granularity {
        RangeGranularity::Day => DAY_BLOCK_LABELS.iter().copied().map(Bucket::empty).collect(),
        RangeGranularity::Week => (0..7)
            .map(|offset| {
                let day = window.from + chrono::Duration::days(offset);
                Bucket::empty(locale.weekday_abbrev(day.weekday()))
            })
            .collect(),
        RangeGranularity::Month => MONTH_SPAN_LABELS.iter().copied().map(Bucket::empty).collect(),
        RangeGranularity::Year => (1..=12)
            .map(|month| Bucket::empty(locale.month_abbrev(month)))
            .collect(),
        RangeGranularity::All => {
            let first = window.from.year();
            let last = window.to.year().max(first);
            (first..=last)
                .map(|year| Bucket::empty(year.to_string()))
                .collect()
        }
    }
}

/// Map a timestamp to its bucket index, clamped into `[0, bucket_count-1]`.
///
/// Timestamps slightly outside the nominal window (timezone edges,
/// off-by-one date math upstream) land in the nearest valid bucket instead
/// of being dropped or panicking.
pub fn bucket_index(
    granularity: RangeGranularity,
    created_at: NaiveDateTime,
    window: DateRange,
    bucket_count: usize,
) -> usize {
    debug_assert!(bucket_count > 0);
    let max_index = bucket_count.saturating_sub(1);
    let raw = match granularity {
        RangeGranularity::Day => (created_at.hour() / 3) as i64,
        RangeGranularity::Week => days_between(window.from, created_at.date()),
        RangeGranularity::Month => match created_at.day() {
            d if d >= 25 => 5,
            d if d >= 20 => 4,
            d if d >= 15 => 3,
            d if d >= 10 => 2,
            d if d >= 5 => 1,
            _ => 0,
        },
        RangeGranularity::Year => created_at.month0() as i64,
        RangeGranularity::All => (created_at.year() - window.from.year()) as i64,
    };
    raw.clamp(0, max_index as i64) as usize
}
