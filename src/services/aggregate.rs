use std::collections::HashMap;

use tracing::debug;

use crate::date_utils::{DateRange, RangeGranularity};
use crate::locale::Locale;
use crate::models::{Bucket, Direction, Transaction};
use crate::services::buckets::{bucket_index, build_buckets};

/// Fold a filtered transaction list into fresh time buckets.
///
/// Each transaction's magnitude goes wholly to the field matching its
/// resolved direction. Returns a new bucket vector in builder order; no
/// state is shared across calls.
pub fn aggregate_into_buckets(
    transactions: &[Transaction],
    granularity: RangeGranularity,
    window: DateRange,
    locale: &dyn Locale,
) -> Vec<Bucket> {
    let mut buckets = build_buckets(granularity, window, locale);
    debug!(
        transaction_count = transactions.len(),
        bucket_count = buckets.len(),
        granularity = granularity.as_str(),
        "Aggregating transactions into buckets"
    );

    for tx in transactions {
        let index = bucket_index(granularity, tx.created_at, window, buckets.len());
        match tx.resolved_direction() {
            Direction::Income => buckets[index].income_cents += tx.magnitude_cents(),
            Direction::Spent => buckets[index].spent_cents += tx.magnitude_cents(),
        }
    }

    buckets
}

/// Per-category magnitude sums, split by direction. No time dimension.
#[derive(Debug, Clone, Default)]
pub struct CategoryTotals {
    pub income: HashMap<String, i64>,
    pub spent: HashMap<String, i64>,
}

impl CategoryTotals {
    pub fn for_direction(&self, direction: Direction) -> &HashMap<String, i64> {
        match direction {
            Direction::Income => &self.income,
            Direction::Spent => &self.spent,
        }
    }
}

/// Fold a transaction list into two independent category→total maps.
pub fn category_totals(transactions: &[Transaction]) -> CategoryTotals {
    let mut totals = CategoryTotals::default();

    for tx in transactions {
        let map = match tx.resolved_direction() {
            Direction::Income => &mut totals.income,
            Direction::Spent => &mut totals.spent,
        };
        *map.entry(tx.category.clone()).or_insert(0) += tx.magnitude_cents();
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::EnglishLocale;
    use chrono::NaiveDate;

    fn tx(amount_cents: i64, direction: Direction, category: &str, day: u32, hour: u32) -> Transaction {
        Transaction {
            id: format!("{}-{}-{}", category, day, hour),
            amount_cents,
            direction: Some(direction),
            category: category.into(),
            created_at: NaiveDate::from_ymd_opt(2024, 1, day)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            note: None,
        }
    }

    fn january() -> DateRange {
        DateRange::from_dates(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
    }

    #[test]
    fn test_conservation_over_buckets() {
        let transactions = vec![
            tx(5000, Direction::Spent, "food", 2, 10),
            tx(3000, Direction::Spent, "transport", 12, 8),
            tx(20000, Direction::Income, "salary", 28, 9),
            tx(700, Direction::Income, "gift", 3, 22),
        ];
        let buckets = aggregate_into_buckets(
            &transactions,
            RangeGranularity::Month,
            january(),
            &EnglishLocale,
        );

        let income_sum: i64 = buckets.iter().map(|b| b.income_cents).sum();
        let spent_sum: i64 = buckets.iter().map(|b| b.spent_cents).sum();
        assert_eq!(income_sum, 20700);
        assert_eq!(spent_sum, 8000);
    }

    #[test]
    fn test_direction_splits_magnitude() {
        let transactions = vec![tx(5000, Direction::Spent, "food", 2, 10)];
        let buckets = aggregate_into_buckets(
            &transactions,
            RangeGranularity::Month,
            january(),
            &EnglishLocale,
        );
        assert_eq!(buckets[0].spent_cents, 5000);
        assert_eq!(buckets[0].income_cents, 0);
    }

    #[test]
    fn test_legacy_record_lands_on_income() {
        let mut legacy = tx(-1500, Direction::Spent, "salary", 6, 10);
        legacy.direction = None;
        let buckets = aggregate_into_buckets(
            &[legacy],
            RangeGranularity::Month,
            january(),
            &EnglishLocale,
        );
        assert_eq!(buckets[1].income_cents, 1500);
        assert_eq!(buckets[1].spent_cents, 0);
    }

    #[test]
    fn test_empty_input_yields_zero_buckets() {
        let buckets =
            aggregate_into_buckets(&[], RangeGranularity::Week, january(), &EnglishLocale);
        assert_eq!(buckets.len(), 7);
        assert!(buckets.iter().all(|b| b.income_cents == 0 && b.spent_cents == 0));
    }

    #[test]
    fn test_category_totals_independent_maps() {
        let transactions = vec![
            tx(5000, Direction::Spent, "food", 2, 10),
            tx(2500, Direction::Spent, "food", 3, 11),
            tx(20000, Direction::Income, "salary", 28, 9),
        ];
        let totals = category_totals(&transactions);
        assert_eq!(totals.spent.get("food"), Some(&7500));
        assert_eq!(totals.income.get("salary"), Some(&20000));
        assert!(totals.income.get("food").is_none());
    }
}
