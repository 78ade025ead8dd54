use std::collections::HashMap;

/// Maximum number of verbatim slices in a breakdown chart; everything past
/// this rank is merged into a single synthetic entry.
pub const MAX_CATEGORIES: usize = 9;

/// One ranked category share after consolidation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryShare {
    pub key: String,
    pub total_cents: i64,
}

/// A category→total map reduced to at most [`MAX_CATEGORIES`] entries plus
/// an optional merged remainder.
#[derive(Debug, Clone, Default)]
pub struct Consolidated {
    /// Largest totals first. Ties are broken by category key ascending, so
    /// the ranking is deterministic regardless of map iteration order.
    pub top: Vec<CategoryShare>,
    /// Sum of everything ranked below the cut, when anything is.
    pub others_cents: Option<i64>,
}

impl Consolidated {
    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
    }
}

/// Reduce a category→total map to the top entries plus one merged remainder.
///
/// Non-positive totals are dropped up front. A map whose grand total is zero
/// comes back empty: the caller renders an explicit no-data state instead of
/// a zero-valued chart.
pub fn consolidate_top_categories(totals: &HashMap<String, i64>) -> Consolidated {
    let mut entries: Vec<CategoryShare> = totals
        .iter()
        .filter(|(_, &total)| total > 0)
        .map(|(key, &total)| CategoryShare {
            key: key.clone(),
            total_cents: total,
        })
        .collect();

    if entries.is_empty() {
        return Consolidated::default();
    }

    entries.sort_by(|a, b| {
        b.total_cents
            .cmp(&a.total_cents)
            .then_with(|| a.key.cmp(&b.key))
    });

    if entries.len() <= MAX_CATEGORIES {
        return Consolidated {
            top: entries,
            others_cents: None,
        };
    }

    let remainder: i64 = entries[MAX_CATEGORIES..]
        .iter()
        .map(|share| share.total_cents)
        .sum();
    entries.truncate(MAX_CATEGORIES);

    Consolidated {
        top: entries,
        others_cents: Some(remainder),
    }
}
