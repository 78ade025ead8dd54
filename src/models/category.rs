use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Display metadata for one category, as supplied by the category registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryMeta {
    pub label: String,
    pub color: String,
}

/// Category registry seam. The host application owns the real registry;
/// the engine only ever asks it for base colors to seed shade generation
/// and to paint the merged "Others" slice.
pub trait CategoryCatalog {
    fn base_color(&self, key: &str) -> Option<&str>;

    /// Canonical display label; callers fall back to the raw key.
    fn display_label(&self, key: &str) -> Option<&str> {
        let _ = key;
        None
    }
}

/// Built-in registry with a fixed set of swatches, used by the CLI and as
/// a test double.
#[derive(Debug, Clone)]
pub struct DefaultCatalog {
    categories: HashMap<String, CategoryMeta>,
}

impl DefaultCatalog {
    pub fn new() -> Self {
        let mut categories = HashMap::new();
        for (key, label, color) in [
            ("food", "Food & Dining", "#f59e0b"),
            ("transport", "Transportation", "#3b82f6"),
            ("housing", "Housing", "#8b5cf6"),
            ("health", "Health", "#ef4444"),
            ("entertainment", "Entertainment", "#ec4899"),
            ("shopping", "Shopping", "#14b8a6"),
            ("salary", "Salary", "#22c55e"),
            ("gift", "Gifts", "#eab308"),
            ("other", "Other", "#6b7280"),
            ("other_income", "Other Income", "#64748b"),
        ] {
            categories.insert(
                key.to_string(),
                CategoryMeta {
                    label: label.to_string(),
                    color: color.to_string(),
                },
            );
        }
        Self { categories }
    }
}

impl Default for DefaultCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryCatalog for DefaultCatalog {
    fn base_color(&self, key: &str) -> Option<&str> {
        self.categories.get(key).map(|meta| meta.color.as_str())
    }

    fn display_label(&self, key: &str) -> Option<&str> {
        self.categories.get(key).map(|meta| meta.label.as_str())
    }
}
