pub mod category;
pub mod chart;
pub mod transaction;

pub use category::{CategoryCatalog, CategoryMeta, DefaultCatalog};
pub use chart::{Bucket, ChartDataItem, ChartSeries, Dataset, SeriesMode};
pub use transaction::{Direction, Transaction};
