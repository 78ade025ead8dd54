pub mod aggregate;
pub mod buckets;
pub mod chart_data;
pub mod chart_scale;
pub mod color;
pub mod consolidate;
