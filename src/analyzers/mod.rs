pub mod aqi_stats;
pub mod distance;

pub use aqi_stats::{AqiAnalyzer, AqiStatistics};
pub use distance::{DistanceAnalyzer, DistanceBand, DistanceRecord, ReferencePoint};
