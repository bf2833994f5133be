//! Iris photograph analysis against a static iridology chart.
//!
//! The pipeline is a pure, synchronous function from a decoded raster image
//! to a structured analysis record: zone segmentation in normalized polar
//! coordinates, per-zone color and texture statistics, and aggregation into
//! ranked wellness insights. Persistence, capture, and presentation are the
//! caller's concern.

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod error;
pub mod geometry;

pub use analysis::{
    AnalysisOrchestrator, ColorAnalyzer, ColorProfile, DominantColor, InsightAggregator,
    InsightCategory, IridologyAnalysis, TextureAnalyzer, TextureFeatures, WellnessInsight,
    ZoneAnalysis, ZoneSegmenter,
};
pub use catalog::{zones_for, BodySystem, EyeSide, IridologyZone};
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use geometry::Point2D;
