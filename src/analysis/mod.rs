pub mod color;
pub mod core;
pub mod insight;
pub mod orchestrator;
pub mod segmenter;
pub mod texture;

pub use color::{ColorAnalyzer, ColorProfile, DominantColor};
pub use self::core::{InsightCategory, IridologyAnalysis, WellnessInsight, ZoneAnalysis};
pub use insight::InsightAggregator;
pub use orchestrator::AnalysisOrchestrator;
pub use segmenter::{ZoneBox, ZoneSegmenter};
pub use texture::{PatternTag, TextureAnalyzer, TextureFeatures};
