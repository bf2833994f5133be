use thiserror::Error;

/// Errors surfaced to callers of the analysis pipeline.
///
/// Expected in-range conditions (empty zones, sparse pixel sets, degenerate
/// bounding boxes) are modeled as data, not errors; only unrecoverable input
/// corruption aborts an analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to decode image bytes: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Invalid analysis config: {0}")]
    Config(String),
}
