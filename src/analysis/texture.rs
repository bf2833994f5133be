//! Per-zone texture features: uniformity (inverse variance) and density.

use image::Rgb;
use serde::{Deserialize, Serialize};

/// Maximum possible per-channel squared deviation (255²), used as the
/// normalization ceiling for the variance-to-uniformity mapping.
const VARIANCE_CEILING: f64 = 65025.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternTag {
    Uniform,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureFeatures {
    /// 1 − normalized color variance, in [0, 1].
    pub uniformity: f64,
    /// Mean brightness, in [0, 1].
    pub density: f64,
    pub patterns: Vec<PatternTag>,
    pub pattern_strength: f64,
}

impl TextureFeatures {
    /// Zero-texture result for samples too small to measure. Texture on
    /// sparse pixel sets is not meaningful and must not be extrapolated.
    pub fn zero() -> Self {
        Self {
            uniformity: 0.0,
            density: 0.0,
            patterns: Vec::new(),
            pattern_strength: 0.0,
        }
    }
}

pub struct TextureAnalyzer {
    min_samples: usize,
}

impl TextureAnalyzer {
    pub fn new(min_samples: usize) -> Self {
        Self { min_samples }
    }

    pub fn analyze(&self, pixels: &[Rgb<u8>]) -> TextureFeatures {
        if pixels.len() < self.min_samples {
            return TextureFeatures::zero();
        }

        let n = pixels.len() as f64;
        let mut sum_r = 0u64;
        let mut sum_g = 0u64;
        let mut sum_b = 0u64;
        for px in pixels {
            sum_r += px.0[0] as u64;
            sum_g += px.0[1] as u64;
            sum_b += px.0[2] as u64;
        }
        let mean_r = sum_r as f64 / n;
        let mean_g = sum_g as f64 / n;
        let mean_b = sum_b as f64 / n;

        // Mean squared deviation summed over all three channels.
        let mut squared_error = 0.0;
        for px in pixels {
            let dr = px.0[0] as f64 - mean_r;
            let dg = px.0[1] as f64 - mean_g;
            let db = px.0[2] as f64 - mean_b;
            squared_error += dr * dr + dg * dg + db * db;
        }
        let variance = squared_error / n;

        let uniformity = (1.0 - variance / VARIANCE_CEILING).clamp(0.0, 1.0);
        let density = (mean_r + mean_g + mean_b) / 3.0 / 255.0;

        TextureFeatures {
            uniformity,
            density,
            patterns: vec![PatternTag::Uniform],
            pattern_strength: uniformity,
        }
    }
}

impl Default for TextureAnalyzer {
    fn default() -> Self {
        Self::new(10)
    }
}
