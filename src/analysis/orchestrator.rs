//! End-to-end sequencing of one iris analysis.

use chrono::Utc;
use image::DynamicImage;
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::color::{ColorAnalyzer, ColorProfile};
use crate::analysis::core::{IridologyAnalysis, ZoneAnalysis};
use crate::analysis::insight::InsightAggregator;
use crate::analysis::segmenter::ZoneSegmenter;
use crate::analysis::texture::{TextureAnalyzer, TextureFeatures};
use crate::catalog::{zones_for, EyeSide, IridologyZone};
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;

/// Runs the full per-zone pipeline over one decoded image and assembles the
/// analysis record. One instance can serve any number of calls; it holds no
/// per-call state.
pub struct AnalysisOrchestrator {
    segmenter: ZoneSegmenter,
    color_analyzer: ColorAnalyzer,
    texture_analyzer: TextureAnalyzer,
    aggregator: InsightAggregator,
}

impl AnalysisOrchestrator {
    pub fn new(config: AnalysisConfig) -> Result<Self, AnalysisError> {
        config.validate().map_err(AnalysisError::Config)?;

        let segmenter = ZoneSegmenter::new(&config.sampling);
        let texture_analyzer = TextureAnalyzer::new(config.thresholds.min_texture_samples);
        Ok(Self {
            segmenter,
            color_analyzer: ColorAnalyzer::new(),
            texture_analyzer,
            aggregator: InsightAggregator::new(config),
        })
    }

    /// Decode raw image bytes and analyze one eye. Undecodable bytes abort
    /// the whole analysis with no partial result.
    pub fn analyze_iris(
        &self,
        image_bytes: &[u8],
        eye: EyeSide,
    ) -> Result<IridologyAnalysis, AnalysisError> {
        let image = image::load_from_memory(image_bytes)?;
        Ok(self.analyze_image(&image, eye))
    }

    /// Analyze an already-decoded image for one eye. Total: every catalog
    /// zone produces an analysis, empty zones included.
    pub fn analyze_image(&self, image: &DynamicImage, eye: EyeSide) -> IridologyAnalysis {
        let rgb = image.to_rgb8();
        let zones = zones_for(eye);

        info!(
            eye = ?eye,
            width = rgb.width(),
            height = rgb.height(),
            zones = zones.len(),
            "starting iris analysis"
        );

        let overall_color = self.color_analyzer.analyze_overall(&rgb);

        let mut zone_analyses = Vec::with_capacity(zones.len());
        for zone in zones {
            let analysis = self.analyze_zone(&rgb, zone, &overall_color);
            debug!(
                zone = %zone.id,
                pixels = analysis.color_profile.sample_count,
                significance = analysis.significance_score,
                "zone analyzed"
            );
            zone_analyses.push(analysis);
        }

        let insights = self.aggregator.generate_insights(&zone_analyses, eye);
        let analysis_confidence = self.aggregator.calculate_confidence(&zone_analyses);

        info!(
            insights = insights.len(),
            confidence = analysis_confidence,
            "iris analysis complete"
        );

        IridologyAnalysis {
            id: Uuid::new_v4(),
            eye_side: eye,
            zone_analyses,
            insights,
            overall_color,
            timestamp: Utc::now(),
            analysis_confidence,
        }
    }

    fn analyze_zone(
        &self,
        rgb: &image::RgbImage,
        zone: &'static IridologyZone,
        overall_color: &ColorProfile,
    ) -> ZoneAnalysis {
        let pixels = self.segmenter.zone_pixels(rgb, zone);
        if pixels.is_empty() {
            // Defined minimal analysis; an empty zone is not an error.
            return ZoneAnalysis {
                zone,
                color_profile: ColorProfile::empty(),
                texture_features: TextureFeatures::zero(),
                observations: vec![format!("Insufficient data for {}", zone.name)],
                significance_score: 0.0,
            };
        }

        let color_profile = self.color_analyzer.analyze_pixels(&pixels);
        let texture_features = self.texture_analyzer.analyze(&pixels);
        let observations =
            self.aggregator
                .generate_observations(zone, &color_profile, overall_color);
        let significance_score =
            self.aggregator
                .compute_significance(&color_profile, &texture_features, &observations);

        ZoneAnalysis {
            zone,
            color_profile,
            texture_features,
            observations,
            significance_score,
        }
    }
}

impl Default for AnalysisOrchestrator {
    fn default() -> Self {
        // The default config always validates.
        Self::new(AnalysisConfig::default()).expect("default config is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::color::DominantColor;
    use image::{ImageBuffer, Rgb, RgbImage};
    use std::io::Cursor;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    }

    fn png_bytes(image: &RgbImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(image.clone())
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn solid_image(width: u32, height: u32, rgb: [u8; 3]) -> RgbImage {
        ImageBuffer::from_pixel(width, height, Rgb(rgb))
    }

    #[test]
    fn garbage_bytes_fail_with_a_decode_error() {
        let orchestrator = AnalysisOrchestrator::default();
        let result = orchestrator.analyze_iris(b"not an image", EyeSide::Left);
        assert!(matches!(result, Err(AnalysisError::Decode(_))));
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let mut config = AnalysisConfig::default();
        config.sampling.bbox_angular_samples = 0;
        assert!(matches!(
            AnalysisOrchestrator::new(config),
            Err(AnalysisError::Config(_))
        ));
    }

    #[test]
    fn zone_analysis_count_matches_the_catalog() {
        init_tracing();
        let orchestrator = AnalysisOrchestrator::default();
        let image = DynamicImage::ImageRgb8(solid_image(80, 80, [128, 128, 128]));
        for eye in [EyeSide::Left, EyeSide::Right] {
            let analysis = orchestrator.analyze_image(&image, eye);
            assert_eq!(analysis.zone_analyses.len(), zones_for(eye).len());
            for (zone, za) in zones_for(eye).iter().zip(&analysis.zone_analyses) {
                assert_eq!(zone.id, za.zone.id, "catalog order preserved");
            }
        }
    }

    #[test]
    fn mid_gray_image_matches_the_reference_scenario() {
        let orchestrator = AnalysisOrchestrator::default();
        let image = DynamicImage::ImageRgb8(solid_image(100, 100, [128, 128, 128]));
        let analysis = orchestrator.analyze_image(&image, EyeSide::Left);

        for za in &analysis.zone_analyses {
            assert_eq!(za.color_profile.dominant_color, DominantColor::Mixed);
            assert_eq!(za.texture_features.uniformity, 1.0);
            assert!((za.texture_features.density - 128.0 / 255.0).abs() < 0.01);
            // Only the single default observation contributes to the score.
            assert_eq!(za.observations.len(), 1);
            assert!((za.significance_score - 0.1).abs() < 1e-9);
        }

        // mean 0.1 -> 0.1 * 0.7 + 0.3
        assert!((analysis.analysis_confidence - 0.37).abs() < 1e-9);
    }

    #[test]
    fn black_image_triggers_darker_observation_everywhere() {
        let orchestrator = AnalysisOrchestrator::default();
        let image = DynamicImage::ImageRgb8(solid_image(100, 100, [0, 0, 0]));
        let analysis = orchestrator.analyze_image(&image, EyeSide::Right);

        assert_eq!(analysis.overall_color.brightness, 0.0);
        for za in &analysis.zone_analyses {
            assert_eq!(za.color_profile.brightness, 0.0);
            assert_eq!(za.texture_features.uniformity, 1.0);
            assert!(za
                .observations
                .iter()
                .any(|o| o.contains("darker pigmentation")));
        }
    }

    #[test]
    fn analysis_is_idempotent_up_to_identity_fields() {
        let orchestrator = AnalysisOrchestrator::default();
        let bytes = png_bytes(&solid_image(64, 64, [96, 120, 160]));

        let first = orchestrator.analyze_iris(&bytes, EyeSide::Left).unwrap();
        let second = orchestrator.analyze_iris(&bytes, EyeSide::Left).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.zone_analyses, second.zone_analyses);
        assert_eq!(first.analysis_confidence, second.analysis_confidence);
        assert_eq!(first.insights.len(), second.insights.len());
        for (a, b) in first.insights.iter().zip(&second.insights) {
            assert_eq!(a.title, b.title);
            assert_eq!(a.confidence, b.confidence);
            assert_eq!(a.related_zones, b.related_zones);
        }
    }

    #[test]
    fn insights_cover_every_body_system_present() {
        let orchestrator = AnalysisOrchestrator::default();
        let image = DynamicImage::ImageRgb8(solid_image(80, 80, [128, 128, 128]));
        let analysis = orchestrator.analyze_image(&image, EyeSide::Left);

        let expected: std::collections::HashSet<_> = zones_for(EyeSide::Left)
            .iter()
            .map(|z| z.body_system)
            .collect();
        let produced: std::collections::HashSet<_> =
            analysis.insights.iter().map(|i| i.body_system).collect();
        assert_eq!(expected, produced);
    }

    #[test]
    fn result_serializes_to_json() {
        let orchestrator = AnalysisOrchestrator::default();
        let image = DynamicImage::ImageRgb8(solid_image(32, 32, [128, 128, 128]));
        let analysis = orchestrator.analyze_image(&image, EyeSide::Left);
        let json = serde_json::to_string(&analysis).unwrap();
        assert!(json.contains("zone_analyses"));
        assert!(json.contains("left-stomach-ring"));
    }
}
