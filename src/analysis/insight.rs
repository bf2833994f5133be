//! Significance scoring, observation text, and grouped wellness insights.

use indexmap::IndexMap;
use uuid::Uuid;

use crate::analysis::color::ColorProfile;
use crate::analysis::core::{InsightCategory, WellnessInsight, ZoneAnalysis};
use crate::analysis::texture::TextureFeatures;
use crate::catalog::{BodySystem, EyeSide, IridologyZone};
use crate::config::AnalysisConfig;

/// Fallback confidence for body-system groups with no notable zone.
const GENERIC_INSIGHT_CONFIDENCE: f64 = 0.5;

/// Confidence transform: mean significance scaled into [0.3, 1.0] so even an
/// unremarkable iris reports a floor confidence rather than zero.
const CONFIDENCE_SCALE: f64 = 0.7;
const CONFIDENCE_FLOOR: f64 = 0.3;

/// Combines per-zone features into scores, observation text, and grouped
/// insights. All thresholds and weights come from the config passed in.
pub struct InsightAggregator {
    config: AnalysisConfig,
}

impl InsightAggregator {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Additive significance score, clamped to [0, 1]. The raw sum may
    /// exceed 1; clamping is the defined saturation policy, not an error.
    pub fn compute_significance(
        &self,
        color: &ColorProfile,
        texture: &TextureFeatures,
        observations: &[String],
    ) -> f64 {
        let weights = &self.config.scoring;
        let thresholds = &self.config.thresholds;
        let mut score = 0.0;

        if color.brightness < thresholds.brightness_low
            || color.brightness > thresholds.brightness_high
        {
            score += weights.brightness_weight;
        }
        if color.saturation > thresholds.saturation_score_min {
            score += weights.saturation_weight;
        }
        if texture.uniformity < thresholds.uniformity_low {
            score += weights.uniformity_weight;
        }
        score += weights.per_observation_weight * observations.len() as f64;

        score.clamp(0.0, 1.0)
    }

    /// Observation strings for one zone, relative to the overall baseline.
    /// Never empty: when nothing stands out a single default note is emitted.
    pub fn generate_observations(
        &self,
        zone: &IridologyZone,
        color: &ColorProfile,
        overall: &ColorProfile,
    ) -> Vec<String> {
        let thresholds = &self.config.thresholds;
        let mut observations = Vec::new();

        if color.brightness < thresholds.brightness_low {
            observations.push(format!(
                "{} shows darker pigmentation than typical",
                zone.name
            ));
        } else if color.brightness > thresholds.brightness_high {
            observations.push(format!(
                "{} shows lighter pigmentation than typical",
                zone.name
            ));
        }

        if color.saturation > thresholds.saturation_note_min {
            observations.push(format!("Color intensity in {} is pronounced", zone.name));
        }

        if color.dominant_color != overall.dominant_color {
            observations.push(format!(
                "{} varies in tone from the overall iris color",
                zone.name
            ));
        }

        if observations.is_empty() {
            observations.push(format!("{} shows typical characteristics", zone.name));
        }
        observations
    }

    /// Insights grouped by body system in insertion order of first
    /// occurrence across the zone list.
    pub fn generate_insights(
        &self,
        zone_analyses: &[ZoneAnalysis],
        eye: EyeSide,
    ) -> Vec<WellnessInsight> {
        let mut groups: IndexMap<BodySystem, Vec<&ZoneAnalysis>> = IndexMap::new();
        for analysis in zone_analyses {
            groups
                .entry(analysis.zone.body_system)
                .or_insert_with(Vec::new)
                .push(analysis);
        }

        let threshold = self.config.thresholds.notability;
        let mut insights = Vec::with_capacity(groups.len());
        for (system, group) in groups {
            let notable = group
                .iter()
                .filter(|a| a.is_notable(threshold))
                .max_by(|a, b| {
                    a.significance_score
                        .partial_cmp(&b.significance_score)
                        .unwrap_or(std::cmp::Ordering::Equal)
                });

            let insight = match notable {
                Some(top) => self.notable_insight(system, top, &group, eye),
                None => self.generic_insight(system, &group, eye),
            };
            insights.push(insight);
        }
        insights
    }

    fn notable_insight(
        &self,
        system: BodySystem,
        top: &ZoneAnalysis,
        group: &[&ZoneAnalysis],
        _eye: EyeSide,
    ) -> WellnessInsight {
        WellnessInsight {
            id: Uuid::new_v4(),
            body_system: system,
            title: format!("{} Focus", top.zone.name),
            description: top.zone.description.clone(),
            reflection_prompts: top
                .zone
                .wellness_reflections
                .iter()
                .take(3)
                .cloned()
                .collect(),
            category: InsightCategory::for_system(system),
            confidence: top.significance_score,
            related_zones: group.iter().map(|a| a.zone.id.clone()).collect(),
        }
    }

    fn generic_insight(
        &self,
        system: BodySystem,
        group: &[&ZoneAnalysis],
        _eye: EyeSide,
    ) -> WellnessInsight {
        let first = group[0];
        WellnessInsight {
            id: Uuid::new_v4(),
            body_system: system,
            title: format!("{} System Check-In", system),
            description: format!(
                "Zones mapped to the {} system show typical characteristics.",
                system
            ),
            reflection_prompts: first
                .zone
                .wellness_reflections
                .iter()
                .take(2)
                .cloned()
                .collect(),
            category: InsightCategory::for_system(system),
            confidence: GENERIC_INSIGHT_CONFIDENCE,
            related_zones: group.iter().map(|a| a.zone.id.clone()).collect(),
        }
    }

    /// Overall analysis confidence from per-zone significance; 0.0 only for
    /// the degenerate empty-input case.
    pub fn calculate_confidence(&self, zone_analyses: &[ZoneAnalysis]) -> f64 {
        if zone_analyses.is_empty() {
            return 0.0;
        }
        let mean = zone_analyses
            .iter()
            .map(|a| a.significance_score)
            .sum::<f64>()
            / zone_analyses.len() as f64;
        (mean * CONFIDENCE_SCALE + CONFIDENCE_FLOOR).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::color::DominantColor;
    use crate::catalog::zones_for;

    fn aggregator() -> InsightAggregator {
        InsightAggregator::new(AnalysisConfig::default())
    }

    fn profile(brightness: f64, saturation: f64, dominant: DominantColor) -> ColorProfile {
        ColorProfile {
            red: brightness * 255.0,
            green: brightness * 255.0,
            blue: brightness * 255.0,
            brightness,
            saturation,
            dominant_color: dominant,
            sample_count: 100,
        }
    }

    fn texture(uniformity: f64) -> TextureFeatures {
        TextureFeatures {
            uniformity,
            density: 0.5,
            patterns: vec![],
            pattern_strength: uniformity,
        }
    }

    fn zone_analysis(index: usize, significance: f64) -> ZoneAnalysis {
        ZoneAnalysis {
            zone: &zones_for(EyeSide::Left)[index],
            color_profile: profile(0.5, 0.0, DominantColor::Mixed),
            texture_features: texture(1.0),
            observations: vec!["obs".to_string()],
            significance_score: significance,
        }
    }

    #[test]
    fn unremarkable_features_score_only_the_observation_term() {
        let agg = aggregator();
        let score = agg.compute_significance(
            &profile(0.5, 0.0, DominantColor::Mixed),
            &texture(1.0),
            &["one".to_string()],
        );
        assert!((score - 0.1).abs() < 1e-9);
    }

    #[test]
    fn all_triggers_saturate_at_one() {
        let agg = aggregator();
        let observations: Vec<String> = (0..5).map(|i| format!("obs {}", i)).collect();
        let score = agg.compute_significance(
            &profile(0.1, 0.9, DominantColor::Blue),
            &texture(0.2),
            &observations,
        );
        // 0.3 + 0.2 + 0.2 + 0.5 raw; clamped.
        assert_eq!(score, 1.0);
    }

    #[test]
    fn dark_zones_trigger_the_brightness_weight() {
        let agg = aggregator();
        let score = agg.compute_significance(
            &profile(0.1, 0.0, DominantColor::Mixed),
            &texture(1.0),
            &[],
        );
        assert!((score - 0.3).abs() < 1e-9);
    }

    #[test]
    fn observations_are_never_empty() {
        let agg = aggregator();
        let zone = &zones_for(EyeSide::Left)[0];
        let overall = profile(0.5, 0.0, DominantColor::Mixed);
        let observations =
            agg.generate_observations(zone, &profile(0.5, 0.0, DominantColor::Mixed), &overall);
        assert_eq!(observations.len(), 1);
        assert!(observations[0].contains("typical characteristics"));
    }

    #[test]
    fn dark_saturated_divergent_zone_emits_three_observations() {
        let agg = aggregator();
        let zone = &zones_for(EyeSide::Left)[0];
        let overall = profile(0.5, 0.0, DominantColor::Mixed);
        let observations =
            agg.generate_observations(zone, &profile(0.2, 0.7, DominantColor::Blue), &overall);
        assert_eq!(observations.len(), 3);
        assert!(observations[0].contains("darker pigmentation"));
    }

    #[test]
    fn insights_group_by_system_in_first_occurrence_order() {
        let agg = aggregator();
        let analyses: Vec<ZoneAnalysis> =
            (0..zones_for(EyeSide::Left).len()).map(|i| zone_analysis(i, 0.1)).collect();
        let insights = agg.generate_insights(&analyses, EyeSide::Left);

        // Left-eye catalog order starts Digestive, then Nervous.
        assert_eq!(insights[0].body_system, BodySystem::Digestive);
        assert_eq!(insights[1].body_system, BodySystem::Nervous);

        let systems: Vec<BodySystem> = insights.iter().map(|i| i.body_system).collect();
        let mut deduped = systems.clone();
        deduped.dedup();
        assert_eq!(systems, deduped, "each system appears exactly once");
    }

    #[test]
    fn notable_zone_drives_its_group_insight() {
        let agg = aggregator();
        let mut analyses: Vec<ZoneAnalysis> =
            (0..zones_for(EyeSide::Left).len()).map(|i| zone_analysis(i, 0.1)).collect();
        // Second digestive zone becomes notable.
        analyses[1].significance_score = 0.8;

        let insights = agg.generate_insights(&analyses, EyeSide::Left);
        let digestive = &insights[0];
        assert_eq!(digestive.body_system, BodySystem::Digestive);
        assert_eq!(digestive.confidence, 0.8);
        assert!(digestive.title.contains(&analyses[1].zone.name));
        assert!(digestive
            .related_zones
            .contains(&analyses[0].zone.id));
    }

    #[test]
    fn quiet_groups_get_generic_insights_at_half_confidence() {
        let agg = aggregator();
        let analyses: Vec<ZoneAnalysis> =
            (0..zones_for(EyeSide::Left).len()).map(|i| zone_analysis(i, 0.1)).collect();
        let insights = agg.generate_insights(&analyses, EyeSide::Left);
        for insight in &insights {
            assert_eq!(insight.confidence, GENERIC_INSIGHT_CONFIDENCE);
            assert!(!insight.reflection_prompts.is_empty());
            assert!(insight.reflection_prompts.len() <= 2);
        }
    }

    #[test]
    fn confidence_has_a_floor_and_an_empty_case() {
        let agg = aggregator();
        assert_eq!(agg.calculate_confidence(&[]), 0.0);

        let quiet: Vec<ZoneAnalysis> = (0..3).map(|i| zone_analysis(i, 0.0)).collect();
        assert!((agg.calculate_confidence(&quiet) - 0.3).abs() < 1e-9);

        let loud: Vec<ZoneAnalysis> = (0..3).map(|i| zone_analysis(i, 1.0)).collect();
        assert!((agg.calculate_confidence(&loud) - 1.0).abs() < 1e-9);
    }
}
