/// Configuration for iris analysis with tunable scoring and sampling parameters
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub scoring: ScoringWeights,
    pub thresholds: FeatureThresholds,
    pub sampling: SamplingConfig,
}

/// Additive significance-score weights. The raw sum may exceed 1.0; the
/// aggregator clamps, which is the defined saturation policy.
#[derive(Debug, Clone)]
pub struct ScoringWeights {
    pub brightness_weight: f64,
    pub saturation_weight: f64,
    pub uniformity_weight: f64,
    pub per_observation_weight: f64,
}

#[derive(Debug, Clone)]
pub struct FeatureThresholds {
    /// Brightness inside [low, high] is considered unremarkable.
    pub brightness_low: f64,
    pub brightness_high: f64,
    /// Saturation above this contributes to the significance score.
    pub saturation_score_min: f64,
    /// Saturation above this triggers the intensity observation.
    pub saturation_note_min: f64,
    /// Uniformity below this contributes to the significance score.
    pub uniformity_low: f64,
    /// Zones at or above this significance qualify as notable.
    pub notability: f64,
    /// Texture on fewer samples than this is not meaningful.
    pub min_texture_samples: usize,
}

#[derive(Debug, Clone)]
pub struct SamplingConfig {
    /// Angular sample count for bounding-box estimation. A heuristic
    /// approximation of the true zone footprint; can undershoot for highly
    /// curved zones, so it stays tunable.
    pub bbox_angular_samples: u32,
    /// Fixed pixel padding added around the sampled bounding box.
    pub bbox_padding_px: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringWeights::default(),
            thresholds: FeatureThresholds::default(),
            sampling: SamplingConfig::default(),
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            brightness_weight: 0.3,
            saturation_weight: 0.2,
            uniformity_weight: 0.2,
            per_observation_weight: 0.1,
        }
    }
}

impl Default for FeatureThresholds {
    fn default() -> Self {
        Self {
            brightness_low: 0.3,
            brightness_high: 0.7,
            saturation_score_min: 0.5,
            saturation_note_min: 0.6,
            uniformity_low: 0.6,
            notability: 0.5,
            min_texture_samples: 10,
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            bbox_angular_samples: 20,
            bbox_padding_px: 5,
        }
    }
}

impl AnalysisConfig {
    /// Configuration that only flags strongly deviating zones.
    pub fn strict() -> Self {
        Self {
            thresholds: FeatureThresholds {
                brightness_low: 0.2,
                brightness_high: 0.8,
                saturation_score_min: 0.6,
                saturation_note_min: 0.7,
                uniformity_low: 0.5,
                notability: 0.7,
                ..FeatureThresholds::default()
            },
            ..Self::default()
        }
    }

    /// Configuration that surfaces insights for mildly deviating zones.
    pub fn lenient() -> Self {
        Self {
            thresholds: FeatureThresholds {
                brightness_low: 0.35,
                brightness_high: 0.65,
                saturation_score_min: 0.4,
                saturation_note_min: 0.5,
                uniformity_low: 0.7,
                notability: 0.35,
                ..FeatureThresholds::default()
            },
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let w = &self.scoring;
        for (name, value) in [
            ("brightness_weight", w.brightness_weight),
            ("saturation_weight", w.saturation_weight),
            ("uniformity_weight", w.uniformity_weight),
            ("per_observation_weight", w.per_observation_weight),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be in [0, 1], got {}", name, value));
            }
        }

        let t = &self.thresholds;
        if t.brightness_low > t.brightness_high {
            return Err(format!(
                "brightness_low {} exceeds brightness_high {}",
                t.brightness_low, t.brightness_high
            ));
        }
        if !(0.0..=1.0).contains(&t.notability) {
            return Err(format!("notability must be in [0, 1], got {}", t.notability));
        }
        if self.sampling.bbox_angular_samples == 0 {
            return Err("bbox_angular_samples must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(AnalysisConfig::default().validate().is_ok());
        assert!(AnalysisConfig::strict().validate().is_ok());
        assert!(AnalysisConfig::lenient().validate().is_ok());
    }

    #[test]
    fn inverted_brightness_band_is_rejected() {
        let mut config = AnalysisConfig::default();
        config.thresholds.brightness_low = 0.8;
        config.thresholds.brightness_high = 0.2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_bbox_samples_is_rejected() {
        let mut config = AnalysisConfig::default();
        config.sampling.bbox_angular_samples = 0;
        assert!(config.validate().is_err());
    }
}
