//! Result records that flow out of the analysis pipeline.
//!
//! Everything here is a plain, serializable value object: created fresh per
//! analysis call, immutable afterwards, owned by the caller once returned.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::color::ColorProfile;
use crate::analysis::texture::TextureFeatures;
use crate::catalog::{BodySystem, EyeSide, IridologyZone};

/// One of five reflection categories a wellness insight is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InsightCategory {
    Nutrition,
    Activity,
    Stress,
    Lifestyle,
    General,
}

impl InsightCategory {
    /// Total mapping from body system to category, checked at compile time.
    pub fn for_system(system: BodySystem) -> Self {
        match system {
            BodySystem::Digestive | BodySystem::Urinary => InsightCategory::Nutrition,
            BodySystem::Circulatory
            | BodySystem::Respiratory
            | BodySystem::Musculoskeletal => InsightCategory::Activity,
            BodySystem::Nervous => InsightCategory::Stress,
            BodySystem::Endocrine | BodySystem::Integumentary => InsightCategory::Lifestyle,
            BodySystem::Lymphatic => InsightCategory::General,
        }
    }
}

/// Per-zone measurement record, one per catalog zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneAnalysis {
    pub zone: &'static IridologyZone,
    pub color_profile: ColorProfile,
    pub texture_features: TextureFeatures,
    pub observations: Vec<String>,
    pub significance_score: f64,
}

impl ZoneAnalysis {
    pub fn is_notable(&self, threshold: f64) -> bool {
        self.significance_score >= threshold
    }
}

/// Human-readable wellness reflection tied to the zones of one body system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WellnessInsight {
    pub id: Uuid,
    pub body_system: BodySystem,
    pub title: String,
    pub description: String,
    pub reflection_prompts: Vec<String>,
    pub category: InsightCategory,
    pub confidence: f64,
    pub related_zones: Vec<String>,
}

/// Root analysis record for one eye.
#[derive(Debug, Clone, Serialize)]
pub struct IridologyAnalysis {
    pub id: Uuid,
    pub eye_side: EyeSide,
    pub zone_analyses: Vec<ZoneAnalysis>,
    pub insights: Vec<WellnessInsight>,
    pub overall_color: ColorProfile,
    pub timestamp: DateTime<Utc>,
    pub analysis_confidence: f64,
}
