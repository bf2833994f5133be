//! Static iridology chart: the named annular/angular zones for each eye.
//!
//! The chart is built once at first use and shared by reference across all
//! analysis calls. Zones for one eye may overlap in angle but are intended to
//! tile the iris without gaps; that property is validated by tests rather
//! than enforced at runtime.

use std::f64::consts::{PI, TAU};
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::geometry::angle_in_range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EyeSide {
    Left,
    Right,
}

/// Closed set of physiological categories used to group zones for insight
/// aggregation. Category assignment is an exhaustive match over this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodySystem {
    Digestive,
    Nervous,
    Circulatory,
    Respiratory,
    Musculoskeletal,
    Endocrine,
    Lymphatic,
    Urinary,
    Integumentary,
}

impl fmt::Display for BodySystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BodySystem::Digestive => "Digestive",
            BodySystem::Nervous => "Nervous",
            BodySystem::Circulatory => "Circulatory",
            BodySystem::Respiratory => "Respiratory",
            BodySystem::Musculoskeletal => "Musculoskeletal",
            BodySystem::Endocrine => "Endocrine",
            BodySystem::Lymphatic => "Lymphatic",
            BodySystem::Urinary => "Urinary",
            BodySystem::Integumentary => "Integumentary",
        };
        f.write_str(name)
    }
}

/// Immutable descriptor of one chart zone.
///
/// Angles are radians in `[0, 2π)`; `start_angle > end_angle` expresses an
/// interval crossing the 0/2π seam. Radii are normalized fractions of the
/// minor center-to-edge distance, with `0 <= inner_radius <= outer_radius <= 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IridologyZone {
    pub id: String,
    pub name: String,
    pub body_system: BodySystem,
    pub start_angle: f64,
    pub end_angle: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub description: String,
    pub wellness_reflections: Vec<String>,
}

impl IridologyZone {
    /// Containment predicate in normalized polar coordinates. Radial bounds
    /// are inclusive at both ends.
    pub fn contains(&self, normalized_distance: f64, angle: f64) -> bool {
        normalized_distance >= self.inner_radius
            && normalized_distance <= self.outer_radius
            && angle_in_range(angle, self.start_angle, self.end_angle)
    }

    /// Angular span in radians, wraparound-aware. A full ring reports 2π.
    pub fn angular_span(&self) -> f64 {
        let span = (self.end_angle - self.start_angle).rem_euclid(TAU);
        if span == 0.0 {
            TAU
        } else {
            span
        }
    }
}

/// All chart zones for one eye, in canonical analysis order.
pub fn zones_for(eye: EyeSide) -> &'static [IridologyZone] {
    static LEFT: OnceLock<Vec<IridologyZone>> = OnceLock::new();
    static RIGHT: OnceLock<Vec<IridologyZone>> = OnceLock::new();
    match eye {
        EyeSide::Left => LEFT.get_or_init(|| build_zones(EyeSide::Left)),
        EyeSide::Right => RIGHT.get_or_init(|| build_zones(EyeSide::Right)),
    }
}

// Radial ring boundaries, pupil outward.
const STOMACH_OUTER: f64 = 0.25;
const INTESTINAL_OUTER: f64 = 0.40;
const WREATH_OUTER: f64 = 0.48;
const CILIARY_OUTER: f64 = 0.85;
const LYMPHATIC_OUTER: f64 = 0.93;

// Ciliary organ sectors are eighths of the circle, offset by -π/8 so the
// head sector straddles the 0/2π seam.
const SECTOR: f64 = PI / 4.0;
const SECTOR_OFFSET: f64 = TAU - PI / 8.0;

#[allow(clippy::too_many_arguments)]
fn zone(
    eye: EyeSide,
    slug: &str,
    name: &str,
    body_system: BodySystem,
    start_angle: f64,
    end_angle: f64,
    inner_radius: f64,
    outer_radius: f64,
    description: &str,
    reflections: &[&str],
) -> IridologyZone {
    let prefix = match eye {
        EyeSide::Left => "left",
        EyeSide::Right => "right",
    };
    IridologyZone {
        id: format!("{}-{}", prefix, slug),
        name: name.to_string(),
        body_system,
        start_angle,
        end_angle,
        inner_radius,
        outer_radius,
        description: description.to_string(),
        wellness_reflections: reflections.iter().map(|r| r.to_string()).collect(),
    }
}

fn sector_bounds(index: u32) -> (f64, f64) {
    let start = (SECTOR_OFFSET + index as f64 * SECTOR) % TAU;
    let end = (SECTOR_OFFSET + (index + 1) as f64 * SECTOR) % TAU;
    (start, end)
}

fn build_zones(eye: EyeSide) -> Vec<IridologyZone> {
    let mut zones = Vec::with_capacity(13);

    zones.push(zone(
        eye,
        "stomach-ring",
        "Stomach Ring",
        BodySystem::Digestive,
        0.0,
        TAU,
        0.0,
        STOMACH_OUTER,
        "The innermost ring surrounding the pupil, traditionally associated with the stomach.",
        &[
            "How regular are your meal times?",
            "Do you give yourself time to eat slowly and mindfully?",
        ],
    ));
    zones.push(zone(
        eye,
        "intestinal-ring",
        "Intestinal Ring",
        BodySystem::Digestive,
        0.0,
        TAU,
        STOMACH_OUTER,
        INTESTINAL_OUTER,
        "The ring outside the stomach zone, traditionally mapped to the small and large intestine.",
        &[
            "How much fiber does a typical day of eating include?",
            "Do you stay hydrated throughout the day?",
            "How comfortable is your digestion after meals?",
        ],
    ));
    zones.push(zone(
        eye,
        "nerve-wreath",
        "Autonomic Nerve Wreath",
        BodySystem::Nervous,
        0.0,
        TAU,
        INTESTINAL_OUTER,
        WREATH_OUTER,
        "The ruffled border between the pupillary and ciliary zones, linked to autonomic balance.",
        &[
            "How well do you unwind after a demanding day?",
            "What helps you feel grounded when things speed up?",
        ],
    ));

    let (s0, e0) = sector_bounds(0);
    zones.push(zone(
        eye,
        "head-brain",
        "Head & Brain",
        BodySystem::Nervous,
        s0,
        e0,
        WREATH_OUTER,
        CILIARY_OUTER,
        "The ciliary sector mapped to the head, brain, and mental faculties.",
        &[
            "How rested does your mind feel in the morning?",
            "Do you take breaks from screens during the day?",
        ],
    ));

    let (s1, e1) = sector_bounds(1);
    zones.push(zone(
        eye,
        "sinus-throat",
        "Sinus & Throat",
        BodySystem::Respiratory,
        s1,
        e1,
        WREATH_OUTER,
        CILIARY_OUTER,
        "The ciliary sector mapped to the sinuses, throat, and upper airways.",
        &[
            "How clear does your breathing feel through the day?",
            "Does the air in your usual spaces feel fresh?",
        ],
    ));

    let (s2, e2) = sector_bounds(2);
    match eye {
        EyeSide::Left => zones.push(zone(
            eye,
            "heart",
            "Heart",
            BodySystem::Circulatory,
            s2,
            e2,
            WREATH_OUTER,
            CILIARY_OUTER,
            "The left-eye ciliary sector traditionally mapped to the heart.",
            &[
                "What gets your heart rate up during a normal week?",
                "How do you care for the people and habits close to your heart?",
            ],
        )),
        EyeSide::Right => zones.push(zone(
            eye,
            "liver-gallbladder",
            "Liver & Gallbladder",
            BodySystem::Digestive,
            s2,
            e2,
            WREATH_OUTER,
            CILIARY_OUTER,
            "The right-eye ciliary sector traditionally mapped to the liver and gallbladder.",
            &[
                "How often do richer meals feature in your week?",
                "Do you give your body regular breaks from heavy foods?",
            ],
        )),
    }

    let (s3, e3) = sector_bounds(3);
    zones.push(zone(
        eye,
        "kidney",
        "Kidney",
        BodySystem::Urinary,
        s3,
        e3,
        WREATH_OUTER,
        CILIARY_OUTER,
        "The ciliary sector mapped to the kidney and fluid balance.",
        &[
            "How much water do you drink on an ordinary day?",
            "Do you notice how your energy changes with hydration?",
        ],
    ));

    let (s4, e4) = sector_bounds(4);
    zones.push(zone(
        eye,
        "pelvis-lower-spine",
        "Pelvis & Lower Spine",
        BodySystem::Musculoskeletal,
        s4,
        e4,
        WREATH_OUTER,
        CILIARY_OUTER,
        "The ciliary sector mapped to the pelvis, hips, and lower spine.",
        &[
            "How much of your day is spent sitting?",
            "When did you last stretch your hips and lower back?",
        ],
    ));

    let (s5, e5) = sector_bounds(5);
    zones.push(zone(
        eye,
        "adrenal",
        "Adrenal Glands",
        BodySystem::Endocrine,
        s5,
        e5,
        WREATH_OUTER,
        CILIARY_OUTER,
        "The ciliary sector mapped to the adrenal glands and stress response.",
        &[
            "How steady is your energy across the day?",
            "What does recovery look like for you after intense periods?",
        ],
    ));

    let (s6, e6) = sector_bounds(6);
    zones.push(zone(
        eye,
        "lungs",
        "Lungs & Bronchi",
        BodySystem::Respiratory,
        s6,
        e6,
        WREATH_OUTER,
        CILIARY_OUTER,
        "The ciliary sector mapped to the lungs and bronchial passages.",
        &[
            "How often do you breathe deeply and deliberately?",
            "Does your week include time in open air?",
        ],
    ));

    let (s7, e7) = sector_bounds(7);
    match eye {
        EyeSide::Left => zones.push(zone(
            eye,
            "spleen",
            "Spleen",
            BodySystem::Lymphatic,
            s7,
            e7,
            WREATH_OUTER,
            CILIARY_OUTER,
            "The left-eye ciliary sector traditionally mapped to the spleen.",
            &[
                "How quickly do you tend to bounce back from minor illness?",
                "Do rest and activity feel balanced in your week?",
            ],
        )),
        EyeSide::Right => zones.push(zone(
            eye,
            "shoulder-arm",
            "Shoulder & Arm",
            BodySystem::Musculoskeletal,
            s7,
            e7,
            WREATH_OUTER,
            CILIARY_OUTER,
            "The right-eye ciliary sector mapped to the shoulder, arm, and upper posture.",
            &[
                "How relaxed are your shoulders right now?",
                "Does your posture get attention during long work sessions?",
            ],
        )),
    }

    zones.push(zone(
        eye,
        "lymphatic-rosary",
        "Lymphatic Rosary",
        BodySystem::Lymphatic,
        0.0,
        TAU,
        CILIARY_OUTER,
        LYMPHATIC_OUTER,
        "The ring near the iris edge traditionally associated with lymphatic circulation.",
        &[
            "How much gentle movement does your day include?",
            "Do you make room for activities that get you lightly sweating?",
        ],
    ));
    zones.push(zone(
        eye,
        "skin-ring",
        "Skin Ring",
        BodySystem::Integumentary,
        0.0,
        TAU,
        LYMPHATIC_OUTER,
        1.0,
        "The outermost ring of the iris, traditionally associated with the skin.",
        &[
            "How does your skin respond to your current routine?",
            "Are you getting sunlight in moderation?",
        ],
    ));

    zones
}
