use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

/// 2D point in image pixel space (origin top-left, y growing downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn squared_distance_to(&self, other: &Point2D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Angle from self to other, atan2 convention, in `(-π, π]`.
    pub fn angle_to(&self, other: &Point2D) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

/// Normalize an atan2-style angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let mut a = angle % TAU;
    if a < 0.0 {
        a += TAU;
    }
    a
}

/// Inclusive angular interval test with wraparound support.
///
/// `start > end` means the interval crosses the 0/2π seam, e.g.
/// `(5.5, 0.5)` contains `0.0` and `5.9` but not `3.0`.
pub fn angle_in_range(angle: f64, start: f64, end: f64) -> bool {
    if start <= end {
        angle >= start && angle <= end
    } else {
        angle >= start || angle <= end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn squared_distance_is_symmetric() {
        let a = Point2D::new(1.0, 2.0);
        let b = Point2D::new(4.0, 6.0);
        assert_eq!(a.squared_distance_to(&b), 25.0);
        assert_eq!(b.squared_distance_to(&a), 25.0);
    }

    #[test]
    fn angle_to_follows_atan2_convention() {
        let origin = Point2D::new(0.0, 0.0);
        assert_eq!(origin.angle_to(&Point2D::new(1.0, 0.0)), 0.0);
        assert!((origin.angle_to(&Point2D::new(0.0, 1.0)) - PI / 2.0).abs() < 1e-12);
        assert!((origin.angle_to(&Point2D::new(-1.0, 0.0)) - PI).abs() < 1e-12);
    }

    #[test]
    fn normalize_angle_maps_negative_into_range() {
        assert!((normalize_angle(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-12);
        assert_eq!(normalize_angle(0.0), 0.0);
        assert!(normalize_angle(TAU) < 1e-12);
    }

    #[test]
    fn angle_range_handles_wraparound() {
        // Interval crossing the seam must contain 0.0 and reject 3.0.
        assert!(angle_in_range(0.0, 5.5, 0.5));
        assert!(angle_in_range(5.9, 5.5, 0.5));
        assert!(!angle_in_range(3.0, 5.5, 0.5));

        // Plain interval.
        assert!(angle_in_range(1.0, 0.5, 1.5));
        assert!(!angle_in_range(2.0, 0.5, 1.5));
    }
}
