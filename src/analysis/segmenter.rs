//! Pixel-level zone segmentation in normalized polar coordinates.

use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::catalog::IridologyZone;
use crate::config::SamplingConfig;
use crate::geometry::{normalize_angle, Point2D};

/// Axis-aligned pixel region covering one zone's approximate footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ZoneBox {
    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Classifies pixels against the chart in normalized polar coordinates.
///
/// The per-pixel predicate is evaluated independently over the whole raster,
/// O(W·H) per zone, so the inner loops stay free of per-pixel allocation.
pub struct ZoneSegmenter {
    bbox_angular_samples: u32,
    bbox_padding_px: u32,
}

impl ZoneSegmenter {
    pub fn new(sampling: &SamplingConfig) -> Self {
        Self {
            bbox_angular_samples: sampling.bbox_angular_samples,
            bbox_padding_px: sampling.bbox_padding_px,
        }
    }

    /// All pixel values whose normalized polar coordinates fall inside the
    /// zone. A degenerate zone yields an empty set, never an error.
    pub fn zone_pixels(&self, image: &RgbImage, zone: &IridologyZone) -> Vec<Rgb<u8>> {
        let (width, height) = image.dimensions();
        let geometry = match IrisGeometry::of(width, height) {
            Some(g) => g,
            None => return Vec::new(),
        };

        let mut pixels = Vec::new();
        for y in 0..height {
            for x in 0..width {
                let (distance, angle) = geometry.to_polar(x, y);
                if zone.contains(distance, angle) {
                    pixels.push(*image.get_pixel(x, y));
                }
            }
        }
        pixels
    }

    /// Binary raster of the zone footprint: white inside, black outside.
    pub fn zone_mask(&self, image: &RgbImage, zone: &IridologyZone) -> GrayImage {
        let (width, height) = image.dimensions();
        let mut mask = GrayImage::new(width, height);
        let geometry = match IrisGeometry::of(width, height) {
            Some(g) => g,
            None => return mask,
        };

        for y in 0..height {
            for x in 0..width {
                let (distance, angle) = geometry.to_polar(x, y);
                if zone.contains(distance, angle) {
                    mask.put_pixel(x, y, Luma([255u8]));
                }
            }
        }
        mask
    }

    /// Approximate bounding box from angular samples at the inner and outer
    /// radius, padded and clamped to the image. `None` when the padded box
    /// has non-positive extent.
    pub fn zone_bounding_box(
        &self,
        width: u32,
        height: u32,
        zone: &IridologyZone,
    ) -> Option<ZoneBox> {
        let geometry = IrisGeometry::of(width, height)?;
        let span = zone.angular_span();
        let samples = self.bbox_angular_samples;

        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for i in 0..=samples {
            let angle = zone.start_angle + span * i as f64 / samples as f64;
            for radius in [zone.inner_radius, zone.outer_radius] {
                let p = geometry.to_cartesian(radius, angle);
                min_x = min_x.min(p.x);
                max_x = max_x.max(p.x);
                min_y = min_y.min(p.y);
                max_y = max_y.max(p.y);
            }
        }

        let pad = self.bbox_padding_px as f64;
        let x0 = (min_x - pad).max(0.0).floor() as i64;
        let y0 = (min_y - pad).max(0.0).floor() as i64;
        let x1 = (max_x + pad).min(width as f64).ceil() as i64;
        let y1 = (max_y + pad).min(height as f64).ceil() as i64;

        let box_width = x1 - x0;
        let box_height = y1 - y0;
        if box_width <= 0 || box_height <= 0 {
            return None;
        }

        Some(ZoneBox {
            x: x0 as u32,
            y: y0 as u32,
            width: box_width as u32,
            height: box_height as u32,
        })
    }

    /// Crop of the zone's bounding box, `None` when the box is degenerate.
    pub fn extract_zone_image(&self, image: &RgbImage, zone: &IridologyZone) -> Option<RgbImage> {
        let (width, height) = image.dimensions();
        let bbox = self.zone_bounding_box(width, height, zone)?;
        Some(image::imageops::crop_imm(image, bbox.x, bbox.y, bbox.width, bbox.height).to_image())
    }

    /// Closed-form zone center: midpoint radius at midpoint angle, converted
    /// back to Cartesian. Not a centroid of the contained pixels.
    pub fn zone_center(&self, width: u32, height: u32, zone: &IridologyZone) -> Point2D {
        let center = Point2D::new(width as f64 / 2.0, height as f64 / 2.0);
        let geometry = match IrisGeometry::of(width, height) {
            Some(g) => g,
            None => return center,
        };
        let mid_radius = (zone.inner_radius + zone.outer_radius) / 2.0;
        let mid_angle = normalize_angle(zone.start_angle + zone.angular_span() / 2.0);
        geometry.to_cartesian(mid_radius, mid_angle)
    }
}

impl Default for ZoneSegmenter {
    fn default() -> Self {
        Self::new(&SamplingConfig::default())
    }
}

/// Center and scale of the polar frame for one raster.
#[derive(Debug, Clone, Copy)]
struct IrisGeometry {
    center_x: f64,
    center_y: f64,
    max_radius: f64,
}

impl IrisGeometry {
    fn of(width: u32, height: u32) -> Option<Self> {
        let max_radius = width.min(height) as f64 / 2.0;
        if max_radius <= 0.0 {
            return None;
        }
        Some(Self {
            center_x: width as f64 / 2.0,
            center_y: height as f64 / 2.0,
            max_radius,
        })
    }

    /// `(normalized_distance, angle)` of a pixel, angle in `[0, 2π)`.
    fn to_polar(&self, x: u32, y: u32) -> (f64, f64) {
        let dx = x as f64 - self.center_x;
        let dy = y as f64 - self.center_y;
        let distance = (dx * dx + dy * dy).sqrt();
        let angle = normalize_angle(dy.atan2(dx));
        (distance / self.max_radius, angle)
    }

    fn to_cartesian(&self, normalized_radius: f64, angle: f64) -> Point2D {
        let r = normalized_radius * self.max_radius;
        Point2D::new(self.center_x + r * angle.cos(), self.center_y + r * angle.sin())
    }
}
