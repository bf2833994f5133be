//! Aggregate color statistics and categorical iris-color classification.

use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

/// Categorical iris color, classified against fixed reference hue and
/// brightness bands. Low-saturation pixels classify as Mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DominantColor {
    Blue,
    Green,
    Brown,
    Hazel,
    Mixed,
}

/// Aggregate color statistics over one pixel set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorProfile {
    /// Mean channel values, 0-255.
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    /// Mean of the channel means over 255, in [0, 1].
    pub brightness: f64,
    /// HSV-style max-minus-min channel spread over max, in [0, 1].
    pub saturation: f64,
    pub dominant_color: DominantColor,
    /// Number of pixels the profile was computed from.
    pub sample_count: usize,
}

impl ColorProfile {
    /// Neutral zero profile returned for empty pixel sets. Callers should
    /// check emptiness before reading meaningful values.
    pub fn empty() -> Self {
        Self {
            red: 0.0,
            green: 0.0,
            blue: 0.0,
            brightness: 0.0,
            saturation: 0.0,
            dominant_color: DominantColor::Mixed,
            sample_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sample_count == 0
    }
}

// Reference bands for classification; hue in degrees on the usual HSV wheel.
const BLUE_HUE_MIN: f64 = 180.0;
const BLUE_HUE_MAX: f64 = 260.0;
const GREEN_HUE_MIN: f64 = 70.0;
const WARM_HUE_MAX: f64 = 70.0;
// Below this saturation the hue is too unstable to classify.
const NEUTRAL_SATURATION: f64 = 0.12;
// Warm hues split into brown (dark) and hazel (light) at this brightness.
const BROWN_BRIGHTNESS_MAX: f64 = 0.45;

pub struct ColorAnalyzer;

impl ColorAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate profile of a pixel set; the empty set yields the defined
    /// neutral profile rather than failing.
    pub fn analyze_pixels(&self, pixels: &[Rgb<u8>]) -> ColorProfile {
        if pixels.is_empty() {
            return ColorProfile::empty();
        }

        let mut sum_r = 0u64;
        let mut sum_g = 0u64;
        let mut sum_b = 0u64;
        for px in pixels {
            sum_r += px.0[0] as u64;
            sum_g += px.0[1] as u64;
            sum_b += px.0[2] as u64;
        }

        let n = pixels.len() as f64;
        let red = sum_r as f64 / n;
        let green = sum_g as f64 / n;
        let blue = sum_b as f64 / n;

        let brightness = (red + green + blue) / 3.0 / 255.0;
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let saturation = if max > 0.0 { (max - min) / max } else { 0.0 };

        let dominant_color = self.classify(red, green, blue, brightness, saturation);

        ColorProfile {
            red,
            green,
            blue,
            brightness,
            saturation,
            dominant_color,
            sample_count: pixels.len(),
        }
    }

    /// Baseline profile over the whole raster.
    pub fn analyze_overall(&self, image: &RgbImage) -> ColorProfile {
        let pixels: Vec<Rgb<u8>> = image.pixels().copied().collect();
        self.analyze_pixels(&pixels)
    }

    fn classify(
        &self,
        red: f64,
        green: f64,
        blue: f64,
        brightness: f64,
        saturation: f64,
    ) -> DominantColor {
        if saturation < NEUTRAL_SATURATION {
            return DominantColor::Mixed;
        }

        let hue = hue_degrees(red, green, blue);
        if (BLUE_HUE_MIN..=BLUE_HUE_MAX).contains(&hue) {
            DominantColor::Blue
        } else if (GREEN_HUE_MIN..BLUE_HUE_MIN).contains(&hue) {
            DominantColor::Green
        } else if hue < WARM_HUE_MAX {
            if brightness < BROWN_BRIGHTNESS_MAX {
                DominantColor::Brown
            } else {
                DominantColor::Hazel
            }
        } else {
            DominantColor::Mixed
        }
    }
}

impl Default for ColorAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// HSV hue of a mean color, in degrees `[0, 360)`; 0.0 for achromatic input.
fn hue_degrees(red: f64, green: f64, blue: f64) -> f64 {
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let delta = max - min;
    if delta == 0.0 {
        return 0.0;
    }

    let hue = if max == red {
        60.0 * (((green - blue) / delta) % 6.0)
    } else if max == green {
        60.0 * ((blue - red) / delta + 2.0)
    } else {
        60.0 * ((red - green) / delta + 4.0)
    };

    if hue < 0.0 {
        hue + 360.0
    } else {
        hue
    }
}
