use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Membership;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            hsl_to_color32(Hsl::new(hue, 0.75, 0.55))
        })
        .collect()
}

fn hsl_to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Categorical colours: membership flag → Color32
// ---------------------------------------------------------------------------

/// Two fixed hues for the In-Spec / Out-of-Spec legend.
pub fn membership_color(flag: Membership) -> Color32 {
    let palette = generate_palette(2);
    match flag {
        Membership::InSpec => palette[0],
        Membership::OutOfSpec => palette[1],
    }
}

// ---------------------------------------------------------------------------
// Continuous colours: numeric column → gradient
// ---------------------------------------------------------------------------

/// Maps values in `[min, max]` onto a dark-blue → yellow gradient, walked
/// through HSL hue space. Values outside the range are clamped.
#[derive(Debug, Clone, Copy)]
pub struct Gradient {
    min: f64,
    max: f64,
}

impl Gradient {
    pub fn new(min: f64, max: f64) -> Self {
        Gradient { min, max }
    }

    /// Fit a gradient to the values present in `values`; `None` entries are
    /// skipped. A constant or empty column degenerates to a single colour.
    pub fn fit(values: impl Iterator<Item = Option<f64>>) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values.flatten() {
            min = min.min(v);
            max = max.max(v);
        }
        if min > max {
            // No finite values at all.
            return Gradient::new(0.0, 1.0);
        }
        Gradient { min, max }
    }

    pub fn color_for(&self, value: f64) -> Color32 {
        let range = self.max - self.min;
        let t = if range.abs() < f64::EPSILON {
            0.5
        } else {
            ((value - self.min) / range).clamp(0.0, 1.0)
        };
        // 250° (blue) down to 60° (yellow), brightening along the way.
        let hue = 250.0 - 190.0 * t as f32;
        let lightness = 0.35 + 0.3 * t as f32;
        hsl_to_color32(Hsl::new(hue, 0.8, lightness))
    }
}

/// Fallback for rows with no colour encoding or a missing colour value.
pub const DEFAULT_POINT_COLOR: Color32 = Color32::LIGHT_BLUE;
