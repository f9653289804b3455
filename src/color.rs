use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use exoquest::data::aggregate::{KNOWN_CLASSES, UNKNOWN_CLASS};

// ---------------------------------------------------------------------------
// HSL → Color32
// ---------------------------------------------------------------------------

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Classification bucket → Color32
// ---------------------------------------------------------------------------

/// Fixed colours for the classification buckets, shared by charts and table.
#[derive(Debug, Clone)]
pub struct ClassColors {
    mapping: BTreeMap<&'static str, Color32>,
    default_color: Color32,
}

impl Default for ClassColors {
    fn default() -> Self {
        // CONFIRMED, CANDIDATE, FALSE POSITIVE
        let hues = [(193.0, 0.82, 0.50), (32.0, 0.95, 0.55), (330.0, 0.81, 0.65)];
        let mut mapping: BTreeMap<&'static str, Color32> = KNOWN_CLASSES
            .iter()
            .zip(hues)
            .map(|(label, (h, s, l))| (*label, hsl_to_color32(h, s, l)))
            .collect();
        mapping.insert(UNKNOWN_CLASS, Color32::GRAY);

        ClassColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }
}

impl ClassColors {
    /// Colour for an aggregation bucket label.
    pub fn color_for(&self, bucket: &str) -> Color32 {
        self.mapping
            .get(bucket)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Return the legend entries (bucket → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(&'static str, Color32)> {
        KNOWN_CLASSES
            .iter()
            .chain(std::iter::once(&UNKNOWN_CLASS))
            .map(|label| (*label, self.color_for(label)))
            .collect()
    }
}
