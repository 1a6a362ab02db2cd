use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

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
            let hsl = Hsl::new(hue, 0.65, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tag colours: culture tag → Color32
// ---------------------------------------------------------------------------

/// Stable colour per tag so the same culture tag reads the same in every row.
#[derive(Debug, Clone)]
pub struct TagColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl TagColors {
    pub fn new<'a>(tags: impl IntoIterator<Item = &'a String>) -> Self {
        let tags: Vec<&String> = tags.into_iter().collect();
        let palette = generate_palette(tags.len());
        let mapping = tags
            .into_iter()
            .zip(palette)
            .map(|(tag, c)| (tag.clone(), c))
            .collect();

        TagColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, tag: &str) -> Color32 {
        self.mapping
            .get(tag)
            .copied()
            .unwrap_or(self.default_color)
    }
}
