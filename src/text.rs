use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use log::warn;
use rusttype::{point, Font, Scale};
use std::fs;
use std::path::Path;

const FONT_SEARCH_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Turns a string, pixel size and color into a tightly sized RGBA image.
/// This is the only text path in the application; when no font can be
/// found the renderer is simply absent and labels are skipped.
pub struct LabelRenderer {
    font: Font<'static>,
}

impl LabelRenderer {
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let data =
            fs::read(path).map_err(|e| format!("failed to read font {}: {}", path.display(), e))?;
        let font = Font::try_from_vec(data)
            .ok_or_else(|| format!("not a usable font: {}", path.display()))?;

        Ok(Self { font })
    }

    /// Probes well-known system font locations.
    pub fn discover() -> Option<Self> {
        for candidate in FONT_SEARCH_PATHS {
            let path = Path::new(candidate);

            if path.exists() {
                match Self::from_file(path) {
                    Ok(renderer) => return Some(renderer),
                    Err(err) => warn!("{}", err),
                }
            }
        }

        None
    }

    pub fn render(&self, text: &str, size: f32, color: Rgba<u8>) -> RgbaImage {
        let scale = Scale::uniform(size);
        let v_metrics = self.font.v_metrics(scale);

        let height = (v_metrics.ascent - v_metrics.descent).ceil().max(1.0) as u32;
        let width = self
            .font
            .layout(text, scale, point(0.0, v_metrics.ascent))
            .filter_map(|glyph| glyph.pixel_bounding_box().map(|bb| bb.max.x))
            .max()
            .unwrap_or(1)
            .max(1) as u32;

        let mut image = RgbaImage::new(width, height);
        draw_text_mut(&mut image, color, 0, 0, scale, &self.font, text);

        image
    }
}
