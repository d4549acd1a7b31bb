use crate::tile::TileKind;
use enum_map::{enum_map, EnumMap};
use image::Rgba;

/// Colors shared by the on-screen renderer and the PNG exporter. The
/// exported raster only uses `cells` and `outline`; everything else is a
/// screen affordance.
#[derive(Debug, Clone)]
pub struct Theme {
    pub cells: EnumMap<TileKind, Rgba<u8>>,
    pub outline: Rgba<u8>,
    pub grid_line: Rgba<u8>,
    pub background: Rgba<u8>,
    pub text: Rgba<u8>,
    pub panel: Rgba<u8>,
    pub panel_active: Rgba<u8>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            cells: enum_map! {
                TileKind::Floor => Rgba([236, 236, 236, 255]),
                TileKind::Obstacle => Rgba([52, 52, 52, 255]),
                TileKind::Vacuum => Rgba([66, 135, 245, 255]),
            },
            outline: Rgba([120, 120, 120, 255]),
            grid_line: Rgba([182, 182, 182, 255]),
            background: Rgba([245, 245, 245, 255]),
            text: Rgba([20, 20, 20, 255]),
            panel: Rgba([226, 226, 226, 255]),
            panel_active: Rgba([188, 210, 245, 255]),
        }
    }
}
