use crate::error::{Error, Result};
use crate::map::TileMap;
use crate::theme::Theme;
use crate::tile::TileKind;

use image::RgbaImage;
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

/// Serializes the full grid, implicit floor tiles included, as a nested
/// JSON array of tile codes. Row-major: the outer index is the row.
pub fn export_json(map: &TileMap) -> Result<String> {
    Ok(serde_json::to_string(&map.to_dense())?)
}

/// Parses the same nested-array shape back into a map. Parse failures,
/// dimension mismatches and out-of-range codes all reject the whole
/// input; the caller's live map is never partially mutated.
pub fn import_json(text: &str, grid_size: usize) -> Result<TileMap> {
    let rows: Vec<Vec<TileKind>> = serde_json::from_str(text)
        .map_err(|err| Error::MalformedInput(format!("not a tile grid: {err}")))?;

    TileMap::from_dense(grid_size, &rows)
}

pub fn write_json(map: &TileMap, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, &map.to_dense())?;
    writer.flush()?;

    Ok(())
}

pub fn read_json(path: &Path, grid_size: usize) -> Result<TileMap> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(Error::FileNotFound(path.to_path_buf()))
        }
        Err(err) => return Err(err.into()),
    };

    import_json(&text, grid_size)
}

/// Rasterizes the grid: one flat-filled, 1-pixel-outlined square per
/// cell. Axis labels are an on-screen affordance and are not exported.
pub fn render_image(map: &TileMap, cell_size: u32, theme: &Theme) -> RgbaImage {
    let extent = map.grid_size() as u32 * cell_size;
    if extent == 0 {
        return RgbaImage::from_pixel(1, 1, theme.cells[TileKind::Floor]);
    }

    let mut canvas = RgbaImage::from_pixel(extent, extent, theme.cells[TileKind::Floor]);

    for y in 0..map.grid_size() {
        for x in 0..map.grid_size() {
            let rect = Rect::at((x as u32 * cell_size) as i32, (y as u32 * cell_size) as i32)
                .of_size(cell_size, cell_size);

            draw_filled_rect_mut(&mut canvas, rect, theme.cells[map.get((x, y))]);
            draw_hollow_rect_mut(&mut canvas, rect, theme.outline);
        }
    }

    canvas
}

pub fn write_image(map: &TileMap, cell_size: u32, theme: &Theme, path: &Path) -> Result<()> {
    render_image(map, cell_size, theme).save(path)?;

    Ok(())
}
