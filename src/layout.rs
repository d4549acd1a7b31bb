use crate::map::Position;
use core::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (raw_width, raw_height) = s.split_once('x').ok_or(format!("invalid format: {}", s))?;

        let width = raw_width
            .parse::<u32>()
            .map_err(|_| format!("invalid width: {}", raw_width))?;
        let height = raw_height
            .parse::<u32>()
            .map_err(|_| format!("invalid height: {}", raw_height))?;

        Ok(Size { width, height })
    }
}

/// Pixel geometry of the centered grid: `grid_size` cells per side, each
/// `cell_size` pixels, centered in the viewport. Offsets use floor
/// division and go negative when the grid is larger than the viewport.
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    grid_size: usize,
    cell_size: u32,
    viewport: Size,
}

impl GridLayout {
    pub fn new(grid_size: usize, cell_size: u32, viewport: Size) -> Self {
        Self {
            grid_size,
            cell_size,
            viewport,
        }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Side length of the grid in pixels.
    pub fn pixel_extent(&self) -> u32 {
        self.grid_size as u32 * self.cell_size
    }

    /// Top-left corner of cell (0, 0).
    pub fn origin(&self) -> (i32, i32) {
        let extent = self.pixel_extent() as i32;

        (
            (self.viewport.width as i32 - extent).div_euclid(2),
            (self.viewport.height as i32 - extent).div_euclid(2),
        )
    }

    /// Maps a viewport pixel to the cell under it. Pixels outside the
    /// grid rectangle are rejected, never clamped or wrapped.
    pub fn pixel_to_position(&self, px: i32, py: i32) -> Option<Position> {
        let (ox, oy) = self.origin();
        let cell = self.cell_size as i32;

        let dx = px - ox;
        let dy = py - oy;

        if dx < 0 || dy < 0 || cell == 0 {
            return None;
        }

        let x = (dx / cell) as usize;
        let y = (dy / cell) as usize;

        if x >= self.grid_size || y >= self.grid_size {
            return None;
        }

        Some((x, y))
    }

    /// Pixel rectangle (x, y, w, h) of one cell.
    pub fn cell_rect(&self, (x, y): Position) -> (i32, i32, u32, u32) {
        let (ox, oy) = self.origin();
        let cell = self.cell_size as i32;

        (
            ox + x as i32 * cell,
            oy + y as i32 * cell,
            self.cell_size,
            self.cell_size,
        )
    }
}
