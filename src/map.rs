use crate::error::{Error, Result};
use crate::tile::TileKind;
use std::collections::HashMap;

/// (column, row), both in `[0, grid_size)`.
pub type Position = (usize, usize);

/// Sparse tile storage: only non-Floor cells have entries. At most one
/// cell holds `Vacuum` at any time; placing a new one clears the old.
#[derive(Debug, Clone)]
pub struct TileMap {
    cells: HashMap<Position, TileKind>,
    grid_size: usize,
    vacuum: Option<Position>,
}

impl TileMap {
    pub fn new(grid_size: usize) -> Self {
        Self {
            cells: HashMap::new(),
            grid_size,
            vacuum: None,
        }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn in_bounds(&self, (x, y): Position) -> bool {
        x < self.grid_size && y < self.grid_size
    }

    /// Total over any input: absent and out-of-range positions read as
    /// `Floor`.
    pub fn get(&self, pos: Position) -> TileKind {
        self.cells.get(&pos).copied().unwrap_or_default()
    }

    /// Writes one cell. The undo entry for the previous value is the
    /// caller's responsibility, captured before calling this; because
    /// recording lives with the caller, undo restores through this same
    /// method and the vacuum singleton holds after every operation.
    pub fn set(&mut self, pos: Position, kind: TileKind) -> Result<()> {
        if !self.in_bounds(pos) {
            return Err(Error::OutOfBounds {
                x: pos.0,
                y: pos.1,
                size: self.grid_size,
            });
        }

        match kind {
            TileKind::Floor => {
                self.cells.remove(&pos);
                if self.vacuum == Some(pos) {
                    self.vacuum = None;
                }
            }
            TileKind::Obstacle => {
                self.cells.insert(pos, kind);
                if self.vacuum == Some(pos) {
                    self.vacuum = None;
                }
            }
            TileKind::Vacuum => {
                if let Some(previous) = self.vacuum.replace(pos) {
                    if previous != pos {
                        self.cells.remove(&previous);
                    }
                }
                self.cells.insert(pos, kind);
            }
        }

        Ok(())
    }

    /// Location of the singleton vacuum tile, if one is placed.
    pub fn vacuum(&self) -> Option<Position> {
        self.vacuum
    }

    /// Number of explicit (non-Floor) entries.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, TileKind)> + '_ {
        self.cells.iter().map(|(&pos, &kind)| (pos, kind))
    }

    /// Dense row-major grid; outer index is the row.
    pub fn to_dense(&self) -> Vec<Vec<TileKind>> {
        (0..self.grid_size)
            .map(|y| (0..self.grid_size).map(|x| self.get((x, y))).collect())
            .collect()
    }

    /// Rebuilds a map from a dense grid, re-encoding sparsely (Floor cells
    /// are dropped). Dimensions are validated up front so a bad grid never
    /// produces a partial map.
    pub fn from_dense(grid_size: usize, rows: &[Vec<TileKind>]) -> Result<Self> {
        if rows.len() != grid_size {
            return Err(Error::MalformedInput(format!(
                "expected {} rows, found {}",
                grid_size,
                rows.len()
            )));
        }

        let mut map = Self::new(grid_size);

        for (y, row) in rows.iter().enumerate() {
            if row.len() != grid_size {
                return Err(Error::MalformedInput(format!(
                    "row {} has {} columns, expected {}",
                    y,
                    row.len(),
                    grid_size
                )));
            }

            for (x, &kind) in row.iter().enumerate() {
                if kind != TileKind::Floor {
                    map.set((x, y), kind)?;
                }
            }
        }

        Ok(map)
    }
}
