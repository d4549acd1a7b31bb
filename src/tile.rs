use enum_map::Enum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One cell of the map. `Floor` is the implicit default: the map only
/// stores entries for the other two kinds. JSON snapshots carry the
/// integer codes, through the `u8` conversions below.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TileKind {
    #[default]
    Floor,
    Obstacle,
    Vacuum,
}

impl TileKind {
    /// Integer code used by the JSON snapshot format.
    pub fn code(self) -> u8 {
        match self {
            TileKind::Floor => 0,
            TileKind::Obstacle => 1,
            TileKind::Vacuum => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(TileKind::Floor),
            1 => Some(TileKind::Obstacle),
            2 => Some(TileKind::Vacuum),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TileKind::Floor => "Floor",
            TileKind::Obstacle => "Obstacle",
            TileKind::Vacuum => "Vacuum",
        }
    }
}

impl From<TileKind> for u8 {
    fn from(kind: TileKind) -> Self {
        kind.code()
    }
}

impl TryFrom<u8> for TileKind {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("invalid tile code {}", code))
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
