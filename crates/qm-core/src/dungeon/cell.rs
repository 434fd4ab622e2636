//! Map cell types and wall identifiers

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::{S_DEBRIS, S_DOOR, S_FLOOR, S_PASSAGE, S_STAIRS, S_WALL};

/// Cell/terrain type for one grid square of a room
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum CellType {
    #[default]
    Floor = 0,
    /// Floor with a scattered debris glyph
    Debris = 1,
    Wall = 2,
    /// Back door: the connecting passage to the previous room
    Door = 3,
    /// Forward passage: the next room's doorway, seen from this side
    Passage = 4,
    /// Stage exit, placed in the last room only
    Stairs = 5,
}

impl CellType {
    /// Check if this is a door-like connector (either side of a doorway)
    pub const fn is_connector(&self) -> bool {
        matches!(self, CellType::Door | CellType::Passage)
    }

    /// Check if the player can stand here
    pub const fn is_passable(&self) -> bool {
        !matches!(self, CellType::Wall)
    }

    /// Get the display character for this cell type
    pub const fn symbol(&self) -> char {
        match self {
            CellType::Floor => S_FLOOR,
            CellType::Debris => S_DEBRIS,
            CellType::Wall => S_WALL,
            CellType::Door => S_DOOR,
            CellType::Passage => S_PASSAGE,
            CellType::Stairs => S_STAIRS,
        }
    }
}

/// Identifier for one of a room's four perimeter sides.
///
/// The numbering (1-4) is part of the stage's door-wall alternation
/// contract: doors on consecutive rooms land on complementary walls.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum WallSide {
    Top = 1,
    Right = 2,
    Bottom = 3,
    Left = 4,
}

impl WallSide {
    /// Numeric wall identifier (1-4)
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The complementary wall: 1->3, 2->4, 3->1, 4->2
    pub const fn complement(self) -> Self {
        match self {
            WallSide::Top => WallSide::Bottom,
            WallSide::Right => WallSide::Left,
            WallSide::Bottom => WallSide::Top,
            WallSide::Left => WallSide::Right,
        }
    }

    /// Top and bottom walls run along the width; left and right walls run
    /// along the height. Door offsets follow the matching dimension.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, WallSide::Top | WallSide::Bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn wall_symbols() {
        assert_eq!(CellType::Floor.symbol(), '.');
        assert_eq!(CellType::Wall.symbol(), '#');
        assert_eq!(CellType::Door.symbol(), '+');
        assert_eq!(CellType::Stairs.symbol(), '>');
    }

    #[test]
    fn only_walls_block() {
        for cell in CellType::iter() {
            assert_eq!(cell.is_passable(), cell != CellType::Wall);
        }
    }

    #[test]
    fn complement_cycle() {
        assert_eq!(WallSide::Top.complement(), WallSide::Bottom);
        assert_eq!(WallSide::Right.complement(), WallSide::Left);
        assert_eq!(WallSide::Bottom.complement(), WallSide::Top);
        assert_eq!(WallSide::Left.complement(), WallSide::Right);
        for wall in WallSide::iter() {
            assert_eq!(wall.complement().complement(), wall);
        }
    }

    #[test]
    fn wall_indices_match_contract() {
        assert_eq!(WallSide::Top.index(), 1);
        assert_eq!(WallSide::Right.index(), 2);
        assert_eq!(WallSide::Bottom.index(), 3);
        assert_eq!(WallSide::Left.index(), 4);
    }
}
