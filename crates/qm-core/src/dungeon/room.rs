//! Room generation
//!
//! A room is a rectangular chamber: walled perimeter, floor interior with
//! scattered debris, at most one back door, and in the last room of a stage
//! the exit staircase. Rooms are immutable once the stage has finished
//! wiring doors into them; the player position is a render-time overlay.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::cell::{CellType, WallSide};
use crate::consts::{DEBRIS_CHANCE, S_PLAYER};
use crate::config::RoomBounds;
use crate::rng::GameRng;

/// One side of a doorway: the wall it pierces and the offset along it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doorway {
    pub wall: WallSide,
    pub offset: u8,
}

/// A single traversable chamber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    width: u8,
    height: u8,
    /// Row-major grid, `grid[y][x]`
    grid: Vec<Vec<CellType>>,
    back_door: Option<Doorway>,
    passage: Option<Doorway>,
    stairs: Option<(u8, u8)>,
}

impl Room {
    /// Generate a room with dimensions drawn uniformly from `bounds`.
    ///
    /// The perimeter is fully walled and the interior floor gets a light
    /// scatter of debris glyphs. Doors are wired in afterwards by the stage.
    pub fn generate(bounds: RoomBounds, rng: &mut GameRng) -> Self {
        let width = rng.uniform(bounds.min as u32, bounds.max as u32) as u8;
        let height = rng.uniform(bounds.min as u32, bounds.max as u32) as u8;

        let mut grid = vec![vec![CellType::Floor; width as usize]; height as usize];
        for (y, row) in grid.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                let on_edge =
                    x == 0 || y == 0 || x == width as usize - 1 || y == height as usize - 1;
                if on_edge {
                    *cell = CellType::Wall;
                } else if rng.one_in(DEBRIS_CHANCE) {
                    *cell = CellType::Debris;
                }
            }
        }

        Self {
            width,
            height,
            grid,
            back_door: None,
            passage: None,
            stairs: None,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell at (x, y); out-of-grid coordinates read as wall so movement
    /// clamps naturally at the perimeter.
    pub fn cell(&self, x: i32, y: i32) -> CellType {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return CellType::Wall;
        }
        self.grid[y as usize][x as usize]
    }

    pub fn back_door(&self) -> Option<Doorway> {
        self.back_door
    }

    pub fn passage(&self) -> Option<Doorway> {
        self.passage
    }

    pub fn stairs(&self) -> Option<(u8, u8)> {
        self.stairs
    }

    /// Length of the given wall in cells.
    pub fn wall_span(&self, wall: WallSide) -> u8 {
        if wall.is_horizontal() {
            self.width
        } else {
            self.height
        }
    }

    /// Clamp a drawn offset into this wall's interior span (never a corner).
    pub fn clamp_offset(&self, wall: WallSide, offset: u8) -> u8 {
        offset.clamp(1, self.wall_span(wall) - 2)
    }

    /// Grid position of a doorway cell on the given wall.
    pub fn wall_cell(&self, door: Doorway) -> (u8, u8) {
        match door.wall {
            WallSide::Top => (door.offset, 0),
            WallSide::Bottom => (door.offset, self.height - 1),
            WallSide::Left => (0, door.offset),
            WallSide::Right => (self.width - 1, door.offset),
        }
    }

    /// The interior cell adjacent to a doorway; where the player lands
    /// after stepping through.
    pub fn inside_of(&self, door: Doorway) -> (u8, u8) {
        match door.wall {
            WallSide::Top => (door.offset, 1),
            WallSide::Bottom => (door.offset, self.height - 2),
            WallSide::Left => (1, door.offset),
            WallSide::Right => (self.width - 2, door.offset),
        }
    }

    /// Where the player appears when the room is entered from the stage
    /// entrance rather than through a doorway.
    pub fn entry_position(&self) -> (u8, u8) {
        (1, 1)
    }

    /// Carve the back door (the link to the previous room) into the wall.
    ///
    /// The offset may have been drawn against the previous room's span; it
    /// is clamped into this room's own span so the door always lies strictly
    /// inside the wall, never on a corner.
    pub(super) fn add_back_door(&mut self, wall: WallSide, offset: u8) -> Doorway {
        let door = Doorway {
            wall,
            offset: self.clamp_offset(wall, offset),
        };
        let (x, y) = self.wall_cell(door);
        self.grid[y as usize][x as usize] = CellType::Door;
        self.back_door = Some(door);
        door
    }

    /// Carve the forward passage: the next room's doorway as seen from this
    /// room. The offset was drawn against this room's span and is valid here.
    pub(super) fn add_passage(&mut self, wall: WallSide, offset: u8) -> Doorway {
        let door = Doorway {
            wall,
            offset: self.clamp_offset(wall, offset),
        };
        let (x, y) = self.wall_cell(door);
        self.grid[y as usize][x as usize] = CellType::Passage;
        self.passage = Some(door);
        door
    }

    /// Place the stage exit on a random interior floor cell.
    pub(super) fn add_stairs(&mut self, rng: &mut GameRng) {
        let x = rng.uniform(1, self.width as u32 - 2) as u8;
        let y = rng.uniform(1, self.height as u32 - 2) as u8;
        self.grid[y as usize][x as usize] = CellType::Stairs;
        self.stairs = Some((x, y));
    }

    /// Count cells of the given type (used by the stage invariant checks
    /// and the tests).
    pub fn count_cells(&self, typ: CellType) -> usize {
        self.grid
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == typ)
            .count()
    }

    /// Text rendering with the player glyph overlaid at `player`.
    pub fn render_with_player(&self, player: Option<(u8, u8)>) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for (y, row) in self.grid.iter().enumerate() {
            if y > 0 {
                out.push('\n');
            }
            for (x, cell) in row.iter().enumerate() {
                if player == Some((x as u8, y as u8)) {
                    out.push(S_PLAYER);
                } else {
                    out.push(cell.symbol());
                }
            }
        }
        out
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with_player(None))
    }
}
