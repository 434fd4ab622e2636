//! Stage orchestration
//!
//! A stage is one floor of the game: `2 * level + 2` rooms generated
//! eagerly at construction, chained by doorways. Each doorway is drawn
//! once and carved into both of its rooms: as the back door of the room
//! it leads into, and as the forward passage of the room it leads out of.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::cell::WallSide;
use super::room::Room;
use crate::config::RoomBounds;
use crate::errors::GameError;
use crate::rng::GameRng;

/// An ordered sequence of rooms comprising one game level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    level: u32,
    rooms: Vec<Room>,
    current: usize,
}

impl Stage {
    /// Build a fully generated floor for the given difficulty level.
    ///
    /// Fails only on degenerate bounds; generation itself cannot fail.
    pub fn new(level: u32, bounds: RoomBounds, rng: &mut GameRng) -> Result<Self, GameError> {
        bounds.validate()?;
        let rooms = make_rooms(Self::room_count_for(level), bounds, rng);
        Ok(Self {
            level,
            rooms,
            current: 0,
        })
    }

    /// Rooms per stage at a given difficulty level.
    pub const fn room_count_for(level: u32) -> usize {
        level as usize * 2 + 2
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Look up a room by index, failing fast on an out-of-range index.
    pub fn room(&self, index: usize) -> Result<&Room, GameError> {
        self.rooms.get(index).ok_or(GameError::RoomIndex {
            index,
            count: self.rooms.len(),
        })
    }

    /// Index of the currently active room.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Change the active room, failing fast on an out-of-range index.
    pub fn set_current(&mut self, index: usize) -> Result<(), GameError> {
        if index >= self.rooms.len() {
            return Err(GameError::RoomIndex {
                index,
                count: self.rooms.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    pub fn current_room(&self) -> &Room {
        &self.rooms[self.current]
    }

    /// Whether the active room is the last room of the floor.
    pub fn in_last_room(&self) -> bool {
        self.current + 1 == self.rooms.len()
    }
}

/// Generate the room sequence, threading the door-wall alternation state
/// explicitly from room to room.
///
/// The first connecting door lands on wall 2; each subsequent door lands on
/// the complement of the previous one (2, 4, 2, 4, ...). The door offset is
/// drawn against the previous room's wall span: the draw defines the
/// doorway cell on the side the player exits from, and is clamped into the
/// entered room's own span when carved there.
fn make_rooms(count: usize, bounds: RoomBounds, rng: &mut GameRng) -> Vec<Room> {
    let mut rooms: Vec<Room> = Vec::with_capacity(count);
    let mut door_wall = WallSide::Right;

    for _ in 0..count {
        let mut room = Room::generate(bounds, rng);
        if let Some(prev) = rooms.last_mut() {
            let span = prev.wall_span(door_wall) as u32;
            let offset = rng.uniform(2, span.saturating_sub(2)) as u8;
            prev.add_passage(door_wall, offset);
            room.add_back_door(door_wall, offset);
            door_wall = door_wall.complement();
        }
        rooms.push(room);
    }

    if let Some(last) = rooms.last_mut() {
        last.add_stairs(rng);
    }
    rooms
}

impl fmt::Display for Stage {
    /// Ephemeral per-frame text rendering: all rooms joined by blank-line
    /// separators.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, room) in self.rooms.iter().enumerate() {
            if index > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{room}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::CellType;

    fn stage(level: u32, seed: u64) -> Stage {
        let mut rng = GameRng::new(seed);
        Stage::new(level, RoomBounds::default(), &mut rng).unwrap()
    }

    #[test]
    fn room_count_follows_level() {
        for level in 0..6 {
            assert_eq!(
                stage(level, 42).room_count(),
                level as usize * 2 + 2
            );
        }
    }

    #[test]
    fn level_zero_scenario() {
        let s = stage(0, 7);
        assert_eq!(s.room_count(), 2);
        assert!(s.room(0).unwrap().back_door().is_none());
        let door = s.room(1).unwrap().back_door().unwrap();
        assert_eq!(door.wall.index(), 2);
        assert_eq!(s.room(1).unwrap().count_cells(CellType::Door), 1);
    }

    #[test]
    fn level_one_door_wall_sequence() {
        let s = stage(1, 99);
        assert_eq!(s.room_count(), 4);
        let walls: Vec<u8> = (1..4)
            .map(|i| s.room(i).unwrap().back_door().unwrap().wall.index())
            .collect();
        assert_eq!(walls, vec![2, 4, 2]);
    }

    #[test]
    fn doorways_carved_on_both_sides() {
        let s = stage(2, 5);
        let count = s.room_count();
        for i in 0..count {
            let room = s.room(i).unwrap();
            // Forward passage in every room but the last.
            assert_eq!(
                room.count_cells(CellType::Passage),
                usize::from(i + 1 < count)
            );
            // Back door in every room but the first.
            assert_eq!(room.count_cells(CellType::Door), usize::from(i > 0));
        }
    }

    #[test]
    fn passage_and_door_share_wall() {
        let s = stage(3, 21);
        for i in 1..s.room_count() {
            let passage = s.room(i - 1).unwrap().passage().unwrap();
            let door = s.room(i).unwrap().back_door().unwrap();
            assert_eq!(passage.wall, door.wall);
        }
    }

    #[test]
    fn stairs_only_in_last_room() {
        let s = stage(1, 3);
        let last = s.room_count() - 1;
        for i in 0..s.room_count() {
            let has_stairs = s.room(i).unwrap().stairs().is_some();
            assert_eq!(has_stairs, i == last);
        }
    }

    #[test]
    fn current_room_round_trip() {
        let mut s = stage(2, 11);
        for i in 0..s.room_count() {
            s.set_current(i).unwrap();
            assert_eq!(s.current(), i);
        }
    }

    #[test]
    fn out_of_range_index_fails_fast() {
        let mut s = stage(0, 1);
        assert_eq!(
            s.room(2),
            Err(GameError::RoomIndex { index: 2, count: 2 })
        );
        assert!(s.set_current(2).is_err());
        assert_eq!(s.current(), 0);
    }

    #[test]
    fn invalid_bounds_rejected() {
        let mut rng = GameRng::new(0);
        let result = Stage::new(0, RoomBounds { min: 2, max: 10 }, &mut rng);
        assert_eq!(
            result.unwrap_err(),
            GameError::InvalidBounds { min: 2, max: 10 }
        );
    }

    #[test]
    fn display_separates_rooms_with_blank_lines() {
        let s = stage(0, 33);
        let text = s.to_string();
        let blocks: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        for (i, block) in blocks.iter().enumerate() {
            let room = s.room(i).unwrap();
            assert_eq!(block.lines().count(), room.height() as usize);
        }
    }
}
