//! Movement resolution
//!
//! One move request resolves against the active room's grid into exactly
//! one outcome: blocked, an in-room step (which may turn up an item or a
//! monster), a doorway transition, or the stage exit.

use serde::{Deserialize, Serialize};

use super::Direction;
use crate::consts::{BREAD_DROP_PERCENT, ENCOUNTER_CHANCE, ITEM_CHANCE};
use crate::dungeon::CellType;
use crate::gameloop::GameState;
use crate::monster::{Monster, MonsterKind};
use crate::object::ItemKind;

/// Result of one resolved move request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Destination is a wall; nothing changed
    Blocked,
    /// Stepped within the current room
    Moved,
    /// Crossed a doorway into another room of the stage
    EnteredRoom { index: usize },
    /// The step turned up an item, now in the pack
    FoundItem(ItemKind),
    /// The step woke a monster; combat begins
    Encounter(MonsterKind),
    /// Reached the staircase in the last room
    StairsReached,
}

/// Resolve a move request against the active room.
///
/// Door cells lead back to the previous room; passage cells lead forward to
/// the next. The player lands just inside the matching doorway of the room
/// entered.
pub fn do_move(state: &mut GameState, dir: Direction) -> MoveOutcome {
    let (dx, dy) = dir.delta();
    let (px, py) = state.player.pos;
    let nx = px as i32 + dx as i32;
    let ny = py as i32 + dy as i32;

    let here = state.stage.current();
    match state.stage.current_room().cell(nx, ny) {
        CellType::Wall => MoveOutcome::Blocked,

        CellType::Door => {
            // The back door: return to the previous room. The first room
            // has no door cell, so `here` is at least 1.
            let index = here.saturating_sub(1);
            if state.stage.set_current(index).is_err() {
                return MoveOutcome::Blocked;
            }
            let room = state.stage.current_room();
            state.player.pos = match room.passage() {
                Some(doorway) => room.inside_of(doorway),
                None => room.entry_position(),
            };
            MoveOutcome::EnteredRoom { index }
        }

        CellType::Passage => {
            // The forward doorway: advance to the next room, landing just
            // inside its back door.
            let index = here + 1;
            if state.stage.set_current(index).is_err() {
                return MoveOutcome::Blocked;
            }
            let room = state.stage.current_room();
            state.player.pos = match room.back_door() {
                Some(doorway) => room.inside_of(doorway),
                None => room.entry_position(),
            };
            MoveOutcome::EnteredRoom { index }
        }

        CellType::Stairs => MoveOutcome::StairsReached,

        CellType::Floor | CellType::Debris => {
            state.player.pos = (nx as u8, ny as u8);
            if state.rng.one_in(ENCOUNTER_CHANCE) {
                let monster = Monster::spawn(state.stage.level(), &mut state.rng);
                let kind = monster.kind;
                state.encounter = Some(monster);
                MoveOutcome::Encounter(kind)
            } else if state.rng.one_in(ITEM_CHANCE) {
                let kind = if state.rng.percent(BREAD_DROP_PERCENT) {
                    ItemKind::Bread
                } else {
                    ItemKind::Axe
                };
                state.player.add_item(kind);
                MoveOutcome::FoundItem(kind)
            } else {
                MoveOutcome::Moved
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameConfig;
    use crate::dungeon::Doorway;

    fn fresh_state(seed: u64) -> GameState {
        let config = GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        };
        GameState::new(&config).unwrap()
    }

    /// Walk the player straight into the nearest wall.
    #[test]
    fn walking_into_a_wall_blocks() {
        let mut state = fresh_state(1);
        state.player.pos = (1, 1);
        assert_eq!(do_move(&mut state, Direction::North), MoveOutcome::Blocked);
        assert_eq!(state.player.pos, (1, 1));
        assert_eq!(state.stage.current(), 0);
    }

    #[test]
    fn floor_steps_update_position() {
        let mut state = fresh_state(2);
        state.player.pos = (1, 1);
        let outcome = do_move(&mut state, Direction::East);
        assert_ne!(outcome, MoveOutcome::Blocked);
        // Whatever the roll produced, the step itself happened.
        assert_eq!(state.player.pos, (2, 1));
    }

    #[test]
    fn passage_leads_forward() {
        let mut state = fresh_state(3);
        let room = state.stage.current_room();
        let doorway = room.passage().expect("first room has a forward passage");
        state.player.pos = room.inside_of(doorway);

        let dir = direction_toward_wall(doorway);
        let outcome = do_move(&mut state, dir);
        assert_eq!(outcome, MoveOutcome::EnteredRoom { index: 1 });
        assert_eq!(state.stage.current(), 1);

        // Landed just inside the entered room's back door.
        let entered = state.stage.current_room();
        let back = entered.back_door().unwrap();
        assert_eq!(state.player.pos, entered.inside_of(back));
    }

    #[test]
    fn back_door_leads_back() {
        let mut state = fresh_state(4);
        state.stage.set_current(1).unwrap();
        let room = state.stage.current_room();
        let door = room.back_door().expect("second room has a back door");
        state.player.pos = room.inside_of(door);

        let outcome = do_move(&mut state, direction_toward_wall(door));
        assert_eq!(outcome, MoveOutcome::EnteredRoom { index: 0 });
        assert_eq!(state.stage.current(), 0);

        let entered = state.stage.current_room();
        let passage = entered.passage().unwrap();
        assert_eq!(state.player.pos, entered.inside_of(passage));
    }

    #[test]
    fn stairs_report_the_stage_exit() {
        let mut state = fresh_state(5);
        let last = state.stage.room_count() - 1;
        state.stage.set_current(last).unwrap();
        let room = state.stage.current_room();
        let (sx, sy) = room.stairs().expect("last room has stairs");

        // Step onto the stairs from an adjacent interior cell.
        let (pos, dir) = if sx > 1 {
            ((sx - 1, sy), Direction::East)
        } else {
            ((sx + 1, sy), Direction::West)
        };
        state.player.pos = pos;
        assert_eq!(do_move(&mut state, dir), MoveOutcome::StairsReached);
    }

    /// The one-step direction that faces a doorway from its interior cell.
    fn direction_toward_wall(doorway: Doorway) -> Direction {
        use crate::dungeon::WallSide;
        match doorway.wall {
            WallSide::Top => Direction::North,
            WallSide::Bottom => Direction::South,
            WallSide::Left => Direction::West,
            WallSide::Right => Direction::East,
        }
    }
}
