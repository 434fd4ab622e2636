//! Generation properties of stages and rooms, checked across levels and
//! seeds.

use proptest::prelude::*;

use qm_core::dungeon::{CellType, Stage, WallSide};
use qm_core::{GameRng, RoomBounds};

fn build(level: u32, seed: u64, bounds: RoomBounds) -> Stage {
    let mut rng = GameRng::new(seed);
    Stage::new(level, bounds, &mut rng).expect("valid bounds")
}

proptest! {
    #[test]
    fn prop_room_count_is_two_level_plus_two(level in 0u32..8, seed in any::<u64>()) {
        let stage = build(level, seed, RoomBounds::default());
        prop_assert_eq!(stage.room_count(), level as usize * 2 + 2);
    }

    #[test]
    fn prop_dimensions_within_bounds(
        level in 0u32..5,
        seed in any::<u64>(),
        min in 3u8..10,
        extra in 0u8..12,
    ) {
        let bounds = RoomBounds { min, max: min + extra };
        let stage = build(level, seed, bounds);
        for i in 0..stage.room_count() {
            let room = stage.room(i).unwrap();
            prop_assert!((bounds.min..=bounds.max).contains(&room.width()));
            prop_assert!((bounds.min..=bounds.max).contains(&room.height()));
        }
    }

    #[test]
    fn prop_every_room_but_the_first_has_one_door(level in 0u32..5, seed in any::<u64>()) {
        let stage = build(level, seed, RoomBounds::default());
        prop_assert!(stage.room(0).unwrap().back_door().is_none());
        prop_assert_eq!(stage.room(0).unwrap().count_cells(CellType::Door), 0);
        for i in 1..stage.room_count() {
            let room = stage.room(i).unwrap();
            prop_assert!(room.back_door().is_some());
            prop_assert_eq!(room.count_cells(CellType::Door), 1);
        }
    }

    #[test]
    fn prop_doors_sit_strictly_inside_their_wall_span(
        level in 0u32..5,
        seed in any::<u64>(),
        min in 3u8..10,
        extra in 0u8..12,
    ) {
        let bounds = RoomBounds { min, max: min + extra };
        let stage = build(level, seed, bounds);
        for i in 1..stage.room_count() {
            let room = stage.room(i).unwrap();
            let door = room.back_door().unwrap();
            let span = room.wall_span(door.wall);
            // Never a corner: offsets 0 and span-1 are excluded.
            prop_assert!(door.offset >= 1);
            prop_assert!(door.offset <= span - 2);
        }
    }

    #[test]
    fn prop_door_walls_alternate_right_left(level in 0u32..6, seed in any::<u64>()) {
        let stage = build(level, seed, RoomBounds::default());
        let mut expected = WallSide::Right;
        for i in 1..stage.room_count() {
            let door = stage.room(i).unwrap().back_door().unwrap();
            prop_assert_eq!(door.wall, expected);
            expected = expected.complement();
        }
    }

    #[test]
    fn prop_current_room_round_trips(level in 0u32..5, seed in any::<u64>()) {
        let mut stage = build(level, seed, RoomBounds::default());
        for i in 0..stage.room_count() {
            stage.set_current(i).unwrap();
            prop_assert_eq!(stage.current(), i);
        }
        prop_assert!(stage.set_current(stage.room_count()).is_err());
    }

    #[test]
    fn prop_same_seed_reproduces_the_floor(level in 0u32..4, seed in any::<u64>()) {
        let a = build(level, seed, RoomBounds::default());
        let b = build(level, seed, RoomBounds::default());
        prop_assert_eq!(a.to_string(), b.to_string());
    }
}

#[test]
fn stage_zero_scenario() {
    let stage = build(0, 1234, RoomBounds::default());
    assert_eq!(stage.room_count(), 2);
    assert!(stage.room(0).unwrap().back_door().is_none());
    let door = stage.room(1).unwrap().back_door().unwrap();
    assert_eq!(door.wall.index(), 2);
}

#[test]
fn stage_one_scenario() {
    let stage = build(1, 1234, RoomBounds::default());
    assert_eq!(stage.room_count(), 4);
    let walls: Vec<u8> = (1..4)
        .map(|i| stage.room(i).unwrap().back_door().unwrap().wall.index())
        .collect();
    assert_eq!(walls, vec![2, 4, 2]);
}

#[test]
fn stage_rendering_separates_rooms() {
    let stage = build(1, 77, RoomBounds::default());
    let text = stage.to_string();
    assert_eq!(text.split("\n\n").count(), stage.room_count());
    // Every room block is a rectangle of its own dimensions.
    for (i, block) in text.split("\n\n").enumerate() {
        let room = stage.room(i).unwrap();
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), room.height() as usize);
        for line in lines {
            assert_eq!(line.chars().count(), room.width() as usize);
        }
    }
}
