//! Monsters: the kind table and live instances

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::rng::GameRng;

/// Monster kinds, with per-kind base stats.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum MonsterKind {
    #[default]
    Gremlin = 0,
    GiantRat = 1,
    Skeleton = 2,
}

impl MonsterKind {
    pub const fn name(self) -> &'static str {
        match self {
            MonsterKind::Gremlin => "Gremlin",
            MonsterKind::GiantRat => "Giant Rat",
            MonsterKind::Skeleton => "Skeleton",
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            MonsterKind::Gremlin => 'g',
            MonsterKind::GiantRat => 'r',
            MonsterKind::Skeleton => 'Z',
        }
    }

    pub const fn base_hp(self) -> i32 {
        match self {
            MonsterKind::Gremlin => 8,
            MonsterKind::GiantRat => 4,
            MonsterKind::Skeleton => 12,
        }
    }

    pub const fn damage(self) -> i32 {
        match self {
            MonsterKind::Gremlin => 2,
            MonsterKind::GiantRat => 1,
            MonsterKind::Skeleton => 3,
        }
    }

    /// Lowest stage level this kind appears on
    pub const fn min_level(self) -> u32 {
        match self {
            MonsterKind::Gremlin => 0,
            MonsterKind::GiantRat => 0,
            MonsterKind::Skeleton => 2,
        }
    }

    /// Kinds eligible to spawn at the given stage level.
    pub fn spawn_table(level: u32) -> Vec<MonsterKind> {
        MonsterKind::iter()
            .filter(|kind| kind.min_level() <= level)
            .collect()
    }
}

/// A live monster in an encounter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    pub kind: MonsterKind,
    pub hp: i32,
    pub hp_max: i32,
}

impl Monster {
    pub fn new(kind: MonsterKind) -> Self {
        let hp = kind.base_hp();
        Self {
            kind,
            hp,
            hp_max: hp,
        }
    }

    /// Spawn a random monster eligible for the stage level, with a little
    /// hit point variance on top of the kind's base.
    pub fn spawn(level: u32, rng: &mut GameRng) -> Self {
        let table = MonsterKind::spawn_table(level);
        let kind = *rng.choose(&table).unwrap_or(&MonsterKind::Gremlin);
        let hp = kind.base_hp() + rng.rn2(kind.base_hp() as u32 / 2 + 1) as i32;
        Self {
            kind,
            hp,
            hp_max: hp,
        }
    }

    pub fn take_damage(&mut self, damage: i32) {
        self.hp -= damage;
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    /// Damage dealt by one strike
    pub fn strike_damage(&self, rng: &mut GameRng) -> i32 {
        self.kind.damage() + rng.rn2(2) as i32
    }
}
