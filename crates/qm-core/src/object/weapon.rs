//! Weapons as tagged variants
//!
//! Each kind carries its full capability set: name, damage, durability, and
//! per-swing wear. Fists never wear out; everything else breaks eventually.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Weapon kinds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum WeaponKind {
    #[default]
    Fists = 0,
    Spear = 1,
    Axe = 2,
}

impl WeaponKind {
    pub const fn name(self) -> &'static str {
        match self {
            WeaponKind::Fists => "Fists",
            WeaponKind::Spear => "Spear",
            WeaponKind::Axe => "Axe",
        }
    }

    /// Damage added to the player's attack stat per hit
    pub const fn damage(self) -> i32 {
        match self {
            WeaponKind::Fists => 0,
            WeaponKind::Spear => 5,
            WeaponKind::Axe => 6,
        }
    }

    pub const fn max_durability(self) -> i32 {
        match self {
            WeaponKind::Fists => 1,
            WeaponKind::Spear => 5,
            WeaponKind::Axe => 8,
        }
    }

    /// Durability lost per swing
    pub const fn wear_per_swing(self) -> i32 {
        match self {
            WeaponKind::Fists => 0,
            WeaponKind::Spear => 1,
            WeaponKind::Axe => 1,
        }
    }
}

/// A wielded weapon instance with its remaining durability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    kind: WeaponKind,
    durability: i32,
}

impl Weapon {
    pub fn new(kind: WeaponKind) -> Self {
        Self {
            kind,
            durability: kind.max_durability(),
        }
    }

    /// Bare hands, the fallback when a weapon breaks.
    pub fn fists() -> Self {
        Self::new(WeaponKind::Fists)
    }

    pub fn kind(&self) -> WeaponKind {
        self.kind
    }

    pub fn durability(&self) -> i32 {
        self.durability
    }

    /// Swing the weapon: wears it down and returns the damage contribution.
    pub fn swing(&mut self) -> i32 {
        self.durability -= self.kind.wear_per_swing();
        self.kind.damage()
    }

    pub fn is_broken(&self) -> bool {
        self.durability <= 0
    }
}

impl Default for Weapon {
    fn default() -> Self {
        Self::fists()
    }
}
