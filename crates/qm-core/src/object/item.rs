//! Pack items as tagged variants

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::weapon::WeaponKind;
use crate::consts::S_CHEST;

/// Broad item groupings shown on the inventory screen
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum ItemCategory {
    Food,
    Weapon,
    Lock,
}

/// Item kinds the player can carry
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum ItemKind {
    Bread = 0,
    Axe = 1,
    /// A locked chest with something useful inside
    BigLock = 2,
}

impl ItemKind {
    pub const fn name(self) -> &'static str {
        match self {
            ItemKind::Bread => "Bread",
            ItemKind::Axe => "Axe",
            ItemKind::BigLock => "Big Locked Chest",
        }
    }

    pub const fn category(self) -> ItemCategory {
        match self {
            ItemKind::Bread => ItemCategory::Food,
            ItemKind::Axe => ItemCategory::Weapon,
            ItemKind::BigLock => ItemCategory::Lock,
        }
    }

    /// Inventory-screen glyph
    pub const fn symbol(self) -> char {
        match self {
            ItemKind::Bread => '%',
            ItemKind::Axe => ')',
            ItemKind::BigLock => S_CHEST,
        }
    }

    /// The weapon this item turns into when wielded, if any
    pub const fn as_weapon(self) -> Option<WeaponKind> {
        match self {
            ItemKind::Axe => Some(WeaponKind::Axe),
            _ => None,
        }
    }

    pub const fn is_edible(self) -> bool {
        matches!(self, ItemKind::Bread)
    }

    /// Unlock the chest. The lock is big but not clever.
    pub const fn unlocks(self) -> bool {
        matches!(self, ItemKind::BigLock)
    }
}
