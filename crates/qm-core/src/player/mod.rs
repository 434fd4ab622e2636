//! The player character

use serde::{Deserialize, Serialize};

use crate::consts::{BREAD_HP, BREAD_STAMINA, PLAYER_ATTACK, PLAYER_HP, PLAYER_STAMINA};
use crate::object::{ItemKind, Weapon, WeaponKind};

/// Player state: the stat block shown in the status line plus the pack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub hp: i32,
    pub hp_max: i32,
    pub stamina: i32,
    pub stamina_max: i32,
    /// Base attack stat; weapon damage is added on top
    pub attack: i32,
    pub weapon: Weapon,
    pub pack: Vec<ItemKind>,
    /// Position within the current room, (x, y)
    pub pos: (u8, u8),
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hp: PLAYER_HP,
            hp_max: PLAYER_HP,
            stamina: PLAYER_STAMINA,
            stamina_max: PLAYER_STAMINA,
            attack: PLAYER_ATTACK,
            weapon: Weapon::fists(),
            pack: Vec::new(),
            pos: (1, 1),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    pub fn take_damage(&mut self, damage: i32) {
        self.hp -= damage;
    }

    pub fn add_item(&mut self, kind: ItemKind) {
        self.pack.push(kind);
    }

    fn remove_item(&mut self, kind: ItemKind) -> bool {
        if let Some(index) = self.pack.iter().position(|&i| i == kind) {
            self.pack.remove(index);
            true
        } else {
            false
        }
    }

    /// Eat a loaf of bread from the pack, restoring health and stamina.
    pub fn eat_bread(&mut self) -> bool {
        if !self.remove_item(ItemKind::Bread) {
            return false;
        }
        self.hp = (self.hp + BREAD_HP).min(self.hp_max);
        self.stamina = (self.stamina + BREAD_STAMINA).min(self.stamina_max);
        true
    }

    /// Wield the best weapon waiting in the pack, if it beats the current
    /// one. Returns the newly wielded kind.
    pub fn wield_from_pack(&mut self) -> Option<WeaponKind> {
        let (index, candidate) = self
            .pack
            .iter()
            .enumerate()
            .filter_map(|(i, item)| item.as_weapon().map(|w| (i, w)))
            .max_by_key(|&(_, weapon)| weapon.damage())?;
        if candidate.damage() <= self.weapon.kind().damage() {
            return None;
        }
        self.pack.remove(index);
        self.weapon = Weapon::new(candidate);
        Some(candidate)
    }

    /// Unlock the big chest in the pack. Yields the weapon inside, already
    /// wielded if it beats the current one.
    pub fn open_chest(&mut self) -> Option<WeaponKind> {
        if !self.remove_item(ItemKind::BigLock) {
            return None;
        }
        let found = WeaponKind::Spear;
        if found.damage() > self.weapon.kind().damage() {
            self.weapon = Weapon::new(found);
        }
        Some(found)
    }
}
