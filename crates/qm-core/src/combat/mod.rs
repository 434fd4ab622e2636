//! Encounter combat: alternating strikes
//!
//! Player damage is the attack stat plus weapon damage plus a small roll;
//! every swing wears the weapon and costs stamina. A winded player hits at
//! half strength. Broken weapons fall back to fists.

use serde::{Deserialize, Serialize};

use crate::consts::SWING_STAMINA_COST;
use crate::monster::Monster;
use crate::object::Weapon;
use crate::player::Player;
use crate::rng::GameRng;

/// What one player swing did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrikeReport {
    pub damage: i32,
    pub winded: bool,
    pub weapon_broke: bool,
}

/// The player strikes the monster once.
pub fn player_strike(
    player: &mut Player,
    monster: &mut Monster,
    rng: &mut GameRng,
) -> StrikeReport {
    let winded = player.stamina <= 0;
    if !winded {
        player.stamina -= SWING_STAMINA_COST;
    }

    let weapon_damage = player.weapon.swing();
    let mut damage = player.attack + weapon_damage + rng.rn2(3) as i32;
    if winded {
        damage = (damage / 2).max(1);
    }
    monster.take_damage(damage);

    let weapon_broke = player.weapon.is_broken();
    if weapon_broke {
        player.weapon = Weapon::fists();
    }

    StrikeReport {
        damage,
        winded,
        weapon_broke,
    }
}

/// The monster strikes back; returns the damage dealt.
pub fn monster_strike(monster: &Monster, player: &mut Player, rng: &mut GameRng) -> i32 {
    let damage = monster.strike_damage(rng);
    player.take_damage(damage);
    damage
}
