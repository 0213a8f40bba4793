//! Item kinds and pickup effects.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::consts::{POTION_RESTORE, SWORD_BOOST};
use crate::player::Player;

/// The fixed item catalog.
///
/// Effect magnitudes are constants per kind, so only the kind itself is
/// carried in room state and in save files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[repr(u8)]
pub enum ItemKind {
    Potion = 0,
    Sword = 1,
    Elixir = 2,
}

impl ItemKind {
    /// Apply this item's effect to the player.
    ///
    /// Called exactly once, at pickup; the room's content is destroyed
    /// afterwards.
    pub fn apply(self, player: &mut Player) {
        match self {
            ItemKind::Potion => player.hp += POTION_RESTORE,
            ItemKind::Sword => player.damage += SWORD_BOOST,
            ItemKind::Elixir => {
                player.hp *= 2;
                player.damage *= 2;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::RoomId;

    fn player(hp: i32, damage: i32) -> Player {
        Player {
            location: RoomId(0),
            hp,
            damage,
        }
    }

    #[test]
    fn test_potion_restores_hp() {
        let mut p = player(5, 5);
        ItemKind::Potion.apply(&mut p);
        assert_eq!(p.hp, 15);
        assert_eq!(p.damage, 5);
    }

    #[test]
    fn test_sword_boosts_damage() {
        let mut p = player(20, 5);
        ItemKind::Sword.apply(&mut p);
        assert_eq!(p.hp, 20);
        assert_eq!(p.damage, 7);
    }

    #[test]
    fn test_elixir_doubles_both() {
        let mut p = player(10, 5);
        ItemKind::Elixir.apply(&mut p);
        assert_eq!(p.hp, 20);
        assert_eq!(p.damage, 10);
    }
}
