//! The player character.

use serde::{Deserialize, Serialize};

use crate::consts::{PLAYER_START_DAMAGE, PLAYER_START_HP};
use crate::dungeon::RoomId;

/// The adventurer.
///
/// `location` is an index into the room arena owned by the graph, never a
/// reference into it. Both counters are signed and unbounded above;
/// hp <= 0 is the death condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub location: RoomId,
    pub hp: i32,
    pub damage: i32,
}

impl Player {
    /// A fresh adventurer standing in the given room
    pub fn new(location: RoomId) -> Self {
        Self {
            location,
            hp: PLAYER_START_HP,
            damage: PLAYER_START_DAMAGE,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}
