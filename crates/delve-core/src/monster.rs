//! Monster kinds and instances.

use serde::{Deserialize, Serialize};
use strum::Display;

/// The fixed monster catalog.
///
/// Display names are derived from the kind; nothing else is stored per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[repr(u8)]
pub enum MonsterKind {
    Goblin = 0,
    Troll = 1,
    Dragon = 2,
}

impl MonsterKind {
    /// Hit points a freshly spawned monster of this kind starts with
    pub fn spawn_hp(self) -> i32 {
        match self {
            MonsterKind::Goblin => 8,
            MonsterKind::Troll => 12,
            MonsterKind::Dragon => 24,
        }
    }

    /// Damage dealt per attack
    pub fn spawn_damage(self) -> i32 {
        match self {
            MonsterKind::Goblin => 5,
            MonsterKind::Troll => 3,
            MonsterKind::Dragon => 6,
        }
    }
}

/// A live monster occupying a room.
///
/// hp is mutable during combat and may go non-positive (death); it is never
/// otherwise clamped. A save made mid-session round-trips hp exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub kind: MonsterKind,
    pub hp: i32,
    pub damage: i32,
}

impl Monster {
    /// Spawn a monster of the given kind at its catalog stats
    pub fn new(kind: MonsterKind) -> Self {
        Self {
            kind,
            hp: kind.spawn_hp(),
            damage: kind.spawn_damage(),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}
