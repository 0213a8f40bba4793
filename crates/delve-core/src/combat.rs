//! Turn-based combat resolution.
//!
//! Each round draws one 16-bit schedule word; its bits, taken least
//! significant first, fix the attack order for that round. A 0 bit gives
//! the monster the turn, a 1 bit the player. Hp is checked after every
//! single attack, so a round ends the instant either side dies; if both
//! survive all 16 bits, a new word is drawn.

use serde::{Deserialize, Serialize};

use crate::consts::SCHEDULE_BITS;
use crate::monster::Monster;
use crate::player::Player;
use crate::rng::GameRng;

/// Which side dealt an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attacker {
    Player,
    Monster,
}

/// One attack as it landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackEvent {
    pub attacker: Attacker,
    pub damage: i32,
    /// Defender hp after the blow
    pub hp_remaining: i32,
}

/// One combat round: the schedule word drawn and the attacks it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub schedule: u16,
    pub attacks: Vec<AttackEvent>,
}

/// How an encounter ended.
///
/// `PlayerDied` is terminal for the whole session; the caller decides how
/// to end it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatOutcome {
    MonsterSlain,
    PlayerDied,
}

/// Full transcript of an encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatReport {
    pub rounds: Vec<Round>,
    pub outcome: CombatOutcome,
}

/// Play out one round under the given schedule word.
///
/// Pure over the word, so tests can drive exact attack orders.
pub fn run_round(player: &mut Player, monster: &mut Monster, schedule: u16) -> Round {
    let mut attacks = Vec::new();
    for bit in 0..SCHEDULE_BITS {
        if player.is_dead() || monster.is_dead() {
            break;
        }
        if (schedule >> bit) & 1 == 0 {
            player.hp -= monster.damage;
            attacks.push(AttackEvent {
                attacker: Attacker::Monster,
                damage: monster.damage,
                hp_remaining: player.hp,
            });
        } else {
            monster.hp -= player.damage;
            attacks.push(AttackEvent {
                attacker: Attacker::Player,
                damage: player.damage,
                hp_remaining: monster.hp,
            });
        }
    }
    Round { schedule, attacks }
}

/// Resolve a full encounter, mutating both combatants in place.
///
/// Returns only once exactly one side is dead.
pub fn resolve(player: &mut Player, monster: &mut Monster, rng: &mut GameRng) -> CombatReport {
    let mut rounds = Vec::new();
    while !player.is_dead() && !monster.is_dead() {
        let schedule = rng.schedule_word(SCHEDULE_BITS);
        rounds.push(run_round(player, monster, schedule));
    }
    let outcome = if player.is_dead() {
        CombatOutcome::PlayerDied
    } else {
        CombatOutcome::MonsterSlain
    };
    CombatReport { rounds, outcome }
}
