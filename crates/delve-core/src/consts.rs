//! Core game constants.

/// Maximum number of doors out of a single room
pub const MAX_DOORS: usize = 4;

/// Width of a combat round's turn schedule, in bits
pub const SCHEDULE_BITS: u32 = 16;

/// Starting player hit points
pub const PLAYER_START_HP: i32 = 20;

/// Starting player damage per attack
pub const PLAYER_START_DAMAGE: i32 = 5;

/// Hit points restored by a potion
pub const POTION_RESTORE: i32 = 10;

/// Damage added by a sword
pub const SWORD_BOOST: i32 = 2;
