//! delve-core: Core game logic for the delve dungeon crawler
//!
//! This crate contains all game logic with no I/O dependencies.
//! It is designed to be pure and testable: every operation that draws
//! randomness takes an explicit [`GameRng`], so a seeded session replays
//! identically.

pub mod combat;
pub mod dungeon;
pub mod errors;
pub mod item;
pub mod monster;
pub mod player;

mod consts;
mod gameloop;
mod rng;

pub use consts::*;
pub use gameloop::{EnterOutcome, GameState};
pub use rng::GameRng;
