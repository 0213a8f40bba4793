//! delve-save: Save/restore system for the delve dungeon crawler
//!
//! The world is written in a fixed binary layout (see [`codec`]); this
//! crate adds the file-level wrappers and the save error taxonomy.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use thiserror::Error;

use delve_core::{GameRng, GameState};

pub mod codec;

pub use codec::{CorruptSave, decode, encode};

/// Fixed filename used by the in-game save-and-quit command
pub const DEFAULT_SAVE_NAME: &str = "savegame.dat";

/// Save/restore errors
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Save file not found")]
    NotFound,

    #[error("Save file corrupted: {0}")]
    Corrupt(#[from] CorruptSave),
}

/// Write the world state to a save file.
///
/// On failure the game state is untouched; the caller may retry.
pub fn save_game(state: &GameState, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let bytes = codec::encode(&state.graph, &state.player);
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Load a world from a save file.
///
/// The restored session continues with the supplied generator; generator
/// state is never part of the save.
pub fn load_game(path: impl AsRef<Path>, rng: GameRng) -> Result<GameState, SaveError> {
    let file = File::open(path.as_ref()).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => SaveError::NotFound,
        _ => SaveError::Io(e),
    })?;
    let mut bytes = Vec::new();
    BufReader::new(file).read_to_end(&mut bytes)?;

    let (graph, player) = codec::decode(&bytes)?;
    Ok(GameState::from_parts(graph, player, rng))
}
