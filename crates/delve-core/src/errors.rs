//! Error types for world generation and movement.

use thiserror::Error;

use crate::dungeon::RoomId;

/// A dungeon could not be generated from the requested parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    #[error("a dungeon needs at least 2 rooms, got {0}")]
    TooFewRooms(u32),
}

/// A move was requested to a room with no connecting door.
///
/// Recoverable: the world is left untouched and the caller may prompt again.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no door leads from room {from} to room {dest}")]
pub struct InvalidMove {
    pub from: RoomId,
    pub dest: RoomId,
}
