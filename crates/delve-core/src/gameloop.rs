//! The engine façade: generation, movement, and room resolution.

use serde::{Deserialize, Serialize};

use crate::combat::{self, CombatOutcome, CombatReport};
use crate::dungeon::{Content, Room, RoomGraph, RoomId};
use crate::errors::{GenerationError, InvalidMove};
use crate::item::ItemKind;
use crate::monster::Monster;
use crate::player::Player;
use crate::rng::GameRng;

/// What happened when the player entered a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnterOutcome {
    /// Nothing here, or the room was already resolved
    Empty,
    /// A monster was fought to the death
    MonsterEncounter {
        /// The monster as it stood before the fight
        monster: Monster,
        report: CombatReport,
    },
    /// An item was picked up and its effect applied
    ItemFound {
        kind: ItemKind,
        hp_after: i32,
        damage_after: i32,
    },
    /// The winning room
    TreasureFound,
}

/// A running game session: the dungeon, the player, and the session's
/// random generator.
///
/// The generator is ambient session state; it is not part of the persisted
/// world, and a restored session continues with a caller-supplied one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub graph: RoomGraph,
    pub player: Player,
    pub rng: GameRng,
}

impl GameState {
    /// Generate and populate a fresh dungeon with the player at room 0.
    pub fn new_game(n: u32, mut rng: GameRng) -> Result<Self, GenerationError> {
        let mut graph = RoomGraph::generate(n, &mut rng)?;
        graph.populate(&mut rng);
        Ok(Self {
            graph,
            player: Player::new(RoomId(0)),
            rng,
        })
    }

    /// Rebuild a session from restored world state.
    pub fn from_parts(graph: RoomGraph, player: Player, rng: GameRng) -> Self {
        Self { graph, player, rng }
    }

    /// The room the player is standing in
    pub fn current_room(&self) -> &Room {
        self.graph.room(self.player.location)
    }

    /// Resolve the current room's content.
    ///
    /// Treasure wins immediately, even in a visited room; otherwise a
    /// visited room behaves as empty. A slain monster or a picked-up item
    /// is destroyed and the room marked visited. A monster that kills the
    /// player survives with its reduced hp and the room stays unvisited;
    /// the session is over either way.
    pub fn enter_current_room(&mut self) -> EnterOutcome {
        let room = self.graph.room_mut(self.player.location);
        match room.content {
            Content::Treasure => EnterOutcome::TreasureFound,
            _ if room.visited => EnterOutcome::Empty,
            Content::Empty => {
                room.visited = true;
                EnterOutcome::Empty
            }
            Content::Monster(encountered) => {
                let mut monster = encountered;
                let report = combat::resolve(&mut self.player, &mut monster, &mut self.rng);
                match report.outcome {
                    CombatOutcome::MonsterSlain => {
                        room.content = Content::Empty;
                        room.visited = true;
                    }
                    CombatOutcome::PlayerDied => {
                        room.content = Content::Monster(monster);
                    }
                }
                EnterOutcome::MonsterEncounter {
                    monster: encountered,
                    report,
                }
            }
            Content::Item(kind) => {
                kind.apply(&mut self.player);
                room.content = Content::Empty;
                room.visited = true;
                EnterOutcome::ItemFound {
                    kind,
                    hp_after: self.player.hp,
                    damage_after: self.player.damage,
                }
            }
        }
    }

    /// Step through a door.
    ///
    /// Fails without mutating anything when no door connects the current
    /// room to `dest`.
    pub fn move_to(&mut self, dest: RoomId) -> Result<(), InvalidMove> {
        let from = self.player.location;
        match self.graph.find_neighbor(from, dest) {
            Some(id) => {
                self.player.location = id;
                Ok(())
            }
            None => Err(InvalidMove { from, dest }),
        }
    }
}
