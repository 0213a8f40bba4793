//! The room graph: generation, population, adjacency.
//!
//! Rooms live in a single arena owned by [`RoomGraph`]; everything else
//! refers to them by [`RoomId`]. Doors are an undirected relation, so an
//! edge appears in the neighbor list of both endpoints.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_DOORS;
use crate::errors::GenerationError;
use crate::item::ItemKind;
use crate::monster::{Monster, MonsterKind};
use crate::rng::GameRng;

/// Index of a room in the graph's arena.
///
/// Ids are dense in `[0, n)` and are the sole cross-reference key, both in
/// memory and in save files.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RoomId(pub u32);

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a room holds before the player resolves it.
///
/// Consumed content (a slain monster, a picked-up item) is replaced by
/// `Empty` permanently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Content {
    Empty,
    Monster(Monster),
    Item(ItemKind),
    Treasure,
}

/// A single room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// Rooms reachable through one door; at most [`MAX_DOORS`] of them
    pub neighbors: Vec<RoomId>,
    pub content: Content,
    /// Set the first time the room is entered; a visited room's content is
    /// treated as already resolved
    pub visited: bool,
}

impl Room {
    fn new(id: RoomId) -> Self {
        Self {
            id,
            neighbors: Vec::new(),
            content: Content::Empty,
            visited: false,
        }
    }

    /// Number of doors out of this room
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// The dungeon: an undirected, bounded-degree graph of rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomGraph {
    pub rooms: Vec<Room>,
}

impl RoomGraph {
    /// Build a connected graph of `n` rooms with ids `0..n`.
    ///
    /// A random spanning tree guarantees connectivity, then each room draws
    /// a few extra doors. Extra-edge attempts that land on a self-loop, an
    /// existing door, or a room that is already full are dropped rather
    /// than retried.
    pub fn generate(n: u32, rng: &mut GameRng) -> Result<Self, GenerationError> {
        if n <= 1 {
            return Err(GenerationError::TooFewRooms(n));
        }

        let mut graph = Self {
            rooms: (0..n).map(|i| Room::new(RoomId(i))).collect(),
        };

        // Spanning tree: attach each new room to a random earlier room that
        // still has a free door. A tree on i rooms has 2(i-1) door slots in
        // use out of 4i, so a free door always exists.
        for i in 1..n {
            let open: Vec<u32> = (0..i)
                .filter(|&j| graph.rooms[j as usize].degree() < MAX_DOORS)
                .collect();
            let j = open[rng.rn2(open.len() as u32) as usize];
            graph.add_edge(RoomId(i), RoomId(j));
        }

        // Extra doors, up to each room's remaining capacity.
        for i in 0..n {
            let free = MAX_DOORS - graph.rooms[i as usize].degree();
            let extras = rng.rn2(free as u32 + 1);
            for _ in 0..extras {
                let j = rng.rn2(n);
                if j == i
                    || graph.rooms[i as usize].degree() >= MAX_DOORS
                    || graph.rooms[j as usize].degree() >= MAX_DOORS
                    || graph.rooms[i as usize].neighbors.contains(&RoomId(j))
                {
                    continue;
                }
                graph.add_edge(RoomId(i), RoomId(j));
            }
        }

        Ok(graph)
    }

    /// Assign contents to every non-start room.
    ///
    /// Exactly one non-start room becomes the treasure room; the rest draw
    /// from the weighted catalog. Room 0 stays empty. One-time
    /// initialization for a freshly generated graph; loaded graphs already
    /// carry their contents.
    pub fn populate(&mut self, rng: &mut GameRng) {
        let n = self.rooms.len() as u32;
        let treasure = 1 + rng.rn2(n - 1);
        self.rooms[treasure as usize].content = Content::Treasure;

        for i in 1..n {
            if i == treasure {
                continue;
            }
            let r = rng.rn2(100);
            self.rooms[i as usize].content = if r < 3 {
                Content::Monster(Monster::new(MonsterKind::Dragon))
            } else if r < 60 {
                if rng.one_in(2) {
                    Content::Monster(Monster::new(MonsterKind::Goblin))
                } else {
                    Content::Monster(Monster::new(MonsterKind::Troll))
                }
            } else if r < 80 {
                Content::Item(ItemKind::Potion)
            } else if r < 95 {
                Content::Item(ItemKind::Sword)
            } else {
                Content::Item(ItemKind::Elixir)
            };
        }
    }

    /// Number of rooms
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0 as usize]
    }

    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0 as usize]
    }

    /// Look up `id` among the doors out of `from`. Linear scan of the
    /// adjacency list.
    pub fn find_neighbor(&self, from: RoomId, id: RoomId) -> Option<RoomId> {
        self.room(from).neighbors.iter().copied().find(|&nb| nb == id)
    }

    fn add_edge(&mut self, a: RoomId, b: RoomId) {
        self.rooms[a.0 as usize].neighbors.push(b);
        self.rooms[b.0 as usize].neighbors.push(a);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reachable_from_start(graph: &RoomGraph) -> usize {
        let mut seen = vec![false; graph.len()];
        let mut stack = vec![RoomId(0)];
        seen[0] = true;
        while let Some(id) = stack.pop() {
            for &nb in &graph.room(id).neighbors {
                if !seen[nb.0 as usize] {
                    seen[nb.0 as usize] = true;
                    stack.push(nb);
                }
            }
        }
        seen.iter().filter(|&&s| s).count()
    }

    #[test]
    fn test_too_few_rooms() {
        let mut rng = GameRng::new(42);
        assert_eq!(
            RoomGraph::generate(0, &mut rng),
            Err(GenerationError::TooFewRooms(0))
        );
        assert_eq!(
            RoomGraph::generate(1, &mut rng),
            Err(GenerationError::TooFewRooms(1))
        );
    }

    #[test]
    fn test_smallest_dungeon() {
        let mut rng = GameRng::new(42);
        let graph = RoomGraph::generate(2, &mut rng).unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.room(RoomId(0)).neighbors, vec![RoomId(1)]);
        assert_eq!(graph.room(RoomId(1)).neighbors, vec![RoomId(0)]);
    }

    #[test]
    fn test_generate_connects_all_rooms() {
        let mut rng = GameRng::new(12345);
        let graph = RoomGraph::generate(24, &mut rng).unwrap();
        assert_eq!(reachable_from_start(&graph), 24);
    }

    #[test]
    fn test_find_neighbor() {
        let mut rng = GameRng::new(7);
        let graph = RoomGraph::generate(8, &mut rng).unwrap();
        let first = graph.room(RoomId(0)).neighbors[0];
        assert_eq!(graph.find_neighbor(RoomId(0), first), Some(first));
        // a room is never its own neighbor
        assert_eq!(graph.find_neighbor(RoomId(0), RoomId(0)), None);
    }

    #[test]
    fn test_populate_places_exactly_one_treasure() {
        let mut rng = GameRng::new(99);
        let mut graph = RoomGraph::generate(16, &mut rng).unwrap();
        graph.populate(&mut rng);

        let treasures = graph
            .rooms
            .iter()
            .filter(|r| r.content == Content::Treasure)
            .count();
        assert_eq!(treasures, 1);
        assert_eq!(graph.room(RoomId(0)).content, Content::Empty);
    }

    #[test]
    fn test_populate_spawns_monsters_at_catalog_stats() {
        let mut rng = GameRng::new(3);
        let mut graph = RoomGraph::generate(40, &mut rng).unwrap();
        graph.populate(&mut rng);

        for room in &graph.rooms {
            if let Content::Monster(m) = room.content {
                assert_eq!(m.hp, m.kind.spawn_hp());
                assert_eq!(m.damage, m.kind.spawn_damage());
            }
        }
    }

    #[test]
    fn test_populate_leaves_rooms_unvisited() {
        let mut rng = GameRng::new(5);
        let mut graph = RoomGraph::generate(10, &mut rng).unwrap();
        graph.populate(&mut rng);
        assert!(graph.rooms.iter().all(|r| !r.visited));
    }

    proptest! {
        #[test]
        fn prop_generated_graphs_are_well_formed(n in 2u32..64, seed in any::<u64>()) {
            let mut rng = GameRng::new(seed);
            let graph = RoomGraph::generate(n, &mut rng).unwrap();

            prop_assert_eq!(graph.len(), n as usize);
            for (i, room) in graph.rooms.iter().enumerate() {
                prop_assert_eq!(room.id, RoomId(i as u32));
                prop_assert!(room.degree() <= MAX_DOORS);
                prop_assert!(!room.neighbors.contains(&room.id));

                let mut doors = room.neighbors.clone();
                doors.sort();
                doors.dedup();
                prop_assert_eq!(doors.len(), room.neighbors.len());

                for &nb in &room.neighbors {
                    prop_assert!(graph.room(nb).neighbors.contains(&room.id));
                }
            }
            prop_assert_eq!(reachable_from_start(&graph), n as usize);
        }

        #[test]
        fn prop_populate_always_places_one_treasure(n in 2u32..48, seed in any::<u64>()) {
            let mut rng = GameRng::new(seed);
            let mut graph = RoomGraph::generate(n, &mut rng).unwrap();
            graph.populate(&mut rng);

            let treasures = graph
                .rooms
                .iter()
                .filter(|r| r.content == Content::Treasure)
                .count();
            prop_assert_eq!(treasures, 1);
            prop_assert_eq!(graph.room(RoomId(0)).content, Content::Empty);
        }
    }
}
