//! The fixed binary world layout.
//!
//! All fields are little-endian i32, written and read in this order:
//!
//! ```text
//! room_count | player location | player hp | player damage
//! then per room in id order:
//!   visited (0/1) | content tag (0 none, 1 monster, 2 item, 3 treasure)
//!   monster: kind (0 goblin, 1 troll, 2 dragon) | hp | damage
//!   item:    kind (0 potion, 1 sword, 2 elixir)
//!   neighbor count | neighbor ids...
//! ```
//!
//! Display names and item magnitudes are never stored; they derive from
//! the kind tags on load. Every read is length-checked and every tag, id,
//! and count range-checked, so a truncated or malformed stream fails with
//! [`CorruptSave`] instead of producing a partially populated world.
//! Bytes past the final room are ignored.

use thiserror::Error;

use delve_core::dungeon::{Content, Room, RoomGraph, RoomId};
use delve_core::item::ItemKind;
use delve_core::monster::{Monster, MonsterKind};
use delve_core::player::Player;

const TAG_NONE: i32 = 0;
const TAG_MONSTER: i32 = 1;
const TAG_ITEM: i32 = 2;
const TAG_TREASURE: i32 = 3;

/// A save byte stream that cannot be decoded.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CorruptSave {
    #[error("save data ends in the middle of {0}")]
    Truncated(&'static str),

    #[error("room count {0} is not a valid dungeon size")]
    InvalidRoomCount(i32),

    #[error("visited flag must be 0 or 1, got {0}")]
    InvalidVisitedFlag(i32),

    #[error("unknown content tag {0}")]
    InvalidContentTag(i32),

    #[error("unknown monster kind {0}")]
    InvalidMonsterKind(i32),

    #[error("unknown item kind {0}")]
    InvalidItemKind(i32),

    #[error("negative neighbor count {0}")]
    InvalidNeighborCount(i32),

    #[error("room id {id} is outside the dungeon (size {count})")]
    RoomIdOutOfRange { id: i32, count: i32 },
}

/// Serialize the world to its binary form.
pub fn encode(graph: &RoomGraph, player: &Player) -> Vec<u8> {
    let mut buf = Vec::new();
    put_i32(&mut buf, graph.len() as i32);
    put_i32(&mut buf, player.location.0 as i32);
    put_i32(&mut buf, player.hp);
    put_i32(&mut buf, player.damage);

    for room in &graph.rooms {
        put_i32(&mut buf, room.visited as i32);
        match room.content {
            Content::Empty => put_i32(&mut buf, TAG_NONE),
            Content::Monster(m) => {
                put_i32(&mut buf, TAG_MONSTER);
                put_i32(&mut buf, m.kind as i32);
                put_i32(&mut buf, m.hp);
                put_i32(&mut buf, m.damage);
            }
            Content::Item(kind) => {
                put_i32(&mut buf, TAG_ITEM);
                put_i32(&mut buf, kind as i32);
            }
            Content::Treasure => put_i32(&mut buf, TAG_TREASURE),
        }
        put_i32(&mut buf, room.neighbors.len() as i32);
        for &nb in &room.neighbors {
            put_i32(&mut buf, nb.0 as i32);
        }
    }
    buf
}

/// Deserialize a world from its binary form.
pub fn decode(bytes: &[u8]) -> Result<(RoomGraph, Player), CorruptSave> {
    let mut r = Reader::new(bytes);

    let count = r.read_i32("room count")?;
    if count <= 0 {
        return Err(CorruptSave::InvalidRoomCount(count));
    }
    let location = r.read_room_id("player location", count)?;
    let hp = r.read_i32("player hp")?;
    let damage = r.read_i32("player damage")?;

    // counts are untrusted; never preallocate from them
    let mut rooms = Vec::new();
    for id in 0..count {
        let visited = match r.read_i32("visited flag")? {
            0 => false,
            1 => true,
            v => return Err(CorruptSave::InvalidVisitedFlag(v)),
        };
        let content = match r.read_i32("content tag")? {
            TAG_NONE => Content::Empty,
            TAG_MONSTER => {
                let kind = match r.read_i32("monster kind")? {
                    0 => MonsterKind::Goblin,
                    1 => MonsterKind::Troll,
                    2 => MonsterKind::Dragon,
                    k => return Err(CorruptSave::InvalidMonsterKind(k)),
                };
                let hp = r.read_i32("monster hp")?;
                let damage = r.read_i32("monster damage")?;
                Content::Monster(Monster { kind, hp, damage })
            }
            TAG_ITEM => {
                let kind = match r.read_i32("item kind")? {
                    0 => ItemKind::Potion,
                    1 => ItemKind::Sword,
                    2 => ItemKind::Elixir,
                    k => return Err(CorruptSave::InvalidItemKind(k)),
                };
                Content::Item(kind)
            }
            TAG_TREASURE => Content::Treasure,
            t => return Err(CorruptSave::InvalidContentTag(t)),
        };

        let neighbor_count = r.read_i32("neighbor count")?;
        if neighbor_count < 0 {
            return Err(CorruptSave::InvalidNeighborCount(neighbor_count));
        }
        let mut neighbors = Vec::new();
        for _ in 0..neighbor_count {
            neighbors.push(r.read_room_id("neighbor id", count)?);
        }

        rooms.push(Room {
            id: RoomId(id as u32),
            neighbors,
            content,
            visited,
        });
    }

    Ok((RoomGraph { rooms }, Player { location, hp, damage }))
}

fn put_i32(buf: &mut Vec<u8>, v: i32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn read_i32(&mut self, field: &'static str) -> Result<i32, CorruptSave> {
        let end = self.pos + 4;
        let bytes: [u8; 4] = self
            .buf
            .get(self.pos..end)
            .and_then(|s| s.try_into().ok())
            .ok_or(CorruptSave::Truncated(field))?;
        self.pos = end;
        Ok(i32::from_le_bytes(bytes))
    }

    fn read_room_id(&mut self, field: &'static str, count: i32) -> Result<RoomId, CorruptSave> {
        let id = self.read_i32(field)?;
        if id < 0 || id >= count {
            return Err(CorruptSave::RoomIdOutOfRange { id, count });
        }
        Ok(RoomId(id as u32))
    }
}
