use std::collections::HashMap;

use mazerace_core::Position;
use serde::{Deserialize, Serialize};

pub type PlayerId = String;
pub type RoomId = String;

/// Client → server. Serialized as `{"type": "<kebab-case event>", "payload": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum ClientMessage {
    CreateRoom,
    JoinRoom(RoomId),
    Move(Position),
}

/// Server → client. Same envelope as [`ClientMessage`]; struct payloads use
/// camelCase field names on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ServerMessage {
    RoomCreated {
        room_id: RoomId,
    },
    /// Private snapshot sent to a player entering a room: their own id plus
    /// every member's position, themselves included.
    Init {
        id: PlayerId,
        players: HashMap<PlayerId, Position>,
    },
    /// Join outcome: exactly one of `room_id` (success) or `error` is set.
    RoomJoined {
        #[serde(skip_serializing_if = "Option::is_none")]
        room_id: Option<RoomId>,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    PlayerJoined {
        id: PlayerId,
        position: Position,
    },
    Countdown(u8),
    GameStart,
    PlayerMoved {
        id: PlayerId,
        position: Position,
    },
    GameOver {
        winner: PlayerId,
        you_won: bool,
    },
    /// Bare departed id, not wrapped in an object.
    PlayerLeft(PlayerId),
}
