use std::sync::Arc;

use dashmap::DashMap;
use mazerace_core::Maze;
use shared::{PlayerId, RoomId, ServerMessage};
use tokio::sync::RwLock;

use crate::config::Config;

pub mod admission;
pub mod lifecycle;
pub mod movement;
pub mod room;

pub use room::{Lifecycle, Player, Room, Tx};

pub struct AppState {
    pub config: Config,
    pub maze: Maze,
    pub players: DashMap<PlayerId, Player>,
    pub rooms: DashMap<RoomId, Arc<RwLock<Room>>>,
}

impl AppState {
    pub fn new(config: Config, maze: Maze) -> Self {
        Self {
            config,
            maze,
            players: DashMap::new(),
            rooms: DashMap::new(),
        }
    }

    /// Clones the room's lock out of the registry so no registry shard is
    /// held while awaiting it.
    pub fn room_lock(&self, room_id: &str) -> Option<Arc<RwLock<Room>>> {
        self.rooms.get(room_id).map(|entry| entry.value().clone())
    }

    /// Reverse lookup of the room a player is currently a member of.
    /// Membership is only authoritative inside `Room`, so this scans.
    pub async fn find_room_of(&self, player_id: &str) -> Option<(RoomId, Arc<RwLock<Room>>)> {
        let rooms: Vec<(RoomId, Arc<RwLock<Room>>)> = self
            .rooms
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        for (room_id, lock) in rooms {
            let room = lock.read().await;
            let is_member = room.members.iter().any(|m| m == player_id);
            drop(room);
            if is_member {
                return Some((room_id, lock));
            }
        }
        None
    }

    pub fn send_to(&self, player_id: &str, msg: ServerMessage) {
        if let Some(player) = self.players.get(player_id) {
            let _ = player.tx.send(msg);
        }
    }

    /// Queues `msg` for every current member. Callers hold the room's write
    /// lock, so members observe broadcasts in the room's operation order.
    pub fn broadcast(&self, room: &Room, msg: ServerMessage) {
        for member in &room.members {
            self.send_to(member, msg.clone());
        }
    }
}
