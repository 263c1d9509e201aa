use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use rand::Rng;
use shared::{PlayerId, RoomId, ServerMessage};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::room_manager::room::ROOM_CAPACITY;
use crate::room_manager::{AppState, Lifecycle, Room};

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CODE_LEN: usize = 5;

/// Lobby code: short and human-typable, not a credential. Uniqueness is the
/// registry's job, via the re-roll in `insert_with_fresh_code`.
pub fn generate_room_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LEN)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Join rejections, surfaced to the requesting client only. The wording is
/// part of the wire contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JoinError {
    #[error("Room does not exist")]
    RoomNotFound,
    #[error("Room is full")]
    RoomFull,
}

impl JoinError {
    fn rejection(&self) -> ServerMessage {
        ServerMessage::RoomJoined {
            room_id: None,
            error: Some(self.to_string()),
        }
    }
}

impl AppState {
    pub async fn create_room(&self, player_id: PlayerId) {
        if self.find_room_of(&player_id).await.is_some() {
            tracing::warn!(player_id = %player_id, "Already in a room, ignoring create-room");
            return;
        }

        let mut room = Room::new();
        room.members.push(player_id.clone());
        room.positions.insert(player_id.clone(), self.maze.spawn(0));

        // Hold the write lock across publication so the creator's private
        // messages are queued before any joiner's broadcast can be.
        let lock = Arc::new(RwLock::new(room));
        let room = lock.write().await;
        let room_id = self.insert_with_fresh_code(lock.clone());

        self.send_to(
            &player_id,
            ServerMessage::RoomCreated {
                room_id: room_id.clone(),
            },
        );
        self.send_to(
            &player_id,
            ServerMessage::Init {
                id: player_id.clone(),
                players: room.positions.clone(),
            },
        );
        drop(room);

        tracing::info!(player_id = %player_id, room_id = %room_id, "Room created");
    }

    pub async fn join_room(self: Arc<Self>, player_id: PlayerId, room_id: RoomId) {
        if self.find_room_of(&player_id).await.is_some() {
            tracing::warn!(player_id = %player_id, "Already in a room, ignoring join-room");
            return;
        }

        let Some(lock) = self.room_lock(&room_id) else {
            tracing::debug!(player_id = %player_id, room_id = %room_id, "Join rejected: no such room");
            self.send_to(&player_id, JoinError::RoomNotFound.rejection());
            return;
        };
        let mut room = lock.write().await;

        // The room can retire between lookup and lock acquisition
        if room.members.is_empty() || matches!(room.lifecycle, Lifecycle::Finished(_)) {
            drop(room);
            self.send_to(&player_id, JoinError::RoomNotFound.rejection());
            return;
        }
        if room.members.len() >= ROOM_CAPACITY {
            drop(room);
            tracing::debug!(player_id = %player_id, room_id = %room_id, "Join rejected: room full");
            self.send_to(&player_id, JoinError::RoomFull.rejection());
            return;
        }

        let spawn = self.maze.spawn(room.members.len());
        room.members.push(player_id.clone());
        room.positions.insert(player_id.clone(), spawn);
        tracing::info!(player_id = %player_id, room_id = %room_id, "Player joined room");

        self.send_to(
            &player_id,
            ServerMessage::RoomJoined {
                room_id: Some(room_id.clone()),
                error: None,
            },
        );
        self.send_to(
            &player_id,
            ServerMessage::Init {
                id: player_id.clone(),
                players: room.positions.clone(),
            },
        );
        for member in &room.members {
            if member != &player_id {
                self.send_to(
                    member,
                    ServerMessage::PlayerJoined {
                        id: player_id.clone(),
                        position: spawn,
                    },
                );
            }
        }

        if room.members.len() == ROOM_CAPACITY && room.lifecycle == Lifecycle::Waiting {
            room.lifecycle = Lifecycle::Countdown(self.config.countdown_start);
            room.countdown = Some(self.clone().spawn_countdown(room_id.clone()));
            tracing::info!(room_id = %room_id, "Room full, starting countdown");
        }
    }

    fn insert_with_fresh_code(&self, lock: Arc<RwLock<Room>>) -> RoomId {
        loop {
            let code = generate_room_code();
            match self.rooms.entry(code.clone()) {
                Entry::Occupied(_) => continue,
                Entry::Vacant(vacant) => {
                    vacant.insert(lock);
                    return code;
                }
            }
        }
    }
}
