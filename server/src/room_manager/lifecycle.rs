use std::sync::Arc;

use shared::{PlayerId, RoomId, ServerMessage};
use tokio::task::JoinHandle;

use crate::room_manager::{AppState, Lifecycle, Player, Tx};

impl AppState {
    pub fn add_player(&self, id: PlayerId, tx: Tx) {
        tracing::info!(player_id = %id, "Player connected");
        self.players.insert(id, Player { tx });
    }

    pub async fn remove_player(&self, id: &str) {
        tracing::info!(player_id = %id, "Player disconnected");
        self.players.remove(id);
        self.leave_room(id).await;
    }

    /// Takes a player out of their room, if any. Remaining members hear
    /// about the departure; an emptied room is deleted and its countdown
    /// aborted.
    pub async fn leave_room(&self, player_id: &str) {
        let Some((room_id, lock)) = self.find_room_of(player_id).await else {
            return;
        };
        let mut room = lock.write().await;
        room.members.retain(|m| m != player_id);
        room.positions.remove(player_id);
        self.broadcast(&room, ServerMessage::PlayerLeft(player_id.to_string()));

        if room.members.is_empty() {
            let countdown = room.countdown.take();
            drop(room);
            if let Some(handle) = countdown {
                handle.abort();
            }
            // The win path may race us here; remove is idempotent
            self.rooms.remove(&room_id);
            tracing::info!(room_id = %room_id, player_id = %player_id, "Room emptied, deleted");
        } else {
            drop(room);
            tracing::info!(room_id = %room_id, player_id = %player_id, "Player left room");
        }
    }

    pub fn spawn_countdown(self: Arc<Self>, room_id: RoomId) -> JoinHandle<()> {
        tokio::spawn(async move { self.run_countdown(room_id).await })
    }

    /// Broadcasts `countdown_start, .., 1, 0` one tick apart, then flips the
    /// room to `Active` with a single game-start notice. Every tick re-checks
    /// that the room still exists and is still counting down, so a late tick
    /// cannot touch a deleted or finished room.
    async fn run_countdown(&self, room_id: RoomId) {
        let mut remaining = self.config.countdown_start;
        loop {
            tokio::time::sleep(self.config.countdown_tick).await;

            let Some(lock) = self.room_lock(&room_id) else {
                return;
            };
            let mut room = lock.write().await;
            if room.members.is_empty() || !matches!(room.lifecycle, Lifecycle::Countdown(_)) {
                return;
            }

            room.lifecycle = Lifecycle::Countdown(remaining);
            self.broadcast(&room, ServerMessage::Countdown(remaining));
            if remaining == 0 {
                room.lifecycle = Lifecycle::Active;
                self.broadcast(&room, ServerMessage::GameStart);
                room.countdown = None;
                tracing::info!(room_id = %room_id, "Countdown finished, game active");
                return;
            }
            remaining -= 1;
        }
    }
}
