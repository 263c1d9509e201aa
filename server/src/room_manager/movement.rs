use mazerace_core::{rules, Position};
use shared::ServerMessage;

use crate::room_manager::{AppState, Lifecycle};

impl AppState {
    /// Applies a proposed move. Stale or invalid requests are dropped with
    /// no reply; only accepted moves produce a broadcast.
    pub async fn handle_move(&self, player_id: &str, proposed: Position) {
        let Some((room_id, lock)) = self.find_room_of(player_id).await else {
            return;
        };
        let mut room = lock.write().await;

        // Movement only counts once the countdown has run out
        if room.lifecycle != Lifecycle::Active {
            return;
        }
        let Some(&current) = room.positions.get(player_id) else {
            return;
        };
        if let Err(reason) =
            rules::validate_move(self.config.move_policy, &self.maze, current, proposed)
        {
            tracing::debug!(player_id = %player_id, ?reason, "Move rejected");
            return;
        }

        room.positions.insert(player_id.to_string(), proposed);
        self.broadcast(
            &room,
            ServerMessage::PlayerMoved {
                id: player_id.to_string(),
                position: proposed,
            },
        );

        if proposed == self.maze.goal() {
            for member in &room.members {
                self.send_to(
                    member,
                    ServerMessage::GameOver {
                        winner: player_id.to_string(),
                        you_won: member == player_id,
                    },
                );
            }
            room.lifecycle = Lifecycle::Finished(player_id.to_string());
            let countdown = room.countdown.take();
            drop(room);

            if let Some(handle) = countdown {
                handle.abort();
            }
            self.rooms.remove(&room_id);
            tracing::info!(room_id = %room_id, winner = %player_id, "Game over, room retired");
        }
    }
}
