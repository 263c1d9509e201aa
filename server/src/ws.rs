use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures::{sink::SinkExt, stream::StreamExt};
use shared::ClientMessage;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::room_manager::AppState;

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Forward queued notifications to the WebSocket
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if let Ok(json) = serde_json::to_string(&msg) {
                if sender.send(Message::Text(json)).await.is_err() {
                    break;
                }
            }
        }
    });

    // The connection id doubles as the player id for its whole lifetime
    let player_id = uuid::Uuid::new_v4().to_string();
    state.add_player(player_id.clone(), tx);

    while let Some(Ok(msg)) = receiver.next().await {
        if let Message::Text(text) = msg {
            if let Ok(client_msg) = serde_json::from_str::<ClientMessage>(&text) {
                match client_msg {
                    ClientMessage::CreateRoom => state.create_room(player_id.clone()).await,
                    ClientMessage::JoinRoom(room_id) => {
                        state.clone().join_room(player_id.clone(), room_id).await;
                    }
                    ClientMessage::Move(position) => {
                        state.handle_move(&player_id, position).await;
                    }
                }
            }
        }
    }

    // Client disconnected
    state.remove_player(&player_id).await;
    send_task.abort();
}
