use std::sync::Arc;

use axum::{routing::get, Router};
use mazerace_core::Maze;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use room_manager::AppState;
use ws::ws_handler;

mod config;
mod room_manager;
mod ws;

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = format!("{}:{}", config.host, config.port);
    let state = Arc::new(AppState::new(config, Maze::default()));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
