use std::env;
use std::time::Duration;

use mazerace_core::rules::MovePolicy;

/// Server settings, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// First countdown value; ticks run down to 0 inclusive.
    pub countdown_start: u8,
    pub countdown_tick: Duration,
    pub move_policy: MovePolicy,
    pub log_level: String,
}

impl Config {
    /// Loads settings from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .unwrap_or(3001),
            countdown_start: env::var("COUNTDOWN_START")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .unwrap_or(3),
            countdown_tick: Duration::from_millis(
                env::var("COUNTDOWN_TICK_MS")
                    .unwrap_or_else(|_| "1000".to_string())
                    .parse()
                    .unwrap_or(1000),
            ),
            move_policy: match env::var("MOVE_POLICY").as_deref() {
                Ok("adjacent-only") => MovePolicy::AdjacentOnly,
                _ => MovePolicy::MazeAware,
            },
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
