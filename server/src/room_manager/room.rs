use std::collections::HashMap;

use mazerace_core::Position;
use shared::{PlayerId, ServerMessage};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type Tx = mpsc::UnboundedSender<ServerMessage>;

pub struct Player {
    pub tx: Tx,
}

/// Where a room is in its run from lobby to finished race.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lifecycle {
    Waiting,
    Countdown(u8),
    Active,
    /// Terminal, carries the winner. Set under the room lock right before
    /// the room leaves the registry, so a late timer tick sees it.
    Finished(PlayerId),
}

pub const ROOM_CAPACITY: usize = 2;

pub struct Room {
    /// Join order decides spawn assignment: first member gets spawn 0.
    pub members: Vec<PlayerId>,
    /// Keys are exactly `members`.
    pub positions: HashMap<PlayerId, Position>,
    pub lifecycle: Lifecycle,
    /// Running countdown task, aborted when the room is deleted.
    pub countdown: Option<JoinHandle<()>>,
}

impl Room {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            positions: HashMap::new(),
            lifecycle: Lifecycle::Waiting,
            countdown: None,
        }
    }
}

impl Default for Room {
    fn default() -> Self {
        Self::new()
    }
}
