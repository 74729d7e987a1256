use actix::prelude::*;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::engine::error::ConfigError;
use crate::game::state::GameSnapshot;

/// Start a new match, discarding any match in progress.
///
/// Always legal: a restart while a round is running cancels its countdown and
/// abandons the round without scoring either side.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct StartGame;

/// Player click forwarded by the presentation layer, already resolved to a
/// cell index. Ignored unless `index` is the currently highlighted cell.
#[derive(Message, Debug, Clone, Copy, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct ClickCell {
    pub index: usize,
}

/// Change the countdown length used for subsequent rounds. A countdown that
/// is already running keeps its original deadline.
#[derive(Message, Debug, Clone, Copy, Serialize, Deserialize)]
#[rtype(result = "Result<(), ConfigError>")]
pub struct SetRoundDuration {
    pub ms: i64,
}

/// Pushed to every subscriber after each applied transition.
///
/// `round_duration_ms` rides along so a view can display the countdown
/// without querying the engine.
#[derive(Message, Clone, Debug, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct SnapshotUpdate {
    pub snapshot: GameSnapshot,
    pub round_duration_ms: u64,
}

/// Register a snapshot subscriber. The current snapshot is delivered to it
/// immediately; the returned id can be used to unsubscribe.
#[derive(Message)]
#[rtype(result = "Uuid")]
pub struct Subscribe {
    pub addr: Recipient<SnapshotUpdate>,
}

/// Remove a previously registered subscriber.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct Unsubscribe {
    pub id: Uuid,
}

/// Pull the current snapshot (for polling callers and tests).
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "GameSnapshot")]
pub struct GetSnapshot;

/// Pull the countdown length currently configured for new rounds.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "u64")]
pub struct GetRoundDuration;
