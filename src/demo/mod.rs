//! Terminal demo for the round engine.
//!
//! Stands in for a real presentation layer: a console view subscriber that
//! renders every snapshot, and an auto-player that clicks the highlighted
//! cell with a randomized reaction time (sometimes too slowly, so the
//! computer scores too).

pub mod auto_player;
pub mod render;

use actix::clock::sleep;
use actix::prelude::*;
use log::{info, warn};
use std::time::Duration;

use crate::engine::RoundEngine;
use crate::engine::messages::{GetSnapshot, SetRoundDuration, StartGame, Subscribe};
use crate::game::state::GameSnapshot;

use auto_player::AutoPlayer;
use render::ConsoleView;

/// Drive one full match to completion and return the final snapshot.
pub async fn run_match(round_duration_ms: i64) -> Result<GameSnapshot, MailboxError> {
    let engine = RoundEngine::default().start();
    let view = ConsoleView.start();
    let bot = AutoPlayer::new(engine.clone()).start();

    engine.send(Subscribe { addr: view.recipient() }).await?;
    engine.send(Subscribe { addr: bot.recipient() }).await?;

    if let Err(err) = engine.send(SetRoundDuration { ms: round_duration_ms }).await? {
        warn!("[demo] keeping the default round duration: {err}");
    }

    info!("[demo] match start");
    engine.send(StartGame).await?;

    // Poll until the engine declares the match over.
    loop {
        sleep(Duration::from_millis(250)).await;
        let snapshot = engine.send(GetSnapshot).await?;
        if snapshot.is_over {
            return Ok(snapshot);
        }
    }
}
