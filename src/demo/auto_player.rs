//! Scripted player for the terminal demo.

use actix::prelude::*;
use log::debug;
use rand::Rng;
use std::time::Duration;

use crate::engine::RoundEngine;
use crate::engine::messages::{ClickCell, SnapshotUpdate};

/// Subscriber that clicks the highlighted cell after a randomized reaction
/// time between 20% and 150% of the round countdown, so it wins some rounds
/// and loses others. A reaction scheduled for a round that has already
/// resolved lands as a stale click, which the engine ignores.
pub struct AutoPlayer {
    engine: Addr<RoundEngine>,
}

impl AutoPlayer {
    pub fn new(engine: Addr<RoundEngine>) -> Self {
        Self { engine }
    }
}

impl Actor for AutoPlayer {
    type Context = Context<Self>;
}

impl Handler<SnapshotUpdate> for AutoPlayer {
    type Result = ();

    fn handle(&mut self, msg: SnapshotUpdate, ctx: &mut Context<Self>) -> Self::Result {
        if msg.snapshot.is_over {
            return;
        }
        let Some(index) = msg.snapshot.active_index() else {
            return;
        };

        let mut rng = rand::rng();
        let reaction_ms = (msg.round_duration_ms * rng.random_range(20..=150) / 100).max(1);
        debug!(
            "[AutoPlayer] aiming at cell {} in {} ms",
            index, reaction_ms
        );

        let engine = self.engine.clone();
        ctx.run_later(Duration::from_millis(reaction_ms), move |_, _| {
            engine.do_send(ClickCell { index });
        });
    }
}
