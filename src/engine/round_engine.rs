use actix::prelude::*;
use log::{debug, warn};
use std::collections::HashMap;
use std::time::Duration;
use uuid::Uuid;

use crate::config::game::{DEFAULT_ROUND_DURATION_MS, GRID_SIZE, WINNING_SCORE};
use crate::engine::error::ConfigError;
use crate::engine::messages::{
    ClickCell, GetRoundDuration, GetSnapshot, SetRoundDuration, SnapshotUpdate, StartGame,
    Subscribe, Unsubscribe,
};
use crate::game::state::MatchState;
use crate::game::types::RoundEnd;

/// Actor owning all mutable state of a match: the grid rules in
/// [`MatchState`], the round countdown, and the subscriber registry.
///
/// The actor mailbox serializes commands and timer expiries, so every
/// transition runs to completion before the next one is looked at. The
/// countdown is a [`SpawnHandle`] from `Context::run_later`; cancelling it
/// through `Context::cancel_future` is synchronous, which guarantees that a
/// cancelled countdown never fires into the engine afterwards. For any one
/// round, subscribers therefore observe exactly one of click-resolution or
/// timeout-resolution (or neither, when a restart abandons the round).
pub struct RoundEngine {
    state: MatchState,
    round_duration: Duration,
    round_timer: Option<SpawnHandle>,
    subscribers: HashMap<Uuid, Recipient<SnapshotUpdate>>,
}

impl RoundEngine {
    /// Engine for a `grid_size x grid_size` match, first to `winning_score`.
    /// Both are fixed for the lifetime of the engine.
    pub fn new(grid_size: usize, winning_score: u32) -> Self {
        Self {
            state: MatchState::new(grid_size, winning_score),
            round_duration: Duration::from_millis(DEFAULT_ROUND_DURATION_MS),
            round_timer: None,
            subscribers: HashMap::new(),
        }
    }
}

impl Default for RoundEngine {
    fn default() -> Self {
        Self::new(GRID_SIZE, WINNING_SCORE)
    }
}

impl Actor for RoundEngine {
    type Context = Context<Self>;

    fn stopping(&mut self, ctx: &mut Context<Self>) -> Running {
        // A pending countdown must not outlive the engine.
        self.cancel_round_timer(ctx);
        Running::Stop
    }
}

impl RoundEngine {
    /// Publish the current state to every subscriber. Called exactly once
    /// per applied command or timer expiry, after all mutations for it.
    fn broadcast(&self) {
        debug!(
            "[RoundEngine] broadcast: player={} computer={} over={} active={:?}",
            self.state.player_score(),
            self.state.computer_score(),
            self.state.is_over(),
            self.state.active_cell(),
        );
        let snapshot = self.state.snapshot();
        let round_duration_ms = self.round_duration.as_millis() as u64;
        for addr in self.subscribers.values() {
            let _ = addr.do_send(SnapshotUpdate {
                snapshot: snapshot.clone(),
                round_duration_ms,
            });
        }
    }

    fn cancel_round_timer(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.round_timer.take() {
            ctx.cancel_future(handle);
        }
    }

    /// Highlight the next cell and arm its countdown. When the grid is
    /// exhausted, `open_round` has already ended the match and no timer is
    /// started.
    fn begin_round(&mut self, ctx: &mut Context<Self>) {
        if let Some(index) = self.state.open_round() {
            debug!(
                "[RoundEngine] round opened: cell={} countdown={:?}",
                index, self.round_duration
            );
            let handle = ctx.run_later(self.round_duration, |engine, ctx| {
                engine.round_timer = None;
                engine.resolve_timeout(ctx);
            });
            self.round_timer = Some(handle);
        }
    }

    /// Countdown expiry: the round goes to the computer.
    fn resolve_timeout(&mut self, ctx: &mut Context<Self>) {
        // Guard against a stray expiry; a countdown that lost its race with
        // a click or a restart was cancelled and never reaches this point.
        if self.state.active_cell().is_none() {
            return;
        }

        self.state.score_round(RoundEnd::Missed);
        if !self.state.is_over() {
            self.begin_round(ctx);
        }
        self.broadcast();
    }
}

impl Handler<StartGame> for RoundEngine {
    type Result = ();

    fn handle(&mut self, _: StartGame, ctx: &mut Context<Self>) -> Self::Result {
        // A restart mid-round abandons the round: its countdown is cancelled
        // before the reset, so nobody scores it.
        self.cancel_round_timer(ctx);
        self.state.reset();
        self.begin_round(ctx);
        self.broadcast();
    }
}

impl Handler<ClickCell> for RoundEngine {
    type Result = ();

    fn handle(&mut self, msg: ClickCell, ctx: &mut Context<Self>) -> Self::Result {
        if !self.state.is_active_cell(msg.index) {
            // Stale or misplaced click: the UI raced the engine. Expected,
            // so it is ignored rather than treated as an error.
            debug!("[RoundEngine] ignoring click on cell {}", msg.index);
            return;
        }

        self.cancel_round_timer(ctx);
        self.state.score_round(RoundEnd::Hit);
        if !self.state.is_over() {
            self.begin_round(ctx);
        }
        self.broadcast();
    }
}

impl Handler<SetRoundDuration> for RoundEngine {
    type Result = Result<(), ConfigError>;

    fn handle(&mut self, msg: SetRoundDuration, _: &mut Context<Self>) -> Self::Result {
        if msg.ms <= 0 {
            warn!("[RoundEngine] rejected round duration: {} ms", msg.ms);
            return Err(ConfigError::InvalidRoundDuration(msg.ms));
        }

        // Takes effect from the next round; a running countdown keeps the
        // deadline it was armed with.
        self.round_duration = Duration::from_millis(msg.ms as u64);
        debug!("[RoundEngine] round duration set to {} ms", msg.ms);
        Ok(())
    }
}

impl Handler<Subscribe> for RoundEngine {
    type Result = MessageResult<Subscribe>;

    fn handle(&mut self, msg: Subscribe, _: &mut Context<Self>) -> Self::Result {
        let id = Uuid::new_v4();

        // Bring the new subscriber up to date right away, like any later
        // transition would.
        let _ = msg.addr.do_send(SnapshotUpdate {
            snapshot: self.state.snapshot(),
            round_duration_ms: self.round_duration.as_millis() as u64,
        });
        self.subscribers.insert(id, msg.addr);

        MessageResult(id)
    }
}

impl Handler<Unsubscribe> for RoundEngine {
    type Result = ();

    fn handle(&mut self, msg: Unsubscribe, _: &mut Context<Self>) -> Self::Result {
        self.subscribers.remove(&msg.id);
    }
}

impl Handler<GetSnapshot> for RoundEngine {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.state.snapshot())
    }
}

impl Handler<GetRoundDuration> for RoundEngine {
    type Result = MessageResult<GetRoundDuration>;

    fn handle(&mut self, _: GetRoundDuration, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.round_duration.as_millis() as u64)
    }
}
