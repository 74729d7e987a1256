//! Core of a single-player reaction-time grid game.
//!
//! A square grid of cells is shown; one cell at a time is highlighted and the
//! player must click it before a countdown expires. An in-time click scores
//! the player, a timeout scores the computer, and the first side to reach the
//! winning score ends the match (running out of fresh cells ends it too).
//!
//! The crate is organized like so:
//! - [`game`] holds the pure, synchronous match rules (grid, scoring,
//!   win/exhaustion detection).
//! - [`engine`] wraps those rules in the [`engine::RoundEngine`] actor, which
//!   owns the round countdown and broadcasts immutable state snapshots to
//!   subscribers after every applied transition.
//! - [`demo`] is a small terminal collaborator (renderer + auto-player) used
//!   by the binary entry point.

pub mod config;
pub mod demo;
pub mod engine;
pub mod game;
