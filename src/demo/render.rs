//! Snapshot rendering for the terminal demo.

use actix::prelude::*;
use log::debug;

use crate::engine::messages::SnapshotUpdate;
use crate::game::state::GameSnapshot;
use crate::game::types::CellState;

/// Subscriber that prints every published snapshot to the terminal.
pub struct ConsoleView;

impl Actor for ConsoleView {
    type Context = Context<Self>;
}

impl Handler<SnapshotUpdate> for ConsoleView {
    type Result = ();

    fn handle(&mut self, msg: SnapshotUpdate, _: &mut Context<Self>) -> Self::Result {
        debug!(
            "[ConsoleView] state: {}",
            serde_json::to_string(&msg.snapshot)
                .unwrap_or_else(|err| format!("<serialize error: {err}>"))
        );
        print_snapshot(&msg.snapshot);
    }
}

/// Print the grid and the score line for one snapshot.
pub fn print_snapshot(snapshot: &GameSnapshot) {
    for row in snapshot.grid.chunks(snapshot.grid_size) {
        for cell in row {
            let symbol = match cell {
                CellState::Empty => " .",
                CellState::Active => "[]",
                CellState::Hit => " o",
                CellState::Missed => " x",
            };
            print!("{:<3}", symbol);
        }
        println!();
    }
    println!(
        "You {} - {} Computer",
        snapshot.player_score, snapshot.computer_score
    );
    if snapshot.is_over && !snapshot.message.is_empty() {
        println!("{}", snapshot.message);
    }
    println!();
}
