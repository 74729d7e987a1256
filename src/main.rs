//! Demo entry point.
//!
//! Starts the round engine, wires up the terminal view and the auto-player,
//! and runs one match to completion. Set `RUST_LOG=debug` for engine traces.

use reflex_grid::demo;

#[actix::main]
async fn main() -> Result<(), actix::MailboxError> {
    // Initialize logger from environment variable.
    env_logger::init();

    let snapshot = demo::run_match(800).await?;
    println!(
        "Final: {} (you {} - {} computer)",
        snapshot.message, snapshot.player_score, snapshot.computer_score
    );
    Ok(())
}
