#[cfg(test)]
mod tests {
    use actix::clock::sleep;
    use actix::prelude::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use crate::engine::RoundEngine;
    use crate::engine::error::ConfigError;
    use crate::engine::messages::{
        ClickCell, GetRoundDuration, GetSnapshot, SetRoundDuration, SnapshotUpdate, StartGame,
        Subscribe, Unsubscribe,
    };
    use crate::game::grid::count_resolved;
    use crate::game::state::{
        COMPUTER_WINS_MESSAGE, EXHAUSTED_MESSAGE, GameSnapshot, PLAYER_WINS_MESSAGE,
    };
    use crate::game::types::CellState;

    /// Long enough that no countdown fires while a test drives clicks.
    const ONE_HOUR_MS: i64 = 3_600_000;

    /// Test subscriber collecting every snapshot it is sent.
    struct Recorder {
        seen: Arc<Mutex<Vec<GameSnapshot>>>,
    }

    impl Actor for Recorder {
        type Context = Context<Self>;
    }

    impl Handler<SnapshotUpdate> for Recorder {
        type Result = ();

        fn handle(&mut self, msg: SnapshotUpdate, _: &mut Context<Self>) -> Self::Result {
            self.seen.lock().unwrap().push(msg.snapshot);
        }
    }

    /// Click the currently highlighted cell and return its index.
    async fn click_active(engine: &Addr<RoundEngine>) -> usize {
        let snapshot = engine.send(GetSnapshot).await.unwrap();
        let index = snapshot.active_index().expect("a round should be active");
        engine.send(ClickCell { index }).await.unwrap();
        index
    }

    #[actix::test]
    async fn test_start_opens_first_round() {
        let engine = RoundEngine::default().start();

        engine.send(StartGame).await.unwrap();
        let snapshot = engine.send(GetSnapshot).await.unwrap();

        assert_eq!(snapshot.grid.len(), 100);
        assert!(!snapshot.is_over);
        assert_eq!(snapshot.message, "");
        assert_eq!(snapshot.player_score, 0);
        assert_eq!(snapshot.computer_score, 0);
        assert!(snapshot.active_index().is_some());
        let non_empty = snapshot
            .grid
            .iter()
            .filter(|cell| **cell != CellState::Empty)
            .count();
        assert_eq!(non_empty, 1);
    }

    #[actix::test]
    async fn test_click_active_cell_scores_player() {
        let engine = RoundEngine::default().start();
        engine.send(SetRoundDuration { ms: ONE_HOUR_MS }).await.unwrap().unwrap();
        engine.send(StartGame).await.unwrap();

        let clicked = click_active(&engine).await;
        let snapshot = engine.send(GetSnapshot).await.unwrap();

        assert_eq!(snapshot.player_score, 1);
        assert_eq!(snapshot.computer_score, 0);
        assert_eq!(snapshot.grid[clicked], CellState::Hit);
        // The next round is already open.
        let next = snapshot.active_index().expect("next round should be open");
        assert_ne!(next, clicked);
    }

    #[actix::test]
    async fn test_click_on_other_cell_is_ignored() {
        let engine = RoundEngine::default().start();
        engine.send(SetRoundDuration { ms: ONE_HOUR_MS }).await.unwrap().unwrap();
        engine.send(StartGame).await.unwrap();

        let before = engine.send(GetSnapshot).await.unwrap();
        let active = before.active_index().unwrap();
        let other = (active + 1) % before.grid.len();

        engine.send(ClickCell { index: other }).await.unwrap();
        let after = engine.send(GetSnapshot).await.unwrap();

        assert_eq!(before, after);
    }

    #[actix::test]
    async fn test_click_before_first_start_is_ignored() {
        let engine = RoundEngine::default().start();

        engine.send(ClickCell { index: 0 }).await.unwrap();
        let snapshot = engine.send(GetSnapshot).await.unwrap();

        assert!(snapshot.is_over);
        assert_eq!(snapshot.player_score, 0);
        assert_eq!(snapshot.computer_score, 0);
        assert!(snapshot.grid.iter().all(|cell| *cell == CellState::Empty));
    }

    #[actix::test]
    async fn test_timeout_scores_computer() {
        let engine = RoundEngine::default().start();
        engine.send(SetRoundDuration { ms: 100 }).await.unwrap().unwrap();
        engine.send(StartGame).await.unwrap();

        sleep(Duration::from_millis(350)).await;
        let snapshot = engine.send(GetSnapshot).await.unwrap();

        assert_eq!(snapshot.player_score, 0);
        assert!(snapshot.computer_score >= 1);
        assert_eq!(
            count_resolved(&snapshot.grid),
            snapshot.computer_score as usize
        );
    }

    #[actix::test]
    async fn test_click_cancels_pending_timeout() {
        let engine = RoundEngine::default().start();
        engine.send(SetRoundDuration { ms: 300 }).await.unwrap().unwrap();
        engine.send(StartGame).await.unwrap();

        // Slow the next rounds down so only the first one could ever expire.
        engine.send(SetRoundDuration { ms: ONE_HOUR_MS }).await.unwrap().unwrap();
        let clicked = click_active(&engine).await;

        // Well past the first round's original deadline: a cancelled
        // countdown must never produce a timeout resolution.
        sleep(Duration::from_millis(900)).await;
        let snapshot = engine.send(GetSnapshot).await.unwrap();

        assert_eq!(snapshot.player_score, 1);
        assert_eq!(snapshot.computer_score, 0);
        assert_eq!(snapshot.grid[clicked], CellState::Hit);
        assert!(!snapshot.is_over);
    }

    #[actix::test]
    async fn test_restart_mid_round_scores_nobody() {
        let engine = RoundEngine::default().start();
        engine.send(SetRoundDuration { ms: 200 }).await.unwrap().unwrap();
        engine.send(StartGame).await.unwrap();

        engine.send(SetRoundDuration { ms: ONE_HOUR_MS }).await.unwrap().unwrap();
        engine.send(StartGame).await.unwrap();

        // Past the abandoned round's deadline; its countdown was cancelled.
        sleep(Duration::from_millis(700)).await;
        let snapshot = engine.send(GetSnapshot).await.unwrap();

        assert_eq!(snapshot.player_score, 0);
        assert_eq!(snapshot.computer_score, 0);
        assert!(!snapshot.is_over);
        let empty = snapshot
            .grid
            .iter()
            .filter(|cell| **cell == CellState::Empty)
            .count();
        assert_eq!(empty, snapshot.grid.len() - 1);
        assert!(snapshot.active_index().is_some());
    }

    #[actix::test]
    async fn test_round_duration_validation() {
        let engine = RoundEngine::default().start();

        assert_eq!(engine.send(GetRoundDuration).await.unwrap(), 1000);

        let rejected = engine.send(SetRoundDuration { ms: 0 }).await.unwrap();
        assert_eq!(rejected, Err(ConfigError::InvalidRoundDuration(0)));
        let rejected = engine.send(SetRoundDuration { ms: -5 }).await.unwrap();
        assert_eq!(rejected, Err(ConfigError::InvalidRoundDuration(-5)));
        assert_eq!(engine.send(GetRoundDuration).await.unwrap(), 1000);

        engine.send(SetRoundDuration { ms: 500 }).await.unwrap().unwrap();
        assert_eq!(engine.send(GetRoundDuration).await.unwrap(), 500);
    }

    #[actix::test]
    async fn test_new_duration_spares_running_countdown() {
        let engine = RoundEngine::default().start();
        engine.send(SetRoundDuration { ms: ONE_HOUR_MS }).await.unwrap().unwrap();
        engine.send(StartGame).await.unwrap();

        // The running round keeps its hour-long deadline.
        engine.send(SetRoundDuration { ms: 150 }).await.unwrap().unwrap();
        sleep(Duration::from_millis(500)).await;
        let snapshot = engine.send(GetSnapshot).await.unwrap();
        assert_eq!(snapshot.computer_score, 0);

        // The next round is armed with the new 150 ms value.
        click_active(&engine).await;
        sleep(Duration::from_millis(600)).await;
        let snapshot = engine.send(GetSnapshot).await.unwrap();
        assert!(snapshot.computer_score >= 1);
    }

    #[actix::test]
    async fn test_player_wins_at_winning_score() {
        let engine = RoundEngine::default().start();
        engine.send(SetRoundDuration { ms: ONE_HOUR_MS }).await.unwrap().unwrap();
        engine.send(StartGame).await.unwrap();

        for _ in 0..10 {
            click_active(&engine).await;
        }
        let snapshot = engine.send(GetSnapshot).await.unwrap();

        assert!(snapshot.is_over);
        assert_eq!(snapshot.message, PLAYER_WINS_MESSAGE);
        assert_eq!(snapshot.player_score, 10);
        assert_eq!(snapshot.computer_score, 0);
        assert_eq!(snapshot.active_index(), None);

        // Clicks after the end change nothing.
        engine.send(ClickCell { index: 0 }).await.unwrap();
        assert_eq!(engine.send(GetSnapshot).await.unwrap(), snapshot);
    }

    #[actix::test]
    async fn test_computer_wins_at_winning_score() {
        let engine = RoundEngine::new(10, 2).start();
        engine.send(SetRoundDuration { ms: 80 }).await.unwrap().unwrap();
        engine.send(StartGame).await.unwrap();

        sleep(Duration::from_millis(800)).await;
        let snapshot = engine.send(GetSnapshot).await.unwrap();

        assert!(snapshot.is_over);
        assert_eq!(snapshot.message, COMPUTER_WINS_MESSAGE);
        assert_eq!(snapshot.computer_score, 2);
        assert_eq!(snapshot.player_score, 0);
    }

    #[actix::test]
    async fn test_exhausted_grid_ends_with_game_over() {
        // 2x2 grid, winning score out of reach.
        let engine = RoundEngine::new(2, 100).start();
        engine.send(SetRoundDuration { ms: ONE_HOUR_MS }).await.unwrap().unwrap();
        engine.send(StartGame).await.unwrap();

        for _ in 0..4 {
            click_active(&engine).await;
        }
        let snapshot = engine.send(GetSnapshot).await.unwrap();

        assert!(snapshot.is_over);
        assert_eq!(snapshot.message, EXHAUSTED_MESSAGE);
        assert_eq!(snapshot.player_score, 4);
        assert_eq!(snapshot.computer_score, 0);
        assert!(snapshot.grid.iter().all(|cell| *cell == CellState::Hit));
    }

    #[actix::test]
    async fn test_subscribers_receive_snapshots() {
        let engine = RoundEngine::default().start();
        engine.send(SetRoundDuration { ms: ONE_HOUR_MS }).await.unwrap().unwrap();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = Recorder { seen: seen.clone() }.start();
        let id = engine
            .send(Subscribe { addr: recorder.recipient() })
            .await
            .unwrap();

        // Registration replays the current (idle) snapshot.
        sleep(Duration::from_millis(50)).await;
        {
            let snapshots = seen.lock().unwrap();
            assert_eq!(snapshots.len(), 1);
            assert!(snapshots[0].is_over);
        }

        engine.send(StartGame).await.unwrap();
        click_active(&engine).await;
        sleep(Duration::from_millis(50)).await;
        {
            let snapshots = seen.lock().unwrap();
            assert_eq!(snapshots.len(), 3);
            assert_eq!(snapshots[2].player_score, 1);
            assert!(!snapshots[2].is_over);
        }

        engine.send(Unsubscribe { id }).await.unwrap();
        click_active(&engine).await;
        sleep(Duration::from_millis(50)).await;
        assert_eq!(seen.lock().unwrap().len(), 3);
    }
}
