//! Status panel values and high-score bookkeeping.

use anyhow::{Context, Result};

use crate::ports::ScoreStore;
use crate::types::{GAME_HIGHSCORE, GAME_LEVEL, GAME_SCORE, GAME_SPEED};

/// Values shown beside the play field for the active game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPanel {
    game_name: String,
    pub score: u32,
    high_score: u32,
    pub level: u32,
    pub speed: u32,
}

impl Default for StatusPanel {
    fn default() -> Self {
        Self {
            game_name: String::new(),
            score: GAME_SCORE,
            high_score: GAME_HIGHSCORE,
            level: GAME_LEVEL,
            speed: GAME_SPEED,
        }
    }
}

impl StatusPanel {
    pub fn game_name(&self) -> &str {
        &self.game_name
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Switch to a new session: load its stored high score and reset the score.
    pub fn begin_session(&mut self, game_name: &str, store: &impl ScoreStore) {
        self.game_name = game_name.to_string();
        self.high_score = store.get_int(game_name, 0);
        self.score = 0;
        log::info!(
            "session '{}' started (high score {})",
            self.game_name,
            self.high_score
        );
    }

    /// Raise the high score to the current score if it was beaten.
    ///
    /// The new value is persisted only on improvement, and adopted only once
    /// the store accepted it, so a failed write is retried on the next call.
    /// Returns whether the high score changed.
    pub fn sync_high_score(&mut self, store: &mut impl ScoreStore) -> Result<bool> {
        if self.score <= self.high_score {
            return Ok(false);
        }
        store
            .put_int(&self.game_name, self.score)
            .with_context(|| format!("failed to persist high score for '{}'", self.game_name))?;
        self.high_score = self.score;
        log::debug!("new high score {} for '{}'", self.high_score, self.game_name);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::bail;

    use super::*;
    use crate::ports::MemoryScoreStore;

    struct ReadOnlyStore;

    impl ScoreStore for ReadOnlyStore {
        fn get_int(&self, _key: &str, default: u32) -> u32 {
            default
        }

        fn put_int(&mut self, key: &str, _value: u32) -> Result<()> {
            bail!("store is read-only, cannot write '{key}'")
        }
    }

    #[test]
    fn defaults_come_from_constants() {
        let panel = StatusPanel::default();
        assert_eq!(panel.score, GAME_SCORE);
        assert_eq!(panel.high_score(), GAME_HIGHSCORE);
        assert_eq!(panel.level, GAME_LEVEL);
        assert_eq!(panel.speed, GAME_SPEED);
        assert_eq!(panel.game_name(), "");
    }

    #[test]
    fn begin_session_loads_high_score_and_resets_score() {
        let store = MemoryScoreStore::new().with_entry("Snake", 90);
        let mut panel = StatusPanel {
            score: 33,
            ..StatusPanel::default()
        };
        panel.begin_session("Snake", &store);
        assert_eq!(panel.game_name(), "Snake");
        assert_eq!(panel.high_score(), 90);
        assert_eq!(panel.score, 0);
    }

    #[test]
    fn sync_persists_only_on_strict_improvement() {
        let mut store = MemoryScoreStore::new();
        let mut panel = StatusPanel::default();
        panel.begin_session("Tetris", &store);

        panel.score = 0;
        assert!(!panel.sync_high_score(&mut store).unwrap());
        assert!(store.writes().is_empty());

        panel.score = 50;
        assert!(panel.sync_high_score(&mut store).unwrap());
        assert_eq!(panel.high_score(), 50);

        assert!(!panel.sync_high_score(&mut store).unwrap());
        assert_eq!(store.writes(), &[("Tetris".to_string(), 50)]);
    }

    #[test]
    fn high_score_never_drops_below_score_after_sync() {
        let mut store = MemoryScoreStore::new().with_entry("Race", 500);
        let mut panel = StatusPanel::default();
        panel.begin_session("Race", &store);
        for score in [0, 10, 499, 500, 501, 1200, 3] {
            panel.score = score;
            panel.sync_high_score(&mut store).unwrap();
            assert!(panel.high_score() >= score);
        }
        assert_eq!(panel.high_score(), 1200);
        assert_eq!(store.get_int("Race", 0), 1200);
    }

    #[test]
    fn failed_write_keeps_the_previous_high_score() {
        let mut store = ReadOnlyStore;
        let mut panel = StatusPanel::default();
        panel.begin_session("Tetris", &store);
        panel.score = 40;

        let err = panel.sync_high_score(&mut store).unwrap_err();
        assert!(format!("{err:#}").contains("Tetris"));
        assert_eq!(panel.high_score(), 0);
        assert!(panel.sync_high_score(&mut store).is_err());
    }
}
