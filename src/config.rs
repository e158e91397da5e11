//! Host configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::sound::DEFAULT_PLAYER_COMMAND;
use crate::types::DEFAULT_SPLASH_TIMEOUT_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub surface_x: u16,
    pub surface_y: u16,
    pub score_path: PathBuf,
    pub splash_dir: PathBuf,
    pub splash_name: String,
    pub splash_timeout_ms: u64,
    pub games: Vec<String>,
    pub sound_command: String,
    pub sound_disabled: bool,
    pub score_sound: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            surface_x: 0,
            surface_y: 0,
            score_path: PathBuf::from("scores.json"),
            splash_dir: PathBuf::from("splash"),
            splash_name: "attract".to_string(),
            splash_timeout_ms: DEFAULT_SPLASH_TIMEOUT_MS,
            games: vec!["Tetris".to_string()],
            sound_command: DEFAULT_PLAYER_COMMAND.to_string(),
            sound_disabled: false,
            score_sound: None,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Create from `BRICK_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reading from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| -> Option<String> {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let surface_x = non_empty("BRICK_SURFACE_X")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.surface_x);
        let surface_y = non_empty("BRICK_SURFACE_Y")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.surface_y);
        let score_path = non_empty("BRICK_SCORE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.score_path);
        let splash_dir = non_empty("BRICK_SPLASH_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.splash_dir);
        let splash_name = non_empty("BRICK_SPLASH_NAME").unwrap_or(defaults.splash_name);
        let splash_timeout_ms = non_empty("BRICK_SPLASH_TIMEOUT_MS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.splash_timeout_ms);

        let games: Vec<String> = non_empty("BRICK_GAMES")
            .map(|s| {
                s.split(',')
                    .map(|g| g.trim().to_string())
                    .filter(|g| !g.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        let games = if games.is_empty() { defaults.games } else { games };

        let sound_command = non_empty("BRICK_SOUND_CMD").unwrap_or(defaults.sound_command);
        let sound_disabled = non_empty("BRICK_SOUND_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);
        let score_sound = non_empty("BRICK_SCORE_SOUND").map(PathBuf::from);
        let log_path = non_empty("BRICK_LOG_PATH").map(PathBuf::from);

        Self {
            surface_x,
            surface_y,
            score_path,
            splash_dir,
            splash_name,
            splash_timeout_ms,
            games,
            sound_command,
            sound_disabled,
            score_sound,
            log_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])), AppConfig::default());
    }

    #[test]
    fn values_are_read_and_parsed() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BRICK_SURFACE_X", "4"),
            ("BRICK_SURFACE_Y", "2"),
            ("BRICK_SPLASH_TIMEOUT_MS", "35"),
            ("BRICK_GAMES", "Tetris, Snake,,Race"),
            ("BRICK_SOUND_DISABLED", "TRUE"),
            ("BRICK_SCORE_SOUND", "sounds/line.wav"),
            ("BRICK_LOG_PATH", "/tmp/brick.log"),
        ]));
        assert_eq!((config.surface_x, config.surface_y), (4, 2));
        assert_eq!(config.splash_timeout_ms, 35);
        assert_eq!(config.games, vec!["Tetris", "Snake", "Race"]);
        assert!(config.sound_disabled);
        assert_eq!(config.score_sound, Some(PathBuf::from("sounds/line.wav")));
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/brick.log")));
    }

    #[test]
    fn unparsable_numbers_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BRICK_SURFACE_X", "left"),
            ("BRICK_SPLASH_TIMEOUT_MS", "-1"),
            ("BRICK_GAMES", " , "),
            ("BRICK_LOG_PATH", "   "),
        ]));
        assert_eq!(config.surface_x, 0);
        assert_eq!(config.splash_timeout_ms, DEFAULT_SPLASH_TIMEOUT_MS);
        assert_eq!(config.games, vec!["Tetris"]);
        assert_eq!(config.log_path, None);
    }
}
