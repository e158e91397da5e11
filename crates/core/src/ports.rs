//! Collaborators the surface consumes: score persistence, splash frames and
//! the pacing clock.
//!
//! The surface only talks to these traits, so hosts can plug in a real file
//! store and a sleeping clock while tests use the in-memory versions below.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::time::Duration;

use anyhow::{anyhow, Result};

use crate::field::FieldSnapshot;

/// Integer persistence keyed by game name.
pub trait ScoreStore {
    /// Stored value for `key`, or `default` when absent.
    fn get_int(&self, key: &str, default: u32) -> u32;

    fn put_int(&mut self, key: &str, value: u32) -> Result<()>;
}

/// Reads a named resource into an ordered list of frames.
///
/// A resource that cannot be located or parsed is an error; an existing but
/// empty resource yields zero frames.
pub trait SplashSource {
    fn read(&self, name: &str) -> Result<Vec<FieldSnapshot>>;
}

/// Blocking delay between splash frames.
pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}

/// Real-time pacer backed by `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Pacer that records requested delays instead of sleeping.
///
/// Clones share the same log, so a host can hand one clone to the surface and
/// keep the other for inspection.
#[derive(Debug, Default, Clone)]
pub struct RecordingPacer {
    delays: Rc<RefCell<Vec<Duration>>>,
}

impl RecordingPacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delays(&self) -> Vec<Duration> {
        self.delays.borrow().clone()
    }

    pub fn total(&self) -> Duration {
        self.delays.borrow().iter().sum()
    }
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, delay: Duration) {
        self.delays.borrow_mut().push(delay);
    }
}

/// Volatile score store that also keeps a log of every write.
#[derive(Debug, Default, Clone)]
pub struct MemoryScoreStore {
    values: BTreeMap<String, u32>,
    writes: Vec<(String, u32)>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: u32) -> Self {
        self.values.insert(key.to_string(), value);
        self
    }

    /// Every `put_int` call in order.
    pub fn writes(&self) -> &[(String, u32)] {
        &self.writes
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get_int(&self, key: &str, default: u32) -> u32 {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn put_int(&mut self, key: &str, value: u32) -> Result<()> {
        self.values.insert(key.to_string(), value);
        self.writes.push((key.to_string(), value));
        Ok(())
    }
}

/// Frames held in memory, keyed by resource name.
impl SplashSource for HashMap<String, Vec<FieldSnapshot>> {
    fn read(&self, name: &str) -> Result<Vec<FieldSnapshot>> {
        self.get(name)
            .cloned()
            .ok_or_else(|| anyhow!("splash resource '{name}' not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_falls_back_to_default() {
        let store = MemoryScoreStore::new().with_entry("Snake", 40);
        assert_eq!(store.get_int("Snake", 0), 40);
        assert_eq!(store.get_int("Tetris", 7), 7);
    }

    #[test]
    fn memory_store_logs_writes() {
        let mut store = MemoryScoreStore::new();
        store.put_int("Tetris", 10).unwrap();
        store.put_int("Tetris", 20).unwrap();
        assert_eq!(store.get_int("Tetris", 0), 20);
        assert_eq!(
            store.writes(),
            &[("Tetris".to_string(), 10), ("Tetris".to_string(), 20)]
        );
    }

    #[test]
    fn recording_pacer_clones_share_log() {
        let pacer = RecordingPacer::new();
        let mut handle = pacer.clone();
        handle.pause(Duration::from_millis(5));
        handle.pause(Duration::from_millis(5));
        assert_eq!(pacer.delays().len(), 2);
        assert_eq!(pacer.total(), Duration::from_millis(10));
    }

    #[test]
    fn thread_pacer_returns_at_once_for_zero_delay() {
        let start = std::time::Instant::now();
        let mut pacer = ThreadPacer;
        for _ in 0..10_000 {
            pacer.pause(Duration::ZERO);
        }
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn map_source_reports_missing_resource() {
        let mut source: HashMap<String, Vec<FieldSnapshot>> = HashMap::new();
        source.insert("attract".to_string(), vec![FieldSnapshot::empty()]);
        assert_eq!(source.read("attract").unwrap().len(), 1);
        let err = source.read("missing").unwrap_err();
        assert!(err.to_string().contains("missing"));
    }
}
