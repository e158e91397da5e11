//! Sound effects for the brick game surface.
//!
//! Playback is fire-and-forget: [`SoundPlayer::play`] returns as soon as the
//! sound has started. "Nothing is playing" is an ordinary state, so
//! [`SoundPlayer::stop`] without an earlier `play` simply reports `false`.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};

use anyhow::{Context, Result};

pub trait SoundPlayer {
    /// Start playing `path`, replacing whatever was playing before.
    fn play(&mut self, path: &Path) -> Result<()>;

    /// Stop the active sound. Returns `false` when nothing was active.
    fn stop(&mut self) -> Result<bool>;

    fn is_active(&mut self) -> bool;
}

#[cfg(target_os = "macos")]
pub const DEFAULT_PLAYER_COMMAND: &str = "afplay";

#[cfg(not(target_os = "macos"))]
pub const DEFAULT_PLAYER_COMMAND: &str = "aplay";

/// Plays sounds by spawning an external command line player.
#[derive(Debug)]
pub struct ProcessSoundPlayer {
    command: String,
    args: Vec<String>,
    active: Option<Child>,
}

impl Default for ProcessSoundPlayer {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_COMMAND)
    }
}

impl ProcessSoundPlayer {
    /// `command` may carry leading arguments, e.g. `"aplay -q"`.
    pub fn new(command: &str) -> Self {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .unwrap_or_else(|| DEFAULT_PLAYER_COMMAND.to_string());
        Self {
            command: program,
            args: parts.collect(),
            active: None,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl SoundPlayer for ProcessSoundPlayer {
    fn play(&mut self, path: &Path) -> Result<()> {
        self.stop()?;
        let child = Command::new(&self.command)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| {
                format!("failed to start '{}' for {}", self.command, path.display())
            })?;
        log::debug!("playing {} (pid {})", path.display(), child.id());
        self.active = Some(child);
        Ok(())
    }

    fn stop(&mut self) -> Result<bool> {
        let Some(mut child) = self.active.take() else {
            return Ok(false);
        };
        let status = child.try_wait();
        terminate(&mut child, status)?;
        Ok(true)
    }

    fn is_active(&mut self) -> bool {
        match self.active.as_mut().map(Child::try_wait) {
            Some(Ok(None)) => true,
            Some(_) => {
                self.active = None;
                false
            }
            None => false,
        }
    }
}

/// Kill and reap `child` unless `status` says it already exited.
///
/// A failed status poll still kills the process before the error is returned.
fn terminate(child: &mut Child, status: io::Result<Option<ExitStatus>>) -> Result<()> {
    let poll_err = match status {
        Ok(Some(_)) => return Ok(()),
        Ok(None) => None,
        Err(e) => Some(e),
    };
    if let Err(e) = child.kill() {
        log::warn!("sound process {} did not stop: {e}", child.id());
    }
    child.wait().context("failed to reap sound process")?;
    match poll_err {
        Some(e) => Err(e).context("failed to poll sound process"),
        None => Ok(()),
    }
}

impl Drop for ProcessSoundPlayer {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

/// Player that accepts every request and makes no noise.
///
/// It still tracks the last requested sound so hosts see consistent
/// `is_active`/`stop` answers when sound is disabled.
#[derive(Debug, Default, Clone)]
pub struct SilentSoundPlayer {
    current: Option<PathBuf>,
    played: Vec<PathBuf>,
}

impl SilentSoundPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    /// Every path passed to `play`, in order.
    pub fn played(&self) -> &[PathBuf] {
        &self.played
    }
}

impl SoundPlayer for SilentSoundPlayer {
    fn play(&mut self, path: &Path) -> Result<()> {
        self.current = Some(path.to_path_buf());
        self.played.push(path.to_path_buf());
        Ok(())
    }

    fn stop(&mut self) -> Result<bool> {
        Ok(self.current.take().is_some())
    }

    fn is_active(&mut self) -> bool {
        self.current.is_some()
    }
}
