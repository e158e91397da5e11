//! Text splash resources.
//!
//! A `.splash` file is a list of frames separated by blank lines. Each frame is
//! exactly 20 rows of 10 characters; `.`, `0` and space are empty cells, any
//! other glyph is filled. Lines starting with `;` are comments.
//!
//! ```text
//! ; two frame blink
//! ##########
//! #........#
//! ...
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::field::FieldSnapshot;
use crate::ports::SplashSource;
use crate::types::{FIELD_HEIGHT, FIELD_WIDTH};

pub const SPLASH_EXTENSION: &str = "splash";

/// Loads splash frames from `.splash` files under a root directory.
#[derive(Debug, Clone)]
pub struct TextSplashSource {
    root: PathBuf,
}

impl TextSplashSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `attract` → `<root>/attract.splash`; names with an extension or an
    /// absolute path are used as given (relative ones still under `root`).
    pub fn resolve(&self, name: &str) -> PathBuf {
        let path = Path::new(name);
        if path.is_absolute() {
            return path.to_path_buf();
        }
        let joined = self.root.join(path);
        if path.extension().is_some() {
            joined
        } else {
            joined.with_extension(SPLASH_EXTENSION)
        }
    }
}

impl SplashSource for TextSplashSource {
    fn read(&self, name: &str) -> Result<Vec<FieldSnapshot>> {
        let path = self.resolve(name);
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read splash resource {}", path.display()))?;
        let frames = parse_frames(&text)
            .with_context(|| format!("malformed splash resource {}", path.display()))?;
        log::debug!("loaded {} splash frames from {}", frames.len(), path.display());
        Ok(frames)
    }
}

/// Parse the text form into frames.
pub fn parse_frames(text: &str) -> Result<Vec<FieldSnapshot>> {
    let mut frames = Vec::new();
    let mut rows: Vec<(usize, &str)> = Vec::with_capacity(FIELD_HEIGHT as usize);

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if line.starts_with(';') {
            continue;
        }
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            if !rows.is_empty() {
                frames.push(build_frame(&rows)?);
                rows.clear();
            }
            continue;
        }
        rows.push((line_no, line));
    }
    if !rows.is_empty() {
        frames.push(build_frame(&rows)?);
    }

    Ok(frames)
}

fn build_frame(rows: &[(usize, &str)]) -> Result<FieldSnapshot> {
    if rows.len() != FIELD_HEIGHT as usize {
        bail!(
            "frame starting at line {} has {} rows, expected {}",
            rows[0].0,
            rows.len(),
            FIELD_HEIGHT
        );
    }

    let mut cells = [[0u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize];
    for (row, &(line_no, line)) in rows.iter().enumerate() {
        let width = line.chars().count();
        if width != FIELD_WIDTH as usize {
            bail!("line {line_no} has {width} cells, expected {FIELD_WIDTH}");
        }
        for (column, ch) in line.chars().enumerate() {
            cells[row][column] = u8::from(!matches!(ch, '.' | '0' | ' '));
        }
    }
    Ok(FieldSnapshot::from_rows(cells))
}
