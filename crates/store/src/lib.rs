//! Persistence gateway: two plain-text integers.
//!
//! The gold balance and the high score each live in their own file holding a
//! single decimal number. Loads parse the leading integer and default to 0
//! on a missing or unreadable file; saves are best-effort atomic replaces
//! whose failures are logged and swallowed. The simulation core never
//! touches the filesystem; callers load once at startup and save once at
//! shutdown (high score: once per game over).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::warn;

pub struct Store {
    gold_path: PathBuf,
    high_score_path: PathBuf,
}

impl Store {
    /// Open the store in the platform data directory.
    pub fn open() -> Result<Self> {
        let proj = ProjectDirs::from("com", "tui-tower", "TuiTower")
            .context("could not resolve project directories")?;
        let dir = proj.data_local_dir().to_path_buf();
        fs::create_dir_all(&dir).ok();
        Ok(Self::at(dir))
    }

    /// Open the store in an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            gold_path: dir.join("gold.txt"),
            high_score_path: dir.join("highscore.txt"),
        }
    }

    pub fn load_gold(&self) -> u32 {
        load_int(&self.gold_path)
    }

    pub fn save_gold(&self, gold: u32) {
        if let Err(err) = write_int(&self.gold_path, gold) {
            warn!("failed to save gold to {}: {err:#}", self.gold_path.display());
        }
    }

    pub fn load_high_score(&self) -> u32 {
        load_int(&self.high_score_path)
    }

    /// Overwrite the stored high score only when `score` beats it.
    pub fn update_high_score(&self, score: u32) {
        if score <= self.load_high_score() {
            return;
        }
        if let Err(err) = write_int(&self.high_score_path, score) {
            warn!(
                "failed to save high score to {}: {err:#}",
                self.high_score_path.display()
            );
        }
    }
}

/// Parse the leading decimal integer of the file, defaulting to 0.
fn load_int(path: &Path) -> u32 {
    let Ok(text) = fs::read_to_string(path) else {
        return 0;
    };
    let trimmed = text.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse().unwrap_or(0)
}

fn write_int(path: &Path, value: u32) -> Result<()> {
    let tmp = path.with_extension("txt.tmp");
    fs::write(&tmp, value.to_string())?;
    atomic_rename(&tmp, path)?;
    Ok(())
}

fn atomic_rename(from: &Path, to: &Path) -> Result<()> {
    // Best-effort atomic replace on same filesystem.
    if to.exists() {
        let _ = fs::remove_file(to);
    }
    fs::rename(from, to)?;
    Ok(())
}
