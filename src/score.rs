use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

const APP_DIR_NAME: &str = "grid-snake";
const SCORE_FILE_NAME: &str = "scores.json";

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// Loads the high score stored at `path`.
///
/// Returns `Ok(0)` when the file does not yet exist (first run) and `Err`
/// when it exists but cannot be read or parsed.
pub fn load_high_score_from_path(path: &Path) -> Result<u32, AppError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e.into()),
    };

    serde_json::from_str::<ScoreFile>(&raw)
        .map(|file| file.high_score)
        .map_err(|source| AppError::ScoreFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Saves the high score to `path`, creating parent directories when needed.
pub fn save_high_score_to_path(path: &Path, score: u32) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = ScoreFile { high_score: score };
    let json = serde_json::to_string_pretty(&payload).map_err(|source| AppError::ScoreFile {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, json)?;
    Ok(())
}

/// Persisted best score, read once and written only when beaten.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
    stored: u32,
}

impl HighScoreStore {
    /// Reads the stored value from `path`.
    pub fn open(path: PathBuf) -> Result<Self, AppError> {
        let stored = load_high_score_from_path(&path)?;
        info!("loaded high score {stored} from {}", path.display());
        Ok(Self { path, stored })
    }

    /// Store that starts from zero, used when the file is unreadable.
    #[must_use]
    pub fn empty(path: PathBuf) -> Self {
        Self { path, stored: 0 }
    }

    #[must_use]
    pub fn stored(&self) -> u32 {
        self.stored
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `score` if it beats the stored value. Returns whether it did.
    pub fn record(&mut self, score: u32) -> Result<bool, AppError> {
        if score <= self.stored {
            return Ok(false);
        }

        save_high_score_to_path(&self.path, score)?;
        self.stored = score;
        Ok(true)
    }
}
