//! File persistence under ~/.flapper/: the high score and the config file.

use crate::core::config::GameConfig;
use crate::core::constants::{CONFIG_FILE_NAME, DATA_DIR_NAME, SCORE_FILE_NAME};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.flapper/ directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.flapper/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}

/// Durable storage for a single best score.
pub trait ScoreStore {
    fn load(&self) -> io::Result<u32>;
    fn save(&mut self, score: u32) -> io::Result<()>;
}

/// High score kept as ASCII decimal text in a file.
#[derive(Debug, Clone)]
pub struct ScoreFile {
    path: PathBuf,
}

impl ScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// ~/.flapper/score.txt
    pub fn default_location() -> io::Result<Self> {
        Ok(Self::new(data_path(SCORE_FILE_NAME)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for ScoreFile {
    /// Reads the first line. Anything but plain digits counts as no score.
    fn load(&self) -> io::Result<u32> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(parse_score(&contents))
    }

    /// Overwrites the file with the score.
    fn save(&mut self, score: u32) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, score.to_string())
    }
}

/// Score store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    pub score: Option<u32>,
    /// Number of successful `save` calls.
    pub saves: u32,
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> io::Result<u32> {
        self.score
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no score saved"))
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        self.score = Some(score);
        self.saves += 1;
        Ok(())
    }
}

fn parse_score(contents: &str) -> u32 {
    let line = contents.lines().next().unwrap_or("").trim();
    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    line.parse().unwrap_or(0)
}

/// Load the stored high score, treating any failure as "no prior score".
pub fn load_high_score<S: ScoreStore>(store: &S) -> u32 {
    match store.load() {
        Ok(score) => {
            log::info!("Loaded high score {}", score);
            score
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("No high score saved yet, starting from 0");
            0
        }
        Err(e) => {
            log::warn!("Could not read high score ({}), starting from 0", e);
            0
        }
    }
}

/// ~/.flapper/config.json
pub fn default_config_path() -> io::Result<PathBuf> {
    data_path(CONFIG_FILE_NAME)
}

/// Load a JSON config, returning defaults if the file is missing or invalid.
/// The result is not validated here.
pub fn load_config(path: &Path) -> GameConfig {
    match fs::read_to_string(path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring invalid config {}: {}", path.display(), e);
                GameConfig::default()
            }
        },
        Err(_) => {
            log::info!("No config at {}, using defaults", path.display());
            GameConfig::default()
        }
    }
}

/// Save a config as pretty-printed JSON.
pub fn save_config(path: &Path, config: &GameConfig) -> io::Result<()> {
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}
