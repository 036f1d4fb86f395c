use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the Tile Quest engines.
///
/// Gameplay operations never produce these: an illegal action is reported as
/// an [`ActionOutcome::Rejected`](crate::encounter::ActionOutcome) value. Only
/// the I/O edges (config and save files) are fallible.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Save data error: {0}")]
    SaveData(#[from] SaveDataError),
}

/// Errors related to loading a [`GameConfig`](crate::config::GameConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Errors related to reading or writing a save file
#[derive(Debug, Error)]
pub enum SaveDataError {
    #[error("could not access save file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed save data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Type alias for Results using SaveDataError
pub type SaveDataResult<T> = Result<T, SaveDataError>;
