use std::path::PathBuf;

/// A column selection the rules do not allow. Always recoverable: the caller
/// picks another column and tries again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("column {0} is out of range (expected 0-6)")]
    OutOfRange(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Errors returned by the turn operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid move: {0}")]
    Invalid(#[from] InvalidMove),

    #[error("the game is over")]
    GameOver,
}

/// Errors that can occur while playing on the console.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("input closed before the game finished")]
    InputClosed,

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
