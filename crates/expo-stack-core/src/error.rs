//! Error taxonomy for option resolution
//!
//! Validation failures are fatal and reported before any file is written.
//! `UserCancelled` is not a failure; callers exit cleanly on it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Contradictory flags, e.g. a layout option without a navigation package
    #[error("--{flag} requires a navigation package; pass --react-navigation or --expo-router")]
    InvalidOptionCombination { flag: &'static str },

    /// Import alias string missing the required `/*` suffix
    #[error("import alias `{0}` must end in `/*`, for example `@/*` or `~/*`")]
    InvalidImportAlias(String),

    /// Target directory already exists and no overwrite was requested
    #[error("a directory named `{0}` already exists; pass --overwrite to replace it")]
    ProjectNameAlreadyExists(String),

    /// The user backed out of an interactive prompt
    #[error("cancelled")]
    UserCancelled,

    /// Prompt or terminal I/O failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
