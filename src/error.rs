use std::path::PathBuf;
use thiserror::Error;

/// Failures at the edges of the program: reading a school config or parsing
/// a duty name. Performing a duty itself can never fail.
#[derive(Error, Debug)]
pub enum SchoolError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unknown duty '{0}' (expected teaching, correcting or yoga)")]
    UnknownDuty(String),

    #[error("Duty plan is empty: list at least one duty")]
    EmptyPlan,
}

pub type Result<T> = std::result::Result<T, SchoolError>;
