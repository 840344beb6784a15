use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Config write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Carries the OS diagnostic verbatim.
    #[error("{0}")]
    SpawnFailure(String),

    #[error("Invalid launcher table: {0}")]
    InvalidLauncherTable(String),

    #[error("Profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("{0}")]
    Profile(String),
}

pub type Result<T> = std::result::Result<T, FolderError>;
