use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmberError {
    #[error("Actor not found: {0:?}")]
    ActorNotFound(crate::core::types::ActorId),

    #[error("Invalid ruleset configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Ruleset parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, EmberError>;
