use thiserror::Error;

use crate::alchemy::recipe::RecipeLoadError;

#[derive(Error, Debug)]
pub enum BrewError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Recipe error: {0}")]
    RecipeError(#[from] RecipeLoadError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BrewError>;
