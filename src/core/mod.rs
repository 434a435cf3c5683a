pub mod config;
pub mod error;
pub mod types;

pub use config::GameConfig;
pub use error::{BrewError, Result};
pub use types::{CharacterId, Health, Weight};
