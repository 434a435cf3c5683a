//! Failure kinds reported by character operations
//!
//! The `Display` text of each variant is the message shown to the player.

use thiserror::Error;

use crate::alchemy::cauldron::CauldronError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CharacterError {
    #[error("Inappropriate bag")]
    InappropriateBag,

    #[error("No item to add to the bag")]
    NothingToStow,

    #[error("No {0} available")]
    ItemNotFound(String),

    #[error("Missing {count} ingredients for {recipe}")]
    MissingIngredients { count: usize, recipe: String },

    #[error("No room in the bag for {0}")]
    NoRoomForIngredient(String),

    #[error("No cauldron available")]
    NoCauldron,

    #[error(transparent)]
    Cauldron(#[from] CauldronError),
}
