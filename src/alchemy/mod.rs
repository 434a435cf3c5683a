//! Alchemy layer - recipes, the brewing cauldron, and the potions it yields

pub mod cauldron;
pub mod potion;
pub mod recipe;

pub use cauldron::{Cauldron, CauldronError};
pub use potion::Potion;
pub use recipe::{Recipe, RecipeCatalog, RecipeLoadError};
