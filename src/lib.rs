//! Brewcraft - Character Inventory and Potion Brewing Core

pub mod alchemy;
pub mod character;
pub mod core;
pub mod inventory;
