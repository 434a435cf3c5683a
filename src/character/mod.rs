//! Character - mediates between held item, bag, and cauldron
//!
//! The character exclusively owns its bag, cauldron, and held item. An
//! element is only ever in one of those places at a time.

pub mod error;

pub use error::CharacterError;

use crate::alchemy::{Cauldron, Potion, Recipe};
use crate::core::config::GameConfig;
use crate::core::types::{CharacterId, Health, Weight};
use crate::inventory::{Bag, BagError, Element};

#[derive(Debug, Clone)]
pub struct Character {
    id: CharacterId,
    name: String,
    current_health: Health,
    max_health: Health,
    max_bag_capacity: Weight,
    held_item: Option<Element>,
    bag: Option<Bag>,
    cauldron: Option<Cauldron>,
}

impl Character {
    /// Create a character at full health with empty hands, no bag, and no cauldron
    pub fn new(name: impl Into<String>, max_health: Health, max_bag_capacity: Weight) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            current_health: max_health,
            max_health,
            max_bag_capacity,
            held_item: None,
            bag: None,
            cauldron: None,
        }
    }

    /// Create a character with the starting equipment described by `config`
    pub fn from_config(config: &GameConfig) -> Self {
        let mut character = Self::new(
            config.character_name.clone(),
            config.max_health,
            config.max_bag_capacity,
        );
        if let Some(capacity) = config.starting_bag_capacity {
            if let Err(e) = character.set_bag(Bag::new(capacity)) {
                tracing::warn!("Starting bag of capacity {} refused: {}", capacity, e);
            }
        }
        if config.starting_cauldron {
            character.set_cauldron(Cauldron::new());
        }
        character
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn current_health(&self) -> Health {
        self.current_health
    }

    /// Set current health, clamped to the character's maximum
    pub fn set_health(&mut self, health: Health) {
        self.current_health = health.min(self.max_health);
    }

    pub fn reset_health(&mut self) {
        self.current_health = self.max_health;
    }

    pub fn max_health(&self) -> Health {
        self.max_health
    }

    pub fn max_bag_capacity(&self) -> Weight {
        self.max_bag_capacity
    }

    pub fn held_item(&self) -> Option<&Element> {
        self.held_item.as_ref()
    }

    /// Replace the held item directly, skipping the bag rules
    ///
    /// Returns whatever was held before.
    pub fn set_held_item(&mut self, item: Option<Element>) -> Option<Element> {
        std::mem::replace(&mut self.held_item, item)
    }

    pub fn bag(&self) -> Option<&Bag> {
        self.bag.as_ref()
    }

    pub fn bag_mut(&mut self) -> Option<&mut Bag> {
        self.bag.as_mut()
    }

    /// Swap in a new bag, moving everything from the current one
    ///
    /// The new bag must fit the character's carrying limit and, when a bag
    /// is already carried, be strictly larger than it. A rejected swap
    /// leaves the current bag and its contents untouched.
    pub fn set_bag(&mut self, mut bag: Bag) -> Result<(), CharacterError> {
        if bag.max_weight_capacity() > self.max_bag_capacity {
            tracing::debug!(
                "{} rejected bag of capacity {} (limit {})",
                self.name,
                bag.max_weight_capacity(),
                self.max_bag_capacity
            );
            return Err(CharacterError::InappropriateBag);
        }

        if let Some(current) = self.bag.as_mut() {
            if bag.max_weight_capacity() <= current.max_weight_capacity() {
                tracing::debug!(
                    "{} rejected bag of capacity {} (current {})",
                    self.name,
                    bag.max_weight_capacity(),
                    current.max_weight_capacity()
                );
                return Err(CharacterError::InappropriateBag);
            }
            let moved = current.len();
            bag.absorb(current).map_err(|e| {
                tracing::debug!("{} could not transfer bag contents: {}", self.name, e);
                CharacterError::InappropriateBag
            })?;
            tracing::debug!("{} moved {} elements into the new bag", self.name, moved);
        }

        self.bag = Some(bag);
        Ok(())
    }

    /// Put the held item into the bag
    ///
    /// Requires a held item, a bag, and room for the item. Any unmet
    /// condition reports `NothingToStow` without changing anything.
    pub fn stow_held_item(&mut self) -> Result<(), CharacterError> {
        let (Some(bag), Some(item)) = (self.bag.as_mut(), self.held_item.as_ref()) else {
            return Err(CharacterError::NothingToStow);
        };
        if let Err(e) = bag.check_fits(item) {
            tracing::debug!("{} cannot stow: {}", self.name, e);
            return Err(CharacterError::NothingToStow);
        }

        let Some(item) = self.held_item.take() else {
            return Err(CharacterError::NothingToStow);
        };
        bag.add_element(item).map_err(|_| CharacterError::NothingToStow)
    }

    /// Take the named element out of the bag and hold it
    ///
    /// Whatever was held before is discarded, not stowed.
    pub fn take_item(&mut self, name: &str) -> Result<(), CharacterError> {
        let element = self
            .bag
            .as_mut()
            .and_then(|bag| bag.remove_element_by_name(name))
            .ok_or_else(|| CharacterError::ItemNotFound(name.to_string()))?;

        if let Some(dropped) = self.held_item.replace(element) {
            tracing::debug!("{} dropped {} to take {}", self.name, dropped.name(), name);
        }
        Ok(())
    }

    pub fn cauldron(&self) -> Option<&Cauldron> {
        self.cauldron.as_ref()
    }

    pub fn cauldron_mut(&mut self) -> Option<&mut Cauldron> {
        self.cauldron.as_mut()
    }

    /// Assign a cauldron, discarding any previous one and its contents
    pub fn set_cauldron(&mut self, cauldron: Cauldron) {
        self.cauldron = Some(cauldron);
    }

    /// Brew `recipe`, pulling missing ingredients out of the bag
    ///
    /// Ingredients found are moved into the cauldron even when others are
    /// missing, so a later attempt with the same recipe needs fewer. The
    /// potion is only brewed once nothing is missing.
    ///
    /// Switching recipes returns the cauldron's unused ingredients to the
    /// bag. If the bag can't take all of them the attempt is refused with
    /// `NoRoomForIngredient` and nothing changes.
    pub fn craft_potion(&mut self, recipe: &Recipe) -> Result<Potion, CharacterError> {
        let cauldron = self.cauldron.as_mut().ok_or(CharacterError::NoCauldron)?;

        // Ingredients the new recipe doesn't use go back to the bag, so they
        // must all fit before anything changes.
        if let Some(first) = cauldron.unused_by(recipe).next() {
            let Some(bag) = self.bag.as_ref() else {
                return Err(CharacterError::NoRoomForIngredient(first.name().to_string()));
            };
            if let Err(e) = bag.check_fits_all(cauldron.unused_by(recipe)) {
                tracing::debug!("{} cannot switch to {}: {}", self.name, recipe.name(), e);
                let name = match e {
                    BagError::InsufficientCapacity { name, .. } => name,
                    BagError::DuplicateElement(name) => name,
                };
                return Err(CharacterError::NoRoomForIngredient(name));
            }
        }

        let evicted = cauldron.assign_recipe(recipe.clone());
        if let Some(bag) = self.bag.as_mut() {
            for element in evicted {
                let name = element.name().to_string();
                bag.add_element(element)
                    .map_err(|_| CharacterError::NoRoomForIngredient(name))?;
            }
        }

        let mut shortfall = 0;
        for name in cauldron.missing_ingredient_names() {
            match self
                .bag
                .as_mut()
                .and_then(|bag| bag.remove_element_by_name(&name))
            {
                Some(element) => cauldron.add_ingredient(element)?,
                None => shortfall += 1,
            }
        }

        if shortfall > 0 {
            tracing::debug!(
                "{} is missing {} ingredients for {}",
                self.name,
                shortfall,
                recipe.name()
            );
            return Err(CharacterError::MissingIngredients {
                count: shortfall,
                recipe: recipe.name().to_string(),
            });
        }

        let potion = cauldron.finalize_craft()?;
        tracing::info!("{} brewed {}", self.name, potion.name);
        Ok(potion)
    }
}
