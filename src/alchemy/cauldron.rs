//! Cauldron - collects ingredients for the assigned recipe
//!
//! Every collected ingredient is required by the assigned recipe, one per
//! distinct name. Progress survives failed brewing attempts so ingredients
//! can be gathered incrementally.

use thiserror::Error;

use crate::alchemy::potion::Potion;
use crate::alchemy::recipe::Recipe;
use crate::inventory::element::Element;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CauldronError {
    #[error("No recipe assigned to the cauldron")]
    NoRecipe,

    #[error("{0} is not an ingredient of the current recipe")]
    NotRequired(String),

    #[error("{0} has already been added")]
    AlreadyCollected(String),

    #[error("{recipe} still needs {}", .missing.join(", "))]
    Incomplete { recipe: String, missing: Vec<String> },
}

#[derive(Debug, Clone, Default)]
pub struct Cauldron {
    recipe: Option<Recipe>,
    ingredients: Vec<Element>,
    brewed: u32,
}

impl Cauldron {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assigned_recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    pub fn collected_ingredients(&self) -> &[Element] {
        &self.ingredients
    }

    /// Number of potions this cauldron has finished
    pub fn brewed_count(&self) -> u32 {
        self.brewed
    }

    /// Assign a recipe, returning collected ingredients it does not use
    ///
    /// Ingredients the new recipe still requires stay in the cauldron.
    pub fn assign_recipe(&mut self, recipe: Recipe) -> Vec<Element> {
        let (kept, evicted): (Vec<_>, Vec<_>) = std::mem::take(&mut self.ingredients)
            .into_iter()
            .partition(|e| recipe.requires(e.name()));
        self.ingredients = kept;
        self.recipe = Some(recipe);
        evicted
    }

    /// Collected ingredients that `recipe` would evict if assigned
    pub fn unused_by<'a>(&'a self, recipe: &'a Recipe) -> impl Iterator<Item = &'a Element> {
        self.ingredients.iter().filter(|e| !recipe.requires(e.name()))
    }

    /// Distinct required names with no collected ingredient, in recipe order
    pub fn missing_ingredient_names(&self) -> Vec<String> {
        let Some(recipe) = &self.recipe else {
            return Vec::new();
        };
        recipe
            .distinct_ingredient_names()
            .into_iter()
            .filter(|name| !self.has_ingredient(name))
            .map(str::to_string)
            .collect()
    }

    pub fn add_ingredient(&mut self, element: Element) -> Result<(), CauldronError> {
        let recipe = self.recipe.as_ref().ok_or(CauldronError::NoRecipe)?;
        if !recipe.requires(element.name()) {
            return Err(CauldronError::NotRequired(element.name().to_string()));
        }
        if self.has_ingredient(element.name()) {
            return Err(CauldronError::AlreadyCollected(element.name().to_string()));
        }
        self.ingredients.push(element);
        Ok(())
    }

    /// Brew the assigned recipe, consuming its ingredients
    ///
    /// On success the cauldron is left empty with no recipe.
    pub fn finalize_craft(&mut self) -> Result<Potion, CauldronError> {
        let recipe = self.recipe.as_ref().ok_or(CauldronError::NoRecipe)?;
        let missing = self.missing_ingredient_names();
        if !missing.is_empty() {
            return Err(CauldronError::Incomplete {
                recipe: recipe.name().to_string(),
                missing,
            });
        }

        let potion = Potion {
            name: recipe.name().to_string(),
            ingredients: self
                .ingredients
                .drain(..)
                .map(|e| e.name().to_string())
                .collect(),
        };
        self.recipe = None;
        self.brewed += 1;
        Ok(potion)
    }

    fn has_ingredient(&self, name: &str) -> bool {
        self.ingredients.iter().any(|e| e.name() == name)
    }
}
