//! Potion recipes - define which ingredients a brew needs
//!
//! A recipe lists required ingredient names. Repeated names count as a
//! single slot: a cauldron only ever needs one element per distinct name.

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

/// A potion recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    name: String,
    required_ingredient_names: Vec<String>,
}

impl Recipe {
    pub fn new<I, S>(name: impl Into<String>, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            required_ingredient_names: ingredients.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Required ingredient names as written, repeats included
    pub fn required_ingredient_names(&self) -> &[String] {
        &self.required_ingredient_names
    }

    /// Required ingredient names with repeats collapsed, first occurrence wins
    pub fn distinct_ingredient_names(&self) -> Vec<&str> {
        let mut seen = AHashSet::new();
        self.required_ingredient_names
            .iter()
            .map(String::as_str)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    pub fn requires(&self, ingredient: &str) -> bool {
        self.required_ingredient_names.iter().any(|n| n == ingredient)
    }
}

/// Catalog of all known recipes, keyed by id
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<(String, Recipe)>,
    index: AHashMap<String, usize>,
}

impl RecipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in recipes used when no catalog file is available
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();

        catalog.add("healing", Recipe::new("Healing Draught", ["herb", "water"]));
        catalog.add(
            "strength",
            Recipe::new("Potion of Strength", ["root", "iron dust", "water"]),
        );
        catalog.add(
            "night_sight",
            Recipe::new("Night Sight Elixir", ["owl feather", "moonpetal", "herb"]),
        );

        catalog
    }

    /// Add a recipe, replacing any recipe already registered under `id`
    pub fn add(&mut self, id: impl Into<String>, recipe: Recipe) {
        let id = id.into();
        match self.index.get(&id) {
            Some(&i) => self.recipes[i].1 = recipe,
            None => {
                self.index.insert(id.clone(), self.recipes.len());
                self.recipes.push((id, recipe));
            }
        }
    }

    /// Get a recipe by id
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.index.get(id).map(|&i| &self.recipes[i].1)
    }

    /// All recipes with their ids, in registration order
    pub fn all(&self) -> impl Iterator<Item = (&str, &Recipe)> {
        self.recipes.iter().map(|(id, r)| (id.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Load recipes from a TOML file
    pub fn load_from_toml(path: &std::path::Path) -> Result<Self, RecipeLoadError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RecipeLoadError::IoError(e.to_string()))?;
        Self::parse_toml(&content)
    }

    /// Parse recipes from TOML string
    pub fn parse_toml(content: &str) -> Result<Self, RecipeLoadError> {
        let toml_data: TomlRecipes = toml::from_str(content)
            .map_err(|e| RecipeLoadError::ParseError(e.to_string()))?;

        let mut catalog = Self::new();
        for recipe in toml_data.recipes {
            if catalog.get(&recipe.id).is_some() {
                return Err(RecipeLoadError::DuplicateId(recipe.id));
            }
            let (id, recipe) = recipe.into_recipe()?;
            catalog.add(id, recipe);
        }
        Ok(catalog)
    }
}

/// Error type for recipe loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeLoadError {
    IoError(String),
    ParseError(String),
    EmptyRecipe(String),
    DuplicateId(String),
}

impl std::fmt::Display for RecipeLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecipeLoadError::IoError(e) => write!(f, "IO error: {}", e),
            RecipeLoadError::ParseError(e) => write!(f, "Parse error: {}", e),
            RecipeLoadError::EmptyRecipe(id) => write!(f, "Recipe {} has no ingredients", id),
            RecipeLoadError::DuplicateId(id) => write!(f, "Duplicate recipe id: {}", id),
        }
    }
}

impl std::error::Error for RecipeLoadError {}

/// TOML representation of recipes file
#[derive(Debug, Deserialize)]
struct TomlRecipes {
    recipes: Vec<TomlRecipe>,
}

/// TOML representation of a single recipe
#[derive(Debug, Deserialize)]
struct TomlRecipe {
    id: String,
    name: String,
    ingredients: Vec<String>,
}

impl TomlRecipe {
    fn into_recipe(self) -> Result<(String, Recipe), RecipeLoadError> {
        let ingredients: Vec<String> = self
            .ingredients
            .into_iter()
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .collect();

        if ingredients.is_empty() {
            return Err(RecipeLoadError::EmptyRecipe(self.id));
        }

        Ok((self.id, Recipe::new(self.name, ingredients)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_distinct_ingredients() {
        let recipe = Recipe::new("Double Brew", ["herb", "water", "herb", "root"]);

        assert_eq!(recipe.required_ingredient_names().len(), 4);
        assert_eq!(recipe.distinct_ingredient_names(), vec!["herb", "water", "root"]);
        assert!(recipe.requires("root"));
        assert!(!recipe.requires("salt"));
    }

    #[test]
    fn test_recipe_catalog_defaults() {
        let catalog = RecipeCatalog::with_defaults();

        let healing = catalog.get("healing").expect("Should have healing");
        assert_eq!(healing.name(), "Healing Draught");
        assert_eq!(healing.required_ingredient_names(), &["herb", "water"]);

        assert!(catalog.get("strength").is_some());
        assert!(catalog.get("nonexistent_recipe").is_none());
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_recipe_catalog_add_replaces() {
        let mut catalog = RecipeCatalog::new();
        assert!(catalog.is_empty());

        catalog.add("tea", Recipe::new("Tea", ["leaf"]));
        catalog.add("tea", Recipe::new("Strong Tea", ["leaf", "leaf"]));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("tea").map(Recipe::name), Some("Strong Tea"));
    }

    #[test]
    fn test_recipe_catalog_keeps_registration_order() {
        let catalog = RecipeCatalog::with_defaults();
        let ids: Vec<_> = catalog.all().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["healing", "strength", "night_sight"]);
    }

    #[test]
    fn test_recipe_toml_parsing() {
        let toml_content = r#"
[[recipes]]
id = "healing"
name = "Healing Draught"
ingredients = ["herb", "water"]

[[recipes]]
id = "fire_resist"
name = "Fire Resistance"
ingredients = ["salamander scale", " ash ", "water"]
"#;

        let catalog = RecipeCatalog::parse_toml(toml_content).expect("Failed to parse TOML");

        let healing = catalog.get("healing").expect("Should have healing");
        assert_eq!(healing.required_ingredient_names(), &["herb", "water"]);

        let fire = catalog.get("fire_resist").expect("Should have fire_resist");
        assert_eq!(fire.name(), "Fire Resistance");
        assert_eq!(fire.required_ingredient_names()[1], "ash");
    }

    #[test]
    fn test_recipe_toml_empty_ingredients() {
        let toml_content = r#"
[[recipes]]
id = "nothing"
name = "Nothing"
ingredients = ["  "]
"#;

        let result = RecipeCatalog::parse_toml(toml_content);
        match result.unwrap_err() {
            RecipeLoadError::EmptyRecipe(id) => assert_eq!(id, "nothing"),
            other => panic!("Expected EmptyRecipe error, got {:?}", other),
        }
    }

    #[test]
    fn test_recipe_toml_duplicate_id() {
        let toml_content = r#"
[[recipes]]
id = "tea"
name = "Tea"
ingredients = ["leaf"]

[[recipes]]
id = "tea"
name = "Other Tea"
ingredients = ["leaf"]
"#;

        let result = RecipeCatalog::parse_toml(toml_content);
        assert_eq!(result.unwrap_err(), RecipeLoadError::DuplicateId("tea".into()));
    }

    #[test]
    fn test_recipe_toml_missing_field() {
        let result = RecipeCatalog::parse_toml("[[recipes]]\nid = \"x\"\n");
        assert!(matches!(result, Err(RecipeLoadError::ParseError(_))));
    }

    #[test]
    fn test_load_recipes_from_file() {
        use std::path::Path;

        let path = Path::new("data/recipes.toml");
        let catalog = RecipeCatalog::load_from_toml(path)
            .expect("Should load recipes from data/recipes.toml");

        assert!(catalog.get("healing").is_some(), "Should have healing recipe");
        assert!(catalog.get("strength").is_some(), "Should have strength recipe");
        assert!(catalog.get("night_sight").is_some(), "Should have night_sight recipe");
        assert!(catalog.get("fire_resist").is_some(), "Should have fire_resist recipe");
    }
}
