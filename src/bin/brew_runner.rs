//! Headless Brew Runner
//!
//! Fills a bag with the given ingredients, then repeatedly tries to brew one
//! recipe and reports every attempt as JSON or text.

use std::path::PathBuf;

use brewcraft::alchemy::RecipeCatalog;
use brewcraft::character::Character;
use brewcraft::core::error::{BrewError, Result};
use brewcraft::core::types::Weight;
use brewcraft::inventory::{Bag, Element};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Headless Brew Runner - scripted crafting attempts
#[derive(Parser, Debug)]
#[command(name = "brew_runner")]
#[command(about = "Run crafting attempts for one recipe and report the outcomes")]
struct Args {
    /// Recipe id to brew
    #[arg(long)]
    recipe: String,

    /// Recipe catalog file
    #[arg(long, default_value = "data/recipes.toml")]
    recipes: PathBuf,

    /// Use the built-in recipes instead of reading a catalog file
    #[arg(long)]
    builtin_recipes: bool,

    /// Capacity of the bag the character carries
    #[arg(long, default_value_t = 20)]
    bag_capacity: Weight,

    /// Heaviest bag the character may carry
    #[arg(long, default_value_t = 50)]
    max_bag: Weight,

    /// Ingredient to put in the bag, as name:weight (repeatable)
    #[arg(long = "ingredient", value_parser = parse_ingredient)]
    ingredients: Vec<Element>,

    /// Number of crafting attempts
    #[arg(long, default_value_t = 1)]
    attempts: u32,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,
}

/// JSON output structure
#[derive(Serialize)]
struct RunSummary {
    recipe: String,
    attempts: Vec<AttemptResult>,
    potion: Option<String>,
    bag_after: Vec<Element>,
}

#[derive(Serialize)]
struct AttemptResult {
    attempt: u32,
    success: bool,
    message: String,
}

fn parse_ingredient(s: &str) -> std::result::Result<Element, String> {
    let (name, weight) = s
        .rsplit_once(':')
        .ok_or_else(|| format!("expected name:weight, got '{}'", s))?;
    let weight = weight
        .trim()
        .parse::<Weight>()
        .map_err(|e| format!("bad weight in '{}': {}", s, e))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing name in '{}'", s));
    }
    Ok(Element::new(name, weight))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("brewcraft=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let catalog = if args.builtin_recipes {
        RecipeCatalog::with_defaults()
    } else {
        RecipeCatalog::load_from_toml(&args.recipes)?
    };
    let recipe = catalog
        .get(&args.recipe)
        .ok_or_else(|| BrewError::InvalidConfig(format!("unknown recipe '{}'", args.recipe)))?;

    let mut character = Character::new("Runner", 100, args.max_bag);
    character
        .set_bag(Bag::new(args.bag_capacity))
        .map_err(|e| {
            BrewError::InvalidConfig(format!("bag capacity {}: {}", args.bag_capacity, e))
        })?;
    character.set_cauldron(Default::default());

    if let Some(bag) = character.bag_mut() {
        for ingredient in args.ingredients {
            let name = ingredient.name().to_string();
            if let Err(e) = bag.add_element(ingredient) {
                tracing::warn!("Skipping ingredient {}: {}", name, e);
            }
        }
    }

    let mut attempts = Vec::new();
    let mut potion = None;
    for attempt in 1..=args.attempts {
        match character.craft_potion(recipe) {
            Ok(brewed) => {
                attempts.push(AttemptResult {
                    attempt,
                    success: true,
                    message: format!("Brewed {}", brewed),
                });
                potion = Some(brewed.name);
                break;
            }
            Err(e) => attempts.push(AttemptResult {
                attempt,
                success: false,
                message: e.to_string(),
            }),
        }
    }

    let summary = RunSummary {
        recipe: recipe.name().to_string(),
        attempts,
        potion,
        bag_after: character
            .bag()
            .map(|bag| bag.elements().to_vec())
            .unwrap_or_default(),
    };

    if args.format == "text" {
        println!("Recipe: {}", summary.recipe);
        for attempt in &summary.attempts {
            println!("  #{} {}", attempt.attempt, attempt.message);
        }
        let left: Vec<String> = summary.bag_after.iter().map(|e| e.to_string()).collect();
        println!("Bag after: {}", left.join(", "));
    } else {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
