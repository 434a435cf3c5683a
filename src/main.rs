//! Brewcraft - Entry Point
//!
//! Interactive text loop driving a single character: swapping bags,
//! moving items between hands and bag, and brewing potions.

use std::io::{self, Write};
use std::path::PathBuf;

use brewcraft::alchemy::RecipeCatalog;
use brewcraft::character::Character;
use brewcraft::core::config::GameConfig;
use brewcraft::core::error::Result;
use brewcraft::core::types::Weight;
use brewcraft::inventory::{Bag, Element};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Brewcraft - play a single alchemist from the terminal
#[derive(Parser, Debug)]
#[command(name = "brewcraft")]
#[command(about = "Manage a character's bag, held item, and cauldron")]
struct Args {
    /// Game configuration file
    #[arg(long, default_value = "data/game.toml")]
    config: PathBuf,

    /// Recipe catalog, overriding the path in the config file
    #[arg(long)]
    recipes: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("brewcraft=info")),
        )
        .init();

    let args = Args::parse();
    let config = GameConfig::load_or_default(&args.config);
    let recipes_path = args.recipes.unwrap_or_else(|| config.recipes_path.clone());
    let catalog = RecipeCatalog::load_from_toml(&recipes_path).unwrap_or_else(|e| {
        tracing::warn!("Using built-in recipes, failed to load {}: {}", recipes_path.display(), e);
        RecipeCatalog::with_defaults()
    });

    let mut character = Character::from_config(&config);
    tracing::info!("{} ({}) enters the workshop", character.name(), character.id());

    println!("\n=== BREWCRAFT ===");
    println!();
    println!("Commands:");
    println!("  bag <capacity>        - Swap to a new empty bag");
    println!("  add <name> <weight>   - Put a new element straight into the bag");
    println!("  take <name>           - Take an element out of the bag");
    println!("  stow                  - Put the held item into the bag");
    println!("  cauldron              - Set up a fresh cauldron");
    println!("  craft <recipe>        - Brew a recipe from the catalog");
    println!("  recipes               - List known recipes");
    println!("  health <n>            - Set current health");
    println!("  heal                  - Restore full health");
    println!("  status / s            - Show the character");
    println!("  quit / q              - Exit");
    println!();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let rest: Vec<&str> = parts.collect();

        match command {
            "quit" | "q" => break,
            "status" | "s" => display_status(&character),
            "recipes" => {
                for (id, recipe) in catalog.all() {
                    println!(
                        "  {:<12} {} <- {}",
                        id,
                        recipe.name(),
                        recipe.required_ingredient_names().join(", ")
                    );
                }
            }
            "bag" => match rest.first().and_then(|s| s.parse().ok()) {
                Some(capacity) => match character.set_bag(Bag::new(capacity)) {
                    Ok(()) => println!("Now carrying a bag of capacity {}", capacity),
                    Err(e) => println!("{}", e),
                },
                None => println!("Usage: bag <capacity>"),
            },
            "add" => add_to_bag(&mut character, &rest),
            "take" => {
                let name = rest.join(" ");
                if name.is_empty() {
                    println!("Usage: take <name>");
                } else {
                    match character.take_item(&name) {
                        Ok(()) => println!("Holding {}", name),
                        Err(e) => println!("{}", e),
                    }
                }
            }
            "stow" => match character.stow_held_item() {
                Ok(()) => println!("Stowed"),
                Err(e) => println!("{}", e),
            },
            "cauldron" => {
                character.set_cauldron(Default::default());
                println!("A fresh cauldron is ready");
            }
            "craft" => {
                let id = rest.join(" ");
                match catalog.get(&id) {
                    Some(recipe) => match character.craft_potion(recipe) {
                        Ok(potion) => println!("Brewed {}", potion),
                        Err(e) => println!("{}", e),
                    },
                    None => println!("Unknown recipe '{}'. Try 'recipes'.", id),
                }
            }
            "health" => match rest.first().and_then(|s| s.parse().ok()) {
                Some(health) => {
                    character.set_health(health);
                    println!("Health: {}/{}", character.current_health(), character.max_health());
                }
                None => println!("Usage: health <n>"),
            },
            "heal" => {
                character.reset_health();
                println!("Health: {}/{}", character.current_health(), character.max_health());
            }
            _ => println!("Unknown command: {}", command),
        }
    }

    println!("\nGoodbye, {}!", character.name());
    Ok(())
}

/// Handle `add <name> <weight>`, where the name may contain spaces
fn add_to_bag(character: &mut Character, args: &[&str]) {
    let Some((weight, name)) = args.split_last() else {
        println!("Usage: add <name> <weight>");
        return;
    };
    let Ok(weight) = weight.parse::<Weight>() else {
        println!("Usage: add <name> <weight>");
        return;
    };
    if name.is_empty() {
        println!("Usage: add <name> <weight>");
        return;
    }
    let Some(bag) = character.bag_mut() else {
        println!("No bag to add to");
        return;
    };
    match bag.add_element(Element::new(name.join(" "), weight)) {
        Ok(()) => println!("Added to bag ({} free)", bag.free_capacity()),
        Err(e) => println!("{}", e),
    }
}

/// Display the character's full state
fn display_status(character: &Character) {
    println!();
    println!("=== {} ===", character.name());
    println!(
        "Health: {}/{}",
        character.current_health(),
        character.max_health()
    );
    match character.held_item() {
        Some(item) => println!("Holding: {}", item),
        None => println!("Holding: nothing"),
    }
    match character.bag() {
        Some(bag) => {
            println!(
                "Bag: {}/{} used (limit {})",
                bag.total_weight(),
                bag.max_weight_capacity(),
                character.max_bag_capacity()
            );
            for element in bag.elements() {
                println!("  - {}", element);
            }
        }
        None => println!("Bag: none"),
    }
    match character.cauldron() {
        Some(cauldron) => {
            match cauldron.assigned_recipe() {
                Some(recipe) => println!(
                    "Cauldron: {} (missing: {})",
                    recipe.name(),
                    cauldron.missing_ingredient_names().join(", ")
                ),
                None => println!("Cauldron: idle"),
            }
            println!("Potions brewed: {}", cauldron.brewed_count());
        }
        None => println!("Cauldron: none"),
    }
    println!();
}
