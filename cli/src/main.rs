mod display;
mod prompt;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use larder_core::{
    diet_options, filter_by_diet, load_recipes, normalize, rank, AvailableIngredients, Category,
    Ingredient, IngredientCatalog, LarderConfig, LoadedRecipes, Recipe,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Find recipes you can cook with what you have", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank recipes by how many of their ingredients you have
    Match {
        /// Comma-separated ingredients (prompted for if omitted)
        #[arg(long)]
        have: Option<String>,
        /// Recipe CSV (default: $LARDER_DATASET or recipes.csv)
        #[arg(long)]
        dataset: Option<PathBuf>,
        /// Number of matches to show (default: $LARDER_TOP_N or 3)
        #[arg(long, conflicts_with = "all")]
        top: Option<usize>,
        /// Show every matching recipe
        #[arg(long)]
        all: bool,
        /// Only consider recipes with this dietary tag
        #[arg(long)]
        diet: Option<String>,
        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the dietary profiles present in the dataset
    Diets {
        /// Recipe CSV (default: $LARDER_DATASET or recipes.csv)
        #[arg(long)]
        dataset: Option<PathBuf>,
    },
    /// Sort ingredients into categories
    Pantry {
        /// Comma-separated ingredients, categorized automatically.
        /// If omitted, you are asked for each category in turn.
        list: Option<String>,
    },
    /// Show the canonical name and category of ingredient phrases
    Normalize {
        /// Raw ingredient phrases, e.g. "2 cups all-purpose flour"
        #[arg(required = true)]
        raw: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = LarderConfig::from_env().context("Invalid configuration")?;

    match cli.command {
        Commands::Match {
            have,
            dataset,
            top,
            all,
            diet,
            json,
        } => {
            let top_n = if all { None } else { Some(top.unwrap_or(config.top_n)) };
            let loaded = load(&config, dataset)?;
            let have = match have {
                Some(have) => have,
                None => prompt::read_line("Enter ingredients you have (comma-separated): ")?,
            };
            match_recipes(&loaded.recipes, &have, top_n, diet.as_deref(), json)?;
        }
        Commands::Diets { dataset } => {
            let loaded = load(&config, dataset)?;
            let options = diet_options(&loaded.recipes);
            if options.is_empty() {
                println!("No dietary profiles in dataset.");
            } else {
                println!("Available dietary profiles in dataset:");
                for (i, option) in options.iter().enumerate() {
                    println!("{}. {}", i + 1, option);
                }
            }
        }
        Commands::Pantry { list } => {
            let catalog = match list {
                Some(list) => {
                    let mut catalog = IngredientCatalog::new();
                    catalog.insert_many(list.split(','));
                    catalog
                }
                None => pantry_by_category()?,
            };
            display::print_catalog(&catalog);
        }
        Commands::Normalize { raw } => {
            for phrase in &raw {
                match Ingredient::new(phrase) {
                    Some(ingredient) => {
                        println!("{:?} -> {} ({})", phrase, ingredient, ingredient.category())
                    }
                    None => println!("{:?} -> {:?} (blank)", phrase, normalize(phrase)),
                }
            }
        }
    }

    Ok(())
}

fn load(config: &LarderConfig, dataset: Option<PathBuf>) -> Result<LoadedRecipes> {
    let path = dataset.unwrap_or_else(|| config.dataset_path.clone());
    tracing::debug!(path = %path.display(), "loading recipes");
    let loaded = load_recipes(&path, config.directions_delimiter)
        .with_context(|| format!("Failed to load recipes from {}", path.display()))?;

    if !loaded.skipped.is_empty() {
        eprintln!(
            "Warning: skipped {} malformed recipe record(s)",
            loaded.skipped.len()
        );
    }
    Ok(loaded)
}

fn match_recipes(
    recipes: &[Recipe],
    have: &str,
    top_n: Option<usize>,
    diet: Option<&str>,
    json: bool,
) -> Result<()> {
    let available = AvailableIngredients::from_input(have);
    let candidates: Vec<&Recipe> = match diet {
        Some(tag) => filter_by_diet(recipes, tag),
        None => recipes.iter().collect(),
    };
    // Blank input simply matches nothing.
    let matches = rank(candidates, &available, top_n);

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("\nNo ingredient matches found - try entering more common ingredients!");
        return Ok(());
    }

    println!("\nBest recipe matches for you:");
    for recipe_match in &matches {
        display::print_match(recipe_match);
    }
    Ok(())
}

/// Ask for each category in turn, keeping the category the user chose.
fn pantry_by_category() -> Result<IngredientCatalog> {
    println!("Enter ingredients you have in each category.");
    println!("Type ingredients separated by commas, or press Enter to skip.");

    let mut catalog = IngredientCatalog::new();
    for &category in Category::ALL {
        let label = format!(
            "\n{} ({}):\n> ",
            category.as_str().to_uppercase(),
            category.examples()
        );
        let line = prompt::read_line(&label)?;
        for name in line.split(',') {
            if let Some(ingredient) = Ingredient::with_category(name, category) {
                catalog.insert(ingredient);
            }
        }
    }
    Ok(catalog)
}
