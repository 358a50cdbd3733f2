//! Plain-text rendering of matches and catalogs.

use larder_core::{IngredientCatalog, RecipeMatch};

const RULE_WIDTH: usize = 60;

pub fn print_match(recipe_match: &RecipeMatch<'_>) {
    let recipe = recipe_match.recipe;

    println!("\nRecipe: {}", recipe.title());
    let mut details = vec![format!(
        "{} of {} ingredients",
        recipe_match.score,
        recipe.num_ingredients()
    )];
    if let Some(speed) = recipe.cook_speed() {
        details.push(format!("cook speed: {}", speed));
    }
    if let Some(score) = recipe.health_score() {
        match recipe.health_level() {
            Some(level) => details.push(format!("health: {} ({})", score, level)),
            None => details.push(format!("health: {}", score)),
        }
    }
    println!("({})", details.join(", "));

    println!("Ingredients:");
    for ingredient in recipe.ingredients() {
        println!("- {}", ingredient);
    }

    if recipe_match.is_complete() {
        println!("\nYou have all ingredients!");
    } else {
        println!("\nYou are missing:");
        for name in &recipe_match.missing {
            println!("- {}", name);
        }
    }

    if !recipe.directions().is_empty() {
        println!("\nDirections:");
        for (i, step) in recipe.directions().iter().enumerate() {
            println!("{}. {}", i + 1, step);
        }
    }
}

pub fn print_catalog(catalog: &IngredientCatalog) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("\n{}", rule);
    println!("YOUR INGREDIENTS BY CATEGORY");
    println!("{}", rule);

    for (category, ingredients) in catalog.iter() {
        println!(
            "\n{} ({}):",
            category.as_str().to_uppercase(),
            ingredients.len()
        );
        let mut names: Vec<&str> = ingredients.iter().map(|i| i.name()).collect();
        names.sort_unstable();
        for name in names {
            println!("  - {}", name);
        }
    }

    println!("\n{}", rule);
    println!("Total ingredients: {}", catalog.len());
    println!("{}", rule);
}
