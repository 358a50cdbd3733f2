//! Recipe matching by ingredients on hand.
//!
//! Raw ingredient text is normalized into canonical names
//! ([`ingredient_normalizer`]), sorted into food groups
//! ([`ingredient_categorizer`], [`catalog`]), and recipes are ranked by how
//! many of their ingredients are available ([`matcher`]).

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod error;
pub mod ingredient;
pub mod ingredient_categorizer;
pub mod ingredient_normalizer;
pub mod matcher;
pub mod recipe;

pub use catalog::IngredientCatalog;
pub use config::LarderConfig;
pub use dataset::{load_recipes, read_recipes, LoadedRecipes, SkippedRecord};
pub use error::{ConfigError, DatasetError, RecordError, UnknownCategory};
pub use ingredient::Ingredient;
pub use ingredient_categorizer::{classify, Category, Classifier, Taxonomy};
pub use ingredient_normalizer::normalize;
pub use matcher::{match_score, missing_ingredients, rank, AvailableIngredients, RecipeMatch};
pub use recipe::{
    diet_options, filter_by_diet, split_diet_tags, split_directions, split_ingredients,
    DirectionDelimiter, Recipe, RecipeRecord,
};
