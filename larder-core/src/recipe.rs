//! Recipe records and the typed [`Recipe`] built from them.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{ConfigError, RecordError};
use crate::ingredient::Ingredient;

/// One row of the recipe dataset, as read from CSV.
///
/// Every column is optional here; [`Recipe::from_record`] decides which
/// ones are required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeRecord {
    #[serde(alias = "title")]
    pub recipe_title: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    pub ingredients: Option<String>,
    #[serde(default)]
    pub directions: Option<String>,
    #[serde(default)]
    pub cook_speed: Option<String>,
    #[serde(default, alias = "diet_tags")]
    pub dietary_profile: Option<String>,
    /// Non-numeric values are read as absent.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub healthiness_score: Option<f64>,
    #[serde(default)]
    pub health_level: Option<String>,
}

/// How a directions column is split into steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectionDelimiter {
    /// `|` if the text contains one, else `.`
    #[default]
    Auto,
    Period,
    Pipe,
}

impl DirectionDelimiter {
    fn resolve(self, text: &str) -> char {
        match self {
            DirectionDelimiter::Period => '.',
            DirectionDelimiter::Pipe => '|',
            DirectionDelimiter::Auto if text.contains('|') => '|',
            DirectionDelimiter::Auto => '.',
        }
    }
}

impl FromStr for DirectionDelimiter {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(DirectionDelimiter::Auto),
            "period" | "." => Ok(DirectionDelimiter::Period),
            "pipe" | "|" => Ok(DirectionDelimiter::Pipe),
            _ => Err(ConfigError::InvalidValue {
                var: "directions delimiter",
                value: s.to_string(),
            }),
        }
    }
}

/// Split an ingredients column on commas.
///
/// There is no quoting: "salt, to taste" becomes two entries.
pub fn split_ingredients(s: &str) -> Vec<&str> {
    split_trimmed(s, ',')
}

/// Split a directions column into steps.
pub fn split_directions(s: &str, delimiter: DirectionDelimiter) -> Vec<&str> {
    split_trimmed(s, delimiter.resolve(s))
}

/// Split a dietary profile column into lowercase tags.
pub fn split_diet_tags(s: &str) -> Vec<String> {
    split_trimmed(s, ',')
        .into_iter()
        .map(str::to_lowercase)
        .collect()
}

fn split_trimmed(s: &str, delimiter: char) -> Vec<&str> {
    s.split(delimiter)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// A validated recipe. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    title: String,
    subcategory: Option<String>,
    ingredients: Vec<Ingredient>,
    directions: Vec<String>,
    diet_tags: Vec<String>,
    health_score: Option<f64>,
    health_level: Option<String>,
    cook_speed: Option<String>,
}

impl Recipe {
    /// Build a recipe from already-split parts.
    ///
    /// Blank ingredient entries are dropped.
    pub fn new<I, S>(title: impl Into<String>, ingredients: I, directions: Vec<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            title: title.into(),
            subcategory: None,
            ingredients: ingredients
                .into_iter()
                .filter_map(|raw| Ingredient::new(raw.as_ref()))
                .collect(),
            directions,
            diet_tags: Vec::new(),
            health_score: None,
            health_level: None,
            cook_speed: None,
        }
    }

    pub fn with_diet_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.diet_tags = tags
            .into_iter()
            .map(|tag| tag.as_ref().trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect();
        self
    }

    /// Set the tie-break score. NaN and infinities are treated as absent.
    pub fn with_health_score(mut self, score: f64) -> Self {
        self.health_score = score.is_finite().then_some(score);
        self
    }

    /// Validate a dataset row.
    ///
    /// The title and at least one ingredient are required; everything else
    /// falls back to empty or absent.
    pub fn from_record(
        record: RecipeRecord,
        delimiter: DirectionDelimiter,
    ) -> Result<Self, RecordError> {
        let title =
            non_blank(record.recipe_title).ok_or(RecordError::MissingField("recipe_title"))?;
        let ingredients_text =
            non_blank(record.ingredients).ok_or(RecordError::MissingField("ingredients"))?;

        let directions = record
            .directions
            .as_deref()
            .map(|text| {
                split_directions(text, delimiter)
                    .into_iter()
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let mut recipe = Recipe::new(title, split_ingredients(&ingredients_text), directions);
        if recipe.ingredients.is_empty() {
            return Err(RecordError::MissingField("ingredients"));
        }

        recipe.subcategory = non_blank(record.subcategory);
        recipe.diet_tags = record
            .dietary_profile
            .as_deref()
            .map(split_diet_tags)
            .unwrap_or_default();
        recipe.health_score = record.healthiness_score.filter(|score| score.is_finite());
        recipe.health_level = non_blank(record.health_level);
        recipe.cook_speed = non_blank(record.cook_speed);

        Ok(recipe)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subcategory(&self) -> Option<&str> {
        self.subcategory.as_deref()
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn directions(&self) -> &[String] {
        &self.directions
    }

    pub fn diet_tags(&self) -> &[String] {
        &self.diet_tags
    }

    /// Secondary ranking key.
    pub fn health_score(&self) -> Option<f64> {
        self.health_score
    }

    pub fn health_level(&self) -> Option<&str> {
        self.health_level.as_deref()
    }

    pub fn cook_speed(&self) -> Option<&str> {
        self.cook_speed.as_deref()
    }

    pub fn num_ingredients(&self) -> usize {
        self.ingredients.len()
    }

    pub fn num_steps(&self) -> usize {
        self.directions.len()
    }

    pub fn has_diet_tag(&self, tag: &str) -> bool {
        let tag = tag.trim().to_lowercase();
        self.diet_tags.iter().any(|t| *t == tag)
    }
}

/// Every distinct diet tag across a collection, sorted.
pub fn diet_options(recipes: &[Recipe]) -> BTreeSet<&str> {
    recipes
        .iter()
        .flat_map(|recipe| recipe.diet_tags.iter().map(String::as_str))
        .collect()
}

/// Recipes carrying the given diet tag, in input order.
pub fn filter_by_diet<'a>(recipes: &'a [Recipe], tag: &str) -> Vec<&'a Recipe> {
    recipes.iter().filter(|recipe| recipe.has_diet_tag(tag)).collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, ingredients: &str) -> RecipeRecord {
        RecipeRecord {
            recipe_title: Some(title.to_string()),
            ingredients: Some(ingredients.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_split_ingredients() {
        assert_eq!(
            split_ingredients("2 cups rice, chicken,, salt "),
            ["2 cups rice", "chicken", "salt"]
        );
        assert!(split_ingredients(" , ").is_empty());
    }

    #[test]
    fn test_split_directions() {
        let text = "Boil water. Add pasta. Drain.";
        assert_eq!(
            split_directions(text, DirectionDelimiter::Period),
            ["Boil water", "Add pasta", "Drain"]
        );

        let piped = "Preheat oven to 350.5 F | Bake 20 min|";
        assert_eq!(
            split_directions(piped, DirectionDelimiter::Auto),
            ["Preheat oven to 350.5 F", "Bake 20 min"]
        );
        assert_eq!(
            split_directions(text, DirectionDelimiter::Auto),
            ["Boil water", "Add pasta", "Drain"]
        );
    }

    #[test]
    fn test_split_diet_tags() {
        assert_eq!(split_diet_tags("Vegan, Gluten-Free,"), ["vegan", "gluten-free"]);
    }

    #[test]
    fn test_delimiter_from_str() {
        assert_eq!("PIPE".parse::<DirectionDelimiter>(), Ok(DirectionDelimiter::Pipe));
        assert_eq!(".".parse::<DirectionDelimiter>(), Ok(DirectionDelimiter::Period));
        assert!("comma".parse::<DirectionDelimiter>().is_err());
    }

    #[test]
    fn test_from_record() {
        let mut row = record("  Chicken Rice ", "1 lb chicken breast, 2 cups rice, salt");
        row.directions = Some("Cook rice. Add chicken.".to_string());
        row.dietary_profile = Some("Gluten-Free, Dairy-Free".to_string());
        row.healthiness_score = Some(72.0);
        row.health_level = Some("healthy".to_string());

        let recipe = Recipe::from_record(row, DirectionDelimiter::Auto).unwrap();
        assert_eq!(recipe.title(), "Chicken Rice");
        let names: Vec<_> = recipe.ingredients().iter().map(Ingredient::name).collect();
        assert_eq!(names, ["chicken breast", "rice", "salt"]);
        assert_eq!(recipe.directions(), ["Cook rice", "Add chicken"]);
        assert_eq!(recipe.num_steps(), 2);
        assert!(recipe.has_diet_tag("gluten-free"));
        assert!(recipe.has_diet_tag(" Dairy-Free "));
        assert!(!recipe.has_diet_tag("vegan"));
        assert_eq!(recipe.health_score(), Some(72.0));
        assert_eq!(recipe.health_level(), Some("healthy"));
        assert_eq!(recipe.cook_speed(), None);
    }

    #[test]
    fn test_from_record_missing_fields() {
        let no_title = RecipeRecord {
            ingredients: Some("rice".to_string()),
            ..Default::default()
        };
        assert_eq!(
            Recipe::from_record(no_title, DirectionDelimiter::Auto),
            Err(RecordError::MissingField("recipe_title"))
        );

        assert_eq!(
            Recipe::from_record(record("Soup", "  "), DirectionDelimiter::Auto),
            Err(RecordError::MissingField("ingredients"))
        );
        assert_eq!(
            Recipe::from_record(record("Soup", ", ,"), DirectionDelimiter::Auto),
            Err(RecordError::MissingField("ingredients"))
        );
        assert_eq!(
            Recipe::from_record(record("   ", "rice"), DirectionDelimiter::Auto),
            Err(RecordError::MissingField("recipe_title"))
        );
    }

    #[test]
    fn test_non_finite_health_score_is_absent() {
        for score in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut row = record("Rice Bowl", "rice");
            row.healthiness_score = Some(score);
            let recipe = Recipe::from_record(row, DirectionDelimiter::Auto).unwrap();
            assert_eq!(recipe.health_score(), None);
        }

        let recipe = Recipe::new("Rice Bowl", ["rice"], vec![]).with_health_score(f64::NAN);
        assert_eq!(recipe.health_score(), None);
    }

    #[test]
    fn test_optional_fields_absent() {
        let recipe = Recipe::from_record(record("Toast", "bread"), DirectionDelimiter::Auto).unwrap();
        assert!(recipe.directions().is_empty());
        assert!(recipe.diet_tags().is_empty());
        assert_eq!(recipe.health_score(), None);
    }

    #[test]
    fn test_diet_options_and_filter() {
        let recipes = vec![
            Recipe::new("A", ["rice"], vec![]).with_diet_tags(["Vegan", "nut-free"]),
            Recipe::new("B", ["beef"], vec![]),
            Recipe::new("C", ["tofu"], vec![]).with_diet_tags(["vegan"]),
        ];

        let options: Vec<_> = diet_options(&recipes).into_iter().collect();
        assert_eq!(options, ["nut-free", "vegan"]);

        let vegan: Vec<_> = filter_by_diet(&recipes, "Vegan")
            .into_iter()
            .map(Recipe::title)
            .collect();
        assert_eq!(vegan, ["A", "C"]);
    }
}
