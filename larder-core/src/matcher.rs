//! Scoring and ranking recipes against the ingredients a user has.
//!
//! Matching is exact equality of canonical names. There is no stemming or
//! plural handling: "egg" and "eggs" are different ingredients.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;

use crate::ingredient_normalizer::normalize;
use crate::recipe::{split_ingredients, Recipe};

/// Canonical names of the ingredients on hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableIngredients {
    names: HashSet<String>,
}

impl AvailableIngredients {
    /// Parse a comma-delimited list as typed by a user.
    pub fn from_input(input: &str) -> Self {
        split_ingredients(input).into_iter().collect()
    }

    pub fn contains(&self, canonical_name: &str) -> bool {
        self.names.contains(canonical_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for AvailableIngredients {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let names = iter
            .into_iter()
            .filter(|raw| !raw.as_ref().trim().is_empty())
            .map(|raw| normalize(raw.as_ref()))
            .collect();
        Self { names }
    }
}

/// Number of the recipe's ingredient entries that are available.
///
/// A name repeated in the recipe counts once per occurrence.
pub fn match_score(recipe: &Recipe, available: &AvailableIngredients) -> usize {
    recipe
        .ingredients()
        .iter()
        .filter(|ingredient| available.contains(ingredient.name()))
        .count()
}

/// Recipe ingredients not on hand, in recipe order, repeats kept.
pub fn missing_ingredients<'a>(recipe: &'a Recipe, available: &AvailableIngredients) -> Vec<&'a str> {
    recipe
        .ingredients()
        .iter()
        .map(|ingredient| ingredient.name())
        .filter(|name| !available.contains(name))
        .collect()
}

/// A recipe with at least one available ingredient.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeMatch<'a> {
    #[serde(skip)]
    pub recipe: &'a Recipe,
    pub title: &'a str,
    pub score: usize,
    pub missing: Vec<&'a str>,
}

impl RecipeMatch<'_> {
    /// True when nothing is missing.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Rank recipes by how many of their ingredients are available.
///
/// Recipes scoring zero are dropped. The rest are ordered by score, then by
/// health score, both descending; a recipe without a health score comes
/// after one with it. The sort is stable, so remaining ties keep input
/// order. `top_n` truncates the result when given.
pub fn rank<'a, I>(
    recipes: I,
    available: &AvailableIngredients,
    top_n: Option<usize>,
) -> Vec<RecipeMatch<'a>>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut candidates = 0;
    let mut matches: Vec<RecipeMatch<'a>> = recipes
        .into_iter()
        .inspect(|_| candidates += 1)
        .filter_map(|recipe| {
            let score = match_score(recipe, available);
            (score > 0).then(|| RecipeMatch {
                recipe,
                title: recipe.title(),
                score,
                missing: missing_ingredients(recipe, available),
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| compare_health(a.recipe.health_score(), b.recipe.health_score()))
    });

    let qualifying = matches.len();
    if let Some(n) = top_n {
        matches.truncate(n);
    }

    tracing::debug!(
        candidates,
        qualifying,
        returned = matches.len(),
        "ranked recipes"
    );

    matches
}

/// Descending by score; present before absent.
fn compare_health(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
