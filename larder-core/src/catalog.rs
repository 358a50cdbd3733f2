//! A deduplicated collection of ingredients grouped by category.

use std::collections::BTreeMap;
use std::fmt;

use crate::ingredient::Ingredient;
use crate::ingredient_categorizer::{Category, Classifier};

/// Ingredients bucketed by category, each bucket in insertion order.
///
/// Buckets are fixed at construction: the classifier taxonomy's categories
/// plus [`Category::DEFAULT`]. An ingredient whose category has no bucket is
/// filed under the default instead. Nothing is ever removed.
#[derive(Debug, Clone)]
pub struct IngredientCatalog {
    classifier: Classifier,
    buckets: BTreeMap<Category, Vec<Ingredient>>,
}

impl IngredientCatalog {
    /// Empty catalog with every category and the built-in taxonomy.
    pub fn new() -> Self {
        Self::with_classifier(Classifier::default())
    }

    pub fn with_classifier(classifier: Classifier) -> Self {
        let buckets = classifier
            .taxonomy()
            .categories()
            .chain(std::iter::once(Category::DEFAULT))
            .map(|category| (category, Vec::new()))
            .collect();

        Self {
            classifier,
            buckets,
        }
    }

    /// Add an ingredient to its category bucket.
    ///
    /// Returns `false` if an ingredient with the same canonical name is
    /// already in the target bucket.
    pub fn insert(&mut self, ingredient: Ingredient) -> bool {
        let category = if self.buckets.contains_key(&ingredient.category()) {
            ingredient.category()
        } else {
            Category::DEFAULT
        };

        let bucket = self.buckets.entry(category).or_default();
        if bucket.contains(&ingredient) {
            return false;
        }
        bucket.push(ingredient);
        true
    }

    /// Normalize, classify and insert each non-blank name.
    ///
    /// Returns how many new ingredients were added.
    pub fn insert_many<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for name in names {
            if let Some(ingredient) = Ingredient::with_classifier(name.as_ref(), &self.classifier) {
                if self.insert(ingredient) {
                    added += 1;
                }
            }
        }
        added
    }

    /// Ingredients in one category, in insertion order.
    pub fn category(&self, category: Category) -> &[Ingredient] {
        self.buckets
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All ingredients, category order then insertion order.
    pub fn all(&self) -> impl Iterator<Item = &Ingredient> {
        self.buckets.values().flatten()
    }

    /// Per-category counts, omitting empty categories.
    pub fn count_by_category(&self) -> BTreeMap<Category, usize> {
        self.buckets
            .iter()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(category, bucket)| (*category, bucket.len()))
            .collect()
    }

    /// Non-empty buckets in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Ingredient])> {
        self.buckets
            .iter()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(category, bucket)| (*category, bucket.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(Vec::is_empty)
    }
}

impl Default for IngredientCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IngredientCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ingredients across {} categories",
            self.len(),
            self.count_by_category().len()
        )
    }
}
