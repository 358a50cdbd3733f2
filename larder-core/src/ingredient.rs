use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::ingredient_categorizer::{self, Category, Classifier};
use crate::ingredient_normalizer::normalize;

/// A normalized ingredient with its food category.
///
/// Identity is the canonical name alone: two ingredients with the same name
/// are equal even if they were given different categories.
#[derive(Debug, Clone, Serialize)]
pub struct Ingredient {
    name: String,
    category: Category,
}

impl Ingredient {
    /// Normalize and classify against the built-in taxonomy.
    ///
    /// Returns `None` for blank input, which has no canonical name.
    pub fn new(raw: &str) -> Option<Self> {
        let name = canonical_name(raw)?;
        let category = ingredient_categorizer::classify(&name);
        Some(Self { name, category })
    }

    /// Normalize and classify with a specific classifier.
    pub fn with_classifier(raw: &str, classifier: &Classifier) -> Option<Self> {
        let name = canonical_name(raw)?;
        let category = classifier.classify(&name);
        Some(Self { name, category })
    }

    /// Normalize, keeping a category chosen by the caller.
    pub fn with_category(raw: &str, category: Category) -> Option<Self> {
        let name = canonical_name(raw)?;
        Some(Self { name, category })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

fn canonical_name(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }
    Some(normalize(raw))
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Ingredient {}

impl Hash for Ingredient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
