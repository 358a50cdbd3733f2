//! Ingredient categorization into food groups.
//!
//! Maps canonical ingredient names to one of five categories using an
//! ordered vocabulary per category. The built-in vocabulary is loaded from
//! `data/categories.json` at compile time.
//!
//! Classification runs two passes over the taxonomy:
//! 1. exact membership, categories in taxonomy order;
//! 2. substring containment in either direction, categories in taxonomy
//!    order and terms in file order.
//!
//! The first hit wins, otherwise the ingredient lands in [`Category::Pantry`].
//! Since several vocabularies can share substrings ("beans" vs "green
//! beans"), the order above is what makes results reproducible.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::UnknownCategory;

/// Food groups, in classification order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Proteins,
    Carbs,
    Produce,
    Dairy,
    Pantry,
}

impl Category {
    /// All categories in classification order
    pub const ALL: &'static [Category] = &[
        Category::Proteins,
        Category::Carbs,
        Category::Produce,
        Category::Dairy,
        Category::Pantry,
    ];

    /// Catch-all for anything the vocabularies don't cover.
    pub const DEFAULT: Category = Category::Pantry;

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Proteins => "proteins",
            Category::Carbs => "carbs",
            Category::Produce => "produce",
            Category::Dairy => "dairy",
            Category::Pantry => "pantry",
        }
    }

    /// Short list of examples for prompts.
    pub fn examples(&self) -> &'static str {
        match self {
            Category::Proteins => "chicken, beef, fish, eggs, beans, tofu, etc.",
            Category::Carbs => "rice, pasta, bread, potatoes, flour, etc.",
            Category::Produce => "vegetables & fruits - tomatoes, lettuce, onion, lemon, etc.",
            Category::Dairy => "milk, cheese, butter, yogurt, cream, etc.",
            Category::Pantry => "oils, spices, sauces, sugar, broth, etc.",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == lower)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// The raw JSON structure for the categories data file.
#[derive(Deserialize)]
struct CategoriesData {
    categories: Vec<CategoryTerms>,
}

#[derive(Deserialize)]
struct CategoryTerms {
    category: Category,
    terms: Vec<String>,
}

/// One category's vocabulary, keeping file order for the substring pass.
#[derive(Debug, Clone)]
struct Vocabulary {
    category: Category,
    terms: Vec<String>,
    lookup: HashSet<String>,
}

/// Ordered category vocabularies.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    vocabularies: Vec<Vocabulary>,
}

static BUILTIN_TAXONOMY: LazyLock<Taxonomy> = LazyLock::new(|| {
    let json = include_str!("../data/categories.json");
    let data: CategoriesData =
        serde_json::from_str(json).expect("Failed to parse categories.json");

    Taxonomy::new(
        data.categories
            .into_iter()
            .map(|entry| (entry.category, entry.terms)),
    )
});

impl Taxonomy {
    /// Build a taxonomy from `(category, terms)` pairs.
    ///
    /// Pair order is classification order. Terms are lowercased and trimmed;
    /// a category listed twice has its terms merged into the first slot.
    pub fn new<I, T, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Category, T)>,
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabularies: Vec<Vocabulary> = Vec::new();

        for (category, terms) in entries {
            let index = match vocabularies.iter().position(|v| v.category == category) {
                Some(index) => index,
                None => {
                    vocabularies.push(Vocabulary {
                        category,
                        terms: Vec::new(),
                        lookup: HashSet::new(),
                    });
                    vocabularies.len() - 1
                }
            };
            let vocabulary = &mut vocabularies[index];

            for term in terms {
                let term = term.as_ref().trim().to_lowercase();
                if !term.is_empty() && vocabulary.lookup.insert(term.clone()) {
                    vocabulary.terms.push(term);
                }
            }
        }

        Self { vocabularies }
    }

    /// The compiled-in vocabulary.
    pub fn builtin() -> &'static Taxonomy {
        &BUILTIN_TAXONOMY
    }

    /// Categories in classification order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.vocabularies.iter().map(|v| v.category)
    }

    /// Terms for a category in file order (empty if the category is absent).
    pub fn terms(&self, category: Category) -> &[String] {
        self.vocabularies
            .iter()
            .find(|v| v.category == category)
            .map(|v| v.terms.as_slice())
            .unwrap_or(&[])
    }

    fn exact_match(&self, name: &str) -> Option<Category> {
        self.vocabularies
            .iter()
            .find(|v| v.lookup.contains(name))
            .map(|v| v.category)
    }

    fn partial_match(&self, name: &str) -> Option<Category> {
        self.vocabularies
            .iter()
            .find(|v| {
                v.terms
                    .iter()
                    .any(|term| term.contains(name) || name.contains(term.as_str()))
            })
            .map(|v| v.category)
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

/// Assigns categories to canonical ingredient names.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    taxonomy: Taxonomy,
}

impl Classifier {
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self { taxonomy }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Classify a canonical ingredient name.
    ///
    /// Returns [`Category::DEFAULT`] when nothing matches, including for a
    /// blank name (which would otherwise be a substring of every term).
    pub fn classify(&self, canonical_name: &str) -> Category {
        let name = canonical_name.trim().to_lowercase();
        if name.is_empty() {
            return Category::DEFAULT;
        }

        if let Some(category) = self.taxonomy.exact_match(&name) {
            return category;
        }

        if let Some(category) = self.taxonomy.partial_match(&name) {
            return category;
        }

        tracing::debug!(ingredient = %name, "no category match, using default");
        Category::DEFAULT
    }
}

/// Classify against the built-in taxonomy.
pub fn classify(canonical_name: &str) -> Category {
    static CLASSIFIER: LazyLock<Classifier> = LazyLock::new(Classifier::default);
    CLASSIFIER.classify(canonical_name)
}
