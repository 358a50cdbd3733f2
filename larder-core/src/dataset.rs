//! Loading recipes from a CSV dataset.
//!
//! A bad row never fails the load: it is logged, recorded in
//! [`LoadedRecipes::skipped`] and the rest of the file is read.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::error::{DatasetError, RecordError};
use crate::recipe::{DirectionDelimiter, Recipe, RecipeRecord};

/// A row that was not turned into a recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// 1-based data row number (the header is not counted).
    pub row: usize,
    pub reason: RecordError,
}

#[derive(Debug, Clone, Default)]
pub struct LoadedRecipes {
    pub recipes: Vec<Recipe>,
    pub skipped: Vec<SkippedRecord>,
}

/// Load recipes from a CSV file.
pub fn load_recipes(
    path: &Path,
    delimiter: DirectionDelimiter,
) -> Result<LoadedRecipes, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let loaded = read_recipes(file, delimiter)?;
    tracing::info!(
        path = %path.display(),
        loaded = loaded.recipes.len(),
        skipped = loaded.skipped.len(),
        "loaded recipe dataset"
    );
    Ok(loaded)
}

/// Read recipes from any CSV source with a header row.
///
/// Header names are trimmed, so " ingredients" matches `ingredients`.
pub fn read_recipes<R: Read>(
    reader: R,
    delimiter: DirectionDelimiter,
) -> Result<LoadedRecipes, DatasetError> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    // Fail early if there is no usable header row.
    csv_reader.headers()?;

    let mut loaded = LoadedRecipes::default();

    for (index, result) in csv_reader.deserialize::<RecipeRecord>().enumerate() {
        let row = index + 1;
        let outcome = result
            .map_err(|e| RecordError::Unreadable(e.to_string()))
            .and_then(|record| Recipe::from_record(record, delimiter));

        match outcome {
            Ok(recipe) => loaded.recipes.push(recipe),
            Err(reason) => {
                tracing::warn!(row, %reason, "skipping recipe record");
                loaded.skipped.push(SkippedRecord { row, reason });
            }
        }
    }

    Ok(loaded)
}
