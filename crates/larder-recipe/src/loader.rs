//! Best-effort batch loading of recipe sources
//!
//! Loading never fails as a whole. A source that cannot be read or parsed is
//! dropped and the batch moves on to the next one; the `LoadReport` records
//! what was dropped and why.

use larder_core::Pantry;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::error::SourceError;
use crate::parser::{parse_recipe, SkippedLine};
use crate::schema::Recipe;

/// A source that produced no recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedSource {
    pub source: String,
    pub reason: SourceError,
}

/// Outcome of a load batch.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped_sources: Vec<SkippedSource>,
    /// Ingredient lines dropped from sources that were otherwise loaded.
    pub skipped_lines: Vec<(String, SkippedLine)>,
}

impl LoadReport {
    pub fn sources_skipped(&self) -> usize {
        self.skipped_sources.len()
    }

    pub fn lines_skipped(&self) -> usize {
        self.skipped_lines.len()
    }

    pub fn is_clean(&self) -> bool {
        self.skipped_sources.is_empty() && self.skipped_lines.is_empty()
    }

}

/// Loads recipe sources, resolving ingredient names against a pantry.
pub struct RecipeLoader<'p, P: Pantry + ?Sized> {
    pantry: &'p P,
}

impl<'p, P: Pantry + ?Sized> RecipeLoader<'p, P> {
    pub fn new(pantry: &'p P) -> Self {
        Self { pantry }
    }

    /// Load recipe files in order, skipping any that cannot be read or parsed.
    pub fn load_files<I>(&self, paths: I) -> (Vec<Recipe>, LoadReport)
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        let sources = paths.into_iter().map(|path| {
            let path = path.as_ref();
            let label = path.display().to_string();
            let text = fs::read_to_string(path).map_err(SourceError::from);
            (label, text)
        });
        self.load_all(sources)
    }

    /// Load in-memory sources given as `(label, text)` pairs.
    pub fn load_texts<I, L, T>(&self, sources: I) -> (Vec<Recipe>, LoadReport)
    where
        I: IntoIterator<Item = (L, T)>,
        L: Into<String>,
        T: AsRef<str>,
    {
        self.load_all(
            sources
                .into_iter()
                .map(|(label, text)| (label.into(), Ok(text.as_ref().to_string()))),
        )
    }

    fn load_all<I>(&self, sources: I) -> (Vec<Recipe>, LoadReport)
    where
        I: IntoIterator<Item = (String, Result<String, SourceError>)>,
    {
        let mut recipes = Vec::new();
        let mut report = LoadReport::default();

        for (label, text) in sources {
            match text.and_then(|text| parse_recipe(&text, self.pantry)) {
                Ok(parsed) => {
                    report
                        .skipped_lines
                        .extend(parsed.skipped_lines.into_iter().map(|l| (label.clone(), l)));
                    report.loaded += 1;
                    recipes.push(parsed.recipe);
                }
                Err(reason) => {
                    warn!("Skipping recipe source {}: {}", label, reason);
                    report.skipped_sources.push(SkippedSource {
                        source: label,
                        reason,
                    });
                }
            }
        }

        info!(
            "Loaded {} recipes ({} sources skipped, {} lines skipped)",
            report.loaded,
            report.sources_skipped(),
            report.lines_skipped()
        );
        (recipes, report)
    }
}
