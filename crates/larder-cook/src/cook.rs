//! Cooking workflow

use larder_core::Pantry;
use larder_recipe::{LoadReport, RecipeBook, RecipeLoader};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;
use tracing::{debug, error, info};

use crate::outcome::CookOutcome;

/// Owns the loaded recipes and cooks them out of a pantry.
///
/// `cook_meal` validates all stock before consuming anything. The two passes
/// are not atomic: nothing else may touch the pantry in between.
pub struct Cook<P: Pantry, R: Rng = StdRng> {
    pantry: P,
    book: RecipeBook,
    rng: R,
}

impl<P: Pantry> Cook<P, StdRng> {
    /// Create a cook whose outcome rolls are seeded from OS entropy.
    pub fn new(pantry: P) -> Self {
        Self::with_rng(pantry, StdRng::from_entropy())
    }
}

impl<P: Pantry, R: Rng> Cook<P, R> {
    pub fn with_rng(pantry: P, rng: R) -> Self {
        Self {
            pantry,
            book: RecipeBook::new(),
            rng,
        }
    }

    /// Read-only view of the loaded recipes, in load order.
    pub fn recipe_book(&self) -> &RecipeBook {
        &self.book
    }

    pub fn pantry(&self) -> &P {
        &self.pantry
    }

    /// Append every recipe that loads cleanly from `paths`.
    ///
    /// Unreadable or malformed files are skipped, never returned as errors;
    /// the report says which ones.
    pub fn load_recipe_files<I>(&mut self, paths: I) -> LoadReport
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        let (recipes, report) = RecipeLoader::new(&self.pantry).load_files(paths);
        self.book.extend(recipes);
        report
    }

    pub fn load_recipe_texts<I, L, T>(&mut self, sources: I) -> LoadReport
    where
        I: IntoIterator<Item = (L, T)>,
        L: Into<String>,
        T: AsRef<str>,
    {
        let (recipes, report) = RecipeLoader::new(&self.pantry).load_texts(sources);
        self.book.extend(recipes);
        report
    }

    /// Try to cook the named recipe.
    ///
    /// The pantry is only mutated when every requirement is in stock, and
    /// then each requirement is consumed exactly once.
    pub fn cook_meal(&mut self, recipe_name: &str) -> CookOutcome {
        let Some(recipe) = self.book.find(recipe_name) else {
            info!("Recipe '{}' not found", recipe_name);
            return CookOutcome::RecipeNotFound;
        };

        for requirement in recipe.requirements() {
            let need = requirement.quantity;
            let have = self.pantry.quantity(&requirement.ingredient);
            if have < need {
                let ingredient = requirement.ingredient.name().to_string();
                info!(
                    "Cannot cook '{}': {} needs {}, pantry has {}",
                    recipe.name(),
                    ingredient,
                    need,
                    have
                );
                return if have == 0 {
                    CookOutcome::MissingIngredient { ingredient }
                } else {
                    CookOutcome::NotEnough {
                        ingredient,
                        need,
                        have,
                    }
                };
            }
        }

        let mut consumed = Vec::new();
        for requirement in recipe.requirements() {
            if !self
                .pantry
                .consume(&requirement.ingredient, requirement.quantity)
            {
                // Reachable only if stock changed since validation.
                error!(
                    "Pantry refused {} x {} while cooking '{}'; already consumed: {:?}",
                    requirement.quantity,
                    requirement.ingredient,
                    recipe.name(),
                    consumed
                );
                return CookOutcome::ConsumptionFailed {
                    ingredient: requirement.ingredient.name().to_string(),
                };
            }
            consumed.push(requirement.ingredient.name());
        }

        let roll: f64 = self.rng.gen();
        let name = recipe.name().to_string();
        debug!(
            "Rolled {:.4} against success rate {} for '{}'",
            roll,
            recipe.success_rate(),
            name
        );
        if roll < recipe.success_rate() {
            info!("Cooked '{}'", name);
            CookOutcome::Succeeded { recipe: name }
        } else {
            info!("Burned '{}'", name);
            CookOutcome::Burned { recipe: name }
        }
    }
}
