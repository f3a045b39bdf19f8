//! Result of a single cook attempt

use std::fmt;

/// Terminal result of `Cook::cook_meal`.
///
/// Failures are ordinary values here, not errors. `Display` renders the
/// message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookOutcome {
    /// No recipe with that name is loaded.
    RecipeNotFound,
    /// The pantry has none of a required ingredient.
    MissingIngredient { ingredient: String },
    /// The pantry has some, but not enough, of a required ingredient.
    NotEnough {
        ingredient: String,
        need: u32,
        have: u32,
    },
    /// The pantry refused a consumption after stock had been validated.
    ConsumptionFailed { ingredient: String },
    /// Ingredients consumed and the roll came in under the success rate.
    Succeeded { recipe: String },
    /// Ingredients consumed but the roll failed.
    Burned { recipe: String },
}

impl CookOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CookOutcome::Succeeded { .. })
    }

    /// Whether the attempt got past validation and consumed every requirement.
    pub fn consumed_stock(&self) -> bool {
        matches!(
            self,
            CookOutcome::Succeeded { .. } | CookOutcome::Burned { .. }
        )
    }
}

impl fmt::Display for CookOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CookOutcome::RecipeNotFound => write!(f, "Recipe not found."),
            CookOutcome::MissingIngredient { ingredient } => {
                write!(f, "Missing ingredient: {}", ingredient)
            }
            CookOutcome::NotEnough {
                ingredient,
                need,
                have,
            } => write!(f, "Not enough {} (need {}, have {})", ingredient, need, have),
            CookOutcome::ConsumptionFailed { .. } => write!(f, "Not enough ingredients"),
            CookOutcome::Succeeded { recipe } => write!(f, "Cooking '{}' succeeded!", recipe),
            CookOutcome::Burned { recipe } => {
                write!(f, "Cooking '{}' failed. Ingredients burned...", recipe)
            }
        }
    }
}
