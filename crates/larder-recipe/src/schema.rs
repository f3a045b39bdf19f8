//! Recipe record

use larder_core::Ingredient;
use serde::Serialize;

/// A required quantity of one ingredient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Requirement {
    pub ingredient: Ingredient,
    pub quantity: u32,
}

/// A named set of ingredient requirements with a probability of success.
///
/// Requirements keep the order their ingredients first appeared in the
/// source and never repeat an ingredient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    name: String,
    requirements: Vec<Requirement>,
    success_rate: f64,
}

impl Recipe {
    /// Only the parser builds recipes, after validating every field.
    pub(crate) fn new(name: String, requirements: Vec<Requirement>, success_rate: f64) -> Self {
        Self {
            name,
            requirements,
            success_rate,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Probability in `[0, 1]` that cooking with full stock succeeds.
    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }

    pub fn quantity_of(&self, ingredient: &Ingredient) -> Option<u32> {
        self.requirements
            .iter()
            .find(|r| r.ingredient == *ingredient)
            .map(|r| r.quantity)
    }
}

/// Insert or overwrite a requirement; an overwritten entry keeps its position.
pub(crate) fn upsert_requirement(
    requirements: &mut Vec<Requirement>,
    ingredient: Ingredient,
    quantity: u32,
) {
    match requirements.iter_mut().find(|r| r.ingredient == ingredient) {
        Some(existing) => existing.quantity = quantity,
        None => requirements.push(Requirement {
            ingredient,
            quantity,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_overwrites_in_place() {
        let mut requirements = Vec::new();
        upsert_requirement(&mut requirements, Ingredient::unknown("Water"), 2);
        upsert_requirement(&mut requirements, Ingredient::unknown("Salt"), 1);
        upsert_requirement(&mut requirements, Ingredient::unknown("WATER"), 5);

        assert_eq!(requirements.len(), 2);
        assert_eq!(requirements[0].ingredient.name(), "Water");
        assert_eq!(requirements[0].quantity, 5);
        assert_eq!(requirements[1].ingredient.name(), "Salt");
    }

    #[test]
    fn test_quantity_of() {
        let recipe = Recipe::new(
            "Soup".to_string(),
            vec![Requirement {
                ingredient: Ingredient::new("Water", "Liquid"),
                quantity: 2,
            }],
            0.8,
        );
        assert_eq!(recipe.quantity_of(&Ingredient::new("water", "LIQUID")), Some(2));
        assert_eq!(recipe.quantity_of(&Ingredient::unknown("Water")), None);
    }
}
