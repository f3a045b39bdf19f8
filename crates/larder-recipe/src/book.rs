//! Ordered, name-indexed recipe collection

use std::collections::HashMap;

use crate::schema::Recipe;

/// Append-only list of recipes in load order.
///
/// Several recipes may share a name; lookups always return the one loaded
/// first.
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
    /// Lower-cased name -> index of its first occurrence.
    first_by_name: HashMap<String, usize>,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, recipe: Recipe) {
        let idx = self.recipes.len();
        self.first_by_name
            .entry(recipe.name().to_lowercase())
            .or_insert(idx);
        self.recipes.push(recipe);
    }

    /// Case-insensitive exact match on the name.
    pub fn find(&self, name: &str) -> Option<&Recipe> {
        self.first_by_name
            .get(&name.to_lowercase())
            .map(|&idx| &self.recipes[idx])
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    /// Recipes ordered by ordinal name comparison; equal names keep load order.
    pub fn sorted_by_name(&self) -> Vec<&Recipe> {
        let mut sorted: Vec<&Recipe> = self.recipes.iter().collect();
        sorted.sort_by(|a, b| a.name().cmp(b.name()));
        sorted
    }
}

impl Extend<Recipe> for RecipeBook {
    fn extend<I: IntoIterator<Item = Recipe>>(&mut self, iter: I) {
        for recipe in iter {
            self.push(recipe);
        }
    }
}

impl<'a> IntoIterator for &'a RecipeBook {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
