//! Pantry contract and an in-memory stock

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use crate::ingredient::Ingredient;

/// Stock of ingredients consulted and mutated while cooking.
///
/// The pantry is the only source of truth for available quantities; callers
/// must not cache what it reports.
pub trait Pantry {
    /// Look an ingredient up by name, ignoring case.
    fn get_ingredient(&self, name: &str) -> Option<Ingredient>;

    /// Units in stock, 0 when the ingredient is not stocked.
    fn quantity(&self, ingredient: &Ingredient) -> u32;

    /// Remove `quantity` units. Stock is only reduced when this returns true.
    fn consume(&mut self, ingredient: &Ingredient, quantity: u32) -> bool;
}

impl<P: Pantry + ?Sized> Pantry for &mut P {
    fn get_ingredient(&self, name: &str) -> Option<Ingredient> {
        (**self).get_ingredient(name)
    }

    fn quantity(&self, ingredient: &Ingredient) -> u32 {
        (**self).quantity(ingredient)
    }

    fn consume(&mut self, ingredient: &Ingredient, quantity: u32) -> bool {
        (**self).consume(ingredient, quantity)
    }
}

#[derive(Debug, Error)]
pub enum PantryError {
    #[error("failed to read pantry file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid pantry JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One row of a pantry seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct StockEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub quantity: u32,
}

/// Insertion-ordered in-memory pantry.
#[derive(Debug, Clone, Default)]
pub struct MemoryPantry {
    entries: Vec<(Ingredient, u32)>,
}

impl MemoryPantry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = StockEntry>) -> Self {
        let mut pantry = Self::new();
        for entry in entries {
            pantry.stock(Ingredient::new(entry.name, entry.kind), entry.quantity);
        }
        pantry
    }

    /// Read a JSON array of `{ "name", "type", "quantity" }` objects.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PantryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let entries: Vec<StockEntry> = serde_json::from_str(&content)?;
        let pantry = Self::from_entries(entries);
        info!("Loaded {} pantry items from {:?}", pantry.len(), path);
        Ok(pantry)
    }

    /// Add units to an ingredient, creating its entry if needed.
    pub fn stock(&mut self, ingredient: Ingredient, quantity: u32) {
        match self.entries.iter_mut().find(|(i, _)| *i == ingredient) {
            Some((_, have)) => *have = have.saturating_add(quantity),
            None => self.entries.push((ingredient, quantity)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

}

impl Pantry for MemoryPantry {
    fn get_ingredient(&self, name: &str) -> Option<Ingredient> {
        self.entries
            .iter()
            .find(|(i, _)| i.has_name(name))
            .map(|(i, _)| i.clone())
    }

    fn quantity(&self, ingredient: &Ingredient) -> u32 {
        self.entries
            .iter()
            .find(|(i, _)| i == ingredient)
            .map_or(0, |(_, q)| *q)
    }

    fn consume(&mut self, ingredient: &Ingredient, quantity: u32) -> bool {
        let Some((_, have)) = self.entries.iter_mut().find(|(i, _)| i == ingredient) else {
            debug!("Cannot consume unstocked ingredient {}", ingredient);
            return false;
        };
        if *have < quantity {
            debug!(
                "Cannot consume {} x {}: only {} in stock",
                quantity, ingredient, have
            );
            return false;
        }
        *have -= quantity;
        true
    }
}
