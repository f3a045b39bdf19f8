//! Larder Core - ingredient model and pantry contract
//!
//! This crate defines the ingredient identity shared by recipes and pantries,
//! the `Pantry` collaborator trait the cook consults, and an in-memory pantry.

pub mod ingredient;
pub mod pantry;

pub use ingredient::{Ingredient, UNKNOWN_KIND};
pub use pantry::{MemoryPantry, Pantry, PantryError, StockEntry};
