//! Larder Cook - meal cooking workflow
//!
//! `Cook` owns the recipe book and a pantry, and turns a recipe name into a
//! `CookOutcome`: lookup, stock validation, consumption, then a random roll
//! against the recipe's success rate.

pub mod cook;
pub mod outcome;

pub use cook::Cook;
pub use outcome::CookOutcome;
