//! Larder Recipe - recipe model and loader
//!
//! This crate parses plain-text recipe sources into `Recipe` records and
//! keeps them in an ordered, name-indexed `RecipeBook`.

pub mod book;
pub mod error;
pub mod loader;
pub mod parser;
pub mod schema;

pub use book::RecipeBook;
pub use error::{LineError, SourceError};
pub use loader::{LoadReport, RecipeLoader, SkippedSource};
pub use parser::{parse_recipe, ParsedRecipe, SkippedLine};
pub use schema::{Recipe, Requirement};
