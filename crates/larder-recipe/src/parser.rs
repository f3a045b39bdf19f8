//! Plain-text recipe parser
//!
//! A source holds one recipe:
//!
//! ```text
//! Soup
//! 0.8
//! Water 2
//! Salt 1
//! ```
//!
//! Line 1 is the name, line 2 the success rate and every later non-blank
//! line an `<ingredient> <quantity>` pair. Bad ingredient lines are skipped
//! one by one; a bad name or rate rejects the whole source.

use larder_core::{Ingredient, Pantry};
use tracing::debug;

use crate::error::{LineError, SourceError};
use crate::schema::{upsert_requirement, Recipe, Requirement};

const MIN_LINES: usize = 3;

/// An ingredient line that did not make it into the recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number within the source.
    pub line_number: usize,
    pub reason: LineError,
}

/// A parsed recipe plus the ingredient lines that were dropped.
#[derive(Debug, Clone)]
pub struct ParsedRecipe {
    pub recipe: Recipe,
    pub skipped_lines: Vec<SkippedLine>,
}

/// Parse one recipe source, resolving ingredient names against `pantry`.
///
/// Names the pantry does not know become standalone `"Unknown"` ingredients.
/// A repeated ingredient keeps the quantity of its last line.
pub fn parse_recipe<P: Pantry + ?Sized>(
    text: &str,
    pantry: &P,
) -> Result<ParsedRecipe, SourceError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < MIN_LINES {
        return Err(SourceError::TooFewLines(lines.len()));
    }

    let name = lines[0].trim();
    if name.is_empty() {
        return Err(SourceError::EmptyName);
    }
    let success_rate = parse_success_rate(lines[1])?;

    let mut requirements: Vec<Requirement> = Vec::new();
    let mut skipped_lines = Vec::new();

    for (idx, line) in lines.iter().enumerate().skip(2) {
        if line.trim().is_empty() {
            continue;
        }
        match parse_ingredient_line(line) {
            Ok((ingredient_name, quantity)) => {
                let ingredient = pantry
                    .get_ingredient(ingredient_name)
                    .unwrap_or_else(|| Ingredient::unknown(ingredient_name));
                upsert_requirement(&mut requirements, ingredient, quantity);
            }
            Err(reason) => {
                debug!("Skipping line {} of recipe '{}': {}", idx + 1, name, reason);
                skipped_lines.push(SkippedLine {
                    line_number: idx + 1,
                    reason,
                });
            }
        }
    }

    Ok(ParsedRecipe {
        recipe: Recipe::new(name.to_string(), requirements, success_rate),
        skipped_lines,
    })
}

/// Rust's float parser is locale-independent and only accepts '.' as the
/// decimal separator.
fn parse_success_rate(line: &str) -> Result<f64, SourceError> {
    let raw = line.trim();
    let rate: f64 = raw
        .parse()
        .map_err(|_| SourceError::InvalidSuccessRate(raw.to_string()))?;
    // Out-of-range rates reject the source as well; see DESIGN.md.
    if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
        return Err(SourceError::SuccessRateOutOfRange(rate));
    }
    Ok(rate)
}

fn parse_ingredient_line(line: &str) -> Result<(&str, u32), LineError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [name, quantity] = tokens[..] else {
        return Err(LineError::TokenCount(tokens.len()));
    };
    let quantity: u32 = quantity
        .parse()
        .map_err(|_| LineError::InvalidQuantity(quantity.to_string()))?;
    if quantity == 0 {
        return Err(LineError::ZeroQuantity);
    }
    Ok((name, quantity))
}
