//! End-to-end cooking tests: recipe files on disk, a memory pantry, seeded rolls

use larder_cook::{Cook, CookOutcome};
use larder_core::{Ingredient, MemoryPantry, Pantry};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use tempfile::TempDir;

fn water() -> Ingredient {
    Ingredient::new("Water", "Liquid")
}

fn salt() -> Ingredient {
    Ingredient::new("Salt", "Spice")
}

fn pantry(water_qty: u32, salt_qty: u32) -> MemoryPantry {
    let mut pantry = MemoryPantry::new();
    pantry.stock(water(), water_qty);
    pantry.stock(salt(), salt_qty);
    pantry
}

fn cook_with_soup(
    pantry: MemoryPantry,
    rate: &str,
    seed: u64,
) -> (Cook<MemoryPantry, StdRng>, TempDir) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("soup.txt");
    fs::write(&path, format!("Soup\n{}\nWater 2\nSalt 1\n", rate)).unwrap();

    let mut cook = Cook::with_rng(pantry, StdRng::seed_from_u64(seed));
    let report = cook.load_recipe_files([&path]);
    assert_eq!(report.loaded, 1);
    (cook, dir)
}

#[test]
fn test_recipe_book_reflects_loaded_files() {
    let (cook, _dir) = cook_with_soup(pantry(2, 1), "0.8", 1);
    let book = cook.recipe_book();
    assert_eq!(book.len(), 1);
    assert_eq!(book.find("soup").unwrap().success_rate(), 0.8);
}

#[test]
fn test_second_cook_reports_shortage() {
    let (mut cook, _dir) = cook_with_soup(pantry(3, 1), "0.8", 7);

    let first = cook.cook_meal("Soup");
    assert!(first.consumed_stock());
    assert_eq!(cook.pantry().quantity(&water()), 1);
    assert_eq!(cook.pantry().quantity(&salt()), 0);

    let second = cook.cook_meal("Soup");
    assert_eq!(
        second,
        CookOutcome::NotEnough {
            ingredient: "Water".to_string(),
            need: 2,
            have: 1,
        }
    );
    assert_eq!(cook.pantry().quantity(&water()), 1);
}

#[test]
fn test_same_seed_same_outcomes() {
    let attempts = 20;
    let run = |seed| {
        let (mut cook, _dir) = cook_with_soup(pantry(2 * attempts, attempts), "0.5", seed);
        (0..attempts)
            .map(|_| cook.cook_meal("Soup").is_success())
            .collect::<Vec<_>>()
    };
    assert_eq!(run(99), run(99));
}

#[test]
fn test_success_frequency_tracks_rate() {
    let attempts: u32 = 10_000;
    let (mut cook, _dir) = cook_with_soup(pantry(2 * attempts, attempts), "0.3", 2024);

    let successes = (0..attempts)
        .filter(|_| cook.cook_meal("Soup").is_success())
        .count();

    let frequency = successes as f64 / attempts as f64;
    assert!(
        (frequency - 0.3).abs() < 0.03,
        "success frequency {} too far from 0.3",
        frequency
    );
    assert_eq!(cook.pantry().quantity(&water()), 0);
    assert_eq!(cook.pantry().quantity(&salt()), 0);
}

#[test]
fn test_failed_load_leaves_book_empty() {
    let dir = TempDir::new().unwrap();
    let mut cook = Cook::with_rng(pantry(1, 1), StdRng::seed_from_u64(0));
    let report = cook.load_recipe_files([dir.path().join("nope.txt")]);

    assert_eq!(report.sources_skipped(), 1);
    assert!(cook.recipe_book().is_empty());
    assert_eq!(cook.cook_meal("Soup"), CookOutcome::RecipeNotFound);
}
