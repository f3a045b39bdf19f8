//! Larder CLI - load recipes, inspect them and cook them out of a pantry

mod config;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use larder_cook::Cook;
use larder_core::MemoryPantry;
use larder_recipe::LoadReport;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use config::LarderConfig;

#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Kitchen assistant - cook recipes from what is in the pantry")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Sources {
    /// Recipe text files (defaults to *.txt in LARDER_RECIPE_DIR)
    #[arg(short, long, num_args = 1..)]
    recipes: Vec<PathBuf>,

    /// Pantry stock JSON file (defaults to LARDER_PANTRY_PATH)
    #[arg(short, long)]
    pantry: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Cook a recipe, consuming its ingredients from the pantry
    Cook {
        /// Name of the recipe to cook
        name: String,

        #[command(flatten)]
        sources: Sources,

        /// Cook the recipe this many times in one session
        #[arg(short, long, default_value_t = 1)]
        times: u32,

        /// Seed for the success roll (defaults to LARDER_RNG_SEED)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List loaded recipes sorted by name
    List {
        #[command(flatten)]
        sources: Sources,

        /// Print recipes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load recipe files and report anything that was skipped
    Check {
        #[command(flatten)]
        sources: Sources,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = LarderConfig::from_env()?;

    match cli.command {
        Commands::Cook {
            name,
            sources,
            times,
            seed,
        } => {
            let seed = seed.or(config.rng_seed);
            let (mut cook, _) = open_kitchen(&config, &sources, seed)?;
            for _ in 0..times {
                println!("{}", cook.cook_meal(&name));
            }
        }
        Commands::List { sources, json } => {
            let (cook, _) = open_kitchen(&config, &sources, config.rng_seed)?;
            list_recipes(&cook, json)?;
        }
        Commands::Check { sources } => {
            let (_, report) = open_kitchen(&config, &sources, config.rng_seed)?;
            print_report(&report);
            if report.sources_skipped() > 0 {
                anyhow::bail!(
                    "{} of {} recipe sources could not be loaded",
                    report.sources_skipped(),
                    report.sources_skipped() + report.loaded
                );
            }
        }
    }

    Ok(())
}

fn open_kitchen(
    config: &LarderConfig,
    sources: &Sources,
    seed: Option<u64>,
) -> Result<(Cook<MemoryPantry>, LoadReport)> {
    let pantry = load_pantry(sources.pantry.as_deref(), &config.pantry_path)?;

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut cook = Cook::with_rng(pantry, rng);

    let files = config.recipe_files(&sources.recipes)?;
    if files.is_empty() {
        warn!("No recipe files given; pass --recipes or set LARDER_RECIPE_DIR");
    }
    let report = cook.load_recipe_files(&files);
    Ok((cook, report))
}

/// An explicit pantry file must load; the configured default may be absent.
fn load_pantry(explicit: Option<&Path>, default: &Path) -> Result<MemoryPantry> {
    if let Some(path) = explicit {
        return MemoryPantry::from_json_file(path)
            .with_context(|| format!("Failed to load pantry {:?}", path));
    }
    if default.exists() {
        return MemoryPantry::from_json_file(default)
            .with_context(|| format!("Failed to load pantry {:?}", default));
    }
    info!("No pantry file at {:?}; starting with an empty pantry", default);
    Ok(MemoryPantry::new())
}

fn list_recipes(cook: &Cook<MemoryPantry>, json: bool) -> Result<()> {
    let recipes = cook.recipe_book().sorted_by_name();
    if json {
        println!("{}", serde_json::to_string_pretty(&recipes)?);
        return Ok(());
    }

    for recipe in recipes {
        println!(
            "{} (success rate {:.0}%)",
            recipe.name(),
            recipe.success_rate() * 100.0
        );
        for requirement in recipe.requirements() {
            println!("  {} x {}", requirement.quantity, requirement.ingredient);
        }
    }
    Ok(())
}

fn print_report(report: &LoadReport) {
    println!("Loaded: {}", report.loaded);
    println!("Skipped sources: {}", report.sources_skipped());
    for skipped in &report.skipped_sources {
        println!("  {}: {}", skipped.source, skipped.reason);
    }
    println!("Skipped lines: {}", report.lines_skipped());
    for (source, line) in &report.skipped_lines {
        println!("  {}:{}: {}", source, line.line_number, line.reason);
    }
}
