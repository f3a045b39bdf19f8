//! CLI configuration from environment variables.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LarderConfig {
    /// JSON stock file used to seed the pantry.
    pub pantry_path: PathBuf,
    /// Directory whose `*.txt` files are loaded when no recipe files are given.
    pub recipe_dir: Option<PathBuf>,
    /// Fixed seed for outcome rolls; None seeds from OS entropy.
    pub rng_seed: Option<u64>,
}

impl LarderConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            pantry_path: std::env::var("LARDER_PANTRY_PATH")
                .unwrap_or_else(|_| "./pantry.json".to_string())
                .into(),
            recipe_dir: std::env::var("LARDER_RECIPE_DIR").ok().map(PathBuf::from),
            rng_seed: std::env::var("LARDER_RNG_SEED")
                .ok()
                .map(|s| s.parse::<u64>())
                .transpose()
                .context("Invalid LARDER_RNG_SEED")?,
        })
    }

    /// Explicit paths win; otherwise every `*.txt` in the recipe directory,
    /// sorted by file name.
    pub fn recipe_files(&self, explicit: &[PathBuf]) -> Result<Vec<PathBuf>> {
        if !explicit.is_empty() {
            return Ok(explicit.to_vec());
        }
        let Some(dir) = &self.recipe_dir else {
            return Ok(Vec::new());
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(dir)
            .with_context(|| format!("Failed to read recipe directory {:?}", dir))?
        {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serialize env-mutating tests to avoid races.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in ["LARDER_PANTRY_PATH", "LARDER_RECIPE_DIR", "LARDER_RNG_SEED"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn from_env_defaults() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_env();

        let config = LarderConfig::from_env().unwrap();
        assert_eq!(config.pantry_path, PathBuf::from("./pantry.json"));
        assert!(config.recipe_dir.is_none());
        assert!(config.rng_seed.is_none());
    }

    #[test]
    fn from_env_with_all_vars() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_env();

        std::env::set_var("LARDER_PANTRY_PATH", "/data/pantry.json");
        std::env::set_var("LARDER_RECIPE_DIR", "/data/recipes");
        std::env::set_var("LARDER_RNG_SEED", "42");

        let config = LarderConfig::from_env().unwrap();
        assert_eq!(config.pantry_path, PathBuf::from("/data/pantry.json"));
        assert_eq!(config.recipe_dir, Some(PathBuf::from("/data/recipes")));
        assert_eq!(config.rng_seed, Some(42));

        clear_env();
    }

    #[test]
    fn from_env_invalid_seed() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_env();

        std::env::set_var("LARDER_RNG_SEED", "not-a-number");
        let result = LarderConfig::from_env();
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("LARDER_RNG_SEED"));

        clear_env();
    }

    #[test]
    fn recipe_files_prefers_explicit_paths() {
        let config = LarderConfig {
            pantry_path: PathBuf::from("pantry.json"),
            recipe_dir: Some(PathBuf::from("/does/not/exist")),
            rng_seed: None,
        };
        let explicit = vec![PathBuf::from("soup.txt")];
        assert_eq!(config.recipe_files(&explicit).unwrap(), explicit);
    }

    #[test]
    fn recipe_files_scans_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::write(dir.path().join("notes.md"), "").unwrap();

        let config = LarderConfig {
            pantry_path: PathBuf::from("pantry.json"),
            recipe_dir: Some(dir.path().to_path_buf()),
            rng_seed: None,
        };
        let files = config.recipe_files(&[]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn recipe_files_without_directory_is_empty() {
        let config = LarderConfig {
            pantry_path: PathBuf::from("pantry.json"),
            recipe_dir: None,
            rng_seed: None,
        };
        assert!(config.recipe_files(&[]).unwrap().is_empty());
    }
}
