/*!
 * Common test utilities for the explainofun test suite
 */

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use explainofun::Config;
use explainofun::content::MemeTemplate;
use explainofun::content::memes::MemeCategory;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Deterministic random source
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Configuration without simulated latency
pub fn instant_config() -> Config {
    let mut config = Config::default();
    config.generation.simulated_delay_ms = 0;
    config
}

/// Two distinct templates for exclusion tests
pub fn two_templates() -> Vec<MemeTemplate> {
    vec![
        MemeTemplate::new("FIRST {topic}", "ONE", "a.png", MemeCategory::Confusion),
        MemeTemplate::new("SECOND {topic}", "TWO", "b.png", MemeCategory::Explanation),
    ]
}
