use std::env;
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use starfall_engine::{PopulationCounts, SceneConfig};

/// Path of an optional JSON tuning file.
pub const TUNING_ENV: &str = "STARFALL_TUNING";
/// Fixed seed for a reproducible scene.
pub const SEED_ENV: &str = "STARFALL_SEED";

/// Scene config from the tuning file named by `STARFALL_TUNING`, or the
/// defaults. The command-line counts always win over the file.
pub fn load_config(counts: PopulationCounts) -> Result<SceneConfig> {
    match env::var_os(TUNING_ENV) {
        Some(path) => {
            let path = Path::new(&path);
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read tuning file {}", path.display()))?;
            let config = config_from_json(&text, counts)
                .with_context(|| format!("failed to load tuning file {}", path.display()))?;
            log::info!("Loaded tuning from {}", path.display());
            Ok(config)
        }
        None => Ok(SceneConfig::with_counts(counts)),
    }
}

pub fn config_from_json(text: &str, counts: PopulationCounts) -> Result<SceneConfig> {
    let mut config = SceneConfig::from_json(text)?;
    config.counts = counts;
    Ok(config)
}

/// Seed from `STARFALL_SEED`, otherwise from the system clock.
pub fn resolve_seed() -> Result<u64> {
    match env::var(SEED_ENV) {
        Ok(text) => parse_seed(&text),
        Err(env::VarError::NotPresent) => Ok(clock_seed()),
        Err(e) => Err(e).with_context(|| format!("{} is not valid unicode", SEED_ENV)),
    }
}

pub fn parse_seed(text: &str) -> Result<u64> {
    text.trim()
        .parse()
        .with_context(|| format!("{} must be an unsigned integer, got '{}'", SEED_ENV, text))
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_override_tuning_file() {
        let json = r#"{ "counts": { "nebula": 9, "stars": 9, "bodies": 9, "debris": 9 }, "tick_ms": 20 }"#;
        let config = config_from_json(json, PopulationCounts::new(1, 2, 3, 4)).unwrap();
        assert_eq!(config.counts, PopulationCounts::new(1, 2, 3, 4));
        assert_eq!(config.tick_ms, 20);
    }

    #[test]
    fn invalid_tuning_is_an_error() {
        let err = config_from_json(r#"{ "tick_ms": 0 }"#, PopulationCounts::default()).unwrap_err();
        assert!(err.to_string().contains("tick_ms"), "{}", err);
    }

    #[test]
    fn seeds() {
        assert_eq!(parse_seed("42").unwrap(), 42);
        assert_eq!(parse_seed(" 7\n").unwrap(), 7);
        assert!(parse_seed("-1").is_err());
        assert!(parse_seed("seed").is_err());
    }
}
