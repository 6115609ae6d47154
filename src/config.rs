use std::path::{Path, PathBuf};

use log::info;

use crate::error::PipsError;

pub const WORKERS_KEY: &str = "PIPS_WORKERS";
pub const ENUMERATE_LIMIT_KEY: &str = "PIPS_ENUMERATE_LIMIT";

/// Runtime settings, read from the process environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Number of threads used by the parallel solver.
    pub workers: usize,
    /// Maximum number of boards printed by the `enumerate` command.
    pub enumerate_limit: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            workers: rayon::current_num_threads(),
            enumerate_limit: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Settings, PipsError> {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the settings from a key lookup, falling back to the defaults for
    /// missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Settings, PipsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        if let Some(value) = lookup(WORKERS_KEY) {
            settings.workers = parse_count(WORKERS_KEY, &value)?;
        }
        if let Some(value) = lookup(ENUMERATE_LIMIT_KEY) {
            settings.enumerate_limit = Some(parse_count(ENUMERATE_LIMIT_KEY, &value)?);
        }
        Ok(settings)
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize, PipsError> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(PipsError::InvalidSetting {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Path of the environment file for `env`, e.g. `.env/test.env`.
pub fn env_file(env: &str) -> PathBuf {
    Path::new(".env").join(format!("{}.env", env))
}

/// Load `.env/<env>.env` into the process environment if the file exists.
/// Returns whether a file was loaded.
pub fn load_env_file(env: &str) -> Result<bool, PipsError> {
    let path = env_file(env);
    if !path.exists() {
        return Ok(false);
    }
    dotenvy::from_path(&path)?;
    info!("loaded settings from {}", path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::error::Error;

    use super::*;

    #[test]
    fn test_defaults() -> Result<(), Box<dyn Error>> {
        let settings = Settings::from_lookup(|_| None)?;
        assert_eq!(settings, Settings::default());
        assert!(settings.workers >= 1);
        assert_eq!(settings.enumerate_limit, None);
        Ok(())
    }

    #[test]
    fn test_from_lookup() -> Result<(), Box<dyn Error>> {
        let vars: HashMap<&str, &str> =
            HashMap::from([(WORKERS_KEY, "3"), (ENUMERATE_LIMIT_KEY, " 100 ")]);
        let settings = Settings::from_lookup(|key| vars.get(key).map(|v| v.to_string()))?;
        assert_eq!(settings.workers, 3);
        assert_eq!(settings.enumerate_limit, Some(100));
        Ok(())
    }

    #[test]
    fn test_invalid_setting() {
        for bad in ["zero", "0", "-2", ""] {
            let res = Settings::from_lookup(|key| (key == WORKERS_KEY).then(|| bad.to_string()));
            match res {
                Err(PipsError::InvalidSetting { key, value }) => {
                    assert_eq!(key, WORKERS_KEY);
                    assert_eq!(value, bad);
                }
                other => panic!("expected an invalid setting, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_env_file() -> Result<(), Box<dyn Error>> {
        assert_eq!(env_file("test"), Path::new(".env/test.env"));
        assert!(!load_env_file("no-such-environment")?);
        Ok(())
    }
}
