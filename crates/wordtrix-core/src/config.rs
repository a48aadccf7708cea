use std::path::{Path, PathBuf};

use crate::error::CoreError;

/// Database file name used when nothing else is configured.
pub const DEFAULT_DB_FILE: &str = "words.json";

/// Environment variable overriding the database location.
pub const DB_ENV_VAR: &str = "WORDTRIX_DB";

/// Where the database should be read from and written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
}

impl Default for Config {
    /// `words.json` in the current directory.
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE),
        }
    }
}

impl Config {
    /// Resolve the database path, first match wins:
    ///
    /// 1. `explicit` (the `--db` flag),
    /// 2. `env_override` (the value of `WORDTRIX_DB`, if set and non-empty),
    /// 3. the per-user data directory when `per_user` is set,
    /// 4. `words.json` in the current directory.
    pub fn resolve(
        explicit: Option<&Path>,
        env_override: Option<&str>,
        per_user: bool,
    ) -> Result<Self, CoreError> {
        if let Some(path) = explicit {
            return Ok(Self {
                db_path: path.to_path_buf(),
            });
        }

        if let Some(path) = env_override.filter(|s| !s.trim().is_empty()) {
            return Ok(Self {
                db_path: PathBuf::from(path),
            });
        }

        if per_user {
            return Self::per_user();
        }

        Ok(Self::default())
    }

    /// Like [`Config::resolve`], reading `WORDTRIX_DB` from the process
    /// environment.
    pub fn from_env(explicit: Option<&Path>, per_user: bool) -> Result<Self, CoreError> {
        let env_override = std::env::var(DB_ENV_VAR).ok();
        Self::resolve(explicit, env_override.as_deref(), per_user)
    }

    /// `<data dir>/wordtrix/words.json`, e.g. `~/.local/share/wordtrix/words.json`.
    pub fn per_user() -> Result<Self, CoreError> {
        let dir = dirs::data_dir().ok_or(CoreError::NoDataDir)?;
        Ok(Self {
            db_path: dir.join("wordtrix").join(DEFAULT_DB_FILE),
        })
    }
}
