//! Start-up configuration.

use crate::Error;
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::Path;
use tracing::warn;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Dotenv file read from the working directory.
pub const ENV_FILE: &str = ".env";

/// Configuration read once at process start.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    /// Create a configuration from an explicit key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Read the API key from the process environment, falling back to `.env`.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_env_file(ENV_FILE, |key| env::var(key).ok())
    }

    /// Read the API key through `process`, falling back to the dotenv file at `path`.
    ///
    /// Values from `process` take precedence. A missing file is not an error; an
    /// unreadable or malformed one is logged and skipped.
    pub fn from_env_file<P, F>(path: P, process: F) -> Result<Self, Error>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let file_vars = read_env_file(path.as_ref());
        Self::from_lookup(|key| process(key).or_else(|| file_vars.get(key).cloned()))
    }

    /// Build a configuration from any key/value lookup.
    ///
    /// Surrounding whitespace is stripped from the key before it is stored.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).ok_or_else(|| {
            Error::config(format!("{API_KEY_VAR} environment variable is required"))
        })?;

        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(Error::config(format!(
                "{API_KEY_VAR} environment variable is empty"
            )));
        }

        Ok(Self::new(api_key))
    }
}

fn read_env_file(path: &Path) -> HashMap<String, String> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => return HashMap::new(),
        Err(e) => {
            warn!(path = %path.display(), "ignoring unreadable env file: {e}");
            return HashMap::new();
        }
    };

    iter.filter_map(|item| match item {
        Ok(pair) => Some(pair),
        Err(e) => {
            warn!(path = %path.display(), "skipping malformed env file entry: {e}");
            None
        }
    })
    .collect()
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .finish()
    }
}
