//! Application configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::constants::APP_NAME;
use super::error::{Error, Result};
use super::models::Language;

const CONFIG_FILE_NAME: &str = "config.toml";
const PREFERENCES_FILE_NAME: &str = "preferences.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Language used until the user picks one.
    pub default_language: Language,
    /// Where the language preference is persisted.
    pub preferences_path: PathBuf,
}

/// On-disk shape of `config.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    default_language: Option<String>,
    preferences_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            preferences_path: Self::config_dir()
                .map_or_else(|| PathBuf::from(PREFERENCES_FILE_NAME), |dir| dir.join(PREFERENCES_FILE_NAME)),
        }
    }
}

impl Config {
    /// Platform configuration directory for this application, if the home
    /// directory can be determined.
    pub fn config_dir() -> Option<PathBuf> {
        directories::BaseDirs::new().map(|dirs| dirs.config_dir().join(APP_NAME))
    }

    /// Loads `explicit` if given, otherwise the platform config file if it
    /// exists, otherwise defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected file cannot be read or parsed. A
    /// missing platform file is not an error; a missing explicit file is.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match Self::config_dir().map(|dir| dir.join(CONFIG_FILE_NAME)) {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// names an unknown language.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let file: ConfigFile = toml::from_str(&contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Self::from_config_file(file)
    }

    fn from_config_file(file: ConfigFile) -> Result<Self> {
        let mut config = Self::default();

        if let Some(code) = file.default_language {
            config.default_language = Language::parse(&code).ok_or(Error::UnknownLanguage(code))?;
        }
        if let Some(path) = file.preferences_path {
            config.preferences_path = path;
        }

        Ok(config)
    }
}
