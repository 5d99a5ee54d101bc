//! Persisted user preferences.
//!
//! The only preference is the display language. Stores load once when
//! created and write through on every change; callers pass the language on
//! explicitly rather than reading it from a global.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use super::models::Language;

/// Parses a language code or display name.
///
/// # Errors
///
/// Returns [`Error::UnknownLanguage`] when nothing matches.
pub fn parse_language(string: &str) -> Result<Language> {
    Language::parse(string).ok_or_else(|| Error::UnknownLanguage(string.to_string()))
}

pub trait PreferenceStore {
    fn language(&self) -> Language;

    /// Changes the language and persists it.
    ///
    /// # Errors
    ///
    /// Returns an error if the new value cannot be persisted. The in-memory
    /// value is left unchanged in that case.
    fn set_language(&mut self, language: Language) -> Result<()>;
}

/// Keeps the preference in memory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryPreferenceStore {
    language: Language,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self { language }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn language(&self) -> Language {
        self.language
    }

    fn set_language(&mut self, language: Language) -> Result<()> {
        self.language = language;
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceFile {
    language: Option<String>,
}

/// Keeps the preference in a small TOML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePreferenceStore {
    path: PathBuf,
    language: Language,
}

impl FilePreferenceStore {
    /// Loads the preference file at `path`, falling back to `default` when
    /// the file does not exist or does not name a language.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, is not valid
    /// TOML, or names an unknown language.
    pub fn open(path: impl Into<PathBuf>, default: Language) -> Result<Self> {
        let path = path.into();
        let language = Self::load(&path)?.unwrap_or(default);
        tracing::debug!(path = %path.display(), %language, "loaded preferences");
        Ok(Self { path, language })
    }

    /// Writes `language` to `path`, replacing whatever the file held.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its parent directory cannot be written.
    pub fn create(path: impl Into<PathBuf>, language: Language) -> Result<Self> {
        let store = Self { path: path.into(), language };
        store.save(language)?;
        tracing::info!(path = %store.path.display(), %language, "language preference written");
        Ok(store)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<Option<Language>> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(Error::PreferenceRead { path: path.to_path_buf(), source });
            }
        };

        let file: PreferenceFile = toml::from_str(&contents).map_err(|error| Error::PreferenceParse {
            path: path.to_path_buf(),
            reason: error.message().to_string(),
        })?;

        file.language
            .map(|code| {
                Language::parse(&code).ok_or_else(|| Error::PreferenceParse {
                    path: path.to_path_buf(),
                    reason: format!("unknown language `{code}`"),
                })
            })
            .transpose()
    }

    fn save(&self, language: Language) -> Result<()> {
        let write_error = |source: std::io::Error| Error::PreferenceWrite { path: self.path.clone(), source };

        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }

        let file = PreferenceFile { language: Some(language.code().to_string()) };
        let contents = toml::to_string(&file).map_err(|error| Error::PreferenceParse {
            path: self.path.clone(),
            reason: error.to_string(),
        })?;

        std::fs::write(&self.path, contents).map_err(write_error)
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn language(&self) -> Language {
        self.language
    }

    fn set_language(&mut self, language: Language) -> Result<()> {
        self.save(language)?;
        tracing::info!(path = %self.path.display(), %language, "language preference changed");
        self.language = language;
        Ok(())
    }
}
