use std::path::PathBuf;

use thiserror::Error as ThisError;

/// Errors surfaced by the library.
///
/// Filtering itself is total and never produces one of these; they come from
/// parsing user input and from the preference and configuration files.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("unknown language `{0}` (expected en or de)")]
    UnknownLanguage(String),

    #[error("unknown tab `{0}` (expected all, courses, resources or exams)")]
    UnknownTab(String),

    #[error("unknown level `{0}` (expected beginner, intermediate or advanced)")]
    UnknownLevel(String),

    #[error("failed to read preferences from {path}")]
    PreferenceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write preferences to {path}")]
    PreferenceWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed preferences in {path}: {reason}")]
    PreferenceParse { path: PathBuf, reason: String },

    #[error("failed to read configuration from {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed configuration in {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
