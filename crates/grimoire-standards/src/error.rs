use std::path::PathBuf;

use grimoire_model::{Category, ModelError};

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML table {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid duration pattern for {component} in {path}: {source}")]
    InvalidPattern {
        path: PathBuf,
        component: String,
        #[source]
        source: ModelError,
    },

    #[error("unknown category {name} in {path}")]
    UnknownCategory { path: PathBuf, name: String },

    #[error("unknown affinity tier {label} for bloodline {bloodline}")]
    UnknownTier { bloodline: String, label: String },

    #[error("vocabulary is missing category {category}")]
    MissingCategory { category: Category },

    #[error("vocabulary category {category} has no entries")]
    EmptyCategory { category: Category },

    #[error("default {category} component {name} is not in the vocabulary")]
    MissingDefault { category: Category, name: String },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn toml(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Toml {
            path: path.into(),
            source,
        }
    }
}
