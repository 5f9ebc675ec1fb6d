use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown component category: {0}")]
    UnknownCategory(String),
    #[error("unknown affinity tier label: {0}")]
    UnknownTier(String),
    #[error("invalid duration pattern for {component}: {source}")]
    InvalidPattern {
        component: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
