use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// The five component slots a spell is assembled from.
///
/// Declaration order is the canonical order used when iterating categories
/// (vocabulary listings, extraction reports, random generation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Effect,
    Element,
    Level,
    Duration,
    Range,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 5] = [
        Category::Effect,
        Category::Element,
        Category::Level,
        Category::Duration,
        Category::Range,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Effect => "Effect",
            Category::Element => "Element",
            Category::Level => "Level",
            Category::Duration => "Duration",
            Category::Range => "Range",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    /// Parse a category name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "effect" => Ok(Category::Effect),
            "element" => Ok(Category::Element),
            "level" => Ok(Category::Level),
            "duration" => Ok(Category::Duration),
            "range" => Ok(Category::Range),
            _ => Err(ModelError::UnknownCategory(s.to_string())),
        }
    }
}
