//! Bloodline/element affinity tiers.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Label reported when a bloodline and element share a name.
pub const SELF_AFFINITY_LABEL: &str = "Best 100%";

/// The five affinity tiers a bloodline can list elements under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AffinityTier {
    #[serde(rename = "Best 80%")]
    Best,
    #[serde(rename = "Good 60%")]
    Good,
    #[serde(rename = "Moderate 40%")]
    Moderate,
    #[serde(rename = "Weak 20%")]
    Weak,
    #[serde(rename = "Neutral 50%")]
    Neutral,
}

impl AffinityTier {
    /// Tiers in the order they are checked; the first tier listing an element wins.
    pub const PRIORITY: [AffinityTier; 5] = [
        AffinityTier::Best,
        AffinityTier::Good,
        AffinityTier::Moderate,
        AffinityTier::Weak,
        AffinityTier::Neutral,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AffinityTier::Best => "Best 80%",
            AffinityTier::Good => "Good 60%",
            AffinityTier::Moderate => "Moderate 40%",
            AffinityTier::Weak => "Weak 20%",
            AffinityTier::Neutral => "Neutral 50%",
        }
    }

    /// Percentage parsed from the tier label.
    pub fn percentage(&self) -> u8 {
        percentage_from_label(self.label()).unwrap_or(NEUTRAL_PERCENTAGE)
    }
}

const NEUTRAL_PERCENTAGE: u8 = 50;

impl fmt::Display for AffinityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AffinityTier {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        AffinityTier::PRIORITY
            .into_iter()
            .find(|tier| tier.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownTier(s.to_string()))
    }
}

/// Extract the integer percentage from a label such as `"Good 60%"`.
///
/// Takes the last run of digits that is immediately followed by `%`.
pub fn percentage_from_label(label: &str) -> Option<u8> {
    let end = label.find('%')?;
    let head = &label[..end];
    let start = head
        .rfind(|ch: char| !ch.is_ascii_digit())
        .map_or(0, |idx| idx + 1);
    head[start..].parse().ok()
}

/// Result of an efficiency lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Efficiency {
    pub label: String,
    pub percentage: u8,
}

impl Efficiency {
    pub fn new(label: impl Into<String>, percentage: u8) -> Self {
        Self {
            label: label.into(),
            percentage,
        }
    }

    pub fn from_tier(tier: AffinityTier) -> Self {
        Self::new(tier.label(), tier.percentage())
    }

    pub fn neutral() -> Self {
        Self::from_tier(AffinityTier::Neutral)
    }

    pub fn self_affinity() -> Self {
        Self::new(
            SELF_AFFINITY_LABEL,
            percentage_from_label(SELF_AFFINITY_LABEL).unwrap_or(100),
        )
    }
}

impl fmt::Display for Efficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// bloodline -> tier -> element names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BloodlineAffinityTable {
    bloodlines: BTreeMap<String, BTreeMap<AffinityTier, Vec<String>>>,
}

impl BloodlineAffinityTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<I, S>(&mut self, bloodline: &str, tier: AffinityTier, elements: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bloodlines
            .entry(bloodline.to_string())
            .or_default()
            .insert(tier, elements.into_iter().map(Into::into).collect());
    }

    pub fn with<I, S>(mut self, bloodline: &str, tier: AffinityTier, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(bloodline, tier, elements);
        self
    }

    /// Elements listed for a bloodline under one tier.
    pub fn elements(&self, bloodline: &str, tier: AffinityTier) -> &[String] {
        self.bloodlines
            .get(bloodline)
            .and_then(|tiers| tiers.get(&tier))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn bloodlines(&self) -> impl Iterator<Item = &str> {
        self.bloodlines.keys().map(String::as_str)
    }

    /// Elements listed under more than one tier for the same bloodline.
    ///
    /// Such overlaps are tolerated (the highest-priority tier wins) but are
    /// worth reporting when tables are loaded.
    pub fn overlaps(&self) -> Vec<(String, String)> {
        let mut found = Vec::new();
        for (bloodline, tiers) in &self.bloodlines {
            let mut seen: Vec<&str> = Vec::new();
            for tier in AffinityTier::PRIORITY {
                for element in tiers.get(&tier).into_iter().flatten() {
                    if seen.contains(&element.as_str()) {
                        found.push((bloodline.clone(), element.clone()));
                    } else {
                        seen.push(element);
                    }
                }
            }
        }
        found
    }
}
