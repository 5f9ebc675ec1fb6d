use grimoire_model::{Category, Efficiency};
use serde::Serialize;

/// What to base a generated spell on.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    pub prompt: Option<String>,
    pub seed: Option<u64>,
    pub bloodline: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ElementMapping {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    pub template_element: String,
    pub candidates: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EfficiencyReport {
    pub bloodline: String,
    pub element: String,
    pub efficiency: Efficiency,
}

#[derive(Debug, Clone, Serialize)]
pub struct VocabRow {
    pub category: Category,
    pub name: String,
    pub affix: String,
    pub synonyms: Vec<String>,
}
