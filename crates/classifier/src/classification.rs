use serde::{Deserialize, Serialize};

/// Outcome of classifying a project's evidence.
///
/// Exactly one is produced per scan; the fallback tier guarantees it is
/// never partial even when no manifest of any kind exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectClassification {
    /// Human-readable project type, e.g. "Flask application"
    pub type_label: String,
    /// Human-readable language, e.g. "Python"
    pub language_label: String,
    /// Candidate entry-point paths, highest priority first
    pub entry_candidates: Vec<String>,
}

impl ProjectClassification {
    pub fn new(
        type_label: impl Into<String>,
        language_label: impl Into<String>,
        entry_candidates: &[&str],
    ) -> Self {
        Self {
            type_label: type_label.into(),
            language_label: language_label.into(),
            entry_candidates: entry_candidates.iter().map(|c| c.to_string()).collect(),
        }
    }
}
