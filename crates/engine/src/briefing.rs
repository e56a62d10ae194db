use serde::{Deserialize, Serialize};

/// A file the briefing calls out, with the reason it matters.
///
/// Serialized as `{file, why}` to match the report contract the remote
/// service answers with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNote {
    pub file: String,
    #[serde(rename = "why")]
    pub reason: String,
}

impl FileNote {
    pub fn new(file: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            reason: reason.into(),
        }
    }
}

/// The structured briefing report. Both the local engine and the remote
/// service produce this shape; the presentation layer only does layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Briefing {
    pub purpose: String,
    pub how_to_run: String,
    /// Up to 5 files worth reading first
    pub core_files: Vec<FileNote>,
    /// Up to 5 conventionally low-risk directories
    #[serde(rename = "safe_files")]
    pub safe_areas: Vec<String>,
    /// Up to 4 keyword-derived risky entries, plus an additive
    /// entry-point entry when one was resolved
    pub dangerous_files: Vec<FileNote>,
    pub data_flow: String,
    #[serde(rename = "start_editing")]
    pub start_steps: Vec<String>,
}
