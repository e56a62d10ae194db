//! # Repobrief Context
//!
//! Assembles the briefing context from file evidence and a classification:
//! resolves the entry point, excerpts the dependency manifest, selects key
//! files, and renders a bounded structure tree.
//!
//! Assembly is deterministic and never fails — an unreadable file yields a
//! placeholder preview for that file only.

mod preview;
mod tree;

pub use preview::{read_preview, PREVIEW_UNAVAILABLE};
pub use tree::render_structure;

use repobrief_classifier::ProjectClassification;
use repobrief_scanner::FileRecord;
use serde::{Deserialize, Serialize};
use std::path::Path;

const ENTRY_PREVIEW_LINES: usize = 50;
const DEPENDENCY_EXCERPT_LINES: usize = 30;
const KEY_FILE_PREVIEW_LINES: usize = 10;
const MAX_KEY_FILES: usize = 5;
const MAX_KEY_FILE_DEPTH: usize = 2;

/// Manifest filenames eligible for the dependency excerpt, one per
/// supported ecosystem. First match in traversal order wins.
const MANIFEST_FILENAMES: &[&str] = &[
    "package.json",
    "requirements.txt",
    "Cargo.toml",
    "go.mod",
    "Gemfile",
    "setup.py",
    "pyproject.toml",
];

/// Extensions qualifying a shallow file as a key-file candidate
const SOURCE_EXTENSIONS: &[&str] = &[".js", ".py", ".ts", ".tsx", ".jsx", ".go", ".rs"];

/// A shallow source file selected as likely important, with a short preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFile {
    pub path: String,
    pub preview: String,
}

/// Everything the inference engine (local or remote) is allowed to see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefingContext {
    pub type_label: String,
    pub language_label: String,
    pub entry_point: Option<String>,
    pub entry_preview: Option<String>,
    pub dependency_excerpt: Option<String>,
    pub structure_text: String,
    pub key_files: Vec<KeyFile>,
    pub total_files: usize,
}

/// Combine raw evidence with a classification into a briefing context.
pub fn assemble(
    root: &Path,
    records: &[FileRecord],
    classification: &ProjectClassification,
) -> BriefingContext {
    let entry_point = resolve_entry_point(records, &classification.entry_candidates);
    let entry_preview = entry_point
        .as_deref()
        .map(|path| read_preview(root, path, ENTRY_PREVIEW_LINES));

    let dependency_excerpt = records
        .iter()
        .find(|r| MANIFEST_FILENAMES.contains(&r.filename.as_str()))
        .map(|r| read_preview(root, &r.path, DEPENDENCY_EXCERPT_LINES));

    let key_files = select_key_files(root, records);

    if let Some(path) = entry_point.as_deref() {
        log::debug!("Resolved entry point {path}");
    }

    BriefingContext {
        type_label: classification.type_label.clone(),
        language_label: classification.language_label.clone(),
        entry_point,
        entry_preview,
        dependency_excerpt,
        structure_text: render_structure(records),
        key_files,
        total_files: records.len(),
    }
}

/// First candidate matching a record by equality or segment-boundary
/// suffix. `app.py` matches `src/app.py` but not `webapp.py`.
fn resolve_entry_point(records: &[FileRecord], candidates: &[String]) -> Option<String> {
    for candidate in candidates {
        let suffix = format!("/{candidate}");
        if let Some(record) = records
            .iter()
            .find(|r| r.path == *candidate || r.path.ends_with(&suffix))
        {
            return Some(record.path.clone());
        }
    }
    None
}

/// Shallow source files, largest first. Size ties keep traversal order.
fn select_key_files(root: &Path, records: &[FileRecord]) -> Vec<KeyFile> {
    let mut shallow: Vec<&FileRecord> = records
        .iter()
        .filter(|r| {
            r.depth() <= MAX_KEY_FILE_DEPTH && SOURCE_EXTENSIONS.contains(&r.extension.as_str())
        })
        .collect();
    // Vec::sort_by is stable, which the tie rule depends on
    shallow.sort_by(|a, b| b.size.cmp(&a.size));

    shallow
        .into_iter()
        .take(MAX_KEY_FILES)
        .map(|r| KeyFile {
            path: r.path.clone(),
            preview: read_preview(root, &r.path, KEY_FILE_PREVIEW_LINES),
        })
        .collect()
}
