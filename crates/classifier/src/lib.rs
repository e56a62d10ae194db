//! # Repobrief Classifier
//!
//! Tiered project-type classification over file evidence.
//!
//! ```text
//! Vec<FileRecord>
//!     │
//!     ├──> Evidence (filenames, paths, extensions)
//!     │
//!     └──> Tier evaluation (first match in first matching tier wins)
//!          ├─> runtime-authority   (Cargo.toml, manage.py, pyproject.toml, go.mod)
//!          ├─> application-manifest (requirements.txt, Pipfile, setup.py)
//!          ├─> tooling-manifest    (package.json + framework configs)
//!          ├─> bare-ecosystem      (Gemfile)
//!          ├─> notebook-heuristic  (.ipynb with no app entry point)
//!          └─> fallback            (most frequent extension)
//! ```
//!
//! `classify` is total: the fallback tier matches unconditionally, so every
//! evidence set yields a classification. It is also deterministic — identical
//! records produce an identical result.

mod classification;
mod evidence;
mod rules;

pub use classification::ProjectClassification;
pub use evidence::Evidence;
pub use rules::{Rule, Tier, TIERS};

use repobrief_scanner::FileRecord;

/// Map file evidence to a single project classification.
pub fn classify(records: &[FileRecord]) -> ProjectClassification {
    let evidence = Evidence::new(records);
    for tier in TIERS {
        for rule in tier.rules {
            if (rule.applies)(&evidence) {
                log::debug!("Classifier matched {}/{}", tier.name, rule.name);
                return (rule.resolve)(&evidence);
            }
        }
    }
    // The fallback tier matches unconditionally, so this is unreachable;
    // it only exists to keep the function total without a panic.
    ProjectClassification::new("Unknown project", "Mixed", &[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use repobrief_scanner::FileRecord;
    use std::path::PathBuf;

    fn records(paths: &[&str]) -> Vec<FileRecord> {
        paths
            .iter()
            .map(|p| FileRecord::new(&PathBuf::from(p), 1))
            .collect()
    }

    #[test]
    fn rust_manifest_wins_over_node_manifest() {
        let evidence = records(&["Cargo.toml", "package.json", "src/main.rs"]);
        let classification = classify(&evidence);
        assert_eq!(classification.type_label, "Rust project");
        assert_eq!(classification.language_label, "Rust");
    }

    #[test]
    fn rust_project_scenario() {
        let classification = classify(&records(&["Cargo.toml", "src/main.rs"]));
        assert_eq!(classification.type_label, "Rust project");
        assert_eq!(classification.entry_candidates[0], "src/main.rs");
    }

    #[test]
    fn django_detected_from_manage_script() {
        let classification = classify(&records(&["manage.py", "app/models.py"]));
        assert_eq!(classification.type_label, "Django application");
        assert_eq!(classification.entry_candidates[0], "manage.py");
    }

    #[test]
    fn django_manage_script_in_subdirectory() {
        let classification = classify(&records(&["backend/manage.py", "requirements.txt"]));
        assert_eq!(classification.type_label, "Django application");
        // Candidate list carries the actual path, not the conventional one
        assert_eq!(classification.entry_candidates[0], "backend/manage.py");
    }

    #[test]
    fn flask_detected_from_app_module() {
        let classification = classify(&records(&["requirements.txt", "app.py"]));
        assert_eq!(classification.type_label, "Flask application");
    }

    #[test]
    fn flask_service_detected_from_module_layout() {
        let classification = classify(&records(&[
            "requirements.txt",
            "app/__init__.py",
            "app/routes/users.py",
        ]));
        assert_eq!(classification.type_label, "Flask web service");
        assert_eq!(classification.entry_candidates[0], "wsgi.py");
    }

    #[test]
    fn fastapi_detected_from_main_module() {
        let classification = classify(&records(&["requirements.txt", "main.py"]));
        assert_eq!(classification.type_label, "FastAPI application");
    }

    #[test]
    fn generic_python_without_framework_signals() {
        let classification = classify(&records(&["requirements.txt", "scripts/etl.py"]));
        assert_eq!(classification.type_label, "Python project");
    }

    #[test]
    fn nextjs_detected_from_config_file() {
        let classification = classify(&records(&[
            "package.json",
            "next.config.js",
            "pages/index.js",
        ]));
        assert_eq!(classification.type_label, "Next.js application");
    }

    #[test]
    fn vite_detected_from_config_filename_fragment() {
        let classification = classify(&records(&["package.json", "vite.config.ts"]));
        assert_eq!(classification.type_label, "Vite application");
        assert_eq!(classification.entry_candidates[0], "src/main.js");
    }

    #[test]
    fn plain_node_project_falls_through() {
        let classification = classify(&records(&["package.json", "index.js"]));
        assert_eq!(classification.type_label, "Node.js project");
    }

    #[test]
    fn ruby_gemfile_classifies_ruby() {
        let classification = classify(&records(&["Gemfile", "app.rb"]));
        assert_eq!(classification.type_label, "Ruby project");
    }

    #[test]
    fn notebooks_without_entrypoint_are_research() {
        let classification = classify(&records(&["notes.ipynb"]));
        assert_eq!(classification.type_label, "Research / analysis environment");
        assert!(classification.entry_candidates.is_empty());
    }

    #[test]
    fn notebooks_with_app_signal_are_not_research() {
        let classification = classify(&records(&["notes.ipynb", "main.py", "requirements.txt"]));
        assert_eq!(classification.type_label, "FastAPI application");
    }

    #[test]
    fn frequency_fallback_uses_most_common_extension() {
        let classification = classify(&records(&["a.md", "b.md", "c.txt"]));
        assert_eq!(classification.type_label, "Unknown project");
        assert_eq!(classification.language_label, "Files with .md extension");
        assert!(classification.entry_candidates.is_empty());
    }

    #[test]
    fn no_extensions_anywhere_is_mixed() {
        let classification = classify(&records(&["Makefile", "LICENSE"]));
        assert_eq!(classification.language_label, "Mixed");
    }

    #[test]
    fn classification_is_deterministic() {
        let evidence = records(&["package.json", "next.config.js", "pages/index.js"]);
        let first = classify(&evidence);
        let second = classify(&evidence);
        assert_eq!(first, second);
    }
}
