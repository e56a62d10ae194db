use crate::error::{Result, ScanError};
use crate::record::FileRecord;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Scanner producing the evidence list for classification
pub struct ProjectScanner {
    root: PathBuf,
}

impl ProjectScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Walk the project and collect file metadata (.gitignore aware).
    ///
    /// Build output, dependency caches, and byte-compiled artifacts are
    /// excluded, as is any file over 1 MiB. Records come back in walker
    /// traversal order with root-relative paths.
    pub fn scan(&self) -> Result<Vec<FileRecord>> {
        if !self.root.is_dir() {
            return Err(ScanError::InvalidPath(self.root.display().to_string()));
        }

        let mut records = Vec::new();

        let root = self.root.clone();
        let mut builder = WalkBuilder::new(&self.root);
        builder
            .hidden(true) // dotfiles carry no classification signal
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true);
        builder.filter_entry(move |entry| !ProjectScanner::is_ignored_scope(entry.path(), &root));

        for result in builder.build() {
            match result {
                Ok(entry) => {
                    let Some(file_type) = entry.file_type() else {
                        continue;
                    };
                    if !file_type.is_file() {
                        continue;
                    }

                    let path = entry.path();
                    let size = match entry.metadata() {
                        Ok(meta) => meta.len(),
                        Err(e) => {
                            log::warn!("Failed to stat {}: {e}", path.display());
                            continue;
                        }
                    };
                    if size > MAX_FILE_SIZE_BYTES {
                        log::debug!(
                            "Skipping large file {} ({} bytes > {})",
                            path.display(),
                            size,
                            MAX_FILE_SIZE_BYTES
                        );
                        continue;
                    }

                    if Self::is_noise_file(path) {
                        log::debug!("Skipping artifact {}", path.display());
                        continue;
                    }

                    let Ok(relative) = path.strip_prefix(&self.root) else {
                        continue;
                    };
                    records.push(FileRecord::new(relative, size));
                }
                Err(e) => log::warn!("Failed to read entry: {e}"),
            }
        }

        log::info!("Found {} files", records.len());
        Ok(records)
    }

    fn is_ignored_scope(path: &Path, root: &Path) -> bool {
        if let Ok(relative) = path.strip_prefix(root) {
            for component in relative.components() {
                if let std::path::Component::Normal(name) = component {
                    let lowered = name.to_string_lossy().to_lowercase();
                    if IGNORED_SCOPES.iter().any(|ignored| ignored == &lowered) {
                        return true;
                    }
                }
            }
        }
        false
    }

    fn is_noise_file(path: &Path) -> bool {
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if ext.eq_ignore_ascii_case("pyc") {
                return true;
            }
        }
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| {
                NOISE_FILE_NAMES
                    .iter()
                    .any(|candidate| name.eq_ignore_ascii_case(candidate))
            })
    }
}

const IGNORED_SCOPES: &[&str] = &[
    // VCS / tooling
    ".git",
    // caches / builds
    "node_modules",
    "dist",
    "build",
    ".next",
    "coverage",
    "__pycache__",
    "venv",
    "env",
    "target",
];

const NOISE_FILE_NAMES: &[&str] = &[".ds_store"];

const MAX_FILE_SIZE_BYTES: u64 = 1_048_576; // 1 MiB

#[cfg(test)]
mod tests {
    use super::ProjectScanner;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn skips_ignored_directories() {
        let temp = tempdir().unwrap();
        let deps = temp.path().join("node_modules").join("pkg");
        fs::create_dir_all(&deps).unwrap();
        fs::write(deps.join("index.js"), b"module.exports = {}").unwrap();
        fs::write(temp.path().join("main.rs"), b"fn main() {}").unwrap();

        let records = ProjectScanner::new(temp.path()).scan().unwrap();

        assert!(records.iter().all(|r| !r.path.contains("node_modules")));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "main.rs");
    }

    #[test]
    fn skips_oversized_files() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("blob.bin"), vec![0u8; 1_100_000]).unwrap();
        fs::write(temp.path().join("app.py"), b"print('hi')").unwrap();

        let records = ProjectScanner::new(temp.path()).scan().unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].filename, "app.py");
    }

    #[test]
    fn skips_byte_compiled_artifacts() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("module.pyc"), b"\x00").unwrap();
        fs::write(temp.path().join("module.py"), b"x = 1").unwrap();

        let records = ProjectScanner::new(temp.path()).scan().unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].extension, ".py");
    }

    #[test]
    fn missing_root_is_an_error() {
        let temp = tempdir().unwrap();
        let gone = temp.path().join("nope");
        assert!(ProjectScanner::new(&gone).scan().is_err());
    }
}
