use serde::{Deserialize, Serialize};
use std::path::Path;

/// Metadata for one discovered file, relative to the scan root.
///
/// Paths are stored forward-slash-normalized so that downstream
/// comparisons behave the same on every platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Relative path from the scan root, e.g. `src/main.rs`
    pub path: String,
    /// Final path component, e.g. `main.rs`
    pub filename: String,
    /// Extension including the leading dot (`.rs`), or empty
    pub extension: String,
    /// File size in bytes
    pub size: u64,
    /// Parent directory relative to the root, or empty for root-level files
    pub directory: String,
}

impl FileRecord {
    /// Build a record from a root-relative path and a size.
    pub fn new(relative: &Path, size: u64) -> Self {
        let path = normalize_separators(relative);
        let filename = relative
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = relative
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default();
        let directory = relative
            .parent()
            .map(normalize_separators)
            .unwrap_or_default();

        Self {
            path,
            filename,
            extension,
            size,
            directory,
        }
    }

    /// Path split on `/`, useful for depth checks and tree building.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/')
    }

    /// Number of path segments (a root-level file has depth 1).
    pub fn depth(&self) -> usize {
        self.segments().count()
    }
}

fn normalize_separators(path: &Path) -> String {
    let raw = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        raw.into_owned()
    } else {
        raw.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn record_fields_from_nested_path() {
        let record = FileRecord::new(&PathBuf::from("src/app/main.rs"), 120);
        assert_eq!(record.path, "src/app/main.rs");
        assert_eq!(record.filename, "main.rs");
        assert_eq!(record.extension, ".rs");
        assert_eq!(record.size, 120);
        assert_eq!(record.directory, "src/app");
        assert_eq!(record.depth(), 3);
    }

    #[test]
    fn record_without_extension() {
        let record = FileRecord::new(&PathBuf::from("Gemfile"), 10);
        assert_eq!(record.extension, "");
        assert_eq!(record.directory, "");
        assert_eq!(record.depth(), 1);
    }

    #[test]
    fn dotfile_keeps_empty_extension() {
        // Path::extension treats `.env` as extensionless
        let record = FileRecord::new(&PathBuf::from(".env"), 1);
        assert_eq!(record.filename, ".env");
        assert_eq!(record.extension, "");
    }
}
