//! # Repobrief Scanner
//!
//! Filesystem traversal producing the evidence list for classification.
//!
//! ```text
//! Directory
//!     │
//!     └──> ProjectScanner (.gitignore aware, caches/artifacts excluded)
//!            └─> Vec<FileRecord> (relative path, name, extension, size)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use repobrief_scanner::{ProjectScanner, Result};
//!
//! fn main() -> Result<()> {
//!     let records = ProjectScanner::new("/path/to/project").scan()?;
//!     println!("Found {} files", records.len());
//!     Ok(())
//! }
//! ```

mod error;
mod record;
mod scanner;

pub use error::{Result, ScanError};
pub use record::FileRecord;
pub use scanner::ProjectScanner;
