use std::fs;
use std::path::Path;

/// Placeholder substituted when a preview cannot be produced.
pub const PREVIEW_UNAVAILABLE: &str = "[unable to read file]";

/// Read up to the first `max_lines` lines of a file as text.
///
/// Any read failure, including non-UTF-8 content, degrades to the
/// placeholder for this file only; assembly never aborts on a bad file.
pub fn read_preview(root: &Path, relative: &str, max_lines: usize) -> String {
    match fs::read_to_string(root.join(relative)) {
        Ok(content) => first_lines(&content, max_lines),
        Err(e) => {
            log::debug!("Preview unavailable for {relative}: {e}");
            PREVIEW_UNAVAILABLE.to_string()
        }
    }
}

pub fn first_lines(content: &str, max_lines: usize) -> String {
    content
        .split('\n')
        .take(max_lines)
        .collect::<Vec<_>>()
        .join("\n")
}
