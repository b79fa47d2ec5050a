// src/hooks/eligibility.rs

//! Extension-based filter deciding whether a changed file is significant.
//!
//! File watchers report every filesystem event, including editor swap files
//! and build artifacts; this filter keeps restart storms limited to files
//! the user actually edits. The decision is a pure function of the path
//! string: the extension either is in the allow-list or it is not. Path
//! depth and directory names play no role.

use std::path::Path;

/// File extensions the change hooks react to.
///
/// The list is deliberately data, not behavior: the CLI help prints it
/// verbatim so users can see why a change was (not) picked up.
pub const ELIGIBLE_EXTENSIONS: &[&str] = &[
    "c", "cc", "cpp", "cs", "css", "go", "h", "hpp", "html", "java", "js",
    "json", "jsx", "kt", "lua", "md", "php", "py", "rb", "rs", "scss", "sh",
    "sql", "swift", "toml", "ts", "tsx", "vue", "yaml", "yml", "zig",
];

/// Returns true iff the path's extension is in [`ELIGIBLE_EXTENSIONS`].
///
/// Paths without an extension (including dot-files like `.env`) are never
/// eligible.
pub fn is_eligible(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ELIGIBLE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}
