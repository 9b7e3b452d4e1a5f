//! Fixed exclusion rules for hidden and system-metadata entries.
//!
//! Directory and file names are judged independently: an excluded directory is
//! pruned from the traversal (its descendants are never visited), an excluded
//! file is skipped on its own.

/// Filename prefix that marks an entry as hidden.
pub const HIDDEN_MARKER: char = '.';
/// Reserved system-metadata directory name (macOS ZIP resource forks).
pub const MACOS_METADATA_DIR: &str = "__MACOSX__";
/// Reserved system-metadata file suffix (Finder folder state).
pub const MACOS_METADATA_SUFFIX: &str = ".DS_Store";

/// True if a directory with this name must be pruned from the traversal.
pub fn excludes_dir(name: &str) -> bool {
    name.starts_with(HIDDEN_MARKER) || name == MACOS_METADATA_DIR
}

/// True if a file with this name must be skipped.
pub fn excludes_file(name: &str) -> bool {
    name.starts_with(HIDDEN_MARKER) || name.ends_with(MACOS_METADATA_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_names_are_excluded() {
        assert!(excludes_dir(".git"));
        assert!(excludes_dir(".hidden"));
        assert!(excludes_file(".env"));
        assert!(excludes_file(".DS_Store"));
    }

    #[test]
    fn system_metadata_names_are_excluded() {
        assert!(excludes_dir("__MACOSX__"));
        assert!(excludes_file("backup.DS_Store"));
    }

    #[test]
    fn ordinary_names_pass() {
        assert!(!excludes_dir("assets"));
        assert!(!excludes_dir("__pycache__"));
        assert!(!excludes_file("index.html"));
        assert!(!excludes_file("app.js"));
        // Suffix rule applies to files only
        assert!(!excludes_dir("old.DS_Store"));
    }
}
