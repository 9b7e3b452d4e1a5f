//! Packaging configuration.
//!
//! The source and output paths used to be hardcoded working-directory-relative
//! strings; keeping them in an explicit struct lets tests run the packaging
//! routine against temporary directories.

use std::path::PathBuf;

/// Default build output directory, relative to the working directory.
pub const DEFAULT_SOURCE_DIR: &str = "dist";
/// Default name of the archive written to the working directory.
pub const DEFAULT_OUTPUT_NAME: &str = "site-upload.zip";

/// Paths for one packaging run.
#[derive(Debug, Clone)]
pub struct PackConfig {
    /// The directory whose contents are packaged. Must already exist.
    pub source_dir: PathBuf,
    /// The archive file to write. Any existing file here is replaced.
    pub output_path: PathBuf,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_NAME),
        }
    }
}
