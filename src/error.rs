use std::path::PathBuf;

/// The primary error type for all operations in the `sitepack` crate.
#[derive(Debug)]
pub enum PackagerError {
    /// The source directory does not exist or is not a directory.
    MissingSource { path: PathBuf },

    /// An I/O error occurred, typically while reading or writing a file.
    /// Includes the path where the error happened.
    Io { source: std::io::Error, path: PathBuf },

    /// An error occurred when trying to strip a prefix from a file path.
    StripPrefix { prefix: PathBuf, path: PathBuf },

    /// An error reported by the directory walker during traversal.
    Walk(walkdir::Error),

    /// An error from the underlying `zip` crate while writing or reading an archive.
    Zip(zip::result::ZipError),
}

impl std::fmt::Display for PackagerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackagerError::MissingSource { path } => {
                write!(f, "Source directory '{}' not found", path.display())
            }
            PackagerError::Io { source, path } => {
                write!(f, "I/O error on path '{}': {}", path.display(), source)
            }
            PackagerError::StripPrefix { prefix, path } => {
                write!(f, "Could not strip prefix '{}' from path '{}'", prefix.display(), path.display())
            }
            PackagerError::Walk(e) => write!(f, "Directory traversal error: {}", e),
            PackagerError::Zip(e) => write!(f, "Archive error: {}", e),
        }
    }
}

impl std::error::Error for PackagerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PackagerError::Io { source, .. } => Some(source),
            PackagerError::Walk(e) => Some(e),
            PackagerError::Zip(e) => Some(e),
            _ => None,
        }
    }
}

impl From<walkdir::Error> for PackagerError {
    fn from(err: walkdir::Error) -> Self {
        PackagerError::Walk(err)
    }
}

impl From<zip::result::ZipError> for PackagerError {
    fn from(err: zip::result::ZipError) -> Self {
        PackagerError::Zip(err)
    }
}

// Generic IO error conversion that doesn't require a path
impl From<std::io::Error> for PackagerError {
    fn from(err: std::io::Error) -> Self {
        PackagerError::Io { source: err, path: PathBuf::new() } // Generic path
    }
}
