//! # Archive Builder
//!
//! Walks a validated build directory depth-first and writes every included
//! file into a Deflate-compressed ZIP under its path relative to the source
//! root, so the archive root corresponds to the directory's contents rather
//! than the directory itself. Hidden and system-metadata entries are excluded
//! per [`crate::filter`]; excluded directories are pruned, not just skipped.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::CompressionMethod;
use zip::ZipWriter;

use crate::config::PackConfig;
use crate::filter;
use crate::PackagerError;

/// Fixed Deflate level: a balance of speed vs. size, not maximum.
pub const COMPRESSION_LEVEL: i32 = 6;

/// Outcome of a successful packaging run.
#[derive(Debug, Clone, Copy)]
pub struct PackSummary {
    /// Number of files written into the archive.
    pub files_added: u64,
    /// Size of the finished archive in bytes.
    pub archive_size: u64,
}

/// Packages the configured source directory into the configured archive path.
///
/// Any pre-existing file at the output path is deleted first so every run is a
/// clean rebuild. `on_entry` is invoked with each included file's relative
/// path, in traversal order, as it is added.
///
/// On a mid-build failure the partially written archive is removed
/// (best-effort) before the error is returned.
pub fn pack_dir<F>(config: &PackConfig, mut on_entry: F) -> Result<PackSummary, PackagerError>
where
    F: FnMut(&Path),
{
    if !config.source_dir.is_dir() {
        return Err(PackagerError::MissingSource { path: config.source_dir.clone() });
    }

    if config.output_path.exists() {
        fs::remove_file(&config.output_path).map_err(|e| PackagerError::Io {
            source: e,
            path: config.output_path.clone(),
        })?;
    }

    match build_archive(config, &mut on_entry) {
        Ok(files_added) => {
            let archive_size = fs::metadata(&config.output_path)
                .map_err(|e| PackagerError::Io { source: e, path: config.output_path.clone() })?
                .len();
            Ok(PackSummary { files_added, archive_size })
        }
        Err(e) => {
            let _ = fs::remove_file(&config.output_path);
            Err(e)
        }
    }
}

fn build_archive<F>(config: &PackConfig, on_entry: &mut F) -> Result<u64, PackagerError>
where
    F: FnMut(&Path),
{
    let out_file = File::create(&config.output_path).map_err(|e| PackagerError::Io {
        source: e,
        path: config.output_path.clone(),
    })?;
    let mut zip = ZipWriter::new(BufWriter::new(out_file));
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(COMPRESSION_LEVEL));

    let mut files_added: u64 = 0;

    let walker = WalkDir::new(&config.source_dir)
        .into_iter()
        // Prune excluded directories so their descendants are never visited.
        // The traversal root itself is always kept.
        .filter_entry(|e| {
            e.depth() == 0 || !e.file_type().is_dir() || !entry_name_excluded_dir(e.file_name())
        });

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if filter::excludes_file(&name) {
            continue;
        }

        let rel = entry
            .path()
            .strip_prefix(&config.source_dir)
            .map_err(|_| PackagerError::StripPrefix {
                prefix: config.source_dir.clone(),
                path: entry.path().to_path_buf(),
            })?;
        on_entry(rel);

        zip.start_file(zip_entry_name(rel), options)?;
        let mut src = File::open(entry.path()).map_err(|e| PackagerError::Io {
            source: e,
            path: entry.path().to_path_buf(),
        })?;
        io::copy(&mut src, &mut zip).map_err(|e| PackagerError::Io {
            source: e,
            path: entry.path().to_path_buf(),
        })?;
        files_added += 1;
    }

    let mut inner = zip.finish()?;
    inner.flush().map_err(|e| PackagerError::Io {
        source: e,
        path: config.output_path.clone(),
    })?;
    Ok(files_added)
}

fn entry_name_excluded_dir(name: &std::ffi::OsStr) -> bool {
    filter::excludes_dir(&name.to_string_lossy())
}

/// ZIP entry names always use forward slashes, regardless of host platform.
fn zip_entry_name(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
