//! # Integrity Verifier
//!
//! Reopens a just-written archive and checks every entry's content against the
//! CRC-32 recorded in its header. Verification is best-effort from the
//! caller's point of view: a corrupted entry or a verification error is
//! reported as a warning and never fails the packaging run.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use zip::ZipArchive;

use crate::PackagerError;

/// Result of checking every entry in an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Every entry's checksum matched its content.
    Intact { entries: u64 },
    /// The first entry whose content did not match its recorded checksum,
    /// or could not be read back at all.
    Corrupted { name: String },
}

/// Re-reads `archive_path` and compares each entry's stored CRC-32 against a
/// checksum computed over its decompressed content.
///
/// Returns `Err` only when the archive container itself cannot be opened or
/// walked; a bad individual entry yields [`VerifyOutcome::Corrupted`].
pub fn verify_archive(archive_path: &Path) -> Result<VerifyOutcome, PackagerError> {
    let file = File::open(archive_path).map_err(|e| PackagerError::Io {
        source: e,
        path: archive_path.to_path_buf(),
    })?;
    let mut archive = ZipArchive::new(file)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let name = entry.name().to_string();
        let expected = entry.crc32();

        match entry_checksum(&mut entry) {
            Ok(actual) if actual == expected => {}
            // An unreadable entry counts as corruption of that entry, not as
            // a failure of the verification pass.
            Ok(_) | Err(_) => return Ok(VerifyOutcome::Corrupted { name }),
        }
    }

    Ok(VerifyOutcome::Intact { entries: archive.len() as u64 })
}

fn entry_checksum<R: Read>(entry: &mut R) -> std::io::Result<u32> {
    let mut hasher = crc32fast::Hasher::new();
    let mut buf = [0u8; 64 * 1024];
    loop {
        let n = entry.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PackConfig;
    use crate::pack;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;
    use zip::write::FileOptions;
    use zip::{CompressionMethod, ZipWriter};

    #[test]
    fn fresh_archive_verifies_intact() -> Result<(), Box<dyn std::error::Error>> {
        let source = tempdir()?;
        let archive_dir = tempdir()?;
        fs::create_dir_all(source.path().join("assets"))?;
        fs::write(source.path().join("index.html"), b"<html></html>")?;
        fs::write(source.path().join("assets/app.js"), b"let n = 1;")?;
        let config = PackConfig {
            source_dir: source.path().to_path_buf(),
            output_path: archive_dir.path().join("upload.zip"),
        };
        pack::pack_dir(&config, |_| {})?;

        let outcome = verify_archive(&config.output_path)?;
        assert_eq!(outcome, VerifyOutcome::Intact { entries: 2 });
        Ok(())
    }

    #[test]
    fn tampered_entry_is_reported_corrupted() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let archive_path = dir.path().join("tampered.zip");
        let canary = b"SITEPACK-CANARY-PAYLOAD";

        // Stored entries keep the payload bytes verbatim in the file, so a
        // single byte flip is easy to aim.
        {
            let file = fs::File::create(&archive_path)?;
            let mut zip = ZipWriter::new(file);
            let options =
                FileOptions::default().compression_method(CompressionMethod::Stored);
            zip.start_file("data.bin", options)?;
            zip.write_all(canary)?;
            zip.finish()?;
        }

        let mut raw = fs::read(&archive_path)?;
        let pos = raw
            .windows(canary.len())
            .position(|w| w == canary)
            .expect("stored payload present in raw archive");
        raw[pos] ^= 0xFF;
        fs::write(&archive_path, &raw)?;

        let outcome = verify_archive(&archive_path)?;
        assert_eq!(outcome, VerifyOutcome::Corrupted { name: "data.bin".to_string() });
        Ok(())
    }

    #[test]
    fn unreadable_container_is_an_error() {
        let dir = tempdir().unwrap();
        let bogus = dir.path().join("not-a-zip.zip");
        fs::write(&bogus, b"plain text, no zip structure").unwrap();

        assert!(verify_archive(&bogus).is_err());
    }
}
