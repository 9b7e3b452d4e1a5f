//! Console reporting for the packaging pipeline.
//!
//! Pure presentation layer: emoji-prefixed status lines, the archive size in
//! mebibytes, and the fixed upload instructions. Nothing in the pipeline
//! branches on what is printed here.

use std::path::Path;

use crate::config::PackConfig;
use crate::pack::PackSummary;
use crate::verify::VerifyOutcome;
use crate::PackagerError;

/// Archive size in mebibytes, for the one-decimal size line.
pub fn size_mib(bytes: u64) -> f64 {
    bytes as f64 / 1024.0 / 1024.0
}

pub fn announce_start(config: &PackConfig) {
    println!("🚀 Packaging '{}' for control-panel upload", config.source_dir.display());
    println!("{}", "=".repeat(50));
    println!("📦 Creating ZIP archive...");
}

/// One line per included file, in traversal order.
pub fn entry_added(rel: &Path) {
    println!("  📄 Adding: {}", rel.display());
}

pub fn report_success(config: &PackConfig, summary: &PackSummary) {
    println!("✅ Archive created: {}", config.output_path.display());
    println!("📊 Size: {:.1} MiB ({} files)", size_mib(summary.archive_size), summary.files_added);
}

/// Verification is informational only; both corruption and a failed
/// verification pass are shown as warnings.
pub fn report_verification(result: &Result<VerifyOutcome, PackagerError>) {
    match result {
        Ok(VerifyOutcome::Intact { entries }) => {
            println!("✅ Archive integrity verified - {} entries OK", entries);
        }
        Ok(VerifyOutcome::Corrupted { name }) => {
            println!("⚠️ Corrupted entry detected: {}", name);
        }
        Err(e) => {
            println!("⚠️ Could not verify archive: {}", e);
        }
    }
}

pub fn print_upload_instructions(config: &PackConfig) {
    println!();
    println!("📋 Upload instructions:");
    println!("1. Open File Manager in your hosting control panel");
    println!("2. Navigate to public_html/");
    println!("3. Upload {}", config.output_path.display());
    println!("4. Right-click the archive and choose Extract");
    println!("5. Confirm the extraction");
}

pub fn report_failure(err: &PackagerError) {
    println!("❌ {}", err);
}

pub fn print_manual_instructions(config: &PackConfig) {
    println!();
    println!("📋 ALTERNATIVE - Manual upload:");
    println!("1. Open the '{}' directory on your computer", config.source_dir.display());
    println!("2. Select ALL files and folders inside it");
    println!("3. Open File Manager in your hosting control panel");
    println!("4. Navigate to public_html/");
    println!("5. Upload everything you selected");
    println!("6. Wait for the upload to complete");
    println!("7. Check that the folder structure was preserved");
}
