use clap::Parser;
use std::path::PathBuf;

use crate::config::{PackConfig, DEFAULT_OUTPUT_NAME, DEFAULT_SOURCE_DIR};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The build output directory to package.
    #[arg(long, default_value = DEFAULT_SOURCE_DIR)]
    pub source: PathBuf,

    /// The path for the output ZIP archive. Replaced on every run.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_NAME)]
    pub output: PathBuf,
}

impl Args {
    /// Turns parsed arguments into the packaging configuration.
    pub fn into_config(self) -> PackConfig {
        PackConfig {
            source_dir: self.source,
            output_path: self.output,
        }
    }
}

/// Parses command-line arguments using `clap` and returns the packaging configuration.
///
/// This is the main entry point for the CLI logic.
pub fn run() -> Result<PackConfig, Box<dyn std::error::Error>> {
    let args = Args::parse();
    Ok(args.into_config())
}
