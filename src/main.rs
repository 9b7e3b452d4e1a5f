//! Main entry point for the sitepack CLI app

use sitepack::{cli, pack, report, verify};

fn main() -> std::process::ExitCode {
    match run_app() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        // The failure was already reported with manual-upload guidance;
        // only the exit status is left to set.
        Err(_) => std::process::ExitCode::FAILURE,
    }
}

fn run_app() -> Result<(), Box<dyn std::error::Error>> {
    let config = cli::run()?;
    report::announce_start(&config);

    match pack::pack_dir(&config, report::entry_added) {
        Ok(summary) => {
            report::report_success(&config, &summary);
            let verification = verify::verify_archive(&config.output_path);
            report::report_verification(&verification);
            report::print_upload_instructions(&config);
            println!("\n🚀 Done!");
            Ok(())
        }
        Err(e) => {
            report::report_failure(&e);
            report::print_manual_instructions(&config);
            println!("\n🚀 Done!");
            Err(e.into())
        }
    }
}
