mod bootstrap;

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use sift_core::settings::Settings;
use sift_data::report::{filter_counts, report_path, write_report};
use sift_data::scanner::scan_file;

fn main() -> Result<()> {
    let settings = Settings::parse();
    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("ipsift v{} starting", env!("CARGO_PKG_VERSION"));

    println!("parsing '{}'", settings.file.display());

    // Periodic progress: rewrite a single console line with the running
    // byte count.
    let mut outcome = scan_file(&settings.file, settings.progress_every, |bytes| {
        print!("\r{} bytes parsed", bytes);
        let _ = std::io::stdout().flush();
    })?;

    println!("\r{} bytes parsed", outcome.bytes);
    println!("found {} total IP address(es)", outcome.counts.len());
    println!("found {} valid IP address(es)", outcome.valid_players.len());
    println!("found {} admin IP address(es)", outcome.admins.len());

    filter_counts(&mut outcome);

    let out_path = settings
        .output
        .clone()
        .unwrap_or_else(|| report_path(&settings.file));

    println!(
        "writing results to '{}' with total {} suspicious IP address(es)...",
        out_path.display(),
        outcome.counts.len()
    );
    write_report(&out_path, &outcome.counts)?;

    println!("done");
    Ok(())
}
