use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Suspicious-IP scanner for game server logs
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ipsift",
    about = "Scan a game server log for suspicious IP addresses",
    version
)]
pub struct Settings {
    /// Log file to scan
    pub file: PathBuf,

    /// Report path (defaults to the input path with `.csv` appended)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Report progress every N lines (0 disables progress output)
    #[arg(long, default_value = "50")]
    pub progress_every: u64,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
