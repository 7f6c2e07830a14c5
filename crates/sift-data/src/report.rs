//! Filter step and CSV report writing.
//!
//! Removes valid-player and admin addresses from the count map, then
//! serializes whatever remains as `IP,matches` rows. Row order follows the
//! map's iteration order; consumers must not depend on it.

use std::collections::HashMap;
use std::ffi::OsString;
use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sift_core::error::{Result, SiftError};
use sift_core::models::ScanOutcome;
use tracing::debug;

// ── ReportRow ─────────────────────────────────────────────────────────────────

/// One row of the suspicious-IP report, written under the `IP,matches`
/// header.
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    ip: &'a str,
    matches: u64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Derive the report path: the input path with `.csv` appended to the full
/// file name (`server.log` becomes `server.log.csv`).
pub fn report_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".csv");
    PathBuf::from(name)
}

/// Drop every valid-player and admin IP from the count map.
///
/// Keys that never appeared generically are silently ignored; applying the
/// filter twice is a no-op the second time.
pub fn filter_counts(outcome: &mut ScanOutcome) {
    for ip in &outcome.valid_players {
        outcome.counts.remove(ip);
    }
    for ip in &outcome.admins {
        outcome.counts.remove(ip);
    }
}

/// Write the filtered counts to `path` as CSV with an `IP,matches` header.
///
/// IP strings and counts never contain commas or quotes, so no field is ever
/// escaped.
pub fn write_report(path: &Path, counts: &HashMap<String, u64>) -> Result<()> {
    let file = File::create(path).map_err(|source| SiftError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })?;
    // Auto-headers only appear on the first serialized row, and the header
    // must be present even when no IP survives the filter.
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
    writer.write_record(["IP", "matches"])?;

    for (ip, matches) in counts {
        writer.serialize(ReportRow {
            ip,
            matches: *matches,
        })?;
    }
    writer.flush()?;

    debug!("Wrote {} report rows to {}", counts.len(), path.display());
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
