//! Single-pass scan driver.
//!
//! Feeds Latin-1 decoded lines through the classifier and accumulates the
//! three collections plus byte/line totals. Strictly sequential; no state
//! crosses lines other than the [`ScanOutcome`] itself.

use std::io::BufRead;
use std::path::Path;

use sift_core::error::Result;
use sift_core::models::ScanOutcome;
use sift_core::patterns::classify_line;
use tracing::debug;

use crate::reader::Latin1Lines;

/// Scan every line from `lines` into a fresh [`ScanOutcome`].
///
/// Every `progress_every` lines (line 0 included) `on_progress` is invoked
/// with the bytes consumed so far *including* the line currently in hand;
/// pass `0` to disable progress callbacks entirely.
pub fn scan<R, F>(lines: Latin1Lines<R>, progress_every: u64, mut on_progress: F) -> Result<ScanOutcome>
where
    R: BufRead,
    F: FnMut(u64),
{
    let mut outcome = ScanOutcome::default();

    for item in lines {
        let (line, byte_len) = item?;
        let byte_len = byte_len as u64;

        if progress_every != 0 && outcome.lines % progress_every == 0 {
            on_progress(outcome.bytes + byte_len);
        }

        if let Some(class) = classify_line(&line) {
            outcome.record(class);
        }

        outcome.bytes += byte_len;
        outcome.lines += 1;
    }

    Ok(outcome)
}

/// Open `path` and scan it end to end.
pub fn scan_file<F>(path: &Path, progress_every: u64, on_progress: F) -> Result<ScanOutcome>
where
    F: FnMut(u64),
{
    let lines = Latin1Lines::open(path)?;
    let outcome = scan(lines, progress_every, on_progress)?;

    debug!(
        "Scanned {}: {} lines, {} bytes, {} counted, {} valid, {} admin",
        path.display(),
        outcome.lines,
        outcome.bytes,
        outcome.counts.len(),
        outcome.valid_players.len(),
        outcome.admins.len(),
    );

    Ok(outcome)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
