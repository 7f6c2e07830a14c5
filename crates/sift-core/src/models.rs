//! Scan-state types: per-line classification and the running accumulator.

use std::collections::{HashMap, HashSet};

// ── LineClass ─────────────────────────────────────────────────────────────────

/// The bucket a single log line falls into.
///
/// Each line contributes to at most one bucket; the IP string is the
/// dotted-quad extracted by the matching pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Remote address of an admin login event.
    Admin(String),
    /// Address carried by a `PlayerIP:` field of an authenticated player.
    Player(String),
    /// Any other whitespace-preceded dotted-quad occurrence.
    Generic(String),
}

// ── ScanOutcome ───────────────────────────────────────────────────────────────

/// Everything accumulated by a single pass over a log file.
///
/// `counts` grows monotonically during the scan and is pruned by the filter
/// step afterwards; the two sets are only ever inserted into.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Occurrence count per generically-seen IP.
    pub counts: HashMap<String, u64>,
    /// IPs associated with valid player information.
    pub valid_players: HashSet<String>,
    /// Remote addresses of admin logins.
    pub admins: HashSet<String>,
    /// Total lines consumed, classified or not.
    pub lines: u64,
    /// Total bytes consumed, newline bytes included.
    pub bytes: u64,
}

impl ScanOutcome {
    /// Fold one classified line into the accumulator.
    pub fn record(&mut self, class: LineClass) {
        match class {
            LineClass::Admin(ip) => {
                self.admins.insert(ip);
            }
            LineClass::Player(ip) => {
                self.valid_players.insert(ip);
            }
            LineClass::Generic(ip) => {
                *self.counts.entry(ip).or_insert(0) += 1;
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
