//! The three line classifiers, evaluated in fixed priority order.
//!
//! A "dotted-quad" here is purely textual: four groups of 1-3 digits
//! separated by dots. No 0-255 range check is applied, so a string like
//! `999.999.999.999` is still extracted.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::LineClass;

/// Any whitespace-preceded dotted-quad. The greedy `.*` prefix means the
/// capture is the *last* such occurrence on the line, not the first.
static IP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r".*\s(\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})").expect("regex is valid")
});

/// `PlayerIP:` field of an authenticated player.
static VALID_IP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"PlayerIP:\s(\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})").expect("regex is valid")
});

/// Remote address recorded by an admin login event.
static ADMIN_IP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"admin\slogin.*RemoteAddr:\s(\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})")
        .expect("regex is valid")
});

/// Classify one log line into at most one bucket.
///
/// A line with no whitespace-preceded dotted-quad returns `None` and is
/// skipped entirely; only lines passing that gate are tested for the admin
/// and player markers, admin first.
pub fn classify_line(line: &str) -> Option<LineClass> {
    let generic = IP_PATTERN.captures(line)?;

    if let Some(caps) = ADMIN_IP.captures(line) {
        return Some(LineClass::Admin(caps[1].to_string()));
    }
    if let Some(caps) = VALID_IP.captures(line) {
        return Some(LineClass::Player(caps[1].to_string()));
    }
    Some(LineClass::Generic(generic[1].to_string()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_line_extracts_ip() {
        let class = classify_line("2024.01.01 LogNet: Client 10.0.0.5 connected");
        assert_eq!(class, Some(LineClass::Generic("10.0.0.5".to_string())));
    }

    #[test]
    fn test_generic_picks_last_whitespace_preceded_quad() {
        let class = classify_line("relay 10.0.0.5 forwarded to 10.0.0.9 ok");
        assert_eq!(class, Some(LineClass::Generic("10.0.0.9".to_string())));
    }

    #[test]
    fn test_player_line_classified_as_player() {
        let class = classify_line("2024.01.01 LogGame: PlayerIP: 192.168.1.50 joined");
        assert_eq!(class, Some(LineClass::Player("192.168.1.50".to_string())));
    }

    #[test]
    fn test_admin_line_classified_as_admin() {
        let class = classify_line("2024.01.01 LogAdmin: admin login RemoteAddr: 172.16.0.1");
        assert_eq!(class, Some(LineClass::Admin("172.16.0.1".to_string())));
    }

    #[test]
    fn test_admin_takes_precedence_over_player() {
        // A line carrying both markers must land in the admin bucket.
        let class =
            classify_line("admin login PlayerIP: 192.168.1.50 RemoteAddr: 172.16.0.1 accepted");
        assert_eq!(class, Some(LineClass::Admin("172.16.0.1".to_string())));
    }

    #[test]
    fn test_line_without_ip_returns_none() {
        assert_eq!(classify_line("2024.01.01 LogGame: match started"), None);
        assert_eq!(classify_line(""), None);
    }

    #[test]
    fn test_quad_without_leading_whitespace_is_not_matched() {
        // The generic pattern requires whitespace before the quad.
        assert_eq!(classify_line("10.0.0.5 connected"), None);
        // Same gate applies to marker lines with no space after the colon.
        assert_eq!(classify_line("PlayerIP:192.168.1.50"), None);
    }

    #[test]
    fn test_no_octet_range_validation() {
        let class = classify_line("garbage from 999.999.999.999 seen");
        assert_eq!(class, Some(LineClass::Generic("999.999.999.999".to_string())));
    }

    #[test]
    fn test_quad_at_end_of_line_matches() {
        let class = classify_line("kicked 10.1.2.3");
        assert_eq!(class, Some(LineClass::Generic("10.1.2.3".to_string())));
    }
}
