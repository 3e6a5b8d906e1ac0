//! Text-pattern matchers for player name, passer and yardage inference.
//!
//! Entity extraction over play text is inherently heuristic. Each event
//! category carries an ordered list of independent matchers, tried in
//! priority order with first match winning; later, looser patterns are
//! safety nets for earlier failures, so the declared order is load-bearing.
//!
//! A name token has the shape `Initial. Surname` (apostrophes and hyphens
//! allowed, whitespace after the period optional). Text that matches no
//! pattern yields no player at all; the play is still recorded in its
//! category list, just without an attribution. Silent, per-play, non-fatal.

use once_cell::sync::Lazy;
use regex::Regex;

/// `Initial. Surname` capture fragment shared by every matcher.
const NAME_TOKEN: &str = r"[A-Z]\.\s*[A-Za-z'\-]+";

static TOUCHDOWN_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        // Receiving touchdown: "pass ... to <Name> ... touchdown"
        format!(r"pass.*?to\s+({NAME_TOKEN}).*?touchdown"),
        // Rushing touchdown: "<Name> <N> yard ... run ... touchdown"
        format!(r"({NAME_TOKEN})\s+\d+\s+yard.*?run.*?touchdown"),
        // Catch-all
        format!(r"({NAME_TOKEN}).*?touchdown"),
    ])
});

static INTERCEPTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        format!(r"intercepted.*?by\s+({NAME_TOKEN})"),
        format!(r"({NAME_TOKEN}).*?intercept"),
    ])
});

static FUMBLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        format!(r"({NAME_TOKEN}).*?fumble"),
        format!(r"fumble.*?by\s+({NAME_TOKEN})"),
    ])
});

/// Anchored passer matcher, applied to ORIGINAL-cased text only:
/// "(<Formation>) <Initial>.<Surname> pass ...".
static PASSER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\([^)]*\)\s*([A-Z]\.\s?[A-Za-z'\-]+)\s+pass").expect("valid passer pattern")
});

static YARDS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*yard").expect("valid yardage pattern"));

fn compile(patterns: &[String]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).expect("valid player pattern"))
        .collect()
}

/// Event categories a play can belong to. Categories are not mutually
/// exclusive; a single play may appear in several lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Touchdown,
    Interception,
    Fumble,
}

impl EventKind {
    /// Lower-cased substring that puts a play in this category.
    pub fn keyword(self) -> &'static str {
        match self {
            EventKind::Touchdown => "touchdown",
            EventKind::Interception => "intercept",
            EventKind::Fumble => "fumble",
        }
    }

    fn patterns(self) -> &'static [Regex] {
        match self {
            EventKind::Touchdown => &TOUCHDOWN_PATTERNS,
            EventKind::Interception => &INTERCEPTION_PATTERNS,
            EventKind::Fumble => &FUMBLE_PATTERNS,
        }
    }
}

/// Infer the player display name for a play of the given category.
///
/// Tries the category's matchers in declared order and returns the first
/// capture, trimmed and with inner whitespace runs collapsed. `None` when no
/// pattern matches; the play is then recorded without an attribution.
pub fn extract_player(text: &str, kind: EventKind) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    for pattern in kind.patterns() {
        if let Some(captures) = pattern.captures(text) {
            if let Some(name) = captures.get(1) {
                return Some(normalize_whitespace(name.as_str().trim()));
            }
        }
    }

    None
}

/// Derive the passer from a passing-touchdown play's original-cased text.
pub fn extract_passer(text: &str) -> Option<String> {
    PASSER_PATTERN
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|name| normalize_whitespace(name.as_str().trim()))
}

/// First integer immediately followed by "yard" in the lower-cased text;
/// 0 when absent.
pub fn extract_yards(text: &str) -> u32 {
    YARDS_PATTERN
        .captures(&text.to_lowercase())
        .and_then(|captures| captures.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receiving_touchdown_captures_receiver() {
        let text = "(Shotgun) B. Purdy pass short left to J. Jennings for 18 yard touchdown";
        assert_eq!(
            extract_player(text, EventKind::Touchdown),
            Some("J. Jennings".to_string())
        );
    }

    #[test]
    fn test_rushing_touchdown_captures_rusher() {
        let text = "B. Hall 3 yard rush up the middle, run for touchdown";
        assert_eq!(
            extract_player(text, EventKind::Touchdown),
            Some("B. Hall".to_string())
        );
    }

    #[test]
    fn test_catch_all_touchdown_pattern_is_last_resort() {
        // Neither the pass-to nor the yard-run shape, but a name precedes
        // the keyword.
        let text = "K. Turpin 45 yard punt return touchdown";
        assert_eq!(
            extract_player(text, EventKind::Touchdown),
            Some("K. Turpin".to_string())
        );
    }

    #[test]
    fn test_receiver_pattern_wins_over_catch_all() {
        // The catch-all would capture the passer; the ordered list must
        // surface the receiver first.
        let text = "A. Richardson pass deep right to M. Pittman for 32 yard touchdown";
        assert_eq!(
            extract_player(text, EventKind::Touchdown),
            Some("M. Pittman".to_string())
        );
    }

    #[test]
    fn test_interception_by_pattern() {
        let text = "T. Lawrence pass intercepted by D. Square at the JAX 40";
        assert_eq!(
            extract_player(text, EventKind::Interception),
            Some("D. Square".to_string())
        );
    }

    #[test]
    fn test_interception_leading_name_pattern() {
        let text = "C. Gardner steps in front to intercept the pass";
        assert_eq!(
            extract_player(text, EventKind::Interception),
            Some("C. Gardner".to_string())
        );
    }

    #[test]
    fn test_fumble_patterns() {
        assert_eq!(
            extract_player("J. Cook fumbles at the BUF 22", EventKind::Fumble),
            Some("J. Cook".to_string())
        );
        assert_eq!(
            extract_player("Fumble forced by M. Parsons", EventKind::Fumble),
            Some("M. Parsons".to_string())
        );
    }

    #[test]
    fn test_no_name_shape_yields_none() {
        assert_eq!(
            extract_player("Touchdown on the play after review", EventKind::Touchdown),
            None
        );
        assert_eq!(extract_player("", EventKind::Touchdown), None);
    }

    #[test]
    fn test_captured_name_whitespace_is_normalized() {
        let text = "pass complete to J.   Smith for the touchdown";
        assert_eq!(
            extract_player(text, EventKind::Touchdown),
            Some("J. Smith".to_string())
        );
    }

    #[test]
    fn test_surname_punctuation_is_kept() {
        let text = "pass to D. O'Neill for 12 yard touchdown";
        assert_eq!(
            extract_player(text, EventKind::Touchdown),
            Some("D. O'Neill".to_string())
        );
        let text = "pass to J. Smith-Njigba for 9 yard touchdown";
        assert_eq!(
            extract_player(text, EventKind::Touchdown),
            Some("J. Smith-Njigba".to_string())
        );
    }

    #[test]
    fn test_passer_requires_leading_formation() {
        assert_eq!(
            extract_passer("(Shotgun) B. Purdy pass short left to J. Jennings for 18 yard touchdown"),
            Some("B. Purdy".to_string())
        );
        assert_eq!(
            extract_passer("B. Purdy pass short left to J. Jennings for 18 yard touchdown"),
            None
        );
    }

    #[test]
    fn test_passer_match_is_case_sensitive() {
        assert_eq!(
            extract_passer("(shotgun) b. purdy pass to j. jennings for touchdown"),
            None
        );
    }

    #[test]
    fn test_yardage_extraction() {
        assert_eq!(extract_yards("2 yard touchdown run"), 2);
        assert_eq!(extract_yards("B. Hall 17 Yard run"), 17);
        assert_eq!(extract_yards("touchdown on the kickoff return"), 0);
        assert_eq!(extract_yards(""), 0);
    }

    #[test]
    fn test_yardage_takes_first_match() {
        assert_eq!(extract_yards("12 yard pass, then a 30 yard return"), 12);
    }
}
