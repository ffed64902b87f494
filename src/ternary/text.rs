//! Text form of trit sequences.
//!
//! Sequences are written most significant trit first using `N`/`O`/`P`,
//! optionally behind a `0t` prefix. Parsing also accepts `-`/`0`/`+` and
//! ignores `_` separators.

use thiserror::Error;
use crate::ternary::Trit;

/// Errors that can occur when parsing ternary strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input string held the wrong number of trits.
    #[error("expected {expected} trits, got {got}")]
    WrongLength { expected: usize, got: usize },
    /// An invalid character was encountered.
    #[error("invalid trit character: '{0}' (expected N/O/P or -/0/+)")]
    InvalidChar(char),
}

/// Render trits MSD first, e.g. `NNOPP`.
pub fn format_trits(trits: &[Trit]) -> String {
    trits.iter().map(|t| t.to_char()).collect()
}

/// Parse a trit string of any length.
pub fn parse_trit_vec(s: &str) -> Result<Vec<Trit>, ParseError> {
    let s = s.trim();
    let s = s.strip_prefix("0t").unwrap_or(s);

    s.chars()
        .filter(|&c| c != '_')
        .map(|c| Trit::from_char(c).ok_or(ParseError::InvalidChar(c)))
        .collect()
}

/// Parse a trit string of exactly `N` trits.
pub fn parse_trits<const N: usize>(s: &str) -> Result<[Trit; N], ParseError> {
    let parsed = parse_trit_vec(s)?;
    if parsed.len() != N {
        return Err(ParseError::WrongLength { expected: N, got: parsed.len() });
    }

    let mut trits = [Trit::O; N];
    trits.copy_from_slice(&parsed);
    Ok(trits)
}
