//! Spare codepoint detection and checked unpacking.
//!
//! Only the 1-byte width reserves spare codepoints (243..=255). Their meaning
//! belongs to whoever consumes the packed bytes; here they are only detected.

use thiserror::Error;
use crate::ternary::Trit;
use crate::codec::consts::{TRIT27_STATES, TRIT5_STATES, TRIT9_STATES};
use crate::codec::pack::{unpack27, unpack5, unpack9};

/// Errors reported by the checked codec entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PackError {
    /// A 1-byte value in the spare range 243..=255.
    #[error("spare codepoint {0} (valid 5-trit values are 0..=242)")]
    Spare(u8),

    /// A packed value at or above 3^width.
    #[error("value {value} out of range for {width}-trit packing")]
    OutOfRange { width: usize, value: u64 },

    /// A trit count other than 5, 9 or 27.
    #[error("unsupported width: {0} trits (expected 5, 9 or 27)")]
    UnsupportedWidth(usize),

    /// A sequence whose length does not match the selected width.
    #[error("expected {expected} trits, got {got}")]
    LengthMismatch { expected: usize, got: usize },
}

/// Returns true if a packed byte lies in the spare range 243..=255.
#[inline]
pub const fn is_spare(packed: u8) -> bool {
    packed >= TRIT5_STATES
}

/// Unpack one byte, rejecting spare codepoints.
pub fn try_unpack5(packed: u8) -> Result<[Trit; 5], PackError> {
    if is_spare(packed) {
        return Err(PackError::Spare(packed));
    }
    Ok(unpack5(packed))
}

/// Unpack a 9-trit value, rejecting anything at or above 3^9.
pub fn try_unpack9(packed: u16) -> Result<[Trit; 9], PackError> {
    if packed >= TRIT9_STATES {
        return Err(PackError::OutOfRange { width: 9, value: packed as u64 });
    }
    Ok(unpack9(packed))
}

/// Unpack a 27-trit value, rejecting anything at or above 3^27.
pub fn try_unpack27(packed: u64) -> Result<[Trit; 27], PackError> {
    if packed >= TRIT27_STATES {
        return Err(PackError::OutOfRange { width: 27, value: packed });
    }
    Ok(unpack27(packed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::consts::{TRIT27_MAX, TRIT9_MAX};

    #[test]
    fn test_spare_boundary() {
        assert!(!is_spare(0));
        assert!(!is_spare(242));
        assert!(is_spare(243));
        assert!(is_spare(255));
    }

    #[test]
    fn test_spare_count() {
        let spare = (0..=u8::MAX).filter(|&v| is_spare(v)).count();
        assert_eq!(spare, 13);
    }

    #[test]
    fn test_try_unpack5() {
        assert_eq!(try_unpack5(88), Ok(unpack5(88)));
        assert_eq!(try_unpack5(242), Ok([Trit::P; 5]));
        assert_eq!(try_unpack5(243), Err(PackError::Spare(243)));
        assert_eq!(try_unpack5(255), Err(PackError::Spare(255)));
    }

    #[test]
    fn test_try_unpack_wide() {
        assert_eq!(try_unpack9(TRIT9_MAX), Ok([Trit::P; 9]));
        assert_eq!(
            try_unpack9(TRIT9_MAX + 1),
            Err(PackError::OutOfRange { width: 9, value: 19_683 })
        );
        assert_eq!(try_unpack27(TRIT27_MAX), Ok([Trit::P; 27]));
        assert!(try_unpack27(u64::MAX).is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PackError::Spare(250).to_string(),
            "spare codepoint 250 (valid 5-trit values are 0..=242)"
        );
        assert_eq!(
            PackError::UnsupportedWidth(4).to_string(),
            "unsupported width: 4 trits (expected 5, 9 or 27)"
        );
    }
}
