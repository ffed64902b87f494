//! Runtime width selection.
//!
//! Callers that only learn the trit count at runtime (the CLI, the WASM
//! bindings) go through [`Width`], which dispatches to the fixed-size codec
//! functions and widens every packed value to `u64`.

use std::fmt;
use crate::ternary::Trit;
use crate::codec::consts::*;
use crate::codec::pack::{pack27, pack5, pack9, unpack27, unpack5, unpack9};
use crate::codec::spare::{is_spare, try_unpack27, try_unpack5, try_unpack9, PackError};

/// One of the three supported packing widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// 5 trits in 1 byte.
    W5,
    /// 9 trits in 2 bytes.
    W9,
    /// 27 trits in 6 bytes.
    W27,
}

impl Width {
    pub const ALL: [Width; 3] = [Width::W5, Width::W9, Width::W27];

    /// Select the width for a trit count.
    pub fn from_digits(digits: usize) -> Result<Self, PackError> {
        match digits {
            TRIT5_DIGITS => Ok(Width::W5),
            TRIT9_DIGITS => Ok(Width::W9),
            TRIT27_DIGITS => Ok(Width::W27),
            other => Err(PackError::UnsupportedWidth(other)),
        }
    }

    /// Number of trits.
    pub const fn digits(self) -> usize {
        match self {
            Width::W5 => TRIT5_DIGITS,
            Width::W9 => TRIT9_DIGITS,
            Width::W27 => TRIT27_DIGITS,
        }
    }

    /// Significant bytes of the packed form.
    pub const fn bytes(self) -> usize {
        match self {
            Width::W5 => TRIT5_BYTES,
            Width::W9 => TRIT9_BYTES,
            Width::W27 => TRIT27_BYTES,
        }
    }

    /// Largest valid packed value.
    pub const fn max(self) -> u64 {
        match self {
            Width::W5 => TRIT5_MAX as u64,
            Width::W9 => TRIT9_MAX as u64,
            Width::W27 => TRIT27_MAX,
        }
    }

    /// Largest value the container can hold, valid or not.
    pub const fn container_max(self) -> u64 {
        match self {
            Width::W5 => u8::MAX as u64,
            Width::W9 => u16::MAX as u64,
            Width::W27 => (1u64 << (8 * TRIT27_BYTES)) - 1,
        }
    }

    /// Whether `packed` is a spare codepoint. Always false above one byte.
    pub const fn is_spare(self, packed: u64) -> bool {
        match self {
            Width::W5 => packed <= u8::MAX as u64 && is_spare(packed as u8),
            Width::W9 | Width::W27 => false,
        }
    }

    /// Pack a slice whose length must equal [`Width::digits`].
    pub fn pack(self, trits: &[Trit]) -> Result<u64, PackError> {
        if trits.len() != self.digits() {
            return Err(PackError::LengthMismatch { expected: self.digits(), got: trits.len() });
        }
        let packed = match self {
            Width::W5 => pack5(&copy_array(trits)) as u64,
            Width::W9 => pack9(&copy_array(trits)) as u64,
            Width::W27 => pack27(&copy_array(trits)),
        };
        Ok(packed)
    }

    /// Unpack into a vector of [`Width::digits`] trits.
    ///
    /// Values that do not fit the container are always rejected. With
    /// `strict`, spare and out-of-range values are rejected as well;
    /// otherwise they decode to their low base-3 digits.
    pub fn unpack(self, packed: u64, strict: bool) -> Result<Vec<Trit>, PackError> {
        if packed > self.container_max() {
            return Err(PackError::OutOfRange { width: self.digits(), value: packed });
        }
        let trits = match (self, strict) {
            (Width::W5, false) => unpack5(packed as u8).to_vec(),
            (Width::W5, true) => try_unpack5(packed as u8)?.to_vec(),
            (Width::W9, false) => unpack9(packed as u16).to_vec(),
            (Width::W9, true) => try_unpack9(packed as u16)?.to_vec(),
            (Width::W27, false) => unpack27(packed).to_vec(),
            (Width::W27, true) => try_unpack27(packed)?.to_vec(),
        };
        Ok(trits)
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-trit/{}-byte", self.digits(), self.bytes())
    }
}

fn copy_array<const N: usize>(trits: &[Trit]) -> [Trit; N] {
    let mut out = [Trit::O; N];
    out.copy_from_slice(trits);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ternary::Trit::{N, O, P};

    #[test]
    fn test_from_digits() {
        assert_eq!(Width::from_digits(5), Ok(Width::W5));
        assert_eq!(Width::from_digits(9), Ok(Width::W9));
        assert_eq!(Width::from_digits(27), Ok(Width::W27));
        assert_eq!(Width::from_digits(6), Err(PackError::UnsupportedWidth(6)));
    }

    #[test]
    fn test_pack_dispatch() {
        assert_eq!(Width::W5.pack(&[N, N, O, P, P]), Ok(17));
        assert_eq!(Width::W9.pack(&[P; 9]), Ok(TRIT9_MAX as u64));
        assert_eq!(Width::W27.pack(&[P; 27]), Ok(TRIT27_MAX));
        assert_eq!(
            Width::W9.pack(&[P; 5]),
            Err(PackError::LengthMismatch { expected: 9, got: 5 })
        );
        assert_eq!(
            Width::W9.pack(&[P; 5]).unwrap_err().to_string(),
            "expected 9 trits, got 5"
        );
    }

    #[test]
    fn test_unpack_dispatch() {
        assert_eq!(Width::W5.unpack(17, true).unwrap(), vec![N, N, O, P, P]);
        assert_eq!(Width::W5.unpack(243, true), Err(PackError::Spare(243)));
        assert_eq!(Width::W5.unpack(243, false).unwrap().len(), 5);
        assert_eq!(
            Width::W5.unpack(256, false),
            Err(PackError::OutOfRange { width: 5, value: 256 })
        );
        assert!(Width::W9.unpack(19_683, true).is_err());
        assert!(Width::W9.unpack(19_683, false).is_ok());
        assert!(Width::W27.unpack(1 << 48, false).is_err());
    }

    #[test]
    fn test_spare_only_for_one_byte() {
        assert!(Width::W5.is_spare(243));
        assert!(!Width::W5.is_spare(242));
        assert!(!Width::W5.is_spare(300));
        assert!(!Width::W9.is_spare(19_683));
        assert!(!Width::W27.is_spare(TRIT27_STATES));
    }

    #[test]
    fn test_all_widths_consistent() {
        for w in Width::ALL {
            assert_eq!(Width::from_digits(w.digits()), Ok(w));
            assert!(w.max() <= w.container_max());
            assert_eq!(w.pack(&vec![P; w.digits()]), Ok(w.max()));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Width::W27.to_string(), "27-trit/6-byte");
    }
}
