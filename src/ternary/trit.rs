//! Single balanced ternary digit (trit).
//!
//! A trit holds one of three values: -1, 0, or +1. The type is a closed
//! enumeration, so an out-of-range trit cannot be constructed; integers
//! outside the digit range are normalized to zero on the way in.

use std::fmt;
use serde::{Serialize, Deserialize};

use crate::ternary::tables;

/// A single balanced ternary digit.
///
/// The discriminant is the digit's signed value, so `trit as i8` is exact.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(i8)]
pub enum Trit {
    /// Negative (-1)
    N = -1,
    /// Zero (0)
    O = 0,
    /// Positive (+1)
    P = 1,
}

impl Trit {
    /// All possible trit values in order: N, O, P
    pub const ALL: [Trit; 3] = [Trit::N, Trit::O, Trit::P];

    /// Create a trit from an integer value.
    ///
    /// Anything outside {-1, 0, 1} yields [`Trit::O`]. This never fails.
    #[inline]
    pub const fn create(value: i32) -> Self {
        match value {
            -1 => Trit::N,
            1 => Trit::P,
            _ => Trit::O,
        }
    }

    /// Returns true if a raw digit value lies in {-1, 0, 1}.
    ///
    /// Every `Trit` is valid; this is for callers still holding raw integers.
    #[inline]
    pub const fn is_valid_raw(value: i8) -> bool {
        value >= -1 && value <= 1
    }

    /// The digit's signed value.
    #[inline]
    pub const fn value(self) -> i8 {
        self as i8
    }

    /// Unsigned form used by the codec and table indexing: N→0, O→1, P→2.
    #[inline]
    pub const fn to_unsigned(self) -> u8 {
        (self as i8 + 1) as u8
    }

    /// Inverse of [`Trit::to_unsigned`].
    ///
    /// Expects 0, 1 or 2; anything above 1 maps to P.
    #[inline]
    pub const fn from_unsigned(u: u8) -> Self {
        match u {
            0 => Trit::N,
            1 => Trit::O,
            _ => Trit::P,
        }
    }

    /// Negate the trit (flip N ↔ P, O stays O).
    #[inline]
    pub const fn negate(self) -> Self {
        tables::NEGATION_TABLE[self.to_unsigned() as usize]
    }

    /// Saturating single-position addition.
    ///
    /// This is not carry addition: N + N stays N and P + P stays P.
    #[inline]
    pub const fn add(self, other: Self) -> Self {
        tables::ADDITION_TABLE[self.to_unsigned() as usize][other.to_unsigned() as usize]
    }

    /// Single-trit multiplication (sign rule, never saturates).
    #[inline]
    pub const fn multiply(self, other: Self) -> Self {
        tables::MULTIPLICATION_TABLE[self.to_unsigned() as usize][other.to_unsigned() as usize]
    }

    /// Parse a single trit character.
    ///
    /// Accepts `N n -`, `O o 0` and `P p +`.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'N' | 'n' | '-' => Some(Trit::N),
            'O' | 'o' | '0' => Some(Trit::O),
            'P' | 'p' | '+' => Some(Trit::P),
            _ => None,
        }
    }

    /// Letter form of the trit: N, O or P.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Trit::N => 'N',
            Trit::O => 'O',
            Trit::P => 'P',
        }
    }

    /// Returns true if this trit is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, Trit::O)
    }
}

impl Default for Trit {
    fn default() -> Self {
        Trit::O
    }
}

impl fmt::Debug for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trit::N => write!(f, "-"),
            Trit::O => write!(f, "0"),
            Trit::P => write!(f, "+"),
        }
    }
}

impl std::ops::Neg for Trit {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::ops::Add for Trit {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Trit::add(self, rhs)
    }
}

impl std::ops::Mul for Trit {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl From<i8> for Trit {
    fn from(value: i8) -> Self {
        Trit::create(value as i32)
    }
}

impl From<Trit> for i8 {
    fn from(trit: Trit) -> Self {
        trit.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_normalizes() {
        assert_eq!(Trit::create(5), Trit::O);
        assert_eq!(Trit::create(-7), Trit::O);
        assert_eq!(Trit::create(i32::MAX), Trit::O);
        assert_eq!(Trit::create(i32::MIN), Trit::O);
    }

    #[test]
    fn test_create_identity() {
        assert_eq!(Trit::create(-1), Trit::N);
        assert_eq!(Trit::create(0), Trit::O);
        assert_eq!(Trit::create(1), Trit::P);
        for t in Trit::ALL {
            assert_eq!(Trit::create(t.value() as i32), t);
        }
    }

    #[test]
    fn test_is_valid_raw() {
        assert!(Trit::is_valid_raw(-1));
        assert!(Trit::is_valid_raw(0));
        assert!(Trit::is_valid_raw(1));
        assert!(!Trit::is_valid_raw(2));
        assert!(!Trit::is_valid_raw(-2));
        assert!(!Trit::is_valid_raw(i8::MIN));
        for t in Trit::ALL {
            assert!(Trit::is_valid_raw(t.value()));
        }
    }

    #[test]
    fn test_unsigned_mapping() {
        assert_eq!(Trit::N.to_unsigned(), 0);
        assert_eq!(Trit::O.to_unsigned(), 1);
        assert_eq!(Trit::P.to_unsigned(), 2);
        for t in Trit::ALL {
            assert_eq!(Trit::from_unsigned(t.to_unsigned()), t);
        }
    }

    #[test]
    fn test_operator_impls_match_methods() {
        for a in Trit::ALL {
            assert_eq!(-a, a.negate());
            for b in Trit::ALL {
                assert_eq!(a + b, a.add(b));
                assert_eq!(a * b, a.multiply(b));
            }
        }
    }

    #[test]
    fn test_is_zero() {
        assert!(Trit::O.is_zero());
        assert!(!Trit::N.is_zero());
        assert!(!Trit::P.is_zero());
        assert!(Trit::create(9).is_zero());
    }

    #[test]
    fn test_char_roundtrip() {
        for t in Trit::ALL {
            assert_eq!(Trit::from_char(t.to_char()), Some(t));
        }
        assert_eq!(Trit::from_char('+'), Some(Trit::P));
        assert_eq!(Trit::from_char('x'), None);
    }

    #[test]
    fn test_from_i8_normalizes() {
        assert_eq!(Trit::from(-1i8), Trit::N);
        assert_eq!(Trit::from(3i8), Trit::O);
        assert_eq!(i8::from(Trit::P), 1);
    }

    #[test]
    fn test_serde_json() {
        let json = serde_json::to_string(&Trit::P).unwrap();
        assert_eq!(serde_json::from_str::<Trit>(&json).unwrap(), Trit::P);
    }
}
