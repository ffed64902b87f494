//! Tritwise operations trait.
//!
//! Applies the single-trit table operators position by position. There is no
//! carry between positions, so a sequence behaves as N independent digits.

use crate::ternary::Trit;

/// Trait for types that support tritwise operations.
pub trait TritOps {
    /// The output type for operations that return a value of the same shape.
    type Output;

    /// Negate every trit (flip N ↔ P).
    fn ternary_neg(&self) -> Self::Output;

    /// Tritwise saturating addition.
    fn ternary_add(&self, other: &Self) -> Self::Output;

    /// Tritwise multiplication.
    fn ternary_mul(&self, other: &Self) -> Self::Output;
}

impl TritOps for Trit {
    type Output = Trit;

    #[inline]
    fn ternary_neg(&self) -> Trit {
        self.negate()
    }

    #[inline]
    fn ternary_add(&self, other: &Self) -> Trit {
        Trit::add(*self, *other)
    }

    #[inline]
    fn ternary_mul(&self, other: &Self) -> Trit {
        self.multiply(*other)
    }
}

impl<const N: usize> TritOps for [Trit; N] {
    type Output = [Trit; N];

    fn ternary_neg(&self) -> [Trit; N] {
        self.map(Trit::negate)
    }

    fn ternary_add(&self, other: &Self) -> [Trit; N] {
        let mut result = [Trit::O; N];
        for i in 0..N {
            result[i] = Trit::add(self[i], other[i]);
        }
        result
    }

    fn ternary_mul(&self, other: &Self) -> [Trit; N] {
        let mut result = [Trit::O; N];
        for i in 0..N {
            result[i] = self[i].multiply(other[i]);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ternary::Trit::{N, O, P};

    #[test]
    fn test_array_neg() {
        assert_eq!([N, O, P, P, N].ternary_neg(), [P, O, N, N, P]);
    }

    #[test]
    fn test_array_add_saturates_per_position() {
        let a = [N, N, O, P, P];
        let b = [N, P, P, P, O];
        assert_eq!(a.ternary_add(&b), [N, O, P, P, P]);
    }

    #[test]
    fn test_array_mul() {
        let a = [N, N, O, P, P];
        let b = [N, P, P, P, N];
        assert_eq!(a.ternary_mul(&b), [P, N, O, P, N]);
    }

    #[test]
    fn test_array_matches_single_trit() {
        let a = [N, O, P, N, O, P, N, O, P];
        let b = [N, N, N, O, O, O, P, P, P];
        let sum = a.ternary_add(&b);
        let product = a.ternary_mul(&b);
        for i in 0..9 {
            assert_eq!(sum[i], a[i].ternary_add(&b[i]));
            assert_eq!(product[i], a[i].ternary_mul(&b[i]));
        }
    }
}
