//! Pack and unpack trit sequences for the three supported widths.
//!
//! Index 0 of a sequence is the most significant trit. Packing runs Horner's
//! method over the unsigned digit form (N=0, O=1, P=2); unpacking divides by
//! three, filling the sequence from the least significant end.

use crate::ternary::Trit;
use crate::codec::consts::{TRIT27_POWERS, TRIT5_POWERS, TRIT9_POWERS};

macro_rules! impl_width {
    (
        $n:expr, $packed:ty, $acc:ty, $powers:ident,
        $(#[$pack_doc:meta])* pack: $pack:ident,
        $(#[$unpack_doc:meta])* unpack: $unpack:ident,
        $(#[$at_doc:meta])* trit_at: $at:ident $(,)?
    ) => {
        $(#[$pack_doc])*
        #[inline]
        pub fn $pack(trits: &[Trit; $n]) -> $packed {
            let mut acc: $acc = 0;
            for t in trits {
                acc = acc * 3 + t.to_unsigned() as $acc;
            }
            acc as $packed
        }

        $(#[$unpack_doc])*
        #[inline]
        pub fn $unpack(packed: $packed) -> [Trit; $n] {
            let mut value = packed as $acc;
            let mut trits = [Trit::O; $n];
            for i in (0..$n).rev() {
                trits[i] = Trit::from_unsigned((value % 3) as u8);
                value /= 3;
            }
            trits
        }

        $(#[$at_doc])*
        #[inline]
        pub fn $at(packed: $packed, index: usize) -> Trit {
            assert!(index < $n, "trit index {} out of range for {} trits", index, $n);
            let weight = $powers[$n - 1 - index] as $acc;
            Trit::from_unsigned(((packed as $acc / weight) % 3) as u8)
        }
    };
}

impl_width! {
    5, u8, u16, TRIT5_POWERS,
    /// Pack 5 trits into one byte. The result is always in 0..=242.
    pack: pack5,
    /// Unpack one byte into 5 trits.
    ///
    /// Only meaningful for 0..=242. Spare bytes (see
    /// [`is_spare`](crate::codec::is_spare)) decode to their low five base-3
    /// digits; use [`try_unpack5`](crate::codec::try_unpack5) to reject them.
    unpack: unpack5,
    /// Read the trit at `index` (0 = most significant) without unpacking.
    ///
    /// # Panics
    /// Panics if `index >= 5`.
    trit_at: trit_at5,
}

impl_width! {
    9, u16, u32, TRIT9_POWERS,
    /// Pack 9 trits into a `u16` in 0..=19,682.
    pack: pack9,
    /// Unpack a `u16` into 9 trits. Values above 19,682 are not checked.
    unpack: unpack9,
    /// Read the trit at `index` (0 = most significant) of a 9-trit value.
    ///
    /// # Panics
    /// Panics if `index >= 9`.
    trit_at: trit_at9,
}

impl_width! {
    27, u64, u64, TRIT27_POWERS,
    /// Pack 27 trits into the low 48 bits of a `u64`.
    ///
    /// The result never exceeds 7,625,597,484,986.
    pack: pack27,
    /// Unpack a `u64` into 27 trits. Values of 3^27 and above are not checked.
    unpack: unpack27,
    /// Read the trit at `index` (0 = most significant) of a 27-trit value.
    ///
    /// # Panics
    /// Panics if `index >= 27`.
    trit_at: trit_at27,
}
