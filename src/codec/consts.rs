//! Width constants and power-of-three tables.
//!
//! Each width N packs into the smallest container that holds 3^N values:
//! 3^5 = 243 ≤ 2^8, 3^9 = 19,683 ≤ 2^16, 3^27 = 7,625,597,484,987 ≤ 2^48.

/// Trits in the 1-byte width.
pub const TRIT5_DIGITS: usize = 5;
/// Trits in the 2-byte width.
pub const TRIT9_DIGITS: usize = 9;
/// Trits in the 6-byte width.
pub const TRIT27_DIGITS: usize = 27;

/// Significant bytes of each packed width.
pub const TRIT5_BYTES: usize = 1;
pub const TRIT9_BYTES: usize = 2;
pub const TRIT27_BYTES: usize = 6;

/// 3^5, also the first spare codepoint of the 1-byte width.
pub const TRIT5_STATES: u8 = 243;
/// 3^9
pub const TRIT9_STATES: u16 = 19_683;
/// 3^27
pub const TRIT27_STATES: u64 = 7_625_597_484_987;

/// Largest valid packed value per width (3^N - 1).
pub const TRIT5_MAX: u8 = TRIT5_STATES - 1;
pub const TRIT9_MAX: u16 = TRIT9_STATES - 1;
pub const TRIT27_MAX: u64 = TRIT27_STATES - 1;

/// 3^0 ..= 3^4
pub const TRIT5_POWERS: [u8; TRIT5_DIGITS] = [1, 3, 9, 27, 81];

/// 3^0 ..= 3^8
pub const TRIT9_POWERS: [u16; TRIT9_DIGITS] = [1, 3, 9, 27, 81, 243, 729, 2_187, 6_561];

/// 3^0 ..= 3^26
pub const TRIT27_POWERS: [u64; TRIT27_DIGITS] = [
    1,
    3,
    9,
    27,
    81,
    243,
    729,
    2_187,
    6_561,
    19_683,
    59_049,
    177_147,
    531_441,
    1_594_323,
    4_782_969,
    14_348_907,
    43_046_721,
    129_140_163,
    387_420_489,
    1_162_261_467,
    3_486_784_401,
    10_460_353_203,
    31_381_059_609,
    94_143_178_827,
    282_429_536_481,
    847_288_609_443,
    2_541_865_828_329,
];
