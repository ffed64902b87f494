//! # trit-pack
//!
//! Balanced ternary digits with table-driven arithmetic, and lossless packing
//! of 5, 9 or 27 trits into 1-, 2- or 6-byte unsigned integers.
//!
//! ```
//! use tritpack::{pack5, unpack5, is_spare, Trit};
//!
//! let trits = [Trit::N, Trit::N, Trit::O, Trit::P, Trit::P];
//! let packed = pack5(&trits);
//! assert_eq!(packed, 17);
//! assert!(!is_spare(packed));
//! assert_eq!(unpack5(packed), trits);
//! ```

pub mod ternary;
pub mod codec;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use ternary::{Trit, TritOps, Op, ParseError, format_trits, parse_trits};
pub use codec::{
    pack5, unpack5, pack9, unpack9, pack27, unpack27,
    try_unpack5, try_unpack9, try_unpack27,
    is_spare, PackError, Width,
};
