//! Fixed-width binary packing of trit sequences.
//!
//! | trits | container | valid range            | spare     |
//! |-------|-----------|------------------------|-----------|
//! | 5     | `u8`      | 0..=242                | 243..=255 |
//! | 9     | `u16`     | 0..=19,682             | none      |
//! | 27    | `u64`     | 0..=7,625,597,484,986  | none      |

pub mod consts;
mod pack;
mod spare;
mod width;

pub use consts::*;
pub use pack::{pack27, pack5, pack9, trit_at27, trit_at5, trit_at9, unpack27, unpack5, unpack9};
pub use spare::{is_spare, try_unpack27, try_unpack5, try_unpack9, PackError};
pub use width::Width;
