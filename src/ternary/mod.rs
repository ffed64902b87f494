//! Balanced ternary digit primitives.
//!
//! This module provides:
//! - [`Trit`] - A single balanced ternary digit (-1, 0, +1)
//! - [`tables`] - The negation, addition and multiplication lookup tables
//! - [`TritOps`] - Position-by-position operators over trit sequences
//! - Text parsing and formatting of trit sequences

mod trit;
mod ops;
mod text;
pub mod tables;

pub use trit::Trit;
pub use ops::TritOps;
pub use tables::Op;
pub use text::{format_trits, parse_trit_vec, parse_trits, ParseError};
