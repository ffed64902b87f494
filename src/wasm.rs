//! WebAssembly bindings for the trit codec.
//!
//! Trits cross the boundary as `i8` values and are normalized with
//! [`Trit::create`]; packed values cross as `u64` (a JS `BigInt`).

use wasm_bindgen::prelude::*;
use crate::{Op, Trit, Width};
use crate::ternary::{format_trits, parse_trit_vec};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_trits(digits: &[i8]) -> Vec<Trit> {
    digits.iter().map(|&d| Trit::create(d as i32)).collect()
}

fn width_for(digits: usize) -> Result<Width, JsError> {
    Width::from_digits(digits).map_err(|e| JsError::new(&e.to_string()))
}

/// Pack 5, 9 or 27 digit values (MSD first).
#[wasm_bindgen]
pub fn wasm_pack(digits: Vec<i8>) -> Result<u64, JsError> {
    let trits = to_trits(&digits);
    width_for(trits.len())?
        .pack(&trits)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Pack a trit string such as `"NNOPP"` or `"--0++"`.
#[wasm_bindgen]
pub fn wasm_pack_str(s: &str) -> Result<u64, JsError> {
    let trits = parse_trit_vec(s).map_err(|e| JsError::new(&e.to_string()))?;
    width_for(trits.len())?
        .pack(&trits)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Unpack into digit values. `strict` rejects spare and out-of-range input.
#[wasm_bindgen]
pub fn wasm_unpack(packed: u64, digits: usize, strict: bool) -> Result<Vec<i8>, JsError> {
    let trits = width_for(digits)?
        .unpack(packed, strict)
        .map_err(|e| JsError::new(&e.to_string()))?;
    Ok(trits.iter().map(|t| t.value()).collect())
}

/// Unpack into an `N`/`O`/`P` string.
#[wasm_bindgen]
pub fn wasm_unpack_str(packed: u64, digits: usize, strict: bool) -> Result<String, JsError> {
    let trits = width_for(digits)?
        .unpack(packed, strict)
        .map_err(|e| JsError::new(&e.to_string()))?;
    Ok(format_trits(&trits))
}

/// Whether a byte is one of the 13 spare 5-trit codepoints.
#[wasm_bindgen]
pub fn wasm_is_spare(packed: u8) -> bool {
    crate::is_spare(packed)
}

/// Apply a table operator (`"neg"`, `"add"` or `"mul"`) to two digit values.
#[wasm_bindgen]
pub fn wasm_apply(op: &str, a: i8, b: i8) -> Result<i8, JsError> {
    let op = Op::ALL
        .into_iter()
        .find(|o| o.to_string() == op)
        .ok_or_else(|| JsError::new(&format!("unknown operator: {}", op)))?;
    Ok(op.apply(Trit::create(a as i32), Trit::create(b as i32)).value())
}
