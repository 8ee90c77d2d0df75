//! Deterministic month-to-month variation.
//!
//! `seed` is the first four bytes (little-endian) of the BLAKE3 hash of the
//! disease id. `variation(seed, offset) = ((seed mod 10) + 7 × offset) mod 10 − 5`,
//! always in `[-5, 4]`.

pub fn seed(disease_id: &str) -> u32 {
    let hash = blake3::hash(disease_id.as_bytes());
    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Variation for the month `offset` months after the forecast start.
pub fn variation(seed: u32, offset: u32) -> i32 {
    let step = (seed % 10 + (offset % 10) * 7) % 10;
    step as i32 - 5
}
