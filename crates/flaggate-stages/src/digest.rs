//! 32-bit FNV-1a digest
//!
//! Fast and public. Not collision resistant, not a security primitive.

pub const FNV_OFFSET_BASIS: u32 = 0x811c9dc5;
pub const FNV_PRIME: u32 = 0x01000193;

/// FNV-1a over `bytes`: xor each byte in, then multiply with wraparound.
pub fn fnv1a32(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |acc, &b| {
        (acc ^ u32::from(b)).wrapping_mul(FNV_PRIME)
    })
}

/// Sum of all bytes reduced modulo 256.
pub fn byte_sum_mod256(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}
