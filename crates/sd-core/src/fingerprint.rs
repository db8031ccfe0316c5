//! Frame fingerprinting: the strict and the tolerant equality oracle.
//!
//! The FNV-1a hash is order-sensitive and non-cryptographic; it answers
//! "are these two buffers byte-identical" cheaply. The changed-pixel count
//! tolerates the handful of edge pixels that float rounding in angle math
//! moves between otherwise-equivalent renders.

use crate::raster::PixelBuffer;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x100_0000_01b3;

/// 64-bit FNV-1a over a byte slice.
pub fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Fingerprint a frame as 16 zero-padded lowercase hex digits.
pub fn fingerprint(frame: &PixelBuffer) -> String {
    format!("{:016x}", fnv1a64(frame.bytes()))
}

/// Count pixel positions whose RGB triple differs between two frames.
pub fn changed_pixels(previous: &PixelBuffer, current: &PixelBuffer) -> u64 {
    changed_pixel_bytes(previous.bytes(), current.bytes())
}

/// Byte-slice form of [`changed_pixels`]: steps in 3-byte strides over the
/// common length of the two slices, complete triples only.
pub fn changed_pixel_bytes(previous: &[u8], current: &[u8]) -> u64 {
    let common = previous.len().min(current.len());
    previous[..common]
        .chunks_exact(3)
        .zip(current[..common].chunks_exact(3))
        .filter(|(prev, cur)| prev != cur)
        .count() as u64
}
