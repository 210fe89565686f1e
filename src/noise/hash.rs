//! Integer avalanche hash used as the per-pixel dither threshold

/// Deterministic threshold in `[0, 1]` for a pixel and seed
///
/// Mixes the seed with each axis through a large odd multiplier, then runs a
/// finalizing avalanche. All arithmetic wraps at 32 bits so the bit pattern is
/// stable across platforms.
pub fn pixel_threshold(x: usize, y: usize, seed: i64) -> f64 {
    let mut h = (seed as u32) ^ 0xDEAD_BEEF;
    h ^= (x as u32).wrapping_mul(374_761_393);
    h ^= (y as u32).wrapping_mul(668_265_263);
    h = (h ^ (h >> 13)).wrapping_mul(1_274_126_177);
    h ^= h >> 16;
    f64::from(h) / f64::from(u32::MAX)
}
