//! Frequency mask compositor
//!
//! Combines a per-bin attenuation mask with a centered spectrum. Mask value
//! 1.0 fully suppresses a bin, 0.0 leaves it untouched, intermediate values
//! attenuate linearly. The mask is built over the same canvas as the
//! centered spectrum display, so both arrays index the same coordinate
//! system.

use super::buffer::ComplexImage;

/// Attenuate `spectrum` by `mask`, writing into a fresh buffer.
///
/// For each bin `i` with `mask[i] > 0` the complex value is scaled by
/// `1 - mask[i]`; untouched bins are copied through. The input spectrum is
/// never mutated, so repeated edits always start from the same baseline.
///
/// # Panics
///
/// Panics if `mask.len() != spectrum.len()`. A mismatch means the caller
/// rasterized the mask against the wrong canvas, which is a coordinate
/// alignment bug rather than a recoverable condition.
pub fn apply_mask(spectrum: &ComplexImage, mask: &[f64]) -> ComplexImage {
    assert_eq!(
        mask.len(),
        spectrum.len(),
        "attenuation mask must cover every frequency bin"
    );

    let mut out = ComplexImage::zeroed_like(spectrum);
    for ((dst, &src), &alpha) in out
        .data_mut()
        .iter_mut()
        .zip(spectrum.data())
        .zip(mask.iter())
    {
        *dst = if alpha > 0.0 { src * (1.0 - alpha) } else { src };
    }

    out
}
