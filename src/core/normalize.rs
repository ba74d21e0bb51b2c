//! Magnitude normalization for spectrum display
//!
//! Spectra are dominated by the DC bin, often by several orders of
//! magnitude. A log compression tames the dynamic range before scaling
//! into [0,1] for display.

/// Map non-negative magnitudes into [0,1] via `ln(1 + x)` then divide by
/// the compressed maximum.
///
/// The `+ 1` keeps zero magnitudes away from the log singularity, so the
/// input minimum may be exactly 0. If every input is 0 the compressed
/// maximum is 0 as well; the output is then all zeros rather than a
/// division by zero.
pub fn normalize_for_display(magnitudes: &[f64]) -> Vec<f64> {
    let compressed: Vec<f64> = magnitudes.iter().map(|&m| m.ln_1p()).collect();
    let max = compressed.iter().cloned().fold(0.0f64, f64::max);

    if max <= 0.0 {
        log::warn!("degenerate spectrum, all magnitudes zero");
        return vec![0.0; magnitudes.len()];
    }

    compressed.into_iter().map(|c| c / max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_stays_in_unit_range() {
        let mags = vec![0.0, 0.3, 12.0, 4096.0, 1.0];
        let out = normalize_for_display(&mags);

        assert_eq!(out.len(), mags.len());
        assert!(out.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn input_maximum_maps_to_one() {
        let mags = vec![2.0, 511.0, 0.5, 511.0];
        let out = normalize_for_display(&mags);

        assert_eq!(out[1], 1.0);
        assert_eq!(out[3], 1.0);
        assert!(out[0] < 1.0 && out[2] < 1.0);
    }

    #[test]
    fn zero_magnitude_stays_zero() {
        let out = normalize_for_display(&[0.0, 8.0]);
        assert_eq!(out[0], 0.0);
    }

    #[test]
    fn all_black_input_yields_all_zeros() {
        let out = normalize_for_display(&[0.0; 9]);
        assert_eq!(out, vec![0.0; 9]);
    }

    #[test]
    fn compression_is_monotonic() {
        let out = normalize_for_display(&[1.0, 10.0, 100.0]);
        assert!(out[0] < out[1] && out[1] < out[2]);
    }
}
