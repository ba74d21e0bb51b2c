//! Error taxonomy for the spectral pipeline

use thiserror::Error;

/// Precondition violations reported by the pipeline.
///
/// All core computations are pure and deterministic, so every variant here
/// signals a malformed input rather than a transient failure. Each operation
/// either fully succeeds or fails before touching its output buffer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpectralError {
    /// A transform was requested on an image with no pixels.
    #[error("image has zero area ({width}x{height})")]
    EmptyImage { width: usize, height: usize },

    /// Quadrant shifting is only its own inverse for even dimensions.
    #[error("dimensions must be even for spectrum centering, got {width}x{height}")]
    OddDimensions { width: usize, height: usize },

    /// Buffer length does not agree with the stated dimensions.
    #[error("buffer of {len} values does not fill {width}x{height}")]
    SizeMismatch {
        len: usize,
        width: usize,
        height: usize,
    },

    /// Attenuation mask does not line up with the stored spectrum.
    #[error("mask covers {mask_len} bins but the spectrum has {spectrum_len}")]
    MaskMismatch {
        mask_len: usize,
        spectrum_len: usize,
    },
}
