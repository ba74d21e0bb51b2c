//! Spectral editing session
//!
//! A session is constructed once per loaded image: the forward pipeline
//! runs, and the resulting centered spectrum is stored as the canonical
//! baseline. Every stroke-completion event reads that baseline, composites
//! the attenuation mask, and reconstructs; the baseline itself is never
//! written again, so successive edits are repeatable.

use log::debug;
use rustfft::FftDirection;

use super::buffer::ComplexImage;
use super::error::SpectralError;
use super::mask::apply_mask;
use super::normalize::normalize_for_display;
use super::shift::{shift_image, unshift_image};
use super::transform::Transform2d;

/// Forward half of the pipeline: intensities to a centered spectrum.
///
/// Dimensions must be even so the quadrant shift round-trips exactly.
pub fn forward_transform(
    pixels: &[f64],
    width: usize,
    height: usize,
) -> Result<ComplexImage, SpectralError> {
    if width == 0 || height == 0 {
        return Err(SpectralError::EmptyImage { width, height });
    }
    if width % 2 != 0 || height % 2 != 0 {
        return Err(SpectralError::OddDimensions { width, height });
    }

    let image = ComplexImage::from_real(pixels, width, height)?;
    let spectrum = Transform2d::new().transform(&image, FftDirection::Forward)?;
    Ok(shift_image(&spectrum))
}

/// Inverse half of the pipeline: a centered spectrum back to magnitudes.
pub fn inverse_transform(spectrum: &ComplexImage) -> Result<Vec<f64>, SpectralError> {
    let uncentered = unshift_image(spectrum);
    let restored = Transform2d::new().transform(&uncentered, FftDirection::Inverse)?;
    Ok(restored.magnitudes())
}

/// One loaded image plus its canonical centered spectrum.
pub struct SpectralSession {
    width: usize,
    height: usize,
    spectrum: ComplexImage,
    fft: Transform2d,
}

impl SpectralSession {
    /// Run the forward pipeline over `pixels` and keep the result as the
    /// canonical spectrum for all later edits.
    pub fn load(pixels: &[f64], width: usize, height: usize) -> Result<Self, SpectralError> {
        if width == 0 || height == 0 {
            return Err(SpectralError::EmptyImage { width, height });
        }
        if width % 2 != 0 || height % 2 != 0 {
            return Err(SpectralError::OddDimensions { width, height });
        }

        let mut fft = Transform2d::new();
        let image = ComplexImage::from_real(pixels, width, height)?;
        let spectrum = shift_image(&fft.transform(&image, FftDirection::Forward)?);
        debug!("loaded {}x{} image into spectral session", width, height);

        Ok(Self {
            width,
            height,
            spectrum,
            fft,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The canonical centered spectrum. Read-only for the session lifetime.
    pub fn spectrum(&self) -> &ComplexImage {
        &self.spectrum
    }

    /// Normalized log-magnitude view of the canonical spectrum, for display.
    pub fn spectrum_view(&self) -> Vec<f64> {
        normalize_for_display(&self.spectrum.magnitudes())
    }

    /// Reconstruct the unmodified image from the canonical spectrum.
    pub fn reconstruct(&mut self) -> Result<Vec<f64>, SpectralError> {
        let uncentered = unshift_image(&self.spectrum);
        let restored = self.fft.transform(&uncentered, FftDirection::Inverse)?;
        Ok(restored.magnitudes())
    }

    /// Composite a stroke-derived attenuation mask with the canonical
    /// spectrum and reconstruct the filtered image.
    ///
    /// The mask must cover the same centered canvas as the spectrum view;
    /// a length mismatch means the caller rasterized against the wrong
    /// dimensions and aborts the edit. The canonical spectrum is left
    /// untouched either way.
    pub fn apply_stroke_mask(&mut self, mask: &[f64]) -> Result<Vec<f64>, SpectralError> {
        if mask.len() != self.spectrum.len() {
            return Err(SpectralError::MaskMismatch {
                mask_len: mask.len(),
                spectrum_len: self.spectrum.len(),
            });
        }

        let suppressed = mask.iter().filter(|&&a| a > 0.0).count();
        debug!(
            "masking {} of {} frequency bins",
            suppressed,
            self.spectrum.len()
        );

        let masked = apply_mask(&self.spectrum, mask);
        let uncentered = unshift_image(&masked);
        let restored = self.fft.transform(&uncentered, FftDirection::Inverse)?;
        Ok(restored.magnitudes())
    }
}
