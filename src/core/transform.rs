//! Separable 2D discrete Fourier transform
//!
//! The 2D transform is two passes of 1D FFTs: every row, then every column.
//! Rows are contiguous in the row-major buffer and transform in place;
//! columns gather into a single reusable column buffer and scatter back.
//! Both directions run the passes in the same row-then-column order, so the
//! inverse exactly undoes the forward pass up to floating-point rounding.
//!
//! Normalization follows the Matlab convention: the forward pass is
//! unnormalized and each inverse 1D call divides by its length. A forward
//! plus inverse round trip therefore comes back at the original scale.

use num_complex::Complex;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

use super::buffer::ComplexImage;
use super::error::SpectralError;

pub use rustfft::FftDirection;

/// Separable 2D FFT with plan reuse across calls.
pub struct Transform2d {
    planner: FftPlanner<f64>,
}

impl Transform2d {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// Transform `image` in the requested direction into a new buffer.
    ///
    /// Output dimensions equal input dimensions and the output never
    /// aliases the input storage. A zero-area image is rejected rather
    /// than silently returning an empty buffer.
    pub fn transform(
        &mut self,
        image: &ComplexImage,
        direction: FftDirection,
    ) -> Result<ComplexImage, SpectralError> {
        let width = image.width();
        let height = image.height();
        if width == 0 || height == 0 {
            return Err(SpectralError::EmptyImage { width, height });
        }

        let mut data = image.data().to_vec();

        // Row pass: each row is a contiguous width-length sequence.
        let row_fft = self.planner.plan_fft(width, direction);
        let mut scratch = vec![Complex::default(); row_fft.get_inplace_scratch_len()];
        for row in data.chunks_exact_mut(width) {
            row_fft.process_with_scratch(row, &mut scratch);
        }
        if direction == FftDirection::Inverse {
            scale(&mut data, 1.0 / width as f64);
        }

        // Column pass: gather, transform, scatter.
        let col_fft: Arc<dyn Fft<f64>> = self.planner.plan_fft(height, direction);
        scratch.resize(col_fft.get_inplace_scratch_len(), Complex::default());
        let mut column = vec![Complex::default(); height];
        for x in 0..width {
            for y in 0..height {
                column[y] = data[y * width + x];
            }
            col_fft.process_with_scratch(&mut column, &mut scratch);
            for y in 0..height {
                data[y * width + x] = column[y];
            }
        }
        if direction == FftDirection::Inverse {
            scale(&mut data, 1.0 / height as f64);
        }

        ComplexImage::new(data, width, height)
    }
}

impl Default for Transform2d {
    fn default() -> Self {
        Self::new()
    }
}

fn scale(data: &mut [Complex<f64>], factor: f64) {
    for value in data.iter_mut() {
        *value *= factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward(pixels: &[f64], width: usize, height: usize) -> ComplexImage {
        let image = ComplexImage::from_real(pixels, width, height).unwrap();
        Transform2d::new()
            .transform(&image, FftDirection::Forward)
            .unwrap()
    }

    #[test]
    fn dc_bin_is_sum_of_inputs() {
        let pixels: Vec<f64> = (1..=16).map(|v| v as f64).collect();
        let spectrum = forward(&pixels, 4, 4);

        let expected: f64 = pixels.iter().sum();
        assert!((spectrum.data()[0].re - expected).abs() < 1e-9);
        assert!(spectrum.data()[0].im.abs() < 1e-9);
    }

    #[test]
    fn constant_image_concentrates_in_dc() {
        let spectrum = forward(&[0.5; 16], 4, 4);

        assert!((spectrum.data()[0].re - 8.0).abs() < 1e-9);
        for bin in &spectrum.data()[1..] {
            assert!(bin.norm() < 1e-9);
        }
    }

    #[test]
    fn round_trip_recovers_input() {
        let (w, h) = (8usize, 6usize);
        let pixels: Vec<f64> = (0..w * h).map(|i| ((i * 7 + 3) % 11) as f64 / 11.0).collect();

        let mut fft = Transform2d::new();
        let image = ComplexImage::from_real(&pixels, w, h).unwrap();
        let spectrum = fft.transform(&image, FftDirection::Forward).unwrap();
        let back = fft.transform(&spectrum, FftDirection::Inverse).unwrap();

        for (orig, rec) in pixels.iter().zip(back.data()) {
            assert!((orig - rec.re).abs() < 1e-9);
            assert!(rec.im.abs() < 1e-9);
        }
    }

    #[test]
    fn parseval_energy_matches() {
        let (w, h) = (4usize, 4usize);
        let pixels: Vec<f64> = (0..16).map(|i| ((i * 5 + 2) % 7) as f64).collect();

        let spatial: f64 = pixels.iter().map(|v| v * v).sum();
        let spectrum = forward(&pixels, w, h);
        let freq: f64 = spectrum.data().iter().map(|c| c.norm_sqr()).sum();

        assert!((spatial - freq / (w * h) as f64).abs() < 1e-9);
    }

    #[test]
    fn zero_area_image_is_rejected() {
        let image = ComplexImage::from_real(&[], 0, 4).unwrap();
        let err = Transform2d::new()
            .transform(&image, FftDirection::Forward)
            .unwrap_err();
        assert_eq!(err, SpectralError::EmptyImage { width: 0, height: 4 });
    }

    #[test]
    fn output_does_not_alias_input() {
        let image = ComplexImage::from_real(&[1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        let before = image.clone();
        let _ = Transform2d::new()
            .transform(&image, FftDirection::Forward)
            .unwrap();
        assert_eq!(image, before);
    }
}
