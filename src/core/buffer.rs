//! Complex-valued image buffer shared by every pipeline stage

use num_complex::Complex;

use super::error::SpectralError;

/// A width x height plane of complex values in row-major order.
///
/// Construction checks that the data fills the stated dimensions; after that
/// the buffer is read-only in the transform path. Stages never mutate their
/// input, they return freshly allocated buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexImage {
    data: Vec<Complex<f64>>,
    width: usize,
    height: usize,
}

impl ComplexImage {
    /// Wrap an existing complex buffer.
    pub fn new(
        data: Vec<Complex<f64>>,
        width: usize,
        height: usize,
    ) -> Result<Self, SpectralError> {
        if data.len() != width * height {
            return Err(SpectralError::SizeMismatch {
                len: data.len(),
                width,
                height,
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Lift a real intensity plane onto the complex plane (zero imaginary part).
    pub fn from_real(pixels: &[f64], width: usize, height: usize) -> Result<Self, SpectralError> {
        if pixels.len() != width * height {
            return Err(SpectralError::SizeMismatch {
                len: pixels.len(),
                width,
                height,
            });
        }
        let data = pixels.iter().map(|&v| Complex::new(v, 0.0)).collect();
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Allocate an all-zero buffer with the same dimensions as `template`.
    ///
    /// Used when building a modified spectrum so the template is never
    /// written through.
    pub fn zeroed_like(template: &Self) -> Self {
        Self {
            data: vec![Complex::new(0.0, 0.0); template.data.len()],
            width: template.width,
            height: template.height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of values, `width * height`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[Complex<f64>] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.data
    }

    /// Per-element magnitudes, row-major.
    pub fn magnitudes(&self) -> Vec<f64> {
        self.data.iter().map(|c| c.norm()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_buffer() {
        let err = ComplexImage::new(vec![Complex::new(1.0, 0.0); 5], 2, 3).unwrap_err();
        assert_eq!(
            err,
            SpectralError::SizeMismatch {
                len: 5,
                width: 2,
                height: 3
            }
        );
    }

    #[test]
    fn lifts_real_plane() {
        let img = ComplexImage::from_real(&[0.25, 0.5, 0.75, 1.0], 2, 2).unwrap();
        assert_eq!(img.len(), 4);
        assert_eq!(img.data()[1], Complex::new(0.5, 0.0));
        assert_eq!(img.magnitudes(), vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn zeroed_template_matches_dimensions() {
        let img = ComplexImage::from_real(&[1.0; 12], 4, 3).unwrap();
        let blank = ComplexImage::zeroed_like(&img);
        assert_eq!(blank.width(), 4);
        assert_eq!(blank.height(), 3);
        assert!(blank.data().iter().all(|c| c.norm() == 0.0));
    }
}
