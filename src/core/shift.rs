//! Quadrant shift: relocate the DC bin to the center of the plane
//!
//! The shift is a pure reindex in two steps: rows rotate down by half the
//! height, then each row rotates right by half the width. For even
//! dimensions the operation is a fixed-point-free involution, so the
//! forward and inverse shifts share one implementation. Odd dimensions
//! break that symmetry; callers that need round trips enforce even sizes.

use super::buffer::ComplexImage;

/// Swap quadrants so the element at (0,0) lands at (width/2, height/2).
///
/// Generic over the element type because the reindex never looks at values,
/// it only moves them. Returns a new buffer.
pub fn fftshift<T: Copy + Default>(data: &[T], width: usize, height: usize) -> Vec<T> {
    debug_assert_eq!(data.len(), width * height);

    let half_x = width / 2;
    let half_y = height / 2;

    // Step 1: row y moves to row (half_y + y) mod height.
    let mut rotated = vec![T::default(); data.len()];
    for y in 0..height {
        let dst = ((half_y + y) % height) * width;
        rotated[dst..dst + width].copy_from_slice(&data[y * width..y * width + width]);
    }

    // Step 2: within each row, columns [half_x, width) move to the front.
    let mut shifted = vec![T::default(); data.len()];
    for y in 0..height {
        let row = &rotated[y * width..(y + 1) * width];
        let out = &mut shifted[y * width..(y + 1) * width];
        out[..width - half_x].copy_from_slice(&row[half_x..]);
        out[width - half_x..].copy_from_slice(&row[..half_x]);
    }

    shifted
}

/// Undo [`fftshift`].
///
/// For even dimensions the quadrant swap is its own inverse, so this is the
/// same reindex.
pub fn ifftshift<T: Copy + Default>(data: &[T], width: usize, height: usize) -> Vec<T> {
    fftshift(data, width, height)
}

/// [`fftshift`] over a complex image, preserving dimensions.
pub fn shift_image(image: &ComplexImage) -> ComplexImage {
    let shifted = fftshift(image.data(), image.width(), image.height());
    ComplexImage::new(shifted, image.width(), image.height())
        .expect("reindex preserves buffer length")
}

/// Inverse of [`shift_image`].
pub fn unshift_image(image: &ComplexImage) -> ComplexImage {
    let shifted = ifftshift(image.data(), image.width(), image.height());
    ComplexImage::new(shifted, image.width(), image.height())
        .expect("reindex preserves buffer length")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dc_moves_to_center() {
        let (w, h) = (4usize, 6usize);
        let mut data = vec![0.0f64; w * h];
        data[0] = 7.0;

        let shifted = fftshift(&data, w, h);
        assert_eq!(shifted[(h / 2) * w + w / 2], 7.0);
        assert_eq!(shifted.iter().filter(|&&v| v != 0.0).count(), 1);
    }

    #[test]
    fn involution_for_even_dimensions() {
        let (w, h) = (6usize, 4usize);
        let data: Vec<u32> = (0..(w * h) as u32).collect();

        let twice = fftshift(&fftshift(&data, w, h), w, h);
        assert_eq!(twice, data);
    }

    #[test]
    fn values_are_repositioned_not_altered() {
        let (w, h) = (4usize, 4usize);
        let data: Vec<f64> = (0..16).map(|i| i as f64 * 0.5).collect();

        let mut shifted = fftshift(&data, w, h);
        let mut original = data.clone();
        shifted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        original.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(shifted, original);
    }

    #[test]
    fn forward_and_inverse_share_layout() {
        let (w, h) = (8usize, 2usize);
        let data: Vec<i32> = (0..16).collect();
        assert_eq!(fftshift(&data, w, h), ifftshift(&data, w, h));
    }
}
