//! Pixel I/O around the spectral core
//!
//! The core works in [0,1] intensity arrays; this module is the
//! collaborator that decodes image files into those arrays and encodes
//! result arrays back to disk, optionally through a colormap.

use anyhow::{bail, Context, Result};
use image::{GrayImage, ImageBuffer, Rgb};
use std::path::Path;

/// Color mapping for saved views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colormap {
    Grayscale,
    Viridis,
}

impl Default for Colormap {
    fn default() -> Self {
        Self::Grayscale
    }
}

impl Colormap {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "grayscale" | "gray" => Some(Self::Grayscale),
            "viridis" => Some(Self::Viridis),
            _ => None,
        }
    }

    fn color(&self, value: f64) -> Rgb<u8> {
        let v = value.clamp(0.0, 1.0);
        match self {
            Colormap::Grayscale => {
                let g = (v * 255.0) as u8;
                Rgb([g, g, g])
            }
            Colormap::Viridis => {
                let r = (68.0 + v * (235.0 - 68.0)) as u8;
                let g = (1.0 + v * (237.0 - 1.0)) as u8;
                let b = (84.0 + v * (32.0 - 84.0 + (1.0 - v) * 150.0)) as u8;
                Rgb([r, g, b])
            }
        }
    }
}

/// Decode an image file into grayscale intensities in [0,1].
pub fn load_intensity(path: &Path) -> Result<(Vec<f64>, usize, usize)> {
    let img = image::open(path)
        .with_context(|| format!("failed to open image: {}", path.display()))?
        .into_luma8();
    let (width, height) = img.dimensions();

    let pixels = img
        .as_raw()
        .iter()
        .map(|&p| p as f64 / 255.0)
        .collect();

    Ok((pixels, width as usize, height as usize))
}

/// Decode a grayscale mask image into attenuation values in [0,1].
///
/// White means full suppression. The mask must match the spectrum canvas;
/// anything else indicates it was painted over a different image.
pub fn load_mask(path: &Path, width: usize, height: usize) -> Result<Vec<f64>> {
    let (values, mask_w, mask_h) = load_intensity(path)?;
    if mask_w != width || mask_h != height {
        bail!(
            "mask is {}x{} but the spectrum canvas is {}x{}",
            mask_w,
            mask_h,
            width,
            height
        );
    }
    Ok(values)
}

/// Encode a [0,1] value array as a grayscale PNG.
pub fn save_grayscale(values: &[f64], width: usize, height: usize, path: &Path) -> Result<()> {
    let raw: Vec<u8> = values
        .iter()
        .map(|&v| (v.clamp(0.0, 1.0) * 255.0) as u8)
        .collect();

    let img = GrayImage::from_raw(width as u32, height as u32, raw)
        .context("value array does not fill the stated dimensions")?;
    img.save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Encode a [0,1] value array through a colormap.
pub fn save_view(
    values: &[f64],
    width: usize,
    height: usize,
    colormap: Colormap,
    path: &Path,
) -> Result<()> {
    if values.len() != width * height {
        bail!(
            "value array of {} does not fill {}x{}",
            values.len(),
            width,
            height
        );
    }

    let mut img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::new(width as u32, height as u32);
    for (i, pixel) in img.pixels_mut().enumerate() {
        *pixel = colormap.color(values[i]);
    }
    img.save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
