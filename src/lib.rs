//! FreqPaint - Paint over an image's frequency spectrum
//!
//! Loads an image, shows its centered 2D Fourier spectrum, and lets strokes
//! drawn over the spectrum attenuate the underlying frequency bins. The
//! reconstruction (inverse transform) updates after every completed stroke.
//!
//! ## How it works
//!
//! - **Forward pipeline**: intensities -> separable 2D FFT (rows then
//!   columns) -> quadrant shift so DC sits at the center -> stored as the
//!   canonical spectrum, displayed through log-magnitude normalization
//! - **Edit pipeline**: canonical spectrum + stroke-derived attenuation
//!   mask -> per-bin attenuation -> inverse shift -> inverse 2D FFT ->
//!   magnitude image
//! - **Mirrored strokes**: spectra of real images are point-symmetric, so
//!   every stroke is recorded together with its reflection about the center
//!
//! ## Module Structure
//!
//! - `core` - complex buffers, transforms, shifting, normalization, masking
//! - `stroke` - pointer-event capture and mask rasterization
//! - `render` - image decode/encode and colormaps
//! - `report` - serializable per-image summaries
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use freqpaint::core::SpectralSession;
//! use freqpaint::stroke::{Brush, MirroredStrokes, PointerEvent, PointerSample, rasterize};
//!
//! let mut session = SpectralSession::load(&pixels, width, height)?;
//! let view = session.spectrum_view();
//!
//! let mut strokes = MirroredStrokes::new(width, height);
//! strokes.handle(PointerEvent::Down(PointerSample::new(120.0, 80.0, 1.0)));
//! strokes.handle(PointerEvent::Up(PointerSample::new(140.0, 95.0, 1.0)));
//!
//! let mask = rasterize(strokes.strokes(), width, height, &Brush::default());
//! let filtered = session.apply_stroke_mask(&mask)?;
//! ```

// Transform pipeline and session state
pub mod core;

// Stroke capture and rasterization
pub mod stroke;

// Pixel decode/encode around the core
pub mod render;

// Machine-readable summaries
pub mod report;

// Re-export commonly used types at crate root for convenience
pub use crate::core::{
    apply_mask, forward_transform, inverse_transform, normalize_for_display, ComplexImage,
    SpectralError, SpectralSession, Transform2d,
};
pub use report::{MaskSummary, SessionReport};
pub use stroke::{Brush, MirroredStrokes, PointerEvent, PointerSample};
