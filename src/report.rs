//! Per-image processing report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::ComplexImage;

/// Summary of one processed image, serializable for machine consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub width: usize,
    pub height: usize,
    /// Magnitude of the zero-frequency bin (image brightness sum).
    pub dc_magnitude: f64,
    /// Largest bin magnitude anywhere in the spectrum.
    pub peak_magnitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<MaskSummary>,
}

/// Statistics over an applied attenuation mask.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskSummary {
    /// Fraction of bins with any attenuation at all.
    pub coverage: f64,
    /// Mean attenuation over the touched bins.
    pub mean_attenuation: f64,
    /// Bins fully suppressed (mask value 1.0).
    pub suppressed_bins: usize,
}

impl SessionReport {
    /// Build a report from the canonical centered spectrum.
    pub fn from_spectrum(source: &str, spectrum: &ComplexImage) -> Self {
        let width = spectrum.width();
        let height = spectrum.height();
        let center = (height / 2) * width + width / 2;

        let magnitudes = spectrum.magnitudes();
        let dc_magnitude = magnitudes.get(center).copied().unwrap_or(0.0);
        let peak_magnitude = magnitudes.iter().cloned().fold(0.0f64, f64::max);

        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            source: source.to_string(),
            width,
            height,
            dc_magnitude,
            peak_magnitude,
            mask: None,
        }
    }

    pub fn with_mask(mut self, mask: &[f64]) -> Self {
        self.mask = Some(MaskSummary::from_mask(mask));
        self
    }
}

impl MaskSummary {
    pub fn from_mask(mask: &[f64]) -> Self {
        let touched: Vec<f64> = mask.iter().copied().filter(|&a| a > 0.0).collect();
        let coverage = if mask.is_empty() {
            0.0
        } else {
            touched.len() as f64 / mask.len() as f64
        };
        let mean_attenuation = if touched.is_empty() {
            0.0
        } else {
            touched.iter().sum::<f64>() / touched.len() as f64
        };
        let suppressed_bins = mask.iter().filter(|&&a| a >= 1.0).count();

        Self {
            coverage,
            mean_attenuation,
            suppressed_bins,
        }
    }
}
