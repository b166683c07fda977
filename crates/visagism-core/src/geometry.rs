//! Face-shape classification from four width/height measurements.
//!
//! The rules run in a fixed order and later rules overwrite earlier ones.
//! Boundary ratios (exactly 1.1, 0.85, 1.35, 1.5) depend on that order, so
//! it must not be rearranged.

use crate::types::{Archetype, FaceShape};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// --- Decision thresholds ---
const ELONGATED_MIN_HEIGHT_RATIO: f64 = 1.5;
const OBLONG_JAW_RATIO_MIN: f64 = 0.95;
const OBLONG_JAW_RATIO_MAX: f64 = 1.05;
const TRIANGLE_JAW_RATIO: f64 = 1.1;
const INVERTED_TRIANGLE_JAW_RATIO: f64 = 0.85;
const SHORT_FACE_MAX_HEIGHT_RATIO: f64 = 1.35;
/// Cheek/jaw width gap (measurement units) below which a short face reads as square.
const SQUARE_CHEEK_JAW_MAX_DIFF: f64 = 10.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasurementError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} is not a finite number")]
    NonFinite { field: &'static str },
}

/// Four face measurements in consistent units (percent of the image).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceMeasurement {
    pub forehead_width: f64,
    pub cheek_width: f64,
    pub jaw_width: f64,
    pub face_height: f64,
}

impl Default for FaceMeasurement {
    /// Initial slider positions before the user adjusts anything.
    fn default() -> Self {
        Self {
            forehead_width: 30.0,
            cheek_width: 32.0,
            jaw_width: 28.0,
            face_height: 45.0,
        }
    }
}

impl FaceMeasurement {
    /// Build a measurement, rejecting values `classify` cannot divide by.
    pub fn new(
        forehead_width: f64,
        cheek_width: f64,
        jaw_width: f64,
        face_height: f64,
    ) -> Result<Self, MeasurementError> {
        let m = Self {
            forehead_width,
            cheek_width,
            jaw_width,
            face_height,
        };
        m.validate()?;
        Ok(m)
    }

    /// Check the classifier precondition: every field finite and > 0.
    pub fn validate(&self) -> Result<(), MeasurementError> {
        for (field, value) in [
            ("forehead_width", self.forehead_width),
            ("cheek_width", self.cheek_width),
            ("jaw_width", self.jaw_width),
            ("face_height", self.face_height),
        ] {
            if !value.is_finite() {
                return Err(MeasurementError::NonFinite { field });
            }
            if value <= 0.0 {
                return Err(MeasurementError::NonPositive { field, value });
            }
        }
        Ok(())
    }

    pub fn ratios(&self) -> GeometryRatios {
        GeometryRatios {
            jaw_to_forehead: self.jaw_width / self.forehead_width,
            height_to_width: self.face_height / self.cheek_width,
        }
    }
}

/// Ratios the classifier decides on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryRatios {
    pub jaw_to_forehead: f64,
    pub height_to_width: f64,
}

/// Result of classifying one measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceAnalysis {
    pub shape: FaceShape,
    pub archetype: Archetype,
    pub ratios: GeometryRatios,
    /// Height/width ratio above 1.5. Descriptive only.
    pub elongated: bool,
}

/// Classify a face measurement into a shape and archetype.
///
/// Total for any measurement that passes [`FaceMeasurement::validate`];
/// zero or negative widths are a caller error and yield an unspecified shape.
pub fn classify(measurement: &FaceMeasurement) -> FaceAnalysis {
    let ratios = measurement.ratios();
    let GeometryRatios {
        jaw_to_forehead,
        height_to_width,
    } = ratios;

    let mut shape = FaceShape::Oval;
    let mut elongated = false;

    if height_to_width > ELONGATED_MIN_HEIGHT_RATIO {
        elongated = true;
        if (OBLONG_JAW_RATIO_MIN..=OBLONG_JAW_RATIO_MAX).contains(&jaw_to_forehead) {
            shape = FaceShape::Oblong;
        }
    }

    if jaw_to_forehead > TRIANGLE_JAW_RATIO {
        shape = FaceShape::Triangle;
    } else if jaw_to_forehead < INVERTED_TRIANGLE_JAW_RATIO {
        shape = FaceShape::InvertedTriangle;
    } else if height_to_width < SHORT_FACE_MAX_HEIGHT_RATIO {
        let cheek_jaw_diff = (measurement.cheek_width - measurement.jaw_width).abs();
        shape = if cheek_jaw_diff < SQUARE_CHEEK_JAW_MAX_DIFF {
            FaceShape::Square
        } else {
            FaceShape::Round
        };
    }

    let archetype = Archetype::for_shape(shape);

    tracing::debug!(
        jaw_to_forehead,
        height_to_width,
        elongated,
        shape = %shape,
        archetype = %archetype,
        "classified face geometry"
    );

    FaceAnalysis {
        shape,
        archetype,
        ratios,
        elongated,
    }
}
