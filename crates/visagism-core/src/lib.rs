//! visagism-core — Face-shape and skin-tone classification for style consultation.
//!
//! Two deterministic rule-based classifiers (face geometry, skin undertone)
//! and a static catalog of hair and eyewear recommendations keyed by
//! temperament archetype. Everything here is pure and holds no shared state.

pub mod board;
pub mod catalog;
pub mod consultation;
pub mod geometry;
pub mod sampling;
pub mod tone;
pub mod types;

pub use board::{BoardError, StyleBoard};
pub use catalog::{CatalogEntry, StyleEntry};
pub use consultation::{consult, Consultation, ToneReading};
pub use geometry::{FaceAnalysis, FaceMeasurement, GeometryRatios, MeasurementError};
pub use sampling::SampleError;
pub use tone::{HexColorError, SkinSample};
pub use types::{Archetype, Category, FaceShape, Gender, ParseTagError, SkinTone};
