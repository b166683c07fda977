//! One-shot consultation: geometry, optional skin tone, and the matching
//! style lists for the derived archetype.

use crate::catalog::{self, StyleEntry};
use crate::geometry::{self, FaceAnalysis, FaceMeasurement};
use crate::tone::{self, SkinSample};
use crate::types::{Category, Gender, SkinTone};
use serde::Serialize;

/// Tone result together with the sample it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToneReading {
    pub sample: SkinSample,
    pub hex: String,
    pub tone: SkinTone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Consultation {
    pub gender: Gender,
    pub face: FaceAnalysis,
    pub archetype_summary: &'static str,
    pub skin: Option<ToneReading>,
    pub hair: &'static [StyleEntry],
    pub glasses: &'static [StyleEntry],
}

/// Classify the face (and skin, when sampled) and look up recommendations.
///
/// Like [`geometry::classify`], this assumes `measurement` already passed
/// [`FaceMeasurement::validate`].
pub fn consult(
    gender: Gender,
    measurement: &FaceMeasurement,
    sample: Option<SkinSample>,
) -> Consultation {
    let face = geometry::classify(measurement);
    let skin = sample.map(|sample| ToneReading {
        sample,
        hex: sample.hex(),
        tone: tone::classify(sample),
    });

    tracing::info!(
        %gender,
        shape = %face.shape,
        archetype = %face.archetype,
        tone = ?skin.as_ref().map(|s| s.tone),
        "consultation complete"
    );

    Consultation {
        gender,
        face,
        archetype_summary: face.archetype.summary(),
        skin,
        hair: catalog::lookup(gender, face.archetype, Category::Hair),
        glasses: catalog::lookup(gender, face.archetype, Category::Glasses),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Archetype, FaceShape};

    #[test]
    fn test_consult_triangle_female() {
        let m = FaceMeasurement::new(50.0, 50.0, 60.0, 50.0).unwrap();
        let c = consult(Gender::Female, &m, Some(SkinSample::new(180, 160, 100)));

        assert_eq!(c.face.shape, FaceShape::Triangle);
        assert_eq!(c.face.archetype, Archetype::Sanguine);
        assert_eq!(c.hair, catalog::lookup(Gender::Female, Archetype::Sanguine, Category::Hair));
        assert_eq!(
            c.glasses,
            catalog::lookup(Gender::Female, Archetype::Sanguine, Category::Glasses)
        );
        let skin = c.skin.unwrap();
        assert_eq!(skin.tone, SkinTone::Warm);
        assert_eq!(skin.hex, "#b4a064");
    }

    #[test]
    fn test_consult_without_sample() {
        let c = consult(Gender::Male, &FaceMeasurement::default(), None);
        assert!(c.skin.is_none());
        assert_eq!(c.face.archetype, Archetype::Melancholic);
        assert_eq!(c.hair[0].name, "Classic side part");
    }

    #[test]
    fn test_consultation_json_shape() {
        let m = FaceMeasurement::new(60.0, 50.0, 45.0, 50.0).unwrap();
        let c = consult(Gender::Female, &m, Some(SkinSample::new(120, 130, 100)));
        let v = serde_json::to_value(&c).unwrap();

        assert_eq!(v["gender"], "female");
        assert_eq!(v["face"]["shape"], "inverted_triangle");
        assert_eq!(v["face"]["archetype"], "sanguine");
        assert_eq!(v["skin"]["tone"], "neutral");
        assert_eq!(v["skin"]["sample"]["g"], 130);
        assert!(v["hair"].as_array().is_some_and(|a| !a.is_empty()));
        assert!(v["glasses"][0]["reference_image"].is_string());
    }
}
