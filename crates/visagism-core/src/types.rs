use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a tag string does not name a known variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value:?} (expected one of: {expected})")]
pub struct ParseTagError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Geometric outline of a face, derived from width/height ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceShape {
    Oval,
    Oblong,
    Triangle,
    InvertedTriangle,
    Square,
    Round,
}

impl FaceShape {
    pub const ALL: [FaceShape; 6] = [
        FaceShape::Oval,
        FaceShape::Oblong,
        FaceShape::Triangle,
        FaceShape::InvertedTriangle,
        FaceShape::Square,
        FaceShape::Round,
    ];

    /// Stable snake_case tag, identical to the serde representation.
    pub fn tag(self) -> &'static str {
        match self {
            FaceShape::Oval => "oval",
            FaceShape::Oblong => "oblong",
            FaceShape::Triangle => "triangle",
            FaceShape::InvertedTriangle => "inverted_triangle",
            FaceShape::Square => "square",
            FaceShape::Round => "round",
        }
    }
}

impl fmt::Display for FaceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

impl FromStr for FaceShape {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace('-', "_");
        FaceShape::ALL
            .into_iter()
            .find(|shape| shape.tag() == norm)
            .ok_or_else(|| ParseTagError {
                kind: "face shape",
                value: s.to_string(),
                expected: "oval, oblong, triangle, inverted_triangle, square, round",
            })
    }
}

/// Temperament archetype used to key style recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Melancholic,
    Choleric,
    Phlegmatic,
    Sanguine,
}

impl Archetype {
    /// Declaration order; catalog dumps follow it.
    pub const ALL: [Archetype; 4] = [
        Archetype::Melancholic,
        Archetype::Choleric,
        Archetype::Phlegmatic,
        Archetype::Sanguine,
    ];

    /// Fixed shape → archetype table. Oval is the melancholic default.
    pub fn for_shape(shape: FaceShape) -> Self {
        match shape {
            FaceShape::Square | FaceShape::Oblong => Archetype::Choleric,
            FaceShape::Round => Archetype::Phlegmatic,
            FaceShape::InvertedTriangle | FaceShape::Triangle => Archetype::Sanguine,
            FaceShape::Oval => Archetype::Melancholic,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Archetype::Melancholic => "melancholic",
            Archetype::Choleric => "choleric",
            Archetype::Phlegmatic => "phlegmatic",
            Archetype::Sanguine => "sanguine",
        }
    }

    /// One-line visual reading of the temperament.
    pub fn summary(self) -> &'static str {
        match self {
            Archetype::Melancholic => {
                "delicate, refined and introspective; soft curves and light lines"
            }
            Archetype::Choleric => {
                "strong, decisive and authoritative; straight lines and defined angles"
            }
            Archetype::Phlegmatic => {
                "calm, approachable and steady; rounded lines and gentle volume"
            }
            Archetype::Sanguine => "dynamic, expressive and sociable; diagonal lines and movement",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

impl FromStr for Archetype {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase();
        Archetype::ALL
            .into_iter()
            .find(|a| a.tag() == norm)
            .ok_or_else(|| ParseTagError {
                kind: "archetype",
                value: s.to_string(),
                expected: "melancholic, choleric, phlegmatic, sanguine",
            })
    }
}

/// Skin undertone derived from a sampled pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinTone {
    Warm,
    Cool,
    Neutral,
    Olive,
}

impl SkinTone {
    pub fn tag(self) -> &'static str {
        match self {
            SkinTone::Warm => "warm",
            SkinTone::Cool => "cool",
            SkinTone::Neutral => "neutral",
            SkinTone::Olive => "olive",
        }
    }
}

impl fmt::Display for SkinTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

/// Recommendation category in the style catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Hair,
    Glasses,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Hair, Category::Glasses];

    pub fn tag(self) -> &'static str {
        match self {
            Category::Hair => "hair",
            Category::Glasses => "glasses",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

impl FromStr for Category {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hair" => Ok(Category::Hair),
            "glasses" | "eyewear" => Ok(Category::Glasses),
            _ => Err(ParseTagError {
                kind: "category",
                value: s.to_string(),
                expected: "hair, glasses",
            }),
        }
    }
}

/// Recommendations are kept separately for female and male presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Female,
    Male,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Female, Gender::Male];

    pub fn tag(self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

impl FromStr for Gender {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "female" | "f" | "woman" => Ok(Gender::Female),
            "male" | "m" | "man" => Ok(Gender::Male),
            _ => Err(ParseTagError {
                kind: "gender",
                value: s.to_string(),
                expected: "female, male",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archetype_table() {
        assert_eq!(Archetype::for_shape(FaceShape::Square), Archetype::Choleric);
        assert_eq!(Archetype::for_shape(FaceShape::Oblong), Archetype::Choleric);
        assert_eq!(Archetype::for_shape(FaceShape::Round), Archetype::Phlegmatic);
        assert_eq!(Archetype::for_shape(FaceShape::Triangle), Archetype::Sanguine);
        assert_eq!(
            Archetype::for_shape(FaceShape::InvertedTriangle),
            Archetype::Sanguine
        );
        assert_eq!(Archetype::for_shape(FaceShape::Oval), Archetype::Melancholic);
    }

    #[test]
    fn test_shape_tags_parse_back() {
        for shape in FaceShape::ALL {
            assert_eq!(shape.tag().parse::<FaceShape>().unwrap(), shape);
        }
        assert_eq!(
            "Inverted-Triangle".parse::<FaceShape>().unwrap(),
            FaceShape::InvertedTriangle
        );
    }

    #[test]
    fn test_serde_tags_match_display() {
        let json = serde_json::to_string(&FaceShape::InvertedTriangle).unwrap();
        assert_eq!(json, "\"inverted_triangle\"");
        let json = serde_json::to_string(&SkinTone::Olive).unwrap();
        assert_eq!(json, "\"olive\"");
    }

    #[test]
    fn test_parse_unknown_tag() {
        let err = "choleri".parse::<Archetype>().unwrap_err();
        assert_eq!(err.kind, "archetype");
        assert!(err.to_string().contains("choleri"));
    }

    #[test]
    fn test_category_and_gender_aliases() {
        assert_eq!("eyewear".parse::<Category>().unwrap(), Category::Glasses);
        assert_eq!("M".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(Gender::default(), Gender::Female);
    }
}
