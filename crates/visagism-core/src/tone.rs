//! Skin undertone from a single sampled RGB pixel.
//!
//! An ordered channel-difference decision table. The thresholds are
//! calibrated values and must stay exactly as they are.

use crate::types::SkinTone;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const WARM_MIN_GB_DIFF: i16 = 30;
const WARM_MAX_RG_DIFF: i16 = 40;
const COOL_MAX_GB_DIFF: i16 = 20;
const RUDDY_MIN_RG_DIFF: i16 = 50;
const RUDDY_MIN_GB_DIFF: i16 = 20;
const OLIVE_MAX_RG_DIFF: i16 = 25;
const OLIVE_MIN_GB_DIFF: i16 = 25;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid hex colour {0:?} (expected #rrggbb)")]
pub struct HexColorError(pub String);

/// One RGB pixel sampled from a user-supplied image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkinSample {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl SkinSample {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`, lowercase.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn from_hex(s: &str) -> Result<Self, HexColorError> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HexColorError(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| HexColorError(s.to_string()))
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

impl fmt::Display for SkinSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for SkinSample {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Classify a sampled pixel's undertone. Always returns a tone.
pub fn classify(sample: SkinSample) -> SkinTone {
    let (r, g, b) = (sample.r as i16, sample.g as i16, sample.b as i16);

    let tone = if g > r {
        // Green-dominant pixel: shadow or a mis-tap, not skin.
        SkinTone::Neutral
    } else if r > g && g > b {
        let rg_diff = r - g;
        let gb_diff = g - b;

        if gb_diff > WARM_MIN_GB_DIFF && rg_diff < WARM_MAX_RG_DIFF {
            SkinTone::Warm
        } else if gb_diff < COOL_MAX_GB_DIFF {
            SkinTone::Cool
        } else if rg_diff > RUDDY_MIN_RG_DIFF && gb_diff > RUDDY_MIN_GB_DIFF {
            SkinTone::Warm
        } else if rg_diff < OLIVE_MAX_RG_DIFF && gb_diff > OLIVE_MIN_GB_DIFF {
            SkinTone::Olive
        } else {
            SkinTone::Neutral
        }
    } else {
        SkinTone::Neutral
    };

    tracing::debug!(r, g, b, tone = %tone, "classified skin tone");
    tone
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_diffs_at_fifty_fall_through_to_neutral() {
        // rg=50, gb=50: not warm (rg !< 40), not ruddy (rg !> 50), not olive.
        assert_eq!(classify(SkinSample::new(200, 150, 100)), SkinTone::Neutral);
    }

    #[test]
    fn test_warm_golden() {
        // rg=20, gb=60
        assert_eq!(classify(SkinSample::new(180, 160, 100)), SkinTone::Warm);
    }

    #[test]
    fn test_green_dominant_is_neutral() {
        assert_eq!(classify(SkinSample::new(120, 130, 100)), SkinTone::Neutral);
        assert_eq!(classify(SkinSample::new(0, 255, 255)), SkinTone::Neutral);
    }

    #[test]
    fn test_cool_pink() {
        // rg=40, gb=10
        assert_eq!(classify(SkinSample::new(230, 190, 180)), SkinTone::Cool);
    }

    #[test]
    fn test_warm_ruddy() {
        // rg=60, gb=25: first warm rule fails (gb !> 30), ruddy rule fires.
        assert_eq!(classify(SkinSample::new(200, 140, 115)), SkinTone::Warm);
    }

    #[test]
    fn test_olive_band_below_warm_rule() {
        // Olive needs rg < 25 and gb > 25; with gb > 30 the warm rule wins
        // first, so olive only fires for gb in 26..=30.
        assert_eq!(classify(SkinSample::new(160, 140, 112)), SkinTone::Olive);
        assert_eq!(classify(SkinSample::new(160, 140, 109)), SkinTone::Warm);
    }

    #[test]
    fn test_gb_diff_boundaries() {
        // gb=20 exactly: not cool; rg=45 not ruddy → neutral.
        assert_eq!(classify(SkinSample::new(205, 160, 140)), SkinTone::Neutral);
        // gb=19: cool.
        assert_eq!(classify(SkinSample::new(205, 160, 141)), SkinTone::Cool);
    }

    #[test]
    fn test_non_descending_channels_are_neutral() {
        // r == g
        assert_eq!(classify(SkinSample::new(150, 150, 100)), SkinTone::Neutral);
        // g == b
        assert_eq!(classify(SkinSample::new(200, 150, 150)), SkinTone::Neutral);
        // b > g
        assert_eq!(classify(SkinSample::new(200, 120, 180)), SkinTone::Neutral);
    }

    #[test]
    fn test_extremes_do_not_overflow() {
        assert_eq!(classify(SkinSample::new(255, 128, 0)), SkinTone::Warm);
        assert_eq!(classify(SkinSample::new(0, 0, 0)), SkinTone::Neutral);
        assert_eq!(classify(SkinSample::new(255, 255, 255)), SkinTone::Neutral);
    }

    #[test]
    fn test_idempotent() {
        let s = SkinSample::new(214, 170, 139);
        let first = classify(s);
        for _ in 0..10 {
            assert_eq!(classify(s), first);
        }
    }

    #[test]
    fn test_hex() {
        let s = SkinSample::new(200, 150, 100);
        assert_eq!(s.hex(), "#c89664");
        assert_eq!(SkinSample::from_hex("#C89664").unwrap(), s);
        assert_eq!(SkinSample::from_hex("c89664").unwrap(), s);
        assert!(SkinSample::from_hex("#c8966").is_err());
        assert!(SkinSample::from_hex("#zz9664").is_err());
        assert!(SkinSample::from_hex("#c8966é").is_err());
        // from_str_radix alone would take a leading sign per channel.
        assert!(SkinSample::from_hex("#+1+2+3").is_err());
        assert!(SkinSample::from_hex("+1+2+3").is_err());
        assert!(SkinSample::from_hex("#-1ff00").is_err());
    }
}
