//! Static style catalog keyed by gender, archetype and category.
//!
//! The tables are `'static` and read-only. Every (gender, archetype, category)
//! triple is covered by an exhaustive `match`, so a missing list is a compile
//! error rather than a runtime miss.

use crate::types::{Archetype, Category, Gender};
use serde::Serialize;

/// One recommended hair or eyewear style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StyleEntry {
    pub name: &'static str,
    /// Reference image path, relative to the asset root.
    pub reference_image: &'static str,
    pub guidance: &'static str,
}

/// A catalog entry tagged with the archetype list it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub archetype: Archetype,
    pub entry: StyleEntry,
}

macro_rules! styles {
    ($(($name:expr, $img:expr, $guide:expr)),+ $(,)?) => {
        &[$(StyleEntry { name: $name, reference_image: $img, guidance: $guide }),+]
    };
}

// --- Female hair ---
const FEMALE_HAIR_MELANCHOLIC: &[StyleEntry] = styles![
    ("Soft long layers", "styles/female/hair/melancholic-long-layers.jpg",
     "Light layering from the chin down keeps the oval's balance and adds gentle movement."),
    ("Romantic waves", "styles/female/hair/melancholic-waves.jpg",
     "Loose waves soften the outline; avoid heavy volume on top."),
    ("Low chignon", "styles/female/hair/melancholic-chignon.jpg",
     "A relaxed low bun with face-framing strands reads refined rather than severe."),
];
const FEMALE_HAIR_CHOLERIC: &[StyleEntry] = styles![
    ("Sharp long bob", "styles/female/hair/choleric-long-bob.jpg",
     "A blunt cut at collarbone length echoes the strong jaw with clean horizontal lines."),
    ("Sleek straight", "styles/female/hair/choleric-sleek.jpg",
     "Polished straight hair with a centre part reinforces an authoritative presence."),
    ("Side-swept fringe", "styles/female/hair/choleric-side-fringe.jpg",
     "A diagonal fringe breaks the width of the forehead and softens angular corners."),
];
const FEMALE_HAIR_PHLEGMATIC: &[StyleEntry] = styles![
    ("Long face-framing layers", "styles/female/hair/phlegmatic-framing-layers.jpg",
     "Layers starting below the chin lengthen the face; keep volume off the cheeks."),
    ("Asymmetric bob", "styles/female/hair/phlegmatic-asymmetric-bob.jpg",
     "Uneven lengths add vertical lines that counter roundness."),
    ("High ponytail", "styles/female/hair/phlegmatic-high-ponytail.jpg",
     "Height at the crown elongates the silhouette."),
];
const FEMALE_HAIR_SANGUINE: &[StyleEntry] = styles![
    ("Textured shag", "styles/female/hair/sanguine-shag.jpg",
     "Choppy layers and movement suit an expressive, dynamic face."),
    ("Curtain bangs", "styles/female/hair/sanguine-curtain-bangs.jpg",
     "Parted bangs balance a wide forehead or a wide jaw by adding width where it is missing."),
    ("Chin-length bob with volume", "styles/female/hair/sanguine-volume-bob.jpg",
     "Fullness at jaw level evens out a narrow chin; keep the crown flat."),
];

// --- Male hair ---
const MALE_HAIR_MELANCHOLIC: &[StyleEntry] = styles![
    ("Classic side part", "styles/male/hair/melancholic-side-part.jpg",
     "A soft side part keeps the oval proportions intact."),
    ("Medium textured crop", "styles/male/hair/melancholic-textured-crop.jpg",
     "Light texture on top with tapered sides reads tidy and understated."),
    ("Swept-back medium length", "styles/male/hair/melancholic-swept-back.jpg",
     "Loose, brushed-back length adds quiet elegance without bulk."),
];
const MALE_HAIR_CHOLERIC: &[StyleEntry] = styles![
    ("Crew cut", "styles/male/hair/choleric-crew-cut.jpg",
     "Short, structured sides echo a defined jaw and strong lines."),
    ("Pompadour", "styles/male/hair/choleric-pompadour.jpg",
     "Controlled height on top with tight sides projects confidence."),
    ("Short fringe", "styles/male/hair/choleric-short-fringe.jpg",
     "A forward fringe shortens an oblong face and softens the forehead."),
];
const MALE_HAIR_PHLEGMATIC: &[StyleEntry] = styles![
    ("Quiff with faded sides", "styles/male/hair/phlegmatic-quiff.jpg",
     "Volume on top and short sides add height and narrow the cheeks."),
    ("Undercut", "styles/male/hair/phlegmatic-undercut.jpg",
     "Clean sides with length on top create vertical lines."),
    ("Angular fringe", "styles/male/hair/phlegmatic-angular-fringe.jpg",
     "An angled fringe introduces corners that counter roundness."),
];
const MALE_HAIR_SANGUINE: &[StyleEntry] = styles![
    ("Messy textured top", "styles/male/hair/sanguine-messy-top.jpg",
     "Movement and texture match an energetic, expressive character."),
    ("Medium length with fringe", "styles/male/hair/sanguine-medium-fringe.jpg",
     "A fringe narrows a wide forehead; fuller sides balance a narrow chin."),
    ("Taper with side volume", "styles/male/hair/sanguine-side-volume.jpg",
     "Keep some width at the temples when the jaw is dominant."),
];

// --- Female glasses ---
const FEMALE_GLASSES_MELANCHOLIC: &[StyleEntry] = styles![
    ("Thin metal round", "styles/female/glasses/melancholic-thin-round.jpg",
     "Fine wire frames respect delicate features."),
    ("Soft cat-eye", "styles/female/glasses/melancholic-soft-cat-eye.jpg",
     "A subtle upswept corner adds lift without hardening the face."),
    ("Translucent oval", "styles/female/glasses/melancholic-translucent-oval.jpg",
     "Light-coloured acetate keeps the look discreet."),
];
const FEMALE_GLASSES_CHOLERIC: &[StyleEntry] = styles![
    ("Round acetate", "styles/female/glasses/choleric-round.jpg",
     "Curved frames soften angular features and a strong jaw."),
    ("Oversized oval", "styles/female/glasses/choleric-oversized-oval.jpg",
     "Generous curves offset straight lines; choose frames as wide as the cheekbones."),
    ("Rimless", "styles/female/glasses/choleric-rimless.jpg",
     "Minimal frames avoid adding weight to strong features."),
];
const FEMALE_GLASSES_PHLEGMATIC: &[StyleEntry] = styles![
    ("Rectangular", "styles/female/glasses/phlegmatic-rectangular.jpg",
     "Straight lines add definition to a round face."),
    ("Angular cat-eye", "styles/female/glasses/phlegmatic-angular-cat-eye.jpg",
     "Sharp upswept corners draw the eye upward and lengthen the face."),
    ("Geometric", "styles/female/glasses/phlegmatic-geometric.jpg",
     "Hexagonal or square lenses introduce structure."),
];
const FEMALE_GLASSES_SANGUINE: &[StyleEntry] = styles![
    ("Bottom-heavy frames", "styles/female/glasses/sanguine-bottom-heavy.jpg",
     "Weight on the lower rim balances a wide forehead."),
    ("Browline", "styles/female/glasses/sanguine-browline.jpg",
     "A strong top bar balances a dominant jaw."),
    ("Coloured aviator", "styles/female/glasses/sanguine-aviator.jpg",
     "Playful colour and diagonal lines fit an expressive personality."),
];

// --- Male glasses ---
const MALE_GLASSES_MELANCHOLIC: &[StyleEntry] = styles![
    ("Classic wayfarer", "styles/male/glasses/melancholic-wayfarer.jpg",
     "Most frames suit an oval face; the wayfarer keeps proportions balanced."),
    ("Thin metal rectangle", "styles/male/glasses/melancholic-thin-rectangle.jpg",
     "A light frame stays understated."),
    ("Panto", "styles/male/glasses/melancholic-panto.jpg",
     "A keyhole bridge and soft round lens add a refined touch."),
];
const MALE_GLASSES_CHOLERIC: &[StyleEntry] = styles![
    ("Round metal", "styles/male/glasses/choleric-round-metal.jpg",
     "Round lenses soften a square jaw."),
    ("Oval acetate", "styles/male/glasses/choleric-oval.jpg",
     "Curves counter angles; pick a deep lens for an oblong face."),
    ("Aviator", "styles/male/glasses/choleric-aviator.jpg",
     "Teardrop lenses add curves while keeping a bold character."),
];
const MALE_GLASSES_PHLEGMATIC: &[StyleEntry] = styles![
    ("Rectangular acetate", "styles/male/glasses/phlegmatic-rectangular.jpg",
     "Angular frames add definition and make the face look longer."),
    ("Square", "styles/male/glasses/phlegmatic-square.jpg",
     "Sharp corners contrast soft contours."),
    ("Browline", "styles/male/glasses/phlegmatic-browline.jpg",
     "A heavy top line adds structure at eye level."),
];
const MALE_GLASSES_SANGUINE: &[StyleEntry] = styles![
    ("Rimless", "styles/male/glasses/sanguine-rimless.jpg",
     "Light frames keep a wide forehead from looking heavier."),
    ("Bottom-heavy rectangle", "styles/male/glasses/sanguine-bottom-heavy.jpg",
     "Weight low on the frame balances a narrow chin."),
    ("Clubmaster", "styles/male/glasses/sanguine-clubmaster.jpg",
     "A bold brow bar balances a wide jaw."),
];

/// Ordered recommendations for one archetype and category.
pub fn lookup(gender: Gender, archetype: Archetype, category: Category) -> &'static [StyleEntry] {
    use Archetype::*;
    use Category::*;
    use Gender::*;

    match (gender, category, archetype) {
        (Female, Hair, Melancholic) => FEMALE_HAIR_MELANCHOLIC,
        (Female, Hair, Choleric) => FEMALE_HAIR_CHOLERIC,
        (Female, Hair, Phlegmatic) => FEMALE_HAIR_PHLEGMATIC,
        (Female, Hair, Sanguine) => FEMALE_HAIR_SANGUINE,
        (Male, Hair, Melancholic) => MALE_HAIR_MELANCHOLIC,
        (Male, Hair, Choleric) => MALE_HAIR_CHOLERIC,
        (Male, Hair, Phlegmatic) => MALE_HAIR_PHLEGMATIC,
        (Male, Hair, Sanguine) => MALE_HAIR_SANGUINE,
        (Female, Glasses, Melancholic) => FEMALE_GLASSES_MELANCHOLIC,
        (Female, Glasses, Choleric) => FEMALE_GLASSES_CHOLERIC,
        (Female, Glasses, Phlegmatic) => FEMALE_GLASSES_PHLEGMATIC,
        (Female, Glasses, Sanguine) => FEMALE_GLASSES_SANGUINE,
        (Male, Glasses, Melancholic) => MALE_GLASSES_MELANCHOLIC,
        (Male, Glasses, Choleric) => MALE_GLASSES_CHOLERIC,
        (Male, Glasses, Phlegmatic) => MALE_GLASSES_PHLEGMATIC,
        (Male, Glasses, Sanguine) => MALE_GLASSES_SANGUINE,
    }
}

/// Every entry for a category across all archetypes, in `Archetype::ALL` order.
pub fn lookup_all(gender: Gender, category: Category) -> Vec<CatalogEntry> {
    Archetype::ALL
        .into_iter()
        .flat_map(|archetype| {
            lookup(gender, archetype, category)
                .iter()
                .map(move |&entry| CatalogEntry { archetype, entry })
        })
        .collect()
}

/// Case-insensitive substring search over names and guidance.
/// An empty query returns the full category.
pub fn search(gender: Gender, category: Category, query: &str) -> Vec<CatalogEntry> {
    let needle = query.trim().to_lowercase();
    let mut hits = lookup_all(gender, category);
    if !needle.is_empty() {
        hits.retain(|c| {
            c.entry.name.to_lowercase().contains(&needle)
                || c.entry.guidance.to_lowercase().contains(&needle)
        });
    }
    tracing::debug!(%gender, %category, query, hits = hits.len(), "catalog search");
    hits
}
