use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use visagism_core::{
    catalog, geometry, sampling, tone, Archetype, Category, Consultation, FaceAnalysis,
    FaceMeasurement, FaceShape, Gender, SkinSample, StyleBoard, StyleEntry, ToneReading,
};

mod config;

use config::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "visagism", about = "Visagism style consultant CLI", version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify face measurements into a shape and archetype
    Shape {
        #[command(flatten)]
        measurement: MeasurementArgs,
    },
    /// Classify the undertone of a skin sample
    Tone {
        #[command(flatten)]
        sample: SampleArgs,
    },
    /// Show hair or eyewear recommendations for an archetype
    Styles {
        /// Archetype to look up
        #[arg(long, conflicts_with = "shape", required_unless_present = "shape")]
        archetype: Option<Archetype>,
        /// Face shape; its archetype is looked up instead
        #[arg(long)]
        shape: Option<FaceShape>,
        #[arg(long)]
        category: Category,
        #[arg(long)]
        gender: Option<Gender>,
        /// Replace a suggestion: SLOT:QUERY picks the first catalog match for QUERY
        #[arg(long = "swap", value_parser = parse_swap)]
        swaps: Vec<(usize, String)>,
    },
    /// Browse or search a category across all archetypes
    Browse {
        #[arg(long)]
        category: Category,
        #[arg(long)]
        gender: Option<Gender>,
        /// Case-insensitive filter on name and guidance
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Full consultation: shape, archetype, optional tone and recommendations
    Consult {
        #[command(flatten)]
        measurement: MeasurementArgs,
        #[command(flatten)]
        sample: SampleArgs,
        #[arg(long)]
        gender: Option<Gender>,
    },
}

#[derive(Args)]
struct MeasurementArgs {
    /// Forehead width
    #[arg(long)]
    forehead: f64,
    /// Cheekbone width
    #[arg(long)]
    cheek: f64,
    /// Jaw width
    #[arg(long)]
    jaw: f64,
    /// Face height
    #[arg(long)]
    height: f64,
}

impl MeasurementArgs {
    fn to_measurement(&self) -> Result<FaceMeasurement> {
        FaceMeasurement::new(self.forehead, self.cheek, self.jaw, self.height)
            .context("invalid face measurement")
    }
}

#[derive(Args)]
struct SampleArgs {
    /// Skin sample as R,G,B
    #[arg(long, value_parser = parse_rgb, conflicts_with_all = ["hex", "image"])]
    rgb: Option<SkinSample>,
    /// Skin sample as #rrggbb
    #[arg(long, value_parser = parse_hex, conflicts_with = "image")]
    hex: Option<SkinSample>,
    /// Image to sample the skin pixel from
    #[arg(long, requires_all = ["x", "y"])]
    image: Option<PathBuf>,
    /// Pixel column in --image
    #[arg(long)]
    x: Option<u32>,
    /// Pixel row in --image
    #[arg(long)]
    y: Option<u32>,
    /// Average a (2r+1)² window instead of a single pixel
    #[arg(long)]
    radius: Option<u32>,
}

impl SampleArgs {
    fn resolve(&self, cfg: &Config) -> Result<Option<SkinSample>> {
        if let Some(s) = self.rgb.or(self.hex) {
            return Ok(Some(s));
        }
        let Some(path) = &self.image else {
            return Ok(None);
        };
        let (Some(x), Some(y)) = (self.x, self.y) else {
            bail!("--image needs both --x and --y");
        };
        let radius = self.radius.unwrap_or(cfg.sample_radius);
        let sample = sampling::sample_file(path, x, y, radius)
            .with_context(|| format!("sampling {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            x,
            y,
            radius,
            sample = %sample,
            "sampled skin pixel"
        );
        Ok(Some(sample))
    }
}

fn parse_rgb(s: &str) -> Result<SkinSample, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(format!("expected R,G,B, got {s:?}"));
    };
    let channel = |c: &str| c.parse::<u8>().map_err(|e| format!("channel {c:?}: {e}"));
    Ok(SkinSample::new(channel(*r)?, channel(*g)?, channel(*b)?))
}

fn parse_hex(s: &str) -> Result<SkinSample, String> {
    SkinSample::from_hex(s).map_err(|e| e.to_string())
}

fn parse_swap(s: &str) -> Result<(usize, String), String> {
    let (slot, query) = s
        .split_once(':')
        .ok_or_else(|| format!("expected SLOT:QUERY, got {s:?}"))?;
    let slot = slot
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("slot {slot:?}: {e}"))?;
    Ok((slot, query.trim().to_string()))
}

fn emit<T: Serialize>(format: OutputFormat, value: &T, text: impl FnOnce(&T)) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => text(value),
    }
    Ok(())
}

fn print_face(face: &FaceAnalysis) {
    println!("Shape:      {}", face.shape);
    println!("Archetype:  {} ({})", face.archetype, face.archetype.summary());
    println!(
        "Ratios:     jaw/forehead {:.3}, height/width {:.3}{}",
        face.ratios.jaw_to_forehead,
        face.ratios.height_to_width,
        if face.elongated { " (elongated)" } else { "" }
    );
}

fn print_tone(reading: &ToneReading) {
    println!("Sample:     {} {}", reading.sample, reading.hex);
    println!("Undertone:  {}", reading.tone);
}

fn print_entries(title: &str, entries: &[StyleEntry]) {
    println!("{title}:");
    for (i, e) in entries.iter().enumerate() {
        println!("  [{i}] {} — {}", e.name, e.guidance);
        println!("      {}", e.reference_image);
    }
}

fn print_consultation(c: &Consultation) {
    print_face(&c.face);
    if let Some(skin) = &c.skin {
        print_tone(skin);
    }
    print_entries("Hair", c.hair);
    print_entries("Glasses", c.glasses);
}

#[derive(Serialize)]
struct BoardView<'a> {
    gender: Gender,
    archetype: Archetype,
    category: Category,
    customized: bool,
    entries: &'a [StyleEntry],
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = Config::load()?;
    if let Some(path) = &cfg.file {
        tracing::info!(path = %path.display(), "loaded config file");
    }
    tracing::debug!(?cfg, "configuration loaded");

    let format = if cli.json { OutputFormat::Json } else { cfg.output };

    match cli.command {
        Commands::Shape { measurement } => {
            let face = geometry::classify(&measurement.to_measurement()?);
            emit(format, &face, print_face)?;
        }
        Commands::Tone { sample } => {
            let Some(sample) = sample.resolve(&cfg)? else {
                bail!("one of --rgb, --hex or --image is required");
            };
            let reading = ToneReading {
                sample,
                hex: sample.hex(),
                tone: tone::classify(sample),
            };
            emit(format, &reading, print_tone)?;
        }
        Commands::Styles {
            archetype,
            shape,
            category,
            gender,
            swaps,
        } => {
            let archetype = match (archetype, shape) {
                (Some(a), _) => a,
                (None, Some(s)) => Archetype::for_shape(s),
                (None, None) => bail!("--archetype or --shape is required"),
            };
            let mut board = StyleBoard::new(gender.unwrap_or(cfg.gender), archetype, category);
            for (slot, query) in swaps {
                let Some(candidate) = board.candidates(&query).into_iter().next() else {
                    bail!("no {category} style matches {query:?}");
                };
                board.swap(slot, candidate.entry)?;
            }
            let view = BoardView {
                gender: board.gender(),
                archetype: board.archetype(),
                category: board.category(),
                customized: board.is_customized(),
                entries: board.entries(),
            };
            emit(format, &view, |v| {
                let marker = if v.customized { " (customized)" } else { "" };
                let title = format!("{} {} for {}{marker}", v.gender, v.category, v.archetype);
                print_entries(&title, v.entries);
            })?;
        }
        Commands::Browse {
            category,
            gender,
            query,
        } => {
            let hits = catalog::search(gender.unwrap_or(cfg.gender), category, &query);
            emit(format, &hits, |hits| {
                for h in hits {
                    println!("{:<12} {} — {}", h.archetype, h.entry.name, h.entry.guidance);
                }
                if hits.is_empty() {
                    println!("No matches");
                }
            })?;
        }
        Commands::Consult {
            measurement,
            sample,
            gender,
        } => {
            let measurement = measurement.to_measurement()?;
            let sample = sample.resolve(&cfg)?;
            let consultation =
                visagism_core::consult(gender.unwrap_or(cfg.gender), &measurement, sample);
            emit(format, &consultation, print_consultation)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rgb() {
        assert_eq!(parse_rgb("200, 150,100").unwrap(), SkinSample::new(200, 150, 100));
        assert!(parse_rgb("200,150").is_err());
        assert!(parse_rgb("300,150,100").is_err());
    }

    #[test]
    fn test_parse_swap() {
        assert_eq!(parse_swap("1:cat-eye").unwrap(), (1, "cat-eye".to_string()));
        assert!(parse_swap("cat-eye").is_err());
        assert!(parse_swap("x:cat-eye").is_err());
    }

    #[test]
    fn test_parse_shape_command() {
        let cli = Cli::try_parse_from([
            "visagism",
            "shape",
            "--forehead",
            "50",
            "--cheek",
            "50",
            "--jaw",
            "60",
            "--height",
            "50",
        ])
        .unwrap();
        let Commands::Shape { measurement } = cli.command else {
            panic!("expected shape command");
        };
        let face = geometry::classify(&measurement.to_measurement().unwrap());
        assert_eq!(face.shape, FaceShape::Triangle);
    }

    #[test]
    fn test_zero_width_rejected() {
        let cli = Cli::try_parse_from([
            "visagism",
            "shape",
            "--forehead",
            "0",
            "--cheek",
            "50",
            "--jaw",
            "60",
            "--height",
            "50",
        ])
        .unwrap();
        let Commands::Shape { measurement } = cli.command else {
            panic!("expected shape command");
        };
        assert!(measurement.to_measurement().is_err());
    }

    #[test]
    fn test_tone_sources_conflict() {
        assert!(Cli::try_parse_from([
            "visagism",
            "tone",
            "--rgb",
            "1,2,3",
            "--hex",
            "#010203",
        ])
        .is_err());
        assert!(Cli::try_parse_from([
            "visagism",
            "tone",
            "--image",
            "face.png",
            "--x",
            "1",
        ])
        .is_err());
    }

    #[test]
    fn test_styles_accepts_shape_or_archetype() {
        let cli = Cli::try_parse_from([
            "visagism",
            "styles",
            "--shape",
            "round",
            "--category",
            "glasses",
            "--swap",
            "0:aviator",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        let Commands::Styles { shape, swaps, .. } = cli.command else {
            panic!("expected styles command");
        };
        assert_eq!(shape, Some(FaceShape::Round));
        assert_eq!(swaps, vec![(0, "aviator".to_string())]);

        assert!(Cli::try_parse_from(["visagism", "styles", "--category", "hair"]).is_err());
        assert!(Cli::try_parse_from([
            "visagism",
            "styles",
            "--archetype",
            "choleric",
            "--shape",
            "round",
            "--category",
            "hair",
        ])
        .is_err());
    }

    #[test]
    fn test_resolve_rgb_without_image() {
        let cli = Cli::try_parse_from(["visagism", "tone", "--hex", "#b4a064"]).unwrap();
        let Commands::Tone { sample } = cli.command else {
            panic!("expected tone command");
        };
        let s = sample.resolve(&Config::default()).unwrap().unwrap();
        assert_eq!(tone::classify(s), visagism_core::SkinTone::Warm);
    }
}
