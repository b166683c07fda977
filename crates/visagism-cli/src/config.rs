use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use visagism_core::Gender;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format {other:?}")),
        }
    }
}

/// Optional TOML config file. Every key may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    gender: Option<Gender>,
    output: Option<OutputFormat>,
    sample_radius: Option<u32>,
}

/// CLI configuration: defaults, then the TOML file, then `VISAGISM_*` variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Gender used for catalog lookups when `--gender` is not given.
    pub gender: Gender,
    /// Output format when `--json` is not given.
    pub output: OutputFormat,
    /// Pixel sampling radius when `--radius` is not given (0 = single pixel).
    pub sample_radius: u32,
    /// Config file that was actually read, if any.
    pub file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gender: Gender::Female,
            output: OutputFormat::Text,
            sample_radius: 0,
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from the config file and process environment.
    ///
    /// A missing default config file is fine; a missing file named by
    /// `VISAGISM_CONFIG` is an error.
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    fn load_with(env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let (path, explicit) = match env("VISAGISM_CONFIG") {
            Some(p) => (Some(PathBuf::from(p)), true),
            None => (default_config_path(&env), false),
        };

        let mut file = None;
        let mut file_cfg = FileConfig::default();
        if let Some(path) = path {
            if explicit || path.exists() {
                file_cfg = read_file(&path)?;
                file = Some(path);
            }
        }

        let mut cfg = Config {
            file,
            ..Config::default()
        };
        if let Some(g) = file_cfg.gender {
            cfg.gender = g;
        }
        if let Some(o) = file_cfg.output {
            cfg.output = o;
        }
        if let Some(r) = file_cfg.sample_radius {
            cfg.sample_radius = r;
        }

        cfg.gender = env_parse(&env, "VISAGISM_GENDER", cfg.gender);
        cfg.output = env_parse(&env, "VISAGISM_OUTPUT", cfg.output);
        cfg.sample_radius = env_parse(&env, "VISAGISM_SAMPLE_RADIUS", cfg.sample_radius);

        Ok(cfg)
    }
}

fn read_file(path: &Path) -> Result<FileConfig> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&src).with_context(|| format!("parsing config file {}", path.display()))
}

/// `$XDG_CONFIG_HOME/visagism/config.toml`, falling back to `$HOME/.config`.
fn default_config_path(env: &impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    let base = env("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("visagism").join("config.toml"))
}

/// Parse an environment override, keeping `default` when unset or malformed.
fn env_parse<T: FromStr>(env: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match env(key) {
        Some(raw) => match raw.parse() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(key, value = %raw, "ignoring malformed environment override");
                default
            }
        },
        None => default,
    }
}
