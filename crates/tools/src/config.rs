use std::env;

use formats::PositionExtractor;
use foundation::HalfLife;
use tracing::warn;

pub const ENV_HALF_LIFE: &str = "LABKIT_HALF_LIFE_YEARS";
pub const ENV_POSITION_MARKER: &str = "LABKIT_POSITION_MARKER";
pub const ENV_OUTPUT: &str = "LABKIT_OUTPUT";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabkitConfig {
    pub half_life: HalfLife,
    pub extractor: PositionExtractor,
    pub output: OutputFormat,
}

impl LabkitConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from a key lookup. Unusable values are logged and
    /// replaced by their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_HALF_LIFE) {
            match raw.trim().parse::<f64>().map(HalfLife) {
                Ok(hl) if hl.is_valid() => config.half_life = hl,
                _ => warn!("ignoring {ENV_HALF_LIFE}={raw:?}: expected a positive number of years"),
            }
        }

        if let Some(marker) = lookup(ENV_POSITION_MARKER) {
            if marker.is_empty() {
                warn!("ignoring empty {ENV_POSITION_MARKER}");
            } else {
                config.extractor = PositionExtractor::with_marker(marker);
            }
        }

        if let Some(raw) = lookup(ENV_OUTPUT) {
            match raw.parse() {
                Ok(format) => config.output = format,
                Err(err) => warn!("ignoring {ENV_OUTPUT}: {err}"),
            }
        }

        config
    }
}
