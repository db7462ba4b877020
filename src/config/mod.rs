pub mod cli;
pub mod toml_config;

use crate::core::OutputFormat;
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::error::TimeWordError;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "timeword")]
#[command(about = "Spell out 24-hour clock times in English")]
pub struct CliConfig {
    /// Times to convert, as zero-padded HH:MM
    pub times: Vec<String>,

    /// Read times from a file, one per line
    #[arg(short, long)]
    pub input: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Convert the current local time
    #[arg(long)]
    pub now: bool,

    /// Stop at the first invalid time
    #[arg(long)]
    pub fail_fast: bool,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the TOML file named by `--config`, if any, and layers the
    /// command-line values over it.
    pub fn resolve(&self) -> Result<Settings> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Some(config)
            }
            None => None,
        };
        self.merge(file_config.as_ref())
    }

    pub fn merge(&self, file_config: Option<&TomlConfig>) -> Result<Settings> {
        let file_input = file_config.and_then(TomlConfig::input_path);

        let source = if self.now {
            TimeSource::Now
        } else if !self.times.is_empty() {
            TimeSource::Args(self.times.clone())
        } else if let Some(path) = self.input.as_deref().or(file_input) {
            TimeSource::File(path.to_string())
        } else {
            return Err(TimeWordError::ConfigError {
                message: "no times given; pass HH:MM arguments, --input or --now".to_string(),
            });
        };

        let format = match self.format {
            Some(format) => format,
            None => file_config
                .map(TomlConfig::output_format)
                .transpose()?
                .flatten()
                .unwrap_or_default(),
        };

        let settings = Settings {
            source,
            output_path: self
                .output
                .clone()
                .or_else(|| file_config.and_then(TomlConfig::output_path).map(String::from)),
            format,
            fail_fast: self.fail_fast || file_config.is_some_and(TomlConfig::fail_fast),
        };
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_exclusive(
            "--now",
            self.now,
            &[
                ("explicit times", !self.times.is_empty()),
                ("--input", self.input.is_some()),
            ],
        )?;
        validation::validate_exclusive(
            "--input",
            self.input.is_some(),
            &[("explicit times", !self.times.is_empty())],
        )?;
        validation::validate_optional_path("--input", self.input.as_deref())?;
        validation::validate_optional_path("--output", self.output.as_deref())?;
        validation::validate_optional_path("--config", self.config.as_deref())?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeSource {
    Args(Vec<String>),
    File(String),
    Now,
}

/// Effective run settings after command line and config file are merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub source: TimeSource,
    pub output_path: Option<String>,
    pub format: OutputFormat,
    pub fail_fast: bool,
}

impl Settings {
    pub fn for_times<I, S>(times: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            source: TimeSource::Args(times.into_iter().map(Into::into).collect()),
            output_path: None,
            format: OutputFormat::default(),
            fail_fast: false,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if let TimeSource::File(path) = &self.source {
            validation::validate_path("input.path", path)?;
        }
        validation::validate_optional_path("output.path", self.output_path.as_deref())?;
        Ok(())
    }
}
