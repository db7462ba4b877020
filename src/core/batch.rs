use crate::core::PhraseFormatter;
use crate::domain::model::{BatchResult, ConversionRecord};
use crate::utils::error::{Result, TimeWordError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    pub const ALL: [&'static str; 4] = ["text", "csv", "tsv", "json"];
}

impl FromStr for OutputFormat {
    type Err = TimeWordError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(TimeWordError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: s.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", Self::ALL.join(", ")),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Runs a formatter over many inputs.
///
/// Inputs are trimmed first; blank entries and `#` comments are skipped so
/// that a plain text file of times can be fed in line by line.
pub struct BatchConverter<F: PhraseFormatter> {
    formatter: F,
}

impl<F: PhraseFormatter> BatchConverter<F> {
    pub fn new(formatter: F) -> Self {
        Self { formatter }
    }

    fn entries<'a, I>(inputs: I) -> impl Iterator<Item = &'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        inputs
            .into_iter()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
    }

    pub fn convert<'a, I>(&self, inputs: I) -> BatchResult
    where
        I: IntoIterator<Item = &'a str>,
    {
        let records: Vec<ConversionRecord> = Self::entries(inputs)
            .map(|input| match self.formatter.format(input) {
                Ok(phrase) => ConversionRecord::converted(input, phrase),
                Err(e) => {
                    tracing::warn!("Skipping '{}': {}", input, e);
                    ConversionRecord::failed(input, &e)
                }
            })
            .collect();

        let result = BatchResult { records };
        tracing::debug!(
            "Converted {} of {} times",
            result.converted(),
            result.records.len()
        );
        result
    }

    /// Like [`convert`](Self::convert) but stops at the first invalid time.
    pub fn convert_strict<'a, I>(&self, inputs: I) -> Result<BatchResult>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let records = Self::entries(inputs)
            .map(|input| {
                self.formatter
                    .format(input)
                    .map(|phrase| ConversionRecord::converted(input, phrase))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(BatchResult { records })
    }
}

pub fn render(result: &BatchResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Csv => render_delimited(result, b','),
        OutputFormat::Tsv => render_delimited(result, b'\t'),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result.records)?),
    }
}

fn render_text(result: &BatchResult) -> String {
    let mut out = String::new();
    for record in &result.records {
        match (&record.phrase, &record.error) {
            (Some(phrase), _) => out.push_str(phrase),
            (None, Some(error)) => {
                out.push_str("error: ");
                out.push_str(error);
            }
            (None, None) => {}
        }
        out.push('\n');
    }
    out
}

fn render_delimited(result: &BatchResult, delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(["time", "phrase", "error"])?;
    for record in &result.records {
        writer.write_record([
            record.time.as_str(),
            record.phrase.as_deref().unwrap_or(""),
            record.error.as_deref().unwrap_or(""),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TimeWordError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| {
        TimeWordError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}
