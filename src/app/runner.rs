use crate::config::{Settings, TimeSource};
use crate::core::batch::{self, BatchConverter};
use crate::core::{BatchResult, PhraseFormatter, Storage, TimeOfDay};
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub result: BatchResult,
    /// Rendered output. `None` when it was written to `output_path`.
    pub rendered: Option<String>,
    pub output_path: Option<String>,
}

impl RunSummary {
    pub fn exit_code(&self) -> i32 {
        if self.result.has_failures() {
            2
        } else {
            0
        }
    }
}

/// Gathers times from the configured source, converts them and delivers
/// the rendered output.
pub struct TimeWordRunner<F: PhraseFormatter, S: Storage> {
    converter: BatchConverter<F>,
    storage: S,
}

impl<F: PhraseFormatter, S: Storage> TimeWordRunner<F, S> {
    pub fn new(formatter: F, storage: S) -> Self {
        Self {
            converter: BatchConverter::new(formatter),
            storage,
        }
    }

    fn collect_inputs(&self, source: &TimeSource) -> Result<Vec<String>> {
        match source {
            TimeSource::Args(times) => Ok(times.clone()),
            TimeSource::File(path) => {
                tracing::debug!("Reading times from: {}", path);
                let content = self.storage.read_to_string(path)?;
                Ok(content.lines().map(str::to_string).collect())
            }
            TimeSource::Now => {
                let now = TimeOfDay::from(chrono::Local::now().time());
                tracing::debug!("Using local time {}", now);
                Ok(vec![now.to_string()])
            }
        }
    }

    pub fn run(&self, settings: &Settings) -> Result<RunSummary> {
        let inputs = self.collect_inputs(&settings.source)?;
        let inputs = inputs.iter().map(String::as_str);

        let result = if settings.fail_fast {
            self.converter.convert_strict(inputs)?
        } else {
            self.converter.convert(inputs)
        };

        let rendered = batch::render(&result, settings.format)?;

        match &settings.output_path {
            Some(path) => {
                self.storage.write(path, rendered.as_bytes())?;
                tracing::info!(
                    "Wrote {} phrases to {} ({})",
                    result.converted(),
                    path,
                    settings.format
                );
                Ok(RunSummary {
                    result,
                    rendered: None,
                    output_path: Some(path.clone()),
                })
            }
            None => Ok(RunSummary {
                result,
                rendered: Some(rendered),
                output_path: None,
            }),
        }
    }
}
