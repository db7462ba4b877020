pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{RunSummary, TimeWordRunner};
pub use config::{cli::LocalStorage, Settings, TimeSource};
pub use crate::core::{time_word, BatchConverter, OutputFormat, TimeWordFormatter};
pub use domain::model::{NumeralTable, Period, TimeOfDay};
pub use utils::error::{Result, TimeWordError};
