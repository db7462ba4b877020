pub mod batch;
pub mod time_word;

pub use crate::domain::model::{BatchResult, ConversionRecord, Period, TimeOfDay};
pub use crate::domain::ports::{PhraseFormatter, Storage};
pub use crate::utils::error::Result;
pub use batch::{BatchConverter, OutputFormat};
pub use time_word::{time_word, TimeWordFormatter};
