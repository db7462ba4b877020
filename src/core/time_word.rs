use crate::core::{PhraseFormatter, TimeOfDay};
use crate::domain::model::NumeralTable;
use crate::utils::error::Result;

/// Reads a 24-hour clock time out loud the way an English speaker would.
///
/// ```
/// use timeword::TimeWordFormatter;
/// use timeword::core::PhraseFormatter;
///
/// let formatter = TimeWordFormatter::new();
/// assert_eq!(formatter.format("06:01").unwrap(), "six oh one am");
/// assert_eq!(formatter.format("00:00").unwrap(), "midnight");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeWordFormatter;

impl TimeWordFormatter {
    pub fn new() -> Self {
        Self
    }

    fn minute_phrase(minute: u8) -> String {
        match minute {
            0 => "oclock".to_string(),
            1..=9 => format!("oh {}", Self::words(minute)),
            _ => Self::words(minute),
        }
    }

    // Only called with hour12 (1..=12) or a minute (0..=59) from a
    // validated TimeOfDay.
    fn words(n: u8) -> String {
        NumeralTable::number_to_words(n).expect("numeral table covers 0..=59")
    }
}

impl PhraseFormatter for TimeWordFormatter {
    fn format_time(&self, time: TimeOfDay) -> String {
        if time == TimeOfDay::MIDNIGHT {
            return "midnight".to_string();
        }
        if time == TimeOfDay::NOON {
            return "noon".to_string();
        }

        let phrase = format!(
            "{} {} {}",
            Self::words(time.hour12()),
            Self::minute_phrase(time.minute()),
            time.period()
        );
        tracing::trace!(%time, %phrase, "formatted time");
        phrase.trim().to_string()
    }
}

/// Converts a zero-padded `HH:MM` string into its English phrase.
pub fn time_word(input: &str) -> Result<String> {
    TimeWordFormatter.format(input)
}
