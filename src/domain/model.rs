use crate::utils::error::{Result, TimeWordError};
use chrono::Timelike;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

static TIME_PATTERN: OnceLock<Regex> = OnceLock::new();

fn time_pattern() -> &'static Regex {
    TIME_PATTERN.get_or_init(|| {
        Regex::new(r"^(?P<hour>[0-9]{2}):(?P<minute>[0-9]{2})$").expect("time pattern is valid")
    })
}

/// A wall-clock time with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };
    pub const NOON: TimeOfDay = TimeOfDay { hour: 12, minute: 0 };

    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Parses a zero-padded `HH:MM` string.
    pub fn parse(input: &str) -> Result<Self> {
        let caps = time_pattern()
            .captures(input)
            .ok_or_else(|| TimeWordError::invalid_time(input, "expected HH:MM"))?;

        // Two ASCII digits always fit in a u8.
        let hour: u8 = caps["hour"]
            .parse()
            .map_err(|_| TimeWordError::invalid_time(input, "hour is not a number"))?;
        let minute: u8 = caps["minute"]
            .parse()
            .map_err(|_| TimeWordError::invalid_time(input, "minute is not a number"))?;

        if hour > 23 {
            return Err(TimeWordError::invalid_time(
                input,
                "hour must be between 0 and 23",
            ));
        }
        if minute > 59 {
            return Err(TimeWordError::invalid_time(
                input,
                "minute must be between 0 and 59",
            ));
        }

        Ok(Self { hour, minute })
    }

    pub fn from_timelike<T: Timelike>(time: &T) -> Self {
        // chrono guarantees hour < 24 and minute < 60
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn period(&self) -> Period {
        Period::from_hour(self.hour)
    }

    /// Hour on a 12-hour dial, 1 through 12.
    pub fn hour12(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeWordError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl From<chrono::NaiveTime> for TimeOfDay {
    fn from(time: chrono::NaiveTime) -> Self {
        Self::from_timelike(&time)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Am,
    Pm,
}

impl Period {
    pub fn from_hour(hour: u8) -> Self {
        if hour < 12 {
            Period::Am
        } else {
            Period::Pm
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Am => "am",
            Period::Pm => "pm",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// English words for 0 through 20 and the round tens up to fifty.
///
/// Zero reads as "twelve" so that hour zero on a 12-hour dial comes out
/// right; minute zero never reaches the table.
pub struct NumeralTable;

impl NumeralTable {
    const UNITS: [&'static str; 21] = [
        "twelve",
        "one",
        "two",
        "three",
        "four",
        "five",
        "six",
        "seven",
        "eight",
        "nine",
        "ten",
        "eleven",
        "twelve",
        "thirteen",
        "fourteen",
        "fifteen",
        "sixteen",
        "seventeen",
        "eighteen",
        "nineteen",
        "twenty",
    ];

    const TENS: [&'static str; 4] = ["twenty", "thirty", "forty", "fifty"];

    pub fn word(n: u8) -> Option<&'static str> {
        match n {
            0..=20 => Some(Self::UNITS[n as usize]),
            30 | 40 | 50 => Some(Self::TENS[(n / 10 - 2) as usize]),
            _ => None,
        }
    }

    /// Spells out `n` in the range 0..=59.
    pub fn number_to_words(n: u8) -> Option<String> {
        if n < 20 {
            return Self::word(n).map(str::to_string);
        }

        let tens = Self::word(n / 10 * 10)?;
        match n % 10 {
            0 => Some(tens.to_string()),
            ones => Some(format!("{} {}", tens, Self::word(ones)?)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub time: String,
    pub phrase: Option<String>,
    pub error: Option<String>,
}

impl ConversionRecord {
    pub fn converted(time: impl Into<String>, phrase: String) -> Self {
        Self {
            time: time.into(),
            phrase: Some(phrase),
            error: None,
        }
    }

    pub fn failed(time: impl Into<String>, error: &TimeWordError) -> Self {
        Self {
            time: time.into(),
            phrase: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.phrase.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub records: Vec<ConversionRecord>,
}

impl BatchResult {
    pub fn converted(&self) -> usize {
        self.records.iter().filter(|r| r.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.records.len() - self.converted()
    }

    pub fn has_failures(&self) -> bool {
        self.records.iter().any(|r| !r.is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_times() {
        let t = TimeOfDay::parse("06:01").unwrap();
        assert_eq!((t.hour(), t.minute()), (6, 1));

        let t: TimeOfDay = "23:59".parse().unwrap();
        assert_eq!((t.hour(), t.minute()), (23, 59));

        assert_eq!(TimeOfDay::parse("00:00").unwrap(), TimeOfDay::MIDNIGHT);
        assert_eq!(TimeOfDay::parse("12:00").unwrap(), TimeOfDay::NOON);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in ["", "6:01", "06:1", "0601", "ab:cd", " 06:01", "06:01 ", "06-01", "006:01"] {
            let err = TimeOfDay::parse(input).unwrap_err();
            assert!(err.is_input_error(), "{input:?} should be an input error");
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        let err = TimeOfDay::parse("24:00").unwrap_err();
        assert!(err.to_string().contains("hour must be between 0 and 23"));

        let err = TimeOfDay::parse("12:60").unwrap_err();
        assert!(err.to_string().contains("minute must be between 0 and 59"));

        assert!(TimeOfDay::parse("99:99").is_err());
    }

    #[test]
    fn test_new_checks_range() {
        assert!(TimeOfDay::new(23, 59).is_some());
        assert!(TimeOfDay::new(24, 0).is_none());
        assert!(TimeOfDay::new(0, 60).is_none());
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(TimeOfDay::new(6, 1).unwrap().to_string(), "06:01");
        assert_eq!(TimeOfDay::MIDNIGHT.to_string(), "00:00");
    }

    #[test]
    fn test_from_naive_time_drops_seconds() {
        let naive = chrono::NaiveTime::from_hms_opt(18, 45, 59).unwrap();
        let t = TimeOfDay::from(naive);
        assert_eq!((t.hour(), t.minute()), (18, 45));
    }

    #[test]
    fn test_hour12_and_period() {
        assert_eq!(TimeOfDay::new(0, 12).unwrap().hour12(), 12);
        assert_eq!(TimeOfDay::new(12, 9).unwrap().hour12(), 12);
        assert_eq!(TimeOfDay::new(13, 0).unwrap().hour12(), 1);
        assert_eq!(TimeOfDay::new(23, 0).unwrap().hour12(), 11);

        assert_eq!(TimeOfDay::new(11, 59).unwrap().period(), Period::Am);
        assert_eq!(TimeOfDay::new(12, 1).unwrap().period(), Period::Pm);
        assert_eq!(Period::Pm.to_string(), "pm");
    }

    #[test]
    fn test_numeral_table() {
        assert_eq!(NumeralTable::word(0), Some("twelve"));
        assert_eq!(NumeralTable::word(12), Some("twelve"));
        assert_eq!(NumeralTable::word(20), Some("twenty"));
        assert_eq!(NumeralTable::word(40), Some("forty"));
        assert_eq!(NumeralTable::word(21), None);
        assert_eq!(NumeralTable::word(60), None);
    }

    #[test]
    fn test_number_to_words() {
        assert_eq!(NumeralTable::number_to_words(7).as_deref(), Some("seven"));
        assert_eq!(NumeralTable::number_to_words(19).as_deref(), Some("nineteen"));
        assert_eq!(NumeralTable::number_to_words(30).as_deref(), Some("thirty"));
        assert_eq!(
            NumeralTable::number_to_words(59).as_deref(),
            Some("fifty nine")
        );
        assert_eq!(NumeralTable::number_to_words(60), None);
        assert_eq!(NumeralTable::number_to_words(75), None);
    }

    #[test]
    fn test_batch_result_counts() {
        let err = TimeWordError::invalid_time("25:00", "hour must be between 0 and 23");
        let result = BatchResult {
            records: vec![
                ConversionRecord::converted("00:00", "midnight".to_string()),
                ConversionRecord::failed("25:00", &err),
            ],
        };
        assert_eq!(result.converted(), 1);
        assert_eq!(result.failed(), 1);
        assert!(result.has_failures());
    }
}
