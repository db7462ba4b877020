use crate::domain::model::TimeOfDay;
use crate::utils::error::Result;

pub trait PhraseFormatter: Send + Sync {
    fn format_time(&self, time: TimeOfDay) -> String;

    fn format(&self, input: &str) -> Result<String> {
        let time = TimeOfDay::parse(input)?;
        Ok(self.format_time(time))
    }
}

pub trait Storage: Send + Sync {
    fn read_to_string(&self, path: &str) -> Result<String>;
    fn write(&self, path: &str, data: &[u8]) -> Result<()>;
}
