pub mod runner;

pub use runner::{RunSummary, TimeWordRunner};
