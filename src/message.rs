use anyhow::Context;
use console::style;
use serde::Serialize;

use crate::traits::ScraperSerialize;
use crate::utils::{fmt_err, status_colorizer};

/// Prefix shared by every module in this crate, dropped from the text form of an entry
const CRATE_PREFIX: &str = "pagescraper::";

/// One `log` record as it's shown on stderr and written to a `--debug-log`
#[derive(Serialize, Debug)]
pub struct LogMessage {
    /// always `log`; distinguishes entries from the configuration line in NDJSON output
    #[serde(rename = "type")]
    kind: &'static str,

    /// seconds since the logger came up
    elapsed: f32,

    /// `ERROR` through `TRACE`
    level: &'static str,

    /// module path the record came from
    target: String,

    /// the formatted log message
    message: String,
}

impl LogMessage {
    /// capture `record` along with how long the run has been going
    pub(crate) fn from_record(record: &log::Record<'_>, elapsed: f32) -> Self {
        Self::new(
            record.level(),
            record.target(),
            record.args().to_string(),
            elapsed,
        )
    }

    pub(crate) fn new(level: log::Level, target: &str, message: String, elapsed: f32) -> Self {
        Self {
            kind: "log",
            elapsed,
            level: level.as_str(),
            target: target.to_string(),
            message,
        }
    }
}

impl ScraperSerialize for LogMessage {
    /// ex: `    0.012s DEBUG scrape stage: Fetching -> Parsing`
    fn as_str(&self) -> String {
        let target = self
            .target
            .strip_prefix(CRATE_PREFIX)
            .unwrap_or(&self.target);

        // pad outside the color codes so levels line up whether or not color is on
        format!(
            "{:>9.3}s {}{:pad$} {} {}\n",
            self.elapsed,
            status_colorizer(self.level),
            "",
            style(target).dim(),
            self.message,
            pad = 5usize.saturating_sub(self.level.len()),
        )
    }

    fn as_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(self)
            .map(|json| json + "\n")
            .with_context(|| fmt_err(&format!("Could not serialize log entry: {}", self.message)))
    }
}
