use std::env;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use env_logger::Builder;

use crate::{
    config::Configuration,
    message::LogMessage,
    traits::ScraperSerialize,
    utils::{fmt_err, write_to},
};

/// Translate a verbosity count into a `RUST_LOG` style filter; `None` keeps env_logger's
/// default (errors only)
pub(crate) fn verbosity_filter(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some("warn"),
        2 => Some("info"),
        3 => Some("pagescraper=debug,info"),
        _ => Some("pagescraper=trace,info"),
    }
}

/// The `--debug-log` file; every entry that reaches stderr is appended here too
struct DebugLog {
    writer: Mutex<BufWriter<File>>,
    json: bool,
}

impl DebugLog {
    /// open `path` for appending and lead with the configuration the run is using
    fn open(path: &str, config: &Configuration) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| fmt_err(&format!("Could not open {}", path)))?;

        let mut writer = BufWriter::new(file);
        write_to(config, &mut writer, config.json)?;

        Ok(Self {
            writer: Mutex::new(writer),
            json: config.json,
        })
    }

    /// append one entry; a write failure loses the entry, not the run
    fn record(&self, entry: &LogMessage) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = write_to(entry, &mut *writer, self.json);
        }
    }
}

/// Build the filter from `RUST_LOG` when it's set, otherwise from `verbosity`
fn builder_for(verbosity: u8) -> Builder {
    if env::var_os("RUST_LOG").is_some() {
        return Builder::from_default_env();
    }

    let mut builder = Builder::new();

    if let Some(filter) = verbosity_filter(verbosity) {
        builder.parse_filters(filter);
    }

    builder
}

/// Install the global logger: entries go to stderr, and to the `--debug-log` file when one
/// was given
pub fn initialize(config: &Configuration) -> Result<()> {
    let debug_log = if config.debug_log.is_empty() {
        None
    } else {
        Some(DebugLog::open(&config.debug_log, config)?)
    };

    let start = Instant::now();

    builder_for(config.verbosity)
        .format(move |buf, record| {
            let entry = LogMessage::from_record(record, start.elapsed().as_secs_f32());

            write!(buf, "{}", entry.as_str())?;

            if let Some(debug_log) = debug_log.as_ref() {
                debug_log.record(&entry);
            }

            Ok(())
        })
        .try_init()
        .with_context(|| fmt_err("Could not initialize the logger"))
}
