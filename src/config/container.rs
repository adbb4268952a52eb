use super::utils::{report_and_exit, serialized_type};
use crate::{parser, traits::ScraperSerialize, utils::fmt_err, DEFAULT_CONFIG_NAME};
use anyhow::{Context, Result};
use clap::ArgMatches;
use console::style;
use serde::{Deserialize, Serialize};
use std::{
    env::{current_dir, current_exe},
    fs::read_to_string,
    path::{Path, PathBuf},
};

/// The keys a `pagescraper.toml` may set; anything else in the file is ignored, the target
/// url included
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub(super) struct FileSettings {
    pub(super) verbosity: Option<u8>,
    pub(super) debug_log: Option<String>,
    pub(super) json: Option<bool>,
}

/// The settings a run uses, built once in `main` and only read after that
///
/// Layered as built-in defaults, then every `pagescraper.toml` found, then the command line.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Configuration {
    #[serde(rename = "type")]
    /// always `configuration`, i.e. `{"type":"configuration"}`
    pub kind: String,

    /// Config files that were read, in the order they were applied
    pub config_files: Vec<String>,

    /// The page to fetch; also glued onto every root-relative value. Command line only.
    pub target_url: String,

    /// Level of verbosity, equates to log level
    pub verbosity: u8,

    /// File that log entries are appended to, empty when not wanted
    pub debug_log: String,

    /// Write the debug log as NDJSON
    pub json: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            kind: serialized_type(),
            config_files: Vec::new(),
            target_url: String::new(),
            verbosity: 0,
            debug_log: String::new(),
            json: false,
        }
    }
}

/// Every place a `pagescraper.toml` is looked for, lowest precedence first
///
/// - `/etc/pagescraper/`
/// - `CONFIG_DIR/pagescraper/` (`$XDG_CONFIG_HOME` or `~/.config` on linux)
/// - the directory holding the `pagescraper` executable
/// - the current working directory
pub(super) fn config_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![Path::new("/etc/pagescraper").to_path_buf()];

    candidates.extend(dirs::config_dir().map(|dir| dir.join("pagescraper")));
    candidates.extend(
        current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf)),
    );
    candidates.extend(current_dir().ok());

    candidates
        .into_iter()
        .map(|dir| dir.join(DEFAULT_CONFIG_NAME))
        .collect()
}

/// Deserialize the settings held in `path`
pub(super) fn read_settings(path: &Path) -> Result<FileSettings> {
    let content = read_to_string(path)
        .with_context(|| fmt_err(&format!("Could not read {}", path.display())))?;

    toml::from_str(&content)
        .with_context(|| fmt_err(&format!("Could not parse {}", path.display())))
}

impl Configuration {
    /// Defaults, overridden by each config file from [config_file_candidates] that exists,
    /// overridden by the command line
    ///
    /// A config file that exists but can't be read or parsed ends the process through
    /// `report_and_exit`.
    pub fn new() -> Self {
        // when compiling for test, we want to eliminate the runtime dependency of the parser
        if cfg!(test) {
            return Configuration::default();
        }

        let args = parser::initialize().get_matches();

        let mut config = Configuration::default();

        for candidate in config_file_candidates() {
            if let Err(e) = config.merge_file(&candidate) {
                report_and_exit(&e.to_string());
            }
        }

        config.merge_cli(&args);

        config
    }

    /// Apply the settings in `path` on top of the current ones; a missing file is skipped
    pub(super) fn merge_file(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }

        let settings = read_settings(path)?;
        log::debug!("applying {}", path.display());

        self.apply(settings);
        self.config_files.push(path.display().to_string());

        Ok(())
    }

    /// Overwrite every field the file actually set
    pub(super) fn apply(&mut self, settings: FileSettings) {
        if let Some(verbosity) = settings.verbosity {
            self.verbosity = verbosity;
        }
        if let Some(debug_log) = settings.debug_log {
            self.debug_log = debug_log;
        }
        if let Some(json) = settings.json {
            self.json = json;
        }
    }

    /// Command-line values win over everything; flags left off keep what the files said
    pub(super) fn merge_cli(&mut self, args: &ArgMatches) {
        if let Some(url) = args.get_one::<String>("url") {
            self.target_url = url.to_owned();
        }
        if let Some(debug_log) = args.get_one::<String>("debug_log") {
            self.debug_log = debug_log.to_owned();
        }

        let verbosity = args.get_count("verbosity");
        if verbosity > 0 {
            self.verbosity = verbosity;
        }
        if args.get_flag("json") {
            self.json = true;
        }
    }
}

impl ScraperSerialize for Configuration {
    /// Header block written at the top of a text debug log
    fn as_str(&self) -> String {
        let config_files = if self.config_files.is_empty() {
            "(none)".to_string()
        } else {
            self.config_files.join(", ")
        };

        let mut summary = String::new();
        for (key, value) in [
            ("target_url:", self.target_url.clone()),
            ("config_files:", config_files),
            ("verbosity:", self.verbosity.to_string()),
            ("debug_log:", self.debug_log.clone()),
            ("json:", self.json.to_string()),
        ] {
            summary.push_str(&format!("{} {}\n", style(key).bold(), value));
        }
        summary
    }

    /// Create an NDJSON representation of the current configuration
    fn as_json(&self) -> Result<String> {
        let mut json = serde_json::to_string(&self)
            .with_context(|| fmt_err("Could not convert Configuration to JSON"))?;
        json.push('\n');
        Ok(json)
    }
}
