//! Fetch a single web page and list every link target and image source found on it.

pub mod client;
pub mod config;
pub mod document;
pub mod extractor;
pub mod fetch;
pub mod logger;
mod message;
mod parser;
pub mod presenter;
pub mod scrape;
mod traits;
pub mod utils;

/// Version pulled from Cargo.toml at compile time
pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default filename for config file settings
///
/// Searched for in `/etc/pagescraper/`, the user's config directory, the directory holding
/// the pagescraper binary and finally the current working directory.
pub const DEFAULT_CONFIG_NAME: &str = "pagescraper.toml";

/// Text printed in front of every section label, i.e. `-------> Links`
pub const SECTION_MARKER: &str = "-------> ";

/// Exit status used when the page could not be fetched (255 on unix)
pub const FETCH_FAILURE_EXIT_CODE: i32 = -1;
