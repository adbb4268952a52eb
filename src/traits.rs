//! collection of all traits used
use anyhow::Result;
use serde::Serialize;

/// ScraperSerialize trait; represents different types that are Serialize and also implement
/// as_str / as_json methods
pub trait ScraperSerialize: Serialize {
    /// Return a String representation of the object, generally the human readable version of the
    /// implementor
    fn as_str(&self) -> String;

    /// Return an NDJSON representation of the object
    fn as_json(&self) -> Result<String>;
}
