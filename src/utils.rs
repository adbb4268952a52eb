use std::io::Write;

use anyhow::Result;
use console::style;

use crate::traits::ScraperSerialize;

/// Given a string, style it as an error, i.e. `ERROR could not write output`
pub fn fmt_err(msg: &str) -> String {
    format!("{} {}", status_colorizer("ERROR"), msg)
}

/// Colorize the given log/status word based on its severity
pub fn status_colorizer(status: &str) -> String {
    match status {
        "ERROR" => style(status).red().bright().to_string(),
        "WARN" => style(status).yellow().to_string(),
        "INFO" => style(status).cyan().to_string(),
        "DEBUG" => style(status).blue().to_string(),
        "TRACE" => style(status).magenta().to_string(),
        _ => status.to_string(), // ¯\_(ツ)_/¯
    }
}

/// Gives a consistent look to module names, i.e. `Configuration::new`
pub fn module_colorizer(modname: &str) -> String {
    style(modname).cyan().to_string()
}

/// Write the given serializable object to `writer`, either as NDJSON or as its
/// human readable representation
pub(crate) fn write_to<T>(value: &T, writer: &mut impl Write, convert_to_json: bool) -> Result<()>
where
    T: ScraperSerialize,
{
    let contents = if convert_to_json {
        value.as_json()?
    } else {
        value.as_str()
    };

    let stripped = console::strip_ansi_codes(&contents);

    writer.write_all(stripped.as_bytes())?;
    writer.flush()?;

    Ok(())
}
