use std::fmt;
use std::io::Write;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::{
    config::Configuration,
    document::Document,
    extractor::ExtractionTarget,
    fetch::fetch_html,
    presenter::present,
    utils::fmt_err,
};

/// Where a run currently is; a run only ever moves forward through these
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Stage {
    /// nothing done yet
    Start,

    /// waiting on the page
    Fetching,

    /// building the `Document`
    Parsing,

    /// extracting and printing one of the sections
    Extracting(ExtractionTarget),

    /// everything printed
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Start => write!(f, "Start"),
            Stage::Fetching => write!(f, "Fetching"),
            Stage::Parsing => write!(f, "Parsing"),
            Stage::Extracting(target) => write!(f, "Extracting{}", target.label()),
            Stage::Done => write!(f, "Done"),
        }
    }
}

/// log the move from one stage to the next, returning the new stage
fn advance(from: Stage, to: Stage) -> Stage {
    log::debug!("stage: {} -> {}", from, to);
    to
}

/// Fetch `config.target_url`, then write the Links and Images sections to `writer`
///
/// A transport failure comes back as a [FetchError](crate::fetch::FetchError) wrapped in the
/// returned error before anything has been written; deciding what to do about it is left to
/// the caller.
pub async fn run<W: Write>(config: &Configuration, client: &Client, writer: &mut W) -> Result<()> {
    log::trace!("enter: run({})", config.target_url);

    let target_url = config.target_url.as_str();

    let mut stage = advance(Stage::Start, Stage::Fetching);
    let body = fetch_html(client, target_url).await?;

    stage = advance(stage, Stage::Parsing);
    let document = Document::parse(&body);

    for target in ExtractionTarget::ALL {
        stage = advance(stage, Stage::Extracting(target));

        let values = target.extract_from(&document, target_url);
        log::info!("found {} {} values", values.len(), target);

        present(&mut *writer, target.label(), values)
            .with_context(|| fmt_err(&format!("Could not write the {} section", target.label())))?;
    }

    writer
        .flush()
        .with_context(|| fmt_err("Could not flush output"))?;

    advance(stage, Stage::Done);

    log::trace!("exit: run");
    Ok(())
}
