use std::{io::stdout, process::exit};

use anyhow::{Context, Result};

use pagescraper::{
    client, config::Configuration, fetch::FetchError, logger, scrape, utils::fmt_err,
    FETCH_FAILURE_EXIT_CODE,
};

/// async main called from real main, broken out in this way to allow for some synchronous code
/// to be executed before bringing the tokio runtime online
async fn wrapped_main(config: &Configuration) -> Result<()> {
    log::trace!("enter: wrapped_main");

    let client = client::initialize()?;

    let stdout = stdout();
    let mut handle = stdout.lock();

    scrape::run(config, &client, &mut handle).await?;

    log::trace!("exit: wrapped_main");
    Ok(())
}

/// Print the reason the run stopped to stderr and leave with a non-zero exit status
fn terminate(err: anyhow::Error) -> ! {
    match err.downcast_ref::<FetchError>() {
        Some(fetch_error) => {
            eprintln!("{}", fetch_error);
            eprintln!("{}", fetch_error.source);
        }
        None => eprintln!("{:?}", err),
    }
    eprintln!("\nExiting.");
    exit(FETCH_FAILURE_EXIT_CODE);
}

fn main() {
    let config = Configuration::new();

    // setup logging based on the number of -v's used
    if let Err(e) = logger::initialize(&config) {
        terminate(e);
    }

    log::trace!("enter: main");

    // a single page is fetched and everything after that is sequential, one thread is plenty
    let outcome = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .with_context(|| fmt_err("Could not start the tokio runtime"))
        .and_then(|runtime| runtime.block_on(wrapped_main(&config)));

    if let Err(e) = outcome {
        terminate(e);
    }

    log::trace!("exit: main");
}
