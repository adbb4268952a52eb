use anyhow::{Context, Result};
use reqwest::Client;

use crate::utils::fmt_err;

/// Create and return an instance of [reqwest::Client](https://docs.rs/reqwest/latest/reqwest/struct.Client.html)
///
/// The page is requested exactly as a plain GET would request it: no extra headers, no
/// request timeout and reqwest's default redirect policy (follow up to 10 hops).
pub fn initialize() -> Result<Client> {
    log::trace!("enter: client::initialize");

    let client = Client::builder()
        .build()
        .with_context(|| fmt_err("Could not build the HTTP client"))?;

    log::trace!("exit: client::initialize");
    Ok(client)
}
