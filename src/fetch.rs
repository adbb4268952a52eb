use std::{error, fmt};

use reqwest::Client;

/// A transport-level failure while retrieving the target page
///
/// Status codes are never turned into a `FetchError`; only failures that leave us without a
/// body at all (bad url, DNS, refused connection, timeout, broken body) are.
#[derive(Debug)]
pub struct FetchError {
    /// The url that was being fetched
    pub url: String,

    /// The underlying error reported by reqwest
    pub source: reqwest::Error,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to retrieve HTML for {}", self.url)
    }
}

impl error::Error for FetchError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Request `target_url` with the given `Client` and return the body of the response as text
///
/// The url isn't validated before the request is made; a malformed url is reported by reqwest
/// when the request is sent, which makes it a `FetchError` like any other transport failure.
/// Any body that comes back is returned, whatever the status code.
pub async fn fetch_html(client: &Client, target_url: &str) -> Result<String, FetchError> {
    log::trace!("enter: fetch_html({})", target_url);

    let failed = |source| FetchError {
        url: target_url.to_string(),
        source,
    };

    let response = match client.get(target_url).send().await {
        Ok(response) => response,
        Err(e) => {
            log::debug!("Error while requesting {}: {}", target_url, e);
            log::trace!("exit: fetch_html -> {}", e);
            return Err(failed(e));
        }
    };

    log::debug!("requested Url: {} -> {}", response.url(), response.status());

    let body = response.text().await.map_err(failed)?;

    log::debug!("read {} bytes from {}", body.len(), target_url);
    log::trace!("exit: fetch_html -> String[{} bytes...]", body.len());

    Ok(body)
}
