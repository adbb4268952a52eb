use std::fmt;

use url::Url;

use crate::document::Document;

/// Base every attribute value is resolved against, the url of a document that was built from
/// a string rather than loaded from anywhere
const DOCUMENT_BASE: &str = "about:blank";

/// The kinds of extraction performed against a fetched page
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExtractionTarget {
    /// `href` of every `<a>`
    Links,

    /// `src` of every `<img>`
    Images,
}

impl ExtractionTarget {
    /// every target, in the order its section is printed
    pub const ALL: [ExtractionTarget; 2] = [ExtractionTarget::Links, ExtractionTarget::Images];

    /// tag name of the elements to select
    pub fn tag(&self) -> &'static str {
        match self {
            ExtractionTarget::Links => "a",
            ExtractionTarget::Images => "img",
        }
    }

    /// attribute to read off of each selected element
    pub fn attribute(&self) -> &'static str {
        match self {
            ExtractionTarget::Links => "href",
            ExtractionTarget::Images => "src",
        }
    }

    /// label printed in the section header
    pub fn label(&self) -> &'static str {
        match self {
            ExtractionTarget::Links => "Links",
            ExtractionTarget::Images => "Images",
        }
    }

    /// run this extraction against `document`
    pub fn extract_from(&self, document: &Document, target_url: &str) -> Vec<String> {
        extract(document, self.tag(), self.attribute(), target_url)
    }
}

impl fmt::Display for ExtractionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.tag(), self.attribute())
    }
}

/// Read `attribute` off of every `tag` element in `document`, in document order
///
/// An element without the attribute yields `None`.
pub fn read_attributes<'a>(
    document: &'a Document,
    tag: &'a str,
    attribute: &'a str,
) -> impl Iterator<Item = Option<&'a str>> + 'a {
    document
        .elements_named(tag)
        .map(move |element| element.attr(attribute))
}

/// Resolve a raw attribute value the way a DOM's url-valued property exposes it
///
/// The value is parsed against `about:blank` and re-serialized, so `HTTPS://X.COM/a b` comes
/// back as `https://x.com/a%20b` and `#top` as `about:blank#top`. Anything that can't be
/// resolved against that base (root-relative, relative and scheme-relative references) is
/// returned as written.
pub fn resolve(value: &str) -> String {
    match Url::parse(DOCUMENT_BASE).and_then(|base| base.join(value)) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => value.to_string(),
    }
}

/// Turn a raw attribute value into the string that gets reported
///
/// - a missing attribute becomes the empty string
/// - everything else is [resolve]d first
/// - a resolved value starting with `/` has `target_url` glued to its front, as-is; no
///   separator is added or removed, so `https://example.com` + `/about` is
///   `https://example.com/about`
pub fn normalize(value: Option<&str>, target_url: &str) -> String {
    let value = value.map(resolve).unwrap_or_default();

    if value.starts_with('/') {
        format!("{}{}", target_url, value)
    } else {
        value
    }
}

/// Collect the normalized `attribute` of every `tag` element in `document`
///
/// Values are returned in document order; sorting and de-duplication happen when they're
/// presented.
pub fn extract(document: &Document, tag: &str, attribute: &str, target_url: &str) -> Vec<String> {
    log::trace!(
        "enter: extract({}, {}, {})",
        tag,
        attribute,
        target_url
    );

    let values: Vec<String> = read_attributes(document, tag, attribute)
        .map(|value| {
            if value.is_none() {
                log::debug!("<{}> without a {} attribute, using \"\"", tag, attribute);
            }
            normalize(value, target_url)
        })
        .collect();

    log::trace!("exit: extract -> Vec<String>[{} values...]", values.len());
    values
}
