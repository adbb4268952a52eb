use scraper::{node::Element, Html};

/// A parsed HTML page that can be queried by tag name
///
/// Parsing is delegated to [scraper](https://docs.rs/scraper), which applies the same error
/// recovery a browser does; any input, however broken, produces a `Document`.
#[derive(Debug)]
pub struct Document {
    /// the parsed tree
    html: Html,
}

impl Document {
    /// Parse the given text as a full HTML document
    pub fn parse(raw_html: &str) -> Self {
        log::trace!("enter: Document::parse(String[{} bytes...])", raw_html.len());

        let html = Html::parse_document(raw_html);

        if !html.errors.is_empty() {
            // malformed markup is expected and recovered from, it's only interesting when debugging
            log::debug!("recovered from {} parse errors", html.errors.len());
        }

        log::trace!("exit: Document::parse");
        Self { html }
    }

    /// Every element whose tag name is `tag` (ASCII case-insensitive), in document order
    pub fn elements_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(|node| node.value().as_element())
            .filter(move |element| element.name().eq_ignore_ascii_case(tag))
    }
}
