//! Documentation prose to HTML.

use pulldown_cmark::{Options, Parser, html};

/// Renders a row's documentation text to an HTML fragment.
pub trait MarkupRenderer: Send + Sync {
    fn render(&self, markup: &str) -> String;
}

/// CommonMark via pulldown-cmark, with tables and strikethrough enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMarkRenderer;

impl MarkupRenderer for CommonMarkRenderer {
    fn render(&self, markup: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let parser = Parser::new_ext(markup, options);
        let mut out = String::with_capacity(markup.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}
