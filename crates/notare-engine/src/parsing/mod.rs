//! # Example Parsing
//!
//! Turns one annotated source file into an [`Example`]: rows pairing prose with
//! code, highlighted and ready for rendering.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is documentation (a `#`
//!    comment, possibly a control directive) or code.
//! 2. **Row Construction** (`builder`): a `RowBuilder` state machine groups
//!    lines into rows and handles spanning comments. As a byproduct it
//!    collects the code blob (`blob`).
//! 3. **Highlighting**: the whole blob goes to the [`Highlighter`] in one call.
//! 4. **Alignment** (`align`): fragments are attached to rows by blob line.
//! 5. **Assembly**: docs are rendered to HTML and the `Example` is built.
//!
//! ## Key Invariants
//!
//! - Rows appear in source order.
//! - The blob holds exactly the non-blank code lines of the rows, in order.
//! - A row has `code_html` iff it is at or after the first code row.

pub mod align;
pub mod blob;
pub mod builder;
pub mod classify;

#[cfg(test)]
mod tests;

pub use align::{AlignError, align_highlights};
pub use blob::CodeBlob;
pub use builder::{BuiltRows, RowBuilder};
pub use classify::{Directive, LineClass, LineClassifier};

use crate::{
    highlight::{ClassedHighlighter, HighlightError, Highlighter},
    markup::{CommonMarkRenderer, MarkupRenderer},
    models::Example,
};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Highlighting failed: {0}")]
    Highlight(#[from] HighlightError),
    #[error("Highlighted code does not line up with parsed rows: {0}")]
    Alignment(#[from] AlignError),
}

/// The collaborators used to finish an example after its rows are built.
pub struct Pipeline {
    language: String,
    highlighter: Box<dyn Highlighter>,
    markup: Box<dyn MarkupRenderer>,
}

impl Pipeline {
    /// A pipeline for `language` using the built-in highlighter and CommonMark.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            highlighter: Box::new(ClassedHighlighter),
            markup: Box::new(CommonMarkRenderer),
        }
    }

    pub fn with_highlighter(mut self, highlighter: impl Highlighter + 'static) -> Self {
        self.highlighter = Box::new(highlighter);
        self
    }

    pub fn with_markup(mut self, markup: impl MarkupRenderer + 'static) -> Self {
        self.markup = Box::new(markup);
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

/// Classifies and groups `source` into rows. No highlighting or rendering.
pub fn parse_rows(source: &str) -> BuiltRows {
    let classifier = LineClassifier;
    let mut builder = RowBuilder::new();

    for (idx, line) in source.lines().enumerate() {
        let lc = classifier.classify(line);
        builder.push(idx + 1, &lc);
    }

    builder.finish()
}

/// Parses one file's contents into a fully highlighted [`Example`].
///
/// `file_name` only provides the example's identity. Navigation links are left
/// unset; see [`ExampleBatch`](crate::models::ExampleBatch).
pub fn parse_example(
    file_name: &str,
    source: &str,
    pipeline: &Pipeline,
) -> Result<Example, ParseError> {
    let BuiltRows { mut rows, blob } = parse_rows(source);

    let fragments = pipeline
        .highlighter
        .highlight(&pipeline.language, blob.as_str())?;
    align_highlights(&mut rows, fragments, blob.line_count())?;

    for row in &mut rows {
        row.doc_html = pipeline.markup.render(&row.doc);
    }

    log::debug!(
        "parsed {file_name}: {} rows, {} code lines",
        rows.len(),
        blob.line_count()
    );

    let full_code = blob.escaped_for_template();
    Ok(Example::new(file_name, rows, blob.into_string(), full_code))
}
