use std::num::NonZeroUsize;

/// How a row's documentation is laid out next to the code column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocSpan {
    /// The row renders its own docs, covering this many rows (itself included).
    Owner(NonZeroUsize),
    /// The row's docs are covered by a preceding owner; it renders none.
    Absorbed,
}

impl DocSpan {
    pub const SINGLE: DocSpan = DocSpan::Owner(NonZeroUsize::MIN);

    /// Integer view used by page templates: the span length, or `-1` when absorbed.
    pub fn as_i32(self) -> i32 {
        match self {
            DocSpan::Owner(n) => i32::try_from(n.get()).unwrap_or(i32::MAX),
            DocSpan::Absorbed => -1,
        }
    }

    /// Rows covered when rendered, `None` for absorbed rows.
    pub fn rows(self) -> Option<usize> {
        match self {
            DocSpan::Owner(n) => Some(n.get()),
            DocSpan::Absorbed => None,
        }
    }

    pub(crate) fn widened(self) -> DocSpan {
        match self {
            DocSpan::Owner(n) => DocSpan::Owner(n.saturating_add(1)),
            DocSpan::Absorbed => DocSpan::SINGLE,
        }
    }
}

/// One rendered unit: a documentation fragment paired with one line of code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Accumulated prose, as markdown.
    pub doc: String,
    pub doc_span: DocSpan,
    /// `doc` rendered to HTML, filled once the whole file is parsed.
    pub doc_html: String,
    /// The code line paired with this row, verbatim. May be empty.
    pub code: String,
    /// Highlighted markup for `code`. `None` for rows before the first code row.
    pub code_html: Option<String>,
    pub code_is_empty: bool,
    /// Set on the first row whose code is not blank.
    pub is_first_code: bool,
    /// 1-based source line this row was closed on.
    pub source_line: usize,
    /// Index of `code` within the file's code blob, when it is not blank.
    pub blob_line: Option<usize>,
}

impl Row {
    pub(crate) fn new() -> Self {
        Self {
            doc: String::new(),
            doc_span: DocSpan::SINGLE,
            doc_html: String::new(),
            code: String::new(),
            code_html: None,
            code_is_empty: true,
            is_first_code: false,
            source_line: 0,
            blob_line: None,
        }
    }

    /// Appends a line of prose, soft-wrapping onto existing docs with a space.
    pub(crate) fn push_doc(&mut self, text: &str) {
        if !self.doc.is_empty() {
            self.doc.push(' ');
        }
        self.doc.push_str(text);
    }

    pub(crate) fn push_paragraph_break(&mut self) {
        self.doc.push_str("  \n\n");
    }

    pub fn has_doc(&self) -> bool {
        !self.doc.is_empty()
    }
}
