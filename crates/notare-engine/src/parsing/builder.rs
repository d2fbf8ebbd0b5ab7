use crate::models::{DocSpan, Row};

use super::{
    blob::CodeBlob,
    classify::{Directive, LineClass},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanState {
    Idle,
    /// `owner` is the index in the output the span's owner row occupies (or will
    /// occupy once its first code line arrives).
    InSpan { owner: usize },
}

/// Output of the row builder: the rows plus the code blob they reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltRows {
    pub rows: Vec<Row>,
    pub blob: CodeBlob,
}

/// State machine turning classified lines into [`Row`]s.
///
/// A current row is always open. Documentation accumulates on it; a code line
/// closes it. Inside a span the first closed row owns the docs and every
/// following row until `::end-span` is absorbed into it.
pub struct RowBuilder {
    state: SpanState,
    current: Row,
    found_first_code: bool,
    last_line: usize,
    blob: CodeBlob,
    out: Vec<Row>,
}

impl RowBuilder {
    pub fn new() -> Self {
        Self {
            state: SpanState::Idle,
            current: Row::new(),
            found_first_code: false,
            last_line: 0,
            blob: CodeBlob::new(),
            out: vec![],
        }
    }

    /// Feeds one classified line. `line_number` is 1-based.
    pub fn push(&mut self, line_number: usize, c: &LineClass) {
        self.last_line = line_number;

        match *c {
            LineClass::Directive(Directive::BeginSpan) => {
                self.state = SpanState::InSpan {
                    owner: self.out.len(),
                };
            }
            LineClass::Directive(Directive::EndSpan) => {
                self.close_current(line_number);
                self.state = SpanState::Idle;
            }
            LineClass::Directive(Directive::Newline) => self.current.push_paragraph_break(),
            LineClass::Doc(text) => self.current.push_doc(text),
            LineClass::Code(text) => self.push_code(line_number, text),
        }
    }

    pub fn finish(mut self) -> BuiltRows {
        // EOF flush; a dangling span just ends here
        self.close_current(self.last_line);
        BuiltRows {
            rows: self.out,
            blob: self.blob,
        }
    }

    fn push_code(&mut self, line_number: usize, text: &str) {
        let blank = text.trim().is_empty();
        if blank && !self.current.has_doc() {
            return;
        }

        if !blank {
            self.current.blob_line = Some(self.blob.push_line(text));
            if !self.found_first_code {
                self.found_first_code = true;
                self.current.is_first_code = true;
            }
        }
        self.current.code = text.to_string();
        self.emit(line_number);
    }

    /// Closes the current row without a code line of its own. Rows carrying
    /// docs are kept; empty ones are dropped.
    fn close_current(&mut self, line_number: usize) {
        if self.current.has_doc() {
            self.emit(line_number);
        } else {
            self.current = Row::new();
        }
    }

    fn emit(&mut self, line_number: usize) {
        let mut row = std::mem::replace(&mut self.current, Row::new());
        row.source_line = line_number;
        row.code_is_empty = row.code.trim().is_empty();
        row.doc_span = match self.state {
            SpanState::Idle => DocSpan::SINGLE,
            SpanState::InSpan { owner } if owner == self.out.len() => DocSpan::SINGLE,
            SpanState::InSpan { owner } => {
                if let Some(owner_row) = self.out.get_mut(owner) {
                    owner_row.doc_span = owner_row.doc_span.widened();
                }
                DocSpan::Absorbed
            }
        };
        self.out.push(row);
    }
}

impl Default for RowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::classify::LineClassifier;
    use pretty_assertions::assert_eq;

    fn build(lines: &[&str]) -> BuiltRows {
        let mut builder = RowBuilder::new();
        for (idx, line) in lines.iter().enumerate() {
            builder.push(idx + 1, &LineClassifier.classify(line));
        }
        builder.finish()
    }

    #[test]
    fn test_doc_then_code_pairs_into_one_row() {
        let built = build(&["# a key", "key: 1"]);
        assert_eq!(built.rows.len(), 1);
        assert_eq!(built.rows[0].doc, "a key");
        assert_eq!(built.rows[0].code, "key: 1");
        assert_eq!(built.rows[0].doc_span, DocSpan::SINGLE);
        assert_eq!(built.rows[0].source_line, 2);
        assert_eq!(built.rows[0].blob_line, Some(0));
    }

    #[test]
    fn test_blank_line_with_docs_becomes_row() {
        let built = build(&["a: 1", "# note", "", "b: 2"]);
        let codes: Vec<_> = built.rows.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["a: 1", "", "b: 2"]);
        assert_eq!(built.rows[1].doc, "note");
        assert!(built.rows[1].code_is_empty);
        assert_eq!(built.rows[1].blob_line, None);
        assert_eq!(built.blob.as_str(), "a: 1\nb: 2\n");
    }

    #[test]
    fn test_whitespace_only_line_is_not_first_code() {
        let built = build(&["# doc", "   ", "a: 1"]);
        assert_eq!(built.rows.len(), 2);
        assert!(!built.rows[0].is_first_code);
        assert!(built.rows[1].is_first_code);
    }

    #[test]
    fn test_span_owner_counts_covered_rows() {
        let built = build(&[
            "# ::span-comment",
            "# covers three",
            "a: 1",
            "b: 2",
            "c: 3",
            "# ::end-span",
            "d: 4",
        ]);
        let spans: Vec<_> = built.rows.iter().map(|r| r.doc_span.as_i32()).collect();
        assert_eq!(spans, vec![3, -1, -1, 1]);
    }

    #[test]
    fn test_end_span_keeps_trailing_docs_inside_span() {
        let built = build(&[
            "# ::span-comment",
            "# owner",
            "a: 1",
            "# more prose",
            "# ::end-span",
        ]);
        let spans: Vec<_> = built.rows.iter().map(|r| r.doc_span.as_i32()).collect();
        assert_eq!(spans, vec![2, -1]);
        assert_eq!(built.rows[1].doc, "more prose");
        assert!(built.rows[1].code_is_empty);
    }

    #[test]
    fn test_end_span_without_docs_opens_fresh_row() {
        let built = build(&["# ::span-comment", "a: 1", "# ::end-span", "b: 2"]);
        let spans: Vec<_> = built.rows.iter().map(|r| r.doc_span.as_i32()).collect();
        assert_eq!(spans, vec![1, 1]);
    }

    #[test]
    fn test_dangling_span_closes_at_eof() {
        let built = build(&["# ::span-comment", "# never closed", "a: 1", "b: 2"]);
        let spans: Vec<_> = built.rows.iter().map(|r| r.doc_span.as_i32()).collect();
        assert_eq!(spans, vec![2, -1]);
    }

    #[test]
    fn test_span_directive_at_eof_without_code() {
        let built = build(&["a: 1", "# ::span-comment"]);
        assert_eq!(built.rows.len(), 1);
        assert_eq!(built.rows[0].doc_span, DocSpan::SINGLE);
    }

    #[test]
    fn test_trailing_docs_are_flushed() {
        let built = build(&["a: 1", "# closing words"]);
        assert_eq!(built.rows.len(), 2);
        assert_eq!(built.rows[1].doc, "closing words");
        assert_eq!(built.rows[1].doc_span, DocSpan::SINGLE);
        assert_eq!(built.rows[1].source_line, 2);
    }

    #[test]
    fn test_newline_directive_inserts_paragraph_break() {
        let built = build(&["# first", "# ::newline", "# second", "a: 1"]);
        assert_eq!(built.rows[0].doc, "first  \n\n second");
    }

    #[test]
    fn test_empty_input() {
        let built = build(&[]);
        assert!(built.rows.is_empty());
        assert!(built.blob.is_empty());
    }
}
