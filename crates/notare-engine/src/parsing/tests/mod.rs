//! Integration tests for the parsing module.
//!
//! Row layouts are compared with inline `insta` snapshots of a one-line-per-row
//! dump; structural invariants are checked on every parse.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::highlight::{HighlightError, Highlighter};
use crate::models::DocSpan;
use crate::parsing::{AlignError, ParseError, Pipeline, parse_example, parse_rows};

const SPANNING: &str = "\
# intro
x = 1
# ::span-comment
# spans two lines
y = 2
z = 3
# ::end-span
";

/// Returns one fragment fewer than there are lines.
struct ShortHighlighter;

impl Highlighter for ShortHighlighter {
    fn highlight(&self, _language: &str, code: &str) -> Result<Vec<String>, HighlightError> {
        let mut lines: Vec<String> = code.lines().map(str::to_string).collect();
        lines.pop();
        Ok(lines)
    }
}

/// Echoes each line back so alignment is easy to read in assertions.
struct EchoHighlighter;

impl Highlighter for EchoHighlighter {
    fn highlight(&self, _language: &str, code: &str) -> Result<Vec<String>, HighlightError> {
        Ok(code.lines().map(|l| format!("<{l}>")).collect())
    }
}

struct FailingHighlighter;

impl Highlighter for FailingHighlighter {
    fn highlight(&self, _language: &str, _code: &str) -> Result<Vec<String>, HighlightError> {
        Err(HighlightError::Tokenize {
            line: 1,
            message: "unexpected byte".to_string(),
        })
    }
}

// Row layout snapshots

#[test]
fn span_owner_covers_following_rows() {
    let built = parse_rows(SPANNING);
    invariants::check(&built);

    insta::assert_snapshot!(normalize::dump(&built.rows), @r#"
    L2 span=1 first=true doc="intro" code="x = 1"
    L5 span=2 first=false doc="spans two lines" code="y = 2"
    L6 span=-1 first=false doc="" code="z = 3"
    "#);
}

#[test]
fn docs_accumulate_until_code() {
    let source = "\
# Maps hold
# key/value pairs.
# ::newline
# Keys are strings.
name: notare


# Lists use dashes.
items:
  - one
# ends here
";
    let built = parse_rows(source);
    invariants::check(&built);

    insta::assert_snapshot!(normalize::dump(&built.rows), @r#"
    L5 span=1 first=true doc="Maps hold key/value pairs.  \n\n Keys are strings." code="name: notare"
    L9 span=1 first=false doc="Lists use dashes." code="items:"
    L10 span=1 first=false doc="" code="  - one"
    L11 span=1 first=false doc="ends here" code=""
    "#);
}

#[test]
fn zero_code_lines() {
    let source = "# Just prose.\n# Nothing to run.\n";
    let example = parse_example("prose.yaml", source, &Pipeline::new("yaml")).unwrap();

    assert_eq!(example.rows.len(), 1);
    assert!(example.rows.iter().all(|r| r.code_html.is_none()));
    assert!(example.rows.iter().all(|r| !r.is_first_code));
    assert_eq!(example.code, "");
}

#[test]
fn leading_blank_code_lines_are_not_rows() {
    let built = parse_rows("\n   \n\t\na: 1\n");
    invariants::check(&built);

    assert_eq!(built.rows.len(), 1);
    assert_eq!(built.rows[0].code, "a: 1");
    assert_eq!(built.rows[0].source_line, 4);
}

// Properties

#[rstest]
#[case::plain("a: 1\nb: 2\n")]
#[case::documented("# one\na: 1\n\n# two\nb: 2\n")]
#[case::paragraphs("# p1\n# ::newline\n# p2\na: 1\n")]
#[case::crlf("# doc\r\na: 1\r\n\r\nb: 2\r\n")]
fn no_span_directives_means_single_spans(#[case] source: &str) {
    let built = parse_rows(source);
    invariants::check(&built);
    assert!(built.rows.iter().all(|r| r.doc_span == DocSpan::SINGLE));
}

#[rstest]
#[case::spanning(SPANNING)]
#[case::dangling("# ::span-comment\n# open\na: 1\nb: 2\n")]
#[case::back_to_back("# ::span-comment\na: 1\nb: 2\n# ::end-span\n# ::span-comment\nc: 3\n# ::end-span\nd: 4\n")]
#[case::docs_inside_span("# ::span-comment\n# top\na: 1\n# inner\nb: 2\n# ::end-span\n")]
#[case::stray_end("# ::end-span\na: 1\n")]
#[case::blank_inside_span("# ::span-comment\na: 1\n\nb: 2\n# ::end-span\n")]
#[case::empty("")]
fn spans_are_well_formed(#[case] source: &str) {
    let built = parse_rows(source);
    invariants::check(&built);
}

#[test]
fn parsing_is_idempotent() {
    let pipeline = Pipeline::new("yaml");
    let first = parse_example("span.yaml", SPANNING, &pipeline).unwrap();
    let second = parse_example("span.yaml", SPANNING, &pipeline).unwrap();
    assert_eq!(first, second);
}

// Alignment through the full pipeline

#[test]
fn fragments_follow_blob_lines() {
    let pipeline = Pipeline::new("yaml").with_highlighter(EchoHighlighter);
    let source = "# doc\n\na: 1\n# gap\n\nb: 2\n";
    let example = parse_example("gap.yaml", source, &pipeline).unwrap();

    let html: Vec<_> = example.rows.iter().map(|r| r.code_html.as_deref()).collect();
    assert_eq!(html, vec![None, Some("<a: 1>"), Some(""), Some("<b: 2>")]);
}

#[test]
fn highlighter_underrun_is_fatal() {
    let pipeline = Pipeline::new("yaml").with_highlighter(ShortHighlighter);
    let result = parse_example("span.yaml", SPANNING, &pipeline);

    assert!(matches!(
        result,
        Err(ParseError::Alignment(AlignError::LineCountMismatch {
            expected: 3,
            actual: 2
        }))
    ));
}

#[test]
fn highlighter_failure_is_fatal() {
    let pipeline = Pipeline::new("yaml").with_highlighter(FailingHighlighter);
    let result = parse_example("span.yaml", SPANNING, &pipeline);

    assert!(matches!(
        result,
        Err(ParseError::Highlight(HighlightError::Tokenize { line: 1, .. }))
    ));
}

#[test]
fn example_fields_are_filled() {
    let source = "# Run `echo`\ncmd: `echo $HOME`\n";
    let example = parse_example("shell.yaml", source, &Pipeline::new("yaml")).unwrap();

    assert_eq!(example.id, "shell");
    assert_eq!(example.code, "cmd: `echo $HOME`\n");
    assert_eq!(example.full_code, "cmd: \\`echo \\$HOME\\`\n");

    let row = &example.rows[0];
    assert_eq!(row.doc_html, "<p>Run <code>echo</code></p>\n");
    assert!(row.is_first_code);
    assert!(row.code_html.as_deref().unwrap().starts_with("<span class=\"line\">"));
}
