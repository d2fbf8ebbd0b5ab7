use std::sync::OnceLock;

use regex::Regex;

/// Control directives recognised inside documentation lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `::span-comment` - the current row's docs cover the following code rows.
    BeginSpan,
    /// `::end-span` - closes the span opened by [`Directive::BeginSpan`].
    EndSpan,
    /// `::newline` - forces a paragraph break in the accumulated docs.
    Newline,
}

impl Directive {
    fn parse(content: &str) -> Option<Self> {
        match content.trim() {
            "::span-comment" => Some(Self::BeginSpan),
            "::end-span" => Some(Self::EndSpan),
            "::newline" => Some(Self::Newline),
            _ => None,
        }
    }
}

/// Classification of a single source line.
///
/// This is phase 1 of row building: each line is classified on its own,
/// without reference to the lines around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// A documentation line with one of the control directives.
    Directive(Directive),
    /// A documentation line; the comment prefix has been stripped.
    Doc(&'a str),
    /// A code line, verbatim.
    Code(&'a str),
}

impl LineClass<'_> {
    /// Whether this is a code line containing only whitespace.
    pub fn is_blank_code(&self) -> bool {
        matches!(self, LineClass::Code(text) if text.trim().is_empty())
    }
}

fn comment_prefix() -> &'static Regex {
    static COMMENT_PREFIX: OnceLock<Regex> = OnceLock::new();
    COMMENT_PREFIX.get_or_init(|| Regex::new(r"^\s*#\s*").expect("Invalid comment prefix regex"))
}

/// Splits lines into documentation and code.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// A line is documentation when it starts with optional whitespace, a `#`
    /// and optional whitespace. That prefix is stripped from the content.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        match comment_prefix().find(line) {
            Some(prefix) => {
                let content = &line[prefix.end()..];
                match Directive::parse(content) {
                    Some(directive) => LineClass::Directive(directive),
                    None => LineClass::Doc(content),
                }
            }
            None => LineClass::Code(line),
        }
    }
}
