//! # Syntax Highlighting
//!
//! The parser hands the whole code blob of a file to a [`Highlighter`] in one
//! call and expects back one HTML fragment per line of that blob, in order.
//! The alignment step depends on that count-and-order parity.
//!
//! [`ClassedHighlighter`] is the built-in implementation. It emits class-based
//! markup (no inline styles); [`stylesheet`] returns the matching CSS.

pub mod yaml;

use std::fmt::Write;

use yaml::YamlToken;

#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    #[error("No highlighter for language: {0}")]
    UnsupportedLanguage(String),
    /// `line` is 1-based within the code blob.
    #[error("Tokenizer failed on line {line}: {message}")]
    Tokenize { line: usize, message: String },
}

/// Turns a block of code into per-line HTML fragments.
pub trait Highlighter: Send + Sync {
    /// Highlights `code` as `language`, returning one fragment per input line.
    fn highlight(&self, language: &str, code: &str) -> Result<Vec<String>, HighlightError>;
}

/// Default highlighter: YAML via a logos tokenizer, plus a plain-text mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassedHighlighter;

impl ClassedHighlighter {
    fn highlight_yaml(code: &str) -> Result<Vec<String>, HighlightError> {
        // YAML streams may not carry control characters other than tab and line breaks
        for (idx, line) in code.lines().enumerate() {
            if let Some(c) = line
                .chars()
                .find(|c| c.is_control() && !matches!(c, '\t' | '\r'))
            {
                return Err(HighlightError::Tokenize {
                    line: idx + 1,
                    message: format!("non-printable character {c:?}"),
                });
            }
        }

        let mut lines = Vec::new();
        let mut current = String::new();
        let mut open = false;

        for (kind, text) in yaml::lex(code) {
            if kind == YamlToken::Newline {
                lines.push(wrap_line(&current));
                current.clear();
                open = false;
                continue;
            }
            open = true;
            match kind.class() {
                Some(class) => {
                    let _ = write!(
                        current,
                        "<span class=\"{class}\">{}</span>",
                        html_escape::encode_text(text)
                    );
                }
                None => current.push_str(&html_escape::encode_text(text)),
            }
        }

        // last line without a trailing newline
        if open {
            lines.push(wrap_line(&current));
        }
        Ok(lines)
    }

    fn highlight_plain(code: &str) -> Vec<String> {
        code.lines()
            .map(|line| wrap_line(&html_escape::encode_text(line)))
            .collect()
    }
}

impl Highlighter for ClassedHighlighter {
    fn highlight(&self, language: &str, code: &str) -> Result<Vec<String>, HighlightError> {
        match language.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Self::highlight_yaml(code),
            "text" | "plain" | "plaintext" => Ok(Self::highlight_plain(code)),
            other => Err(HighlightError::UnsupportedLanguage(other.to_string())),
        }
    }
}

fn wrap_line(inner: &str) -> String {
    format!("<span class=\"line\"><span class=\"cl\">{inner}</span></span>")
}

/// CSS for the classes emitted by [`ClassedHighlighter`].
pub fn stylesheet() -> String {
    const RULES: &[(&str, &str)] = &[
        (".line", "display: flex"),
        (".c", "color: #aaaaaa; font-style: italic"),
        (".nt", "color: #0000aa"),
        (".s", "color: #aa5500"),
        (".m", "color: #009999"),
        (".kc", "color: #0000aa"),
        (".na", "color: #1e90ff"),
        (".p", "color: #555555"),
    ];

    let mut css = String::from("/* Generated by notare */\n");
    for (selector, body) in RULES {
        let _ = writeln!(css, ".chroma {selector} {{ {body} }}");
    }
    css
}
