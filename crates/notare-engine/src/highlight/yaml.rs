//! YAML tokenizer used by the default highlighter.
//!
//! Tokens are minimal and context-free, and every byte of the input lands in
//! exactly one token, so concatenating token texts gives back the source.
//! Anything the rules don't recognise is treated as plain text.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum YamlToken {
    /// Horizontal whitespace (spaces, tabs)
    #[regex(r"[ \t]+")]
    Whitespace,

    /// Line ending (LF or CRLF)
    #[regex(r"\r?\n")]
    Newline,

    /// `#` to end of line
    #[regex(r"#[^\r\n]*")]
    Comment,

    /// A mapping key including its colon, e.g. `name:`
    #[regex(r"[A-Za-z0-9_][A-Za-z0-9_./-]*:", priority = 4)]
    Key,

    #[regex(r#""([^"\\\r\n]|\\.)*""#)]
    DoubleQuoted,

    #[regex(r"'([^'\r\n]|'')*'")]
    SingleQuoted,

    #[regex(r"-?[0-9]+(\.[0-9]+)?", priority = 3)]
    Number,

    #[token("true")]
    #[token("false")]
    #[token("null")]
    #[token("~")]
    Constant,

    /// Anchors, aliases and tags: `&anchor`, `*alias`, `!tag`
    #[regex(r"[&*!][A-Za-z0-9_!/.-]+", priority = 3)]
    Reference,

    /// Structural punctuation
    #[regex(r"[:,\[\]{}|>?-]")]
    Punctuation,

    /// Plain scalar text - anything not matched by other rules. Every key
    /// character may continue it, so a key-shaped word never needs backtracking.
    #[regex(r#"[^\s#:,\[\]{}"'|>?&*!~-][^\s#:,\[\]{}"'|>?&*!~]*"#)]
    Text,
}

impl YamlToken {
    /// CSS class for this token, `None` for tokens emitted without markup.
    pub fn class(self) -> Option<&'static str> {
        match self {
            YamlToken::Whitespace | YamlToken::Newline | YamlToken::Text => None,
            YamlToken::Comment => Some("c"),
            YamlToken::Key => Some("nt"),
            YamlToken::DoubleQuoted | YamlToken::SingleQuoted => Some("s"),
            YamlToken::Number => Some("m"),
            YamlToken::Constant => Some("kc"),
            YamlToken::Reference => Some("na"),
            YamlToken::Punctuation => Some("p"),
        }
    }
}

/// Lex the input into `(token, text)` pairs. Unrecognised input becomes `Text`.
pub fn lex(input: &str) -> Vec<(YamlToken, &str)> {
    let mut tokens = Vec::new();
    let mut lexer = YamlToken::lexer(input);

    while let Some(result) = lexer.next() {
        let kind = result.unwrap_or(YamlToken::Text);
        tokens.push((kind, lexer.slice()));
    }

    tokens
}
