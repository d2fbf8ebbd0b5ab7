/// The whole-file code body fed to the highlighter.
///
/// Holds every non-blank code line in source order, each terminated by `\n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlob {
    text: String,
    lines: usize,
}

impl CodeBlob {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a code line and returns its 0-based line index within the blob.
    pub fn push_line(&mut self, line: &str) -> usize {
        self.text.push_str(line);
        self.text.push('\n');
        self.lines += 1;
        self.lines - 1
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> usize {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines == 0
    }

    /// The blob made safe for a JavaScript template literal.
    ///
    /// Backslashes go first so the escapes added for backtick and `$` survive.
    pub fn escaped_for_template(&self) -> String {
        self.text
            .replace('\\', "\\\\")
            .replace('`', "\\`")
            .replace('$', "\\$")
    }

    pub fn into_string(self) -> String {
        self.text
    }
}
