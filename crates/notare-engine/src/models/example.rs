use std::path::Path;

use super::Row;

/// One parsed source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    /// File name without its extension; used for page file names and links.
    pub id: String,
    pub name: String,
    pub rows: Vec<Row>,
    /// The code blob exactly as handed to the highlighter.
    pub code: String,
    /// The code blob escaped for embedding in a JavaScript template literal.
    pub full_code: String,
    pub(crate) previous: Option<usize>,
    pub(crate) next: Option<usize>,
}

impl Example {
    pub(crate) fn new(file_name: &str, rows: Vec<Row>, code: String, full_code: String) -> Self {
        let id = Self::strip_extension(file_name);
        Self {
            name: id.clone(),
            id,
            rows,
            code,
            full_code,
            previous: None,
            next: None,
        }
    }

    /// Index of the previous example in the owning batch.
    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    /// Index of the next example in the owning batch.
    pub fn next(&self) -> Option<usize> {
        self.next
    }

    fn strip_extension(file_name: &str) -> String {
        match Path::new(file_name).extension().and_then(|ext| ext.to_str()) {
            Some(ext) => file_name
                .strip_suffix(ext)
                .and_then(|rest| rest.strip_suffix('.'))
                .unwrap_or(file_name)
                .to_string(),
            None => file_name.to_string(),
        }
    }
}
