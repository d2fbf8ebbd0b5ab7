use crate::models::Row;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlignError {
    #[error("Highlighter returned {actual} lines for a code blob of {expected} lines")]
    LineCountMismatch { expected: usize, actual: usize },
    #[error("No highlighted fragment for code blob line {line}")]
    MissingFragment { line: usize },
}

/// Attaches highlighted fragments to rows by their blob line.
///
/// Fragment `i` goes to the row tagged with blob line `i`. Rows before the first
/// code row get nothing; blank-code rows after it get an empty fragment. Any
/// disagreement between the blob and the fragments is an error, never a
/// truncation.
pub fn align_highlights(
    rows: &mut [Row],
    fragments: Vec<String>,
    blob_lines: usize,
) -> Result<(), AlignError> {
    if fragments.len() != blob_lines {
        return Err(AlignError::LineCountMismatch {
            expected: blob_lines,
            actual: fragments.len(),
        });
    }

    let mut fragments: Vec<Option<String>> = fragments.into_iter().map(Some).collect();
    let mut active = false;

    for row in rows.iter_mut() {
        active |= row.is_first_code;
        if !active {
            continue;
        }

        let html = match row.blob_line {
            Some(line) => fragments
                .get_mut(line)
                .and_then(Option::take)
                .ok_or(AlignError::MissingFragment { line })?,
            None => String::new(),
        };
        row.code_html = Some(html);
    }

    Ok(())
}
