use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid examples directory: {0}")]
    InvalidExamplesDir(String),
}

/// Read an example source file, relative to the examples directory
pub fn read_file(relative_path: &RelativePath, examples_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(examples_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write a generated file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Read the ordered list of example file names, one per line.
///
/// Surrounding whitespace is trimmed and blank lines are ignored. The order of
/// the list is the navigation order of the generated pages.
pub fn read_example_list(list_path: &Path) -> Result<Vec<String>, IoError> {
    if !list_path.exists() {
        return Err(IoError::NotFound(list_path.to_path_buf()));
    }

    let content = fs::read_to_string(list_path).map_err(IoError::Io)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

pub fn validate_examples_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() {
        return Err(IoError::InvalidExamplesDir(format!(
            "{} does not exist",
            path.display()
        )));
    }
    if !path.is_dir() {
        return Err(IoError::InvalidExamplesDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}
