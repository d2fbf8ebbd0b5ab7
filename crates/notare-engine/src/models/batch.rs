use std::path::Path;
use std::thread;

use relative_path::RelativePath;

use super::Example;
use crate::io::{self, IoError};
use crate::parsing::{ParseError, Pipeline, parse_example};

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("Failed to read example {name}: {source}")]
    Read { name: String, source: IoError },
    #[error("Failed to parse example {name}: {source}")]
    Parse { name: String, source: ParseError },
}

/// The examples of one build, in navigation order.
///
/// Owns every [`Example`]; previous/next links are indices into this batch.
#[derive(Debug, Default)]
pub struct ExampleBatch {
    examples: Vec<Example>,
}

impl ExampleBatch {
    /// Takes ownership of already parsed examples and links them in order.
    pub fn new(examples: Vec<Example>) -> Self {
        let mut batch = Self { examples };
        batch.link();
        batch
    }

    /// Reads and parses `names` from `examples_root`.
    ///
    /// Files are parsed concurrently. The result keeps the order of `names`, and
    /// the first failure in that order is returned.
    pub fn parse_files(
        examples_root: &Path,
        names: &[String],
        pipeline: &Pipeline,
    ) -> Result<Self, BatchError> {
        let workers = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .min(names.len())
            .max(1);
        let chunk_size = names.len().div_ceil(workers).max(1);

        let results: Vec<Result<Example, BatchError>> = thread::scope(|scope| {
            let handles: Vec<_> = names
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|name| parse_file(examples_root, name, pipeline))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
                })
                .collect()
        });

        let examples = results.into_iter().collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(examples))
    }

    fn link(&mut self) {
        let len = self.examples.len();
        for (idx, example) in self.examples.iter_mut().enumerate() {
            example.previous = idx.checked_sub(1);
            example.next = (idx + 1 < len).then_some(idx + 1);
        }
    }

    pub fn get(&self, index: usize) -> Option<&Example> {
        self.examples.get(index)
    }

    pub fn previous_of(&self, index: usize) -> Option<&Example> {
        self.get(index)?.previous.and_then(|i| self.get(i))
    }

    pub fn next_of(&self, index: usize) -> Option<&Example> {
        self.get(index)?.next.and_then(|i| self.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Example> {
        self.examples.iter()
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}

fn parse_file(
    examples_root: &Path,
    name: &str,
    pipeline: &Pipeline,
) -> Result<Example, BatchError> {
    let source = io::read_file(RelativePath::new(name), examples_root).map_err(|source| {
        BatchError::Read {
            name: name.to_string(),
            source,
        }
    })?;

    parse_example(name, &source, pipeline).map_err(|source| BatchError::Parse {
        name: name.to_string(),
        source,
    })
}
