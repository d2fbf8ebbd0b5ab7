use std::path::PathBuf;

use anyhow::{Context, Result};
use notare_config::Config;
use notare_engine::{ExampleBatch, Pipeline, highlight, io};

use crate::render;

pub const STYLESHEET_FILE: &str = "highlight.css";

/// What a build produced.
#[derive(Debug)]
pub struct BuildReport {
    pub pages: Vec<PathBuf>,
    pub index: PathBuf,
    pub stylesheet: PathBuf,
}

/// Parse every listed example and write the site into the output directory.
pub fn run(config: &Config) -> Result<BuildReport> {
    io::validate_examples_dir(&config.examples_dir)?;
    let names = io::read_example_list(&config.examples_list).with_context(|| {
        format!(
            "Failed to read example list {}",
            config.examples_list.display()
        )
    })?;
    log::info!(
        "Parsing {} examples from {}",
        names.len(),
        config.examples_dir.display()
    );

    let pipeline = Pipeline::new(config.language.as_str());
    let batch = ExampleBatch::parse_files(&config.examples_dir, &names, &pipeline)?;

    let mut pages = Vec::with_capacity(batch.len());
    for (idx, example) in batch.iter().enumerate() {
        let html = render::example_page(&batch, idx, &config.title)
            .with_context(|| format!("No example at index {idx}"))?;
        let path = config.output_dir.join(format!("{}.html", example.id));
        io::write_file(&path, &html)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::debug!("Wrote {}", path.display());
        pages.push(path);
    }

    let index = config.output_dir.join("index.html");
    io::write_file(&index, &render::index_page(&batch, &config.title))
        .with_context(|| format!("Failed to write {}", index.display()))?;

    log::info!("Generating CSS styles...");
    let stylesheet = config.output_dir.join(STYLESHEET_FILE);
    io::write_file(&stylesheet, &highlight::stylesheet())
        .with_context(|| format!("Failed to write {}", stylesheet.display()))?;

    Ok(BuildReport {
        pages,
        index,
        stylesheet,
    })
}
