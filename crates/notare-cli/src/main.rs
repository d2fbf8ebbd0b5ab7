use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use notare_config::Config;
use notare_engine::highlight;

mod build;
mod render;

#[derive(Parser)]
#[command(
    name = "notare",
    version,
    about = "Side-by-side example pages from annotated sources"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build HTML from examples
    Build(BuildArgs),
    /// Print the highlight stylesheet
    Styles,
}

#[derive(Args)]
struct BuildArgs {
    /// Config file (defaults to ./notare.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory holding the example sources
    #[arg(long)]
    examples_dir: Option<PathBuf>,
    /// File listing examples in page order
    #[arg(long)]
    list: Option<PathBuf>,
    /// Output directory for generated pages
    #[arg(long)]
    output: Option<PathBuf>,
    /// Language passed to the highlighter
    #[arg(long)]
    language: Option<String>,
}

impl BuildArgs {
    fn resolve_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_path(path)?
                .ok_or_else(|| anyhow::anyhow!("Config file not found: {}", path.display()))?,
            None => Config::load()?,
        };

        if let Some(dir) = self.examples_dir {
            config.examples_dir = dir;
        }
        if let Some(list) = self.list {
            config.examples_list = list;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let Some(language) = self.language {
            config.language = language;
        }
        Ok(config)
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Build(args) => {
            let config = args.resolve_config()?;
            log::info!("Starting...");
            let report = build::run(&config)?;
            log::info!(
                "Finished: {} pages, index at {}, styles at {}",
                report.pages.len(),
                report.index.display(),
                report.stylesheet.display()
            );
        }
        Command::Styles => print!("{}", highlight::stylesheet()),
    }
    Ok(())
}
