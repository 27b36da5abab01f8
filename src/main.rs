use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

use water_scraper::config::Config;
use water_scraper::constants::{self, DEFAULT_CONFIG_FILE};
use water_scraper::extractor::HtmlSnapshotExtractor;
use water_scraper::logging;
use water_scraper::pipeline::{Pipeline, PipelineResult};
use water_scraper::publish;
use water_scraper::seed::SeedExtractor;
use water_scraper::types::ProductExtractor;

#[derive(Parser)]
#[command(name = "water_scraper")]
#[command(about = "Builds a deduplicated water product catalog from a listing page")]
#[command(version = "0.1.0")]
struct Cli {
    /// Config file (optional)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the catalog from a seed list (default)
    Run {
        /// Seed list to use instead of the builtin one
        #[arg(long)]
        seed: Option<PathBuf>,
        /// Output file for the catalog
        #[arg(long)]
        output: Option<PathBuf>,
        /// How many brands to show in the summary
        #[arg(long)]
        top: Option<usize>,
    },
    /// Build the catalog from a saved listing page
    Extract {
        /// Rendered HTML of the listing page
        #[arg(long)]
        html: PathBuf,
        /// Output file for the catalog
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Embed a catalog into the viewer page
    Publish {
        /// HTML page containing a `const data = [...]` literal
        #[arg(long)]
        template: PathBuf,
        /// Catalog to embed
        #[arg(long, default_value = constants::DEFAULT_OUTPUT_FILE)]
        data: PathBuf,
    },
}

fn print_result(result: &PipelineResult) {
    println!("💾 Saved {} unique products to {}", result.unique_products, result.output_file);
    if result.duplicates_dropped > 0 {
        println!("   ({} duplicates dropped)", result.duplicates_dropped);
    }
    print!("{}", result.summary);
}

fn run_pipeline(extractor: &dyn ProductExtractor, output: PathBuf, top: usize) -> Result<()> {
    let span = tracing::info_span!("pipeline", source = %extractor.source_name());
    let _enter = span.enter();

    match Pipeline::run(extractor, &output, top) {
        Ok(result) => {
            info!("Pipeline finished");
            print_result(&result);
            Ok(())
        }
        Err(e) => {
            error!("Pipeline failed: {}", e);
            Err(e).with_context(|| format!("failed to build catalog at {}", output.display()))
        }
    }
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    let command = cli.command.unwrap_or(Commands::Run {
        seed: None,
        output: None,
        top: None,
    });

    match command {
        Commands::Run { seed, output, top } => {
            let extractor = match seed.or(config.run.seed) {
                Some(path) => SeedExtractor::from_file(path),
                None => SeedExtractor::builtin(),
            };
            let output = output.unwrap_or(config.run.output);
            let top = top.unwrap_or(config.run.top_brands);
            run_pipeline(&extractor, output, top)?;
        }
        Commands::Extract { html, output } => {
            let extractor = HtmlSnapshotExtractor::from_file(&html)
                .with_context(|| format!("failed to read page snapshot {}", html.display()))?;
            let output = output.unwrap_or(config.run.output);
            run_pipeline(&extractor, output, config.run.top_brands)?;
        }
        Commands::Publish { template, data } => {
            let count = publish::publish_file(&template, &data)
                .with_context(|| format!("failed to publish into {}", template.display()))?;
            println!("✅ Updated {} with {} products", template.display(), count);
        }
    }

    Ok(())
}
