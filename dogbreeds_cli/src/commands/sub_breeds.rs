use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Args;
use dogbreeds_lib::{
    BreedFetcher, BreedNotFoundError, DogApiBreedFetcher, FetcherConfig, StaticBreedFetcher,
};

use crate::output::{
    print_json, print_sub_breeds_csv, print_sub_breeds_markdown, print_sub_breeds_table,
    BreedListing, OutputFormat,
};

#[derive(Args)]
pub struct SubBreedsArgs {
    /// Breeds to look up (e.g. hound bulldog)
    #[arg(required = true)]
    pub breeds: Vec<String>,

    /// API base URL (overrides DOGBREEDS_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (overrides DOGBREEDS_TIMEOUT_SECS)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Answer from a local JSON breed table instead of the API
    #[arg(long, conflicts_with_all = ["base_url", "timeout_secs"])]
    pub from_file: Option<PathBuf>,
}

pub async fn run(args: &SubBreedsArgs, format: &OutputFormat) -> Result<()> {
    let (listings, missing) = match &args.from_file {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read breed table {}", path.display()))?;
            let fetcher = StaticBreedFetcher::from_json(&json)?;
            tracing::info!("Loaded {} breeds from {}", fetcher.len(), path.display());
            lookup(&fetcher, &args.breeds).await
        }
        None => {
            let fetcher = DogApiBreedFetcher::from_config(&config_from(args))?;
            tracing::info!("Querying {}", fetcher.base_url());
            lookup(&fetcher, &args.breeds).await
        }
    };

    match format {
        OutputFormat::Table => print_sub_breeds_table(&listings),
        OutputFormat::Json => print_json(&listings),
        OutputFormat::Csv => print_sub_breeds_csv(&listings)?,
        OutputFormat::Markdown => print_sub_breeds_markdown(&listings),
    }

    for err in &missing {
        eprintln!("{}", err);
    }
    if !missing.is_empty() {
        bail!(
            "{} of {} breeds not found",
            missing.len(),
            args.breeds.len()
        );
    }
    Ok(())
}

/// Environment settings, with command-line flags taking precedence.
fn config_from(args: &SubBreedsArgs) -> FetcherConfig {
    let mut config = FetcherConfig::from_env();
    if let Some(ref url) = args.base_url {
        config = config.with_base_url(url.as_str());
    }
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    config
}

/// Looks up each breed once, in order, splitting hits from misses.
async fn lookup<F: BreedFetcher>(
    fetcher: &F,
    breeds: &[String],
) -> (Vec<BreedListing>, Vec<BreedNotFoundError>) {
    let mut listings = Vec::new();
    let mut missing = Vec::new();
    for breed in breeds {
        match fetcher.get_sub_breeds(breed).await {
            Ok(sub_breeds) => listings.push(BreedListing {
                breed: breed.clone(),
                sub_breeds,
            }),
            Err(err) => missing.push(err),
        }
    }
    (listings, missing)
}
