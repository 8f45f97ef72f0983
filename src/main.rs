use anyhow::Result;
use bundestag_scraper::{write_dataset, HttpFetcher, ScrapeConfig, Scraper, VERSION};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Crawl members and committees of the Bundestag into one JSON file
#[derive(Parser, Debug)]
#[command(name = "bundestag-scraper", version)]
struct Args {
    /// Member index XML
    #[arg(long)]
    member_index: Option<String>,

    /// Committee index XML
    #[arg(long)]
    committee_index: Option<String>,

    /// Legislative term (Wahlperiode)
    #[arg(long)]
    term: Option<u32>,

    /// Output file, overwritten if it exists
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Args {
    fn into_config(self) -> ScrapeConfig {
        let mut config = ScrapeConfig::default();

        if let Some(url) = self.member_index {
            config.member_index_url = url;
        }
        if let Some(url) = self.committee_index {
            config.committee_index_url = url;
        }
        if let Some(term) = self.term {
            config.term = term;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        config.pretty = self.pretty;

        config
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Args::parse().into_config();
    info!("bundestag-scraper {}", VERSION);
    info!("🏛️  Scraping {} and {}", config.committee_index_url, config.member_index_url);

    let scraper = Scraper::new(config, HttpFetcher::new()?);
    let dataset = scraper.run()?;

    let config = scraper.config();
    write_dataset(&dataset, &config.output, config.pretty)?;
    info!("✓ Wrote {}", config.output.display());

    Ok(())
}
