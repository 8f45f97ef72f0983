// 🔄 Pipeline - Index → committees → members → dataset
//
// Strictly sequential. The registry is sealed between the committee and the
// member stage: every committee is known before any member links to it.

use crate::committees::scrape_committee;
use crate::config::ScrapeConfig;
use crate::entities::{Classification, OrganizationRegistry};
use crate::fetch::Fetcher;
use crate::index::{fetch_index, COMMITTEE_URL_TAG, MEMBER_URL_TAG};
use crate::members::scrape_member;
use crate::output::Dataset;
use anyhow::{Context, Result};
use tracing::{debug, info, warn};

pub struct Scraper<F: Fetcher> {
    config: ScrapeConfig,
    fetcher: F,
}

impl<F: Fetcher> Scraper<F> {
    pub fn new(config: ScrapeConfig, fetcher: F) -> Self {
        Scraper { config, fetcher }
    }

    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Run the full crawl
    ///
    /// Fails on index errors and committee errors. Member errors are logged
    /// and the member is left out.
    pub fn run(&self) -> Result<Dataset> {
        let mut registry = OrganizationRegistry::new();
        let parliament = self.config.parliament();

        registry
            .register(&self.config.parliament_key(), parliament.clone())
            .context("Failed to register parliament")?;

        // 1. Committees
        let committee_urls = fetch_index(
            &self.fetcher,
            &self.config.committee_index_url,
            COMMITTEE_URL_TAG,
        )?;
        info!("📂 {} committees in index", committee_urls.len());

        for url in &committee_urls {
            scrape_committee(&self.fetcher, url, &mut registry)?;
        }
        registry.seal();
        debug!("Registry sealed with {} organizations", registry.len());

        // 2. Members
        let member_urls =
            fetch_index(&self.fetcher, &self.config.member_index_url, MEMBER_URL_TAG)?;
        info!("📂 {} members in index", member_urls.len());

        let mut persons = Vec::with_capacity(member_urls.len());
        let mut skipped = 0;

        for url in &member_urls {
            match scrape_member(&self.fetcher, url, &parliament, &mut registry) {
                Ok(person) => persons.push(person),
                Err(err) => {
                    warn!("FAILED {}: {}", url, err);
                    skipped += 1;
                }
            }
        }

        for classification in [
            Classification::Parlament,
            Classification::Ausschuss,
            Classification::Partei,
            Classification::Sonstiges,
        ] {
            debug!("  {}: {}", classification.as_str(), registry.count_by(classification));
        }
        info!(
            "✓ {} organizations, {} persons ({} skipped)",
            registry.len(),
            persons.len(),
            skipped
        );

        Ok(Dataset {
            organizations: registry.into_organizations(),
            persons,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
