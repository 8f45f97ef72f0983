// Bundestag Scraper - Core Library
// Crawls the parliament's XML endpoints into a person/organization/membership dataset

pub mod config;
pub mod ids;
pub mod xml;
pub mod fetch;
pub mod entities;
pub mod index;
pub mod committees;
pub mod members;
pub mod output;
pub mod pipeline;

#[cfg(test)]
mod fixtures;

// Re-export commonly used types
pub use config::ScrapeConfig;
pub use ids::{make_id, make_link_id, parse_date, slugify};
pub use fetch::{FetchError, Fetcher, HttpFetcher, StaticFetcher};
pub use entities::{
    Area, Classification, ContactDetail, Gender, Identifier, Link,
    Membership, Organization, OrganizationRegistry, Person, RegistryError,
};
pub use index::fetch_index;
pub use committees::{add_to_gremium, scrape_committee};
pub use members::{scrape_member, MemberError};
pub use output::{write_dataset, Dataset};
pub use pipeline::Scraper;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
