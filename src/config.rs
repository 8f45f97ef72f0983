// ⚙️ Scrape configuration
//
// Defaults reproduce the fixed endpoints of the live site. The binary can
// override each one from the command line.

use crate::entities::{Classification, Link, Organization};
use crate::ids::make_id;
use std::path::PathBuf;

pub const BASE_URL: &str = "https://www.bundestag.de/";
pub const DEFAULT_TERM: u32 = 18;
pub const DEFAULT_OUTPUT: &str = "data.json";

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Index listing one detail XML per member
    pub member_index_url: String,

    /// Index listing one detail XML per committee
    pub committee_index_url: String,

    /// Legislative term (Wahlperiode) the parliament organization represents
    pub term: u32,

    pub output: PathBuf,

    /// Indented JSON instead of compact
    pub pretty: bool,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            member_index_url: format!("{}xml/mdb/index.xml", BASE_URL),
            committee_index_url: format!("{}xml/ausschuesse/index.xml", BASE_URL),
            term: DEFAULT_TERM,
            output: PathBuf::from(DEFAULT_OUTPUT),
            pretty: false,
        }
    }
}

impl ScrapeConfig {
    /// Registry key of the parliament organization ("18bt")
    pub fn parliament_key(&self) -> String {
        format!("{}bt", self.term)
    }

    /// The parliament itself, one per term
    pub fn parliament(&self) -> Organization {
        Organization::new(
            make_id("wahlperiode", &self.term.to_string()),
            format!("{}. Deutscher Bundestag", self.term),
            Classification::Parlament,
        )
        .with_link(Link::new("Bundestag.de", "https://www.bundestag.de"))
    }
}
