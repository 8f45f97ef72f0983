// 📇 Index Fetcher - Enumerate detail document URLs
//
// Both index documents are flat lists: every <tag> element anywhere in the
// document holds one detail URL. Any failure here is fatal for the run.

use crate::fetch::Fetcher;
use crate::xml;
use anyhow::{Context, Result};

/// Element holding a committee detail URL
pub const COMMITTEE_URL_TAG: &str = "ausschussDetailXML";

/// Element holding a member detail URL
pub const MEMBER_URL_TAG: &str = "mdbInfoXMLURL";

/// Fetch `index_url` and return the trimmed text of every `tag` element
///
/// Blank entries are skipped; order is document order.
pub fn fetch_index(fetcher: &dyn Fetcher, index_url: &str, tag: &str) -> Result<Vec<String>> {
    let body = fetcher
        .fetch(index_url)
        .with_context(|| format!("Failed to fetch index {}", index_url))?;

    let doc = xml::parse(&body).with_context(|| format!("Failed to parse index {}", index_url))?;

    let urls = xml::find_all(doc.root_element(), tag)
        .map(xml::text_of)
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .collect();

    Ok(urls)
}
