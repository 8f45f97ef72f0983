// 🔑 Identifiers - Deterministic ids, link hashes, date normalization
//
// Every organization and person id is a pure function of (kind, external key):
// re-running the scraper against the same source data yields the same ids.
//
// "Ausschuss für Arbeit und Soziales"
//   → de.bundestag.data/gremium/ausschuss-fur-arbeit-und-soziales

use chrono::NaiveDate;
use sha2::{Digest, Sha256};

/// Namespace every generated id lives under
pub const ID_NAMESPACE: &str = "de.bundestag.data";

/// Separator used between slug tokens
const SLUG_SEP: char = '-';

/// Source date format (German: day.month.year)
const SOURCE_DATE_FORMAT: &str = "%d.%m.%Y";

// ============================================================================
// SLUGS
// ============================================================================

/// Fold `raw` into a lowercase ASCII slug
///
/// Diacritics are transliterated ("Männlich" → "mannlich", "ß" → "ss"),
/// every run of non-alphanumeric characters collapses into a single `-`,
/// and leading/trailing separators are stripped.
///
/// Distinct inputs can fold to the same slug ("CDU/CSU" and "CDU CSU"),
/// so ids built from them collide on purpose.
pub fn slugify(raw: &str) -> String {
    let ascii = deunicode::deunicode(raw).to_lowercase();

    let mut slug = String::with_capacity(ascii.len());
    let mut pending_sep = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push(SLUG_SEP);
            }
            pending_sep = false;
            slug.push(c);
        } else {
            pending_sep = true;
        }
    }

    slug
}

// ============================================================================
// IDS
// ============================================================================

/// Build a namespaced id: `de.bundestag.data/<kind>/<slug>`
///
/// Never fails. Input that folds to nothing yields an empty trailing slug.
pub fn make_id(kind: &str, raw: &str) -> String {
    format!("{}/{}/{}", ID_NAMESPACE, kind, slugify(raw))
}

/// Content hash of an ordered (left, right) id pair
///
/// Hex-encoded SHA-256 of `"<left>:<right>"`, always 64 characters.
/// Order matters: `make_link_id(a, b) != make_link_id(b, a)` for `a != b`.
pub fn make_link_id(left: &str, right: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{}:{}", left, right));
    format!("{:x}", hasher.finalize())
}

// ============================================================================
// DATES
// ============================================================================

/// Normalize a `dd.mm.yyyy` date to ISO-8601 (`yyyy-mm-dd`)
///
/// Anything that doesn't parse is returned unchanged, so the field
/// is never lost. The year must be exactly four digits: chrono's `%Y`
/// alone would read "03.11.75" as the year 75.
pub fn parse_date(text: &str) -> String {
    if !has_four_digit_year(text) {
        return text.to_string();
    }

    match NaiveDate::parse_from_str(text, SOURCE_DATE_FORMAT) {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => text.to_string(),
    }
}

fn has_four_digit_year(text: &str) -> bool {
    text.rsplit('.')
        .next()
        .is_some_and(|year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
}

// ============================================================================
// TESTS
// ============================================================================
