// 🏢 Organization Extraction - Committees and ad-hoc gremia
//
// Committee detail documents become Ausschuss organizations, registered
// under the source's own committee id. Member documents later reference
// gremia by that same id; unknown ones are created on the fly.

use crate::entities::{
    Classification, ContactDetail, Identifier, Link, Membership, Organization, OrganizationRegistry,
};
use crate::fetch::Fetcher;
use crate::ids::make_id;
use crate::xml;
use anyhow::{Context, Result};
use roxmltree::Node;
use tracing::debug;

/// Registry key for a gremium reference without an id (the council of elders)
pub const SENTINEL_GREMIUM_KEY: &str = "aeltestenrat";

/// Fetch one committee detail document and register it
///
/// Returns the registry key it was stored under. Fetch and parse failures
/// propagate: committee documents are expected to be well-formed.
pub fn scrape_committee(
    fetcher: &dyn Fetcher,
    url: &str,
    registry: &mut OrganizationRegistry,
) -> Result<String> {
    let body = fetcher
        .fetch(url)
        .with_context(|| format!("Failed to fetch committee {}", url))?;
    let doc = xml::parse(&body).with_context(|| format!("Failed to parse committee {}", url))?;

    let (key, organization) = parse_committee(doc.root_element(), url);
    debug!("Committee {} → {}", key, organization.name);

    registry
        .register(&key, organization)
        .with_context(|| format!("Failed to register committee {}", url))?;

    Ok(key)
}

/// Build the committee organization from its detail document root
fn parse_committee(root: Node<'_, '_>, url: &str) -> (String, Organization) {
    let source_id = xml::non_blank(xml::child_text(root, "ausschussId"));
    let key = source_id
        .clone()
        .unwrap_or_else(|| SENTINEL_GREMIUM_KEY.to_string());

    let mut organization = Organization::new(
        make_id("gremium", &key),
        xml::child_text(root, "ausschussName").unwrap_or_default(),
        Classification::Ausschuss,
    );

    organization.description = xml::non_blank(xml::child_text(root, "ausschussAufgabe"));
    organization.image = xml::non_blank(xml::find_text(root, "ausschussBildURL"));
    organization.image_copyright = xml::non_blank(xml::child_text(root, "ausschussCopyright"));

    if let Some(source_url) = xml::non_blank(xml::find_text(root, "ausschussSourceURL")) {
        organization.links.push(Link::new("Bundestag.de", &source_url));
    }
    organization.links.push(Link::new("Bundestag XML", url));

    if let Some(id) = &source_id {
        organization.identifiers.push(Identifier::bundestag(id));
    }

    if let Some(contact) = xml::non_blank(xml::find_text(root, "ausschussKontakt")) {
        organization
            .contact_details
            .push(ContactDetail::new("address", "Anschrift", &contact));
    }

    (key, organization)
}

/// Link a person to the gremium referenced by `node`
///
/// `node` carries an `id` attribute plus `gremiumName` / `gremiumURL`
/// children. A known id reuses the registered organization; an unknown one
/// (or a missing id, mapped to the sentinel key) creates a minimal
/// Sonstiges organization first.
pub fn add_to_gremium(
    node: Node<'_, '_>,
    person_id: &str,
    role: &str,
    registry: &mut OrganizationRegistry,
) -> Membership {
    let source_id = node.attribute("id").filter(|id| !id.trim().is_empty());
    let key = source_id.unwrap_or(SENTINEL_GREMIUM_KEY);

    let organization = registry.get_or_create(key, || {
        let mut organization = Organization::new(
            make_id("gremium", key),
            xml::child_text(node, "gremiumName").unwrap_or_default(),
            Classification::Sonstiges,
        );

        if let Some(url) = xml::non_blank(xml::child_text(node, "gremiumURL")) {
            organization.links.push(Link::new("Bundestag.de", &url));
        }
        if let Some(id) = source_id {
            organization.identifiers.push(Identifier::bundestag(id));
        }

        organization
    });

    Membership::in_body(person_id, organization, role)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::StaticFetcher;
    use crate::ids::make_link_id;

    const COMMITTEE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ausschuss>
  <ausschussId>a08</ausschussId>
  <ausschussName>Finanzausschuss</ausschussName>
  <ausschussAufgabe><![CDATA[Berät Steuergesetze.]]></ausschussAufgabe>
  <ausschussCopyright>DBT</ausschussCopyright>
  <medien><ausschussBildURL>http://x/bild.jpg</ausschussBildURL></medien>
  <quelle><ausschussSourceURL>http://x/a08/index.jsp</ausschussSourceURL></quelle>
  <kontakt><ausschussKontakt>Platz der Republik 1, 11011 Berlin</ausschussKontakt></kontakt>
</ausschuss>"#;

    const MINIMAL_COMMITTEE: &str = r#"<ausschuss>
  <ausschussId>a09</ausschussId>
  <ausschussName>Wirtschaft</ausschussName>
  <ausschussKontakt></ausschussKontakt>
</ausschuss>"#;

    #[test]
    fn test_scrape_committee_full() {
        let fetcher = StaticFetcher::new().with("http://x/a08.xml", COMMITTEE);
        let mut registry = OrganizationRegistry::new();

        let key = scrape_committee(&fetcher, "http://x/a08.xml", &mut registry).unwrap();
        let org = registry.get(&key).unwrap();

        assert_eq!(key, "a08");
        assert_eq!(org.id, "de.bundestag.data/gremium/a08");
        assert_eq!(org.name, "Finanzausschuss");
        assert_eq!(org.classification, Classification::Ausschuss);
        assert_eq!(org.description.as_deref(), Some("Berät Steuergesetze."));
        assert_eq!(org.image.as_deref(), Some("http://x/bild.jpg"));
        assert_eq!(org.image_copyright.as_deref(), Some("DBT"));
        assert_eq!(
            org.links,
            vec![
                Link::new("Bundestag.de", "http://x/a08/index.jsp"),
                Link::new("Bundestag XML", "http://x/a08.xml"),
            ]
        );
        assert_eq!(org.identifiers, vec![Identifier::bundestag("a08")]);
        assert_eq!(org.contact_details[0].value, "Platz der Republik 1, 11011 Berlin");
    }

    #[test]
    fn test_scrape_committee_minimal_has_no_contact() {
        let fetcher = StaticFetcher::new().with("http://x/a09.xml", MINIMAL_COMMITTEE);
        let mut registry = OrganizationRegistry::new();

        scrape_committee(&fetcher, "http://x/a09.xml", &mut registry).unwrap();
        let org = registry.get("a09").unwrap();

        assert!(org.contact_details.is_empty());
        assert!(org.description.is_none());
        assert_eq!(org.links.len(), 1);
    }

    #[test]
    fn test_scrape_committee_without_id_uses_sentinel() {
        let fetcher = StaticFetcher::new()
            .with("u", "<ausschuss><ausschussName>Rat</ausschussName></ausschuss>");
        let mut registry = OrganizationRegistry::new();

        let key = scrape_committee(&fetcher, "u", &mut registry).unwrap();

        assert_eq!(key, SENTINEL_GREMIUM_KEY);
        assert_eq!(registry.get(&key).unwrap().id, "de.bundestag.data/gremium/aeltestenrat");
        assert!(registry.get(&key).unwrap().identifiers.is_empty());
    }

    #[test]
    fn test_scrape_committee_fetch_failure_propagates() {
        let mut registry = OrganizationRegistry::new();

        let result = scrape_committee(&StaticFetcher::new(), "http://x/gone.xml", &mut registry);

        assert!(result.is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_to_gremium_reuses_committee() {
        let fetcher = StaticFetcher::new().with("http://x/a08.xml", COMMITTEE);
        let mut registry = OrganizationRegistry::new();
        scrape_committee(&fetcher, "http://x/a08.xml", &mut registry).unwrap();
        registry.seal();

        let doc =
            xml::parse(r#"<gremium id="a08"><gremiumName>Finanzen (kurz)</gremiumName></gremium>"#)
                .unwrap();
        let membership =
            add_to_gremium(doc.root_element(), "de.bundestag.data/mdb/1", "Obmann", &mut registry);

        assert_eq!(registry.len(), 1);
        assert_eq!(membership.organization_id, "de.bundestag.data/gremium/a08");
        assert_eq!(membership.label, "Obmann, Finanzausschuss");
        assert_eq!(
            membership.id,
            make_link_id("de.bundestag.data/mdb/1", "de.bundestag.data/gremium/a08")
        );
    }

    #[test]
    fn test_add_to_gremium_creates_unknown() {
        let mut registry = OrganizationRegistry::new();
        let doc = xml::parse(
            r#"<gremium id="k17">
                 <gremiumName>Enquete-Kommission</gremiumName>
                 <gremiumURL>http://x/k17</gremiumURL>
               </gremium>"#,
        )
        .unwrap();

        let membership = add_to_gremium(doc.root_element(), "p", "Mitglied", &mut registry);
        let org = registry.get("k17").unwrap();

        assert_eq!(org.classification, Classification::Sonstiges);
        assert_eq!(org.name, "Enquete-Kommission");
        assert_eq!(org.links, vec![Link::new("Bundestag.de", "http://x/k17")]);
        assert_eq!(org.identifiers, vec![Identifier::bundestag("k17")]);
        assert_eq!(membership.role, "Mitglied");
    }

    #[test]
    fn test_add_to_gremium_missing_id_maps_to_sentinel() {
        let mut registry = OrganizationRegistry::new();
        let doc = xml::parse(
            r#"<roles>
                 <gremium><gremiumName>Ältestenrat</gremiumName></gremium>
                 <gremium id=""><gremiumName>Other</gremiumName></gremium>
               </roles>"#,
        )
        .unwrap();

        let memberships: Vec<Membership> = xml::elements(doc.root_element())
            .map(|node| add_to_gremium(node, "p", "Mitglied", &mut registry))
            .collect();

        assert_eq!(registry.len(), 1);
        assert_eq!(memberships[0].organization_id, memberships[1].organization_id);
        assert_eq!(registry.get(SENTINEL_GREMIUM_KEY).unwrap().name, "Ältestenrat");
    }
}
