// 🧑‍⚖️ Person Extraction - Member detail documents
//
// One member detail document → one Person with three kinds of membership,
// always in this order:
// 1. Seat in the parliament (with constituency or state area)
// 2. Party (created in the registry on first sight)
// 3. Committees / gremia, in source document order
//
// Every failure here is per-record: the caller logs it and moves on.

use crate::committees::add_to_gremium;
use crate::entities::{
    Area, Classification, ContactDetail, Gender, Identifier, Link, Membership, Organization,
    OrganizationRegistry, Person,
};
use crate::entities::membership::{
    ROLE_MEMBER_OF_PARLIAMENT, ROLE_PARTY_MEMBER, ROLE_PRESIDENT, ROLE_VICE_PRESIDENT,
};
use crate::fetch::{FetchError, Fetcher};
use crate::ids::{make_id, parse_date};
use crate::xml;
use roxmltree::Node;
use thiserror::Error;
use tracing::{info, warn};

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Error, Debug)]
pub enum MemberError {
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("Failed to parse {url}: {source}")]
    Xml {
        url: String,
        #[source]
        source: roxmltree::Error,
    },

    #[error("No mdbID in {0}")]
    MissingId(String),

    #[error("Non-numeric mdbID '{value}' in {url}")]
    InvalidId { url: String, value: String },

    #[error("Unknown gender '{value}' in {url}")]
    UnknownGender { url: String, value: String },
}

// ============================================================================
// EXTRACTION
// ============================================================================

/// Fetch and extract one member
///
/// `parliament` is the organization every seat membership points at.
pub fn scrape_member(
    fetcher: &dyn Fetcher,
    url: &str,
    parliament: &Organization,
    registry: &mut OrganizationRegistry,
) -> Result<Person, MemberError> {
    let body = fetcher.fetch(url).map_err(|source| MemberError::Fetch {
        url: url.to_string(),
        source,
    })?;

    let doc = xml::parse(&body).map_err(|source| MemberError::Xml {
        url: url.to_string(),
        source,
    })?;

    parse_member(doc.root_element(), url, parliament, registry)
}

/// Extract one member from its parsed detail document
///
/// Memberships come out as: seat, party, then committees in source order.
/// The party membership is only present when `mdbPartei` is non-blank, so
/// don't index into `memberships` expecting the party at position 1.
pub fn parse_member(
    root: Node<'_, '_>,
    url: &str,
    parliament: &Organization,
    registry: &mut OrganizationRegistry,
) -> Result<Person, MemberError> {
    let mut person = parse_person(root, url)?;
    info!("Scraping {} {}", person.id, person.name);

    let mut memberships = vec![seat_membership(root, &person, parliament)];

    match xml::non_blank(xml::find_text(root, "mdbPartei")) {
        Some(party) => memberships.push(party_membership(&party, &person.id, registry)),
        None => warn!("No party for {} ({})", person.id, url),
    }

    memberships.extend(committee_memberships(root, &person.id, registry));
    person.memberships = memberships;

    Ok(person)
}

/// Biographical part of a member: fields, links, contacts, display name
fn parse_person(root: Node<'_, '_>, url: &str) -> Result<Person, MemberError> {
    let raw_id = xml::non_blank(xml::find_text(root, "mdbID"))
        .ok_or_else(|| MemberError::MissingId(url.to_string()))?;
    let number: u64 = raw_id.trim().parse().map_err(|_| MemberError::InvalidId {
        url: url.to_string(),
        value: raw_id.clone(),
    })?;

    let gender_code = xml::find_text(root, "mdbGeschlecht").unwrap_or_default();
    let gender = Gender::from_source(&gender_code).ok_or_else(|| MemberError::UnknownGender {
        url: url.to_string(),
        value: gender_code.clone(),
    })?;

    let text = |tag: &str| xml::find_text(root, tag);

    let mut person = Person::new(make_id("mdb", &number.to_string()));
    person.given_name = text("mdbVorname");
    person.family_name = text("mdbZuname");
    person.honorific_prefix = text("mdbAdelstitel");
    person.academic_prefix = text("mdbAkademischerTitel");
    person.location = text("mdbOrtszusatz");
    person.birth_date = text("mdbGeburtsdatum").map(|date| parse_date(&date));
    person.gender = Some(gender);
    person.faith = text("mdbReligionKonfession");
    person.profession = text("mdbBeruf");
    person.profession_group = xml::find(root, "mdbBeruf")
        .and_then(|node| node.attribute("berufsfeld"))
        .map(str::to_string);
    person.graduate_education = text("mdbHochschulbildung");
    person.children = text("mdbAnzahlKinder");
    person.state = text("mdbLand");
    person.trivia = text("mdbWissenswertes");
    person.interests = text("mdbVeroeffentlichungspflichtigeAngaben");
    person.marital_status = text("mdbFamilienstand");
    person.biography = text("mdbBiografischeInformationen");
    person.image = text("mdbFotoURL");
    person.image_copyright = text("mdbFotoCopyright");

    person.identifiers.push(Identifier::bundestag(&number.to_string()));
    person.links = person_links(root, url);
    person.contact_details.push(ContactDetail::new(
        "phone",
        "Telefon",
        &text("mdbTelefon").unwrap_or_default(),
    ));

    person.name = person.build_name();
    person.prune();

    Ok(person)
}

/// Links in fixed order, then homepage and any other websites
fn person_links(root: Node<'_, '_>, url: &str) -> Vec<Link> {
    let text = |tag: &str| xml::find_text(root, tag).unwrap_or_default();

    let mut links = vec![
        Link::new("Bundestag.de", &text("mdbBioURL")),
        Link::new("Bundestag XML", url),
        Link::new("Speeches in plenary", &text("mdbRedenVorPlenumURL")),
        Link::new("Speeches in plenary (RSS)", &text("mdbRedenVorPlenumRSS")),
    ];

    if let Some(homepage) = xml::non_blank(xml::find_text(root, "mdbHomepageURL")) {
        links.push(Link::new("Homepage", &homepage));
    }

    for website in xml::find_all(root, "mdbSonstigeWebsite") {
        links.push(Link::new(
            &xml::child_text(website, "mdbSonstigeWebsiteTitel").unwrap_or_default(),
            &xml::child_text(website, "mdbSonstigeWebsiteURL").unwrap_or_default(),
        ));
    }

    links
}

// ============================================================================
// MEMBERSHIPS
// ============================================================================

/// Seat in the parliament
///
/// Role: member by default; the president flag wins over the vice-president flag.
fn seat_membership(root: Node<'_, '_>, person: &Person, parliament: &Organization) -> Membership {
    let has_flag = |tag: &str| xml::non_blank(xml::find_text(root, tag)).is_some();

    let mut role = ROLE_MEMBER_OF_PARLIAMENT;
    if has_flag("mdbBundestagsvizepraesident") {
        role = ROLE_VICE_PRESIDENT;
    }
    if has_flag("mdbBundestagspraesident") {
        role = ROLE_PRESIDENT;
    }

    let label = format!("{}, {}", person.name, role);
    let mut seat = Membership::new(&person.id, parliament, role, label);

    seat.status = xml::find(root, "mdbID")
        .and_then(|node| node.attribute("status"))
        .filter(|status| !status.trim().is_empty())
        .map(str::to_string);
    seat.mandate_type = xml::non_blank(xml::find_text(root, "mdbGewaehlt"));
    seat.faction = xml::non_blank(xml::find_text(root, "mdbFraktion"));

    let state = xml::non_blank(xml::find_text(root, "mdbLand"));
    seat.area = match xml::non_blank(xml::find_text(root, "mdbWahlkreisNummer")) {
        Some(number) => Some(Area::constituency(
            &number,
            xml::non_blank(xml::find_text(root, "mdbWahlkreisName")),
            xml::non_blank(xml::find_text(root, "mdbWahlkreisURL")),
            state.as_deref(),
        )),
        // No constituency and no state: nothing to point the seat at
        None => state.as_deref().map(Area::state),
    };

    seat.end_date = xml::non_blank(xml::find_text(root, "mdbAustrittsdatum"))
        .map(|date| parse_date(&date));

    seat
}

/// Party membership; the party organization is created on first sight
fn party_membership(
    party: &str,
    person_id: &str,
    registry: &mut OrganizationRegistry,
) -> Membership {
    let organization = registry.get_or_create(party, || {
        Organization::new(make_id("partei", party), party.to_string(), Classification::Partei)
    });

    Membership::new(
        person_id,
        organization,
        ROLE_PARTY_MEMBER,
        format!("{} {}", ROLE_PARTY_MEMBER, party),
    )
}

/// One membership per gremium reference, grouped by role element
///
/// ```text
/// <mdbMitgliedschaften>
///   <mdbMitgliedschaft title="<role>">
///     <mdbGremium id="a08">...</mdbGremium>
/// ```
fn committee_memberships(
    root: Node<'_, '_>,
    person_id: &str,
    registry: &mut OrganizationRegistry,
) -> Vec<Membership> {
    let Some(section) = xml::find(root, "mdbMitgliedschaften") else {
        return Vec::new();
    };

    let mut memberships = Vec::new();
    for role_node in xml::elements(section) {
        let role = role_node.attribute("title").unwrap_or_default();
        for gremium in xml::elements(role_node) {
            memberships.push(add_to_gremium(gremium, person_id, role, registry));
        }
    }

    memberships
}

// ============================================================================
// TESTS
// ============================================================================
