// 🏛️ Organization Entity - Parliament, committees, parties
//
// Identity is the namespaced id (deterministic, see ids.rs).
// The registry is keyed by the SOURCE system's own key instead:
// - committee id ("a11") for committees and gremia
// - party name ("SPD") for parties
// - "18bt" for the parliament itself
//
// Two stages write to it: committees are registered first, then
// member extraction lazily adds parties and ad-hoc gremia.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// CLASSIFICATION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// The parliament (one per legislative term)
    Parlament,

    /// Standing committee
    Ausschuss,

    /// Political party
    Partei,

    /// Any other body (councils, commissions, ad-hoc groups)
    Sonstiges,

    /// Electoral district (areas only)
    Wahlkreis,

    /// Federal state (areas only)
    Bundesland,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Parlament => "Parlament",
            Classification::Ausschuss => "Ausschuss",
            Classification::Partei => "Partei",
            Classification::Sonstiges => "Sonstiges",
            Classification::Wahlkreis => "Wahlkreis",
            Classification::Bundesland => "Bundesland",
        }
    }
}

// ============================================================================
// SHARED VALUE TYPES
// ============================================================================

/// External link with a human-readable note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub note: String,
    pub url: String,
}

impl Link {
    pub fn new(note: &str, url: &str) -> Self {
        Link {
            note: note.to_string(),
            url: url.to_string(),
        }
    }
}

/// Identifier in a foreign scheme (e.g. the source system's own ids)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub identifier: String,
    pub scheme: String,
}

impl Identifier {
    pub fn bundestag(identifier: &str) -> Self {
        Identifier {
            identifier: identifier.to_string(),
            scheme: "bundestag".to_string(),
        }
    }
}

/// Address, phone number, ...
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetail {
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub value: String,
}

impl ContactDetail {
    pub fn new(kind: &str, label: &str, value: &str) -> Self {
        ContactDetail {
            kind: kind.to_string(),
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

// ============================================================================
// ORGANIZATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Deterministic id: de.bundestag.data/<kind>/<slug>
    pub id: String,

    pub name: String,

    pub classification: Classification,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_copyright: Option<String>,

    /// Ordered: source page first, then machine-readable document
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<Identifier>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact_details: Vec<ContactDetail>,
}

impl Organization {
    /// Create a bare organization (id, name, classification only)
    pub fn new(id: String, name: String, classification: Classification) -> Self {
        Organization {
            id,
            name,
            classification,
            description: None,
            image: None,
            image_copyright: None,
            links: Vec::new(),
            identifiers: Vec::new(),
            contact_details: Vec::new(),
        }
    }

    /// Builder pattern: add a link
    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }
}

// ============================================================================
// ORGANIZATION REGISTRY
// ============================================================================

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Registry is sealed; cannot register '{0}' after linking started")]
    Sealed(String),
}

/// Registry of all organizations, keyed by source key
///
/// Insertion-ordered. Entries are never removed.
///
/// Lifecycle:
/// 1. `register()` committees (and the parliament)
/// 2. `seal()` - no more registrations
/// 3. `get_or_create()` parties and gremia while linking members
#[derive(Debug, Default)]
pub struct OrganizationRegistry {
    organizations: IndexMap<String, Organization>,
    sealed: bool,
}

impl OrganizationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an organization under `key`, replacing any previous entry
    pub fn register(&mut self, key: &str, organization: Organization) -> Result<(), RegistryError> {
        if self.sealed {
            return Err(RegistryError::Sealed(key.to_string()));
        }

        self.organizations.insert(key.to_string(), organization);
        Ok(())
    }

    /// End the registration stage
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    /// Existing entry for `key`, or insert the one `factory` builds
    ///
    /// The factory only runs on a miss.
    pub fn get_or_create<F>(&mut self, key: &str, factory: F) -> &Organization
    where
        F: FnOnce() -> Organization,
    {
        self.organizations
            .entry(key.to_string())
            .or_insert_with(factory)
    }

    pub fn get(&self, key: &str) -> Option<&Organization> {
        self.organizations.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.organizations.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.organizations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organizations.is_empty()
    }

    /// All organizations in insertion order
    pub fn organizations(&self) -> impl Iterator<Item = &Organization> {
        self.organizations.values()
    }

    /// Count by classification
    pub fn count_by(&self, classification: Classification) -> usize {
        self.organizations()
            .filter(|o| o.classification == classification)
            .count()
    }

    pub fn into_organizations(self) -> Vec<Organization> {
        self.organizations.into_values().collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
