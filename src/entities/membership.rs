// 🔗 Membership - Person ↔ Organization link
//
// id = make_link_id(person_id, organization_id), so the same person in the
// same organization always yields the same membership id.

use crate::entities::organization::{Classification, Organization};
use crate::ids::{make_id, make_link_id};
use serde::{Deserialize, Serialize};

/// Default seat role in the parliament
pub const ROLE_MEMBER_OF_PARLIAMENT: &str = "Mitglied des Bundestages";
pub const ROLE_VICE_PRESIDENT: &str = "Bundestagsvizepräsident";
pub const ROLE_PRESIDENT: &str = "Bundestagspräsident";

/// Role in a party
pub const ROLE_PARTY_MEMBER: &str = "Mitglied";

// ============================================================================
// AREA
// ============================================================================

/// Where a parliamentary seat comes from: a constituency or a state list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub identifier: String,

    /// Constituency number (Wahlkreis only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constituency: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    pub classification: Classification,

    /// The state a constituency belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl Area {
    /// Directly elected: constituency `number`, child of `state` when known
    pub fn constituency(
        number: &str,
        name: Option<String>,
        url: Option<String>,
        state: Option<&str>,
    ) -> Self {
        Area {
            name,
            identifier: make_id("wahlkreis", number),
            constituency: Some(number.to_string()),
            url,
            classification: Classification::Wahlkreis,
            parent_id: state.map(|state| make_id("land", state)),
        }
    }

    /// Elected via a state list. `state` must be non-blank.
    pub fn state(state: &str) -> Self {
        Area {
            name: Some(state.to_string()),
            identifier: make_id("land", state),
            constituency: None,
            url: None,
            classification: Classification::Bundesland,
            parent_id: None,
        }
    }
}

// ============================================================================
// MEMBERSHIP
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub id: String,
    pub person_id: String,
    pub organization_id: String,
    pub role: String,
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandate_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faction: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<Area>,
}

impl Membership {
    /// Link `person_id` to `organization` with `role`
    pub fn new(person_id: &str, organization: &Organization, role: &str, label: String) -> Self {
        Membership {
            id: make_link_id(person_id, &organization.id),
            person_id: person_id.to_string(),
            organization_id: organization.id.clone(),
            role: role.to_string(),
            label,
            status: None,
            mandate_type: None,
            faction: None,
            end_date: None,
            area: None,
        }
    }

    /// "<role>, <organization>" - committee style label
    pub fn in_body(person_id: &str, organization: &Organization, role: &str) -> Self {
        let label = format!("{}, {}", role, organization.name);
        Membership::new(person_id, organization, role, label)
    }
}
