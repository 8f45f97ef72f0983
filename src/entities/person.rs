// 👤 Person Entity - One member of parliament
//
// Every biographical field is optional: the source documents leave many of
// them empty. prune() drops blank values in one place, so the field list
// below is the only thing that decides what a person can carry.

use crate::entities::membership::Membership;
use crate::entities::organization::{ContactDetail, Identifier, Link};
use serde::{Deserialize, Serialize};

// ============================================================================
// GENDER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Map the source vocabulary. Anything else is unknown.
    pub fn from_source(code: &str) -> Option<Gender> {
        match code {
            "Weiblich" => Some(Gender::Female),
            "Männlich" => Some(Gender::Male),
            _ => None,
        }
    }
}

// ============================================================================
// PERSON
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// de.bundestag.data/mdb/<number>
    pub id: String,

    /// Display name, derived by build_name()
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    // ========================================================================
    // NAME COMPONENTS
    // ========================================================================
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honorific_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub academic_prefix: Option<String>,
    /// Disambiguating place suffix ("Müller (Köln)")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    // ========================================================================
    // BIOGRAPHY
    // ========================================================================
    /// ISO-8601 when parseable, raw source text otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faith: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduate_education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trivia: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_copyright: Option<String>,

    // ========================================================================
    // REFERENCES
    // ========================================================================
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub identifiers: Vec<Identifier>,
    #[serde(default)]
    pub contact_details: Vec<ContactDetail>,

    /// Seat first, then party, then committees in source order
    #[serde(default)]
    pub memberships: Vec<Membership>,
}

impl Person {
    pub fn new(id: String) -> Self {
        Person {
            id,
            ..Default::default()
        }
    }

    /// Display name: academic prefix, given name, honorific prefix,
    /// family name (blank parts skipped), then " (<location>)" if set.
    pub fn build_name(&self) -> String {
        let parts = [
            &self.academic_prefix,
            &self.given_name,
            &self.honorific_prefix,
            &self.family_name,
        ];

        let mut name = parts
            .iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if let Some(location) = self.location.as_deref().filter(|l| !l.is_empty()) {
            name.push_str(&format!(" ({})", location));
        }

        name
    }

    /// Every optional text field, in declaration order
    fn text_fields_mut(&mut self) -> [&mut Option<String>; 18] {
        [
            &mut self.given_name,
            &mut self.family_name,
            &mut self.honorific_prefix,
            &mut self.academic_prefix,
            &mut self.location,
            &mut self.birth_date,
            &mut self.faith,
            &mut self.profession,
            &mut self.profession_group,
            &mut self.graduate_education,
            &mut self.children,
            &mut self.state,
            &mut self.marital_status,
            &mut self.trivia,
            &mut self.interests,
            &mut self.biography,
            &mut self.image,
            &mut self.image_copyright,
        ]
    }

    /// Drop blank values: text fields that are empty or whitespace-only,
    /// links without a url, contact details without a value.
    pub fn prune(&mut self) {
        for field in self.text_fields_mut() {
            if field.as_deref().is_some_and(|v| v.trim().is_empty()) {
                *field = None;
            }
        }

        if self.name.trim().is_empty() {
            self.name.clear();
        }

        self.links.retain(|link| !link.url.trim().is_empty());
        self.contact_details.retain(|detail| !detail.value.trim().is_empty());
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> Person {
        let mut person = Person::new("de.bundestag.data/mdb/11003196".to_string());
        person.given_name = Some("Angela".to_string());
        person.family_name = Some("Merkel".to_string());
        person.academic_prefix = Some("Dr.".to_string());
        person.honorific_prefix = Some("".to_string());
        person.location = Some("".to_string());
        person
    }

    #[test]
    fn test_gender_vocabulary() {
        assert_eq!(Gender::from_source("Weiblich"), Some(Gender::Female));
        assert_eq!(Gender::from_source("Männlich"), Some(Gender::Male));
        assert_eq!(Gender::from_source("maennlich"), None);
        assert_eq!(Gender::from_source(""), None);
        assert_eq!(serde_json::to_value(Gender::Male).unwrap(), "male");
    }

    #[test]
    fn test_build_name_skips_blank_parts() {
        assert_eq!(person().build_name(), "Dr. Angela Merkel");
    }

    #[test]
    fn test_build_name_order_and_location() {
        let mut p = person();
        p.honorific_prefix = Some("von".to_string());
        p.location = Some("Stralsund".to_string());

        assert_eq!(p.build_name(), "Dr. Angela von Merkel (Stralsund)");
    }

    #[test]
    fn test_build_name_all_missing() {
        let p = Person::new("x".to_string());
        assert_eq!(p.build_name(), "");
    }

    #[test]
    fn test_prune_drops_blank_text() {
        let mut p = person();
        p.children = Some("".to_string());
        p.trivia = Some("  \n ".to_string());
        p.faith = Some("evangelisch".to_string());
        p.prune();

        assert!(p.honorific_prefix.is_none());
        assert!(p.location.is_none());
        assert!(p.children.is_none());
        assert!(p.trivia.is_none());
        assert_eq!(p.faith.as_deref(), Some("evangelisch"));
    }

    #[test]
    fn test_prune_keeps_children_count() {
        let mut p = person();
        p.children = Some("2".to_string());
        p.prune();

        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(value["children"], "2");
    }

    #[test]
    fn test_pruned_field_not_serialized() {
        let mut p = person();
        p.children = Some("".to_string());
        p.prune();

        let value = serde_json::to_value(&p).unwrap();
        assert!(value.get("children").is_none());
        assert!(value.get("location").is_none());
    }

    #[test]
    fn test_prune_links_and_contacts() {
        let mut p = person();
        p.links = vec![
            Link::new("Bundestag.de", "https://www.bundestag.de/x"),
            Link::new("Homepage", " "),
        ];
        p.contact_details = vec![ContactDetail::new("phone", "Telefon", "")];
        p.prune();

        assert_eq!(p.links.len(), 1);
        assert!(p.contact_details.is_empty());
    }
}
