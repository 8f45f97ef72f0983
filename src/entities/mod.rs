// Entity Models - Popolo-style person/organization/membership schema
//
// Each entity has:
// - Deterministic identity (namespaced slug or link hash, see ids.rs)
// - Plain serde values, serialized as-is into the output document
// - Organizations additionally live in a registry keyed by source key

pub mod membership;
pub mod organization;
pub mod person;

pub use membership::{Area, Membership};
pub use organization::{
    Classification, ContactDetail, Identifier, Link, Organization, OrganizationRegistry,
    RegistryError,
};
pub use person::{Gender, Person};
