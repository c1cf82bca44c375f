//! schema.org structured data embedded in pages as JSON-LD.
//!
//! - `schema`: typed schema.org objects (Organization, Event, ...)
//! - `events`: the conference and meetup events the site describes

mod events;
mod schema;

pub use events::{conference_event, meetup_event, pycon_organization, spy_organization, MEETUPS};
pub use schema::{
    CreativeWork, Creator, Event, JsonLd, OneOrMany, Offer, Organization, Person, Place, Thing,
};
