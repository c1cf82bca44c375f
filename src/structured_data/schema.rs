use chrono::{DateTime, FixedOffset};
use serde::Serialize;

const SCHEMA_CONTEXT: &str = "http://schema.org";

/// Serializes a single value as-is and a list as a JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(mut items: Vec<T>) -> Self {
        if items.len() == 1 {
            OneOrMany::One(items.remove(0))
        } else {
            OneOrMany::Many(items)
        }
    }
}

/// Top-level JSON-LD document.
#[derive(Debug, Clone, Serialize)]
pub struct JsonLd {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(flatten)]
    pub thing: Thing,
}

impl JsonLd {
    pub fn new(thing: impl Into<Thing>) -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            thing: thing.into(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Thing {
    Organization(Organization),
    Event(Box<Event>),
}

impl From<Organization> for Thing {
    fn from(org: Organization) -> Self {
        Thing::Organization(org)
    }
}

impl From<Event> for Thing {
    fn from(event: Event) -> Self {
        Thing::Event(Box::new(event))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
    pub logo: String,
    pub same_as: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub same_as: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub same_as: String,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub price: String,
    pub price_currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Creator {
    Organization(Organization),
    Person(Person),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativeWork {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub creator: OneOrMany<Creator>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub start_date: DateTime<FixedOffset>,
    pub end_date: DateTime<FixedOffset>,
    pub url: String,
    pub same_as: OneOrMany<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Place>,
    pub offers: OneOrMany<Offer>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub performer: Vec<Person>,
    pub work_performed: CreativeWork,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org() -> Organization {
        Organization {
            kind: "Organization",
            name: "PyCon SK".to_string(),
            url: "https://pycon.sk".to_string(),
            logo: "https://pycon.sk/logo.png".to_string(),
            same_as: vec!["https://github.com/pyconsk".to_string()],
        }
    }

    #[test]
    fn test_json_ld_has_context_and_type() {
        let value = serde_json::to_value(JsonLd::new(org())).unwrap();
        assert_eq!(value["@context"], "http://schema.org");
        assert_eq!(value["@type"], "Organization");
        assert_eq!(value["sameAs"][0], "https://github.com/pyconsk");
    }

    #[test]
    fn test_one_or_many_from_vec() {
        let one: OneOrMany<String> = vec!["a".to_string()].into();
        let many: OneOrMany<String> = vec!["a".to_string(), "b".to_string()].into();
        assert_eq!(serde_json::to_value(&one).unwrap(), serde_json::json!("a"));
        assert_eq!(
            serde_json::to_value(&many).unwrap(),
            serde_json::json!(["a", "b"])
        );
    }

    #[test]
    fn test_offer_skips_missing_fields() {
        let offer = Offer {
            kind: "Offer",
            name: None,
            category: None,
            price: "0".to_string(),
            price_currency: "EUR".to_string(),
            url: None,
        };
        let value = serde_json::to_value(&offer).unwrap();
        assert_eq!(value["priceCurrency"], "EUR");
        assert!(value.get("name").is_none());
        assert!(value.get("url").is_none());
    }
}
