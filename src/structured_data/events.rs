use chrono::{DateTime, FixedOffset};

use super::schema::{CreativeWork, Creator, Event, Offer, OneOrMany, Organization, Person, Place};
use crate::error::SiteError;
use crate::i18n::Locale;

const LOGO_PATH: &str = "/static/images/pycon_sk_logo200_notext.png";
const TICKETS_URL: &str = "https://ti.to/pyconsk/2016";

const SOCIAL_PROFILES: [&str; 5] = [
    "https://facebook.com/pyconsk",
    "https://twitter.com/pyconsk",
    "https://www.linkedin.com/company/spy-o--z-",
    "https://github.com/pyconsk",
    "https://pyconsk.slack.com",
];

#[derive(Debug, Clone, Copy)]
struct PersonDef {
    name: &'static str,
    same_as: &'static str,
}

const FILIP: PersonDef = PersonDef {
    name: "Filip Kłębczyk",
    same_as: "https://pl.linkedin.com/in/fklebczyk",
};
const DANIEL: PersonDef = PersonDef {
    name: "Daniel Kontšek",
    same_as: "https://sk.linkedin.com/in/danielkontsek",
};
const RICHARD: PersonDef = PersonDef {
    name: "Richard Kellner",
    same_as: "https://sk.linkedin.com/in/richardkellner",
};
const TOMAS: PersonDef = PersonDef {
    name: "Tomáš Pytlíček",
    same_as: "https://plus.google.com/+Tom%C3%A1%C5%A1Pytl%C3%AD%C4%8Dek/posts",
};
const ADAM: PersonDef = PersonDef {
    name: "Adam Števko",
    same_as: "https://sk.linkedin.com/in/xenol",
};

#[derive(Debug, Clone, Copy)]
enum MeetupCreators {
    Persons(&'static [PersonDef]),
    Spy,
}

/// One Bratislava Python meetup.
#[derive(Debug, Clone, Copy)]
pub struct MeetupDef {
    pub number: u8,
    pub name: &'static str,
    pub starts: &'static str,
    pub ends: &'static str,
    same_as: &'static [&'static str],
    performers: &'static [PersonDef],
    creators: MeetupCreators,
}

pub static MEETUPS: [MeetupDef; 5] = [
    MeetupDef {
        number: 1,
        name: "Prvý Bratislavský Python Meetup",
        starts: "2015-07-07T18:00:00+01:00",
        ends: "2015-07-07T22:00:00+01:00",
        same_as: &[
            "https://www.facebook.com/events/800093356777151/",
            "http://lanyrd.com/2015/pyba/",
        ],
        performers: &[FILIP, DANIEL, RICHARD],
        creators: MeetupCreators::Persons(&[RICHARD, DANIEL]),
    },
    MeetupDef {
        number: 2,
        name: "Druhý Bratislavský Python Meetup",
        starts: "2015-08-04T18:00:00+01:00",
        ends: "2015-08-04T22:00:00+01:00",
        same_as: &[
            "https://www.facebook.com/events/405531022976000/",
            "http://lanyrd.com/2015/pyconsk/",
        ],
        performers: &[DANIEL, RICHARD],
        creators: MeetupCreators::Persons(&[RICHARD, DANIEL]),
    },
    MeetupDef {
        number: 3,
        name: "Tretí Bratislavský Python Meetup",
        starts: "2015-09-08T18:00:00+01:00",
        ends: "2015-09-08T22:00:00+01:00",
        same_as: &[
            "https://www.facebook.com/events/860134137403420/",
            "http://lanyrd.com/2015/bratislava-python-meetup-3/",
        ],
        performers: &[TOMAS],
        creators: MeetupCreators::Persons(&[RICHARD, DANIEL]),
    },
    MeetupDef {
        number: 4,
        name: "Štvrtý Bratislavský Python Meetup",
        starts: "2015-10-06T18:00:00+01:00",
        ends: "2015-10-06T22:00:00+01:00",
        same_as: &["https://www.facebook.com/events/1003712976319521/"],
        performers: &[ADAM],
        creators: MeetupCreators::Spy,
    },
    MeetupDef {
        number: 5,
        name: "Piaty Bratislavský Python Meetup",
        starts: "2015-11-10T18:00:00+01:00",
        ends: "2015-11-10T22:00:00+01:00",
        same_as: &["https://www.facebook.com/events/850999828331493/"],
        performers: &[DANIEL, RICHARD],
        creators: MeetupCreators::Spy,
    },
];

fn person(def: &PersonDef) -> Person {
    Person {
        kind: "Person",
        name: def.name.to_string(),
        same_as: def.same_as.to_string(),
    }
}

fn social_profiles() -> Vec<String> {
    SOCIAL_PROFILES.iter().map(|s| s.to_string()).collect()
}

fn timestamp(page: &str, value: &str) -> Result<DateTime<FixedOffset>, SiteError> {
    DateTime::parse_from_rfc3339(value).map_err(|e| SiteError::InvalidPageMeta {
        key: page.to_string(),
        reason: format!("bad event timestamp '{}': {}", value, e),
    })
}

/// The conference organization, used on every page without its own data.
pub fn pycon_organization(origin: &str) -> Organization {
    Organization {
        kind: "Organization",
        name: "PyCon SK".to_string(),
        url: origin.to_string(),
        logo: format!("{}{}", origin, LOGO_PATH),
        same_as: social_profiles(),
    }
}

/// The association running the conference, linked in the active locale.
pub fn spy_organization(origin: &str, locale: Locale) -> Organization {
    Organization {
        kind: "Organization",
        name: "SPy o.z.".to_string(),
        url: format!("{}/{}/spy.html", origin, locale),
        logo: format!("{}{}", origin, LOGO_PATH),
        same_as: social_profiles(),
    }
}

fn early_bird(name: &str, price: &str) -> Offer {
    Offer {
        kind: "Offer",
        name: Some(name.to_string()),
        category: Some("presale".to_string()),
        price: price.to_string(),
        price_currency: "EUR".to_string(),
        url: Some(TICKETS_URL.to_string()),
    }
}

/// PyCon SK 2016 itself.
pub fn conference_event(origin: &str, locale: Locale) -> Result<Event, SiteError> {
    let name = "PyCon SK 2016";
    Ok(Event {
        kind: "Event",
        name: name.to_string(),
        start_date: timestamp("index.html", "2016-03-11T09:00:00+01:00")?,
        end_date: timestamp("index.html", "2016-03-13T18:00:00+01:00")?,
        url: format!("{}/{}/", origin, locale),
        same_as: OneOrMany::Many(vec![
            "https://www.facebook.com/events/941546202585736/".to_string(),
        ]),
        location: None,
        offers: OneOrMany::Many(vec![
            early_bird("Supporter Early Bird", "50"),
            early_bird("Standard Early Bird", "20"),
            early_bird("Student Early Bird", "10"),
        ]),
        performer: Vec::new(),
        work_performed: CreativeWork {
            kind: "CreativeWork",
            name: name.to_string(),
            creator: OneOrMany::One(Creator::Organization(spy_organization(origin, locale))),
        },
    })
}

/// A numbered Bratislava meetup, or `None` if there is no such meetup.
pub fn meetup_event(
    origin: &str,
    locale: Locale,
    number: u8,
) -> Option<Result<Event, SiteError>> {
    let def = MEETUPS.iter().find(|m| m.number == number)?;
    let page = format!("ba-{:02}-meetup.html", def.number);

    let build = || -> Result<Event, SiteError> {
        let creator = match def.creators {
            MeetupCreators::Persons(people) => OneOrMany::Many(
                people.iter().map(|p| Creator::Person(person(p))).collect(),
            ),
            MeetupCreators::Spy => {
                OneOrMany::One(Creator::Organization(spy_organization(origin, locale)))
            }
        };

        Ok(Event {
            kind: "Event",
            name: def.name.to_string(),
            start_date: timestamp(&page, def.starts)?,
            end_date: timestamp(&page, def.ends)?,
            url: format!("{}/{}/{}", origin, locale, page),
            same_as: def
                .same_as
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .into(),
            location: Some(Place {
                kind: "Place",
                same_as: "https://progressbar.sk".to_string(),
                name: "Progressbar".to_string(),
                address: "Michalská 3, Bratislava".to_string(),
            }),
            offers: OneOrMany::One(Offer {
                kind: "Offer",
                name: None,
                category: None,
                price: "0".to_string(),
                price_currency: "EUR".to_string(),
                url: None,
            }),
            performer: def.performers.iter().map(person).collect(),
            work_performed: CreativeWork {
                kind: "CreativeWork",
                name: def.name.to_string(),
                creator,
            },
        })
    };

    Some(build())
}
