//! Page registry: SEO metadata keyed by locale-independent page identifier.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, FixedOffset};

use crate::error::SiteError;

/// Change frequency values for sitemap entries.
///
/// See: https://www.sitemaps.org/protocol.html#changefreqdef
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFreq {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Literal row of the page table, validated into a [`PageMeta`].
#[derive(Debug, Clone, Copy)]
pub struct PageMetaDef {
    pub key: &'static str,
    pub priority: f32,
    pub changefreq: ChangeFreq,
    /// RFC 3339 timestamp with offset
    pub last_modified: &'static str,
}

/// Validated metadata for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub key: &'static str,
    pub priority: f32,
    pub changefreq: ChangeFreq,
    pub last_modified: DateTime<FixedOffset>,
}

/// Immutable lookup table of page metadata.
#[derive(Debug, Clone)]
pub struct PageRegistry {
    entries: HashMap<&'static str, PageMeta>,
}

impl PageRegistry {
    /// Validate a page table.
    ///
    /// # Errors
    /// `InvalidPageMeta` on a duplicate key, a priority outside `[0, 1]` or a
    /// timestamp that is not RFC 3339.
    pub fn from_table(table: &[PageMetaDef]) -> Result<Self, SiteError> {
        let mut entries = HashMap::with_capacity(table.len());

        for def in table {
            let invalid = |reason: String| SiteError::InvalidPageMeta {
                key: def.key.to_string(),
                reason,
            };

            if !(0.0..=1.0).contains(&def.priority) {
                return Err(invalid(format!(
                    "priority {} is outside [0, 1]",
                    def.priority
                )));
            }

            let last_modified = DateTime::parse_from_rfc3339(def.last_modified)
                .map_err(|e| invalid(format!("bad lastmod '{}': {}", def.last_modified, e)))?;

            let meta = PageMeta {
                key: def.key,
                priority: def.priority,
                changefreq: def.changefreq,
                last_modified,
            };

            if entries.insert(def.key, meta).is_some() {
                return Err(invalid("duplicate key".to_string()));
            }
        }

        Ok(Self { entries })
    }

    /// Registry of every page the site serves.
    pub fn site() -> Result<Self, SiteError> {
        Self::from_table(SITE_PAGES)
    }

    pub fn get(&self, key: &str) -> Option<&PageMeta> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const fn page(
    key: &'static str,
    priority: f32,
    changefreq: ChangeFreq,
    last_modified: &'static str,
) -> PageMetaDef {
    PageMetaDef {
        key,
        priority,
        changefreq,
        last_modified,
    }
}

use ChangeFreq::{Monthly, Weekly, Yearly};

pub const SITE_PAGES: &[PageMetaDef] = &[
    page("sitemap.xml", 0.9, Weekly, "2015-10-26T22:05:00+00:00"),
    page("index.html", 1.0, Weekly, "2015-10-26T22:05:00+00:00"),
    page("sponsoring.html", 0.9, Weekly, "2015-10-26T22:05:00+00:00"),
    page("speaking.html", 0.9, Weekly, "2015-10-26T22:05:00+00:00"),
    page("speakers.html", 0.9, Weekly, "2015-10-31T23:45:00+00:00"),
    page("tickets.html", 1.0, Weekly, "2015-10-26T22:00:05+00:00"),
    page("spy.html", 0.75, Monthly, "2015-09-10T20:00:00+00:00"),
    page("code-of-conduct.html", 0.75, Monthly, "2015-09-10T20:00:00+00:00"),
    page("meetup.html", 0.66, Weekly, "2015-10-26T22:56:48+00:00"),
    page("ba-01-meetup.html", 0.5, Monthly, "2015-06-29T20:06:00+00:00"),
    page("ba-02-meetup.html", 0.5, Monthly, "2015-07-26T20:07:00+00:00"),
    page("ba-03-meetup.html", 0.5, Monthly, "2015-08-26T20:08:00+00:00"),
    page("ba-04-meetup.html", 0.5, Monthly, "2015-09-26T20:09:00+00:00"),
    page("ba-05-meetup.html", 0.5, Weekly, "2015-10-26T20:10:00+00:00"),
    page("thank-you.html", 0.1, Yearly, "2015-07-10T20:00:00+00:00"),
];
