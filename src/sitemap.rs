//! Sitemap generation.
//!
//! Entries are derived from the route table: static routes yield one entry,
//! locale routes one entry per supported locale. Every route must have a
//! page registry entry; a missing one is reported, never skipped.

use chrono::{DateTime, FixedOffset};
use tracing::error;

use crate::error::SiteError;
use crate::i18n::LocaleRegistry;
use crate::pages::{ChangeFreq, PageRegistry};
use crate::routes::{RouteParams, RouteTable};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Represents a single URL entry in the sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: DateTime<FixedOffset>,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

impl SitemapEntry {
    fn to_xml(&self) -> String {
        let mut xml = String::from("<url>");
        xml.push_str(&format!("<loc>{}</loc>", escape_xml(&self.loc)));
        xml.push_str(&format!(
            "<lastmod>{}</lastmod>",
            self.lastmod.format("%Y-%m-%dT%H:%M:%S%:z")
        ));
        xml.push_str(&format!("<changefreq>{}</changefreq>", self.changefreq));
        xml.push_str(&format!("<priority>{}</priority>", self.priority));
        xml.push_str("</url>");
        xml
    }
}

/// Escapes XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Build the sitemap entries in registration order, then locale order.
///
/// # Errors
/// `ConfigurationMismatch` when a GET route's page identifier is missing
/// from the page registry.
pub fn generate(
    routes: &RouteTable,
    pages: &PageRegistry,
    locales: &LocaleRegistry,
    origin: &str,
) -> Result<Vec<SitemapEntry>, SiteError> {
    let origin = origin.trim_end_matches('/');
    let mut entries = Vec::new();

    for route in routes.iter().filter(|r| r.accepts(&axum::http::Method::GET)) {
        let meta = pages.get(route.page_id()).ok_or_else(|| {
            error!(
                "Route {} maps to page '{}' which is missing from the page registry",
                route.path(),
                route.page_id()
            );
            SiteError::ConfigurationMismatch {
                page: route.page_id().to_string(),
            }
        })?;

        let entry = |path: String| SitemapEntry {
            loc: format!("{}{}", origin, path),
            lastmod: meta.last_modified,
            changefreq: meta.changefreq,
            priority: meta.priority,
        };

        match route.params() {
            RouteParams::Static => entries.push(entry(route.path().to_string())),
            RouteParams::Localized => {
                entries.extend(locales.locales().map(|locale| entry(route.path_for(locale))))
            }
        }
    }

    Ok(entries)
}

/// Serialize entries as a `urlset` document.
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<urlset xmlns="{}">"#, SITEMAP_NS));
    xml.push('\n');
    for entry in entries {
        xml.push_str(&entry.to_xml());
        xml.push('\n');
    }
    xml.push_str("</urlset>\n");
    xml
}
