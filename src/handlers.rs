//! Page handlers: build the variables bundle for each page and hand it to
//! the renderer.

use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use serde::Serialize;
use tracing::debug;

use crate::error::SiteError;
use crate::i18n::Locale;
use crate::locale::ActiveLocale;
use crate::routes::Page;
use crate::server::{SharedSite, Site};
use crate::sitemap;
use crate::structured_data::{
    conference_event, meetup_event, pycon_organization, spy_organization, JsonLd,
};

pub const LOGO_PYCON: &str = "images/pycon_sk_logo_notext.png";
pub const LOGO_MEETUP_BA: &str = "images/bratislava_logo.png";

/// Navigation entries that can be highlighted as active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavItem {
    Speaking,
    Sponsoring,
    Tickets,
    Coc,
    Spy,
    Meetup,
}

/// The same page in another locale, for `hreflang` links and the language
/// switcher.
#[derive(Debug, Clone, Serialize)]
pub struct Alternate {
    pub lang_code: Locale,
    pub native_name: &'static str,
    pub href: String,
}

/// Everything a template needs to render a page.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateVariables {
    pub title: String,
    pub heading: String,
    pub logo: &'static str,
    pub ld_json: JsonLd,
    pub lang_code: Locale,
    pub active_nav: Option<NavItem>,
    pub alternates: Vec<Alternate>,
}

impl TemplateVariables {
    /// Defaults shared by every page: translated site title, conference
    /// logo and the organization's structured data.
    fn base(origin: &str, locale: Locale) -> Self {
        let strings = locale.strings();
        Self {
            title: strings.site_title.to_string(),
            heading: strings.heading_index.to_string(),
            logo: LOGO_PYCON,
            ld_json: JsonLd::new(pycon_organization(origin)),
            lang_code: locale,
            active_nav: None,
            alternates: Vec::new(),
        }
    }

    fn nav(mut self, item: NavItem) -> Self {
        self.active_nav = Some(item);
        self
    }

    fn heading(mut self, heading: &str) -> Self {
        self.heading = heading.to_string();
        self
    }
}

/// Build the variables bundle for a page in the given locale.
///
/// # Errors
/// * `ConfigurationMismatch` for a meetup page without meetup data
/// * `InvalidPageMeta` if event data carries a malformed timestamp
pub fn page_variables(
    page: Page,
    locale: Locale,
    origin: &str,
) -> Result<TemplateVariables, SiteError> {
    let strings = locale.strings();
    let base = TemplateVariables::base(origin, locale);

    let vars = match page {
        Page::Index => TemplateVariables {
            ld_json: JsonLd::new(conference_event(origin, locale)?),
            ..base
        },
        Page::Speakers => base.nav(NavItem::Speaking).heading(strings.heading_speakers),
        Page::Speaking => base.nav(NavItem::Speaking).heading(strings.heading_speaking),
        Page::Sponsoring => base.nav(NavItem::Sponsoring).heading(strings.heading_sponsoring),
        Page::Tickets => base.nav(NavItem::Tickets).heading(strings.heading_tickets),
        Page::CodeOfConduct => base.nav(NavItem::Coc).heading(strings.heading_code_of_conduct),
        Page::Spy => TemplateVariables {
            title: "SPy o.z.".to_string(),
            ld_json: JsonLd::new(spy_organization(origin, locale)),
            ..base.nav(NavItem::Spy).heading(strings.heading_spy)
        },
        Page::ThankYou => base.heading(strings.heading_thank_you),
        Page::Meetup => base.nav(NavItem::Meetup).heading(strings.heading_meetup),
        Page::BaMeetup(number) => {
            let event = meetup_event(origin, locale, number).ok_or_else(|| {
                SiteError::ConfigurationMismatch {
                    page: page.slug(),
                }
            })??;
            let heading = strings
                .heading_ba_meetup
                .replace("{number}", &number.to_string());
            TemplateVariables {
                logo: LOGO_MEETUP_BA,
                ld_json: JsonLd::new(event),
                ..base.nav(NavItem::Meetup).heading(&heading)
            }
        }
    };

    Ok(vars)
}

/// Render a page for the active locale.
pub fn render_page(
    site: &Site,
    page: Page,
    template: &str,
    locale: Locale,
) -> Result<Html<String>, SiteError> {
    debug!("Rendering {} for locale {}", template, locale);

    let mut vars = page_variables(page, locale, &site.config.site_origin)?;
    vars.alternates = site
        .locales
        .entries()
        .map(|(alternate, config)| Alternate {
            lang_code: alternate,
            native_name: config.native_name,
            href: format!("/{}/{}", alternate, template),
        })
        .collect();

    let body = site.renderer.render(template, &vars)?;
    Ok(Html(body))
}

/// Axum handler for a localized page.
pub async fn page(
    State(site): State<SharedSite>,
    ActiveLocale(locale): ActiveLocale,
    page: Page,
    template: String,
) -> Result<Html<String>, SiteError> {
    render_page(&site, page, &template, locale)
}

/// Axum handler for `/sitemap.xml`.
pub async fn sitemap(State(site): State<SharedSite>) -> Result<impl IntoResponse, SiteError> {
    let entries = site.sitemap_entries()?;
    debug!("Serving sitemap with {} entries", entries.len());

    Ok((
        [(header::CONTENT_TYPE, "application/xml")],
        sitemap::render_xml(&entries),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleRegistry;

    const ORIGIN: &str = "https://pycon.sk";

    fn locale(code: &str) -> Locale {
        LocaleRegistry::with_default("sk")
            .unwrap()
            .resolve(code)
            .unwrap()
    }

    #[test]
    fn test_base_variables() {
        let vars = page_variables(Page::ThankYou, locale("en"), ORIGIN).unwrap();
        assert_eq!(vars.title, "PyCon SK");
        assert_eq!(vars.logo, LOGO_PYCON);
        assert_eq!(vars.active_nav, None);
        assert_eq!(vars.lang_code.code(), "en");

        let value = serde_json::to_value(&vars.ld_json).unwrap();
        assert_eq!(value["@type"], "Organization");
        assert_eq!(value["name"], "PyCon SK");
    }

    #[test]
    fn test_index_carries_event() {
        let vars = page_variables(Page::Index, locale("sk"), ORIGIN).unwrap();
        let value = serde_json::to_value(&vars.ld_json).unwrap();
        assert_eq!(value["@type"], "Event");
        assert_eq!(value["url"], "https://pycon.sk/sk/");
    }

    #[test]
    fn test_speakers_highlights_speaking() {
        let vars = page_variables(Page::Speakers, locale("en"), ORIGIN).unwrap();
        assert_eq!(vars.active_nav, Some(NavItem::Speaking));
        assert_eq!(vars.heading, "Speakers");
    }

    #[test]
    fn test_spy_overrides_title() {
        let vars = page_variables(Page::Spy, locale("en"), ORIGIN).unwrap();
        assert_eq!(vars.title, "SPy o.z.");
        assert_eq!(vars.active_nav, Some(NavItem::Spy));
        let value = serde_json::to_value(&vars.ld_json).unwrap();
        assert_eq!(value["url"], "https://pycon.sk/en/spy.html");
    }

    #[test]
    fn test_meetup_page_uses_meetup_logo() {
        let vars = page_variables(Page::BaMeetup(2), locale("sk"), ORIGIN).unwrap();
        assert_eq!(vars.logo, LOGO_MEETUP_BA);
        assert_eq!(vars.active_nav, Some(NavItem::Meetup));
        assert_eq!(vars.heading, "Bratislavský Python Meetup #2");
    }

    #[test]
    fn test_unknown_meetup_is_configuration_error() {
        let result = page_variables(Page::BaMeetup(9), locale("en"), ORIGIN);
        assert!(matches!(
            result,
            Err(SiteError::ConfigurationMismatch { ref page }) if page == "ba-09-meetup.html"
        ));
    }

    #[test]
    fn test_nav_item_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&NavItem::Coc).unwrap(), "\"coc\"");
    }
}
