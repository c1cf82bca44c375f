//! Rendering of named page templates.
//!
//! Handlers only know a template name and a [`TemplateVariables`] bundle;
//! anything implementing [`Renderer`] can turn those into HTML. The site
//! ships `SiteRenderer`, which renders every page through one shared maud
//! layout.

use std::collections::HashSet;

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::error::SiteError;
use crate::handlers::{NavItem, TemplateVariables};
use crate::i18n::SiteStrings;
use crate::routes::{Endpoint, RouteTable};
use crate::structured_data::{Event, Thing};

pub trait Renderer: Send + Sync {
    /// Render `template` with `vars`.
    ///
    /// # Errors
    /// `TemplateMissing` if the template is unknown.
    fn render(&self, template: &str, vars: &TemplateVariables) -> Result<String, SiteError>;
}

pub struct SiteRenderer {
    templates: HashSet<String>,
}

impl SiteRenderer {
    pub fn new(templates: impl IntoIterator<Item = String>) -> Self {
        Self {
            templates: templates.into_iter().collect(),
        }
    }

    /// One template per page route of the table, named after its page
    /// identifier.
    pub fn for_routes(routes: &RouteTable) -> Self {
        Self::new(
            routes
                .iter()
                .filter(|route| matches!(route.endpoint(), Endpoint::Page(_)))
                .map(|route| route.page_id().to_string()),
        )
    }

    pub fn has_template(&self, template: &str) -> bool {
        self.templates.contains(template)
    }
}

impl Renderer for SiteRenderer {
    fn render(&self, template: &str, vars: &TemplateVariables) -> Result<String, SiteError> {
        if !self.has_template(template) {
            return Err(SiteError::TemplateMissing(template.to_string()));
        }

        // A literal "</" would close the script element early
        let ld_json = vars.ld_json.to_json()?.replace("</", "<\\/");

        Ok(layout(vars, &ld_json).into_string())
    }
}

fn nav_entries(strings: &SiteStrings) -> [(NavItem, &'static str, &'static str); 6] {
    [
        (NavItem::Speaking, strings.nav_speaking, "speaking.html"),
        (NavItem::Sponsoring, strings.nav_sponsoring, "sponsoring.html"),
        (NavItem::Tickets, strings.nav_tickets, "tickets.html"),
        (NavItem::Meetup, strings.nav_meetup, "meetup.html"),
        (NavItem::Coc, strings.nav_coc, "code-of-conduct.html"),
        (NavItem::Spy, strings.nav_spy, "spy.html"),
    ]
}

fn layout(vars: &TemplateVariables, ld_json: &str) -> Markup {
    let strings = vars.lang_code.strings();
    let lang = vars.lang_code.code();

    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (vars.title) }
                link rel="stylesheet" href="/static/css/style.css";
                @for alternate in &vars.alternates {
                    link rel="alternate" hreflang=(alternate.lang_code.code()) href=(alternate.href);
                }
                script type="application/ld+json" { (PreEscaped(ld_json)) }
            }
            body {
                header {
                    a href={ "/" (lang) "/index.html" } {
                        img src={ "/static/" (vars.logo) } alt=(strings.site_title);
                    }
                    nav {
                        ul {
                            li { a href={ "/" (lang) "/index.html" } { (strings.nav_home) } }
                            @for (item, label, slug) in nav_entries(strings) {
                                li class=[(vars.active_nav == Some(item)).then_some("active")] {
                                    a href={ "/" (lang) "/" (slug) } { (label) }
                                }
                            }
                        }
                    }
                }
                main {
                    h1 { (vars.heading) }
                    @if let Thing::Event(event) = &vars.ld_json.thing {
                        (event_details(event))
                    }
                }
                footer {
                    p { (strings.footer_organizer) }
                    p.languages {
                        (strings.language_switch) ": "
                        @for alternate in &vars.alternates {
                            @if alternate.lang_code == vars.lang_code {
                                strong { (alternate.native_name) } " "
                            } @else {
                                a href=(alternate.href) hreflang=(alternate.lang_code.code()) {
                                    (alternate.native_name)
                                }
                                " "
                            }
                        }
                    }
                }
            }
        }
    }
}

fn event_details(event: &Event) -> Markup {
    html! {
        section.event {
            h2 { (event.name) }
            p {
                time datetime=(event.start_date.to_rfc3339()) {
                    (event.start_date.format("%d.%m.%Y %H:%M").to_string())
                }
                " - "
                time datetime=(event.end_date.to_rfc3339()) {
                    (event.end_date.format("%d.%m.%Y %H:%M").to_string())
                }
            }
            @if let Some(place) = &event.location {
                p { (place.name) ", " (place.address) }
            }
            @if !event.performer.is_empty() {
                ul.performers {
                    @for person in &event.performer {
                        li { a href=(person.same_as) { (person.name) } }
                    }
                }
            }
        }
    }
}
