//! Route table: the explicit list of routes the site registers.
//!
//! Every route is declared here once, at startup. The axum router and the
//! sitemap generator are both derived from this table, so the sitemap never
//! has to introspect the router.

use std::collections::HashSet;
use std::sync::OnceLock;

use axum::http::Method;
use regex::Regex;

use crate::error::SiteError;
use crate::i18n::Locale;

/// Name of the path placeholder carrying the locale code.
pub const LOCALE_PARAM: &str = "locale";

const LOCALE_PREFIX: &str = "/{locale}/";

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{([^{}/]*)\}").expect("placeholder regex is valid"))
}

/// Logical pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Index,
    Speakers,
    Speaking,
    Sponsoring,
    Tickets,
    CodeOfConduct,
    Spy,
    ThankYou,
    Meetup,
    /// Numbered Bratislava meetup
    BaMeetup(u8),
}

impl Page {
    pub const ALL: [Page; 14] = [
        Page::Index,
        Page::Speakers,
        Page::Speaking,
        Page::Sponsoring,
        Page::Tickets,
        Page::CodeOfConduct,
        Page::Spy,
        Page::ThankYou,
        Page::Meetup,
        Page::BaMeetup(1),
        Page::BaMeetup(2),
        Page::BaMeetup(3),
        Page::BaMeetup(4),
        Page::BaMeetup(5),
    ];

    /// File name of the page under the locale segment.
    pub fn slug(&self) -> String {
        match self {
            Page::Index => "index.html".to_string(),
            Page::Speakers => "speakers.html".to_string(),
            Page::Speaking => "speaking.html".to_string(),
            Page::Sponsoring => "sponsoring.html".to_string(),
            Page::Tickets => "tickets.html".to_string(),
            Page::CodeOfConduct => "code-of-conduct.html".to_string(),
            Page::Spy => "spy.html".to_string(),
            Page::ThankYou => "thank-you.html".to_string(),
            Page::Meetup => "meetup.html".to_string(),
            Page::BaMeetup(number) => format!("ba-{:02}-meetup.html", number),
        }
    }
}

/// What a route serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Page(Page),
    Sitemap,
}

/// How a route's path is parameterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteParams {
    /// No placeholders
    Static,
    /// Exactly one placeholder, `{locale}`, as the first segment
    Localized,
}

#[derive(Debug, Clone)]
pub struct Route {
    path: String,
    methods: Vec<Method>,
    endpoint: Endpoint,
    params: RouteParams,
    page_id: String,
}

impl Route {
    /// Declare a route, deriving its parameterization and page identifier.
    ///
    /// # Errors
    /// `InvalidRoute` when the path does not start with `/`, no method is
    /// allowed, or the placeholders are anything other than none or a single
    /// leading `{locale}` segment.
    pub fn new(
        path: impl Into<String>,
        methods: Vec<Method>,
        endpoint: Endpoint,
    ) -> Result<Self, SiteError> {
        let path = path.into();
        let invalid = |reason: &str| SiteError::InvalidRoute {
            path: path.clone(),
            reason: reason.to_string(),
        };

        if !path.starts_with('/') {
            return Err(invalid("path must start with '/'"));
        }
        if methods.is_empty() {
            return Err(invalid("route allows no methods"));
        }

        let placeholders: Vec<&str> = placeholder_regex()
            .captures_iter(&path)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect();

        let (params, page_id) = match placeholders.as_slice() {
            [] => (RouteParams::Static, path.replace('/', "")),
            [LOCALE_PARAM] => match path.strip_prefix(LOCALE_PREFIX) {
                Some(rest) if !rest.is_empty() => (RouteParams::Localized, rest.to_string()),
                _ => return Err(invalid("'{locale}' must be the first path segment")),
            },
            [_] => return Err(invalid("only the '{locale}' placeholder is supported")),
            _ => return Err(invalid("routes may carry at most one placeholder")),
        };

        if page_id.is_empty() {
            return Err(invalid("path does not name a page"));
        }

        Ok(Self {
            path,
            methods,
            endpoint,
            params,
            page_id,
        })
    }

    /// Shorthand for a GET-only route.
    pub fn get(path: impl Into<String>, endpoint: Endpoint) -> Result<Self, SiteError> {
        Self::new(path, vec![Method::GET], endpoint)
    }

    /// Path template, e.g. `/{locale}/index.html`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn accepts(&self, method: &Method) -> bool {
        self.methods.contains(method)
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn params(&self) -> RouteParams {
        self.params
    }

    /// Locale-independent page identifier, e.g. `index.html`.
    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    /// Path in axum's `:param` syntax.
    pub fn axum_path(&self) -> String {
        placeholder_regex()
            .replace_all(&self.path, ":$1")
            .into_owned()
    }

    /// Concrete path for a locale. Static routes are returned unchanged.
    pub fn path_for(&self, locale: Locale) -> String {
        match self.params {
            RouteParams::Static => self.path.clone(),
            RouteParams::Localized => self.path.replacen("{locale}", locale.code(), 1),
        }
    }
}

/// Ordered, immutable list of routes.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// # Errors
    /// `InvalidRoute` when two routes share a path template.
    pub fn new(routes: Vec<Route>) -> Result<Self, SiteError> {
        let mut seen = HashSet::new();
        for route in &routes {
            if !seen.insert(route.path()) {
                return Err(SiteError::InvalidRoute {
                    path: route.path().to_string(),
                    reason: "registered twice".to_string(),
                });
            }
        }
        Ok(Self { routes })
    }

    /// Every route of the site: one localized route per page, then the
    /// sitemap.
    pub fn site() -> Result<Self, SiteError> {
        let mut routes = Page::ALL
            .iter()
            .map(|page| Route::get(format!("{}{}", LOCALE_PREFIX, page.slug()), Endpoint::Page(*page)))
            .collect::<Result<Vec<_>, _>>()?;
        routes.push(Route::get("/sitemap.xml", Endpoint::Sitemap)?);
        Self::new(routes)
    }

    /// Routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Keep only the routes matching `keep`; used to assemble smaller sites.
    pub fn filter(&self, keep: impl Fn(&Route) -> bool) -> Self {
        Self {
            routes: self.routes.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }
}
