//! HTTP server assembly.
//!
//! [`Site`] holds everything built once at startup. [`build_router`] turns
//! its route table into an axum router, gated by the locale resolver.

use std::sync::Arc;

use axum::extract::State;
use axum::middleware;
use axum::routing::{MethodFilter, MethodRouter};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::error::SiteError;
use crate::handlers;
use crate::i18n::LocaleRegistry;
use crate::locale::{resolve_locale, ActiveLocale};
use crate::pages::PageRegistry;
use crate::render::{Renderer, SiteRenderer};
use crate::routes::{Endpoint, Route, RouteTable};
use crate::sitemap::{self, SitemapEntry};

/// Immutable site state shared by all requests.
pub struct Site {
    pub config: Config,
    pub locales: LocaleRegistry,
    pub pages: PageRegistry,
    pub routes: RouteTable,
    pub renderer: Box<dyn Renderer>,
}

pub type SharedSite = Arc<Site>;

impl Site {
    /// Assemble the full site from configuration.
    ///
    /// # Errors
    /// Any validation failure of the locale registry, page table or route
    /// table.
    pub fn new(config: Config) -> Result<Self, SiteError> {
        let locales = LocaleRegistry::with_default(&config.default_locale)?;
        let pages = PageRegistry::site()?;
        let routes = RouteTable::site()?;
        let renderer = Box::new(SiteRenderer::for_routes(&routes));

        Ok(Self::from_parts(config, locales, pages, routes, renderer))
    }

    pub fn from_parts(
        config: Config,
        locales: LocaleRegistry,
        pages: PageRegistry,
        routes: RouteTable,
        renderer: Box<dyn Renderer>,
    ) -> Self {
        Self {
            config,
            locales,
            pages,
            routes,
            renderer,
        }
    }

    /// Sitemap entries for the current route table.
    pub fn sitemap_entries(&self) -> Result<Vec<SitemapEntry>, SiteError> {
        sitemap::generate(
            &self.routes,
            &self.pages,
            &self.locales,
            &self.config.site_origin,
        )
    }
}

fn method_filter(route: &Route) -> Result<MethodFilter, SiteError> {
    route
        .methods()
        .iter()
        .map(|method| {
            MethodFilter::try_from(method.clone()).map_err(|_| SiteError::InvalidRoute {
                path: route.path().to_string(),
                reason: format!("unsupported method {}", method),
            })
        })
        .reduce(|acc, filter| Ok(acc?.or(filter?)))
        .unwrap_or_else(|| {
            Err(SiteError::InvalidRoute {
                path: route.path().to_string(),
                reason: "route allows no methods".to_string(),
            })
        })
}

fn method_router(route: &Route, filter: MethodFilter) -> MethodRouter<SharedSite> {
    match route.endpoint() {
        Endpoint::Page(page) => {
            let template = route.page_id().to_string();
            MethodRouter::new().on(
                filter,
                move |state: State<SharedSite>, locale: ActiveLocale| {
                    handlers::page(state, locale, page, template.clone())
                },
            )
        }
        Endpoint::Sitemap => MethodRouter::new().on(filter, handlers::sitemap),
    }
}

/// Build the router for every route of the site's table.
///
/// # Errors
/// `InvalidRoute` if a route allows a method axum cannot route on.
pub fn build_router(site: SharedSite) -> Result<Router, SiteError> {
    let mut router = Router::new();

    for route in site.routes.iter() {
        let filter = method_filter(route)?;
        router = router.route(&route.axum_path(), method_router(route, filter));
    }

    info!(
        "Registered {} routes for locales {:?}",
        site.routes.len(),
        site.locales.locales().map(|l| l.code()).collect::<Vec<_>>()
    );

    let router = router
        .route_layer(middleware::from_fn_with_state(site.clone(), resolve_locale))
        .nest_service("/static", ServeDir::new(&site.config.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(site);

    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Method;

    #[test]
    fn test_site_new_defaults() {
        let site = Site::new(Config::default()).unwrap();
        assert_eq!(site.locales.default_locale().code(), "sk");
        assert!(!site.routes.is_empty());
        assert!(site.sitemap_entries().is_ok());
    }

    #[test]
    fn test_site_new_rejects_unknown_default_locale() {
        let config = Config {
            default_locale: "de".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            Site::new(config),
            Err(SiteError::UnknownDefaultLocale(_))
        ));
    }

    #[test]
    fn test_method_filter_combines_methods() {
        let route = Route::new(
            "/sitemap.xml",
            vec![Method::GET, Method::HEAD],
            Endpoint::Sitemap,
        )
        .unwrap();
        assert!(method_filter(&route).is_ok());
    }

    #[tokio::test]
    async fn test_build_router() {
        let site = Arc::new(Site::new(Config::default()).unwrap());
        assert!(build_router(site).is_ok());
    }
}
