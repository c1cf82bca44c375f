//! Integration tests for the PyCon SK website
//!
//! These tests drive the complete router in-process: locale gate, page
//! handlers, renderer, sitemap and static files.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use proptest::prelude::*;
use tempfile::TempDir;
use tower::ServiceExt;

use pycon_sk_web::config::Config;
use pycon_sk_web::i18n::LocaleRegistry;
use pycon_sk_web::pages::{PageMetaDef, PageRegistry, SITE_PAGES};
use pycon_sk_web::render::SiteRenderer;
use pycon_sk_web::routes::{Page, RouteParams, RouteTable};
use pycon_sk_web::{build_router, Site};

// ==================== Test Helpers ====================

fn test_router() -> Router {
    let site = Site::new(Config::default()).expect("site should build");
    build_router(Arc::new(site)).expect("router should build")
}

/// Router whose page registry lacks `missing_page`
fn router_without_page(missing_page: &str) -> Router {
    let table: Vec<PageMetaDef> = SITE_PAGES
        .iter()
        .filter(|p| p.key != missing_page)
        .copied()
        .collect();

    let config = Config::default();
    let locales = LocaleRegistry::with_default(&config.default_locale).unwrap();
    let pages = PageRegistry::from_table(&table).unwrap();
    let routes = RouteTable::site().unwrap();
    let renderer = Box::new(SiteRenderer::for_routes(&routes));

    let site = Site::from_parts(config, locales, pages, routes, renderer);
    build_router(Arc::new(site)).unwrap()
}

async fn get(router: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("router is infallible");

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

// ==================== Localized Page Tests ====================

#[tokio::test]
async fn test_every_page_renders_in_every_locale() {
    for code in ["en", "sk"] {
        for page in Page::ALL {
            let uri = format!("/{}/{}", code, page.slug());
            let (status, content_type, body) = get(test_router(), &uri).await;

            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert!(content_type.unwrap().starts_with("text/html"));
            assert!(
                body.contains(&format!(r#"<html lang="{}">"#, code)),
                "{} should render in {}",
                uri,
                code
            );
        }
    }
}

#[tokio::test]
async fn test_unsupported_locale_is_not_found() {
    let (status, _, body) = get(test_router(), "/fr/index.html").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!body.contains("<html"));
}

#[tokio::test]
async fn test_unknown_page_is_not_found() {
    let (status, _, _) = get(test_router(), "/en/about.html").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_post_is_not_allowed() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/en/index.html")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_index_structured_data_uses_request_locale() {
    let (_, _, body) = get(test_router(), "/en/index.html").await;
    assert!(body.contains(r#""url":"https://pycon.sk/en/""#));
    assert!(body.contains("Supporter Early Bird"));
}

#[tokio::test]
async fn test_meetup_page() {
    let (status, _, body) = get(test_router(), "/sk/ba-01-meetup.html").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Prvý Bratislavský Python Meetup"));
    assert!(body.contains(r#"hreflang="en" href="/en/ba-01-meetup.html""#));
}

// ==================== Sitemap Tests ====================

#[tokio::test]
async fn test_sitemap_response() {
    let (status, content_type, body) = get(test_router(), "/sitemap.xml").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/xml"));
    assert!(body.contains("<urlset"));
    assert!(body.contains("<loc>https://pycon.sk/en/index.html</loc>"));
    assert!(body.contains("<loc>https://pycon.sk/sk/index.html</loc>"));
    assert!(body.contains("<loc>https://pycon.sk/sitemap.xml</loc>"));
}

#[tokio::test]
async fn test_sitemap_entry_count() {
    let routes = RouteTable::site().unwrap();
    let statics = routes
        .iter()
        .filter(|r| r.params() == RouteParams::Static)
        .count();
    let localized = routes
        .iter()
        .filter(|r| r.params() == RouteParams::Localized)
        .count();
    let locales = LocaleRegistry::with_default("sk").unwrap().len();

    let (_, _, body) = get(test_router(), "/sitemap.xml").await;
    assert_eq!(body.matches("<url>").count(), statics + localized * locales);
}

#[tokio::test]
async fn test_sitemap_one_entry_per_locale_and_route() {
    let routes = RouteTable::site().unwrap();
    let locales = LocaleRegistry::with_default("sk").unwrap();
    let (_, _, body) = get(test_router(), "/sitemap.xml").await;

    for route in routes.iter().filter(|r| r.params() == RouteParams::Localized) {
        for locale in locales.locales() {
            let loc = format!("<loc>https://pycon.sk{}</loc>", route.path_for(locale));
            assert_eq!(body.matches(&loc).count(), 1, "{}", loc);
        }
    }
}

#[tokio::test]
async fn test_sitemap_fails_when_page_missing_from_registry() {
    let (status, _, body) = get(router_without_page("meetup.html"), "/sitemap.xml").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.contains("<urlset"));
}

#[tokio::test]
async fn test_pages_still_render_when_registry_incomplete() {
    let (status, _, _) = get(router_without_page("meetup.html"), "/en/meetup.html").await;
    assert_eq!(status, StatusCode::OK);
}

// ==================== Static Files ====================

#[tokio::test]
async fn test_static_files_served() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("css")).unwrap();
    std::fs::write(temp_dir.path().join("css/style.css"), "body { margin: 0; }").unwrap();

    let config = Config {
        static_dir: temp_dir.path().to_str().unwrap().to_string(),
        ..Config::default()
    };
    let router = build_router(Arc::new(Site::new(config).unwrap())).unwrap();

    let (status, _, body) = get(router, "/static/css/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "body { margin: 0; }");
}

// ==================== Property Tests ====================

proptest! {
    #[test]
    fn prop_unsupported_locales_are_not_found(
        code in "[a-zA-Z0-9_-]{1,8}",
        page_index in 0usize..Page::ALL.len(),
    ) {
        prop_assume!(code != "en" && code != "sk");

        let uri = format!("/{}/{}", code, Page::ALL[page_index].slug());
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (status, _, _) = runtime.block_on(get(test_router(), &uri));

        prop_assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
