//! Locale resolution for incoming requests.
//!
//! `resolve_locale` is a route layer: it runs after routing and before any
//! handler. When the matched route carries a `{locale}` segment the value is
//! validated and stored as a [`RequestLocale`] request extension; an
//! unsupported value ends the request with a 404. Handlers never see the
//! path parameter and read the locale through [`ActiveLocale`] instead.

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::{FromRequestParts, RawPathParams, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::i18n::Locale;
use crate::routes::LOCALE_PARAM;
use crate::server::SharedSite;

/// Locale validated for the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLocale(pub Locale);

/// Middleware validating the `{locale}` path segment.
pub async fn resolve_locale(
    State(site): State<SharedSite>,
    params: Option<RawPathParams>,
    mut request: Request,
    next: Next,
) -> Response {
    let code = params.as_ref().and_then(|params| {
        params
            .iter()
            .find(|(name, _)| *name == LOCALE_PARAM)
            .map(|(_, value)| value.to_string())
    });

    if let Some(code) = code {
        match site.locales.resolve(&code) {
            Ok(locale) => {
                request.extensions_mut().insert(RequestLocale(locale));
            }
            Err(e) => {
                debug!("Rejecting {}: {}", request.uri().path(), e);
                return e.into_response();
            }
        }
    }

    next.run(request).await
}

/// The locale a handler renders in: the request's validated locale, or the
/// configured default when the route has no locale segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveLocale(pub Locale);

#[async_trait]
impl FromRequestParts<SharedSite> for ActiveLocale {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        site: &SharedSite,
    ) -> Result<Self, Self::Rejection> {
        let locale = parts
            .extensions
            .get::<RequestLocale>()
            .map(|request_locale| request_locale.0)
            .unwrap_or_else(|| site.locales.default_locale());
        Ok(ActiveLocale(locale))
    }
}
