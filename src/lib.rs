//! PyCon SK conference website.
//!
//! Localized pages under `/{locale}/...` plus a generated `/sitemap.xml`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod i18n;
pub mod locale;
pub mod pages;
pub mod render;
pub mod routes;
pub mod server;
pub mod sitemap;
pub mod structured_data;

pub use error::SiteError;
pub use server::{build_router, SharedSite, Site};
