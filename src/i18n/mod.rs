//! Internationalization (i18n) for the site.
//!
//! # Architecture
//!
//! - `registry`: the ordered set of supported locales and the default one
//! - `locale`: validated `Locale` type handed out by the registry
//! - `strings`: translated UI strings per locale
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::LocaleRegistry;
//!
//! let registry = LocaleRegistry::with_default("sk")?;
//! let english = registry.resolve("en")?;
//! let title = english.strings().site_title;
//! ```

mod locale;
mod registry;
mod strings;

pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::{SiteStrings, ENGLISH_STRINGS, SLOVAK_STRINGS};
